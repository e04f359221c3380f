use crate::prelude::*;

/// Fetches image lists over HTTP.
///
/// Sends `GET <url>?page=<page>&limit=<limit>` and expects a JSON array of
/// `{ id, download_url }` objects. Transport failures, non-2xx statuses,
/// malformed bodies and a `null` body all become a [`FetchError`].
#[derive(Clone, Default)]
pub struct WebPageSource {
    client: reqwest::Client,
}

impl WebPageSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PageSource for WebPageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<ImageList, FetchError> {
        let url = request.endpoint();
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to GET {}: {}", url, e)))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                status: resp.status().as_u16(),
                url,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| {
            FetchError::Network(format!("Failed to read body from {}: {}", url, e))
        })?;

        let items: Option<Vec<ImageItem>> =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        items.map(ImageList::new).ok_or(FetchError::EmptyBody)
    }
}
