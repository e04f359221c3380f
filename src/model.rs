//! Data returned by the image list endpoint.

use serde::{Deserialize, Deserializer};

/// One record of the image list. Fields other than `id` and `download_url`
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageItem {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub download_url: String,
}

impl ImageItem {
    pub fn new(id: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            download_url: download_url.into(),
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// Ordered images of one fetched page. Replaced wholesale, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList(Vec<ImageItem>);

impl ImageList {
    pub fn new(items: Vec<ImageItem>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageItem> {
        self.0.iter()
    }

    /// Download URLs in display order.
    #[cfg(test)]
    pub fn urls(&self) -> Vec<String> {
        self.0.iter().map(|item| item.download_url.clone()).collect()
    }
}

impl From<Vec<ImageItem>> for ImageList {
    fn from(items: Vec<ImageItem>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a ImageItem;
    type IntoIter = std::slice::Iter<'a, ImageItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lifecycle of the most recent page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
