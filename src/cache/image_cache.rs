//! LRU cache for decoded slide images and async image loading.

use crate::prelude::*;
use std::collections::HashMap;

/// A decoded slide image. Clones share the pixel buffer.
#[derive(Clone)]
pub struct LoadedImage {
    pub image: Arc<DynamicImage>,
    pub url: String,
}

/// Where a slide's pixels are at.
#[derive(Clone)]
pub enum SlideImage {
    NotRequested,
    Loading,
    Loaded(LoadedImage),
    Failed(String),
}

/// Decoded images keyed by download URL, plus the URLs currently being
/// fetched and the ones that failed.
pub struct ImageCache {
    lru: LruCache<String, LoadedImage>,
    loading: HashSet<String>,
    failed: HashMap<String, String>,
}

/// Shared image cache.
pub type SharedImageCache = Arc<Mutex<ImageCache>>;

/// Create a new shared image cache holding up to `size` decoded images.
pub fn new_image_cache(size: usize) -> SharedImageCache {
    Arc::new(Mutex::new(ImageCache::new(size)))
}

impl ImageCache {
    pub fn new(size: usize) -> Self {
        Self {
            lru: LruCache::new(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN)),
            loading: HashSet::new(),
            failed: HashMap::new(),
        }
    }

    /// Status of `url` without touching its recency.
    pub fn status(&self, url: &str) -> SlideImage {
        match self.lru.peek(url) {
            Some(loaded) => SlideImage::Loaded(loaded.clone()),
            None => self.pending_status(url),
        }
    }

    /// Status of the slide on screen. A hit marks it most recently used, so
    /// the visible image is the last one to be evicted.
    pub fn current(&mut self, url: &str) -> SlideImage {
        match self.lru.get(url) {
            Some(loaded) => SlideImage::Loaded(loaded.clone()),
            None => self.pending_status(url),
        }
    }

    fn pending_status(&self, url: &str) -> SlideImage {
        if self.loading.contains(url) {
            SlideImage::Loading
        } else if let Some(msg) = self.failed.get(url) {
            SlideImage::Failed(msg.clone())
        } else {
            SlideImage::NotRequested
        }
    }

    /// `true` once `url` is cached, in flight or known to fail.
    pub fn is_requested(&self, url: &str) -> bool {
        self.lru.contains(url) || self.loading.contains(url) || self.failed.contains_key(url)
    }

    pub fn capacity(&self) -> usize {
        self.lru.cap().get()
    }

    /// Mark `url` as loading. Returns `false` if it is already cached,
    /// in flight or known to fail.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.is_requested(url) {
            return false;
        }
        self.loading.insert(url.to_string());
        true
    }

    pub fn finish(&mut self, url: &str, result: Result<DynamicImage, AppError>) {
        self.loading.remove(url);
        match result {
            Ok(image) => {
                let url = url.to_string();
                let image = Arc::new(image);
                self.lru.put(url.clone(), LoadedImage { image, url });
            }
            Err(e) => {
                self.failed.insert(url.to_string(), e.to_string());
            }
        }
    }

    /// Forget failures so that a new list can retry them. Decoded images
    /// stay cached.
    pub fn clear_failures(&mut self) {
        self.failed.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lru.len()
    }
}

/// Download the raw bytes of an image.
pub async fn download_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, AppError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to GET {}: {}", url, e)))?;

    if !resp.status().is_success() {
        return Err(AppError::NetworkError(format!(
            "HTTP error {} for {}",
            resp.status(),
            url
        )));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to read bytes from {}: {}", url, e)))?;

    Ok(bytes.to_vec())
}

/// Asynchronously download and decode a slide image into the cache.
pub async fn load_image_async(
    url: String,
    client: reqwest::Client,
    image_cache: SharedImageCache,
    ctx: Option<egui::Context>,
) {
    match image_cache.lock() {
        Ok(mut cache) => {
            if !cache.begin(&url) {
                return;
            }
        }
        Err(_) => return,
    }

    let result = match download_bytes(&client, &url).await {
        Ok(buf) => tokio::task::spawn_blocking(move || image::load_from_memory(&buf))
            .await
            .map_err(|e| AppError::NetworkError(format!("Decode task failed: {}", e)))
            .and_then(|decoded| decoded.map_err(AppError::from)),
        Err(e) => Err(e),
    };

    match &result {
        Ok(img) => debug!("Loaded {} ({}x{})", url, img.width(), img.height()),
        Err(e) => warn!("Failed to load {}: {}", url, e),
    }

    if let Ok(mut cache) = image_cache.lock() {
        cache.finish(&url, result);
    }
    if let Some(ctx) = ctx {
        ctx.request_repaint();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use mockito::Server;

    pub(crate) fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(w, h));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
        buf.into_inner()
    }

    #[test]
    fn begin_only_once_per_url() {
        let mut cache = ImageCache::new(2);
        assert!(matches!(cache.status("u1"), SlideImage::NotRequested));
        assert!(cache.begin("u1"));
        assert!(!cache.begin("u1"));
        assert!(matches!(cache.status("u1"), SlideImage::Loading));
    }

    #[test]
    fn failures_are_remembered_until_cleared() {
        let mut cache = ImageCache::new(2);
        cache.begin("u1");
        cache.finish("u1", Err(AppError::NetworkError("boom".into())));
        assert!(matches!(cache.status("u1"), SlideImage::Failed(_)));
        assert!(!cache.begin("u1"));

        cache.clear_failures();
        assert!(cache.begin("u1"));
    }

    #[test]
    fn least_recent_image_is_evicted() {
        let mut cache = ImageCache::new(2);
        for url in ["u1", "u2", "u3"] {
            cache.begin(url);
            cache.finish(url, Ok(DynamicImage::new_rgba8(1, 1)));
        }
        assert_eq!(cache.len(), 2);
        assert!(matches!(cache.status("u1"), SlideImage::NotRequested));
        assert!(matches!(cache.status("u3"), SlideImage::Loaded(_)));
    }

    #[test]
    fn status_does_not_refresh_recency() {
        let mut cache = ImageCache::new(2);
        for url in ["u1", "u2"] {
            cache.begin(url);
            cache.finish(url, Ok(DynamicImage::new_rgba8(1, 1)));
        }
        assert!(matches!(cache.status("u1"), SlideImage::Loaded(_)));
        cache.begin("u3");
        cache.finish("u3", Ok(DynamicImage::new_rgba8(1, 1)));
        assert!(!cache.is_requested("u1"));
        assert!(cache.is_requested("u2"));
    }

    #[test]
    fn current_slide_is_evicted_last() {
        let mut cache = ImageCache::new(2);
        for url in ["u1", "u2"] {
            cache.begin(url);
            cache.finish(url, Ok(DynamicImage::new_rgba8(1, 1)));
        }
        assert!(matches!(cache.current("u1"), SlideImage::Loaded(_)));
        cache.begin("u3");
        cache.finish("u3", Ok(DynamicImage::new_rgba8(1, 1)));
        assert!(cache.is_requested("u1"));
        assert!(!cache.is_requested("u2"));
    }

    #[test]
    fn loaded_status_shares_pixels() {
        let mut cache = ImageCache::new(2);
        cache.begin("u1");
        cache.finish("u1", Ok(DynamicImage::new_rgba8(64, 64)));
        let (SlideImage::Loaded(a), SlideImage::Loaded(b)) = (cache.status("u1"), cache.current("u1"))
        else {
            panic!("image should be loaded");
        };
        assert!(Arc::ptr_eq(&a.image, &b.image));
        assert_eq!(cache.capacity(), 2);
    }

    #[tokio::test]
    async fn loads_and_decodes_remote_image() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/id/0/4/3")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(png_bytes(4, 3))
            .expect(1)
            .create_async()
            .await;

        let cache = new_image_cache(4);
        let url = format!("{}/id/0/4/3", server.url());
        let client = reqwest::Client::new();
        load_image_async(url.clone(), client.clone(), cache.clone(), None).await;
        // Already cached, no second request.
        load_image_async(url.clone(), client, cache.clone(), None).await;

        mock.assert_async().await;
        let status = cache.lock().expect("cache lock").status(&url);
        match status {
            SlideImage::Loaded(loaded) => assert_eq!(loaded.image.dimensions(), (4, 3)),
            _ => panic!("image should be loaded"),
        }
    }

    #[tokio::test]
    async fn http_error_marks_image_failed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing.png")
            .with_status(404)
            .create_async()
            .await;

        let cache = new_image_cache(4);
        let url = format!("{}/missing.png", server.url());
        load_image_async(url.clone(), reqwest::Client::new(), cache.clone(), None).await;

        let status = cache.lock().expect("cache lock").status(&url);
        match status {
            SlideImage::Failed(msg) => assert!(msg.contains("404")),
            _ => panic!("image should have failed"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_marks_image_failed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/garbage.png")
            .with_status(200)
            .with_body("definitely not an image")
            .create_async()
            .await;

        let cache = new_image_cache(4);
        let url = format!("{}/garbage.png", server.url());
        load_image_async(url.clone(), reqwest::Client::new(), cache.clone(), None).await;

        assert!(matches!(
            cache.lock().expect("cache lock").status(&url),
            SlideImage::Failed(_)
        ));
    }
}
