//! Texture cache for egui.

use crate::prelude::*;
use std::collections::HashMap;

/// GPU textures of decoded slides, keyed by download URL.
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        debug!("TextureCache created");
        Self {
            textures: HashMap::new(),
        }
    }

    /// Fetch the texture for `loaded`, uploading it on first use.
    pub fn get_or_upload(&mut self, ctx: &egui::Context, loaded: &LoadedImage) -> TextureHandle {
        if let Some(handle) = self.textures.get(&loaded.url) {
            return handle.clone();
        }
        debug!("TextureCache upload: {}", loaded.url);
        let handle = ctx.load_texture(
            format!("slide:{}", loaded.url),
            to_color_image(&loaded.image),
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(loaded.url.clone(), handle.clone());
        handle
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn clear(&mut self) {
        debug!("TextureCache cleared");
        self.textures.clear();
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a decoded image into egui's pixel format.
pub fn to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let (w, h) = image.dimensions();
    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_image_keeps_dimensions() {
        let img = DynamicImage::new_rgba8(5, 2);
        let color = to_color_image(&img);
        assert_eq!(color.size, [5, 2]);
        assert_eq!(color.pixels.len(), 10);
    }

    #[test]
    fn uploads_each_url_once() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new();
        let loaded = LoadedImage {
            image: Arc::new(DynamicImage::new_rgba8(2, 2)),
            url: "u1".to_string(),
        };
        let first = cache.get_or_upload(&ctx, &loaded);
        let second = cache.get_or_upload(&ctx, &loaded);
        assert_eq!(first.id(), second.id());
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
