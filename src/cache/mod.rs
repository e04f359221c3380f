//! Image and texture caching.

pub mod image_cache;
pub mod texture_cache;
pub use image_cache::*;
pub use texture_cache::*;
