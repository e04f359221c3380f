// std
pub use std::collections::HashSet;
pub use std::io::Cursor;
pub use std::num::NonZeroUsize;
pub use std::path::PathBuf;
pub use std::sync::{Arc, Mutex};
pub use std::time::{Duration, Instant};

// external crates
pub use eframe::{
    CreationContext,
    egui::{
        self, CentralPanel, Color32, Context, Image, Layout, Rect, RichText, Spinner, TextEdit,
        TextStyle, TextureHandle, Ui, Vec2,
    },
};
pub use image::{DynamicImage, GenericImageView};
pub use log::{debug, warn};
pub use lru::LruCache;

// crate modules
pub use crate::{
    app::SliderApp,
    cache::{
        SharedImageCache,
        image_cache::{LoadedImage, SlideImage},
        load_image_async, new_image_cache,
        texture_cache::TextureCache,
    },
    carousel::Carousel,
    config::*,
    error::{AppError, FetchError},
    fetch::FetchController,
    model::{FetchState, ImageItem, ImageList},
    slider::SlideSelector,
    source::{PageRequest, PageSource, WebPageSource},
    ui::{
        draw_centered_text, draw_slide_image, draw_spinner,
        status::{Status, StatusLevel, StatusLine},
    },
    view::SliderView,
};
