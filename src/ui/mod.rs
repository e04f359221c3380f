//! UI rendering and layout.

pub mod display;
pub mod image;
pub mod modules;
pub mod status;

pub use self::image::*;
pub use self::status::*;
