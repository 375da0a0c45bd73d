//! Paint model shared between UI and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - decoded image handles used as fill sources
//!
//! Geometry types remain in `coords` and `geom`.

pub mod color;
pub mod image;

pub use color::Color;
pub use image::ImageHandle;
