//! Coordinate types shared by the geometry kernel, the draw stream and UI.
//!
//! Canonical space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Screen space and surface space use the same axes; they differ only by the
//! host-supplied origin of the surface on screen.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
