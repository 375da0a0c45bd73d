//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - scope commands to analytic clip regions
//! - keep command-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::fill::FillCmd;
pub use shapes::image::ImageCmd;
