//! Oval engine crate.
//!
//! Host-independent pieces used by the control layer: analytic geometry,
//! the recorded draw stream, a CPU rasterizer and logging.

pub mod coords;
pub mod geom;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
