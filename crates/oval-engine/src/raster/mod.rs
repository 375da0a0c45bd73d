//! CPU rasterization of recorded draw streams.
//!
//! `Canvas` is the reference paint surface: it replays a `DrawList` into an
//! RGBA8 buffer by sampling each pixel center against the analytic regions.
//! Output is a pure function of the list, so identical lists always produce
//! identical pixels.

mod canvas;

pub use canvas::Canvas;
