use std::path::Path;

use image::{Rgba, RgbaImage};
use oval_engine::paint::ImageHandle;

/// Decodes `path` when given, otherwise builds the fallback image.
pub fn load_or(path: Option<&Path>, fallback: fn() -> RgbaImage) -> anyhow::Result<ImageHandle> {
    match path {
        Some(p) => ImageHandle::open(p),
        None => Ok(ImageHandle::new(fallback())),
    }
}

/// 64x64 mortar-and-brick tile, seamless when repeated.
pub fn stone_tile() -> RgbaImage {
    RgbaImage::from_fn(64, 64, |x, y| {
        let row = y / 16;
        let shift = if row % 2 == 0 { 0 } else { 16 };
        let mortar = y % 16 == 0 || (x + shift) % 32 == 0;
        if mortar {
            Rgba([58, 54, 50, 255])
        } else {
            let grain = ((x * 7 + y * 13) % 11) as u8;
            Rgba([96 + grain, 84 + grain, 72 + grain, 255])
        }
    })
}

/// Diagonal blue-to-teal gradient for image-filled buttons.
pub fn gradient_face() -> RgbaImage {
    const SIZE: u32 = 128;
    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let t = (x + y) as f32 / (2 * (SIZE - 1)) as f32;
        let lerp = |a: f32, b: f32| (a + (b - a) * t).round() as u8;
        Rgba([lerp(40.0, 20.0), lerp(70.0, 190.0), lerp(200.0, 170.0), 255])
    })
}
