use std::ops::Range;
use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};

use crate::coords::{Rect, Vec2};
use crate::geom::Region;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawItem, DrawList, FillCmd, ImageCmd};

/// RGBA8 pixel buffer that consumes `DrawList`s.
///
/// Coverage rule: pixel `(x, y)` is painted when its center `(x + 0.5, y + 0.5)`
/// lies inside both the command's region and the item's clip. Compositing is
/// source-over in premultiplied space; the buffer stores straight alpha.
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { pixels: RgbaImage::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Fills the whole buffer with `color`, discarding previous contents.
    pub fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_srgb_u8());
        for p in self.pixels.pixels_mut() {
            *p = px;
        }
    }

    /// Straight-alpha RGBA8 at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Replays every item in paint order.
    pub fn render(&mut self, list: &DrawList) {
        for item in list.items() {
            self.render_item(item);
        }
        log::trace!("rasterized {} draw items", list.len());
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.pixels
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn render_item(&mut self, item: &DrawItem) {
        match &item.cmd {
            DrawCmd::Fill(cmd) => self.fill(cmd, item.clip.as_ref()),
            DrawCmd::Image(cmd) => self.draw_image(cmd, item.clip.as_ref()),
        }
    }

    fn fill(&mut self, cmd: &FillCmd, clip: Option<&Region>) {
        let Some(bounds) = cmd.region.bounds() else { return };
        let Some((xs, ys)) = self.scan_range(bounds, clip) else { return };
        let src = cmd.color.clamped();

        for y in ys {
            for x in xs.clone() {
                let p = pixel_center(x, y);
                if cmd.region.contains(p) && clip.is_none_or(|c| c.contains(p)) {
                    self.blend(x, y, src);
                }
            }
        }
    }

    fn draw_image(&mut self, cmd: &ImageCmd, clip: Option<&Region>) {
        let dest = cmd.dest.normalized();
        if dest.is_empty() || cmd.image.width() == 0 || cmd.image.height() == 0 {
            return;
        }
        let Some((xs, ys)) = self.scan_range(dest, clip) else { return };

        let src = cmd.image.pixels();
        let (iw, ih) = (cmd.image.width(), cmd.image.height());

        for y in ys {
            for x in xs.clone() {
                let p = pixel_center(x, y);
                if !dest.contains(p) || !clip.is_none_or(|c| c.contains(p)) {
                    continue;
                }
                let (sx, sy) = sample_coords(dest, p, iw, ih);
                let [r, g, b, a] = src.get_pixel(sx, sy).0;
                self.blend(x, y, Color::from_srgb_u8(r, g, b, a));
            }
        }
    }

    /// Column and row ranges whose pixel centers may fall inside `bounds`
    /// and `clip`, limited to the buffer.
    fn scan_range(&self, bounds: Rect, clip: Option<&Region>) -> Option<(Range<u32>, Range<u32>)> {
        let bounds = match clip {
            Some(c) => bounds.intersect_closed(c.bounds()?)?,
            None => bounds,
        };

        let x0 = bounds.origin.x.floor().max(0.0) as u32;
        let y0 = bounds.origin.y.floor().max(0.0) as u32;
        let x1 = (bounds.max().x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (bounds.max().y.ceil().max(0.0) as u32).min(self.height());
        Some((x0..x1, y0..y1))
    }

    fn blend(&mut self, x: u32, y: u32, src: Color) {
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        let dst = Color::from_srgb_u8(r, g, b, a);
        self.pixels.put_pixel(x, y, Rgba(src.over(dst).to_srgb_u8()));
    }
}

#[inline]
fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Nearest-neighbour source texel for surface point `p` inside `dest`.
#[inline]
fn sample_coords(dest: Rect, p: Vec2, iw: u32, ih: u32) -> (u32, u32) {
    let u = (p.x - dest.origin.x) / dest.size.x;
    let v = (p.y - dest.origin.y) / dest.size.y;
    let sx = ((u * iw as f32).floor().max(0.0) as u32).min(iw - 1);
    let sy = ((v * ih as f32).floor().max(0.0) as u32).min(ih - 1);
    (sx, sy)
}
