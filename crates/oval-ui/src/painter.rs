use oval_engine::coords::Rect;
use oval_engine::geom::Region;
use oval_engine::paint::{Color, ImageHandle};
use oval_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with the four operations a shaped control
/// needs: fill a shape, clip to a shape, draw an image into the clip, and
/// restore the clip. Coordinates are surface pixels.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills `region` with a solid color. Empty regions record nothing.
    pub fn fill_region(&mut self, region: Region, color: Color) {
        self.draw_list.push_fill(region, color);
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_fill(Region::Rect(rect), color);
    }

    /// Draws `image` scaled to `dest`, confined to the active clip.
    pub fn draw_image(&mut self, image: ImageHandle, dest: Rect) {
        self.draw_list.push_image(image, dest);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip scope. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, region: Region) {
        self.draw_list.push_clip(region);
    }

    /// Restore the clip that was active before the matching `push_clip`.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.draw_list.clip_depth()
    }
}
