use crate::coords::Rect;
use crate::paint::ImageHandle;
use crate::scene::{DrawCmd, DrawList};

/// Image scaled to fill `dest`.
///
/// Only the part of `dest` inside the active clip is painted.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageHandle,
    pub dest: Rect,
}

impl DrawList {
    /// Records an image draw scaled to `dest`.
    #[inline]
    pub fn push_image(&mut self, image: ImageHandle, dest: Rect) {
        self.push(DrawCmd::Image(ImageCmd { image, dest }));
    }
}
