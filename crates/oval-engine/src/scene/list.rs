use crate::geom::Region;

use super::DrawCmd;

/// A single draw item: command + effective clip.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Clip region in surface pixels. `None` = no clipping (draw everywhere).
    pub clip: Option<Region>,
}

/// Recorded draw stream for a frame.
///
/// Items are painted in insertion order, so later commands land on top.
///
/// # Clipping
///
/// Use [`push_clip`] / [`pop_clip`] to scope draw commands to a region.
/// Clips are intersected with the current parent, so nested clips work correctly.
///
/// ```ignore
/// draw_list.push_clip(shape_region);
/// // ... push commands ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Stack of active clip regions.
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Region>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of currently open clip scopes.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Pushes a draw command. The item inherits the current clip.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            clip: self.clip_stack.last().cloned(),
        });
    }

    /// Begins a clip scope. All draw commands pushed until [`pop_clip`] are
    /// confined to `region` (intersected with any parent clip).
    ///
    /// Calls must be balanced with [`pop_clip`].
    pub fn push_clip(&mut self, region: Region) {
        let effective = match self.clip_stack.last() {
            None => region,
            Some(parent) => parent.clone().intersection(region),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip scope started by [`push_clip`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}
