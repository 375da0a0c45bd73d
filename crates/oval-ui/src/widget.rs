use oval_engine::coords::Rect;

use crate::event::{EventResult, PointerEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Widgets never cache their bounds: the host passes the current rectangle on
/// every call, so a resized container is picked up immediately.
pub trait Widget: 'static {
    /// Draw this widget into `painter` within `rect` (surface pixels).
    ///
    /// Must be idempotent: unchanged state and `rect` record identical commands.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route a pointer event. `rect` is the widget's current bounds in screen
    /// space, the same space as the event position.
    ///
    /// The default implementation does nothing and returns `Ignored`.
    fn on_event(&mut self, _event: &PointerEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the child type stored by container widgets.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &PointerEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
