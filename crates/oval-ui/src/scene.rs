use oval_engine::coords::{Rect, Vec2};
use oval_engine::scene::DrawList;

use crate::event::{EventResult, PointerEvent};
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiInput {
    /// Cursor position relative to the window, `None` while outside it.
    pub pointer: Option<Vec2>,
    /// `true` while the primary button is held down.
    pub primary_down: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Frame driver for a retained widget tree.
///
/// Each [`frame`](Self::frame) diffs the new input against the previous
/// snapshot, dispatches the resulting pointer events in screen space, then
/// repaints the tree into [`draw_list`](Self::draw_list) in window space.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new().with_screen_origin(Vec2::new(40.0, 30.0));
/// let mut root = Element::new(panel);
///
/// let draw_list = ui.frame(&mut root, viewport, &UiInput { pointer, primary_down });
/// canvas.render(draw_list);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    screen_origin: Vec2,
    last: UiInput,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new(), screen_origin: Vec2::zero(), last: UiInput::default() }
    }

    /// Screen position of the window's top-left corner.
    pub fn with_screen_origin(mut self, origin: Vec2) -> Self {
        self.screen_origin = origin;
        self
    }

    #[inline]
    pub fn screen_origin(&self) -> Vec2 {
        self.screen_origin
    }

    /// Converts the change from the previous input into pointer events.
    ///
    /// Order within one frame: `Enter`, `Move`, `Down`/`Up`, and finally
    /// `Exit` when the pointer left the window.
    pub fn events(&self, input: &UiInput) -> Vec<PointerEvent> {
        let screen = |p: Vec2| p + self.screen_origin;
        let mut out = Vec::new();

        match (self.last.pointer, input.pointer) {
            (None, Some(p)) => out.push(PointerEvent::Enter { pos: screen(p) }),
            (Some(a), Some(b)) if a != b => out.push(PointerEvent::Move { pos: screen(b) }),
            _ => {}
        }

        // Edges are reported where the pointer is now, or where it was last
        // seen when it has already left the window.
        if let Some(p) = input.pointer.or(self.last.pointer) {
            match (self.last.primary_down, input.primary_down) {
                (false, true) => out.push(PointerEvent::Down { pos: screen(p) }),
                (true, false) => out.push(PointerEvent::Up { pos: screen(p) }),
                _ => {}
            }
        }

        if let (Some(p), None) = (self.last.pointer, input.pointer) {
            out.push(PointerEvent::Exit { pos: screen(p) });
        }

        out
    }

    /// Dispatches this frame's pointer events to `root`.
    pub fn dispatch(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> EventResult {
        let bounds = Rect::from_origin_size(self.screen_origin, viewport);
        let mut result = EventResult::Ignored;
        for event in self.events(input) {
            log::trace!("ui: {event:?}");
            if root.on_event(&event, bounds).is_consumed() {
                result = EventResult::Consumed;
            }
        }
        self.last = *input;
        result
    }

    /// Repaints `root` over the full viewport.
    pub fn paint(&mut self, root: &Element, viewport: Vec2) -> &DrawList {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        root.paint(&mut Painter::new(&mut self.draw_list), rect);
        &self.draw_list
    }

    /// Dispatch then paint, so the returned list reflects this frame's input.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &DrawList {
        self.dispatch(root, viewport, input);
        self.paint(root, viewport)
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
