use oval_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
///
/// Every position is in screen space and is the position recorded when the
/// event was produced; handlers never re-query a live pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at `pos`.
    Down { pos: Vec2 },
    /// Primary button released at `pos`. Delivered to the widget that received
    /// the matching `Down`, even when `pos` lies outside it.
    Up { pos: Vec2 },
    /// Pointer entered the widget's bounding box at `pos`.
    Enter { pos: Vec2 },
    /// Pointer left the widget's bounding box at `pos`.
    Exit { pos: Vec2 },
    /// Pointer moved to `pos` with no button held.
    Move { pos: Vec2 },
}

impl PointerEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { pos }
            | PointerEvent::Up { pos }
            | PointerEvent::Enter { pos }
            | PointerEvent::Exit { pos }
            | PointerEvent::Move { pos } => pos,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
