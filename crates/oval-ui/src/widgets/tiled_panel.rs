use oval_engine::coords::{Rect, Vec2};
use oval_engine::geom::Region;
use oval_engine::paint::{Color, ImageHandle};

use crate::event::{EventResult, PointerEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

struct Slot {
    element: Element,
    /// Child bounds relative to the panel's top-left corner.
    rect: Rect,
}

/// Host container that tiles a background image and places children at
/// fixed rectangles.
///
/// Pointer routing follows the usual desktop rules:
/// - `Enter`/`Exit` are synthesised from the children's bounding boxes;
/// - `Move` reaches the hovered child only while no button is held;
/// - the child that receives `Down` captures the pointer until `Up`, and
///   while captured no other child sees hover changes;
/// - a press on bare panel space belongs to the panel: until `Up` no child
///   sees hover changes, moves or the release.
///
/// # Example
/// ```rust,ignore
/// TiledPanel::new()
///     .tile(stone)
///     .child(OvalButton::oval(), Rect::new(20.0, 20.0, 120.0, 60.0))
/// ```
pub struct TiledPanel {
    tile: Option<ImageHandle>,
    background: Color,
    children: Vec<Slot>,
    hovered: Option<usize>,
    captured: Option<usize>,
    /// Primary button held, whether or not a child captured the press.
    held: bool,
}

impl TiledPanel {
    pub fn new() -> Self {
        Self {
            tile: None,
            background: Color::transparent(),
            children: Vec::new(),
            hovered: None,
            captured: None,
            held: false,
        }
    }

    /// Image repeated from the panel's top-left corner.
    pub fn tile(mut self, image: ImageHandle) -> Self {
        self.tile = Some(image);
        self
    }

    /// Solid color used when no tile is set.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn child(mut self, element: impl Into<Element>, rect: Rect) -> Self {
        self.push_child(element, rect);
        self
    }

    /// Adds a child and returns its index.
    pub fn push_child(&mut self, element: impl Into<Element>, rect: Rect) -> usize {
        self.children.push(Slot { element: element.into(), rect });
        self.children.len() - 1
    }

    /// Moves or resizes a child. Takes effect on the next paint and event.
    pub fn set_child_rect(&mut self, index: usize, rect: Rect) {
        if let Some(slot) = self.children.get_mut(index) {
            slot.rect = rect;
        }
    }

    pub fn child_rect(&self, index: usize) -> Option<Rect> {
        self.children.get(index).map(|s| s.rect)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[inline]
    pub fn captured(&self) -> Option<usize> {
        self.captured
    }

    // ── routing ───────────────────────────────────────────────────────────

    /// Topmost child whose bounding box contains `pos`.
    fn child_at(&self, pos: Vec2, origin: Vec2) -> Option<usize> {
        self.children
            .iter()
            .rposition(|slot| slot.rect.translate(origin).contains(pos))
    }

    fn send(&mut self, index: usize, event: PointerEvent, origin: Vec2) -> EventResult {
        match self.children.get_mut(index) {
            Some(slot) => slot.element.on_event(&event, slot.rect.translate(origin)),
            None => EventResult::Ignored,
        }
    }

    /// Moves hover to `target`, emitting `Exit` then `Enter` as needed.
    fn hover(&mut self, target: Option<usize>, pos: Vec2, origin: Vec2) {
        if self.hovered == target {
            return;
        }
        if let Some(old) = self.hovered.take() {
            self.send(old, PointerEvent::Exit { pos }, origin);
        }
        if let Some(new) = target {
            self.send(new, PointerEvent::Enter { pos }, origin);
        }
        self.hovered = target;
    }

    /// Hover target under `pos`: the captured child only, or nothing while
    /// a press that missed every child is held.
    fn hover_target(&self, pos: Vec2, origin: Vec2) -> Option<usize> {
        let under = self.child_at(pos, origin);
        match self.captured {
            Some(c) => under.filter(|&i| i == c),
            None if self.held => None,
            None => under,
        }
    }
}

impl Default for TiledPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TiledPanel {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.push_clip(Region::Rect(rect));
        match &self.tile {
            Some(tile) if tile.width() > 0 && tile.height() > 0 => {
                let (tw, th) = (tile.width() as f32, tile.height() as f32);
                let mut y = rect.origin.y;
                while y < rect.origin.y + rect.size.y {
                    let mut x = rect.origin.x;
                    while x < rect.origin.x + rect.size.x {
                        painter.draw_image(tile.clone(), Rect::new(x, y, tw, th));
                        x += tw;
                    }
                    y += th;
                }
            }
            _ => painter.fill_rect(rect, self.background),
        }
        painter.pop_clip();

        for slot in &self.children {
            slot.element.paint(painter, slot.rect.translate(rect.origin));
        }
    }

    fn on_event(&mut self, event: &PointerEvent, rect: Rect) -> EventResult {
        let origin = rect.origin;
        let pos = event.pos();

        match *event {
            PointerEvent::Enter { .. } => {
                let target = self.hover_target(pos, origin);
                self.hover(target, pos, origin);
                EventResult::Ignored
            }
            PointerEvent::Move { .. } => {
                let target = self.hover_target(pos, origin);
                self.hover(target, pos, origin);
                match self.hovered {
                    Some(i) if !self.held => self.send(i, *event, origin),
                    _ => EventResult::Ignored,
                }
            }
            PointerEvent::Exit { .. } => {
                self.hover(None, pos, origin);
                EventResult::Ignored
            }
            PointerEvent::Down { .. } => {
                let target = self.hover_target(pos, origin);
                self.hover(target, pos, origin);
                self.held = true;
                match target {
                    Some(i) => {
                        self.captured = Some(i);
                        log::trace!("panel: child {i} captured the pointer");
                        self.send(i, *event, origin)
                    }
                    None => EventResult::Ignored,
                }
            }
            PointerEvent::Up { .. } => {
                self.held = false;
                let result = match self.captured.take() {
                    Some(i) => self.send(i, *event, origin),
                    None => EventResult::Ignored,
                };
                let target = self.hover_target(pos, origin);
                self.hover(target, pos, origin);
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use oval_engine::raster::Canvas;
    use oval_engine::scene::DrawList;

    use super::*;

    type Log = Rc<RefCell<Vec<(usize, &'static str, Vec2)>>>;

    /// Records every event it receives with the rect it was given.
    struct Recorder {
        id: usize,
        log: Log,
        rects: Rc<RefCell<Vec<Rect>>>,
    }

    impl Widget for Recorder {
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect, Color::black());
        }

        fn on_event(&mut self, event: &PointerEvent, rect: Rect) -> EventResult {
            let kind = match event {
                PointerEvent::Down { .. } => "down",
                PointerEvent::Up { .. } => "up",
                PointerEvent::Enter { .. } => "enter",
                PointerEvent::Exit { .. } => "exit",
                PointerEvent::Move { .. } => "move",
            };
            self.log.borrow_mut().push((self.id, kind, event.pos()));
            self.rects.borrow_mut().push(rect);
            EventResult::Consumed
        }
    }

    const PANEL: Rect = Rect::new(100.0, 100.0, 300.0, 100.0);

    fn two_recorders() -> (TiledPanel, Log, Rc<RefCell<Vec<Rect>>>) {
        let log: Log = Rc::default();
        let rects: Rc<RefCell<Vec<Rect>>> = Rc::default();
        let recorder = |id| Recorder { id, log: log.clone(), rects: rects.clone() };
        let panel = TiledPanel::new()
            .child(recorder(0), Rect::new(0.0, 0.0, 100.0, 100.0))
            .child(recorder(1), Rect::new(200.0, 0.0, 100.0, 100.0));
        (panel, log, rects)
    }

    fn kinds(log: &Log) -> Vec<(usize, &'static str)> {
        log.borrow().iter().map(|&(id, kind, _)| (id, kind)).collect()
    }

    fn at(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── routing ───────────────────────────────────────────────────────────

    #[test]
    fn hover_synthesises_enter_and_exit() {
        let (mut panel, log, _) = two_recorders();
        panel.on_event(&PointerEvent::Enter { pos: at(150.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Move { pos: at(160.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Move { pos: at(250.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Move { pos: at(350.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Exit { pos: at(450.0, 150.0) }, PANEL);

        assert_eq!(
            kinds(&log),
            vec![
                (0, "enter"),
                (0, "move"),
                (0, "exit"),
                (1, "enter"),
                (1, "move"),
                (1, "exit"),
            ]
        );
        assert_eq!(panel.hovered(), None);
    }

    #[test]
    fn children_receive_screen_space_rects() {
        let (mut panel, _, rects) = two_recorders();
        panel.on_event(&PointerEvent::Enter { pos: at(350.0, 150.0) }, PANEL);
        assert_eq!(rects.borrow()[0], Rect::new(300.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn down_captures_until_up() {
        let (mut panel, log, _) = two_recorders();
        panel.on_event(&PointerEvent::Enter { pos: at(150.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Down { pos: at(150.0, 150.0) }, PANEL);
        assert_eq!(panel.captured(), Some(0));

        // Dragging across the other child neither moves nor hovers it.
        panel.on_event(&PointerEvent::Move { pos: at(350.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Up { pos: at(350.0, 150.0) }, PANEL);

        assert_eq!(
            kinds(&log),
            vec![(0, "enter"), (0, "down"), (0, "exit"), (0, "up"), (1, "enter")]
        );
        assert_eq!(panel.captured(), None);
        assert_eq!(panel.hovered(), Some(1));
    }

    #[test]
    fn drag_from_bare_panel_reaches_no_child() {
        let (mut panel, log, _) = two_recorders();
        panel.on_event(&PointerEvent::Down { pos: at(250.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Move { pos: at(150.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Move { pos: at(160.0, 150.0) }, PANEL);
        assert!(log.borrow().is_empty());
        assert_eq!(panel.hovered(), None);

        // The release belongs to the panel; hover resumes afterwards.
        let r = panel.on_event(&PointerEvent::Up { pos: at(160.0, 150.0) }, PANEL);
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(kinds(&log), vec![(0, "enter")]);

        panel.on_event(&PointerEvent::Move { pos: at(170.0, 150.0) }, PANEL);
        assert_eq!(kinds(&log), vec![(0, "enter"), (0, "move")]);
    }

    #[test]
    fn up_carries_release_position() {
        let (mut panel, log, _) = two_recorders();
        panel.on_event(&PointerEvent::Down { pos: at(150.0, 150.0) }, PANEL);
        panel.on_event(&PointerEvent::Up { pos: at(120.0, 130.0) }, PANEL);
        let last = *log.borrow().last().unwrap();
        assert_eq!(last, (0, "up", at(120.0, 130.0)));
    }

    #[test]
    fn down_on_empty_space_goes_nowhere() {
        let (mut panel, log, _) = two_recorders();
        let r = panel.on_event(&PointerEvent::Down { pos: at(250.0, 150.0) }, PANEL);
        assert_eq!(r, EventResult::Ignored);
        assert!(log.borrow().is_empty());
        assert_eq!(panel.captured(), None);
    }

    #[test]
    fn moved_child_is_hit_at_new_rect() {
        let (mut panel, log, _) = two_recorders();
        panel.set_child_rect(0, Rect::new(100.0, 0.0, 100.0, 100.0));
        panel.on_event(&PointerEvent::Enter { pos: at(250.0, 150.0) }, PANEL);
        assert_eq!(kinds(&log), vec![(0, "enter")]);
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn tile_repeats_across_the_panel() {
        let tile = ImageHandle::new(::image::RgbaImage::from_pixel(
            16,
            16,
            ::image::Rgba([0, 255, 0, 255]),
        ));
        let panel = TiledPanel::new().tile(tile);
        let mut list = DrawList::new();
        panel.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 40.0, 20.0));
        // 3 columns x 2 rows.
        assert_eq!(list.len(), 6);
        assert_eq!(list.clip_depth(), 0);

        let mut canvas = Canvas::new(40, 20);
        canvas.render(&list);
        assert_eq!(canvas.pixel(39, 19), [0, 255, 0, 255]);
    }

    #[test]
    fn children_paint_over_background() {
        let (panel, _, _) = two_recorders();
        let panel = panel.background(Color::white());
        let mut list = DrawList::new();
        panel.paint(&mut Painter::new(&mut list), Rect::new(0.0, 0.0, 300.0, 100.0));

        let mut canvas = Canvas::new(300, 100);
        canvas.render(&list);
        assert_eq!(canvas.pixel(50, 50), [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(150, 50), [255, 255, 255, 255]);
    }
}
