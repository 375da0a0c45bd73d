use std::cell::Cell;
use std::rc::Rc;

use oval_engine::coords::{Rect, Vec2};
use oval_engine::paint::{Color, ImageHandle};

use crate::border::border_ring;
use crate::event::{EventResult, PointerEvent};
use crate::interaction::{Interaction, Palette};
use crate::painter::Painter;
use crate::shape::{ShapeDescriptor, ShapeError};
use crate::widget::Widget;

/// Default border width in pixels.
pub const DEFAULT_BORDER_THICKNESS: u32 = 5;

// ── fill source ───────────────────────────────────────────────────────────

/// Supplies the background image of an image-filled button.
///
/// Polled on every paint; returning `None` falls back to the solid fill.
pub trait ImageProvider {
    fn background_image(&self) -> Option<ImageHandle>;
}

impl<F> ImageProvider for F
where
    F: Fn() -> Option<ImageHandle>,
{
    fn background_image(&self) -> Option<ImageHandle> {
        self()
    }
}

/// How the interior of the shape is painted.
#[derive(Default)]
pub enum FillSource {
    /// Palette color for the current interaction tone.
    #[default]
    Solid,
    /// Image scaled to the bounding box and clipped to the shape.
    Image(Box<dyn ImageProvider>),
}

impl FillSource {
    /// Image fill from a provider callback.
    pub fn provider(provider: impl ImageProvider + 'static) -> Self {
        FillSource::Image(Box::new(provider))
    }

    /// Image fill that always shows `image`.
    pub fn image(image: ImageHandle) -> Self {
        Self::provider(move || Some(image.clone()))
    }

    fn current_image(&self) -> Option<ImageHandle> {
        match self {
            FillSource::Solid => None,
            FillSource::Image(provider) => provider.background_image(),
        }
    }
}

impl std::fmt::Debug for FillSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillSource::Solid => f.write_str("Solid"),
            FillSource::Image(_) => f.write_str("Image(..)"),
        }
    }
}

// ── border toggle ─────────────────────────────────────────────────────────

/// Shared handle on a button's "highlighted border" flag.
///
/// Clones observe the same flag, so an activation callback can flip the
/// border of the button that owns it.
#[derive(Debug, Clone, Default)]
pub struct BorderToggle(Rc<Cell<bool>>);

impl BorderToggle {
    #[inline]
    pub fn get(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, highlighted: bool) {
        self.0.set(highlighted);
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.0.get();
        self.0.set(next);
        next
    }
}

// ── OvalButton ────────────────────────────────────────────────────────────

/// A pointer control shaped as an oval or capsule.
///
/// Only points inside the shape count as hits, so a click in the corner of
/// the bounding box does nothing. A click activates when both the press and
/// the release land inside the shape.
///
/// # Example
/// ```rust,ignore
/// let button = OvalButton::new(ShapeDescriptor::capsule(Orientation::Horizontal))
///     .border_thickness(3)
///     .on_activate(|| log::info!("pressed"));
/// ```
pub struct OvalButton {
    shape: ShapeDescriptor,
    palette: Palette,
    border_thickness: u32,
    border: BorderToggle,
    enabled: bool,
    fill: FillSource,
    interaction: Interaction,
    on_activate: Option<Box<dyn FnMut()>>,
}

impl OvalButton {
    pub fn new(shape: ShapeDescriptor) -> Self {
        Self {
            shape,
            palette: Palette::default(),
            border_thickness: DEFAULT_BORDER_THICKNESS,
            border: BorderToggle::default(),
            enabled: true,
            fill: FillSource::Solid,
            interaction: Interaction::new(),
            on_activate: None,
        }
    }

    /// Oval with the default palette.
    pub fn oval() -> Self {
        Self::new(ShapeDescriptor::oval())
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Border width in pixels; negative values are treated as zero.
    pub fn border_thickness(mut self, thickness: i32) -> Self {
        self.set_border_thickness(thickness);
        self
    }

    pub fn fill(mut self, fill: FillSource) -> Self {
        self.fill = fill;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Callback invoked once per validated click.
    pub fn on_activate(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_activate = Some(Box::new(f));
        self
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_fill_normal(&mut self, color: Color) {
        self.palette.fill_normal = color;
    }

    pub fn set_fill_highlighted(&mut self, color: Color) {
        self.palette.fill_highlighted = color;
    }

    pub fn set_border_normal(&mut self, color: Color) {
        self.palette.border_normal = color;
    }

    pub fn set_border_highlighted(&mut self, color: Color) {
        self.palette.border_highlighted = color;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn set_border_thickness(&mut self, thickness: i32) {
        self.border_thickness = thickness.max(0).unsigned_abs();
    }

    /// Rejects values outside `[0, 1]`; the previous fraction is kept.
    pub fn set_radius_fraction(&mut self, fraction: f32) -> Result<(), ShapeError> {
        self.shape.set_radius_fraction(fraction)
    }

    /// Selects which border color is painted.
    pub fn set_highlighted_border(&mut self, highlighted: bool) {
        self.border.set(highlighted);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_fill(&mut self, fill: FillSource) {
        self.fill = fill;
    }

    // ── getters ───────────────────────────────────────────────────────────

    #[inline]
    pub fn shape(&self) -> &ShapeDescriptor {
        &self.shape
    }

    #[inline]
    pub fn colors(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn border_width(&self) -> u32 {
        self.border_thickness
    }

    #[inline]
    pub fn is_border_highlighted(&self) -> bool {
        self.border.get()
    }

    /// A handle sharing this button's border flag.
    pub fn border_toggle(&self) -> BorderToggle {
        self.border.clone()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Interior color the next solid paint will use.
    pub fn current_fill(&self) -> Color {
        if self.enabled {
            self.interaction.fill(&self.palette)
        } else {
            self.palette.fill_normal
        }
    }

    /// Border color the next paint will use.
    pub fn current_border(&self) -> Color {
        if self.border.get() {
            self.palette.border_highlighted
        } else {
            self.palette.border_normal
        }
    }

    /// Hit test against the control's current screen bounds.
    pub fn is_valid_click_position(&self, point: Vec2, bounds: Rect) -> bool {
        self.shape.is_point_inside(point, bounds.origin, bounds.size)
    }
}

impl Widget for OvalButton {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let silhouette = self.shape.region(rect);

        let clipped = match self.fill.current_image() {
            Some(image) => {
                painter.push_clip(silhouette);
                painter.draw_image(image, rect);
                true
            }
            None => {
                painter.fill_region(silhouette, self.current_fill());
                false
            }
        };

        let ring = border_ring(&self.shape, rect, self.border_thickness);
        painter.fill_region(ring, self.current_border());

        if clipped {
            painter.pop_clip();
        }
    }

    fn on_event(&mut self, event: &PointerEvent, rect: Rect) -> EventResult {
        let inside = self.is_valid_click_position(event.pos(), rect);
        let transition = self.interaction.handle(event, inside);

        if transition.activated && self.enabled {
            if let Some(f) = self.on_activate.as_mut() {
                f();
            }
        }

        match event {
            PointerEvent::Down { .. } | PointerEvent::Up { .. } if inside => {
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
