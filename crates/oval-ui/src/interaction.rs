use oval_engine::paint::Color;

use crate::event::PointerEvent;

/// The four colors of a shaped control. Any value is accepted at any time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub fill_normal: Color,
    pub fill_highlighted: Color,
    pub border_normal: Color,
    pub border_highlighted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill_normal: Color::white(),
            fill_highlighted: Color::light_gray(),
            border_normal: Color::black(),
            border_highlighted: Color::red(),
        }
    }
}

/// Logical pointer phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Hovered,
    /// A `Down` landed inside the hit region and no `Up` has arrived yet.
    Pressed,
}

/// Which palette entry the fill currently resolves to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FillTone {
    #[default]
    Normal,
    Highlighted,
    /// `fill_highlighted.darker()`.
    Pressed,
}

/// Outcome of feeding one event to [`Interaction::handle`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Transition {
    /// A validated click completed: `Down` and `Up` both hit the region.
    pub activated: bool,
}

/// Pointer state machine of a shaped control.
///
/// Inputs are the event and whether its recorded position hit the shape;
/// the machine never performs hit-testing itself. Colors are not stored,
/// only the tone, so palette edits show up on the next paint.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Interaction {
    phase: Phase,
    tone: FillTone,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn tone(&self) -> FillTone {
        self.tone
    }

    pub fn handle(&mut self, event: &PointerEvent, inside: bool) -> Transition {
        let mut out = Transition::default();

        match event {
            PointerEvent::Down { .. } => {
                if inside {
                    self.phase = Phase::Pressed;
                    self.tone = FillTone::Pressed;
                }
            }
            PointerEvent::Up { .. } => {
                out.activated = inside && self.phase == Phase::Pressed;
                self.tone = if inside { FillTone::Highlighted } else { FillTone::Normal };
                self.phase = Phase::Idle;
            }
            PointerEvent::Enter { .. } => {
                if inside {
                    self.tone = FillTone::Highlighted;
                    if self.phase != Phase::Pressed {
                        self.phase = Phase::Hovered;
                    }
                }
            }
            PointerEvent::Exit { .. } => {
                self.tone = FillTone::Normal;
                if self.phase != Phase::Pressed {
                    self.phase = Phase::Idle;
                }
            }
            PointerEvent::Move { .. } => {
                // Motion with the button held is a drag; it does not retone.
                if self.phase != Phase::Pressed {
                    if inside {
                        self.phase = Phase::Hovered;
                        self.tone = FillTone::Highlighted;
                    } else {
                        self.phase = Phase::Idle;
                        self.tone = FillTone::Normal;
                    }
                }
            }
        }

        if out.activated {
            log::debug!("interaction: activation");
        }
        out
    }

    /// Fill color for the current tone, read from the current palette.
    pub fn fill(&self, palette: &Palette) -> Color {
        match self.tone {
            FillTone::Normal => palette.fill_normal,
            FillTone::Highlighted => palette.fill_highlighted,
            FillTone::Pressed => palette.fill_highlighted.darker(),
        }
    }
}
