use oval_ui::prelude::*;

use crate::showcase::Slot;

/// One frame of the scripted session.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub label: String,
    pub input: UiInput,
}

fn step(label: impl Into<String>, pointer: Option<Vec2>, primary_down: bool) -> Step {
    Step { label: label.into(), input: UiInput { pointer, primary_down } }
}

/// Hover, press and release every button, then the two near-misses the
/// shaped hit test exists for: a press in the empty corner of a bounding box
/// and a press dragged off the shape before release.
pub fn script(layout: &[Slot]) -> Vec<Step> {
    let mut steps = vec![step("idle", None, false)];

    for slot in layout {
        let center = Some(slot.rect.center());
        steps.push(step(format!("hover_{}", slot.label), center, false));
        steps.push(step(format!("press_{}", slot.label), center, true));
        steps.push(step(format!("release_{}", slot.label), center, false));
    }

    if let Some(first) = layout.first() {
        let corner = Some(first.rect.origin + Vec2::new(2.0, 2.0));
        steps.push(step("corner_hover", corner, false));
        steps.push(step("corner_press", corner, true));
        steps.push(step("corner_release", corner, false));
    }

    if let Some(slot) = layout.get(3) {
        let center = Some(slot.rect.center());
        let outside = Some(Vec2::new(slot.rect.center().x, slot.rect.max().y + 10.0));
        steps.push(step("drag_hover", center, false));
        steps.push(step("drag_press", center, true));
        steps.push(step("drag_out", outside, true));
        steps.push(step("drag_release", outside, false));
    }

    steps.push(step("leave", None, false));
    steps
}
