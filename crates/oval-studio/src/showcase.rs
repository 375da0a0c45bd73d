use std::cell::RefCell;
use std::rc::Rc;

use oval_engine::logging::BufferedLog;
use oval_ui::prelude::*;

/// One showcase button: its shape, fill kind and window-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub label: &'static str,
    pub shape: ShapeDescriptor,
    pub image_fill: bool,
    pub rect: Rect,
}

const BUTTONS: [(&str, ShapeDescriptor, bool); 6] = [
    ("oval_color", ShapeDescriptor::oval(), false),
    ("oval_image", ShapeDescriptor::oval(), true),
    ("capsule_vertical_color", ShapeDescriptor::capsule(Orientation::Vertical), false),
    ("capsule_horizontal_color", ShapeDescriptor::capsule(Orientation::Horizontal), false),
    ("capsule_vertical_image", ShapeDescriptor::capsule(Orientation::Vertical), true),
    ("capsule_horizontal_image", ShapeDescriptor::capsule(Orientation::Horizontal), true),
];

/// Single centred row: each button takes 15% of the width and 60% of the height.
pub fn layout(viewport: Vec2) -> Vec<Slot> {
    let w = viewport.x * 0.15;
    let h = viewport.y * 0.6;
    let gap = (viewport.x - w * BUTTONS.len() as f32) / (BUTTONS.len() + 1) as f32;
    let y = (viewport.y - h) * 0.5;

    BUTTONS
        .iter()
        .enumerate()
        .map(|(i, &(label, shape, image_fill))| Slot {
            label,
            shape,
            image_fill,
            rect: Rect::new(gap + i as f32 * (w + gap), y, w, h),
        })
        .collect()
}

/// Tiled panel hosting one button per slot. Each activation flips that
/// button's border and is recorded in `journal`.
pub fn build(
    layout: &[Slot],
    tile: ImageHandle,
    face: ImageHandle,
    journal: &Rc<RefCell<BufferedLog>>,
) -> TiledPanel {
    let mut panel = TiledPanel::new().tile(tile);

    for slot in layout {
        let fill = if slot.image_fill { FillSource::image(face.clone()) } else { FillSource::Solid };
        let button = OvalButton::new(slot.shape).fill(fill);

        let toggle = button.border_toggle();
        let journal = journal.clone();
        let label = slot.label;
        let button = button.on_activate(move || {
            let highlighted = toggle.toggle();
            journal.borrow_mut().info(&format!("{label} clicked, border highlighted: {highlighted}"));
        });

        panel.push_child(button, slot.rect);
    }

    panel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_fits_viewport_without_overlap() {
        let viewport = Vec2::new(960.0, 480.0);
        let slots = layout(viewport);
        assert_eq!(slots.len(), 6);

        for pair in slots.windows(2) {
            assert!(pair[0].rect.max().x < pair[1].rect.min().x);
        }
        let last = slots[5].rect.max();
        assert!(last.x < viewport.x && last.y < viewport.y);
        assert_eq!(slots[0].rect.size, Vec2::new(144.0, 288.0));
    }

    #[test]
    fn every_slot_becomes_a_child() {
        let slots = layout(Vec2::new(600.0, 300.0));
        let image = ImageHandle::new(image::RgbaImage::new(2, 2));
        let journal = Rc::new(RefCell::new(BufferedLog::new()));
        let panel = build(&slots, image.clone(), image, &journal);
        assert_eq!(panel.len(), 6);
        assert_eq!(panel.child_rect(3), Some(slots[3].rect));
    }
}
