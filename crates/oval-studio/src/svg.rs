use std::fs;
use std::path::Path;

use anyhow::Context;
use oval_ui::prelude::*;

use crate::showcase::Slot;

const SEGMENTS: usize = 96;

/// SVG with each button's bounding box (dashed) and hit-region outline.
pub fn render(layout: &[Slot], viewport: Vec2) -> String {
    let (w, h) = (viewport.x, viewport.y);
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    );

    for slot in layout {
        let r = slot.rect;
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"gray\" stroke-dasharray=\"4 3\"/>\n",
            r.origin.x, r.origin.y, r.size.x, r.size.y
        ));

        let Some(outline) = slot.shape.region(r).outline(SEGMENTS) else {
            continue;
        };
        let points: Vec<String> =
            outline.iter().map(|p| format!("{:.2},{:.2}", p.x, p.y)).collect();
        out.push_str(&format!(
            "  <polygon id=\"{}\" points=\"{}\" fill=\"none\" stroke=\"crimson\"/>\n",
            slot.label,
            points.join(" ")
        ));
    }

    out.push_str("</svg>\n");
    out
}

pub fn write_hit_regions(layout: &[Slot], viewport: Vec2, path: &Path) -> anyhow::Result<()> {
    fs::write(path, render(layout, viewport))
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
