use oval_engine::coords::{Rect, Vec2};
use oval_engine::geom::Region;

use crate::shape::ShapeDescriptor;

/// Annular border of a shaped control: the outer shape minus the same shape
/// built on the box inset by `thickness` on every side.
///
/// Both shapes go through [`ShapeDescriptor::region`], so capsule rings are
/// decomposed identically inside and out. When `2 * thickness` reaches the
/// smaller box side the hole vanishes and the ring is the whole outer shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderRing {
    pub outer: Region,
    /// `None` when the inset box is degenerate.
    pub inner: Option<Region>,
}

impl BorderRing {
    pub fn compose(shape: &ShapeDescriptor, bounds: Rect, thickness: u32) -> Self {
        let outer = shape.region(bounds);
        let inner = inner_bounds(bounds, thickness).map(|b| shape.region(b));
        Self { outer, inner }
    }

    /// Paintable ring region.
    pub fn region(&self) -> Region {
        match &self.inner {
            Some(inner) => self.outer.clone().difference(inner.clone()),
            None => self.outer.clone(),
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.outer.contains(p) && !self.inner.as_ref().is_some_and(|i| i.contains(p))
    }

    /// True when the ring covers the whole outer shape.
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.inner.is_none()
    }
}

/// Convenience for the render path: the ring as a region.
pub fn border_ring(shape: &ShapeDescriptor, bounds: Rect, thickness: u32) -> Region {
    BorderRing::compose(shape, bounds, thickness).region()
}

fn inner_bounds(bounds: Rect, thickness: u32) -> Option<Rect> {
    let b = bounds.normalized();
    let t = thickness as f32;
    if 2.0 * t >= b.size.min_element() {
        return None;
    }
    b.inset(t)
}
