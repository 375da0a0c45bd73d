use crate::coords::{Rect, Vec2};

use super::{Capsule, Ellipse};

/// Planar region built from the kernel's shapes.
///
/// Membership is always evaluated analytically; composites nest by value so a
/// region can be stored inside a draw command and replayed any number of times.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Region {
    #[default]
    Empty,
    /// Closed rectangle.
    Rect(Rect),
    Ellipse(Ellipse),
    Capsule(Capsule),
    /// Points in the first region and not in the second.
    Difference(Box<Region>, Box<Region>),
    /// Points in both regions.
    Intersection(Box<Region>, Box<Region>),
}

impl Region {
    /// `self` minus `other`, folding the trivial cases.
    pub fn difference(self, other: Region) -> Region {
        match (self, other) {
            (Region::Empty, _) => Region::Empty,
            (a, Region::Empty) => a,
            (a, b) if a == b => Region::Empty,
            (a, b) => Region::Difference(Box::new(a), Box::new(b)),
        }
    }

    /// `self` intersected with `other`, folding the trivial cases.
    pub fn intersection(self, other: Region) -> Region {
        match (self, other) {
            (Region::Empty, _) | (_, Region::Empty) => Region::Empty,
            (a, b) if a == b => a,
            (a, b) => Region::Intersection(Box::new(a), Box::new(b)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Region::Empty)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Region::Empty => false,
            Region::Rect(r) => r.contains_closed(p),
            Region::Ellipse(e) => e.contains(p),
            Region::Capsule(c) => c.contains(p),
            Region::Difference(a, b) => a.contains(p) && !b.contains(p),
            Region::Intersection(a, b) => a.contains(p) && b.contains(p),
        }
    }

    /// Axis-aligned box enclosing every point of the region.
    ///
    /// `None` for regions known to be empty. Degenerate shapes may report a
    /// zero-area box.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Region::Empty => None,
            Region::Rect(r) => Some(r.normalized()),
            Region::Ellipse(e) => Some(e.bounds()),
            Region::Capsule(c) => Some(c.bounds),
            Region::Difference(a, _) => a.bounds(),
            Region::Intersection(a, b) => {
                let (a, b) = (a.bounds()?, b.bounds()?);
                let min = Vec2::new(a.origin.x.max(b.origin.x), a.origin.y.max(b.origin.y));
                let max = Vec2::new(a.max().x.min(b.max().x), a.max().y.min(b.max().y));
                if max.x < min.x || max.y < min.y {
                    return None;
                }
                Some(Rect::from_origin_size(min, max - min))
            }
        }
    }

    /// Boundary polygon for simple shapes; `None` for composites and `Empty`.
    pub fn outline(&self, segments: usize) -> Option<Vec<Vec2>> {
        match self {
            Region::Rect(r) => {
                let r = r.normalized();
                let max = r.max();
                Some(vec![
                    r.origin,
                    Vec2::new(max.x, r.origin.y),
                    max,
                    Vec2::new(r.origin.x, max.y),
                ])
            }
            Region::Ellipse(e) => Some(e.outline(segments)),
            Region::Capsule(c) => Some(c.outline(segments / 2)),
            _ => None,
        }
    }
}

impl From<Rect> for Region {
    fn from(r: Rect) -> Self {
        Region::Rect(r)
    }
}

impl From<Ellipse> for Region {
    fn from(e: Ellipse) -> Self {
        Region::Ellipse(e)
    }
}

impl From<Capsule> for Region {
    fn from(c: Capsule) -> Self {
        Region::Capsule(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Orientation;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn disc() -> Region {
        Region::Ellipse(Ellipse::new(v(50.0, 50.0), v(50.0, 50.0)))
    }

    // ── folding ───────────────────────────────────────────────────────────

    #[test]
    fn difference_with_itself_is_empty() {
        assert_eq!(disc().difference(disc()), Region::Empty);
    }

    #[test]
    fn difference_with_empty_is_identity() {
        assert_eq!(disc().difference(Region::Empty), disc());
        assert_eq!(Region::Empty.difference(disc()), Region::Empty);
    }

    #[test]
    fn intersection_with_empty_is_empty() {
        assert_eq!(disc().intersection(Region::Empty), Region::Empty);
    }

    // ── membership ────────────────────────────────────────────────────────

    #[test]
    fn ring_excludes_the_hole() {
        let hole = Region::Ellipse(Ellipse::new(v(50.0, 50.0), v(40.0, 40.0)));
        let ring = disc().difference(hole);
        assert!(!ring.contains(v(50.0, 50.0)));
        assert!(ring.contains(v(5.0, 50.0)));
        assert!(!ring.contains(v(0.0, 0.0)));
    }

    #[test]
    fn intersection_requires_both() {
        let clip = Region::Rect(Rect::new(0.0, 0.0, 50.0, 100.0));
        let half = disc().intersection(clip);
        assert!(half.contains(v(25.0, 50.0)));
        assert!(!half.contains(v(75.0, 50.0)));
        assert_eq!(half.bounds(), Some(Rect::new(0.0, 0.0, 50.0, 100.0)));
    }

    #[test]
    fn disjoint_intersection_has_no_bounds() {
        let a = Region::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Region::Rect(Rect::new(20.0, 20.0, 10.0, 10.0));
        assert_eq!(a.intersection(b).bounds(), None);
    }

    #[test]
    fn empty_contains_nothing() {
        assert!(!Region::Empty.contains(v(0.0, 0.0)));
        assert!(Region::Empty.bounds().is_none());
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn outline_only_for_simple_shapes() {
        let cap = Region::Capsule(Capsule::new(Rect::new(0.0, 0.0, 10.0, 30.0), Orientation::Vertical, 0.5));
        assert_eq!(cap.outline(16).map(|p| p.len()), Some(18));
        assert!(disc().difference(cap).outline(16).is_none());
    }
}
