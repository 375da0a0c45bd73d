use std::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{Rect, Vec2};

use super::Ellipse;

/// Long axis of a capsule: which pair of opposite sides carries the caps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Orientation {
    /// Caps on the top and bottom edges.
    #[default]
    Vertical,
    /// Caps on the left and right edges.
    Horizontal,
}

/// Stadium shape fitted to a bounding box.
///
/// `radius_fraction` in [0, 1] controls how much of the long axis the caps
/// consume: 0 is the bare rectangle, 1 is the ellipse inscribed in `bounds`.
/// Validation of the fraction belongs to the caller; out-of-range values are
/// still evaluated without panicking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Capsule {
    pub bounds: Rect,
    pub orientation: Orientation,
    pub radius_fraction: f32,
}

/// A capsule split into its terminal ellipses and connecting rectangle.
///
/// `lead` caps the top (vertical) or left (horizontal) end; `tail` the other.
/// Only the outer half of each ellipse contributes to the capsule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CapsuleParts {
    pub lead: Ellipse,
    pub body: Rect,
    pub tail: Ellipse,
}

impl Capsule {
    #[inline]
    pub fn new(bounds: Rect, orientation: Orientation, radius_fraction: f32) -> Self {
        Self { bounds: bounds.normalized(), orientation, radius_fraction }
    }

    /// Half-extent of the terminal ellipses along the long axis:
    /// `0.5 * fraction * (height if vertical else width)`.
    #[inline]
    pub fn cap_radius(&self) -> f32 {
        cap_radius(self.bounds, self.orientation, self.radius_fraction)
    }

    pub fn parts(&self) -> CapsuleParts {
        let b = self.bounds;
        let r = self.cap_radius();
        let c = b.center();

        match self.orientation {
            Orientation::Vertical => {
                let a = b.size.x * 0.5;
                CapsuleParts {
                    lead: Ellipse::new(Vec2::new(c.x, b.origin.y + r), Vec2::new(a, r)),
                    body: Rect::new(b.origin.x, b.origin.y + r, b.size.x, b.size.y - 2.0 * r),
                    tail: Ellipse::new(Vec2::new(c.x, b.origin.y + b.size.y - r), Vec2::new(a, r)),
                }
            }
            Orientation::Horizontal => {
                let bb = b.size.y * 0.5;
                CapsuleParts {
                    lead: Ellipse::new(Vec2::new(b.origin.x + r, c.y), Vec2::new(r, bb)),
                    body: Rect::new(b.origin.x + r, b.origin.y, b.size.x - 2.0 * r, b.size.y),
                    tail: Ellipse::new(Vec2::new(b.origin.x + b.size.x - r, c.y), Vec2::new(r, bb)),
                }
            }
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_capsule(p, self.bounds, self.orientation, self.radius_fraction)
    }

    /// Closed polygon approximating the boundary, clockwise on screen.
    ///
    /// Each cap contributes `segments_per_cap + 1` points along its outer half;
    /// the straight sides are the edges joining the two arcs. With a zero cap
    /// radius the arcs collapse and the polygon is the rectangle itself.
    pub fn outline(&self, segments_per_cap: usize) -> Vec<Vec2> {
        let n = segments_per_cap.max(1);
        let parts = self.parts();

        if self.cap_radius() <= 0.0 {
            let b = self.bounds;
            let max = b.max();
            return vec![
                b.origin,
                Vec2::new(max.x, b.origin.y),
                max,
                Vec2::new(b.origin.x, max.y),
            ];
        }

        // Arc start angles: vertical runs lead over the top (π → 2π) then tail
        // under the bottom (0 → π); horizontal runs lead around the left
        // (π/2 → 3π/2) then tail around the right (-π/2 → π/2).
        let (lead_start, tail_start) = match self.orientation {
            Orientation::Vertical => (PI, 0.0),
            Orientation::Horizontal => (FRAC_PI_2, -FRAC_PI_2),
        };

        let arc = |e: Ellipse, start: f32| {
            (0..=n).map(move |i| e.point_at(start + PI * (i as f32) / (n as f32)))
        };

        arc(parts.lead, lead_start).chain(arc(parts.tail, tail_start)).collect()
    }
}

#[inline]
fn cap_radius(bounds: Rect, orientation: Orientation, radius_fraction: f32) -> f32 {
    let extent = match orientation {
        Orientation::Vertical => bounds.size.y,
        Orientation::Horizontal => bounds.size.x,
    };
    0.5 * radius_fraction * extent.abs()
}

/// Closed-region capsule test.
///
/// The long axis is partitioned into three bands. A point in the lead band is
/// tested against the lead ellipse (with its own center and axes), a point in
/// the tail band against the tail ellipse, and a point in the middle band
/// against the connecting rectangle.
pub fn point_in_capsule(
    p: Vec2,
    bounds: Rect,
    orientation: Orientation,
    radius_fraction: f32,
) -> bool {
    let capsule = Capsule::new(bounds, orientation, radius_fraction);
    let b = capsule.bounds;
    let r = capsule.cap_radius();
    let max = b.max();

    let (along, start, end, across, across_min, across_max) = match orientation {
        Orientation::Vertical => (p.y, b.origin.y, max.y, p.x, b.origin.x, max.x),
        Orientation::Horizontal => (p.x, b.origin.x, max.x, p.y, b.origin.y, max.y),
    };

    if along < start + r {
        capsule.parts().lead.contains(p)
    } else if along > end - r {
        capsule.parts().tail.contains(p)
    } else {
        across >= across_min && across <= across_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point_in_ellipse;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    /// Pixel-center grid covering `rect` plus a margin.
    fn grid(rect: Rect, margin: f32) -> Vec<Vec2> {
        let mut pts = Vec::new();
        let mut y = rect.origin.y - margin + 0.5;
        while y < rect.origin.y + rect.size.y + margin {
            let mut x = rect.origin.x - margin + 0.5;
            while x < rect.origin.x + rect.size.x + margin {
                pts.push(v(x, y));
                x += 1.0;
            }
            y += 1.0;
        }
        pts
    }

    // ── decomposition ─────────────────────────────────────────────────────

    #[test]
    fn vertical_parts_follow_the_long_axis() {
        let cap = Capsule::new(Rect::new(0.0, 0.0, 40.0, 100.0), Orientation::Vertical, 0.5);
        assert_eq!(cap.cap_radius(), 25.0);
        let parts = cap.parts();
        assert_eq!(parts.lead, Ellipse::new(v(20.0, 25.0), v(20.0, 25.0)));
        assert_eq!(parts.body, Rect::new(0.0, 25.0, 40.0, 50.0));
        assert_eq!(parts.tail, Ellipse::new(v(20.0, 75.0), v(20.0, 25.0)));
    }

    #[test]
    fn horizontal_parts_follow_the_long_axis() {
        let cap = Capsule::new(Rect::new(10.0, 10.0, 100.0, 40.0), Orientation::Horizontal, 0.4);
        assert_eq!(cap.cap_radius(), 20.0);
        let parts = cap.parts();
        assert_eq!(parts.lead, Ellipse::new(v(30.0, 30.0), v(20.0, 20.0)));
        assert_eq!(parts.body, Rect::new(30.0, 10.0, 60.0, 40.0));
        assert_eq!(parts.tail, Ellipse::new(v(90.0, 30.0), v(20.0, 20.0)));
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn vertical_caps_cut_the_corners() {
        let b = Rect::new(0.0, 0.0, 40.0, 100.0);
        assert!(!point_in_capsule(v(1.0, 1.0), b, Orientation::Vertical, 0.5));
        assert!(!point_in_capsule(v(39.0, 99.0), b, Orientation::Vertical, 0.5));
        assert!(point_in_capsule(v(1.0, 50.0), b, Orientation::Vertical, 0.5));
        assert!(point_in_capsule(v(20.0, 0.0), b, Orientation::Vertical, 0.5));
    }

    #[test]
    fn horizontal_caps_cut_the_corners() {
        let b = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert!(!point_in_capsule(v(1.0, 1.0), b, Orientation::Horizontal, 0.5));
        assert!(point_in_capsule(v(50.0, 1.0), b, Orientation::Horizontal, 0.5));
        assert!(point_in_capsule(v(100.0, 20.0), b, Orientation::Horizontal, 0.5));
    }

    #[test]
    fn middle_band_is_bounded_across() {
        let b = Rect::new(0.0, 0.0, 40.0, 100.0);
        assert!(!point_in_capsule(v(-1.0, 50.0), b, Orientation::Vertical, 0.5));
        assert!(!point_in_capsule(v(41.0, 50.0), b, Orientation::Vertical, 0.5));
    }

    #[test]
    fn full_fraction_matches_the_inscribed_ellipse() {
        for (rect, orientation) in [
            (Rect::new(0.0, 0.0, 60.0, 100.0), Orientation::Vertical),
            (Rect::new(0.0, 0.0, 60.0, 100.0), Orientation::Horizontal),
            (Rect::new(5.0, 7.0, 120.0, 30.0), Orientation::Vertical),
            (Rect::new(5.0, 7.0, 120.0, 30.0), Orientation::Horizontal),
        ] {
            let e = Ellipse::from_rect(rect);
            for p in grid(rect, 3.0) {
                assert_eq!(
                    point_in_capsule(p, rect, orientation, 1.0),
                    point_in_ellipse(p, e.center, e.radii.x, e.radii.y),
                    "mismatch at {p:?} for {orientation:?}",
                );
            }
        }
    }

    #[test]
    fn zero_fraction_is_rectangle_containment() {
        let rect = Rect::new(3.0, 4.0, 50.0, 20.0);
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            for p in grid(rect, 3.0) {
                assert_eq!(point_in_capsule(p, rect, orientation, 0.0), rect.contains_closed(p));
            }
            assert!(point_in_capsule(rect.origin, rect, orientation, 0.0));
            assert!(point_in_capsule(rect.max(), rect, orientation, 0.0));
        }
    }

    #[test]
    fn zero_size_box_contains_only_its_origin() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(point_in_capsule(v(5.0, 5.0), rect, Orientation::Vertical, 0.5));
        assert!(!point_in_capsule(v(5.5, 5.0), rect, Orientation::Vertical, 0.5));
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn outline_of_zero_fraction_is_the_rectangle() {
        let cap = Capsule::new(Rect::new(0.0, 0.0, 10.0, 20.0), Orientation::Vertical, 0.0);
        assert_eq!(
            cap.outline(8),
            vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 20.0), v(0.0, 20.0)],
        );
    }

    #[test]
    fn outline_points_lie_on_the_capsule_boundary() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let cap = Capsule::new(Rect::new(0.0, 0.0, 80.0, 120.0), orientation, 0.6);
            let pts = cap.outline(16);
            assert_eq!(pts.len(), 34);
            for p in pts {
                // Nudged toward the center the point is inside; nudged away, outside.
                let c = cap.bounds.center();
                let d = (p - c) * 0.01;
                assert!(cap.contains(p - d), "{p:?} not inside for {orientation:?}");
                assert!(!cap.contains(p + d), "{p:?} not on boundary for {orientation:?}");
            }
        }
    }

    #[test]
    fn vertical_outline_starts_left_and_runs_over_the_top() {
        let cap = Capsule::new(Rect::new(0.0, 0.0, 40.0, 100.0), Orientation::Vertical, 0.5);
        let pts = cap.outline(2);
        assert!((pts[0].x - 0.0).abs() < 1e-4 && (pts[0].y - 25.0).abs() < 1e-4);
        assert!((pts[1].x - 20.0).abs() < 1e-4 && pts[1].y.abs() < 1e-4);
        assert!((pts[2].x - 40.0).abs() < 1e-4);
    }
}
