use std::f32::consts::{PI, TAU};

use crate::coords::{Rect, Vec2};

/// Closed-region ellipse test: `(dx/a)² + (dy/b)² <= 1`.
///
/// Boundary points are inside. Negative axes are read as their magnitude.
/// A zero axis collapses the ellipse to a segment on the other axis, and two
/// zero axes collapse it to `center`; membership is then exact coincidence.
pub fn point_in_ellipse(p: Vec2, center: Vec2, a: f32, b: f32) -> bool {
    let a = a.abs();
    let b = b.abs();
    let dx = p.x - center.x;
    let dy = p.y - center.y;

    match (a > 0.0, b > 0.0) {
        (true, true) => (dx * dx) / (a * a) + (dy * dy) / (b * b) <= 1.0,
        (false, true) => dx == 0.0 && dy.abs() <= b,
        (true, false) => dy == 0.0 && dx.abs() <= a,
        (false, false) => dx == 0.0 && dy == 0.0,
    }
}

/// Axis-aligned ellipse described by its center and semi-axes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    /// Semi-axis along X (`a`) and along Y (`b`).
    pub radii: Vec2,
}

impl Ellipse {
    #[inline]
    pub const fn new(center: Vec2, radii: Vec2) -> Self {
        Self { center, radii }
    }

    /// The ellipse inscribed in `rect`.
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.normalized();
        Self::new(r.center(), r.size * 0.5)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        point_in_ellipse(p, self.center, self.radii.x, self.radii.y)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        let a = self.radii.x.abs();
        let b = self.radii.y.abs();
        Rect::new(self.center.x - a, self.center.y - b, 2.0 * a, 2.0 * b)
    }

    /// Closed polygon approximating the boundary, clockwise on screen,
    /// starting at the leftmost point.
    pub fn outline(&self, segments: usize) -> Vec<Vec2> {
        let n = segments.max(3);
        (0..n)
            .map(|i| {
                let theta = PI + TAU * (i as f32) / (n as f32);
                self.point_at(theta)
            })
            .collect()
    }

    /// Boundary point at parametric angle `theta` (screen space, +Y down).
    #[inline]
    pub(crate) fn point_at(&self, theta: f32) -> Vec2 {
        Vec2::new(
            self.center.x + self.radii.x * theta.cos(),
            self.center.y + self.radii.y * theta.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    // ── point_in_ellipse ──────────────────────────────────────────────────

    #[test]
    fn center_is_inside() {
        assert!(point_in_ellipse(v(50.0, 30.0), v(50.0, 30.0), 50.0, 30.0));
    }

    #[test]
    fn boundary_points_are_inside() {
        let c = v(0.0, 0.0);
        assert!(point_in_ellipse(v(4.0, 0.0), c, 4.0, 2.0));
        assert!(point_in_ellipse(v(0.0, -2.0), c, 4.0, 2.0));
        assert!(!point_in_ellipse(v(4.001, 0.0), c, 4.0, 2.0));
    }

    #[test]
    fn bounding_box_corner_is_outside() {
        assert!(!point_in_ellipse(v(0.0, 0.0), v(50.0, 50.0), 50.0, 50.0));
    }

    #[test]
    fn zero_minor_axis_is_a_segment() {
        let c = v(10.0, 10.0);
        assert!(point_in_ellipse(v(14.0, 10.0), c, 5.0, 0.0));
        assert!(!point_in_ellipse(v(14.0, 10.5), c, 5.0, 0.0));
        assert!(!point_in_ellipse(v(16.0, 10.0), c, 5.0, 0.0));
    }

    #[test]
    fn zero_major_axis_is_a_segment() {
        let c = v(10.0, 10.0);
        assert!(point_in_ellipse(v(10.0, 7.0), c, 0.0, 3.0));
        assert!(!point_in_ellipse(v(10.1, 10.0), c, 0.0, 3.0));
    }

    #[test]
    fn both_axes_zero_is_a_point() {
        let c = v(3.0, 4.0);
        assert!(point_in_ellipse(c, c, 0.0, 0.0));
        assert!(!point_in_ellipse(v(3.0, 4.0001), c, 0.0, 0.0));
    }

    #[test]
    fn nan_axes_never_panic() {
        assert!(!point_in_ellipse(v(1.0, 1.0), v(0.0, 0.0), f32::NAN, f32::NAN));
    }

    // ── Ellipse ───────────────────────────────────────────────────────────

    #[test]
    fn from_rect_inscribes() {
        let e = Ellipse::from_rect(Rect::new(10.0, 20.0, 100.0, 40.0));
        assert_eq!(e.center, v(60.0, 40.0));
        assert_eq!(e.radii, v(50.0, 20.0));
        assert_eq!(e.bounds(), Rect::new(10.0, 20.0, 100.0, 40.0));
    }

    #[test]
    fn outline_points_lie_on_boundary() {
        let e = Ellipse::new(v(0.0, 0.0), v(8.0, 3.0));
        let pts = e.outline(32);
        assert_eq!(pts.len(), 32);
        assert!((pts[0].x + 8.0).abs() < 1e-4);
        for p in pts {
            let k = (p.x / 8.0).powi(2) + (p.y / 3.0).powi(2);
            assert!((k - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn outline_clamps_segment_count() {
        assert_eq!(Ellipse::new(v(0.0, 0.0), v(1.0, 1.0)).outline(0).len(), 3);
    }
}
