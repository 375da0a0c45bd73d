use oval_engine::coords::{Rect, Vec2};
use oval_engine::geom::{Capsule, Ellipse, Region};
use thiserror::Error;

pub use oval_engine::geom::Orientation;

/// Rejected control configuration. No state changes when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("invalid shape family code: {0}")]
    InvalidFamily(i32),

    #[error("invalid orientation code: {0}")]
    InvalidOrientation(i32),

    #[error("radius fraction {0} is outside [0, 1]")]
    RadiusOutOfRange(f32),
}

/// Outline family of a control. Fixed for the control's lifetime.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ShapeFamily {
    /// Ellipse inscribed in the bounding box.
    #[default]
    Oval,
    /// Stadium: two half-ellipse caps joined by a rectangle.
    Capsule,
}

impl ShapeFamily {
    pub const OVAL_CODE: i32 = 0;
    pub const CAPSULE_CODE: i32 = 1;
}

impl TryFrom<i32> for ShapeFamily {
    type Error = ShapeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            Self::OVAL_CODE => Ok(ShapeFamily::Oval),
            Self::CAPSULE_CODE => Ok(ShapeFamily::Capsule),
            other => Err(ShapeError::InvalidFamily(other)),
        }
    }
}

/// Integer codes accepted by [`ShapeDescriptor::from_codes`].
pub mod orientation_code {
    pub const VERTICAL: i32 = 2;
    pub const HORIZONTAL: i32 = 4;
}

fn orientation_from_code(code: i32) -> Result<Orientation, ShapeError> {
    match code {
        orientation_code::VERTICAL => Ok(Orientation::Vertical),
        orientation_code::HORIZONTAL => Ok(Orientation::Horizontal),
        other => Err(ShapeError::InvalidOrientation(other)),
    }
}

/// Default capsule radius fraction.
pub const DEFAULT_RADIUS_FRACTION: f32 = 0.5;

/// Immutable shape family/orientation plus the mutable capsule radius fraction.
///
/// The descriptor never stores a bounding box: every query takes the host's
/// current origin and size, so a resized host is tracked without re-registering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeDescriptor {
    family: ShapeFamily,
    orientation: Orientation,
    radius_fraction: f32,
}

impl ShapeDescriptor {
    pub const fn new(family: ShapeFamily, orientation: Orientation) -> Self {
        Self { family, orientation, radius_fraction: DEFAULT_RADIUS_FRACTION }
    }

    pub const fn oval() -> Self {
        Self::new(ShapeFamily::Oval, Orientation::Vertical)
    }

    pub const fn capsule(orientation: Orientation) -> Self {
        Self::new(ShapeFamily::Capsule, orientation)
    }

    /// Builds a descriptor from the legacy integer codes
    /// (OVAL = 0, CAPSULE = 1; VERTICAL = 2, HORIZONTAL = 4).
    pub fn from_codes(family: i32, orientation: i32) -> Result<Self, ShapeError> {
        let family = ShapeFamily::try_from(family)?;
        let orientation = orientation_from_code(orientation)?;
        Ok(Self::new(family, orientation))
    }

    /// Builder form of [`set_radius_fraction`](Self::set_radius_fraction).
    pub fn with_radius_fraction(mut self, fraction: f32) -> Result<Self, ShapeError> {
        self.set_radius_fraction(fraction)?;
        Ok(self)
    }

    #[inline]
    pub fn family(&self) -> ShapeFamily {
        self.family
    }

    /// Capsule orientation. Carried but ignored for ovals.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn radius_fraction(&self) -> f32 {
        self.radius_fraction
    }

    /// Sets the capsule radius fraction. Values outside [0, 1] (or NaN) are
    /// rejected and the previous value is kept. Ignored by ovals at query time.
    pub fn set_radius_fraction(&mut self, fraction: f32) -> Result<(), ShapeError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ShapeError::RadiusOutOfRange(fraction));
        }
        self.radius_fraction = fraction;
        Ok(())
    }

    /// Capsule cap radius for a box of `size`:
    /// `0.5 * fraction * (height if vertical else width)`.
    pub fn capsule_radius(&self, size: Vec2) -> f32 {
        Capsule::new(Rect::from_origin_size(Vec2::zero(), size), self.orientation, self.radius_fraction)
            .cap_radius()
    }

    /// Hit region for a control occupying `bounds`.
    pub fn region(&self, bounds: Rect) -> Region {
        match self.family {
            ShapeFamily::Oval => Region::Ellipse(Ellipse::from_rect(bounds)),
            ShapeFamily::Capsule => {
                Region::Capsule(Capsule::new(bounds, self.orientation, self.radius_fraction))
            }
        }
    }

    /// Whether a screen-space point hits the control whose top-left corner is
    /// currently at `origin` on screen and whose current size is `size`.
    pub fn is_point_inside(&self, point: Vec2, origin: Vec2, size: Vec2) -> bool {
        self.region(Rect::from_origin_size(origin, size)).contains(point)
    }
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        Self::oval()
    }
}
