//! Analytic geometry kernel.
//!
//! Pure functions and small value types for the shapes a control can take:
//! - `Ellipse`: closed elliptical region, with a guarded degenerate case
//! - `Capsule`: two terminal half-ellipses joined by a rectangle (stadium)
//! - `Region`: boolean composition used for clips and border rings
//!
//! Every query is O(1) and total: zero-size boxes and zero axes produce an
//! empty or point-like region, never a division by zero.

mod capsule;
mod ellipse;
mod region;

pub use capsule::{point_in_capsule, Capsule, CapsuleParts, Orientation};
pub use ellipse::{point_in_ellipse, Ellipse};
pub use region::Region;
