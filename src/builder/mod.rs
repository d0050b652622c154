//! Builder API for ergonomic intersection construction.
//!
//! This module provides a fluent builder for assembling an intersection
//! from its two heads, with slot validation at build time.

pub mod error;
pub mod intersection;

pub use error::BuildError;
pub use intersection::IntersectionBuilder;

use crate::core::{Axis, Color, Intersection, SignalHead};

/// Create the standard normal-mode intersection.
///
/// Both heads start red and the build canonicalizes the colors, so the
/// result is at the cycle start: North/South green, East/West red.
///
/// # Example
///
/// ```rust
/// use crosslight::builder::standard_intersection;
/// use crosslight::{Color, Mode};
///
/// let intersection = standard_intersection();
/// let status = intersection.status().unwrap();
///
/// assert_eq!(status.north_south, Color::Green);
/// assert_eq!(status.east_west, Color::Red);
/// assert_eq!(status.mode, Mode::Normal);
/// ```
pub fn standard_intersection() -> Intersection {
    IntersectionBuilder::new()
        .north_south(SignalHead::new(Axis::NorthSouth, Color::Red))
        .east_west(SignalHead::new(Axis::EastWest, Color::Red))
        .build()
        .expect("Standard intersection should always build")
}
