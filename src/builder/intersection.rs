//! Builder for constructing intersections.

use crate::builder::error::BuildError;
use crate::core::{Axis, Intersection, SignalHead};

/// Builder for constructing intersections with a fluent API.
///
/// Both head slots are required and validated: the head installed in a
/// slot must carry that slot's axis, so the events it later reports name
/// the direction it actually faces. The emergency flag defaults to off.
///
/// # Example
///
/// ```rust
/// use crosslight::{Axis, Color, IntersectionBuilder, Mode, SignalHead};
///
/// let intersection = IntersectionBuilder::new()
///     .north_south(SignalHead::new(Axis::NorthSouth, Color::Red))
///     .east_west(SignalHead::new(Axis::EastWest, Color::Red))
///     .emergency(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(intersection.mode(), Mode::Emergency);
/// ```
pub struct IntersectionBuilder {
    north_south: Option<SignalHead>,
    east_west: Option<SignalHead>,
    emergency: bool,
}

impl IntersectionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            north_south: None,
            east_west: None,
            emergency: false,
        }
    }

    /// Set the North/South head (required).
    pub fn north_south(mut self, head: SignalHead) -> Self {
        self.north_south = Some(head);
        self
    }

    /// Set the East/West head (required).
    pub fn east_west(mut self, head: SignalHead) -> Self {
        self.east_west = Some(head);
        self
    }

    /// Start in emergency mode (default: off).
    pub fn emergency(mut self, active: bool) -> Self {
        self.emergency = active;
        self
    }

    /// Build the intersection.
    /// Returns an error if a head is missing or installed in the wrong slot.
    pub fn build(self) -> Result<Intersection, BuildError> {
        let north_south = self
            .north_south
            .ok_or(BuildError::MissingNorthSouthHead)?;
        let east_west = self.east_west.ok_or(BuildError::MissingEastWestHead)?;

        if north_south.axis() != Axis::NorthSouth {
            return Err(BuildError::AxisMismatch {
                slot: Axis::NorthSouth,
                found: north_south.axis(),
            });
        }
        if east_west.axis() != Axis::EastWest {
            return Err(BuildError::AxisMismatch {
                slot: Axis::EastWest,
                found: east_west.axis(),
            });
        }

        Ok(Intersection::new(north_south, east_west, self.emergency))
    }
}

impl Default for IntersectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
