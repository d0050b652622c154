//! Build errors for intersection construction.

use crate::core::Axis;
use thiserror::Error;

/// Errors that can occur when building an intersection.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("North/South head not specified. Call .north_south(head) before .build()")]
    MissingNorthSouthHead,

    #[error("East/West head not specified. Call .east_west(head) before .build()")]
    MissingEastWestHead,

    #[error("Head for the {slot} slot carries the {found} axis. Build the head for the slot it occupies")]
    AxisMismatch { slot: Axis, found: Axis },
}
