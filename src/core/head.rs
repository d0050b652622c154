//! A single signal head on one axis of the intersection.

use super::color::{Axis, Color};
use super::event::SignalEvent;
use serde::{Deserialize, Serialize};

/// One physical signal head: the lamp assembly facing one axis.
///
/// A head knows its axis and its currently lit color, nothing else.
/// Sequencing lives in [`PhasePair`](super::PhasePair) and the
/// [`Intersection`](super::Intersection); the head's only job is to
/// store a color and report the write as an event.
///
/// # Example
///
/// ```rust
/// use crosslight::{Axis, Color, SignalEvent, SignalHead};
///
/// let mut head = SignalHead::new(Axis::NorthSouth, Color::Red);
/// assert_eq!(head.color(), Color::Red);
///
/// let event = head.set_color(Color::Green);
/// assert_eq!(head.color(), Color::Green);
/// assert_eq!(
///     event,
///     SignalEvent::ColorChanged {
///         axis: Axis::NorthSouth,
///         color: Color::Green,
///     }
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignalHead {
    axis: Axis,
    color: Color,
}

impl SignalHead {
    /// Create a head for the given axis with an initial color.
    pub fn new(axis: Axis, color: Color) -> Self {
        Self { axis, color }
    }

    /// The axis this head faces.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The currently lit color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Store a color and report the write.
    ///
    /// Every call emits a [`SignalEvent::ColorChanged`], including
    /// writes that repeat the current color. Observers see each write,
    /// not just the net change.
    pub fn set_color(&mut self, color: Color) -> SignalEvent {
        self.color = color;
        SignalEvent::ColorChanged {
            axis: self.axis,
            color,
        }
    }
}
