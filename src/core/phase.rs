//! Phase pairs and the normal-mode transition table.
//!
//! The intersection's observable state is the joint color assignment of
//! its two heads. Four pairs are valid steady states in normal operation;
//! the table below drives one cycle step. Anything outside the table is
//! treated as corrupted state and recovered, never advanced.

use super::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A joint (North/South, East/West) color assignment.
///
/// The canonical cycle, in order:
///
/// | current | next |
/// |---|---|
/// | green, red | yellow, red |
/// | yellow, red | red, green |
/// | red, green | red, yellow |
/// | red, yellow | green, red |
///
/// # Example
///
/// ```rust
/// use crosslight::PhasePair;
///
/// let mut pair = PhasePair::START;
/// for _ in 0..4 {
///     pair = pair.successor().unwrap();
/// }
/// assert_eq!(pair, PhasePair::START);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhasePair {
    pub north_south: Color,
    pub east_west: Color,
}

impl PhasePair {
    /// Canonical start of the cycle: North/South proceeds, East/West holds.
    pub const START: Self = Self::new(Color::Green, Color::Red);

    /// Emergency configuration: both approaches held.
    pub const ALL_RED: Self = Self::new(Color::Red, Color::Red);

    /// The four valid normal-mode pairs, in cycle order from [`Self::START`].
    pub const CANONICAL: [Self; 4] = [
        Self::new(Color::Green, Color::Red),
        Self::new(Color::Yellow, Color::Red),
        Self::new(Color::Red, Color::Green),
        Self::new(Color::Red, Color::Yellow),
    ];

    /// Create a pair from per-axis colors.
    pub const fn new(north_south: Color, east_west: Color) -> Self {
        Self {
            north_south,
            east_west,
        }
    }

    /// Whether this pair is one of the four valid normal-mode states.
    pub fn is_canonical(&self) -> bool {
        Self::CANONICAL.contains(self)
    }

    /// Table-specified successor, or `None` for any pair outside the
    /// canonical four. The caller treats `None` as corrupted state and
    /// resets to [`Self::START`].
    pub fn successor(&self) -> Option<Self> {
        use Color::{Green, Red, Yellow};

        match (self.north_south, self.east_west) {
            (Green, Red) => Some(Self::new(Yellow, Red)),
            (Yellow, Red) => Some(Self::new(Red, Green)),
            (Red, Green) => Some(Self::new(Red, Yellow)),
            (Red, Yellow) => Some(Self::new(Green, Red)),
            _ => None,
        }
    }
}

impl fmt::Display for PhasePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.north_south, self.east_west)
    }
}
