//! Closed vocabularies for signal colors, approach axes, and operating mode.
//!
//! The original console-driven controller compared free-form lowercase
//! strings; here every vocabulary is a closed enum, so an out-of-range
//! value is unrepresentable. Textual input exists only at the boundary:
//! parsing trims and case-normalizes before conversion, and the interior
//! of the state machine never touches raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color shown by a signal head.
///
/// Exactly three members. Parsing accepts any casing of the three
/// recognized tokens and rejects everything else.
///
/// # Example
///
/// ```rust
/// use crosslight::Color;
///
/// let color: Color = " GREEN ".parse().unwrap();
/// assert_eq!(color, Color::Green);
/// assert_eq!(color.to_string(), "green");
///
/// assert!("blue".parse::<Color>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl Color {
    /// The color's lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color token is not one of the recognized names.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("Unrecognized color token '{0}'. Expected 'red', 'yellow', or 'green'.")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "yellow" => Ok(Self::Yellow),
            "green" => Ok(Self::Green),
            _ => Err(ColorParseError(s.trim().to_string())),
        }
    }
}

/// One of the two perpendicular approaches controlled by the intersection.
///
/// Each [`SignalHead`](crate::core::SignalHead) faces exactly one axis,
/// fixed at construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Axis {
    NorthSouth,
    EastWest,
}

impl Axis {
    /// The axis's display name, matching the signage convention.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NorthSouth => "North/South",
            Self::EastWest => "East/West",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operating mode of the intersection: the two-variant projection of the
/// emergency flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mode {
    Normal,
    Emergency,
}

impl Mode {
    /// The mode's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
