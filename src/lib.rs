//! Crosslight: a pure-core state machine for two-axis signalized intersections
//!
//! Crosslight follows the "pure core, imperative shell" philosophy. The core
//! intersection logic is plain data and pure decisions: every operation
//! returns a value-typed outcome and appends typed events to an immutable
//! journal, while all printing and input parsing is isolated in the `shell`
//! module.
//!
//! # Core Concepts
//!
//! - **Colors and phases**: closed enums and the four-phase transition table
//! - **Heads**: one signal head per axis, driven only through the intersection
//! - **Emergency override**: forces both heads red and blocks cycling
//! - **Event journal**: immutable, timestamped record of every observable step
//!
//! # Example
//!
//! ```rust
//! use crosslight::builder::standard_intersection;
//! use crosslight::{Color, CycleOutcome, Mode, SignalEvent};
//!
//! let mut intersection = standard_intersection();
//!
//! // Walk one step along the cycle.
//! let outcome = intersection.cycle();
//! assert!(matches!(outcome, CycleOutcome::Advanced { .. }));
//!
//! let status = intersection.status().unwrap();
//! assert_eq!(status.north_south, Color::Yellow);
//! assert_eq!(status.east_west, Color::Red);
//! assert_eq!(status.mode, Mode::Normal);
//!
//! // The override dominates cycling until it is lifted.
//! intersection.set_emergency_mode(true);
//! assert!(matches!(intersection.cycle(), CycleOutcome::Blocked));
//! assert!(matches!(
//!     intersection.journal().latest().unwrap().event,
//!     SignalEvent::CycleBlocked
//! ));
//! ```

pub mod builder;
pub mod core;
pub mod shell;

// Re-export commonly used types
pub use crate::builder::{BuildError, IntersectionBuilder};
pub use crate::core::{
    Axis, Color, ColorParseError, CycleOutcome, EventJournal, EventRecord, Intersection,
    IntersectionError, IntersectionStatus, Mode, ModeOutcome, PhasePair, Severity, SignalEvent,
    SignalHead,
};
