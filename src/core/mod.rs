//! Core intersection types and logic.
//!
//! This module contains the pure core of the signal controller:
//! - Closed color, axis, and mode vocabularies
//! - The four-phase transition table over `PhasePair`
//! - Signal heads and the `Intersection` state machine
//! - The typed event journal every operation reports through
//!
//! Nothing in this module performs I/O. Operations return value-typed
//! outcomes and append to the journal; rendering is the shell's job,
//! following the "pure core, imperative shell" philosophy.

mod color;
mod event;
mod head;
mod intersection;
mod phase;

pub use color::{Axis, Color, ColorParseError, Mode};
pub use event::{EventJournal, EventRecord, Severity, SignalEvent};
pub use head::SignalHead;
pub use intersection::{
    CycleOutcome, Intersection, IntersectionError, IntersectionStatus, ModeOutcome,
};
pub use phase::PhasePair;
