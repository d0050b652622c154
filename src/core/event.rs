//! Signal events and the event journal.
//!
//! The original controller printed human-readable lines from deep inside
//! its mutating methods. Here every notification is a value: operations
//! report [`SignalEvent`]s, the intersection journals them in order, and
//! any sink (console shell, test harness) renders or inspects them after
//! the fact. The core itself performs no I/O.

use super::color::{Axis, Color, Mode};
use super::phase::PhasePair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Severity class of a reported event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Short uppercase label, as used by console renderers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single observable notification from the core.
///
/// Events carry the facts; [`Display`](fmt::Display) renders the
/// human-readable sentence a console would print.
///
/// # Example
///
/// ```rust
/// use crosslight::{Axis, Color, Severity, SignalEvent};
///
/// let event = SignalEvent::ColorChanged {
///     axis: Axis::NorthSouth,
///     color: Color::Green,
/// };
/// assert_eq!(event.severity(), Severity::Info);
/// assert_eq!(event.to_string(), "Signal head North/South set to green.");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SignalEvent {
    /// A head stored a new color. Emitted by the head's single mutator,
    /// once per write, even when the color is unchanged.
    ColorChanged { axis: Axis, color: Color },

    /// The emergency override was switched. Same-value switches re-emit;
    /// repetition is never suppressed.
    ModeChanged { mode: Mode },

    /// A cycle was requested while the emergency override was active.
    CycleBlocked,

    /// The cycle found a color pair outside the canonical table and reset
    /// the lights to the start of the cycle.
    StateRecovered { found: PhasePair },

    /// A head-touching operation found a head absent and made no writes.
    HeadsUnavailable,
}

impl SignalEvent {
    /// Severity classification for rendering and filtering.
    pub fn severity(&self) -> Severity {
        match self {
            Self::ColorChanged { .. } | Self::ModeChanged { .. } => Severity::Info,
            Self::CycleBlocked | Self::StateRecovered { .. } => Severity::Warning,
            Self::HeadsUnavailable => Severity::Error,
        }
    }
}

impl fmt::Display for SignalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorChanged { axis, color } => {
                write!(f, "Signal head {axis} set to {color}.")
            }
            Self::ModeChanged {
                mode: Mode::Emergency,
            } => f.write_str("Emergency mode activated."),
            Self::ModeChanged { mode: Mode::Normal } => {
                f.write_str("Emergency mode deactivated.")
            }
            Self::CycleBlocked => f.write_str("Cannot cycle - emergency mode is active."),
            Self::StateRecovered { .. } => {
                f.write_str("Invalid state detected. Reset to initial state.")
            }
            Self::HeadsUnavailable => f.write_str("Signal heads are not properly initialized."),
        }
    }
}

/// A journaled event with the moment it was recorded.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    pub event: SignalEvent,
    pub recorded_at: DateTime<Utc>,
}

impl EventRecord {
    /// Stamp an event with the current time.
    pub fn new(event: SignalEvent) -> Self {
        Self {
            event,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered journal of reported events.
///
/// Recording is pure: `record` returns a new journal with the entry
/// appended and leaves the original untouched. The
/// [`Intersection`](crate::core::Intersection) owns one journal and
/// replaces it on every report, so a shared reference to the journal is
/// always a consistent snapshot.
///
/// # Example
///
/// ```rust
/// use crosslight::{EventJournal, EventRecord, SignalEvent};
///
/// let journal = EventJournal::new();
/// let journal = journal.record(EventRecord::new(SignalEvent::CycleBlocked));
///
/// assert_eq!(journal.len(), 1);
/// assert!(matches!(
///     journal.latest().unwrap().event,
///     SignalEvent::CycleBlocked
/// ));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventJournal {
    records: Vec<EventRecord>,
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl EventJournal {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record an event, returning a new journal.
    pub fn record(&self, record: EventRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// The most recently recorded entry.
    pub fn latest(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    /// Records of the given severity, oldest first.
    pub fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &EventRecord> {
        self.records
            .iter()
            .filter(move |record| record.event.severity() == severity)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Elapsed time from the first record to the last, `None` while empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.recorded_at.signed_duration_since(first.recorded_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
