//! The intersection controller: two heads, one mode flag, one journal.
//!
//! All sequencing decisions live here. The controller reads both heads,
//! consults the transition table in [`PhasePair`], writes both heads, and
//! journals every observable step. Faults never unwind: a blocked cycle,
//! a corrupt color pair, or an absent head each map to a journaled
//! notification and a value-typed outcome.

use super::color::{Color, Mode};
use super::event::{EventJournal, EventRecord, SignalEvent};
use super::head::SignalHead;
use super::phase::PhasePair;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error from the pure status projection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum IntersectionError {
    /// At least one head slot is empty.
    #[error("Signal heads are not properly initialized.")]
    HeadsUnavailable,
}

/// What a `cycle` call did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleOutcome {
    /// The pair was canonical and advanced one step along the table.
    Advanced { from: PhasePair, to: PhasePair },
    /// The pair was outside the table and was reset to the cycle start.
    Recovered { found: PhasePair },
    /// Emergency mode is active; nothing was written.
    Blocked,
    /// A head is absent; nothing was written.
    Unavailable,
}

/// What a `set_emergency_mode` call did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModeOutcome {
    /// The flag was updated and both heads were driven to the mode's pair.
    Applied { mode: Mode },
    /// The flag was updated but a head is absent, so no colors changed.
    FlagOnly { mode: Mode },
}

/// Point-in-time projection of both colors and the mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IntersectionStatus {
    pub north_south: Color,
    pub east_west: Color,
    pub mode: Mode,
}

impl IntersectionStatus {
    /// The two colors as a pair, for comparison against the table.
    pub fn phase(&self) -> PhasePair {
        PhasePair::new(self.north_south, self.east_west)
    }
}

/// A signalized intersection of two perpendicular axes.
///
/// The intersection owns both [`SignalHead`]s, the emergency flag, and the
/// [`EventJournal`]. Construction canonicalizes the colors for the chosen
/// mode, so a fresh intersection is always in a well-defined phase no
/// matter what colors the supplied heads carried.
///
/// Head slots are `Option`s: a head can be removed for service with
/// [`take_north_south`](Self::take_north_south) /
/// [`take_east_west`](Self::take_east_west) and reinstalled with the
/// corresponding setter. Every head-touching operation re-checks presence
/// and reports [`SignalEvent::HeadsUnavailable`] instead of writing
/// partially.
///
/// All operations are synchronous and single-threaded. The type is plain
/// owned data, so it is `Send` and `Sync`, but `cycle` and
/// `set_emergency_mode` are two-head read-modify-write sequences: a
/// multi-threaded host must guard the whole intersection with one lock
/// rather than locking heads individually.
///
/// # Example
///
/// ```rust
/// use crosslight::{Axis, Color, CycleOutcome, Intersection, Mode, SignalHead};
///
/// let mut intersection = Intersection::new(
///     SignalHead::new(Axis::NorthSouth, Color::Red),
///     SignalHead::new(Axis::EastWest, Color::Red),
///     false,
/// );
///
/// let status = intersection.status().unwrap();
/// assert_eq!(status.north_south, Color::Green);
/// assert_eq!(status.east_west, Color::Red);
/// assert_eq!(status.mode, Mode::Normal);
///
/// let outcome = intersection.cycle();
/// assert!(matches!(outcome, CycleOutcome::Advanced { .. }));
/// assert_eq!(intersection.status().unwrap().north_south, Color::Yellow);
/// ```
#[derive(Clone, Debug)]
pub struct Intersection {
    north_south: Option<SignalHead>,
    east_west: Option<SignalHead>,
    emergency_active: bool,
    journal: EventJournal,
}

impl Intersection {
    /// Create an intersection from two heads and an initial mode.
    ///
    /// The supplied colors are overwritten immediately: emergency start
    /// drives both heads red, normal start drives the cycle's first pair
    /// (North/South green, East/West red). Both writes are journaled.
    pub fn new(north_south: SignalHead, east_west: SignalHead, emergency: bool) -> Self {
        let mut intersection = Self {
            north_south: Some(north_south),
            east_west: Some(east_west),
            emergency_active: emergency,
            journal: EventJournal::new(),
        };
        let start = if emergency {
            PhasePair::ALL_RED
        } else {
            PhasePair::START
        };
        intersection.write_pair(start);
        intersection
    }

    /// Advance the signals one step.
    ///
    /// Checks run in a fixed order: the emergency flag first (a blocked
    /// cycle never reads or writes the heads), head presence second, and
    /// only then the transition table. A canonical pair advances to its
    /// successor; any other pair is reset to the cycle start with a
    /// [`SignalEvent::StateRecovered`] warning, and the call still counts
    /// as a completed cycle. Every non-blocked, non-failed cycle writes
    /// both heads, North/South first.
    pub fn cycle(&mut self) -> CycleOutcome {
        if self.emergency_active {
            self.record(SignalEvent::CycleBlocked);
            return CycleOutcome::Blocked;
        }
        let Some(found) = self.current_pair() else {
            self.record(SignalEvent::HeadsUnavailable);
            return CycleOutcome::Unavailable;
        };
        match found.successor() {
            Some(next) => {
                self.write_pair(next);
                CycleOutcome::Advanced { from: found, to: next }
            }
            None => {
                self.write_pair(PhasePair::START);
                self.record(SignalEvent::StateRecovered { found });
                CycleOutcome::Recovered { found }
            }
        }
    }

    /// Switch the emergency override on or off.
    ///
    /// The flag is updated unconditionally, before the head check: with a
    /// head absent the call reports [`SignalEvent::HeadsUnavailable`],
    /// writes no colors, and returns [`ModeOutcome::FlagOnly`], leaving
    /// the flag and the colors deliberately out of step until a head is
    /// reinstalled. With both heads present, activation drives both heads
    /// red and deactivation returns the signals to the cycle start, in
    /// either case North/South first, followed by a
    /// [`SignalEvent::ModeChanged`].
    ///
    /// Repeating the current mode repeats the writes and the
    /// notifications; same-value calls are never suppressed.
    pub fn set_emergency_mode(&mut self, active: bool) -> ModeOutcome {
        self.emergency_active = active;
        let mode = self.mode();
        if self.north_south.is_none() || self.east_west.is_none() {
            self.record(SignalEvent::HeadsUnavailable);
            return ModeOutcome::FlagOnly { mode };
        }
        let target = if active {
            PhasePair::ALL_RED
        } else {
            PhasePair::START
        };
        self.write_pair(target);
        self.record(SignalEvent::ModeChanged { mode });
        ModeOutcome::Applied { mode }
    }

    /// Project the current colors and mode.
    ///
    /// Pure read: never mutates and never journals. With a head absent
    /// there is no meaningful pair to report, so the projection fails
    /// with [`IntersectionError::HeadsUnavailable`].
    pub fn status(&self) -> Result<IntersectionStatus, IntersectionError> {
        match self.current_pair() {
            Some(pair) => Ok(IntersectionStatus {
                north_south: pair.north_south,
                east_west: pair.east_west,
                mode: self.mode(),
            }),
            None => Err(IntersectionError::HeadsUnavailable),
        }
    }

    /// The current mode, projected from the emergency flag.
    pub fn mode(&self) -> Mode {
        if self.emergency_active {
            Mode::Emergency
        } else {
            Mode::Normal
        }
    }

    /// Whether the emergency override is active.
    pub fn is_emergency_active(&self) -> bool {
        self.emergency_active
    }

    /// The North/South head, if installed.
    pub fn north_south(&self) -> Option<&SignalHead> {
        self.north_south.as_ref()
    }

    /// The East/West head, if installed.
    pub fn east_west(&self) -> Option<&SignalHead> {
        self.east_west.as_ref()
    }

    /// Install a North/South head, returning the one it replaced.
    pub fn set_north_south(&mut self, head: SignalHead) -> Option<SignalHead> {
        self.north_south.replace(head)
    }

    /// Install an East/West head, returning the one it replaced.
    pub fn set_east_west(&mut self, head: SignalHead) -> Option<SignalHead> {
        self.east_west.replace(head)
    }

    /// Remove the North/South head for service.
    pub fn take_north_south(&mut self) -> Option<SignalHead> {
        self.north_south.take()
    }

    /// Remove the East/West head for service.
    pub fn take_east_west(&mut self) -> Option<SignalHead> {
        self.east_west.take()
    }

    /// Everything the intersection has reported, oldest first.
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    fn current_pair(&self) -> Option<PhasePair> {
        let ns = self.north_south.as_ref()?;
        let ew = self.east_west.as_ref()?;
        Some(PhasePair::new(ns.color(), ew.color()))
    }

    /// Drive both heads to a pair, North/South first, journaling each write.
    fn write_pair(&mut self, pair: PhasePair) {
        if let Some(head) = self.north_south.as_mut() {
            let event = head.set_color(pair.north_south);
            self.record(event);
        }
        if let Some(head) = self.east_west.as_mut() {
            let event = head.set_color(pair.east_west);
            self.record(event);
        }
    }

    fn record(&mut self, event: SignalEvent) {
        self.journal = self.journal.record(EventRecord::new(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Axis;

    fn standard() -> Intersection {
        Intersection::new(
            SignalHead::new(Axis::NorthSouth, Color::Red),
            SignalHead::new(Axis::EastWest, Color::Red),
            false,
        )
    }

    fn events(intersection: &Intersection) -> Vec<SignalEvent> {
        intersection
            .journal()
            .records()
            .iter()
            .map(|record| record.event)
            .collect()
    }

    #[test]
    fn normal_construction_starts_at_green_red() {
        let intersection = standard();
        let status = intersection.status().unwrap();

        assert_eq!(status.phase(), PhasePair::START);
        assert_eq!(status.mode, Mode::Normal);
        assert_eq!(
            events(&intersection),
            vec![
                SignalEvent::ColorChanged {
                    axis: Axis::NorthSouth,
                    color: Color::Green,
                },
                SignalEvent::ColorChanged {
                    axis: Axis::EastWest,
                    color: Color::Red,
                },
            ]
        );
    }

    #[test]
    fn emergency_construction_starts_all_red() {
        let intersection = Intersection::new(
            SignalHead::new(Axis::NorthSouth, Color::Green),
            SignalHead::new(Axis::EastWest, Color::Green),
            true,
        );
        let status = intersection.status().unwrap();

        assert_eq!(status.phase(), PhasePair::ALL_RED);
        assert_eq!(status.mode, Mode::Emergency);
    }

    #[test]
    fn cycle_advances_along_the_table() {
        let mut intersection = standard();

        let outcome = intersection.cycle();
        assert_eq!(
            outcome,
            CycleOutcome::Advanced {
                from: PhasePair::START,
                to: PhasePair::new(Color::Yellow, Color::Red),
            }
        );
        assert_eq!(
            intersection.status().unwrap().phase(),
            PhasePair::new(Color::Yellow, Color::Red)
        );
    }

    #[test]
    fn each_cycle_writes_both_heads_in_order() {
        let mut intersection = standard();
        let before = intersection.journal().len();

        intersection.cycle();

        let recorded = events(&intersection);
        assert_eq!(recorded.len(), before + 2);
        assert_eq!(
            recorded[before],
            SignalEvent::ColorChanged {
                axis: Axis::NorthSouth,
                color: Color::Yellow,
            }
        );
        assert_eq!(
            recorded[before + 1],
            SignalEvent::ColorChanged {
                axis: Axis::EastWest,
                color: Color::Red,
            }
        );
    }

    #[test]
    fn blocked_cycle_changes_nothing() {
        let mut intersection = standard();
        intersection.set_emergency_mode(true);
        let before = intersection.status().unwrap();

        let outcome = intersection.cycle();

        assert_eq!(outcome, CycleOutcome::Blocked);
        assert_eq!(intersection.status().unwrap(), before);
        assert_eq!(
            intersection.journal().latest().unwrap().event,
            SignalEvent::CycleBlocked
        );
    }

    #[test]
    fn cycle_without_a_head_reports_and_aborts() {
        let mut intersection = standard();
        let removed = intersection.take_north_south();
        assert!(removed.is_some());

        let outcome = intersection.cycle();

        assert_eq!(outcome, CycleOutcome::Unavailable);
        assert_eq!(
            intersection.journal().latest().unwrap().event,
            SignalEvent::HeadsUnavailable
        );
        // The remaining head was not half-written.
        assert_eq!(intersection.east_west().unwrap().color(), Color::Red);
    }

    #[test]
    fn cycle_resets_a_corrupt_pair() {
        let mut intersection = standard();
        let mut head = intersection.take_east_west().unwrap();
        head.set_color(Color::Green);
        intersection.set_east_west(head);
        let before = intersection.journal().len();

        let outcome = intersection.cycle();

        assert_eq!(
            outcome,
            CycleOutcome::Recovered {
                found: PhasePair::new(Color::Green, Color::Green),
            }
        );
        assert_eq!(intersection.status().unwrap().phase(), PhasePair::START);

        let recorded = events(&intersection);
        assert_eq!(
            &recorded[before..],
            &[
                SignalEvent::ColorChanged {
                    axis: Axis::NorthSouth,
                    color: Color::Green,
                },
                SignalEvent::ColorChanged {
                    axis: Axis::EastWest,
                    color: Color::Red,
                },
                SignalEvent::StateRecovered {
                    found: PhasePair::new(Color::Green, Color::Green),
                },
            ]
        );
    }

    #[test]
    fn every_corrupt_pair_recovers_to_the_start() {
        for ns in [Color::Red, Color::Yellow, Color::Green] {
            for ew in [Color::Red, Color::Yellow, Color::Green] {
                let found = PhasePair::new(ns, ew);
                if found.is_canonical() {
                    continue;
                }
                let mut intersection = standard();
                let mut head = intersection.take_north_south().unwrap();
                head.set_color(ns);
                intersection.set_north_south(head);
                let mut head = intersection.take_east_west().unwrap();
                head.set_color(ew);
                intersection.set_east_west(head);

                assert_eq!(intersection.cycle(), CycleOutcome::Recovered { found });
                assert_eq!(intersection.status().unwrap().phase(), PhasePair::START);
            }
        }
    }

    #[test]
    fn emergency_forces_both_heads_red() {
        let mut intersection = standard();
        let before = intersection.journal().len();

        let outcome = intersection.set_emergency_mode(true);

        assert_eq!(
            outcome,
            ModeOutcome::Applied {
                mode: Mode::Emergency,
            }
        );
        assert_eq!(intersection.status().unwrap().phase(), PhasePair::ALL_RED);

        let recorded = events(&intersection);
        assert_eq!(
            &recorded[before..],
            &[
                SignalEvent::ColorChanged {
                    axis: Axis::NorthSouth,
                    color: Color::Red,
                },
                SignalEvent::ColorChanged {
                    axis: Axis::EastWest,
                    color: Color::Red,
                },
                SignalEvent::ModeChanged {
                    mode: Mode::Emergency,
                },
            ]
        );
    }

    #[test]
    fn deactivation_returns_to_the_cycle_start() {
        let mut intersection = standard();
        intersection.set_emergency_mode(true);

        let outcome = intersection.set_emergency_mode(false);

        assert_eq!(outcome, ModeOutcome::Applied { mode: Mode::Normal });
        let status = intersection.status().unwrap();
        assert_eq!(status.phase(), PhasePair::START);
        assert_eq!(status.mode, Mode::Normal);
    }

    #[test]
    fn repeating_a_mode_repeats_the_notifications() {
        let mut intersection = standard();
        intersection.set_emergency_mode(true);
        let before = intersection.journal().len();

        let outcome = intersection.set_emergency_mode(true);

        assert_eq!(
            outcome,
            ModeOutcome::Applied {
                mode: Mode::Emergency,
            }
        );
        assert_eq!(intersection.journal().len(), before + 3);
        assert_eq!(intersection.status().unwrap().phase(), PhasePair::ALL_RED);
    }

    #[test]
    fn mode_switch_without_a_head_updates_only_the_flag() {
        let mut intersection = standard();
        intersection.take_east_west();

        let outcome = intersection.set_emergency_mode(true);

        assert_eq!(
            outcome,
            ModeOutcome::FlagOnly {
                mode: Mode::Emergency,
            }
        );
        assert!(intersection.is_emergency_active());
        assert_eq!(
            intersection.journal().latest().unwrap().event,
            SignalEvent::HeadsUnavailable
        );
        // The present head kept its color.
        assert_eq!(intersection.north_south().unwrap().color(), Color::Green);
    }

    #[test]
    fn status_fails_while_a_head_is_out() {
        let mut intersection = standard();
        intersection.take_north_south();

        assert_eq!(
            intersection.status(),
            Err(IntersectionError::HeadsUnavailable)
        );

        intersection.set_north_south(SignalHead::new(Axis::NorthSouth, Color::Green));
        assert!(intersection.status().is_ok());
    }

    #[test]
    fn replacing_a_head_returns_the_old_one() {
        let mut intersection = standard();

        let replaced =
            intersection.set_north_south(SignalHead::new(Axis::NorthSouth, Color::Red));

        assert_eq!(
            replaced,
            Some(SignalHead::new(Axis::NorthSouth, Color::Green))
        );
    }

    #[test]
    fn status_serializes_correctly() {
        let intersection = standard();
        let status = intersection.status().unwrap();

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: IntersectionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, status);
    }
}
