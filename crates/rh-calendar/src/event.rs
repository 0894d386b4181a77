//! The pending-event record.

use rh_core::{PhaseKind, SimTime, TrainId};

/// One scheduled life-cycle transition.
///
/// The record is plain data: which transition to run, for which train, and
/// when.  The driver matches on [`phase`][Self::phase] to pick the handler,
/// so the calendar never stores code.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Simulated time at which the event becomes due.
    pub fire_time: SimTime,
    /// The transition to apply when the event fires.
    pub phase: PhaseKind,
    /// The train whose state the transition advances.
    pub train: TrainId,
}

impl Event {
    #[inline]
    pub fn new(fire_time: SimTime, phase: PhaseKind, train: TrainId) -> Self {
        Self { fire_time, phase, train }
    }
}
