//! Per-train state.

use rh_core::{ClassId, PhaseKind, PortId, StaticConfig, TerminalId, TrainId};

use crate::{ModelError, ModelResult};

/// Mutable state of one train.
///
/// Only the handler processing this train's event touches it.  `id` and
/// `class` never change; `port` and `terminal` record the most recent
/// dispatch decisions; `pending` is the phase of the train's one scheduled
/// event.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainState {
    pub id:       TrainId,
    pub class:    ClassId,
    pub port:     PortId,
    pub terminal: TerminalId,
    pub pending:  PhaseKind,
}

/// Every train of the fleet, indexed by `TrainId`.
#[derive(Clone, Debug, Default)]
pub struct TrainStore {
    trains: Vec<TrainState>,
}

impl TrainStore {
    /// Create `train_count[class]` trains per class, class by class, all
    /// parked at `config.initial_port` and bound for terminal 0 until the
    /// first dispatch.
    pub fn from_config(config: &StaticConfig) -> Self {
        let mut trains = Vec::with_capacity(config.fleet_size());
        for (class, &count) in config.train_count.iter().enumerate() {
            for _ in 0..count {
                trains.push(TrainState {
                    id:       TrainId(trains.len() as u32),
                    class:    ClassId(class as u16),
                    port:     config.initial_port,
                    terminal: TerminalId(0),
                    pending:  PhaseKind::ArrivedAtTerminal,
                });
            }
        }
        Self { trains }
    }

    pub fn get(&self, id: TrainId) -> ModelResult<&TrainState> {
        self.trains.get(id.index()).ok_or(ModelError::TrainNotFound(id))
    }

    pub fn get_mut(&mut self, id: TrainId) -> ModelResult<&mut TrainState> {
        self.trains.get_mut(id.index()).ok_or(ModelError::TrainNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainState> {
        self.trains.iter()
    }

    /// Number of trains whose pending event is each phase, in
    /// [`PhaseKind::ALL`] order.  Always sums to the fleet size.
    pub fn phase_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for t in &self.trains {
            counts[t.pending.ordinal()] += 1;
        }
        counts
    }
}
