//! Post-run queries.
//!
//! Nothing here is maintained incrementally: every statistic is recomputed
//! from the queue sequences and the delivery log when asked for.  The model
//! keeps both until the next [`clear`][crate::LogisticsModel::clear], so the
//! queries stay valid after the driver has terminated.

use rh_core::{ClassId, PortId, SimTime, TrainId};

use crate::{LogisticsModel, QueueEntry};

/// One completed unloading.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    pub time:  SimTime,
    pub train: TrainId,
    pub class: ClassId,
    pub port:  PortId,
    /// Mass delivered, kilograms.
    pub load:  f64,
}

impl LogisticsModel {
    /// Cumulative delivered mass after each unloading completion:
    /// `(time, total kilograms delivered so far)`.
    pub fn productivity_series(&self) -> Vec<(SimTime, f64)> {
        let mut total = 0.0;
        self.deliveries
            .iter()
            .map(|d| {
                total += d.load;
                (d.time, total)
            })
            .collect()
    }

    /// Total mass delivered during the run, kilograms.
    pub fn total_delivered(&self) -> f64 {
        self.deliveries.iter().map(|d| d.load).sum()
    }

    /// Mean wait over every terminal and port queue entry; 0 if none.
    pub fn average_queue_time(&self) -> SimTime {
        mean_wait(self.queues.all_entries())
    }

    /// Mean wait over terminal (loading) entries only.
    pub fn average_terminal_queue_time(&self) -> SimTime {
        mean_wait(self.queues.terminals().iter().flat_map(|q| q.entries()))
    }

    /// Mean wait over port (unloading) entries only.
    pub fn average_port_queue_time(&self) -> SimTime {
        mean_wait(self.queues.ports().iter().flat_map(|q| q.entries()))
    }

    /// Total time each train spent queueing, indexed by `TrainId`.
    pub fn queue_time_by_train(&self) -> Vec<SimTime> {
        let mut waits = vec![0.0; self.trains.len()];
        for e in self.queues.all_entries() {
            waits[e.train.index()] += e.wait();
        }
        waits
    }

    /// Number of completed cycles (deliveries) by `train`.
    pub fn completed_cycles(&self, train: TrainId) -> usize {
        self.deliveries.iter().filter(|d| d.train == train).count()
    }
}

fn mean_wait<'a>(entries: impl Iterator<Item = &'a QueueEntry>) -> SimTime {
    let (sum, n) = entries.fold((0.0, 0usize), |(sum, n), e| (sum + e.wait(), n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

/// A detached snapshot of the post-run queries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStatistics {
    pub deliveries:                  usize,
    pub total_delivered:             f64,
    pub average_queue_time:          SimTime,
    pub average_terminal_queue_time: SimTime,
    pub average_port_queue_time:     SimTime,
    /// Total queueing time per train, indexed by `TrainId`.
    pub queue_time_by_train:         Vec<SimTime>,
    /// Completed cycles per train, indexed by `TrainId`.
    pub cycles_by_train:             Vec<usize>,
    pub productivity:                Vec<(SimTime, f64)>,
}

impl RunStatistics {
    pub fn from_model(model: &LogisticsModel) -> Self {
        let mut cycles_by_train = vec![0; model.trains.len()];
        for d in &model.deliveries {
            cycles_by_train[d.train.index()] += 1;
        }
        Self {
            deliveries:                  model.deliveries.len(),
            total_delivered:             model.total_delivered(),
            average_queue_time:          model.average_queue_time(),
            average_terminal_queue_time: model.average_terminal_queue_time(),
            average_port_queue_time:     model.average_port_queue_time(),
            queue_time_by_train:         model.queue_time_by_train(),
            cycles_by_train,
            productivity:                model.productivity_series(),
        }
    }
}
