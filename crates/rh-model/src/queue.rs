//! Realized and forecast queues per port and terminal.
//!
//! Every location keeps two independent sequences:
//!
//! - **entries**: realized FIFO service records, appended when a train
//!   physically arrives.  Each starts at `max(arrival, previous completion)`,
//!   so completion times never decrease along the sequence.
//! - **forecast**: completion times reserved by the dispatcher at decision
//!   time, before the train arrives.  They only ever grow; nothing reconciles
//!   them with the realized entries.

use rh_core::{PortId, SimTime, TerminalId, TrainId};

/// One realized service at a location.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueEntry {
    pub train:      TrainId,
    /// When the train reached the location.
    pub arrival:    SimTime,
    /// When service actually began (after the previous occupant left).
    pub start:      SimTime,
    /// `start + service time`.
    pub completion: SimTime,
}

impl QueueEntry {
    /// Completion time had the location been free on arrival.
    #[inline]
    pub fn ideal_completion(&self) -> SimTime {
        self.arrival + (self.completion - self.start)
    }

    /// Time spent waiting for the location, `realized − ideal` completion.
    #[inline]
    pub fn wait(&self) -> SimTime {
        self.start - self.arrival
    }
}

/// Realized and forecast sequences of a single port or terminal.
#[derive(Clone, Debug, Default)]
pub struct LocationQueue {
    entries:  Vec<QueueEntry>,
    forecast: Vec<SimTime>,
}

impl LocationQueue {
    /// Completion time of the last realized entry; 0 if never used.
    #[inline]
    pub fn tail(&self) -> SimTime {
        self.entries.last().map_or(0.0, |e| e.completion)
    }

    /// Last reserved forecast completion; 0 if nothing was reserved.
    #[inline]
    pub fn forecast_tail(&self) -> SimTime {
        self.forecast.last().copied().unwrap_or(0.0)
    }

    /// Queue `train` arriving at `now` for `service` seconds and return the
    /// completion time `max(now, tail) + service`.
    pub fn enqueue(&mut self, train: TrainId, now: SimTime, service: SimTime) -> SimTime {
        let start = now.max(self.tail());
        let completion = start + service;
        self.entries.push(QueueEntry { train, arrival: now, start, completion });
        completion
    }

    /// Append a dispatcher reservation.
    #[inline]
    pub fn reserve(&mut self, completion: SimTime) {
        self.forecast.push(completion);
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn forecast(&self) -> &[SimTime] {
        &self.forecast
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.forecast.clear();
    }
}

/// Queues of every port and terminal of a model.
#[derive(Clone, Debug, Default)]
pub struct QueueTracker {
    ports:     Vec<LocationQueue>,
    terminals: Vec<LocationQueue>,
}

impl QueueTracker {
    pub fn new(port_count: usize, terminal_count: usize) -> Self {
        Self {
            ports:     vec![LocationQueue::default(); port_count],
            terminals: vec![LocationQueue::default(); terminal_count],
        }
    }

    #[inline]
    pub fn port(&self, port: PortId) -> &LocationQueue {
        &self.ports[port.index()]
    }

    #[inline]
    pub fn port_mut(&mut self, port: PortId) -> &mut LocationQueue {
        &mut self.ports[port.index()]
    }

    #[inline]
    pub fn terminal(&self, terminal: TerminalId) -> &LocationQueue {
        &self.terminals[terminal.index()]
    }

    #[inline]
    pub fn terminal_mut(&mut self, terminal: TerminalId) -> &mut LocationQueue {
        &mut self.terminals[terminal.index()]
    }

    pub fn ports(&self) -> &[LocationQueue] {
        &self.ports
    }

    pub fn terminals(&self) -> &[LocationQueue] {
        &self.terminals
    }

    /// Port queues as a mutable slice, for dispatching among ports.
    pub fn ports_mut(&mut self) -> &mut [LocationQueue] {
        &mut self.ports
    }

    /// Terminal queues as a mutable slice, for dispatching among terminals.
    pub fn terminals_mut(&mut self) -> &mut [LocationQueue] {
        &mut self.terminals
    }

    /// Every realized entry, terminals first, then ports.
    pub fn all_entries(&self) -> impl Iterator<Item = &QueueEntry> {
        self.terminals
            .iter()
            .chain(self.ports.iter())
            .flat_map(|q| q.entries.iter())
    }

    /// Reset every sequence to the empty state.
    pub fn clear(&mut self) {
        for q in self.ports.iter_mut().chain(self.terminals.iter_mut()) {
            q.clear();
        }
    }
}
