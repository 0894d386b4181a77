//! Plain data row types written by output backends.

use rh_model::LogisticsModel;
use rh_sim::TraceRecord;

/// One executed transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub time:     f64,
    pub train_id: u32,
    pub class:    u16,
    pub phase:    &'static str,
    pub port:     u32,
    pub terminal: u32,
}

impl From<&TraceRecord> for TraceRow {
    fn from(r: &TraceRecord) -> Self {
        Self {
            time:     r.time,
            train_id: r.train.0,
            class:    r.class.0,
            phase:    r.phase.as_str(),
            port:     r.port.0,
            terminal: r.terminal.0,
        }
    }
}

/// Cumulative delivered mass after one unloading completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductivityRow {
    pub time:            f64,
    pub cumulative_mass: f64,
}

/// Which side of the cycle a queue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Port,
    Terminal,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Port     => "port",
            LocationKind::Terminal => "terminal",
        }
    }
}

/// One realized service at a port or terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueRow {
    pub kind:       LocationKind,
    pub location:   u32,
    pub train_id:   u32,
    pub arrival:    f64,
    pub start:      f64,
    pub completion: f64,
    pub wait:       f64,
}

/// The model's productivity series as rows.
pub fn productivity_rows(model: &LogisticsModel) -> Vec<ProductivityRow> {
    model
        .productivity_series()
        .into_iter()
        .map(|(time, cumulative_mass)| ProductivityRow { time, cumulative_mass })
        .collect()
}

/// Every realized queue entry, terminals first, then ports.
pub fn queue_rows(model: &LogisticsModel) -> Vec<QueueRow> {
    let queues = model.queues();
    let terminals = queues
        .terminals()
        .iter()
        .enumerate()
        .map(|(i, q)| (LocationKind::Terminal, i, q));
    let ports = queues
        .ports()
        .iter()
        .enumerate()
        .map(|(i, q)| (LocationKind::Port, i, q));

    terminals
        .chain(ports)
        .flat_map(|(kind, i, q)| {
            q.entries().iter().map(move |e| QueueRow {
                kind,
                location:   i as u32,
                train_id:   e.train.0,
                arrival:    e.arrival,
                start:      e.start,
                completion: e.completion,
                wait:       e.wait(),
            })
        })
        .collect()
}
