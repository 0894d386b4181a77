//! Simulation observer trait and the per-transition trace record.

use rh_core::{ClassId, PhaseKind, PortId, SimTime, TerminalId, TrainId};
use rh_model::LogisticsModel;

/// What happened in one executed transition.
///
/// `phase` is the transition that just ran; `port` and `terminal` are the
/// train's locations after it ran (so a `FinishedUnloading` record already
/// names the terminal the train was dispatched to).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceRecord {
    pub time:     SimTime,
    pub train:    TrainId,
    pub class:    ClassId,
    pub phase:    PhaseKind,
    pub port:     PortId,
    pub terminal: TerminalId,
}

/// Callbacks invoked by [`Simulator::simulate_with`][crate::Simulator::simulate_with]
/// at key points of the event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers see the simulation but cannot
/// change it.
///
/// # Example: delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_event(&mut self, rec: &TraceRecord) {
///         if rec.phase == PhaseKind::FinishedUnloading {
///             println!("{} delivered at {}", rec.train, rec.time);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after seeding, before the first event executes.
    ///
    /// `pending` is the number of seeded events (one per train).
    fn on_run_start(&mut self, _horizon: SimTime, _pending: usize) {}

    /// Called after each handler has run and its follow-up event is queued.
    fn on_event(&mut self, _record: &TraceRecord) {}

    /// Called once when the run terminates, with read-only access to the
    /// model so that statistics can be recorded.
    fn on_run_end(&mut self, _final_time: SimTime, _model: &LogisticsModel) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
