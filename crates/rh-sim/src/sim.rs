//! The `Simulator` struct and its event loop.

use log::debug;
use rh_calendar::{Event, EventCalendar};
use rh_core::{Hms, SimTime, validate_horizon};
use rh_model::LogisticsModel;

use crate::{NoopObserver, SimObserver, SimResult, TraceRecord};

/// Driver state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Seeded; the clock has not yet passed the horizon.
    Running,
    /// Calendar exhausted, clock past the horizon, or a handler failed.  Also the
    /// state of a simulator that has never run.
    #[default]
    Terminated,
}

/// Owns simulated time and the event calendar; drives a [`LogisticsModel`].
///
/// A simulator can be reused: every [`simulate`][Self::simulate] starts from
/// time 0 with an empty calendar and a cleared model.
#[derive(Debug, Default)]
pub struct Simulator {
    time:     SimTime,
    calendar: EventCalendar,
    state:    RunState,
    horizon:  SimTime,
    executed: u64,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Fire time of the most recently executed event (0 after seeding).
    ///
    /// The event that carries the clock past the horizon is still executed,
    /// so after a run this may exceed [`horizon`][Self::horizon].
    #[inline]
    pub fn time(&self) -> SimTime {
        self.time
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    /// Number of events waiting in the calendar.
    #[inline]
    pub fn pending(&self) -> usize {
        self.calendar.len()
    }

    /// Number of events executed since the run started.
    #[inline]
    pub fn events_executed(&self) -> u64 {
        self.executed
    }

    pub fn calendar(&self) -> &EventCalendar {
        &self.calendar
    }

    /// Schedule an extra event.  Fails with `InvalidEvent` if `event` would
    /// fire before the current time.
    pub fn add_event(&mut self, event: Event) -> SimResult<()> {
        self.calendar.schedule(event)?;
        Ok(())
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run `model` from time 0 until the calendar empties or the clock has
    /// passed `horizon`.
    pub fn simulate(&mut self, model: &mut LogisticsModel, horizon: SimTime) -> SimResult<()> {
        self.simulate_with(model, horizon, &mut NoopObserver)
    }

    /// Like [`simulate`][Self::simulate], reporting progress to `observer`.
    pub fn simulate_with<O: SimObserver>(
        &mut self,
        model:    &mut LogisticsModel,
        horizon:  SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        self.start(model, horizon)?;
        observer.on_run_start(horizon, self.pending());
        while self.step(model, observer)? {}
        observer.on_run_end(self.time, model);
        Ok(())
    }

    /// Reset the clock, calendar and model, then seed one starting event per
    /// train.  Leaves the simulator `Running`; drive it with
    /// [`step`][Self::step].
    pub fn start(&mut self, model: &mut LogisticsModel, horizon: SimTime) -> SimResult<()> {
        validate_horizon(horizon)?;

        self.state = RunState::Terminated;
        self.time = 0.0;
        self.horizon = horizon;
        self.executed = 0;
        self.calendar.clear();
        model.clear();

        for event in model.starting_events(self.time)? {
            self.calendar.schedule(event)?;
        }
        self.state = RunState::Running;
        debug!(
            "run started: {} trains seeded, horizon {}",
            self.calendar.len(),
            Hms(horizon)
        );
        Ok(())
    }

    /// Execute the next event while the clock is still at or before the
    /// horizon.
    ///
    /// Returns `Ok(true)` if an event was executed and `Ok(false)` once the
    /// run is `Terminated`.  An error terminates the run.
    pub fn step<O: SimObserver>(
        &mut self,
        model:    &mut LogisticsModel,
        observer: &mut O,
    ) -> SimResult<bool> {
        if self.state == RunState::Terminated {
            return Ok(false);
        }
        if self.calendar.is_empty() || self.time > self.horizon {
            self.state = RunState::Terminated;
            debug!(
                "run terminated at {} after {} events ({} pending)",
                Hms(self.time),
                self.executed,
                self.calendar.len()
            );
            return Ok(false);
        }

        let result = self.execute_next(model);
        match result {
            Ok(record) => {
                observer.on_event(&record);
                Ok(true)
            }
            Err(e) => {
                self.state = RunState::Terminated;
                Err(e)
            }
        }
    }

    // ── Core event processing ─────────────────────────────────────────────

    fn execute_next(&mut self, model: &mut LogisticsModel) -> SimResult<TraceRecord> {
        let event = self.calendar.pop()?;
        self.time = event.fire_time;

        let next = model.handle(self.time, &event)?;
        self.calendar.schedule(next)?;
        self.executed += 1;

        let train = model.trains().get(event.train)?;
        Ok(TraceRecord {
            time:     self.time,
            train:    train.id,
            class:    train.class,
            phase:    event.phase,
            port:     train.port,
            terminal: train.terminal,
        })
    }
}
