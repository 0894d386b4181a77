//! The `LogisticsModel` struct and its life-cycle handlers.

use log::trace;
use rh_calendar::Event;
use rh_core::{ClassId, Hms, PhaseKind, PortId, SimTime, StaticConfig, TerminalId, TrainId};

use crate::{Delivery, DispatchPolicy, ModelResult, QueueTracker, TrainStore};

/// Ports, terminals and a fleet of trains cycling between them.
///
/// The model holds all mutable simulation state (train positions, queue
/// sequences, delivery log) but never owns the clock or the calendar.  The
/// driver hands it the current time and one event at a time through
/// [`handle`][Self::handle], and schedules whatever event comes back.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
#[derive(Clone, Debug)]
pub struct LogisticsModel {
    pub(crate) config:     StaticConfig,
    pub(crate) policy:     DispatchPolicy,
    pub(crate) trains:     TrainStore,
    pub(crate) queues:     QueueTracker,
    pub(crate) deliveries: Vec<Delivery>,
}

impl LogisticsModel {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &StaticConfig {
        &self.config
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    pub fn trains(&self) -> &TrainStore {
        &self.trains
    }

    pub fn queues(&self) -> &QueueTracker {
        &self.queues
    }

    /// Completed unloadings, in execution order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    // ── Run lifecycle ─────────────────────────────────────────────────────

    /// Reset queues, forecasts, deliveries and train positions to the state
    /// right after construction.
    pub fn clear(&mut self) {
        self.trains = TrainStore::from_config(&self.config);
        self.queues.clear();
        self.deliveries.clear();
    }

    /// One `ArrivedAtTerminal` event per train, in fleet order.
    ///
    /// Every train leaves `config.initial_port` at `now` for the terminal the
    /// dispatch policy picks.
    pub fn starting_events(&mut self, now: SimTime) -> ModelResult<Vec<Event>> {
        let port = self.config.initial_port;
        let mut events = Vec::with_capacity(self.trains.len());
        for i in 0..self.trains.len() {
            let id = TrainId(i as u32);
            let class = self.trains.get(id)?.class;
            self.trains.get_mut(id)?.port = port;
            let arrival = self.depart_to_terminal(id, class, port, now)?;
            events.push(self.schedule(id, arrival, PhaseKind::ArrivedAtTerminal)?);
        }
        Ok(events)
    }

    /// Apply the transition `event.phase` for `event.train` at `now` and
    /// return the train's next event, whose phase is `event.phase.next()`.
    pub fn handle(&mut self, now: SimTime, event: &Event) -> ModelResult<Event> {
        let id = event.train;
        let fire_time = match event.phase {
            PhaseKind::ArrivedAtTerminal => self.on_arrived_at_terminal(now, id)?,
            PhaseKind::FinishedLoading   => self.on_finished_loading(now, id)?,
            PhaseKind::ArrivedAtPort     => self.on_arrived_at_port(now, id)?,
            PhaseKind::FinishedUnloading => self.on_finished_unloading(now, id)?,
        };
        self.schedule(id, fire_time, event.phase.next())
    }

    // ── Handlers ──────────────────────────────────────────────────────────
    //
    // Each returns the fire time of the train's next transition.

    fn on_arrived_at_terminal(&mut self, now: SimTime, id: TrainId) -> ModelResult<SimTime> {
        let train = *self.trains.get(id)?;
        let service = self.config.loading_time(train.terminal, train.class);
        let done = self.queues.terminal_mut(train.terminal).enqueue(id, now, service);
        trace!("[{}] {id}: loading at {} until {}", Hms(now), train.terminal, Hms(done));
        Ok(done)
    }

    fn on_finished_loading(&mut self, now: SimTime, id: TrainId) -> ModelResult<SimTime> {
        let train = *self.trains.get(id)?;
        let config = &self.config;
        let chosen = self.policy.choose(self.queues.ports_mut(), now, |p| {
            let port = PortId(p as u32);
            (
                config.travel_time(port, train.terminal, train.class),
                config.unloading_time(port, train.class),
            )
        });
        let port = PortId(chosen as u32);
        self.trains.get_mut(id)?.port = port;
        trace!("[{}] {id}: going from {} to {port}", Hms(now), train.terminal);
        Ok(now + self.config.travel_time(port, train.terminal, train.class))
    }

    fn on_arrived_at_port(&mut self, now: SimTime, id: TrainId) -> ModelResult<SimTime> {
        let train = *self.trains.get(id)?;
        let service = self.config.unloading_time(train.port, train.class);
        let done = self.queues.port_mut(train.port).enqueue(id, now, service);
        trace!("[{}] {id}: unloading at {} until {}", Hms(now), train.port, Hms(done));
        Ok(done)
    }

    fn on_finished_unloading(&mut self, now: SimTime, id: TrainId) -> ModelResult<SimTime> {
        let train = *self.trains.get(id)?;
        self.deliveries.push(Delivery {
            time:  now,
            train: id,
            class: train.class,
            port:  train.port,
            load:  self.config.payload(train.class),
        });
        self.depart_to_terminal(id, train.class, train.port, now)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Dispatch `id` from `port` to a terminal and return its arrival time.
    fn depart_to_terminal(
        &mut self,
        id:    TrainId,
        class: ClassId,
        port:  PortId,
        now:   SimTime,
    ) -> ModelResult<SimTime> {
        let config = &self.config;
        let chosen = self.policy.choose(self.queues.terminals_mut(), now, |t| {
            let terminal = TerminalId(t as u32);
            (
                config.travel_time(port, terminal, class),
                config.loading_time(terminal, class),
            )
        });
        let terminal = TerminalId(chosen as u32);
        self.trains.get_mut(id)?.terminal = terminal;
        trace!("[{}] {id}: going from {port} to {terminal}", Hms(now));
        Ok(now + self.config.travel_time(port, terminal, class))
    }

    fn schedule(&mut self, id: TrainId, fire_time: SimTime, phase: PhaseKind) -> ModelResult<Event> {
        self.trains.get_mut(id)?.pending = phase;
        Ok(Event::new(fire_time, phase, id))
    }
}
