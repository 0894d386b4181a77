//! Integration tests for rh-sim.

use rh_core::{Matrix, PortId, SimTime, StaticConfig};
use rh_model::{DispatchPolicy, LogisticsModel, ModelBuilder};

use crate::{SimObserver, TraceRecord};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `ports × terminals` with every distance equal, one class.
fn grid_config(ports: usize, terminals: usize, trains: u32) -> StaticConfig {
    StaticConfig {
        distance:       Matrix::filled(ports, terminals, 3_600.0),
        unloading_time: Matrix::filled(ports, 1, 500.0),
        loading_time:   Matrix::filled(terminals, 1, 1_000.0),
        train_speed:    vec![1.0],
        train_load:     vec![2.0e6],
        train_count:    vec![trains],
        initial_port:   PortId(0),
    }
}

/// Rounded 40 km/h, so a 40 km leg takes slightly over an hour.
const REFERENCE_SPEED: f64 = 11.11;

/// The reference scenario: 40 km at 11.11 m/s, 8 h loading, 4 h unloading,
/// 5 000 t payload.
fn reference_config(trains: u32) -> StaticConfig {
    StaticConfig {
        distance:       Matrix::filled(1, 1, 40.0e3),
        unloading_time: Matrix::filled(1, 1, 4.0 * 3_600.0),
        loading_time:   Matrix::filled(1, 1, 8.0 * 3_600.0),
        train_speed:    vec![REFERENCE_SPEED],
        train_load:     vec![5.0e6],
        train_count:    vec![trains],
        initial_port:   PortId(0),
    }
}

fn build(config: StaticConfig, policy: DispatchPolicy) -> LogisticsModel {
    ModelBuilder::new(config).policy(policy).build().unwrap()
}

/// Observer that records every trace record.
#[derive(Default)]
struct Recorder {
    starts:  Vec<(SimTime, usize)>,
    records: Vec<TraceRecord>,
    ends:    Vec<SimTime>,
}

impl SimObserver for Recorder {
    fn on_run_start(&mut self, horizon: SimTime, pending: usize) {
        self.starts.push((horizon, pending));
    }
    fn on_event(&mut self, record: &TraceRecord) {
        self.records.push(*record);
    }
    fn on_run_end(&mut self, final_time: SimTime, _model: &LogisticsModel) {
        self.ends.push(final_time);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use rh_core::{PhaseKind, TerminalId};

    use super::*;
    use crate::{RunState, Simulator};

    #[test]
    fn single_train_completes_one_cycle_in_a_day() {
        init_logger();
        let mut model = build(reference_config(1), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        let mut rec = Recorder::default();
        sim.simulate_with(&mut model, 86_400.0, &mut rec).unwrap();

        let leg = 40.0e3 / REFERENCE_SPEED;
        let expected = [
            (leg,                      PhaseKind::ArrivedAtTerminal),
            (leg + 28_800.0,           PhaseKind::FinishedLoading),
            (2.0 * leg + 28_800.0,     PhaseKind::ArrivedAtPort),
            (2.0 * leg + 43_200.0,     PhaseKind::FinishedUnloading),
            (3.0 * leg + 43_200.0,     PhaseKind::ArrivedAtTerminal),
            (3.0 * leg + 72_000.0,     PhaseKind::FinishedLoading),
            (4.0 * leg + 72_000.0,     PhaseKind::ArrivedAtPort),
        ];
        assert_eq!(rec.records.len(), expected.len());
        for ((t, phase), rec) in expected.iter().zip(&rec.records) {
            assert!((rec.time - t).abs() < 1e-6, "{:?} at {} (expected {t})", rec.phase, rec.time);
            assert_eq!(rec.phase, *phase);
        }

        // Exactly one delivery, shortly after 14 h.
        let series = model.productivity_series();
        assert_eq!(series.len(), 1);
        assert!((series[0].0 - (2.0 * leg + 43_200.0)).abs() < 1e-6);
        assert_eq!(series[0].1, 5.0e6);
        assert_eq!(sim.state(), RunState::Terminated);

        // The port arrival that crossed the horizon ran and queued for
        // unloading; its completion stays pending.
        assert!(sim.time() > 86_400.0);
        assert_eq!(model.queues().port(PortId(0)).entries().len(), 2);
        assert_eq!(sim.pending(), 1);
    }

    #[test]
    fn two_trains_share_single_terminal() {
        let mut model = build(reference_config(2), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        sim.simulate(&mut model, 86_400.0).unwrap();

        // Second train waits a full loading slot behind the first.
        let entries = model.queues().terminal(TerminalId(0)).entries();
        assert_eq!(entries[0].wait(), 0.0);
        assert!((entries[1].wait() - 8.0 * 3_600.0).abs() < 1e-6);

        let stats = rh_model::RunStatistics::from_model(&model);
        assert_eq!(stats.deliveries, 2);
        assert_eq!(stats.total_delivered, 1.0e7);
    }

    #[test]
    fn two_trains_two_terminals_never_queue() {
        let mut model = build(grid_config(2, 2, 2), DispatchPolicy::EarliestForecast);
        let mut sim = Simulator::new();
        sim.simulate(&mut model, 100_000.0).unwrap();

        assert!(model.deliveries().len() > 4);
        assert_eq!(model.average_queue_time(), 0.0);
        assert_eq!(model.queue_time_by_train(), vec![0.0, 0.0]);
    }

    #[test]
    fn zero_horizon_executes_first_event_only() {
        let mut model = build(grid_config(1, 1, 3), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        sim.simulate(&mut model, 0.0).unwrap();
        // The clock starts at 0, so one event runs and carries it past 0.
        assert_eq!(sim.events_executed(), 1);
        assert_eq!(sim.time(), 3_600.0);
        assert_eq!(sim.pending(), 3);
        assert_eq!(model.queues().terminal(TerminalId(0)).entries().len(), 1);
        assert!(model.deliveries().is_empty());
    }
}

// ── Driver properties ─────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use rh_calendar::{CalendarError, Event};
    use rh_core::{ConfigError, PhaseKind, TrainId};

    use super::*;
    use crate::{NoopObserver, RunState, SimError, Simulator};

    #[test]
    fn time_is_monotonic() {
        let mut model = build(grid_config(2, 3, 7), DispatchPolicy::EarliestForecast);
        let mut sim = Simulator::new();
        let mut rec = Recorder::default();
        sim.simulate_with(&mut model, 250_000.0, &mut rec).unwrap();

        assert!(rec.records.len() > 50);
        for w in rec.records.windows(2) {
            assert!(w[1].time >= w[0].time);
        }
        // Only the final event may lie past the horizon.
        let (last, rest) = rec.records.split_last().unwrap();
        assert!(rest.iter().all(|r| r.time <= 250_000.0));
        assert_eq!(last.time, sim.time());
    }

    #[test]
    fn one_pending_event_per_train_throughout() {
        let mut model = build(grid_config(1, 2, 5), DispatchPolicy::EarliestForecast);
        let mut sim = Simulator::new();
        sim.start(&mut model, 50_000.0).unwrap();
        assert_eq!(sim.state(), RunState::Running);
        while sim.step(&mut model, &mut NoopObserver).unwrap() {
            assert_eq!(sim.pending(), 5);
            assert_eq!(model.trains().phase_counts().iter().sum::<usize>(), 5);
        }
        assert_eq!(sim.state(), RunState::Terminated);
        assert!(!sim.step(&mut model, &mut NoopObserver).unwrap());
    }

    #[test]
    fn observer_hooks_called_once_per_run() {
        let mut model = build(grid_config(1, 1, 2), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        let mut rec = Recorder::default();
        sim.simulate_with(&mut model, 20_000.0, &mut rec).unwrap();

        assert_eq!(rec.starts, vec![(20_000.0, 2)]);
        assert_eq!(rec.ends, vec![sim.time()]);
        assert_eq!(rec.records.len() as u64, sim.events_executed());
    }

    #[test]
    fn unloading_record_names_next_terminal() {
        let mut model = build(grid_config(1, 2, 1), DispatchPolicy::EarliestForecast);
        let mut sim = Simulator::new();
        let mut rec = Recorder::default();
        sim.simulate_with(&mut model, 20_000.0, &mut rec).unwrap();

        let unload = rec
            .records
            .iter()
            .find(|r| r.phase == PhaseKind::FinishedUnloading)
            .unwrap();
        let next_arrival = rec
            .records
            .iter()
            .filter(|r| r.phase == PhaseKind::ArrivedAtTerminal)
            .nth(1)
            .unwrap();
        assert_eq!(unload.terminal, next_arrival.terminal);
        assert_eq!(unload.train, TrainId(0));
    }

    #[test]
    fn invalid_horizon_rejected() {
        let mut model = build(grid_config(1, 1, 1), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        for bad in [f64::INFINITY, -1.0] {
            assert_eq!(
                sim.simulate(&mut model, bad),
                Err(SimError::Config(ConfigError::InvalidHorizon(bad)))
            );
        }
        assert!(matches!(
            sim.simulate(&mut model, f64::NAN),
            Err(SimError::Config(ConfigError::InvalidHorizon(_)))
        ));
        assert_eq!(sim.state(), RunState::Terminated);
    }

    #[test]
    fn add_event_rejects_past_times() {
        let mut model = build(grid_config(1, 1, 1), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        sim.simulate(&mut model, 10_000.0).unwrap();
        let err = sim
            .add_event(Event::new(sim.time() - 1.0, PhaseKind::ArrivedAtPort, TrainId(0)))
            .unwrap_err();
        assert!(matches!(err, SimError::Calendar(CalendarError::InvalidEvent { .. })));
    }

    #[test]
    fn event_crossing_horizon_runs_then_stops() {
        let mut model = build(grid_config(1, 1, 1), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        sim.simulate(&mut model, 5_000.0).unwrap();
        // 3600 arrive, 4600 loaded (clock still inside the horizon), 8200
        // arrive at port; the unloading completion at 8700 is left pending.
        assert_eq!(sim.events_executed(), 3);
        assert_eq!(sim.time(), 8_200.0);
        assert_eq!(model.queues().port(PortId(0)).entries().len(), 1);
        assert_eq!(sim.calendar().next_time(), Some(8_700.0));
    }

    #[test]
    fn clock_on_horizon_still_pops() {
        let mut model = build(grid_config(1, 1, 1), DispatchPolicy::Fixed);
        let mut sim = Simulator::new();
        sim.simulate(&mut model, 4_600.0).unwrap();
        // Clock equals the horizon after loading, so one more event runs.
        assert_eq!(sim.events_executed(), 3);
        assert_eq!(sim.time(), 8_200.0);
    }
}

// ── Reset & determinism ───────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use rh_model::RunStatistics;

    use super::*;
    use crate::Simulator;

    #[test]
    fn rerun_on_same_model_matches_fresh_model() {
        let config = grid_config(2, 3, 6);

        let mut reused = build(config.clone(), DispatchPolicy::EarliestForecast);
        let mut sim = Simulator::new();
        sim.simulate(&mut reused, 40_000.0).unwrap();
        sim.simulate(&mut reused, 120_000.0).unwrap();

        let mut fresh = build(config, DispatchPolicy::EarliestForecast);
        Simulator::new().simulate(&mut fresh, 120_000.0).unwrap();

        assert_eq!(RunStatistics::from_model(&reused), RunStatistics::from_model(&fresh));
    }

    #[test]
    fn identical_runs_produce_identical_traces() {
        let run = || {
            let mut model = build(grid_config(3, 2, 9), DispatchPolicy::EarliestForecast);
            let mut rec = Recorder::default();
            Simulator::new().simulate_with(&mut model, 150_000.0, &mut rec).unwrap();
            rec.records
        };
        assert_eq!(run(), run());
    }
}
