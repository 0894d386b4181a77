//! Routing decisions for trains leaving a port or terminal.

use log::debug;
use rh_core::SimTime;

use crate::LocationQueue;

/// How a train picks its next port or terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchPolicy {
    /// Always route to index 0.  Meant for single-port, single-terminal
    /// topologies; makes no forecast reservation.
    Fixed,

    /// Route to the candidate with the earliest forecast completion
    ///
    /// ```text
    /// f[d] = max(forecast_tail[d], now + travel[d]) + service[d]
    /// ```
    ///
    /// ties going to the lowest index, then reserve `f[d*]` on that
    /// candidate's forecast sequence.
    #[default]
    EarliestForecast,
}

impl DispatchPolicy {
    /// Choose among `candidates` and return the chosen index.
    ///
    /// `cost(d)` returns `(travel_time, service_time)` for candidate `d`.
    /// `candidates` must be non-empty (guaranteed by config validation).
    pub fn choose<F>(self, candidates: &mut [LocationQueue], now: SimTime, cost: F) -> usize
    where
        F: Fn(usize) -> (SimTime, SimTime),
    {
        match self {
            DispatchPolicy::Fixed => 0,
            DispatchPolicy::EarliestForecast => {
                let mut best = 0;
                let mut best_forecast = SimTime::INFINITY;
                for (d, queue) in candidates.iter().enumerate() {
                    let f = forecast_completion(queue, now, cost(d));
                    if f < best_forecast {
                        best = d;
                        best_forecast = f;
                    }
                }
                debug!("dispatch at {now}: candidate {best} forecast to finish at {best_forecast}");
                candidates[best].reserve(best_forecast);
                best
            }
        }
    }
}

/// Forecast completion of a train reaching `queue` after `travel` seconds and
/// needing `service` seconds there.
#[inline]
pub fn forecast_completion(
    queue: &LocationQueue,
    now: SimTime,
    (travel, service): (SimTime, SimTime),
) -> SimTime {
    queue.forecast_tail().max(now + travel) + service
}
