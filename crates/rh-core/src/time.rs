//! Simulated time.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a plain `f64` count of simulated
//! seconds since the start of the run.  Every event time is derived as
//! `now + delta`, and equal times are compared exactly (no epsilon), so two
//! trains whose travel durations agree to the last bit really do collide and
//! the calendar's FIFO tie-break decides their order.
//!
//! Nothing here is tied to the wall clock.

use std::fmt;

/// Simulated seconds since the start of a run.
pub type SimTime = f64;

/// Seconds needed to cover `distance_m` metres at `speed_mps` metres/second.
///
/// The caller guarantees `speed_mps > 0` (enforced by
/// [`StaticConfig::validate`][crate::StaticConfig::validate]).
#[inline]
pub fn travel_time(distance_m: f64, speed_mps: f64) -> SimTime {
    distance_m / speed_mps
}

/// Display adapter rendering a `SimTime` as `[Dd ]HH:MM:SS.s`.
///
/// Useful for human-readable log lines without a datetime library.
#[derive(Copy, Clone, Debug)]
pub struct Hms(pub SimTime);

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }
        let total = self.0.max(0.0);
        let days = (total / 86_400.0).floor();
        let rem = total - days * 86_400.0;
        let hours = (rem / 3_600.0).floor();
        let minutes = ((rem - hours * 3_600.0) / 60.0).floor();
        let seconds = rem - hours * 3_600.0 - minutes * 60.0;
        if days > 0.0 {
            write!(f, "{days}d ")?;
        }
        write!(f, "{hours:02}:{minutes:02}:{seconds:04.1}")
    }
}
