//! `rh-sim`: discrete-event driver for the railhaul simulator.
//!
//! # Event loop
//!
//! ```text
//! simulate(model, horizon):
//!   ① Reset  : clock := 0, calendar emptied, model.clear()
//!   ② Seed   : one ArrivedAtTerminal event per train
//!   ③ Loop   : while the calendar is non-empty and the clock is at or
//!               before the horizon: pop the earliest event, advance the
//!               clock to its fire time, run the handler for its phase,
//!               schedule the returned event
//!   ④ Stop   : Terminated; statistics stay queryable on the model
//! ```
//!
//! The loop is strictly sequential: one handler at a time, events in
//! non-decreasing time order, FIFO among equal times.  A run with the same
//! configuration always produces the same output.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rh_model::ModelBuilder;
//! use rh_sim::Simulator;
//!
//! let mut model = ModelBuilder::new(config).build()?;
//! let mut sim = Simulator::new();
//! sim.simulate(&mut model, 24.0 * 3600.0)?;
//! println!("{:?}", model.productivity_series());
//! ```

pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TraceRecord};
pub use sim::{RunState, Simulator};
