//! `rh-calendar`: the pending-event calendar of the railhaul simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`event`]    | `Event`:  fire time, phase, train                     |
//! | [`calendar`] | `EventCalendar` (`BinaryHeap` keyed by time + seq)    |
//! | [`error`]    | `CalendarError`, `CalendarResult<T>`                  |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key(event) = (fire_time, seq)      seq = insertion counter, never reused
//! pop()      = event with the smallest key
//! ```
//!
//! Equal fire times therefore pop in push order, which keeps runs
//! reproducible when trains released together collide on identical travel
//! times.

pub mod calendar;
pub mod error;
pub mod event;


pub use calendar::EventCalendar;
pub use error::{CalendarError, CalendarResult};
pub use event::Event;
