//! `rh-model`: the cyclic port/terminal logistics model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`train`]    | `TrainState`, `TrainStore`                                 |
//! | [`queue`]    | `QueueEntry`, `LocationQueue`, `QueueTracker`              |
//! | [`dispatch`] | `DispatchPolicy` (`Fixed`, `EarliestForecast`)             |
//! | [`model`]    | `LogisticsModel`:  the four life-cycle handlers            |
//! | [`builder`]  | `ModelBuilder`                                             |
//! | [`stats`]    | `Delivery`, `RunStatistics`, post-run queries              |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                             |
//!
//! # Cycle model (summary)
//!
//! ```text
//! ArrivedAtTerminal ─ queue for loading  ─▶ FinishedLoading
//!        ▲                                        │ dispatch to a port
//!        │ dispatch to a terminal                 ▼
//! FinishedUnloading ◀─ queue for unloading ─ ArrivedAtPort
//! ```
//!
//! Each handler touches only the queue of the location it just served and
//! returns the single next event for the train.

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod queue;
pub mod stats;
pub mod train;


pub use builder::ModelBuilder;
pub use dispatch::DispatchPolicy;
pub use error::{ModelError, ModelResult};
pub use model::LogisticsModel;
pub use queue::{LocationQueue, QueueEntry, QueueTracker};
pub use stats::{Delivery, RunStatistics};
pub use train::{TrainState, TrainStore};
