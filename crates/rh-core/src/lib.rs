//! `rh-core`: foundational types for the `railhaul` logistics simulator.
//!
//! This crate is a dependency of every other `rh-*` crate.  It intentionally
//! has no `rh-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `TrainId`, `PortId`, `TerminalId`, `ClassId`           |
//! | [`time`]     | `SimTime`, `travel_time`, `Hms` display helper         |
//! | [`phase`]    | `PhaseKind`:  the four life-cycle transitions          |
//! | [`matrix`]   | `Matrix`:  dense row-major `f64` table                 |
//! | [`config`]   | `StaticConfig` and its validation                      |
//! | [`error`]    | `ConfigError`, `ConfigResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (JSON configs) |

pub mod config;
pub mod error;
pub mod ids;
pub mod matrix;
pub mod phase;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{StaticConfig, validate_horizon};
pub use error::{ConfigError, ConfigResult};
pub use ids::{ClassId, PortId, TerminalId, TrainId};
pub use matrix::Matrix;
pub use phase::PhaseKind;
pub use time::{Hms, SimTime, travel_time};
