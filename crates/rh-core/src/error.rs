//! Configuration error type.
//!
//! Every variant corresponds to the `InvalidConfiguration` condition: it is
//! detected eagerly, before a model is built or a run starts, and is fatal.

use thiserror::Error;

use crate::ClassId;

/// Rejected static configuration or run parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{what} must be finite, got {value}")]
    NotFinite { what: &'static str, value: f64 },

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("train speed of {class} is zero")]
    ZeroSpeed { class: ClassId },

    #[error("{what} has {got} entries, expected {expected}")]
    DimensionMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("configuration declares no {0}")]
    Empty(&'static str),

    #[error("{count} {what} exceed the id range")]
    TooMany { what: &'static str, count: usize },

    #[error("fleet is empty: every class has a train count of zero")]
    EmptyFleet,

    #[error("initial port {port} out of range (only {ports} ports)")]
    InitialPortOutOfRange { port: usize, ports: usize },

    #[error("horizon must be a finite, non-negative simulated time, got {0}")]
    InvalidHorizon(f64),
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
