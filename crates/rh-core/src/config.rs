//! Static run configuration and its validation.
//!
//! `StaticConfig` is immutable for the duration of a run.  Parsing it from
//! physical units or files is the caller's job; this module only checks that
//! what it was handed is usable:
//!
//! | Field            | Shape     | Unit   |
//! |------------------|-----------|--------|
//! | `distance`       | P × T     | m      |
//! | `unloading_time` | P × C     | s      |
//! | `loading_time`   | T × C     | s      |
//! | `train_speed`    | C         | m/s    |
//! | `train_load`     | C         | kg     |
//! | `train_count`    | C         | trains |
//!
//! where P = ports, T = terminals, C = train classes.

use crate::{
    ClassId, ConfigError, ConfigResult, Matrix, PortId, SimTime, TerminalId, TrainId,
    travel_time,
};

/// Topology, service times and fleet composition of one simulation model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticConfig {
    /// Port-to-terminal distance, `distance[port][terminal]`, metres.
    pub distance: Matrix,

    /// Unloading duration, `unloading_time[port][class]`, seconds.
    pub unloading_time: Matrix,

    /// Loading duration, `loading_time[terminal][class]`, seconds.
    pub loading_time: Matrix,

    /// Cruising speed per class, metres/second.  Must be strictly positive.
    pub train_speed: Vec<f64>,

    /// Payload per class, kilograms.
    pub train_load: Vec<f64>,

    /// Number of trains of each class.
    pub train_count: Vec<u32>,

    /// Port every train starts from.  Index 0 in every observed setup.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_port: PortId,
}

impl StaticConfig {
    #[inline]
    pub fn port_count(&self) -> usize {
        self.distance.rows()
    }

    #[inline]
    pub fn terminal_count(&self) -> usize {
        self.distance.cols()
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.train_count.len()
    }

    /// Total number of trains across all classes.
    pub fn fleet_size(&self) -> usize {
        self.train_count.iter().map(|&n| n as usize).sum()
    }

    /// Seconds for a `class` train to travel between `port` and `terminal`
    /// (either direction).
    #[inline]
    pub fn travel_time(&self, port: PortId, terminal: TerminalId, class: ClassId) -> SimTime {
        travel_time(
            self.distance.get(port.index(), terminal.index()),
            self.train_speed[class.index()],
        )
    }

    /// Loading duration of a `class` train at `terminal`.
    #[inline]
    pub fn loading_time(&self, terminal: TerminalId, class: ClassId) -> SimTime {
        self.loading_time.get(terminal.index(), class.index())
    }

    /// Unloading duration of a `class` train at `port`.
    #[inline]
    pub fn unloading_time(&self, port: PortId, class: ClassId) -> SimTime {
        self.unloading_time.get(port.index(), class.index())
    }

    /// Payload of a `class` train.
    #[inline]
    pub fn payload(&self, class: ClassId) -> f64 {
        self.train_load[class.index()]
    }

    /// Check dimensions and value ranges.
    ///
    /// Runs before any model is built; a configuration that passes can be
    /// indexed with any `PortId < P`, `TerminalId < T`, `ClassId < C` and
    /// never produces a NaN, infinite, or negative duration.
    pub fn validate(&self) -> ConfigResult<()> {
        let ports = self.port_count();
        let terminals = self.terminal_count();
        let classes = self.class_count();

        if ports == 0 {
            return Err(ConfigError::Empty("ports"));
        }
        if terminals == 0 {
            return Err(ConfigError::Empty("terminals"));
        }
        if classes == 0 {
            return Err(ConfigError::Empty("train classes"));
        }
        check_ids::<PortId>("ports", ports)?;
        check_ids::<TerminalId>("terminals", terminals)?;
        check_ids::<ClassId>("train classes", classes)?;

        // ── Dimensions ────────────────────────────────────────────────────
        check_len("unloading_time rows", ports, self.unloading_time.rows())?;
        check_len("unloading_time columns", classes, self.unloading_time.cols())?;
        check_len("loading_time rows", terminals, self.loading_time.rows())?;
        check_len("loading_time columns", classes, self.loading_time.cols())?;
        check_len("train_speed", classes, self.train_speed.len())?;
        check_len("train_load", classes, self.train_load.len())?;

        // ── Values ────────────────────────────────────────────────────────
        for v in self.distance.values() {
            check_value("distance", v)?;
        }
        for v in self.unloading_time.values() {
            check_value("unloading_time", v)?;
        }
        for v in self.loading_time.values() {
            check_value("loading_time", v)?;
        }
        for &v in &self.train_load {
            check_value("train_load", v)?;
        }
        for (class, &v) in self.train_speed.iter().enumerate() {
            check_value("train_speed", v)?;
            if v == 0.0 {
                return Err(ConfigError::ZeroSpeed { class: ClassId(class as u16) });
            }
        }

        if self.fleet_size() == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        check_ids::<TrainId>("trains", self.fleet_size())?;
        if self.initial_port.index() >= ports {
            return Err(ConfigError::InitialPortOutOfRange {
                port:  self.initial_port.index(),
                ports,
            });
        }
        Ok(())
    }
}

/// Check a simulated-time horizon.  Runs never terminate on their own, so the
/// horizon must be a real, finite cut-off.
pub fn validate_horizon(horizon: SimTime) -> ConfigResult<()> {
    if horizon.is_finite() && horizon >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidHorizon(horizon))
    }
}

/// Every index below `count` must fit the id type `I`.
fn check_ids<I: TryFrom<usize>>(what: &'static str, count: usize) -> ConfigResult<()> {
    match I::try_from(count - 1) {
        Ok(_) => Ok(()),
        Err(_) => Err(ConfigError::TooMany { what, count }),
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> ConfigResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(ConfigError::DimensionMismatch { what, expected, got })
    }
}

fn check_value(what: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { what, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { what, value });
    }
    Ok(())
}
