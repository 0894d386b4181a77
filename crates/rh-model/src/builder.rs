//! Fluent builder for constructing a [`LogisticsModel`].

use rh_core::StaticConfig;

use crate::{DispatchPolicy, LogisticsModel, ModelResult, QueueTracker, TrainStore};

/// Fluent builder for [`LogisticsModel`].
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                              |
/// |--------------|--------------------------------------|
/// | `.policy(p)` | `DispatchPolicy::EarliestForecast`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(config)
///     .policy(DispatchPolicy::Fixed)
///     .build()?;
/// ```
pub struct ModelBuilder {
    config: StaticConfig,
    policy: DispatchPolicy,
}

impl ModelBuilder {
    pub fn new(config: StaticConfig) -> Self {
        Self { config, policy: DispatchPolicy::default() }
    }

    /// Select the routing policy used for every dispatch decision.
    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the configuration, create the fleet and empty queues, and
    /// return a ready-to-simulate model.
    pub fn build(self) -> ModelResult<LogisticsModel> {
        self.config.validate()?;

        let trains = TrainStore::from_config(&self.config);
        let queues = QueueTracker::new(self.config.port_count(), self.config.terminal_count());

        Ok(LogisticsModel {
            config:     self.config,
            policy:     self.policy,
            trains,
            queues,
            deliveries: Vec::new(),
        })
    }
}
