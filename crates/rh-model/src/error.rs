use rh_core::{ConfigError, TrainId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("train {0} not found")]
    TrainNotFound(TrainId),
}

pub type ModelResult<T> = Result<T, ModelError>;
