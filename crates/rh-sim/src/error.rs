use rh_calendar::CalendarError;
use rh_core::ConfigError;
use rh_model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("event calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

pub type SimResult<T> = Result<T, SimError>;
