use rh_core::SimTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    /// A handler tried to schedule at a NaN/infinite time or before the
    /// current time (negative delta).  Indicates a logic defect.
    #[error("invalid event time {fire_time} (calendar time is {now})")]
    InvalidEvent { fire_time: SimTime, now: SimTime },

    #[error("pop from an empty event calendar")]
    EmptyCalendar,
}

pub type CalendarResult<T> = Result<T, CalendarError>;
