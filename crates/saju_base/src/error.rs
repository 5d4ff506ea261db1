//! Error types for chart and fortune calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

/// Errors from building a birth chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    /// An input field is outside its valid range.
    InvalidInput { field: &'static str, value: i64 },
    /// Calendar or solar-term computation failed.
    Time(TimeError),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, value } => write!(f, "invalid input {field}: {value}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for PillarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for PillarError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate { field, value } => Self::InvalidInput { field, value },
            TimeError::OutOfRange { year } => Self::InvalidInput {
                field: "year",
                value: year as i64,
            },
            other => Self::Time(other),
        }
    }
}

/// Errors from fortune timeline calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FortuneError {
    /// Requested date is outside 1900..=2100.
    DateOutOfRange { year: i32 },
    /// A request parameter is invalid (for example an empty range).
    InvalidInput { field: &'static str, value: i64 },
    /// Calendar or solar-term computation failed.
    Time(TimeError),
}

impl Display for FortuneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange { year } => {
                write!(f, "date year {year} outside supported range 1900..=2100")
            }
            Self::InvalidInput { field, value } => write!(f, "invalid input {field}: {value}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for FortuneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for FortuneError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::OutOfRange { year } => Self::DateOutOfRange { year },
            TimeError::InvalidDate { field, value } => Self::InvalidInput { field, value },
            other => Self::Time(other),
        }
    }
}

impl From<PillarError> for FortuneError {
    fn from(e: PillarError) -> Self {
        match e {
            PillarError::InvalidInput { field, value } => Self::InvalidInput { field, value },
            PillarError::Time(t) => Self::from(t),
        }
    }
}
