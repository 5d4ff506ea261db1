//! Error types for calendar and solar-term calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion or solar-term search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    InvalidDate { field: &'static str, value: i64 },
    /// Year is outside the supported 1900..=2100 span.
    OutOfRange { year: i32 },
    /// Iterative search did not bracket or converge.
    NoConvergence(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { field, value } => write!(f, "invalid {field}: {value}"),
            Self::OutOfRange { year } => {
                write!(f, "year {year} outside supported range 1900..=2100")
            }
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for TimeError {}
