//! Error types for calendar event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use koyomi_time::TimeError;

/// Errors from lunisolar calendar computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from civil date handling.
    Time(TimeError),
    /// Iterative solver did not converge.
    NoConvergence(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
