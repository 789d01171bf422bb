//! Error types for civil-date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-date construction or conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day triple does not name a day of the proleptic
    /// Gregorian calendar within years 1 through 9999.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid civil date: {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}
