//! Validated proleptic Gregorian calendar dates.

use crate::error::TimeError;
use crate::julian::{days_in_month, gregorian_to_jdn, jdn_to_gregorian};

/// A validated proleptic Gregorian calendar date.
///
/// Construction rejects triples that do not name a real day; years are
/// restricted to 1 through 9999, the range the lunisolar resolver
/// supports. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=9999).contains(&year)
            || month == 0
            || month > 12
            || day == 0
            || day > days_in_month(year, month)
        {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date of a local-midnight Julian day number.
    pub fn from_jdn(jdn: i64) -> Result<Self, TimeError> {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Local-midnight Julian day number of this date.
    pub fn to_jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
