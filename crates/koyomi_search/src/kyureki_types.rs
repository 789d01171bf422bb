//! Result types for lunisolar calendar resolution.

use std::fmt::{Display, Formatter};

use crate::rokuyou::Rokuyou;

/// A date on the Japanese lunisolar calendar (kyūreki).
///
/// Ordering is chronological: year, then month number, with a leap month
/// sorting after the regular month of the same number, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KyurekiDate {
    /// Lunisolar year, numbered by the civil year in which it begins.
    pub year: i32,
    /// Month number, 1 through 12. A leap month repeats the number of the
    /// month it follows.
    pub month: u8,
    /// Whether this is the intercalary (leap) month of its number.
    pub leap_month: bool,
    /// Day of the lunisolar month, 1 through 30.
    pub day: u8,
}

impl KyurekiDate {
    /// Rokuyō label for this date.
    pub const fn rokuyou(self) -> Rokuyou {
        Rokuyou::from_month_day(self.month, self.day)
    }
}

impl Display for KyurekiDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}月{}日",
            self.year,
            if self.leap_month { "閏" } else { "" },
            self.month,
            self.day
        )
    }
}
