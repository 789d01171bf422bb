//! Rokuyō (六曜), the six-day fortune cycle of the Japanese calendar.
//!
//! The label repeats with a fixed period inside each lunisolar month and
//! resets at the month boundary, so it depends only on the lunisolar month
//! number and day of month: index = (month + day) mod 6.

/// The six rokuyō labels, in index order (0 = Taian .. 5 = Butsumetsu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rokuyou {
    Taian,
    Shakko,
    Sensho,
    Tomobiki,
    Senbu,
    Butsumetsu,
}

/// All six labels in index order (0 = Taian .. 5 = Butsumetsu).
pub const ALL_ROKUYOU: [Rokuyou; 6] = [
    Rokuyou::Taian,
    Rokuyou::Shakko,
    Rokuyou::Sensho,
    Rokuyou::Tomobiki,
    Rokuyou::Senbu,
    Rokuyou::Butsumetsu,
];

impl Rokuyou {
    /// Label for a lunisolar month number and day of month.
    ///
    /// Leap months use the same month number as the month they follow, so
    /// the cycle continues through them unchanged.
    pub const fn from_month_day(month: u8, day: u8) -> Rokuyou {
        match (month as usize + day as usize) % 6 {
            0 => Self::Taian,
            1 => Self::Shakko,
            2 => Self::Sensho,
            3 => Self::Tomobiki,
            4 => Self::Senbu,
            _ => Self::Butsumetsu,
        }
    }

    /// Kanji name of the label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Taian => "大安",
            Self::Shakko => "赤口",
            Self::Sensho => "先勝",
            Self::Tomobiki => "友引",
            Self::Senbu => "先負",
            Self::Butsumetsu => "仏滅",
        }
    }

    /// Romanized name of the label.
    pub const fn romaji(self) -> &'static str {
        match self {
            Self::Taian => "Taian",
            Self::Shakko => "Shakkō",
            Self::Sensho => "Senshō",
            Self::Tomobiki => "Tomobiki",
            Self::Senbu => "Senbu",
            Self::Butsumetsu => "Butsumetsu",
        }
    }

    /// 0-based index (Taian=0 .. Butsumetsu=5).
    pub const fn index(self) -> u8 {
        match self {
            Self::Taian => 0,
            Self::Shakko => 1,
            Self::Sensho => 2,
            Self::Tomobiki => 3,
            Self::Senbu => 4,
            Self::Butsumetsu => 5,
        }
    }

    /// All six labels in index order.
    pub const fn all() -> &'static [Rokuyou; 6] {
        &ALL_ROKUYOU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rokuyou_count() {
        assert_eq!(ALL_ROKUYOU.len(), 6);
    }

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_ROKUYOU.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for r in ALL_ROKUYOU {
            assert!(!r.name().is_empty());
            assert!(!r.romaji().is_empty());
        }
    }

    #[test]
    fn new_year_opens_on_sensho() {
        // The first day of the first lunisolar month is always 先勝.
        assert_eq!(Rokuyou::from_month_day(1, 1), Rokuyou::Sensho);
    }

    #[test]
    fn cycle_advances_daily_within_a_month() {
        assert_eq!(Rokuyou::from_month_day(8, 26), Rokuyou::Senbu);
        assert_eq!(Rokuyou::from_month_day(8, 27), Rokuyou::Butsumetsu);
        assert_eq!(Rokuyou::from_month_day(8, 28), Rokuyou::Taian);
        assert_eq!(Rokuyou::from_month_day(8, 29), Rokuyou::Shakko);
    }

    #[test]
    fn cycle_resets_at_month_boundaries() {
        // Crossing from 8/30 into 9/1 jumps the cycle instead of advancing
        // it by one step.
        assert_eq!(Rokuyou::from_month_day(8, 30), Rokuyou::Sensho);
        assert_eq!(Rokuyou::from_month_day(9, 1), Rokuyou::Senbu);
    }

    #[test]
    fn six_day_period() {
        for month in 1..=12u8 {
            for day in 1..=24u8 {
                assert_eq!(
                    Rokuyou::from_month_day(month, day),
                    Rokuyou::from_month_day(month, day + 6)
                );
            }
        }
    }
}
