//! Julian day number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer values on this day-number axis fall at local midnight of the
//! civil day. The longitude models expect time corrected to UT, so the
//! civil clock's UTC offset (for Japan, [`JST_UTC_OFFSET`]) is subtracted
//! from the fractional day before any astronomical evaluation.

/// UTC offset of Japan Standard Time as a fraction of a day (+9h).
pub const JST_UTC_OFFSET: f64 = 0.375;

/// True iff `year` is a leap year of the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, or 0 when `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Local-midnight Julian day number of a proleptic Gregorian date.
///
/// Inputs are not validated; construct a [`CivilDate`](crate::CivilDate)
/// first when the triple comes from outside.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32076
}

/// Proleptic Gregorian (year, month, day) for a local-midnight Julian day
/// number. Exact inverse of [`gregorian_to_jdn`].
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    // The extraction below expects the noon-anchored day number.
    let j = jdn + 1;
    let f = j + 1401 + (((4 * j + 274277) / 146097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (14 - month) / 12;
    (year as i32, month as u32, day as u32)
}

/// Closed-form proleptic Gregorian year and month of a (possibly
/// fractional) Julian day number.
///
/// Agrees with [`jdn_to_gregorian`] on year and month while skipping the
/// day extraction; the lunisolar resolver uses it to anchor absolute year
/// numbering.
pub fn year_month_from_jdn(jdn: f64) -> (i32, u32) {
    let f0 = (jdn + 68570.0).floor();
    let f1 = (f0 / 36524.25).floor();
    let f2 = f0 - (36524.25 * f1 + 0.75).floor();
    let f3 = ((f2 + 1.0) / 365.2425).floor();
    let f4 = f2 - (365.25 * f3).floor() + 31.0;
    let f5 = (f4 / 30.59).floor();
    let f6 = (f5 / 11.0).floor();

    let i1 = f1 as i32;
    let i3 = f3 as i32;
    let i5 = f5 as i32;
    let i6 = f6 as i32;

    let year = 100 * (i1 - 49) + i3 + i6;
    let month = (i5 - 12 * i6 + 2) as u32;
    (year, month)
}
