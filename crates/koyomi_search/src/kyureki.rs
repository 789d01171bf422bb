//! Lunisolar month assembly and date resolution.
//!
//! A lunisolar month runs from the day of one new moon (saku) to the day
//! before the next, and takes the number of the chūki falling inside it:
//! the month holding the vernal equinox is the 2nd, the summer solstice
//! the 5th, and so on. A month containing no chūki repeats the previous
//! month's number as its intercalary (leap) month. Resolving one civil day
//! therefore needs the nibun before it, the three chūki after that, and
//! the five new moons bracketing them. Day-level decisions compare whole
//! local days, so an event's clock time never shifts a month boundary.

use koyomi_time::{CivilDate, JST_UTC_OFFSET, year_month_from_jdn};

use crate::error::SearchError;
use crate::kyureki_types::KyurekiDate;
use crate::new_moon::saku_near;
use crate::rokuyou::Rokuyou;
use crate::solar_term::{chuki_before, nibun_before};

/// One row of the month table: number, leap flag, and the local-midnight
/// day number its first day falls on.
#[derive(Debug, Clone, Copy)]
struct MonthEntry {
    month: i64,
    leap: bool,
    start: i64,
}

/// Lunisolar date of the civil day at local-midnight Julian day number
/// `tm0`, under the given UTC offset (a fraction of a day).
pub fn kyureki_at(tm0: i64, utc_offset: f64) -> Result<KyurekiDate, SearchError> {
    let tm = tm0 as f64;

    // The nibun at or before the query, then the three following chūki.
    let mut chu = [nibun_before(tm, utc_offset); 4];
    for i in 1..4 {
        chu[i] = chuki_before(chu[i - 1].jdn + 32.0, utc_offset);
    }

    // Five new moons starting from the one preceding that nibun. A step of
    // 30 days can land back on the same conjunction; redo those from 35.
    let mut saku = [saku_near(chu[0].jdn, utc_offset)?; 5];
    for i in 1..5 {
        saku[i] = saku_near(saku[i - 1] + 30.0, utc_offset)?;
        if (saku[i - 1] as i64 - saku[i] as i64).abs() <= 26 {
            saku[i] = saku_near(saku[i - 1] + 35.0, utc_offset)?;
        }
    }

    if saku[1] as i64 <= chu[0].jdn as i64 {
        // Backed up one conjunction too far; shift the window left and
        // fill the vacated slot.
        for i in 0..4 {
            saku[i] = saku[i + 1];
        }
        saku[4] = saku_near(saku[3] + 35.0, utc_offset)?;
    } else if saku[0] as i64 > chu[0].jdn as i64 {
        // Did not back up far enough; shift right and recompute the head.
        for i in (1..5).rev() {
            saku[i] = saku[i - 1];
        }
        saku[0] = saku_near(saku[0] - 27.0, utc_offset)?;
    }

    // Five new moons inside four chūki intervals leave one month without a
    // chūki: a leap month candidate.
    let mut leap = saku[4] as i64 <= chu[3].jdn as i64;

    let mut months = [MonthEntry {
        month: (chu[0].longitude / 30.0) as i64 + 2,
        leap: false,
        start: saku[0] as i64,
    }; 5];

    for i in 1..5 {
        if leap && i != 1 {
            let term = chu[i - 1].jdn as i64;
            if term <= saku[i - 1] as i64 || term >= saku[i] as i64 {
                months[i - 1] = MonthEntry {
                    month: months[i - 2].month,
                    leap: true,
                    start: saku[i - 1] as i64,
                };
                leap = false;
            }
        }
        let mut number = months[i - 1].month + 1;
        if number > 12 {
            number -= 12;
        }
        months[i] = MonthEntry {
            month: number,
            leap: false,
            start: saku[i] as i64,
        };
    }

    // The query day belongs to the last month starting at or before it.
    let mut chosen = 0;
    for (i, entry) in months.iter().enumerate() {
        if tm0 < entry.start {
            break;
        }
        chosen = i;
        if tm0 == entry.start {
            break;
        }
    }

    let month = months[chosen].month;
    let leap_month = months[chosen].leap;
    let day = tm0 - months[chosen].start + 1;

    // Months 10 through 12 reaching past New Year's Eve still belong to
    // the old lunisolar year.
    let (mut year, civil_month) = year_month_from_jdn(tm);
    if month > 9 && month > i64::from(civil_month) {
        year -= 1;
    }

    Ok(KyurekiDate {
        year,
        month: month as u8,
        leap_month,
        day: day as u8,
    })
}

/// Lunisolar date of a civil date under Japan Standard Time.
pub fn kyureki_for_date(date: &CivilDate) -> Result<KyurekiDate, SearchError> {
    kyureki_for_date_tz(date, JST_UTC_OFFSET)
}

/// Lunisolar date of a civil date under an arbitrary UTC offset, given as
/// a fraction of a day.
pub fn kyureki_for_date_tz(date: &CivilDate, utc_offset: f64) -> Result<KyurekiDate, SearchError> {
    kyureki_at(date.to_jdn(), utc_offset)
}

/// Rokuyō label of a civil date under Japan Standard Time.
pub fn rokuyou_for_date(date: &CivilDate) -> Result<Rokuyou, SearchError> {
    Ok(kyureki_for_date(date)?.rokuyou())
}
