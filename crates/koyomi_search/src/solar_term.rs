//! Solar term solvers: chūki (30-degree) and nibun/nishi (90-degree) crossings.
//!
//! The traditional Japanese lunisolar calendar hangs its months on the even
//! solar terms (chūki), the instants at which the apparent solar longitude
//! passes a multiple of 30 degrees. The equinoxes and solstices (nibun and
//! nishi) are the subset at multiples of 90 degrees. Both solvers walk back
//! from a query instant to the most recent crossing, correcting the time by
//! roughly one day per degree of longitude excess until the step falls under
//! one second.
//!
//! Instants are Julian day numbers anchored at local midnight, carrying the
//! local civil time in their fractional part. `utc_offset` is the local
//! offset from UTC as a fraction of a day (see
//! [`koyomi_time::JST_UTC_OFFSET`]).

use koyomi_ephem::{julian_centuries, solar_longitude};

/// Iteration stops once the time correction is within one second.
const CONVERGENCE_DAYS: f64 = 1.0 / 86400.0;

/// Coarse tropical year length driving the longitude-to-time step.
const TROPICAL_YEAR: f64 = 365.2;

/// A solar term event: the instant of the crossing and the exact multiple of
/// 30 (or 90) degrees that was crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerm {
    /// Local-midnight Julian day number of the crossing, with the local
    /// civil time of day in the fractional part.
    pub jdn: f64,
    /// Apparent solar longitude at the crossing, an exact multiple of the
    /// solver's step (degrees in `[0, 360)`).
    pub longitude: f64,
}

/// Most recent chūki (30-degree solar term) at or before `tm`.
pub fn chuki_before(tm: f64, utc_offset: f64) -> SolarTerm {
    crossing_before(tm, utc_offset, 30.0)
}

/// Most recent nibun or nishi (equinox or solstice) at or before `tm`.
pub fn nibun_before(tm: f64, utc_offset: f64) -> SolarTerm {
    crossing_before(tm, utc_offset, 90.0)
}

/// Walk back from `tm` to the instant the solar longitude last crossed a
/// multiple of `step_deg`.
fn crossing_before(tm: f64, utc_offset: f64, step_deg: f64) -> SolarTerm {
    // Split into whole days and local time of day, then shift the fraction
    // to UTC for the dynamical-time argument.
    let mut day = tm.trunc();
    let mut day_frac = tm.fract() - utc_offset;

    // The target longitude is the step multiple at or below the longitude
    // at the query instant. The subtraction is exact, so the result can be
    // compared with `==` downstream.
    let t = julian_centuries(day, day_frac);
    let lon = solar_longitude(t);
    let target = lon - lon % step_deg;

    let mut delta_t1: f64 = 0.0;
    let mut delta_t2: f64 = 1.0;
    while (delta_t1 + delta_t2).abs() > CONVERGENCE_DAYS {
        let t = julian_centuries(day, day_frac);
        let delta_lon = wrap_pm180(solar_longitude(t) - target);

        let step = delta_lon * TROPICAL_YEAR / 360.0;
        delta_t1 = step.trunc();
        delta_t2 = step.fract();

        day -= delta_t1;
        day_frac -= delta_t2;
        if day_frac < 0.0 {
            day_frac += 1.0;
            day -= 1.0;
        }
    }

    SolarTerm {
        jdn: day + day_frac + utc_offset,
        longitude: target,
    }
}

/// Pull a longitude difference into the solver's capture range. Values of
/// exactly ±180 are left alone so the step keeps its sign.
fn wrap_pm180(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_time::{JST_UTC_OFFSET, gregorian_to_jdn};

    fn jdn(y: i32, m: u32, d: u32) -> i64 {
        gregorian_to_jdn(y, m, d)
    }

    #[test]
    fn autumn_equinox_2017() {
        // 2017-09-23 05:02 JST, solar longitude 180.
        let term = nibun_before(jdn(2017, 10, 15) as f64, JST_UTC_OFFSET);
        assert_eq!(term.longitude, 180.0);
        assert_eq!(term.jdn.floor() as i64, jdn(2017, 9, 23));
    }

    #[test]
    fn vernal_equinox_2017() {
        // 2017-03-20 19:28 JST, solar longitude 0.
        let term = nibun_before(jdn(2017, 4, 10) as f64, JST_UTC_OFFSET);
        assert_eq!(term.longitude, 0.0);
        assert_eq!(term.jdn.floor() as i64, jdn(2017, 3, 20));
    }

    #[test]
    fn chuki_between_equinoxes() {
        // Sōkō, the 210-degree term, fell on 2017-10-23 in Japan.
        let term = chuki_before(jdn(2017, 11, 1) as f64, JST_UTC_OFFSET);
        assert_eq!(term.longitude, 210.0);
        assert_eq!(term.jdn.floor() as i64, jdn(2017, 10, 23));
    }

    #[test]
    fn chuki_agrees_with_nibun_at_equinox() {
        // Same query, same 180-degree target: the two solvers walk the
        // identical iteration and land on the identical float.
        let query = jdn(2017, 10, 1) as f64;
        let c = chuki_before(query, JST_UTC_OFFSET);
        let n = nibun_before(query, JST_UTC_OFFSET);
        assert_eq!(c.longitude, 180.0);
        assert_eq!(c.jdn, n.jdn);
    }

    #[test]
    fn crossing_is_not_after_query() {
        for &(y, m, d) in &[(1900, 1, 7), (1977, 6, 15), (2017, 10, 15), (2100, 12, 30)] {
            let query = jdn(y, m, d) as f64;
            let term = chuki_before(query, JST_UTC_OFFSET);
            assert!(term.jdn < query, "{y}-{m}-{d}");
            assert!(query - term.jdn < 32.0, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn stepping_32_days_reaches_the_next_term() {
        let first = chuki_before(jdn(2017, 10, 15) as f64, JST_UTC_OFFSET);
        let next = chuki_before(first.jdn + 32.0, JST_UTC_OFFSET);
        assert_eq!(next.longitude, (first.longitude + 30.0) % 360.0);
        let gap = next.jdn - first.jdn;
        assert!((29.0..32.0).contains(&gap), "gap {gap}");
    }

    #[test]
    fn wrap_keeps_exact_half_turn() {
        assert_eq!(wrap_pm180(180.0), 180.0);
        assert_eq!(wrap_pm180(-180.0), -180.0);
        assert_eq!(wrap_pm180(190.0), -170.0);
        assert_eq!(wrap_pm180(-190.0), 170.0);
        assert_eq!(wrap_pm180(42.0), 42.0);
    }
}
