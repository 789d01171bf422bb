//! New moon (saku) solver.
//!
//! Finds the conjunction of the Sun and Moon nearest a query instant by
//! iterating on the elongation, stepping roughly one synodic month per 360
//! degrees. The capture corrections around the wrap point follow the
//! classical kyūreki recipe, including the restart from 26 days before the
//! query when the iteration stalls.

use koyomi_ephem::{julian_centuries, lunar_longitude, normalize_360, solar_longitude};

use crate::error::SearchError;

/// Iteration stops once the time correction is within one second.
const CONVERGENCE_DAYS: f64 = 1.0 / 86400.0;

/// Mean synodic month in days.
const SYNODIC_MONTH: f64 = 29.530589;

/// Iteration budget; the solver restarts once halfway through.
const MAX_ITERATIONS: usize = 30;

/// Instant of the new moon nearest `tm`, as a local-midnight Julian day
/// number with the local civil time of day in the fractional part.
///
/// On the first pass a negative elongation is folded into `[0, 360)` so the
/// solver backs up to the preceding conjunction rather than chasing the next
/// one. Returns [`SearchError::NoConvergence`] only if the iteration budget
/// runs out despite the mid-budget restart.
pub fn saku_near(tm: f64, utc_offset: f64) -> Result<f64, SearchError> {
    let mut day = tm.trunc();
    let mut day_frac = tm.fract() - utc_offset;

    let mut converged = false;
    for lc in 1..MAX_ITERATIONS {
        let t = julian_centuries(day, day_frac);
        let sun_lon = solar_longitude(t);
        let moon_lon = lunar_longitude(t);
        let mut delta_lon = moon_lon - sun_lon;

        if lc == 1 && delta_lon < 0.0 {
            delta_lon = normalize_360(delta_lon);
        } else if (0.0..=20.0).contains(&sun_lon) && moon_lon >= 300.0 {
            // Straddling the equinox point: the Moon is still in the old
            // revolution, so measure the gap the short way around.
            delta_lon = normalize_360(delta_lon);
            delta_lon = 360.0 - delta_lon;
        } else if delta_lon.abs() > 40.0 {
            delta_lon = normalize_360(delta_lon);
        }

        let step = delta_lon * SYNODIC_MONTH / 360.0;
        let delta_t1 = step.trunc();
        let delta_t2 = step.fract();

        day -= delta_t1;
        day_frac -= delta_t2;
        if day_frac < 0.0 {
            day_frac += 1.0;
            day -= 1.0;
        }

        if (delta_t1 + delta_t2).abs() > CONVERGENCE_DAYS {
            if lc == 15 {
                // Stalled; restart from 26 days before the query.
                day = tm - 26.0;
                day_frac = 0.0;
            }
        } else {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(SearchError::NoConvergence("new moon search did not converge"));
    }

    Ok(day + day_frac + utc_offset)
}
