//! Low-precision solar and lunar ecliptic longitude models.
//!
//! This crate provides:
//! - Degree normalization ([`angle`])
//! - The apparent solar longitude series ([`sun`])
//! - The apparent lunar longitude series ([`moon`])
//!
//! Both series are fixed periodic-term approximations after Hideaki
//! Takano's classical kyūreki method (QREKI.AWK, 1993), precise enough to
//! time solar terms and new moons to well under a day across the
//! historical range the calendar is defined over.

pub mod angle;
pub mod moon;
pub mod sun;

pub use angle::normalize_360;
pub use moon::lunar_longitude;
pub use sun::solar_longitude;

/// Julian day number of the J2000.0 epoch on the local-midnight axis
/// convention used throughout the workspace.
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Julian centuries since J2000.0 for a day number split into integer
/// day and fractional day.
///
/// The two quotients are summed separately rather than collapsed into
/// one division; the longitude series were fitted against exactly this
/// evaluation and the split keeps their floating-point behavior stable.
pub fn julian_centuries(day: f64, day_frac: f64) -> f64 {
    (day_frac + 0.5) / DAYS_PER_CENTURY + (day - J2000_JDN) / DAYS_PER_CENTURY
}
