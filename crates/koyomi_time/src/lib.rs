//! Civil-calendar support for the koyomi workspace.
//!
//! This crate provides:
//! - Proleptic Gregorian date handling via [`CivilDate`]
//! - Conversions between civil dates and the Julian day number axis
//! - The closed-form year/month extraction used to anchor lunisolar years
//!
//! The day count used throughout the workspace places integer values at
//! local midnight of the civil day, one less than the noon-anchored
//! astronomical day number: `gregorian_to_jdn(2000, 1, 1)` is 2451544.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilDate;
pub use error::TimeError;
pub use julian::{
    JST_UTC_OFFSET, days_in_month, gregorian_to_jdn, is_leap_year, jdn_to_gregorian,
    year_month_from_jdn,
};
