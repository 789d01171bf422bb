//! Lunisolar calendar event search and date resolution.
//!
//! This crate provides:
//! - Solar term solvers for chūki and nibun/nishi crossings
//! - A new moon (saku) solver
//! - Month assembly with intercalary month placement
//! - Civil-date resolution to the Japanese lunisolar calendar (kyūreki)
//! - The rokuyō six-day cycle derived from lunisolar dates

pub mod error;
pub mod kyureki;
pub mod kyureki_types;
pub mod new_moon;
pub mod rokuyou;
pub mod solar_term;

pub use error::SearchError;
pub use kyureki::{kyureki_at, kyureki_for_date, kyureki_for_date_tz, rokuyou_for_date};
pub use kyureki_types::KyurekiDate;
pub use new_moon::saku_near;
pub use rokuyou::{ALL_ROKUYOU, Rokuyou};
pub use solar_term::{SolarTerm, chuki_before, nibun_before};
