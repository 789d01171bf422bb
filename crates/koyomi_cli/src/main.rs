use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use koyomi_search::{KyurekiDate, kyureki_for_date_tz};
use koyomi_time::{CivilDate, days_in_month};

/// Resolve civil dates to the Japanese lunisolar calendar (kyūreki).
///
/// With no arguments, reports today. Given a year, walks every day of that
/// civil year; adding a month narrows the walk, and a full date reports a
/// single day.
#[derive(Parser)]
#[command(name = "koyomi")]
struct Cli {
    /// Civil year (1-9999)
    year: Option<i32>,
    /// Civil month (1-12)
    month: Option<u32>,
    /// Civil day of month
    day: Option<u32>,
    /// UTC offset of the civil clock, in hours
    #[arg(long, default_value = "9")]
    utc_offset_hours: f64,
}

fn main() {
    let cli = Cli::parse();
    let utc_offset = require_utc_offset(cli.utc_offset_hours);

    match (cli.year, cli.month, cli.day) {
        (None, _, _) => {
            let date = today(utc_offset);
            print_day(&date, utc_offset);
        }
        (Some(year), None, _) => {
            for month in 1..=12 {
                print_month(year, month, utc_offset);
            }
        }
        (Some(year), Some(month), None) => print_month(year, month, utc_offset),
        (Some(year), Some(month), Some(day)) => {
            let date = require_date(year, month, day);
            print_day(&date, utc_offset);
        }
    }
}

fn print_month(year: i32, month: u32, utc_offset: f64) {
    let days = days_in_month(year, month);
    if days == 0 {
        eprintln!("Invalid month: {month} (1-12)");
        std::process::exit(1);
    }
    for day in 1..=days {
        let date = require_date(year, month, day);
        print_day(&date, utc_offset);
    }
}

fn print_day(date: &CivilDate, utc_offset: f64) {
    let kyureki = resolve(date, utc_offset);
    println!(
        "{}年{}月{}日 {} ({})",
        date.year(),
        date.month(),
        date.day(),
        kyureki,
        kyureki.rokuyou().name()
    );
}

fn resolve(date: &CivilDate, utc_offset: f64) -> KyurekiDate {
    match kyureki_for_date_tz(date, utc_offset) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("Failed to resolve {date}: {e}");
            std::process::exit(1);
        }
    }
}

/// Civil date of the current local day under the given UTC offset.
fn today(utc_offset: f64) -> CivilDate {
    let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("System clock reads before the Unix epoch: {e}");
            std::process::exit(1);
        }
    };
    let local_secs = now.as_secs() as i64 + (utc_offset * 86_400.0).round() as i64;
    // 1970-01-01 falls on local-midnight day number 2_440_587.
    let jdn = local_secs.div_euclid(86_400) + 2_440_587;
    match CivilDate::from_jdn(jdn) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to determine today: {e}");
            std::process::exit(1);
        }
    }
}

fn require_date(year: i32, month: u32, day: u32) -> CivilDate {
    match CivilDate::new(year, month, day) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn require_utc_offset(hours: f64) -> f64 {
    if !hours.is_finite() || !(-24.0..=24.0).contains(&hours) {
        eprintln!("Invalid UTC offset: {hours} (expected -24 to 24 hours)");
        std::process::exit(1);
    }
    hours / 24.0
}
