//! Apparent ecliptic longitude of the Sun.
//!
//! Truncated periodic series after Takano's kyūreki tables. The term
//! coefficients are a fixed numeric artifact; reference outputs depend on
//! reproducing them, and their summation order, exactly.

use crate::angle::normalize_360;

/// Periodic correction terms, summed smallest amplitude first.
///
/// Each row: `[rate (deg/Julian century), phase (deg), amplitude (deg)]`.
#[rustfmt::skip]
static SUN_TERMS: [[f64; 3]; 14] = [
    //    rate      phase   amplitude
    [  31557.0,     161.0,    0.0004],
    [  29930.0,      48.0,    0.0004],
    [   2281.0,     221.0,    0.0005],
    [    155.0,     118.0,    0.0005],
    [  33718.0,     316.0,    0.0006],
    [   9038.0,      64.0,    0.0007],
    [   3035.0,     110.0,    0.0007],
    [  65929.0,      45.0,    0.0007],
    [  22519.0,     352.0,    0.0013],
    [  45038.0,     254.0,    0.0015],
    [ 445267.0,     208.0,    0.0018],
    [     19.0,     159.0,    0.0018],
    [  32964.0,     158.0,    0.0020],
    [  71998.1,     265.1,    0.0200],
];

/// Apparent solar ecliptic longitude in degrees, normalized to [0, 360).
///
/// `t` is Julian centuries since J2000.0 (see
/// [`julian_centuries`](crate::julian_centuries)).
pub fn solar_longitude(t: f64) -> f64 {
    let mut th = 0.0;
    for row in &SUN_TERMS {
        let ang = normalize_360(row[0] * t + row[1]);
        th += row[2] * ang.to_radians().cos();
    }

    // One term carries a linear-in-t amplitude alongside its fixed part.
    let ang = normalize_360(35999.05 * t + 267.52);
    th -= 0.0048 * t * ang.to_radians().cos();
    th += 1.9147 * ang.to_radians().cos();

    // Mean longitude, normalized in two steps to match the reference
    // evaluation.
    let ang = normalize_360(36000.7695 * t);
    let ang = normalize_360(ang + 280.4659);
    normalize_360(th + ang)
}
