//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! Low-precision solar theory (Meeus, Astronomical Algorithms ch. 25):
//! mean longitude, mean anomaly, equation of centre, then aberration and the
//! dominant nutation term. Accuracy is about 0.01 deg over 1900-2100, which
//! places solar-term instants within roughly a quarter hour.
//!
//! The input is treated as UT; the TT-UT difference (under two minutes in the
//! supported span) is below the accuracy of the theory.

use crate::julian::jd_to_centuries;

/// Mean daily motion of the Sun in degrees.
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 0.985_647_36;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360).
pub fn apparent_solar_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_lon = l0 + c;
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_360(true_lon - 0.005_69 - 0.004_78 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::jdn_from_date;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: apparent longitude 199.90895 deg
        let jd = 2_448_908.5;
        let lon = apparent_solar_longitude(jd);
        assert!((lon - 199.909).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn march_equinox_near_zero() {
        let jd = jdn_from_date(2024, 3, 20) as f64 - 0.5 + 3.0 / 24.0;
        let lon = normalize_to_pm180(apparent_solar_longitude(jd));
        assert!(lon.abs() < 0.05, "got {lon}");
    }

    #[test]
    fn pm180_wraps() {
        assert!((normalize_to_pm180(350.0) + 10.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-12);
    }
}
