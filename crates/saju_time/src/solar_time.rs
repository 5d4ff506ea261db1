//! True (apparent) solar time correction.
//!
//! Civil clocks run on a zone's standard meridian. The local apparent solar
//! time differs by the longitude offset from that meridian (4 minutes per
//! degree) and by the equation of time. The equation of time here is the
//! three-term approximation
//!
//! ```text
//! B   = 360/365 * (day_of_year - 81)        (degrees)
//! EoT = 9.87 sin 2B - 7.53 cos B - 1.5 sin B (minutes)
//! ```
//!
//! which is good to about half a minute.

use crate::civil::CivilDateTime;

/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Standard meridian (degrees east) for a UTC offset in minutes.
pub fn standard_meridian_deg(utc_offset_minutes: i32) -> f64 {
    utc_offset_minutes as f64 / MINUTES_PER_DEGREE
}

/// Equation of time in minutes for a 1-based day of year.
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = (360.0 / 365.0 * (day_of_year as f64 - 81.0)).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Breakdown of a true-solar-time correction.
///
/// All values are signed shifts applied to the civil clock: the corrected
/// reading is `civil + total_minutes`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTimeCorrection {
    /// `(longitude - standard meridian) * 4`. Negative west of the meridian.
    pub longitude_minutes: f64,
    /// Equation of time for the civil date.
    pub equation_of_time_minutes: f64,
    /// Sum of both components.
    pub total_minutes: f64,
}

impl SolarTimeCorrection {
    /// Correction for a civil reading at `longitude_deg` (east positive).
    pub fn compute(civil: &CivilDateTime, longitude_deg: f64, utc_offset_minutes: i32) -> Self {
        let meridian = standard_meridian_deg(utc_offset_minutes);
        let longitude_minutes = (longitude_deg - meridian) * MINUTES_PER_DEGREE;
        let eot = equation_of_time_minutes(civil.date.ordinal());
        Self {
            longitude_minutes,
            equation_of_time_minutes: eot,
            total_minutes: longitude_minutes + eot,
        }
    }

    /// No-op correction.
    pub const fn none() -> Self {
        Self {
            longitude_minutes: 0.0,
            equation_of_time_minutes: 0.0,
            total_minutes: 0.0,
        }
    }

    /// Apply this correction to a civil reading.
    pub fn apply(&self, civil: &CivilDateTime) -> CivilDateTime {
        civil.shifted_minutes(self.total_minutes)
    }
}

/// Corrected wall-clock reading plus the correction used.
pub fn true_solar_time(
    civil: &CivilDateTime,
    longitude_deg: f64,
    utc_offset_minutes: i32,
) -> (CivilDateTime, SolarTimeCorrection) {
    let correction = SolarTimeCorrection::compute(civil, longitude_deg, utc_offset_minutes);
    (correction.apply(civil), correction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::CivilDate;

    #[test]
    fn kst_meridian() {
        assert!((standard_meridian_deg(540) - 135.0).abs() < 1e-12);
        assert!((standard_meridian_deg(480) - 120.0).abs() < 1e-12);
    }

    #[test]
    fn seoul_reference_longitude_component() {
        let d = CivilDate::new(1990, 1, 15).unwrap();
        let t = CivilDateTime::new(d, 13, 30).unwrap();
        let c = SolarTimeCorrection::compute(&t, 127.0, 540);
        assert!((c.longitude_minutes + 32.0).abs() < 1e-9);
        // mid-January: the sundial runs about 9 minutes slow
        assert!((c.equation_of_time_minutes + 9.35).abs() < 0.05);
        let corrected = c.apply(&t);
        assert_eq!((corrected.hour, corrected.minute), (12, 48));
    }

    #[test]
    fn equation_of_time_extremes() {
        // early November maximum near +16 min, mid-February minimum near -14 min
        assert!(equation_of_time_minutes(307) > 15.0);
        assert!(equation_of_time_minutes(45) < -13.0);
    }

    #[test]
    fn meridian_longitude_only_eot() {
        let d = CivilDate::new(2024, 6, 13).unwrap();
        let t = CivilDateTime::new(d, 12, 0).unwrap();
        let c = SolarTimeCorrection::compute(&t, 135.0, 540);
        assert!(c.longitude_minutes.abs() < 1e-12);
        assert!((c.total_minutes - c.equation_of_time_minutes).abs() < 1e-12);
    }
}
