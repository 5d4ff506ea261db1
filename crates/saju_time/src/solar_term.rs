//! The 24 solar terms (jeolgi) and their instants.
//!
//! A solar term begins when the Sun's apparent longitude reaches a multiple
//! of 15 degrees. The 12 "jie" terms at 315 + 30k degrees open the sexagenary
//! months; Ipchun (315 deg) also opens the sexagenary year.
//!
//! Instants are found by bisection on the signed angular distance between the
//! Sun and the target longitude inside a bracket of a few days around a
//! mean-motion estimate. The function is monotonic within any bracket shorter
//! than half a year, so the crossing is unique.

use crate::error::TimeError;
use crate::julian::jdn_from_date;
use crate::sun::{
    SUN_MEAN_MOTION_DEG_PER_DAY, apparent_solar_longitude, normalize_360, normalize_to_pm180,
};

/// Longitude of Ipchun, the first jie of the sexagenary year.
pub const IPCHUN_LONGITUDE_DEG: f64 = 315.0;

/// Span of one sexagenary month in solar longitude.
pub const MONTH_SPAN_DEG: f64 = 30.0;

/// Half-width of the search bracket around the estimate, in days.
const BRACKET_DAYS: f64 = 6.0;

/// Convergence threshold in days (~0.1 s).
const CONVERGENCE_DAYS: f64 = 1e-6;

const MAX_ITERATIONS: usize = 80;

/// The 24 solar terms in civil-year order, starting from Sohan (early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

/// All 24 terms in civil-year order (index 0 = Sohan).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

const KOREAN_NAMES: [&str; 24] = [
    "소한", "대한", "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지",
    "소서", "대서", "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지",
];

const ENGLISH_NAMES: [&str; 24] = [
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
];

impl SolarTerm {
    /// 0-based index in civil-year order (Sohan = 0).
    pub fn index(self) -> u8 {
        ALL_SOLAR_TERMS
            .iter()
            .position(|&t| t == self)
            .unwrap_or_default() as u8
    }

    /// Term from a 0-based index, wrapping modulo 24.
    pub fn from_index(i: usize) -> Self {
        ALL_SOLAR_TERMS[i % 24]
    }

    /// Apparent solar longitude at which the term begins.
    pub fn longitude_deg(self) -> f64 {
        normalize_360(285.0 + 15.0 * self.index() as f64)
    }

    /// Term whose start longitude is `deg` (rounded to the nearest 15 deg).
    pub fn from_longitude(deg: f64) -> Self {
        let steps = (normalize_360(deg - 285.0) / 15.0).round() as usize;
        Self::from_index(steps)
    }

    /// True for the 12 month-opening terms.
    pub fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Korean name.
    pub fn korean_name(self) -> &'static str {
        KOREAN_NAMES[self.index() as usize]
    }

    /// English name.
    pub fn english_name(self) -> &'static str {
        ENGLISH_NAMES[self.index() as usize]
    }
}

/// A solar term and the instant it begins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Julian Date (UT) of the crossing.
    pub jd_ut: f64,
}

/// Sexagenary month index (0 = In month opened by Ipchun .. 11 = Chuk month)
/// for an apparent solar longitude.
pub fn month_index_from_longitude(solar_lon_deg: f64) -> u8 {
    let rel = normalize_360(solar_lon_deg - IPCHUN_LONGITUDE_DEG);
    ((rel / MONTH_SPAN_DEG).floor() as u8).min(11)
}

/// Bisect the crossing of `target_deg` between `lo` and `hi`.
fn find_crossing(target_deg: f64, mut lo: f64, mut hi: f64) -> Result<f64, TimeError> {
    let f = |jd: f64| normalize_to_pm180(apparent_solar_longitude(jd) - target_deg);
    let f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if !(f_lo < 0.0 && f_hi > 0.0) {
        return Err(TimeError::NoConvergence("solar term not bracketed"));
    }
    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < CONVERGENCE_DAYS {
            break;
        }
    }
    Ok(0.5 * (lo + hi))
}

/// Instant (JD UT) at which `term` begins in civil year `year`.
pub fn solar_term_instant(year: i32, term: SolarTerm) -> Result<SolarTermEvent, TimeError> {
    // Sohan falls on Jan 5-6; spacing averages 15.22 days.
    let estimate =
        jdn_from_date(year, 1, 6) as f64 - 0.5 + term.index() as f64 * (365.2422 / 24.0);
    let jd_ut = find_crossing(
        term.longitude_deg(),
        estimate - BRACKET_DAYS,
        estimate + BRACKET_DAYS,
    )?;
    Ok(SolarTermEvent { term, jd_ut })
}

/// All 24 term instants of a civil year, in order.
pub fn solar_terms_for_year(year: i32) -> Result<Vec<SolarTermEvent>, TimeError> {
    ALL_SOLAR_TERMS
        .iter()
        .map(|&t| solar_term_instant(year, t))
        .collect()
}

/// First month-opening term strictly after `jd_ut`.
pub fn next_jie_after(jd_ut: f64) -> Result<SolarTermEvent, TimeError> {
    let lon = apparent_solar_longitude(jd_ut);
    let rel = normalize_360(lon - IPCHUN_LONGITUDE_DEG);
    let k = (rel / MONTH_SPAN_DEG).floor();
    let target = normalize_360(IPCHUN_LONGITUDE_DEG + MONTH_SPAN_DEG * (k + 1.0));
    let ahead_deg = MONTH_SPAN_DEG * (k + 1.0) - rel;
    let estimate = jd_ut + ahead_deg / SUN_MEAN_MOTION_DEG_PER_DAY;
    let lo = (estimate - BRACKET_DAYS).max(jd_ut);
    let jd = find_crossing(target, lo, estimate + BRACKET_DAYS)?;
    Ok(SolarTermEvent {
        term: SolarTerm::from_longitude(target),
        jd_ut: jd,
    })
}

/// Latest month-opening term at or before `jd_ut`.
pub fn prev_jie_at_or_before(jd_ut: f64) -> Result<SolarTermEvent, TimeError> {
    let lon = apparent_solar_longitude(jd_ut);
    let rel = normalize_360(lon - IPCHUN_LONGITUDE_DEG);
    let k = (rel / MONTH_SPAN_DEG).floor();
    let target = normalize_360(IPCHUN_LONGITUDE_DEG + MONTH_SPAN_DEG * k);
    let behind_deg = rel - MONTH_SPAN_DEG * k;
    let estimate = jd_ut - behind_deg / SUN_MEAN_MOTION_DEG_PER_DAY;
    let hi = (estimate + BRACKET_DAYS).min(jd_ut);
    let jd = find_crossing(target, estimate - BRACKET_DAYS, hi)?;
    Ok(SolarTermEvent {
        term: SolarTerm::from_longitude(target),
        jd_ut: jd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_longitudes() {
        assert!((SolarTerm::Sohan.longitude_deg() - 285.0).abs() < 1e-12);
        assert!((SolarTerm::Ipchun.longitude_deg() - 315.0).abs() < 1e-12);
        assert!(SolarTerm::Chunbun.longitude_deg().abs() < 1e-12);
        assert!((SolarTerm::Dongji.longitude_deg() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn jie_alternate() {
        let jie: Vec<_> = ALL_SOLAR_TERMS.iter().filter(|t| t.is_jie()).collect();
        assert_eq!(jie.len(), 12);
        assert!(SolarTerm::Ipchun.is_jie());
        assert!(!SolarTerm::Usu.is_jie());
    }

    #[test]
    fn from_longitude_round_trip() {
        for t in ALL_SOLAR_TERMS {
            assert_eq!(SolarTerm::from_longitude(t.longitude_deg()), t);
        }
    }

    #[test]
    fn month_index_boundaries() {
        assert_eq!(month_index_from_longitude(315.0), 0);
        assert_eq!(month_index_from_longitude(314.99), 11);
        assert_eq!(month_index_from_longitude(345.0), 1);
        assert_eq!(month_index_from_longitude(0.0), 1);
        assert_eq!(month_index_from_longitude(285.0), 11);
        assert_eq!(month_index_from_longitude(284.9), 10);
    }

    #[test]
    fn names_nonempty() {
        for t in ALL_SOLAR_TERMS {
            assert!(!t.korean_name().is_empty());
            assert!(!t.english_name().is_empty());
        }
    }
}
