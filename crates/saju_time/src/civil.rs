//! Civil (wall-clock) dates and date-times.
//!
//! `CivilDateTime` is a local wall-clock reading with whole-second precision.
//! Arithmetic goes through an integer count of local seconds anchored at the
//! Julian Day Number, so shifting by a correction never accumulates floating
//! error at hour boundaries.

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, date_from_jdn, day_of_year, days_in_month, jdn_from_date};

/// First year accepted by chart and fortune calculations.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Last year accepted by chart and fortune calculations.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

/// Check a year against the supported calendar span.
pub fn check_supported_year(year: i32) -> Result<(), TimeError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::OutOfRange { year })
    }
}

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate {
                field: "month",
                value: month as i64,
            });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate {
                field: "day",
                value: day as i64,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = date_from_jdn(jdn);
        Self { year, month, day }
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        jdn_from_date(self.year, self.month, self.day)
    }

    /// 1-based ordinal day of the year.
    pub fn ordinal(&self) -> u32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Date `days` later (negative for earlier).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let year = parse_field(parts.next(), "year")?;
        let month = parse_field(parts.next(), "month")?;
        let day = parse_field(parts.next(), "day")?;
        Self::new(year as i32, month as u32, day as u32)
    }
}

fn parse_field(part: Option<&str>, field: &'static str) -> Result<i64, TimeError> {
    part.and_then(|p| p.parse::<i64>().ok())
        .ok_or(TimeError::InvalidDate { field, value: -1 })
}

/// Local wall-clock date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Validated constructor (seconds = 0).
    pub fn new(date: CivilDate, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidDate {
                field: "hour",
                value: hour as i64,
            });
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate {
                field: "minute",
                value: minute as i64,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second: 0,
        })
    }

    /// Local seconds counted from local midnight starting JDN 0.
    pub fn local_seconds(&self) -> i64 {
        self.date.jdn() * SECONDS_PER_DAY
            + self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }

    /// Inverse of [`local_seconds`](Self::local_seconds).
    pub fn from_local_seconds(secs: i64) -> Self {
        let jdn = secs.div_euclid(SECONDS_PER_DAY);
        let sod = secs.rem_euclid(SECONDS_PER_DAY) as u32;
        Self {
            date: CivilDate::from_jdn(jdn),
            hour: sod / 3600,
            minute: (sod % 3600) / 60,
            second: sod % 60,
        }
    }

    /// Shift by a (possibly fractional) number of minutes, rounded to the second.
    pub fn shifted_minutes(&self, minutes: f64) -> Self {
        let delta = (minutes * 60.0).round() as i64;
        Self::from_local_seconds(self.local_seconds() + delta)
    }

    /// Julian Date (UT) of this wall-clock reading at the given UTC offset.
    pub fn to_jd_ut(&self, utc_offset_minutes: i32) -> f64 {
        let ut_secs = self.local_seconds() - utc_offset_minutes as i64 * 60;
        ut_secs as f64 / SECONDS_PER_DAY as f64 - 0.5
    }

    /// Wall-clock reading at the given UTC offset for a Julian Date (UT).
    pub fn from_jd_ut(jd_ut: f64, utc_offset_minutes: i32) -> Self {
        let ut_secs = ((jd_ut + 0.5) * SECONDS_PER_DAY as f64).round() as i64;
        Self::from_local_seconds(ut_secs + utc_offset_minutes as i64 * 60)
    }

    /// Minutes since local midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_fields() {
        assert_eq!(
            CivilDate::new(2023, 2, 29),
            Err(TimeError::InvalidDate {
                field: "day",
                value: 29
            })
        );
        assert!(matches!(
            CivilDate::new(2023, 13, 1),
            Err(TimeError::InvalidDate { field: "month", .. })
        ));
        let d = CivilDate::new(2023, 1, 1).unwrap();
        assert!(matches!(
            CivilDateTime::new(d, 24, 0),
            Err(TimeError::InvalidDate { field: "hour", .. })
        ));
        assert!(matches!(
            CivilDateTime::new(d, 0, 60),
            Err(TimeError::InvalidDate { field: "minute", .. })
        ));
    }

    #[test]
    fn shift_crosses_midnight_backwards() {
        let d = CivilDate::new(2000, 3, 1).unwrap();
        let t = CivilDateTime::new(d, 0, 20).unwrap();
        let s = t.shifted_minutes(-41.35);
        assert_eq!(s.date, CivilDate::new(2000, 2, 29).unwrap());
        assert_eq!((s.hour, s.minute, s.second), (23, 38, 39));
    }

    #[test]
    fn jd_of_j2000_noon() {
        let d = CivilDate::new(2000, 1, 1).unwrap();
        let t = CivilDateTime::new(d, 12, 0).unwrap();
        assert!((t.to_jd_ut(0) - 2_451_545.0).abs() < 1e-9);
        // 21:00 KST is 12:00 UT
        let k = CivilDateTime::new(d, 21, 0).unwrap();
        assert!((k.to_jd_ut(540) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "1990-01-15".parse().unwrap();
        assert_eq!(d, CivilDate::new(1990, 1, 15).unwrap());
        assert_eq!(d.to_string(), "1990-01-15");
        assert!("1990-1".parse::<CivilDate>().is_err());
    }

    #[test]
    fn supported_span() {
        assert!(check_supported_year(1900).is_ok());
        assert!(check_supported_year(2100).is_ok());
        assert_eq!(
            check_supported_year(2101),
            Err(TimeError::OutOfRange { year: 2101 })
        );
    }
}
