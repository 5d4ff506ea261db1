//! Julian Day Number arithmetic on the proleptic Gregorian calendar.
//!
//! Integer JDN conversions follow Fliegel & Van Flandern (1968) and the
//! Richards inverse. A JDN names the civil day whose noon is that Julian Date,
//! so local midnight of day `n` corresponds to JD `n - 0.5`.

/// JD of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a civil month. Returns 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number of a Gregorian calendar date.
pub fn jdn_from_date(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (14 - m) / 12;
    let y2 = y + 4800 - a;
    let m2 = m + 12 * a - 3;
    d + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 32045
}

/// Gregorian calendar date `(year, month, day)` of a Julian Day Number.
pub fn date_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = ((h / 153 + 2) % 12) + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u32, day as u32)
}

/// 1-based ordinal day within the year (Jan 1 = 1).
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    (jdn_from_date(year, month, day) - jdn_from_date(year, 1, 1)) as u32 + 1
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(jdn_from_date(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn epoch_1900() {
        assert_eq!(jdn_from_date(1900, 1, 1), 2_415_021);
    }

    #[test]
    fn round_trip_across_leap_day() {
        for jdn in 2_451_590..2_451_610 {
            let (y, m, d) = date_from_jdn(jdn);
            assert_eq!(jdn_from_date(y, m, d), jdn);
        }
        assert_eq!(date_from_jdn(jdn_from_date(2000, 2, 29)), (2000, 2, 29));
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2100));
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(1990, 1, 15), 15);
        assert_eq!(day_of_year(2024, 3, 1), 61);
        assert_eq!(day_of_year(2023, 12, 31), 365);
    }
}
