//! Lunisolar calendar conversion for lunar years 1900-2100.
//!
//! Each year is packed into one word of `LUNAR_YEAR_INFO`:
//! - bits 0-3: leap month number (0 = no leap month)
//! - bits 4-15: month lengths, bit 15 = month 1 .. bit 4 = month 12 (set = 30 days)
//! - bit 16: length of the leap month (set = 30 days)
//!
//! Lunar 1900-01-01 falls on solar 1900-01-31.
//!
//! The table follows the East Asian astronomical calendar computed at 120E;
//! a handful of years differ by one day from calendars computed at 135E.

use crate::civil::CivilDate;
use crate::error::TimeError;

/// First lunar year covered by the table.
pub const LUNAR_FIRST_YEAR: i32 = 1900;

/// Last lunar year covered by the table.
pub const LUNAR_LAST_YEAR: i32 = 2100;

/// JDN of solar 1900-01-31 (lunar 1900-01-01).
const LUNAR_EPOCH_JDN: i64 = 2_415_051;

#[rustfmt::skip]
const LUNAR_YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// True for the intercalary repeat of `month`.
    pub is_leap_month: bool,
}

fn year_info(year: i32) -> Result<u32, TimeError> {
    if !(LUNAR_FIRST_YEAR..=LUNAR_LAST_YEAR).contains(&year) {
        return Err(TimeError::OutOfRange { year });
    }
    Ok(LUNAR_YEAR_INFO[(year - LUNAR_FIRST_YEAR) as usize])
}

/// Leap month number of a lunar year (0 = none).
pub fn leap_month(year: i32) -> Result<u32, TimeError> {
    Ok(year_info(year)? & 0xf)
}

/// Length of the leap month (0 if the year has none).
pub fn leap_month_days(year: i32) -> Result<u32, TimeError> {
    let info = year_info(year)?;
    if info & 0xf == 0 {
        Ok(0)
    } else if info & 0x1_0000 != 0 {
        Ok(30)
    } else {
        Ok(29)
    }
}

/// Length of regular month `month` (1..=12).
pub fn lunar_month_days(year: i32, month: u32) -> Result<u32, TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidDate {
            field: "month",
            value: month as i64,
        });
    }
    let info = year_info(year)?;
    Ok(if info & (0x1_0000 >> month) != 0 { 30 } else { 29 })
}

/// Total days in a lunar year including any leap month.
pub fn lunar_year_days(year: i32) -> Result<u32, TimeError> {
    let mut total = 0;
    for m in 1..=12 {
        total += lunar_month_days(year, m)?;
    }
    Ok(total + leap_month_days(year)?)
}

impl LunarDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, TimeError> {
        let len = if is_leap_month {
            if leap_month(year)? != month {
                return Err(TimeError::InvalidDate {
                    field: "leap_month",
                    value: month as i64,
                });
            }
            leap_month_days(year)?
        } else {
            lunar_month_days(year, month)?
        };
        if day == 0 || day > len {
            return Err(TimeError::InvalidDate {
                field: "day",
                value: day as i64,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Convert to the solar (Gregorian) calendar.
    pub fn to_solar(&self) -> Result<CivilDate, TimeError> {
        let mut offset: i64 = 0;
        for y in LUNAR_FIRST_YEAR..self.year {
            offset += lunar_year_days(y)? as i64;
        }
        let leap = leap_month(self.year)?;
        for m in 1..self.month {
            offset += lunar_month_days(self.year, m)? as i64;
            if leap == m {
                offset += leap_month_days(self.year)? as i64;
            }
        }
        if self.is_leap_month {
            offset += lunar_month_days(self.year, self.month)? as i64;
        }
        offset += self.day as i64 - 1;
        Ok(CivilDate::from_jdn(LUNAR_EPOCH_JDN + offset))
    }

    /// Lunar date of a solar date.
    pub fn from_solar(date: &CivilDate) -> Result<Self, TimeError> {
        let mut offset = date.jdn() - LUNAR_EPOCH_JDN;
        if offset < 0 {
            return Err(TimeError::OutOfRange { year: date.year });
        }
        let mut year = LUNAR_FIRST_YEAR;
        loop {
            let days = lunar_year_days(year)? as i64;
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }
        let leap = leap_month(year)?;
        for month in 1..=12 {
            let days = lunar_month_days(year, month)? as i64;
            if offset < days {
                return Ok(Self {
                    year,
                    month,
                    day: offset as u32 + 1,
                    is_leap_month: false,
                });
            }
            offset -= days;
            if leap == month {
                let leap_days = leap_month_days(year)? as i64;
                if offset < leap_days {
                    return Ok(Self {
                        year,
                        month,
                        day: offset as u32 + 1,
                        is_leap_month: true,
                    });
                }
                offset -= leap_days;
            }
        }
        Err(TimeError::NoConvergence("lunar month walk overran year"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_maps_to_jan_31() {
        let d = LunarDate::new(1900, 1, 1, false).unwrap().to_solar().unwrap();
        assert_eq!(d, CivilDate::new(1900, 1, 31).unwrap());
    }

    #[test]
    fn known_leap_months() {
        assert_eq!(leap_month(1900).unwrap(), 8);
        assert_eq!(leap_month(2020).unwrap(), 4);
        assert_eq!(leap_month(2023).unwrap(), 2);
        assert_eq!(leap_month(2033).unwrap(), 11);
        assert_eq!(leap_month(2024).unwrap(), 0);
    }

    #[test]
    fn year_lengths_plausible() {
        for y in LUNAR_FIRST_YEAR..=LUNAR_LAST_YEAR {
            let days = lunar_year_days(y).unwrap();
            assert!((353..=385).contains(&days), "{y}: {days}");
        }
    }

    #[test]
    fn rejects_missing_leap_month() {
        assert_eq!(
            LunarDate::new(2024, 3, 1, true),
            Err(TimeError::InvalidDate {
                field: "leap_month",
                value: 3
            })
        );
    }

    #[test]
    fn rejects_day_31() {
        assert!(matches!(
            LunarDate::new(2024, 1, 31, false),
            Err(TimeError::InvalidDate { field: "day", .. })
        ));
    }

    #[test]
    fn out_of_table() {
        assert_eq!(
            LunarDate::new(1899, 1, 1, false),
            Err(TimeError::OutOfRange { year: 1899 })
        );
    }
}
