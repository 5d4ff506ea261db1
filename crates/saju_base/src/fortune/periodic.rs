//! Cycle pillars for calendar periods (year, month, day, hour).
//!
//! These are chart-independent; [`FortuneProfile`](super::FortuneProfile)
//! pairs them with an interaction record.

use saju_time::{CivilDate, CivilDateTime, check_supported_year};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::FortuneError;
use crate::pillar::Pillar;
use crate::sexagenary::{day_pillar, hour_pillar, year_and_month_at, year_pillar};

/// Day of the civil month whose month pillar stands for the whole month.
pub const MONTH_REFERENCE_DAY: u32 = 15;

/// Local hour used for the monthly reference instant.
const MONTH_REFERENCE_HOUR: u32 = 12;

/// Ipchun-year pillar for a calendar year.
pub fn yearly_pillar(year: i32) -> Result<Pillar, FortuneError> {
    check_supported_year(year)?;
    Ok(year_pillar(year))
}

/// Month pillar in force at local noon on the 15th of a civil month.
pub fn monthly_pillar(year: i32, month: u32, utc_offset_minutes: i32) -> Result<Pillar, FortuneError> {
    check_supported_year(year)?;
    let date = CivilDate::new(year, month, MONTH_REFERENCE_DAY)?;
    let noon = CivilDateTime::new(date, MONTH_REFERENCE_HOUR, 0)?;
    let (_, pillar, _) = year_and_month_at(noon.to_jd_ut(utc_offset_minutes), year, month);
    Ok(pillar)
}

/// Day pillar of a civil date.
pub fn daily_pillar(date: CivilDate) -> Result<Pillar, FortuneError> {
    check_supported_year(date.year)?;
    Ok(day_pillar(date.jdn()))
}

/// The twelve two-hour pillars of a civil date, Ja first.
pub fn hourly_pillars(date: CivilDate) -> Result<[(Branch, Pillar); 12], FortuneError> {
    let day = daily_pillar(date)?;
    Ok(ALL_BRANCHES.map(|b| (b, hour_pillar(day.stem(), b))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::Stem;

    #[test]
    fn yearly_matches_cycle() {
        assert_eq!(
            yearly_pillar(2024).unwrap(),
            Pillar::new(Stem::Gap, Branch::Jin).unwrap()
        );
        assert_eq!(
            yearly_pillar(2101),
            Err(FortuneError::DateOutOfRange { year: 2101 })
        );
        assert_eq!(
            yearly_pillar(1899),
            Err(FortuneError::DateOutOfRange { year: 1899 })
        );
    }

    #[test]
    fn monthly_uses_the_15th() {
        // 2024-03-15 is after Gyeongchip: Jeong-Myo month of Gap-Jin year
        assert_eq!(
            monthly_pillar(2024, 3, 540).unwrap(),
            Pillar::new(Stem::Jeong, Branch::Myo).unwrap()
        );
        // 2024-01-15 is before Ipchun: Eul-Chuk month of Gye-Myo year
        assert_eq!(
            monthly_pillar(2024, 1, 540).unwrap(),
            Pillar::new(Stem::Eul, Branch::Chuk).unwrap()
        );
        assert!(matches!(
            monthly_pillar(2024, 13, 540),
            Err(FortuneError::InvalidInput { field: "month", .. })
        ));
    }

    #[test]
    fn hourly_covers_all_branches() {
        let d = CivilDate::new(1990, 1, 15).unwrap();
        let hours = hourly_pillars(d).unwrap();
        assert_eq!(hours[0].1, Pillar::new(Stem::Byeong, Branch::Ja).unwrap());
        assert_eq!(hours[6].1, Pillar::new(Stem::Im, Branch::O).unwrap());
        for (b, p) in hours {
            assert_eq!(p.branch(), b);
        }
    }
}
