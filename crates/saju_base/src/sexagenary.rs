//! Sexagenary pillar arithmetic for years, months, days and hours.
//!
//! Month stems follow the five-tiger rule keyed by year stem and hour stems
//! follow the five-rat rule keyed by day stem; both are stored as tables.

use saju_time::{IPCHUN_LONGITUDE_DEG, apparent_solar_longitude, month_index_from_longitude};

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Offset added to the JDN so that `(jdn + 49) mod 60` is the day's cycle index.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// Civil year whose Ipchun-year is Gap-Ja (mod 60).
const YEAR_CYCLE_EPOCH: i64 = 4;

/// Stem of the In month keyed by `year_stem.index() % 5`.
const FIVE_TIGER: [Stem; 5] = [Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im, Stem::Gap];

/// Stem of the Ja hour keyed by `day_stem.index() % 5`.
const FIVE_RAT: [Stem; 5] = [Stem::Gap, Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im];

/// Year pillar of a sexagenary (Ipchun-to-Ipchun) year.
pub const fn year_pillar(sexagenary_year: i32) -> Pillar {
    Pillar::from_cycle_index(sexagenary_year as i64 - YEAR_CYCLE_EPOCH)
}

/// Month pillar for a month index (0 = In month .. 11 = Chuk month).
pub const fn month_pillar(year_stem: Stem, month_index: u8) -> Pillar {
    let first = FIVE_TIGER[year_stem.index() % 5];
    let stem = first.offset(month_index as i64);
    let branch = Branch::In.offset(month_index as i64);
    // parity always agrees: In and the five-tiger stems are both yang
    match Pillar::new(stem, branch) {
        Some(p) => p,
        None => Pillar::from_cycle_index(0),
    }
}

/// Day pillar of a Julian Day Number.
pub const fn day_pillar(jdn: i64) -> Pillar {
    Pillar::from_cycle_index(jdn + DAY_CYCLE_OFFSET)
}

/// Hour pillar for a day stem and hour branch.
pub const fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> Pillar {
    let first = FIVE_RAT[day_stem.index() % 5];
    let stem = first.offset(hour_branch.index() as i64);
    match Pillar::new(stem, hour_branch) {
        Some(p) => p,
        None => Pillar::from_cycle_index(0),
    }
}

/// Sexagenary year containing a moment with the given civil year/month and
/// apparent solar longitude: January and February dates before Ipchun belong
/// to the previous year.
pub fn sexagenary_year(civil_year: i32, civil_month: u32, solar_lon_deg: f64) -> i32 {
    if civil_month <= 2 && (180.0..IPCHUN_LONGITUDE_DEG).contains(&solar_lon_deg) {
        civil_year - 1
    } else {
        civil_year
    }
}

/// Year pillar, month pillar and month index in force at an instant.
pub fn year_and_month_at(jd_ut: f64, civil_year: i32, civil_month: u32) -> (Pillar, Pillar, u8) {
    let lon = apparent_solar_longitude(jd_ut);
    let year = year_pillar(sexagenary_year(civil_year, civil_month, lon));
    let mi = month_index_from_longitude(lon);
    (year, month_pillar(year.stem(), mi), mi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_cycle() {
        assert_eq!(year_pillar(1984), Pillar::from_cycle_index(0));
        assert_eq!(year_pillar(1989), Pillar::new(Stem::Gi, Branch::Sa).unwrap());
        assert_eq!(year_pillar(2024), Pillar::new(Stem::Gap, Branch::Jin).unwrap());
    }

    #[test]
    fn five_tiger() {
        assert_eq!(month_pillar(Stem::Gap, 0).stem(), Stem::Byeong);
        assert_eq!(month_pillar(Stem::Eul, 0).stem(), Stem::Mu);
        assert_eq!(month_pillar(Stem::Byeong, 0).stem(), Stem::Gyeong);
        assert_eq!(month_pillar(Stem::Jeong, 0).stem(), Stem::Im);
        assert_eq!(month_pillar(Stem::Mu, 0).stem(), Stem::Gap);
        assert_eq!(
            month_pillar(Stem::Gi, 11),
            Pillar::new(Stem::Jeong, Branch::Chuk).unwrap()
        );
    }

    #[test]
    fn five_rat() {
        assert_eq!(hour_pillar(Stem::Gap, Branch::Ja).stem(), Stem::Gap);
        assert_eq!(hour_pillar(Stem::Eul, Branch::Ja).stem(), Stem::Byeong);
        assert_eq!(hour_pillar(Stem::Byeong, Branch::Ja).stem(), Stem::Mu);
        assert_eq!(hour_pillar(Stem::Jeong, Branch::Ja).stem(), Stem::Gyeong);
        assert_eq!(hour_pillar(Stem::Mu, Branch::Ja).stem(), Stem::Im);
        assert_eq!(
            hour_pillar(Stem::Gyeong, Branch::O),
            Pillar::new(Stem::Im, Branch::O).unwrap()
        );
    }

    #[test]
    fn day_cycle_anchor() {
        // 1990-01-15
        assert_eq!(day_pillar(2_447_907), Pillar::new(Stem::Gyeong, Branch::Jin).unwrap());
        // 1900-01-01 is Gap-Sul
        assert_eq!(day_pillar(2_415_021), Pillar::new(Stem::Gap, Branch::Sul).unwrap());
    }

    #[test]
    fn ipchun_year_switch() {
        assert_eq!(sexagenary_year(1990, 1, 295.0), 1989);
        assert_eq!(sexagenary_year(1990, 2, 316.0), 1990);
        assert_eq!(sexagenary_year(1990, 12, 265.0), 1990);
    }
}
