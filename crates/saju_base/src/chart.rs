//! Pillar Engine: birth input → corrected solar time → four pillars.
//!
//! Steps:
//! 1. Validate fields and resolve a lunar input to its solar date.
//! 2. Shift the civil reading to true solar time (longitude + equation of time).
//! 3. Year and month pillars from the apparent solar longitude at that moment.
//! 4. Day pillar from the continuous 60-day cycle, hour pillar from the
//!    corrected clock hour.

use saju_time::{
    CivilDate, CivilDateTime, LunarDate, SolarTimeCorrection, check_supported_year,
    true_solar_time,
};

use crate::branch::Branch;
use crate::error::PillarError;
use crate::locale::Locale;
use crate::pillar::Pillar;
use crate::sexagenary::{day_pillar, hour_pillar, year_and_month_at};
use crate::stem::Stem;

/// Longitude of Seoul City Hall, degrees east.
pub const SEOUL_LONGITUDE_DEG: f64 = 126.978;

/// Korea Standard Time, minutes east of UTC.
pub const KST_OFFSET_MINUTES: i32 = 540;

/// Largest accepted UTC offset magnitude (UTC+14).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Calendar of the birth date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar { is_leap_month: bool },
}

/// Which day a 23:00-23:59 birth belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LateRatHour {
    /// The calendar day is kept for the day pillar.
    #[default]
    SameDay,
    /// The day pillar advances at 23:00.
    NextDay,
}

/// Birth data for a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub calendar: CalendarKind,
    /// Degrees east (negative west).
    pub longitude_deg: f64,
    pub utc_offset_minutes: i32,
    pub late_rat_hour: LateRatHour,
}

impl BirthInput {
    /// Solar-calendar input at Seoul in KST.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Solar,
            longitude_deg: SEOUL_LONGITUDE_DEG,
            utc_offset_minutes: KST_OFFSET_MINUTES,
            late_rat_hour: LateRatHour::SameDay,
        }
    }

    /// Lunar-calendar input at Seoul in KST.
    pub fn lunar(
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
        hour: u32,
        minute: u32,
    ) -> Self {
        Self {
            calendar: CalendarKind::Lunar { is_leap_month },
            ..Self::solar(year, month, day, hour, minute)
        }
    }

    pub fn with_longitude(mut self, longitude_deg: f64) -> Self {
        self.longitude_deg = longitude_deg;
        self
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn with_late_rat_hour(mut self, mode: LateRatHour) -> Self {
        self.late_rat_hour = mode;
        self
    }

    fn validate(&self) -> Result<(), PillarError> {
        check_supported_year(self.year)?;
        if !(1..=12).contains(&self.month) {
            return Err(PillarError::InvalidInput {
                field: "month",
                value: self.month as i64,
            });
        }
        if self.hour > 23 {
            return Err(PillarError::InvalidInput {
                field: "hour",
                value: self.hour as i64,
            });
        }
        if self.minute > 59 {
            return Err(PillarError::InvalidInput {
                field: "minute",
                value: self.minute as i64,
            });
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(PillarError::InvalidInput {
                field: "longitude",
                value: self.longitude_deg as i64,
            });
        }
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(PillarError::InvalidInput {
                field: "utc_offset",
                value: self.utc_offset_minutes as i64,
            });
        }
        Ok(())
    }

    /// Solar (Gregorian) birth date, converting lunar input.
    pub fn solar_date(&self) -> Result<CivilDate, PillarError> {
        self.validate()?;
        let date = match self.calendar {
            CalendarKind::Solar => CivilDate::new(self.year, self.month, self.day)?,
            CalendarKind::Lunar { is_leap_month } => {
                LunarDate::new(self.year, self.month, self.day, is_leap_month)?.to_solar()?
            }
        };
        check_supported_year(date.year)?;
        Ok(date)
    }
}

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("년주", "Year"),
            Self::Month => locale.pick("월주", "Month"),
            Self::Day => locale.pick("일주", "Day"),
            Self::Hour => locale.pick("시주", "Hour"),
        }
    }
}

/// The four pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// The day stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars paired with their positions, in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.into_iter().map(|p| (p, self.get(p)))
    }

    pub fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch(),
            self.month.branch(),
            self.day.branch(),
            self.hour.branch(),
        ]
    }

    pub fn stems(&self) -> [Stem; 4] {
        [
            self.year.stem(),
            self.month.stem(),
            self.day.stem(),
            self.hour.stem(),
        ]
    }

    /// Space-separated readings in chart order.
    pub fn reading(&self, locale: Locale) -> String {
        self.iter()
            .map(|(_, p)| p.reading(locale))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A computed chart with the intermediate timing values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BirthChart {
    pub input: BirthInput,
    pub pillars: FourPillars,
    /// Solar birth date before correction.
    pub solar_date: CivilDate,
    /// Wall-clock reading after true-solar-time correction.
    pub corrected: CivilDateTime,
    pub correction: SolarTimeCorrection,
    /// Julian Date (UT) of the corrected reading.
    pub birth_jd_ut: f64,
    /// Sexagenary month index (0 = In month).
    pub month_index: u8,
}

/// Compute the four pillars for a birth input.
pub fn compute_pillars(input: &BirthInput) -> Result<BirthChart, PillarError> {
    let solar_date = input.solar_date()?;
    let civil = CivilDateTime::new(solar_date, input.hour, input.minute)?;
    let (corrected, correction) =
        true_solar_time(&civil, input.longitude_deg, input.utc_offset_minutes);
    let birth_jd_ut = corrected.to_jd_ut(input.utc_offset_minutes);

    let (year, month, month_index) =
        year_and_month_at(birth_jd_ut, corrected.date.year, corrected.date.month);

    let mut day_jdn = corrected.date.jdn();
    if corrected.hour == 23 && input.late_rat_hour == LateRatHour::NextDay {
        day_jdn += 1;
    }
    let day = day_pillar(day_jdn);
    let hour = hour_pillar(day.stem(), Branch::from_hour(corrected.hour));

    Ok(BirthChart {
        input: *input,
        pillars: FourPillars::new(year, month, day, hour),
        solar_date,
        corrected,
        correction,
        birth_jd_ut,
        month_index,
    })
}

/// Pillars for a civil reading without solar-time correction.
///
/// Used for "now"-style lookups where the civil clock is authoritative.
pub fn pillars_at_civil(
    civil: &CivilDateTime,
    utc_offset_minutes: i32,
) -> Result<FourPillars, PillarError> {
    check_supported_year(civil.date.year)?;
    let jd = civil.to_jd_ut(utc_offset_minutes);
    let (year, month, _) = year_and_month_at(jd, civil.date.year, civil.date.month);
    let day = day_pillar(civil.date.jdn());
    let hour = hour_pillar(day.stem(), Branch::from_hour(civil.hour));
    Ok(FourPillars::new(year, month, day, hour))
}
