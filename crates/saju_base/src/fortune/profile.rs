//! Per-subject fortune timeline.
//!
//! Direction and start age are fixed once at construction; every fortune
//! is generated on demand from them and never mutated.

use saju_time::{CivilDate, next_jie_after, prev_jie_at_or_before};

use crate::chart::{BirthChart, FourPillars};
use crate::element::Element;
use crate::element_score::{analyze_elements, element_scores};
use crate::error::FortuneError;
use crate::pillar::Pillar;

use super::interaction::interact;
use super::periodic::{daily_pillar, hourly_pillars, monthly_pillar, yearly_pillar};
use super::types::{
    DAYS_PER_START_YEAR, DailyFortune, FortuneDirection, Gender, HourlyFortune, Interaction,
    MAJOR_FORTUNE_COUNT, MAJOR_FORTUNE_YEARS, MajorFortune, MinorFortune, MonthlyFortune,
    YearlyFortune,
};

/// Upper bound on a single range enumeration.
pub const MAX_RANGE_LEN: usize = 366;

/// Timeline parameters derived from a birth chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FortuneProfile {
    natal: FourPillars,
    yongshin: Element,
    gender: Gender,
    direction: FortuneDirection,
    /// Days between birth and the nearest jie in the travel direction.
    days_to_jie: f64,
    start_age: u32,
    utc_offset_minutes: i32,
}

/// Start age for a distance in days to the governing jie: `round(days / 3)`, at least 1.
pub fn start_age_from_days(days: f64) -> u32 {
    ((days / DAYS_PER_START_YEAR).round() as u32).max(1)
}

impl FortuneProfile {
    /// Fix direction and start age for a chart.
    pub fn new(chart: &BirthChart, gender: Gender) -> Result<Self, FortuneError> {
        let direction = FortuneDirection::from_polarity(chart.pillars.year.polarity(), gender);
        let days_to_jie = match direction {
            FortuneDirection::Forward => next_jie_after(chart.birth_jd_ut)?.jd_ut - chart.birth_jd_ut,
            FortuneDirection::Backward => {
                chart.birth_jd_ut - prev_jie_at_or_before(chart.birth_jd_ut)?.jd_ut
            }
        };
        let yongshin = analyze_elements(element_scores(&chart.pillars)).yongshin;
        Ok(Self {
            natal: chart.pillars,
            yongshin,
            gender,
            direction,
            days_to_jie,
            start_age: start_age_from_days(days_to_jie),
            utc_offset_minutes: chart.input.utc_offset_minutes,
        })
    }

    pub fn natal(&self) -> &FourPillars {
        &self.natal
    }

    pub fn yongshin(&self) -> Element {
        self.yongshin
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn direction(&self) -> FortuneDirection {
        self.direction
    }

    pub fn days_to_jie(&self) -> f64 {
        self.days_to_jie
    }

    /// Age at which the first major fortune begins.
    pub fn start_age(&self) -> u32 {
        self.start_age
    }

    /// Offset of the birth input, used for monthly reference instants.
    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// Interaction of any cycle pillar with this chart.
    pub fn interaction(&self, pillar: Pillar) -> Interaction {
        interact(&self.natal, self.yongshin, pillar)
    }

    /// The ten major fortunes, stepping the month pillar once per decade.
    pub fn major_fortunes(&self) -> Vec<MajorFortune> {
        (0..MAJOR_FORTUNE_COUNT)
            .map(|k| {
                let pillar = self.natal.month.step(self.direction.sign() * (k as i64 + 1));
                let start_age = self.start_age + MAJOR_FORTUNE_YEARS * k as u32;
                MajorFortune {
                    index: k as u8,
                    start_age,
                    end_age: start_age + MAJOR_FORTUNE_YEARS,
                    pillar,
                    interaction: self.interaction(pillar),
                }
            })
            .collect()
    }

    /// Major fortune active at `age`; `None` before the start age or after
    /// the last decade.
    pub fn major_fortune_at_age(&self, age: u32) -> Option<MajorFortune> {
        if age < self.start_age {
            return None;
        }
        let k = ((age - self.start_age) / MAJOR_FORTUNE_YEARS) as usize;
        self.major_fortunes().into_iter().nth(k)
    }

    /// Minor fortunes for ages 1 .. start_age, stepping the hour pillar yearly.
    pub fn minor_fortunes(&self) -> Vec<MinorFortune> {
        (1..self.start_age)
            .map(|age| {
                let pillar = self.natal.hour.step(self.direction.sign() * age as i64);
                MinorFortune {
                    age,
                    pillar,
                    interaction: self.interaction(pillar),
                }
            })
            .collect()
    }

    pub fn yearly(&self, year: i32) -> Result<YearlyFortune, FortuneError> {
        let pillar = yearly_pillar(year)?;
        Ok(YearlyFortune {
            year,
            pillar,
            interaction: self.interaction(pillar),
        })
    }

    /// Yearly fortunes for `from..=to`.
    pub fn yearly_range(&self, from: i32, to: i32) -> Result<Vec<YearlyFortune>, FortuneError> {
        check_range_len(from as i64, to as i64)?;
        (from..=to).map(|y| self.yearly(y)).collect()
    }

    pub fn monthly(&self, year: i32, month: u32) -> Result<MonthlyFortune, FortuneError> {
        let pillar = monthly_pillar(year, month, self.utc_offset_minutes)?;
        Ok(MonthlyFortune {
            year,
            month,
            pillar,
            interaction: self.interaction(pillar),
        })
    }

    /// The twelve monthly fortunes of a civil year.
    pub fn monthly_range(&self, year: i32) -> Result<Vec<MonthlyFortune>, FortuneError> {
        (1..=12).map(|m| self.monthly(year, m)).collect()
    }

    pub fn daily(&self, date: CivilDate) -> Result<DailyFortune, FortuneError> {
        let pillar = daily_pillar(date)?;
        Ok(DailyFortune {
            date,
            pillar,
            interaction: self.interaction(pillar),
        })
    }

    /// `days` consecutive daily fortunes starting at `from`.
    pub fn daily_range(&self, from: CivilDate, days: u32) -> Result<Vec<DailyFortune>, FortuneError> {
        check_range_len(0, days as i64 - 1)?;
        (0..days as i64)
            .map(|i| self.daily(from.add_days(i)))
            .collect()
    }

    /// The twelve hourly fortunes of a date, Ja first.
    pub fn hourly(&self, date: CivilDate) -> Result<Vec<HourlyFortune>, FortuneError> {
        Ok(hourly_pillars(date)?
            .into_iter()
            .map(|(branch, pillar)| HourlyFortune {
                date,
                branch,
                start_hour: branch.start_hour(),
                pillar,
                interaction: self.interaction(pillar),
            })
            .collect())
    }
}

fn check_range_len(from: i64, to: i64) -> Result<(), FortuneError> {
    let len = to - from + 1;
    if len < 1 || len as usize > MAX_RANGE_LEN {
        return Err(FortuneError::InvalidInput {
            field: "range",
            value: len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::chart::{BirthInput, compute_pillars};
    use crate::stem::Stem;

    fn reference_chart() -> BirthChart {
        compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0)).unwrap()
    }

    #[test]
    fn start_age_rounding() {
        assert_eq!(start_age_from_days(0.2), 1);
        assert_eq!(start_age_from_days(4.4), 1);
        assert_eq!(start_age_from_days(4.6), 2);
        assert_eq!(start_age_from_days(29.9), 10);
    }

    #[test]
    fn yin_year_male_runs_backward() {
        // Gi-Sa year (yin), Sohan about 9.5 days before birth
        let prof = FortuneProfile::new(&reference_chart(), Gender::Male).unwrap();
        assert_eq!(prof.direction(), FortuneDirection::Backward);
        assert!((8.5..10.5).contains(&prof.days_to_jie()), "{}", prof.days_to_jie());
        assert_eq!(prof.start_age(), 3);

        let majors = prof.major_fortunes();
        assert_eq!(majors.len(), 10);
        // Jeong-Chuk stepped back once is Byeong-Ja
        assert_eq!(majors[0].pillar, Pillar::new(Stem::Byeong, Branch::Ja).unwrap());
        assert_eq!((majors[0].start_age, majors[0].end_age), (3, 13));
        assert_eq!(majors[9].start_age, 93);

        let minors = prof.minor_fortunes();
        assert_eq!(minors.iter().map(|m| m.age).collect::<Vec<_>>(), vec![1, 2]);
        // Im-O stepped back once is Sin-Sa
        assert_eq!(minors[0].pillar, Pillar::new(Stem::Sin, Branch::Sa).unwrap());
    }

    #[test]
    fn yin_year_female_runs_forward() {
        let prof = FortuneProfile::new(&reference_chart(), Gender::Female).unwrap();
        assert_eq!(prof.direction(), FortuneDirection::Forward);
        // Ipchun is about 20 days after birth
        assert!((19.0..21.0).contains(&prof.days_to_jie()));
        assert_eq!(prof.major_fortunes()[0].pillar, Pillar::new(Stem::Mu, Branch::In).unwrap());
    }

    #[test]
    fn active_major_fortune() {
        let prof = FortuneProfile::new(&reference_chart(), Gender::Male).unwrap();
        assert!(prof.major_fortune_at_age(2).is_none());
        assert_eq!(prof.major_fortune_at_age(3).unwrap().index, 0);
        assert_eq!(prof.major_fortune_at_age(12).unwrap().index, 0);
        assert_eq!(prof.major_fortune_at_age(13).unwrap().index, 1);
        assert!(prof.major_fortune_at_age(103).is_none());
    }

    #[test]
    fn ranges_and_bounds() {
        let prof = FortuneProfile::new(&reference_chart(), Gender::Male).unwrap();
        let years = prof.yearly_range(2020, 2029).unwrap();
        assert_eq!(years.len(), 10);
        assert_eq!(years[4].pillar, Pillar::new(Stem::Gap, Branch::Jin).unwrap());
        assert_eq!(
            prof.yearly_range(2095, 2105).unwrap_err(),
            FortuneError::DateOutOfRange { year: 2101 }
        );
        assert!(matches!(
            prof.yearly_range(2030, 2020),
            Err(FortuneError::InvalidInput { field: "range", .. })
        ));
        assert_eq!(prof.monthly_range(2024).unwrap().len(), 12);
        let d = CivilDate::new(2100, 12, 30).unwrap();
        assert_eq!(
            prof.daily_range(d, 5).unwrap_err(),
            FortuneError::DateOutOfRange { year: 2101 }
        );
        let days = prof.daily_range(CivilDate::new(2024, 2, 28).unwrap(), 3).unwrap();
        assert_eq!(days[1].date, CivilDate::new(2024, 2, 29).unwrap());
        assert_eq!(days[1].pillar, days[0].pillar.next());
        assert_eq!(prof.hourly(d).unwrap().len(), 12);
    }
}
