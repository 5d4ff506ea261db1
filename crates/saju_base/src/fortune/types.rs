//! Core types for fortune timeline calculations.

use saju_time::CivilDate;

use crate::branch::Branch;
use crate::chart::PillarPosition;
use crate::element::Polarity;
use crate::locale::Locale;
use crate::pillar::Pillar;
use crate::relation::RelationKind;

/// Number of major fortune decades generated per profile.
pub const MAJOR_FORTUNE_COUNT: usize = 10;

/// Years covered by one major fortune.
pub const MAJOR_FORTUNE_YEARS: u32 = 10;

/// Days of distance to the nearest jie that make one year of start age.
pub const DAYS_PER_START_YEAR: f64 = 3.0;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Male => locale.pick("남성", "male"),
            Self::Female => locale.pick("여성", "female"),
        }
    }
}

/// Direction in which major and minor fortunes step through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FortuneDirection {
    Forward,
    Backward,
}

impl FortuneDirection {
    /// Yang year stem with male, or yin year stem with female, runs forward.
    pub const fn from_polarity(year_stem_polarity: Polarity, gender: Gender) -> Self {
        match (year_stem_polarity, gender) {
            (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// +1 for forward, -1 for backward.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Forward => locale.pick("순행", "forward"),
            Self::Backward => locale.pick("역행", "backward"),
        }
    }
}

/// Grade of an interaction score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FortuneGrade {
    Challenging,
    Caution,
    Normal,
    Good,
    Excellent,
}

/// Lowest score graded excellent.
pub const EXCELLENT_MIN_SCORE: i32 = 6;
/// Lowest score graded good.
pub const GOOD_MIN_SCORE: i32 = 2;
/// Lowest score graded normal.
pub const NORMAL_MIN_SCORE: i32 = -1;
/// Lowest score graded caution.
pub const CAUTION_MIN_SCORE: i32 = -5;

impl FortuneGrade {
    pub const fn from_score(score: i32) -> Self {
        if score >= EXCELLENT_MIN_SCORE {
            Self::Excellent
        } else if score >= GOOD_MIN_SCORE {
            Self::Good
        } else if score >= NORMAL_MIN_SCORE {
            Self::Normal
        } else if score >= CAUTION_MIN_SCORE {
            Self::Caution
        } else {
            Self::Challenging
        }
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Excellent => locale.pick("매우 좋음", "excellent"),
            Self::Good => locale.pick("좋음", "good"),
            Self::Normal => locale.pick("보통", "normal"),
            Self::Caution => locale.pick("주의", "caution"),
            Self::Challenging => locale.pick("어려움", "challenging"),
        }
    }

    /// Good or excellent.
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::Good | Self::Excellent)
    }

    /// Caution or challenging.
    pub const fn is_adverse(self) -> bool {
        matches!(self, Self::Caution | Self::Challenging)
    }
}

/// One relation between a cycle pillar and a natal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionHit {
    pub kind: RelationKind,
    pub natal: PillarPosition,
    pub weight: i32,
}

/// Interaction of a cycle pillar with the natal chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub hits: Vec<InteractionHit>,
    /// +3 / -3 / 0 contribution of the useful element.
    pub useful_god: i32,
    pub score: i32,
    pub grade: FortuneGrade,
}

/// A decade-scale fortune.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MajorFortune {
    /// 0-based decade number.
    pub index: u8,
    pub start_age: u32,
    /// Exclusive.
    pub end_age: u32,
    pub pillar: Pillar,
    pub interaction: Interaction,
}

impl MajorFortune {
    pub fn contains_age(&self, age: u32) -> bool {
        (self.start_age..self.end_age).contains(&age)
    }
}

/// A yearly fortune before the first major fortune starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MinorFortune {
    pub age: u32,
    pub pillar: Pillar,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearlyFortune {
    pub year: i32,
    pub pillar: Pillar,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthlyFortune {
    pub year: i32,
    pub month: u32,
    pub pillar: Pillar,
    pub interaction: Interaction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyFortune {
    pub date: CivilDate,
    pub pillar: Pillar,
    pub interaction: Interaction,
}

/// One two-hour window of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourlyFortune {
    pub date: CivilDate,
    pub branch: Branch,
    /// First civil hour of the window (Ja starts at 23 of the previous evening).
    pub start_hour: u32,
    pub pillar: Pillar,
    pub interaction: Interaction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_pure() {
        use FortuneDirection::*;
        assert_eq!(FortuneDirection::from_polarity(Polarity::Yang, Gender::Male), Forward);
        assert_eq!(FortuneDirection::from_polarity(Polarity::Yin, Gender::Female), Forward);
        assert_eq!(FortuneDirection::from_polarity(Polarity::Yang, Gender::Female), Backward);
        assert_eq!(FortuneDirection::from_polarity(Polarity::Yin, Gender::Male), Backward);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(FortuneGrade::from_score(6), FortuneGrade::Excellent);
        assert_eq!(FortuneGrade::from_score(5), FortuneGrade::Good);
        assert_eq!(FortuneGrade::from_score(2), FortuneGrade::Good);
        assert_eq!(FortuneGrade::from_score(1), FortuneGrade::Normal);
        assert_eq!(FortuneGrade::from_score(-1), FortuneGrade::Normal);
        assert_eq!(FortuneGrade::from_score(-2), FortuneGrade::Caution);
        assert_eq!(FortuneGrade::from_score(-5), FortuneGrade::Caution);
        assert_eq!(FortuneGrade::from_score(-6), FortuneGrade::Challenging);
    }
}
