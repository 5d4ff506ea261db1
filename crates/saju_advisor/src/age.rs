//! Life-stage analysis.

use saju_base::Locale;
use serde::Serialize;

use crate::topic::Topic;

/// Coarse life stage used to pick topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    Youth,
    YoungAdult,
    EarlyMidlife,
    Midlife,
    Mature,
    Senior,
}

impl AgeBucket {
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=19 => Self::Youth,
            20..=29 => Self::YoungAdult,
            30..=39 => Self::EarlyMidlife,
            40..=49 => Self::Midlife,
            50..=64 => Self::Mature,
            _ => Self::Senior,
        }
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Youth => locale.pick("청소년", "youth"),
            Self::YoungAdult => locale.pick("청년", "young adult"),
            Self::EarlyMidlife => locale.pick("30대", "early midlife"),
            Self::Midlife => locale.pick("중년", "midlife"),
            Self::Mature => locale.pick("장년", "mature"),
            Self::Senior => locale.pick("노년", "senior"),
        }
    }

    /// Search keyword for the bucket.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Youth => "youth",
            Self::YoungAdult => "young_adult",
            Self::EarlyMidlife => "early_midlife",
            Self::Midlife => "midlife",
            Self::Mature => "mature",
            Self::Senior => "senior",
        }
    }

    /// Typical concerns, most pressing first.
    pub const fn concerns(self) -> &'static [Topic] {
        match self {
            Self::Youth => &[Topic::StudyFortune, Topic::Friendship, Topic::Aptitude],
            Self::YoungAdult => &[
                Topic::Employment,
                Topic::RelationshipFortune,
                Topic::SelfDevelopment,
            ],
            Self::EarlyMidlife => &[
                Topic::CareerFortune,
                Topic::WealthFortune,
                Topic::FamilyHarmony,
            ],
            Self::Midlife => &[Topic::CareerFortune, Topic::WealthFortune, Topic::HealthCare],
            Self::Mature => &[Topic::HealthCare, Topic::WealthFortune, Topic::FamilyHarmony],
            Self::Senior => &[Topic::HealthCare, Topic::FamilyHarmony, Topic::PeaceOfMind],
        }
    }

    /// Topics that read as intrusive at this stage regardless of exact age.
    pub const fn sensitivities(self) -> &'static [Topic] {
        match self {
            Self::Youth => &[Topic::MarriageTiming, Topic::Investment],
            Self::Senior => &[Topic::Childbirth],
            _ => &[],
        }
    }
}

/// Ages at which marriage questions are treated as pressure.
pub const MARRIAGE_PRESSURE_AGES: std::ops::RangeInclusive<u32> = 27..=39;
/// Ages at which childbirth questions are treated as pressure.
pub const CHILDBIRTH_PRESSURE_AGES: std::ops::RangeInclusive<u32> = 30..=44;
/// Ages at which retirement questions are treated as pressure.
pub const RETIREMENT_PRESSURE_AGES: std::ops::RangeInclusive<u32> = 55..=64;

/// Number of bucket concerns carried into the recommendation list.
pub const TOP_CONCERNS: usize = 2;

/// Life-stage result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeContext {
    pub age: u32,
    pub bucket: AgeBucket,
    pub concerns: Vec<Topic>,
    pub sensitivities: Vec<Topic>,
}

impl AgeContext {
    pub fn top_concerns(&self) -> &[Topic] {
        &self.concerns[..self.concerns.len().min(TOP_CONCERNS)]
    }
}

/// Age in the simple `today.year - birth_year` sense.
pub fn age_in_year(birth_year: i32, current_year: i32) -> Option<u32> {
    u32::try_from(current_year - birth_year).ok()
}

/// Bucket, concerns and sensitivities for an age.
pub fn analyze_age(age: u32) -> AgeContext {
    let bucket = AgeBucket::from_age(age);
    let mut sensitivities = bucket.sensitivities().to_vec();
    let ranged = [
        (&MARRIAGE_PRESSURE_AGES, Topic::MarriageTiming),
        (&CHILDBIRTH_PRESSURE_AGES, Topic::Childbirth),
        (&RETIREMENT_PRESSURE_AGES, Topic::RetirementTiming),
    ];
    for (range, topic) in ranged {
        if range.contains(&age) && !sensitivities.contains(&topic) {
            sensitivities.push(topic);
        }
    }
    AgeContext {
        age,
        bucket,
        concerns: bucket.concerns().to_vec(),
        sensitivities,
    }
}
