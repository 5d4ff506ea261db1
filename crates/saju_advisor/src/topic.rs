//! Fixed advisory topics.
//!
//! Seasonal topics arrive as free text from the search collaborator; every
//! other topic the advisor recommends or avoids is one of these.

use saju_base::Locale;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CareerFortune,
    WealthFortune,
    RelationshipFortune,
    StudyFortune,
    HealthCare,
    FamilyHarmony,
    Friendship,
    Aptitude,
    Employment,
    SelfDevelopment,
    PeaceOfMind,
    Investment,
    MarriageTiming,
    Childbirth,
    RetirementTiming,
}

impl Topic {
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::CareerFortune => locale.pick("직업운", "career fortune"),
            Self::WealthFortune => locale.pick("재물운", "wealth fortune"),
            Self::RelationshipFortune => locale.pick("애정운", "relationship fortune"),
            Self::StudyFortune => locale.pick("학업운", "study fortune"),
            Self::HealthCare => locale.pick("건강 관리", "health care"),
            Self::FamilyHarmony => locale.pick("가정 화목", "family harmony"),
            Self::Friendship => locale.pick("교우 관계", "friendships"),
            Self::Aptitude => locale.pick("적성 탐색", "finding aptitude"),
            Self::Employment => locale.pick("취업", "employment"),
            Self::SelfDevelopment => locale.pick("자기계발", "self-development"),
            Self::PeaceOfMind => locale.pick("마음의 평안", "peace of mind"),
            Self::Investment => locale.pick("투자", "investment"),
            Self::MarriageTiming => locale.pick("결혼 시기", "marriage timing"),
            Self::Childbirth => locale.pick("출산 계획", "childbirth plans"),
            Self::RetirementTiming => locale.pick("은퇴 시기", "retirement timing"),
        }
    }
}

/// Append `items` to `out`, skipping anything already present.
pub(crate) fn extend_unique<I>(out: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = String>,
{
    for item in items {
        let item = item.trim();
        if item.is_empty() || out.iter().any(|t| t == item) {
            continue;
        }
        out.push(item.to_string());
    }
}
