//! Personalization bundle and the merge policy.

use saju_base::fortune::MajorFortune;
use saju_base::{FortuneDirection, Locale, Pillar};
use saju_time::CivilDate;
use serde::Serialize;

use crate::age::{AgeBucket, AgeContext};
use crate::chart_flags::{ChartContext, Inferences, PersonalizationFlags};
use crate::search::TopicSource;
use crate::temporal::{TemporalContext, TimingAdvice};
use crate::topic::{Topic, extend_unique};

/// Seasonal topics carried into the recommendation list.
pub const TOP_SEASONAL: usize = 3;

/// Per-request personalization output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalizationBundle {
    pub locale: Locale,
    pub today: CivilDate,
    pub age: u32,
    pub age_bucket: AgeBucket,
    pub direction: FortuneDirection,
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub major_fortune: Option<MajorFortune>,
    pub recommended_topics: Vec<String>,
    pub avoided_topics: Vec<String>,
    pub flags: PersonalizationFlags,
    pub inferences: Inferences,
    pub timing: Vec<TimingAdvice>,
    pub seasonal_source: TopicSource,
}

impl PersonalizationBundle {
    pub fn recommends(&self, topic: &str) -> bool {
        self.recommended_topics.iter().any(|t| t == topic)
    }

    pub fn avoids(&self, topic: &str) -> bool {
        self.avoided_topics.iter().any(|t| t == topic)
    }
}

fn labels(topics: &[Topic], locale: Locale) -> impl Iterator<Item = String> + '_ {
    topics.iter().map(move |t| t.label(locale).to_string())
}

/// Recommended and avoided topic labels.
///
/// Recommended is top seasonal, then top age concerns, then flag topics.
/// Avoided is age sensitivities, then flag exclusions. Both keep first
/// occurrence order and anything avoided is dropped from recommended.
pub fn merge_topics(
    seasonal: &[String],
    age: &AgeContext,
    flags: &PersonalizationFlags,
    locale: Locale,
) -> (Vec<String>, Vec<String>) {
    let mut avoided = Vec::new();
    extend_unique(&mut avoided, labels(&age.sensitivities, locale));
    extend_unique(&mut avoided, labels(&flags.excluded_topics(), locale));

    let mut recommended = Vec::new();
    extend_unique(&mut recommended, seasonal.iter().take(TOP_SEASONAL).cloned());
    extend_unique(&mut recommended, labels(age.top_concerns(), locale));
    extend_unique(&mut recommended, labels(&flags.recommended_topics(), locale));
    recommended.retain(|t| !avoided.contains(t));

    (recommended, avoided)
}

/// Fan-in of the three sub-analyses.
pub fn merge(
    locale: Locale,
    direction: FortuneDirection,
    temporal: TemporalContext,
    age: AgeContext,
    chart: ChartContext,
) -> PersonalizationBundle {
    let (recommended_topics, avoided_topics) =
        merge_topics(&temporal.seasonal.topics, &age, &chart.flags, locale);
    PersonalizationBundle {
        locale,
        today: temporal.today,
        age: age.age,
        age_bucket: age.bucket,
        direction,
        year_pillar: temporal.year_pillar,
        month_pillar: temporal.month_pillar,
        major_fortune: temporal.major_fortune,
        recommended_topics,
        avoided_topics,
        flags: chart.flags,
        inferences: chart.inferences,
        timing: temporal.timing,
        seasonal_source: temporal.seasonal.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::analyze_age;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn recommended_order_and_caps() {
        let seasonal = strings(&["s1", "s2", "s3", "s4", "s5"]);
        let age = analyze_age(45);
        let flags = PersonalizationFlags {
            emphasize_career: true,
            emphasize_study: true,
            ..Default::default()
        };
        let (rec, avoid) = merge_topics(&seasonal, &age, &flags, Locale::En);
        assert_eq!(
            rec,
            ["s1", "s2", "s3", "career fortune", "wealth fortune", "study fortune"]
        );
        assert!(avoid.is_empty());
    }

    #[test]
    fn avoid_wins_over_recommend() {
        // a seasonal topic that collides with an age sensitivity
        let seasonal = strings(&["marriage timing", "spring outings"]);
        let age = analyze_age(32);
        let flags = PersonalizationFlags::default();
        let (rec, avoid) = merge_topics(&seasonal, &age, &flags, Locale::En);
        assert_eq!(avoid, ["marriage timing", "childbirth plans"]);
        assert!(!rec.iter().any(|t| t == "marriage timing"));
        assert_eq!(rec[0], "spring outings");
    }

    #[test]
    fn duplicates_collapse() {
        let seasonal = strings(&["career fortune", "career fortune"]);
        let age = analyze_age(35);
        let flags = PersonalizationFlags {
            emphasize_career: true,
            avoid_marriage_advice: true,
            ..Default::default()
        };
        let (rec, avoid) = merge_topics(&seasonal, &age, &flags, Locale::En);
        assert_eq!(rec, ["career fortune", "wealth fortune"]);
        assert_eq!(avoid, ["marriage timing", "childbirth plans"]);
    }
}
