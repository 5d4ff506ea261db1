//! Current-moment analysis: pillars in force today, seasonal topics and
//! yearly/monthly timing advice.

use std::time::Duration;

use saju_base::fortune::MajorFortune;
use saju_base::{FortuneGrade, FortuneProfile, Locale, Pillar, PillarError, pillars_at_civil};
use saju_time::{CivilDate, CivilDateTime};
use serde::Serialize;
use tracing::debug;

use crate::error::AdvisorError;
use crate::search::{SeasonalQuery, SeasonalSearch, SeasonalTopics, seasonal_topics};

/// Period a piece of timing advice covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingScope {
    Year,
    Month,
}

impl TimingScope {
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("올해", "Year"),
            Self::Month => locale.pick("이번 달", "Month"),
        }
    }
}

/// Advice for one period, graded by its interaction with the natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingAdvice {
    pub scope: TimingScope,
    pub pillar: Pillar,
    pub reading: String,
    pub grade: FortuneGrade,
    pub score: i32,
    pub advice: String,
}

fn advice_text(grade: FortuneGrade, scope: TimingScope, locale: Locale) -> &'static str {
    use FortuneGrade::*;
    match (scope, grade) {
        (TimingScope::Year, Excellent) => locale.pick(
            "올해는 과감하게 밀고 나가기 좋은 해입니다.",
            "A strong year to push ahead boldly.",
        ),
        (TimingScope::Year, Good) => locale.pick(
            "꾸준히 나아가면 성과가 쌓이는 해입니다.",
            "Steady effort this year adds up.",
        ),
        (TimingScope::Year, Normal) => locale.pick(
            "큰 변화보다 흐름을 유지하는 해입니다.",
            "Hold your course rather than force change this year.",
        ),
        (TimingScope::Year, Caution) => locale.pick(
            "큰 결정은 신중하게 내리십시오.",
            "Weigh big commitments carefully this year.",
        ),
        (TimingScope::Year, Challenging) => locale.pick(
            "지키는 데 집중하고 무리하지 마십시오.",
            "Protect what you have and avoid overreach this year.",
        ),
        (TimingScope::Month, Excellent) => locale.pick(
            "이번 달은 계획을 실행에 옮기기 좋습니다.",
            "A good month to put plans into action.",
        ),
        (TimingScope::Month, Good) => locale.pick(
            "이번 달은 순조로운 흐름입니다.",
            "Things flow smoothly this month.",
        ),
        (TimingScope::Month, Normal) => locale.pick(
            "이번 달은 평소대로 지내면 무난합니다.",
            "An ordinary month; keep your routine.",
        ),
        (TimingScope::Month, Caution) => locale.pick(
            "이번 달은 말과 계약을 조심하십시오.",
            "Be careful with words and contracts this month.",
        ),
        (TimingScope::Month, Challenging) => locale.pick(
            "이번 달은 휴식과 건강을 우선하십시오.",
            "Put rest and health first this month.",
        ),
    }
}

impl TimingAdvice {
    fn new(
        scope: TimingScope,
        pillar: Pillar,
        grade: FortuneGrade,
        score: i32,
        locale: Locale,
    ) -> Self {
        Self {
            scope,
            pillar,
            reading: pillar.reading(locale),
            grade,
            score,
            advice: advice_text(grade, scope, locale).to_string(),
        }
    }
}

/// Everything the advisor derives from `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalContext {
    pub today: CivilDate,
    /// Sexagenary year in force at local noon today.
    pub year_pillar: Pillar,
    /// Sexagenary month in force at local noon today.
    pub month_pillar: Pillar,
    pub major_fortune: Option<MajorFortune>,
    pub timing: Vec<TimingAdvice>,
    pub seasonal: SeasonalTopics,
}

/// Current pillars, timing advice and seasonal topics.
///
/// The synchronous chart work runs before the single search attempt.
pub async fn analyze_temporal(
    profile: &FortuneProfile,
    search: &dyn SeasonalSearch,
    query: &SeasonalQuery,
    today: CivilDate,
    age: u32,
    timeout: Duration,
) -> Result<TemporalContext, AdvisorError> {
    let locale = query.locale;
    // Fortune range errors take precedence over the chart's own bounds.
    let yearly = profile.yearly(today.year)?;
    let monthly = profile.monthly(today.year, today.month)?;
    let noon = CivilDateTime::new(today, 12, 0).map_err(PillarError::from)?;
    let now = pillars_at_civil(&noon, profile.utc_offset_minutes())?;

    let timing = vec![
        TimingAdvice::new(
            TimingScope::Year,
            yearly.pillar,
            yearly.interaction.grade,
            yearly.interaction.score,
            locale,
        ),
        TimingAdvice::new(
            TimingScope::Month,
            monthly.pillar,
            monthly.interaction.grade,
            monthly.interaction.score,
            locale,
        ),
    ];

    let seasonal = seasonal_topics(search, query, timeout).await;
    debug!(
        year = %now.year,
        month = %now.month,
        source = ?seasonal.source,
        "temporal analysis done"
    );
    Ok(TemporalContext {
        today,
        year_pillar: now.year,
        month_pillar: now.month,
        major_fortune: profile.major_fortune_at_age(age),
        timing,
        seasonal,
    })
}
