//! The personalization orchestrator.

use std::sync::Arc;

use saju_base::fortune::FortuneProfile;
use saju_base::{BirthChart, ChartAnalysis, Gender, Locale, analyze};
use saju_time::CivilDate;
use tracing::{debug, info, warn};

use crate::age::{AgeBucket, AgeContext, age_in_year, analyze_age};
use crate::bundle::{PersonalizationBundle, merge};
use crate::chart_flags::{ChartContext, analyze_chart_context};
use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::search::{HttpSeasonalSearch, SeasonalQuery, SeasonalSearch, StaticSeasonalTable};
use crate::temporal::analyze_temporal;

/// Inputs of one advice request. `today` is always explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    pub chart: BirthChart,
    pub analysis: ChartAnalysis,
    pub gender: Gender,
    pub birth_year: i32,
    pub locale: Locale,
    pub today: CivilDate,
}

impl AdviceRequest {
    /// Build a request, analyzing the chart.
    pub fn new(chart: BirthChart, gender: Gender, locale: Locale, today: CivilDate) -> Self {
        Self {
            analysis: analyze(&chart.pillars),
            birth_year: chart.solar_date.year,
            chart,
            gender,
            locale,
            today,
        }
    }
}

/// Runs the temporal, age and chart sub-analyses and merges them.
#[derive(Clone)]
pub struct Advisor {
    config: AdvisorConfig,
    search: Arc<dyn SeasonalSearch>,
}

impl std::fmt::Debug for Advisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Advisor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Advisor {
    pub fn new(config: AdvisorConfig, search: Arc<dyn SeasonalSearch>) -> Self {
        Self { config, search }
    }

    /// Advisor backed by the HTTP search described in `config`.
    pub fn from_config(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        config.validate()?;
        let search = match HttpSeasonalSearch::from_config(&config.search) {
            Ok(s) => Arc::new(s) as Arc<dyn SeasonalSearch>,
            Err(e) => {
                warn!(error = %e, "http search unavailable, using static table");
                Arc::new(StaticSeasonalTable)
            }
        };
        Ok(Self::new(config, search))
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Build the personalization bundle for a request.
    ///
    /// The three sub-analyses are polled concurrently on the calling task
    /// with `tokio::join!`; they are not spawned, so only the search await
    /// overlaps with other work. Search failures never surface here; only
    /// chart or date errors do. A `today` outside the supported years is
    /// reported as [`FortuneError::DateOutOfRange`](saju_base::FortuneError).
    pub async fn advise(
        &self,
        req: &AdviceRequest,
    ) -> Result<PersonalizationBundle, AdvisorError> {
        let age = age_in_year(req.birth_year, req.today.year).ok_or(AdvisorError::BeforeBirth {
            today_year: req.today.year,
            birth_year: req.birth_year,
        })?;
        let profile = FortuneProfile::new(&req.chart, req.gender)?;
        info!(age, today = ?req.today, locale = req.locale.tag(), "advising");

        let bucket = AgeBucket::from_age(age);
        let query = SeasonalQuery {
            age_bucket: bucket,
            gender: req.gender,
            year: req.today.year,
            month: req.today.month,
            locale: req.locale,
            max_topics: self.config.search.max_topics,
        };

        let temporal = analyze_temporal(
            &profile,
            self.search.as_ref(),
            &query,
            req.today,
            age,
            self.config.search.timeout(),
        );
        let age_task = async {
            let ctx: AgeContext = analyze_age(age);
            debug!(bucket = ?ctx.bucket, "age analysis done");
            ctx
        };
        let chart_task = async {
            let ctx: ChartContext = analyze_chart_context(&req.analysis, bucket, req.locale);
            debug!(flags = ?ctx.flags, "chart analysis done");
            ctx
        };
        let (temporal, age_ctx, chart_ctx) = tokio::join!(temporal, age_task, chart_task);

        Ok(merge(req.locale, profile.direction(), temporal?, age_ctx, chart_ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{BirthInput, FortuneError, compute_pillars};

    #[tokio::test]
    async fn birth_after_today_is_rejected() {
        let chart = compute_pillars(&BirthInput::solar(2030, 5, 1, 12, 0)).unwrap();
        let req = AdviceRequest::new(
            chart,
            Gender::Male,
            Locale::En,
            CivilDate::new(2024, 1, 1).unwrap(),
        );
        let advisor = Advisor::new(AdvisorConfig::default(), Arc::new(StaticSeasonalTable));
        let err = advisor.advise(&req).await.unwrap_err();
        assert!(matches!(err, AdvisorError::BeforeBirth { birth_year: 2030, .. }));
    }

    #[tokio::test]
    async fn today_outside_supported_years_is_rejected() {
        let chart = compute_pillars(&BirthInput::solar(2000, 5, 1, 12, 0)).unwrap();
        let req = AdviceRequest::new(
            chart,
            Gender::Female,
            Locale::Ko,
            CivilDate::new(2101, 3, 1).unwrap(),
        );
        let advisor = Advisor::new(AdvisorConfig::default(), Arc::new(StaticSeasonalTable));
        let err = advisor.advise(&req).await.unwrap_err();
        assert!(
            matches!(err, AdvisorError::Fortune(FortuneError::DateOutOfRange { year: 2101 })),
            "{err:?}"
        );
    }

    #[test]
    fn from_default_config_builds() {
        let advisor = Advisor::from_config(AdvisorConfig::default()).unwrap();
        assert!(advisor.config().search.endpoint.is_none());
    }
}
