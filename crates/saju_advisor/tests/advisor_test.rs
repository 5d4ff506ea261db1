//! End-to-end tests of the personalization orchestrator with mock search.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use saju_advisor::{
    AdviceRequest, Advisor, AdvisorConfig, AgeBucket, SeasonalQuery, SeasonalSearch, SearchError,
    TimingScope, TopicSource, static_topics,
};
use saju_base::{
    BirthInput, Branch, FortuneDirection, Gender, Locale, Pillar, Stem, StarRule, compute_pillars,
};
use saju_time::CivilDate;

struct FixedSearch {
    calls: AtomicUsize,
}

impl FixedSearch {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SeasonalSearch for FixedSearch {
    async fn topics(&self, query: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            format!("{} outlook", query.year),
            "autumn travel".to_string(),
            "harvest holiday".to_string(),
            "ignored past top three".to_string(),
        ])
    }
}

struct SlowSearch;

#[async_trait]
impl SeasonalSearch for SlowSearch {
    async fn topics(&self, _: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(vec!["too late".to_string()])
    }
}

struct NoCredentials;

#[async_trait]
impl SeasonalSearch for NoCredentials {
    async fn topics(&self, _: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
        Err(SearchError::MissingCredentials("SAJU_SEARCH_API_KEY".to_string()))
    }
}

fn today() -> CivilDate {
    CivilDate::new(2024, 10, 5).unwrap()
}

fn request(input: BirthInput, gender: Gender) -> AdviceRequest {
    let chart = compute_pillars(&input).unwrap();
    AdviceRequest::new(chart, gender, Locale::En, today())
}

fn config_with_timeout(ms: u64) -> AdvisorConfig {
    let mut config = AdvisorConfig::default();
    config.search.timeout_ms = ms;
    config
}

#[tokio::test]
async fn idempotent_with_frozen_today_and_mock_search() {
    let search = Arc::new(FixedSearch::new());
    let advisor = Advisor::new(AdvisorConfig::default(), search.clone());
    let req = request(
        BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0),
        Gender::Female,
    );
    let a = advisor.advise(&req).await.unwrap();
    let b = advisor.advise(&req).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(search.calls.load(Ordering::SeqCst), 2);
    assert_eq!(a.seasonal_source, TopicSource::Search);
    assert_eq!(&a.recommended_topics[..3], ["2024 outlook", "autumn travel", "harvest holiday"]);
    assert!(!a.recommends("ignored past top three"));
}

#[tokio::test]
async fn slow_search_times_out_to_static_table() {
    let advisor = Advisor::new(config_with_timeout(50), Arc::new(SlowSearch));
    let req = request(BirthInput::solar(1985, 6, 1, 9, 0), Gender::Male);
    let bundle = advisor.advise(&req).await.unwrap();
    assert_eq!(bundle.seasonal_source, TopicSource::Fallback);
    let expected = static_topics(10, Locale::En);
    assert_eq!(&bundle.recommended_topics[..3], &expected[..3]);
}

#[tokio::test]
async fn missing_credentials_fall_back() {
    let advisor = Advisor::new(AdvisorConfig::default(), Arc::new(NoCredentials));
    let req = request(BirthInput::solar(1985, 6, 1, 9, 0), Gender::Male);
    let bundle = advisor.advise(&req).await.unwrap();
    assert_eq!(bundle.seasonal_source, TopicSource::Fallback);
    assert!(bundle.recommends("autumn travel"));
}

#[tokio::test]
async fn age_32_yang_year_male_runs_forward() {
    // 1992 is Im-Sin, a yang year
    let req = request(BirthInput::solar(1992, 6, 10, 12, 0), Gender::Male);
    let advisor = Advisor::new(AdvisorConfig::default(), Arc::new(FixedSearch::new()));
    let bundle = advisor.advise(&req).await.unwrap();
    assert_eq!(bundle.age, 32);
    assert_eq!(bundle.age_bucket, AgeBucket::EarlyMidlife);
    assert_eq!(bundle.direction, FortuneDirection::Forward);
    assert!(bundle.avoids("marriage timing"));
    assert!(bundle.avoids("childbirth plans"));
    for avoided in &bundle.avoided_topics {
        assert!(!bundle.recommends(avoided));
    }
}

#[tokio::test]
async fn age_45_with_three_career_stars_emphasizes_career() {
    // Gi-Mi, Im-Sin, Mu-O, Mu-O: noble at Mi, golden carriage at Sin,
    // yang blade at O, general star O and traveling horse Sin off the day branch
    let req = request(BirthInput::solar(1979, 8, 19, 12, 0), Gender::Female);
    let p = &req.chart.pillars;
    let pillar = |s, b| Pillar::new(s, b).unwrap();
    assert_eq!(p.year, pillar(Stem::Gi, Branch::Mi));
    assert_eq!(p.month, pillar(Stem::Im, Branch::Sin));
    assert_eq!(p.day, pillar(Stem::Mu, Branch::O));
    assert_eq!(p.hour, pillar(Stem::Mu, Branch::O));
    for rule in [
        StarRule::HeavenlyNoble,
        StarRule::GoldenCarriage,
        StarRule::YangBlade,
        StarRule::GeneralStar,
        StarRule::TravelingHorse,
    ] {
        assert!(req.analysis.has_star(rule), "{rule:?}");
    }
    assert!(req.analysis.career_star_count() >= 3);

    let advisor = Advisor::new(AdvisorConfig::default(), Arc::new(FixedSearch::new()));
    let bundle = advisor.advise(&req).await.unwrap();
    assert_eq!(bundle.age, 45);
    assert_eq!(bundle.age_bucket, AgeBucket::Midlife);
    // Gi is a yin year stem
    assert_eq!(bundle.direction, FortuneDirection::Forward);
    assert!(bundle.flags.emphasize_career);
    assert!(!bundle.avoids("career fortune"));
    // first entry after the three seasonal topics
    assert_eq!(bundle.recommended_topics[3], "career fortune");
}

#[tokio::test]
async fn configured_endpoint_without_credentials_falls_back() {
    let mut config = AdvisorConfig::default();
    config.search.endpoint = Some("http://127.0.0.1:9/topics".to_string());
    config.search.api_key_env = "SAJU_ADVISOR_TEST_UNSET_KEY".to_string();
    let advisor = Advisor::from_config(config).unwrap();
    let req = request(BirthInput::solar(1985, 6, 1, 9, 0), Gender::Male);
    let bundle = advisor.advise(&req).await.unwrap();
    assert_eq!(bundle.seasonal_source, TopicSource::Fallback);
    let expected = static_topics(10, Locale::En);
    assert_eq!(&bundle.recommended_topics[..3], &expected[..3]);
}

#[tokio::test]
async fn bundle_shape() {
    let advisor = Advisor::new(AdvisorConfig::default(), Arc::new(FixedSearch::new()));
    let req = request(
        BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0),
        Gender::Male,
    );
    let bundle = advisor.advise(&req).await.unwrap();
    assert_eq!(bundle.timing.len(), 2);
    assert_eq!(bundle.timing[0].scope, TimingScope::Year);
    assert_eq!(bundle.timing[1].scope, TimingScope::Month);
    // 2024 is Gap-Jin
    assert_eq!(bundle.timing[0].reading, "Gap-Jin (Yang Wood Dragon)");
    assert_eq!(bundle.year_pillar, bundle.timing[0].pillar);
    let inf = &bundle.inferences;
    assert!(inf.life_experience.len() <= 3);
    assert!(inf.past_events.len() <= 3);
    assert!(inf.future_direction.len() <= 3);
    // male, Gi-Sa yin year: backward, first decade from age 3
    assert_eq!(bundle.direction, FortuneDirection::Backward);
    assert_eq!(bundle.major_fortune.as_ref().map(|m| m.index), Some(3));

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["age"], 34);
    assert_eq!(json["age_bucket"], "early_midlife");
}
