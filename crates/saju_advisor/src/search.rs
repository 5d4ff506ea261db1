//! Seasonal-topic search collaborator.
//!
//! The live implementation queries an HTTP endpoint with a bearer key read
//! from the environment. Any failure, timeout or empty answer falls back to
//! a static month-by-locale table, so the advisor never fails on search.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use saju_base::{Gender, Locale};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::age::AgeBucket;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::topic::extend_unique;

/// What the search is asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalQuery {
    pub age_bucket: AgeBucket,
    pub gender: Gender,
    pub year: i32,
    pub month: u32,
    pub locale: Locale,
    pub max_topics: usize,
}

impl SeasonalQuery {
    /// Free-text query sent to the endpoint.
    pub fn keywords(&self) -> String {
        let gender = match self.gender {
            Gender::Male => "male",
            Gender::Female => "female",
        };
        format!(
            "{} {} {}-{:02} seasonal topics",
            self.age_bucket.tag(),
            gender,
            self.year,
            self.month
        )
    }
}

/// Source of seasonal topic strings.
#[async_trait]
pub trait SeasonalSearch: Send + Sync {
    async fn topics(&self, query: &SeasonalQuery) -> Result<Vec<String>, SearchError>;
}

/// Accepted response bodies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Topics { topics: Vec<String> },
    Items { items: Vec<SearchItem> },
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: String,
}

/// Parse `{"topics": [..]}` or `{"items": [{"title": ..}, ..]}`.
pub fn parse_topics(body: &str) -> Result<Vec<String>, SearchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(match response {
        SearchResponse::Topics { topics } => topics,
        SearchResponse::Items { items } => items.into_iter().map(|i| i.title).collect(),
    })
}

/// HTTP-backed search.
#[derive(Debug, Clone)]
pub struct HttpSeasonalSearch {
    client: Client,
    endpoint: Option<String>,
    api_key_env: String,
}

impl HttpSeasonalSearch {
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    fn api_key(&self) -> Result<String, SearchError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SearchError::MissingCredentials(self.api_key_env.clone())),
        }
    }
}

#[async_trait]
impl SeasonalSearch for HttpSeasonalSearch {
    async fn topics(&self, query: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
        let endpoint = self.endpoint.as_deref().ok_or(SearchError::Unavailable)?;
        let key = self.api_key()?;
        let body = self
            .client
            .get(endpoint)
            .bearer_auth(key)
            .query(&[
                ("q", query.keywords()),
                ("locale", query.locale.tag().to_string()),
                ("limit", query.max_topics.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_topics(&body)
    }
}

/// Offline search answering from the static table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSeasonalTable;

#[async_trait]
impl SeasonalSearch for StaticSeasonalTable {
    async fn topics(&self, query: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
        Ok(static_topics(query.month, query.locale))
    }
}

const SEASONAL_KO: [[&str; 4]; 12] = [
    ["새해 계획", "연초 재정 점검", "겨울 건강", "신년 운세"],
    ["설 명절 가족 모임", "새 학기 준비", "봄맞이 정리", "입춘 기운"],
    ["새 학기 적응", "이직 시즌", "봄철 알레르기", "새로운 만남"],
    ["봄나들이", "인간관계 확장", "업무 성과 점검", "춘곤증 관리"],
    ["가정의 달", "가족 관계", "야외 활동", "감사 표현"],
    ["상반기 결산", "여름 휴가 계획", "더위 대비 건강", "재테크 점검"],
    ["여름 휴가", "휴식과 재충전", "장마철 건강", "여행운"],
    ["하반기 준비", "폭염 건강 관리", "자기계발", "여행운"],
    ["추석 명절", "가족 모임", "가을 이직 시즌", "결실 점검"],
    ["가을 여행", "재물 결산", "학업 성취", "환절기 건강"],
    ["연말 준비", "수능과 시험", "인맥 정리", "김장철 가족 모임"],
    ["한 해 마무리", "연말 모임", "내년 계획", "겨울 건강"],
];

const SEASONAL_EN: [[&str; 4]; 12] = [
    ["new year plans", "early-year budgeting", "winter health", "new year outlook"],
    ["lunar new year family gatherings", "new semester preparation", "spring cleaning", "fresh starts"],
    ["settling into new routines", "job change season", "spring allergies", "new encounters"],
    ["spring outings", "widening your circle", "work performance review", "spring fatigue"],
    ["family month", "family relationships", "outdoor activities", "expressing gratitude"],
    ["first-half review", "summer vacation plans", "heat preparedness", "financial check-up"],
    ["summer vacation", "rest and recharge", "monsoon season health", "travel fortune"],
    ["second-half preparation", "heatwave health", "self-development", "travel fortune"],
    ["harvest holiday", "family gatherings", "autumn job season", "reviewing results"],
    ["autumn travel", "financial wrap-up", "academic achievement", "seasonal-change health"],
    ["year-end preparation", "exams and tests", "reviewing relationships", "winter family gatherings"],
    ["wrapping up the year", "year-end gatherings", "next year's plans", "winter health"],
];

/// Fixed topics for a month (1-12). Out-of-range months clamp.
pub fn static_topics(month: u32, locale: Locale) -> Vec<String> {
    let idx = (month.clamp(1, 12) - 1) as usize;
    let row = match locale {
        Locale::Ko => &SEASONAL_KO[idx],
        Locale::En => &SEASONAL_EN[idx],
    };
    row.iter().map(|s| (*s).to_string()).collect()
}

/// Where seasonal topics came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSource {
    Search,
    Fallback,
}

impl TopicSource {
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Search => locale.pick("검색", "search"),
            Self::Fallback => locale.pick("기본 목록", "built-in table"),
        }
    }
}

/// Seasonal topics after timeout and fallback handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalTopics {
    pub topics: Vec<String>,
    pub source: TopicSource,
}

/// One attempt bounded by `timeout`, then the static table.
pub async fn seasonal_topics(
    search: &dyn SeasonalSearch,
    query: &SeasonalQuery,
    timeout: Duration,
) -> SeasonalTopics {
    let outcome = match tokio::time::timeout(timeout, search.topics(query)).await {
        Ok(result) => result,
        Err(_) => Err(SearchError::Timeout(timeout)),
    };
    match outcome {
        Ok(found) => {
            let mut topics = Vec::new();
            extend_unique(&mut topics, found);
            topics.truncate(query.max_topics);
            if !topics.is_empty() {
                debug!(count = topics.len(), "seasonal topics from search");
                return SeasonalTopics {
                    topics,
                    source: TopicSource::Search,
                };
            }
            warn!(month = query.month, "seasonal search returned no topics, using static table");
        }
        Err(e) => {
            warn!(error = %e, month = query.month, "seasonal search failed, using static table");
        }
    }
    let mut topics = static_topics(query.month, query.locale);
    topics.truncate(query.max_topics);
    SeasonalTopics {
        topics,
        source: TopicSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: u32) -> SeasonalQuery {
        SeasonalQuery {
            age_bucket: AgeBucket::Midlife,
            gender: Gender::Female,
            year: 2024,
            month,
            locale: Locale::En,
            max_topics: 5,
        }
    }

    struct Failing;

    #[async_trait]
    impl SeasonalSearch for Failing {
        async fn topics(&self, _: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
            Err(SearchError::Unavailable)
        }
    }

    struct Noisy;

    #[async_trait]
    impl SeasonalSearch for Noisy {
        async fn topics(&self, _: &SeasonalQuery) -> Result<Vec<String>, SearchError> {
            Ok(["a", "b", "a", " ", "c", "d", "e", "f"].map(String::from).to_vec())
        }
    }

    #[test]
    fn parses_both_shapes() {
        assert_eq!(parse_topics(r#"{"topics":["x","y"]}"#).unwrap(), ["x", "y"]);
        assert_eq!(
            parse_topics(r#"{"items":[{"title":"x","url":"u"},{"title":"y"}]}"#).unwrap(),
            ["x", "y"]
        );
        assert!(matches!(parse_topics(r#"{"results":[]}"#), Err(SearchError::Decode(_))));
        assert!(matches!(parse_topics("not json"), Err(SearchError::Decode(_))));
    }

    #[test]
    fn keywords_mention_bucket_and_month() {
        assert_eq!(query(3).keywords(), "midlife female 2024-03 seasonal topics");
    }

    #[test]
    fn static_table_covers_every_month() {
        for month in 1..=12 {
            assert_eq!(static_topics(month, Locale::Ko).len(), 4);
            assert_eq!(static_topics(month, Locale::En).len(), 4);
        }
        assert_eq!(static_topics(0, Locale::En), static_topics(1, Locale::En));
    }

    #[test]
    fn source_names_are_localized() {
        assert_eq!(TopicSource::Search.name(Locale::En), "search");
        assert_eq!(TopicSource::Fallback.name(Locale::Ko), "기본 목록");
    }

    #[tokio::test]
    async fn endpoint_without_key_reports_missing_credentials() {
        let config = SearchConfig {
            endpoint: Some("http://127.0.0.1:9/topics".to_string()),
            api_key_env: "SAJU_SEARCH_TEST_UNSET_KEY".to_string(),
            ..SearchConfig::default()
        };
        let search = HttpSeasonalSearch::from_config(&config).unwrap();
        let err = search.topics(&query(10)).await.unwrap_err();
        assert!(
            matches!(&err, SearchError::MissingCredentials(var) if var == "SAJU_SEARCH_TEST_UNSET_KEY"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn failure_falls_back() {
        let got = seasonal_topics(&Failing, &query(7), Duration::from_millis(100)).await;
        assert_eq!(got.source, TopicSource::Fallback);
        assert_eq!(got.topics, static_topics(7, Locale::En));
    }

    #[tokio::test]
    async fn search_results_are_deduped_and_capped() {
        let got = seasonal_topics(&Noisy, &query(7), Duration::from_millis(100)).await;
        assert_eq!(got.source, TopicSource::Search);
        assert_eq!(got.topics, ["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn unconfigured_http_search_is_unavailable() {
        let search = HttpSeasonalSearch::from_config(&SearchConfig::default()).unwrap();
        let err = search.topics(&query(1)).await.unwrap_err();
        assert!(matches!(err, SearchError::Unavailable));
    }
}
