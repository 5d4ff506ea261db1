//! Personalization orchestrator.
//!
//! This crate provides:
//! - `AdvisorConfig` loading from TOML
//! - The seasonal-topic search collaborator with timeout and static fallback
//! - Life-stage, chart-flag and timing sub-analyses
//! - `Advisor::advise`, which runs them concurrently and merges the result
//!   into a `PersonalizationBundle`

pub mod advisor;
pub mod age;
pub mod bundle;
pub mod chart_flags;
pub mod config;
pub mod error;
pub mod search;
pub mod temporal;
pub mod topic;

pub use advisor::{AdviceRequest, Advisor};
pub use age::{AgeBucket, AgeContext, analyze_age};
pub use bundle::{PersonalizationBundle, merge_topics};
pub use chart_flags::{ChartContext, Inferences, PersonalizationFlags};
pub use config::{AdvisorConfig, ChartDefaults, SearchConfig};
pub use error::{AdvisorError, ConfigError, SearchError};
pub use search::{
    HttpSeasonalSearch, SeasonalQuery, SeasonalSearch, SeasonalTopics, StaticSeasonalTable,
    TopicSource, static_topics,
};
pub use temporal::{TemporalContext, TimingAdvice, TimingScope};
pub use topic::Topic;
