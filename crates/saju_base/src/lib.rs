//! Four-Pillars chart engine.
//!
//! This crate provides:
//! - Stems, branches, elements and validated sexagenary pillars
//! - The Pillar Engine (`compute_pillars`) with true-solar-time correction
//! - Element balance, Ten-God, relation and star analysis
//! - The fortune timeline (major, minor, yearly, monthly, daily, hourly)

pub mod analysis;
pub mod branch;
pub mod chart;
pub mod element;
pub mod element_score;
pub mod error;
pub mod fortune;
pub mod locale;
pub mod pillar;
pub mod relation;
pub mod sexagenary;
pub mod star;
pub mod stem;
pub mod ten_god;

pub use analysis::{ChartAnalysis, analyze};
pub use branch::{ALL_BRANCHES, Branch};
pub use chart::{
    ALL_POSITIONS, BirthChart, BirthInput, CalendarKind, FourPillars, KST_OFFSET_MINUTES,
    LateRatHour, PillarPosition, SEOUL_LONGITUDE_DEG, compute_pillars, pillars_at_civil,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use element_score::{Balance, ElementAnalysis, ElementScores, analyze_elements, element_scores};
pub use error::{FortuneError, PillarError};
pub use fortune::{FortuneDirection, FortuneGrade, FortuneProfile, Gender, Interaction};
pub use locale::Locale;
pub use pillar::Pillar;
pub use relation::{NatalRelation, RelationKind};
pub use star::{Star, StarRule, StarTag, Theme};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{TenGod, TenGodMap, TenGodSummary, ten_god};
