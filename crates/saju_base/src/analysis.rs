//! One-call chart analysis.

use crate::chart::FourPillars;
use crate::element_score::{ElementAnalysis, analyze_elements, element_scores};
use crate::relation::{NatalRelation, natal_relations};
use crate::star::{Star, career_star_count, detect_stars};
use crate::ten_god::{TenGodMap, TenGodSummary};

/// Element balance, Ten-Gods, stars and natal relations of a chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartAnalysis {
    pub elements: ElementAnalysis,
    pub ten_gods: TenGodMap,
    pub ten_god_summary: TenGodSummary,
    pub stars: Vec<Star>,
    pub relations: Vec<NatalRelation>,
}

impl ChartAnalysis {
    pub fn career_star_count(&self) -> usize {
        career_star_count(&self.stars)
    }

    pub fn has_star(&self, rule: crate::star::StarRule) -> bool {
        self.stars.iter().any(|s| s.rule == rule)
    }
}

/// Analyze a chart.
pub fn analyze(pillars: &FourPillars) -> ChartAnalysis {
    let ten_gods = TenGodMap::from_pillars(pillars);
    ChartAnalysis {
        elements: analyze_elements(element_scores(pillars)),
        ten_god_summary: TenGodSummary::from_map(&ten_gods),
        ten_gods,
        stars: detect_stars(pillars),
        relations: natal_relations(pillars),
    }
}
