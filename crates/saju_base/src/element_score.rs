//! Five-element balance of a chart.
//!
//! Each pillar contributes its stem element, its branch element and the
//! branch's hidden stems by dominance. Raw weights are normalized to integer
//! percentages with largest-remainder rounding so that they always total 100.

use crate::chart::FourPillars;
use crate::element::{ALL_ELEMENTS, Element};
use crate::locale::Locale;

/// Weight of a visible stem.
pub const STEM_WEIGHT: u32 = 10;
/// Weight of a branch's own element.
pub const BRANCH_WEIGHT: u32 = 10;
/// Weights of hidden stems, main qi first.
pub const HIDDEN_STEM_WEIGHTS: [u32; 3] = [6, 4, 2];

/// Percentage at or above which an element is dominant (1.5 × the even share).
pub const DOMINANT_THRESHOLD: u8 = 30;
/// Percentage at or below which an element is lacking (0.5 × the even share).
pub const LACKING_THRESHOLD: u8 = 10;
/// Largest max − min spread still considered balanced.
pub const BALANCED_SPREAD: u8 = 25;

/// Integer percentage per element, summing to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementScores {
    values: [u8; 5],
}

impl ElementScores {
    /// Normalize raw weights (indexed by element ordinal).
    ///
    /// All-zero input yields an even 20 per element.
    pub fn from_raw(raw: [u32; 5]) -> Self {
        let total: u32 = raw.iter().sum();
        if total == 0 {
            return Self { values: [20; 5] };
        }
        let mut values = [0u8; 5];
        let mut remainders = [(0u32, 0usize); 5];
        let mut assigned = 0u32;
        for (i, &w) in raw.iter().enumerate() {
            let scaled = w * 100;
            values[i] = (scaled / total) as u8;
            assigned += scaled / total;
            remainders[i] = (scaled % total, i);
        }
        // stable by canonical order on equal remainders
        remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        for &(_, i) in remainders.iter().take((100 - assigned) as usize) {
            values[i] += 1;
        }
        Self { values }
    }

    pub const fn get(&self, element: Element) -> u8 {
        self.values[element.index()]
    }

    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| v as u32).sum()
    }

    /// `(element, percent)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(|e| (e, self.get(e)))
    }

    pub fn max(&self) -> u8 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> u8 {
        self.values.iter().copied().min().unwrap_or(0)
    }
}

/// Raw element weights of a chart, indexed by element ordinal.
pub fn raw_element_weights(pillars: &FourPillars) -> [u32; 5] {
    let mut raw = [0u32; 5];
    for (_, pillar) in pillars.iter() {
        raw[pillar.stem_element().index()] += STEM_WEIGHT;
        raw[pillar.branch_element().index()] += BRANCH_WEIGHT;
        for (stem, w) in pillar.hidden_stems().iter().zip(HIDDEN_STEM_WEIGHTS) {
            raw[stem.element().index()] += w;
        }
    }
    raw
}

/// Element percentages of a chart.
pub fn element_scores(pillars: &FourPillars) -> ElementScores {
    ElementScores::from_raw(raw_element_weights(pillars))
}

/// Overall spread of the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Balance {
    Balanced,
    Unbalanced,
}

impl Balance {
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Balanced => locale.pick("균형", "balanced"),
            Self::Unbalanced => locale.pick("불균형", "unbalanced"),
        }
    }
}

/// Dominant/lacking elements, balance and the useful element (yongshin).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAnalysis {
    pub scores: ElementScores,
    pub dominant: Vec<Element>,
    pub lacking: Vec<Element>,
    pub balance: Balance,
    /// Lowest-scoring element; ties resolved in canonical order.
    pub yongshin: Element,
}

/// Classify element scores.
pub fn analyze_elements(scores: ElementScores) -> ElementAnalysis {
    let dominant = scores
        .iter()
        .filter(|&(_, v)| v >= DOMINANT_THRESHOLD)
        .map(|(e, _)| e)
        .collect();
    let lacking = scores
        .iter()
        .filter(|&(_, v)| v <= LACKING_THRESHOLD)
        .map(|(e, _)| e)
        .collect();
    let balance = if scores.max() - scores.min() <= BALANCED_SPREAD {
        Balance::Balanced
    } else {
        Balance::Unbalanced
    };
    let min = scores.min();
    let yongshin = scores
        .iter()
        .find(|&(_, v)| v == min)
        .map_or(Element::Wood, |(e, _)| e);
    ElementAnalysis {
        scores,
        dominant,
        lacking,
        balance,
        yongshin,
    }
}
