//! The five elements (ohaeng) and yin/yang polarity.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Controlling cycle: Wood → Earth → Water → Fire → Metal → Wood.
//! Both cycles are stored as tables indexed by element ordinal.

use crate::locale::Locale;

/// The five elements in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All elements in canonical order (also the tie-break order).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// `GENERATES[e]` is the element that `e` produces.
const GENERATES: [Element; 5] = [
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
];

/// `CONTROLS[e]` is the element that `e` overcomes.
const CONTROLS: [Element; 5] = [
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element this one produces.
    pub const fn generates(self) -> Element {
        GENERATES[self.index()]
    }

    /// Element this one overcomes.
    pub const fn controls(self) -> Element {
        CONTROLS[self.index()]
    }

    /// Element that produces this one.
    pub fn generated_by(self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.generates() == self)
            .unwrap_or(self)
    }

    /// Element that overcomes this one.
    pub fn controlled_by(self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.controls() == self)
            .unwrap_or(self)
    }

    /// Localized name.
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Wood => locale.pick("목(木)", "Wood"),
            Self::Fire => locale.pick("화(火)", "Fire"),
            Self::Earth => locale.pick("토(土)", "Earth"),
            Self::Metal => locale.pick("금(金)", "Metal"),
            Self::Water => locale.pick("수(水)", "Water"),
        }
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Localized name.
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Yang => locale.pick("양", "Yang"),
            Self::Yin => locale.pick("음", "Yin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_are_permutations() {
        for e in ALL_ELEMENTS {
            assert_ne!(e.generates(), e);
            assert_ne!(e.controls(), e);
            assert_ne!(e.generates(), e.controls());
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Fire.controlled_by(), Element::Water);
    }

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
    }
}
