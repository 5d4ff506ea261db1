//! A stem/branch pair in the sexagenary (60) cycle.

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::locale::Locale;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: usize = 60;

/// One pillar. Stem and branch always share parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem and branch; `None` when their parities differ
    /// (for example Gap with Chuk never occurs).
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at position `i` of the cycle, modulo 60 (0 = Gap-Ja).
    pub const fn from_cycle_index(i: i64) -> Self {
        let i = i.rem_euclid(CYCLE_LEN as i64);
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position in the cycle, 0..=59.
    pub const fn cycle_index(self) -> usize {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN as i64) as usize
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    pub const fn stem_element(self) -> Element {
        self.stem.element()
    }

    pub const fn branch_element(self) -> Element {
        self.branch.element()
    }

    /// Polarity shared by stem and branch.
    pub const fn polarity(self) -> Polarity {
        self.stem.polarity()
    }

    /// Hidden stems of the branch.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        self.branch.hidden_stems()
    }

    /// Pillar `n` steps away (negative steps backward).
    pub const fn step(self, n: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + n)
    }

    pub const fn next(self) -> Self {
        self.step(1)
    }

    pub const fn prev(self) -> Self {
        self.step(-1)
    }

    /// Short name, e.g. `경진` or `Gyeong-Jin`.
    pub fn name(self, locale: Locale) -> String {
        match locale {
            Locale::Ko => format!("{}{}", self.stem.hangul(), self.branch.hangul()),
            Locale::En => format!("{}-{}", self.stem.roman(), self.branch.roman()),
        }
    }

    /// Full reading, e.g. `경진(庚辰)` or `Gyeong-Jin (Yang Metal Dragon)`.
    pub fn reading(self, locale: Locale) -> String {
        match locale {
            Locale::Ko => format!(
                "{}({}{})",
                self.name(locale),
                self.stem.hanja(),
                self.branch.hanja()
            ),
            Locale::En => format!(
                "{} ({} {} {})",
                self.name(locale),
                self.polarity().name(locale),
                self.stem_element().name(locale),
                self.branch.animal(locale)
            ),
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}
