//! The ten heavenly stems (cheongan).
//!
//! Element and polarity are canonical lookup tables indexed by stem ordinal,
//! not derived from the index.

use crate::element::{Element, Polarity};
use crate::locale::Locale;

/// The ten heavenly stems, Gap (甲) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All stems in cycle order (index 0 = Gap).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

const STEM_POLARITIES: [Polarity; 10] = [
    Polarity::Yang,
    Polarity::Yin,
    Polarity::Yang,
    Polarity::Yin,
    Polarity::Yang,
    Polarity::Yin,
    Polarity::Yang,
    Polarity::Yin,
    Polarity::Yang,
    Polarity::Yin,
];

const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_ROMAN: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> usize {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at `i` modulo 10 (negative values wrap).
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        STEM_ELEMENTS[self.index()]
    }

    /// Polarity of the stem.
    pub const fn polarity(self) -> Polarity {
        STEM_POLARITIES[self.index()]
    }

    /// Hangul syllable.
    pub const fn hangul(self) -> &'static str {
        STEM_HANGUL[self.index()]
    }

    /// Hanja character.
    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self.index()]
    }

    /// Revised-romanization name.
    pub const fn roman(self) -> &'static str {
        STEM_ROMAN[self.index()]
    }

    /// Name for a locale: hangul for `Ko`, romanization for `En`.
    pub const fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.hangul(),
            Locale::En => self.roman(),
        }
    }

    /// Stem `n` steps later in the 10-cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}
