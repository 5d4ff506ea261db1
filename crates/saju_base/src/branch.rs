//! The twelve earthly branches (jiji) and their hidden stems (jijanggan).

use crate::element::{Element, Polarity};
use crate::locale::Locale;
use crate::stem::Stem;

/// The twelve earthly branches, Ja (子) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All branches in cycle order (index 0 = Ja).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

const BRANCH_POLARITIES: [Polarity; 12] = [
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
    Polarity::Yang,
    Polarity::Yin,
];

/// Hidden stems per branch, main qi first.
const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Gye],
    &[Stem::Gi, Stem::Gye, Stem::Sin],
    &[Stem::Gap, Stem::Byeong, Stem::Mu],
    &[Stem::Eul],
    &[Stem::Mu, Stem::Eul, Stem::Gye],
    &[Stem::Byeong, Stem::Mu, Stem::Gyeong],
    &[Stem::Jeong, Stem::Gi],
    &[Stem::Gi, Stem::Jeong, Stem::Eul],
    &[Stem::Gyeong, Stem::Im, Stem::Mu],
    &[Stem::Sin],
    &[Stem::Mu, Stem::Sin, Stem::Jeong],
    &[Stem::Im, Stem::Gap],
];

const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_ROMAN: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

const ANIMAL_KO: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

const ANIMAL_EN: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> usize {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at `i` modulo 12 (negative values wrap).
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Branch governing a civil hour (0..=23); Ja covers 23:00-00:59.
    pub const fn from_hour(hour: u32) -> Self {
        Self::from_index(((hour as i64 + 1) / 2) % 12)
    }

    /// First civil hour of this branch's two-hour window (Ja → 23).
    pub const fn start_hour(self) -> u32 {
        ((self.index() as u32 * 2) + 23) % 24
    }

    /// Main element.
    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }

    /// Polarity.
    pub const fn polarity(self) -> Polarity {
        BRANCH_POLARITIES[self.index()]
    }

    /// Hidden stems, main qi first (1..=3 entries).
    pub const fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index()]
    }

    /// Main hidden stem, used for Ten-God lookup.
    pub const fn main_stem(self) -> Stem {
        HIDDEN_STEMS[self.index()][0]
    }

    pub const fn hangul(self) -> &'static str {
        BRANCH_HANGUL[self.index()]
    }

    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index()]
    }

    pub const fn roman(self) -> &'static str {
        BRANCH_ROMAN[self.index()]
    }

    /// Name for a locale: hangul for `Ko`, romanization for `En`.
    pub const fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.hangul(),
            Locale::En => self.roman(),
        }
    }

    /// Zodiac animal.
    pub const fn animal(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => ANIMAL_KO[self.index()],
            Locale::En => ANIMAL_EN[self.index()],
        }
    }

    /// Branch `n` steps later in the 12-cycle.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}
