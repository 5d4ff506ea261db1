//! Branch and stem relation tables.
//!
//! All pair tables are unordered: `(a, b)` also matches `(b, a)`.

use crate::branch::Branch;
use crate::chart::{FourPillars, PillarPosition};
use crate::element::Element;
use crate::locale::Locale;
use crate::stem::Stem;

const CLASH_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

const SIX_HARMONY_PAIRS: [(Branch, Branch, Element); 6] = [
    (Branch::Ja, Branch::Chuk, Element::Earth),
    (Branch::In, Branch::Hae, Element::Wood),
    (Branch::Myo, Branch::Sul, Element::Fire),
    (Branch::Jin, Branch::Yu, Element::Metal),
    (Branch::Sa, Branch::Sin, Element::Water),
    (Branch::O, Branch::Mi, Element::Fire),
];

/// Three-harmony triads and the element each forms.
pub const THREE_HARMONY_TRIADS: [([Branch; 3], Element); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], Element::Water),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Element::Wood),
    ([Branch::In, Branch::O, Branch::Sul], Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Element::Metal),
];

const PUNISHMENT_PAIRS: [(Branch, Branch); 7] = [
    (Branch::In, Branch::Sa),
    (Branch::Sa, Branch::Sin),
    (Branch::Sin, Branch::In),
    (Branch::Chuk, Branch::Sul),
    (Branch::Sul, Branch::Mi),
    (Branch::Mi, Branch::Chuk),
    (Branch::Ja, Branch::Myo),
];

const SELF_PUNISHMENT: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

const HARM_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Sa),
    (Branch::Myo, Branch::Jin),
    (Branch::Sin, Branch::Hae),
    (Branch::Yu, Branch::Sul),
];

const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Gap, Stem::Gi, Element::Earth),
    (Stem::Eul, Stem::Gyeong, Element::Metal),
    (Stem::Byeong, Stem::Sin, Element::Water),
    (Stem::Jeong, Stem::Im, Element::Wood),
    (Stem::Mu, Stem::Gye, Element::Fire),
];

const STEM_CLASHES: [(Stem, Stem); 4] = [
    (Stem::Gap, Stem::Gyeong),
    (Stem::Eul, Stem::Sin),
    (Stem::Byeong, Stem::Im),
    (Stem::Jeong, Stem::Gye),
];

fn pair_matches<T: PartialEq>(x: T, y: T, a: T, b: T) -> bool {
    (x == a && y == b) || (x == b && y == a)
}

pub fn is_clash(a: Branch, b: Branch) -> bool {
    CLASH_PAIRS.iter().any(|&(x, y)| pair_matches(x, y, a, b))
}

/// Six-harmony element when `a` and `b` combine.
pub fn six_harmony(a: Branch, b: Branch) -> Option<Element> {
    SIX_HARMONY_PAIRS
        .iter()
        .find(|&&(x, y, _)| pair_matches(x, y, a, b))
        .map(|&(_, _, e)| e)
}

/// Triad containing `b` and the element it forms.
pub fn triad_of(b: Branch) -> ([Branch; 3], Element) {
    THREE_HARMONY_TRIADS
        .into_iter()
        .find(|(members, _)| members.contains(&b))
        .unwrap_or(THREE_HARMONY_TRIADS[0])
}

/// Both branches are distinct members of one triad.
pub fn same_triad(a: Branch, b: Branch) -> bool {
    a != b && triad_of(a).0.contains(&b)
}

/// Punishment between two branches, including self-punishment.
pub fn is_punishment(a: Branch, b: Branch) -> bool {
    if a == b {
        return SELF_PUNISHMENT.contains(&a);
    }
    PUNISHMENT_PAIRS.iter().any(|&(x, y)| pair_matches(x, y, a, b))
}

pub fn is_harm(a: Branch, b: Branch) -> bool {
    HARM_PAIRS.iter().any(|&(x, y)| pair_matches(x, y, a, b))
}

/// Stem combination element when `a` and `b` combine.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|&&(x, y, _)| pair_matches(x, y, a, b))
        .map(|&(_, _, e)| e)
}

pub fn is_stem_clash(a: Stem, b: Stem) -> bool {
    STEM_CLASHES.iter().any(|&(x, y)| pair_matches(x, y, a, b))
}

/// Kinds of relation between two chart elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationKind {
    Clash,
    SixHarmony,
    ThreeHarmony,
    HalfThreeHarmony,
    Punishment,
    Harm,
    StemCombination,
    StemClash,
}

impl RelationKind {
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Clash => locale.pick("충", "clash"),
            Self::SixHarmony => locale.pick("육합", "six harmony"),
            Self::ThreeHarmony => locale.pick("삼합", "three harmony"),
            Self::HalfThreeHarmony => locale.pick("반합", "half three harmony"),
            Self::Punishment => locale.pick("형", "punishment"),
            Self::Harm => locale.pick("해", "harm"),
            Self::StemCombination => locale.pick("천간합", "stem combination"),
            Self::StemClash => locale.pick("천간충", "stem clash"),
        }
    }

    /// Harmonious relations (everything else is adverse).
    pub const fn is_harmonious(self) -> bool {
        matches!(
            self,
            Self::SixHarmony | Self::ThreeHarmony | Self::HalfThreeHarmony | Self::StemCombination
        )
    }
}

/// A relation found between two positions of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NatalRelation {
    pub kind: RelationKind,
    pub positions: (PillarPosition, PillarPosition),
}

/// Relations among the chart's own stems and branches.
///
/// Three-harmony is reported once per complete triad (on its first two
/// positions); pairs inside an incomplete triad are half three-harmony.
pub fn natal_relations(pillars: &FourPillars) -> Vec<NatalRelation> {
    let items: Vec<_> = pillars.iter().collect();
    let branches = pillars.branches();
    let mut out = Vec::new();
    let mut reported_triads: Vec<Element> = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let (pi, a) = items[i];
            let (pj, b) = items[j];
            let positions = (pi, pj);
            let mut push = |kind| out.push(NatalRelation { kind, positions });
            let (ba, bb) = (a.branch(), b.branch());
            if is_clash(ba, bb) {
                push(RelationKind::Clash);
            }
            if six_harmony(ba, bb).is_some() {
                push(RelationKind::SixHarmony);
            }
            if same_triad(ba, bb) {
                let (members, element) = triad_of(ba);
                let complete = members.iter().all(|m| branches.contains(m));
                if !complete {
                    push(RelationKind::HalfThreeHarmony);
                } else if !reported_triads.contains(&element) {
                    reported_triads.push(element);
                    push(RelationKind::ThreeHarmony);
                }
            }
            if is_punishment(ba, bb) {
                push(RelationKind::Punishment);
            }
            if is_harm(ba, bb) {
                push(RelationKind::Harm);
            }
            if stem_combination(a.stem(), b.stem()).is_some() {
                push(RelationKind::StemCombination);
            }
            if is_stem_clash(a.stem(), b.stem()) {
                push(RelationKind::StemClash);
            }
        }
    }
    out
}
