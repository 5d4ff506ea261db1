//! Special-combination stars (sinsal).
//!
//! Each rule is independent. A rule fires at most once per chart and records
//! every position that satisfied it.

use crate::branch::Branch;
use crate::chart::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::element::Element;
use crate::locale::Locale;
use crate::relation::triad_of;
use crate::stem::Stem;

/// Auspiciousness tag of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarTag {
    Auspicious,
    Neutral,
    Inauspicious,
}

impl StarTag {
    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Auspicious => locale.pick("길신", "auspicious"),
            Self::Neutral => locale.pick("중립", "neutral"),
            Self::Inauspicious => locale.pick("흉신", "inauspicious"),
        }
    }
}

/// Life themes a star speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    Career,
    Romance,
    Health,
    Study,
    Travel,
    Solitude,
}

/// Star rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarRule {
    HeavenlyNoble,
    LiteraryStar,
    AcademicHall,
    GoldenCarriage,
    MonthlyVirtue,
    GeneralStar,
    PeachBlossom,
    TravelingHorse,
    Canopy,
    RedFlame,
    Kuigang,
    YangBlade,
    WhiteTiger,
    Resentment,
    GhostGate,
    LonelyStar,
    WidowStar,
}

/// All rules in evaluation order.
pub const ALL_STAR_RULES: [StarRule; 17] = [
    StarRule::HeavenlyNoble,
    StarRule::LiteraryStar,
    StarRule::AcademicHall,
    StarRule::GoldenCarriage,
    StarRule::MonthlyVirtue,
    StarRule::GeneralStar,
    StarRule::PeachBlossom,
    StarRule::TravelingHorse,
    StarRule::Canopy,
    StarRule::RedFlame,
    StarRule::Kuigang,
    StarRule::YangBlade,
    StarRule::WhiteTiger,
    StarRule::Resentment,
    StarRule::GhostGate,
    StarRule::LonelyStar,
    StarRule::WidowStar,
];

impl StarRule {
    pub const fn tag(self) -> StarTag {
        use StarRule::*;
        match self {
            HeavenlyNoble | LiteraryStar | AcademicHall | GoldenCarriage | MonthlyVirtue
            | GeneralStar => StarTag::Auspicious,
            PeachBlossom | TravelingHorse | Canopy | RedFlame | Kuigang => StarTag::Neutral,
            YangBlade | WhiteTiger | Resentment | GhostGate | LonelyStar | WidowStar => {
                StarTag::Inauspicious
            }
        }
    }

    pub const fn themes(self) -> &'static [Theme] {
        use StarRule::*;
        match self {
            HeavenlyNoble => &[Theme::Career],
            LiteraryStar | AcademicHall => &[Theme::Study],
            GoldenCarriage => &[Theme::Career, Theme::Romance],
            MonthlyVirtue => &[Theme::Health],
            GeneralStar | Kuigang => &[Theme::Career],
            PeachBlossom | RedFlame | Resentment => &[Theme::Romance],
            TravelingHorse => &[Theme::Travel, Theme::Career],
            Canopy => &[Theme::Study, Theme::Solitude],
            YangBlade => &[Theme::Career, Theme::Health],
            WhiteTiger | GhostGate => &[Theme::Health],
            LonelyStar => &[Theme::Solitude],
            WidowStar => &[Theme::Solitude, Theme::Romance],
        }
    }

    pub fn has_theme(self, theme: Theme) -> bool {
        self.themes().contains(&theme)
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        use StarRule::*;
        match self {
            HeavenlyNoble => locale.pick("천을귀인", "Heavenly Noble"),
            LiteraryStar => locale.pick("문창귀인", "Literary Star"),
            AcademicHall => locale.pick("학당귀인", "Academic Hall"),
            GoldenCarriage => locale.pick("금여록", "Golden Carriage"),
            MonthlyVirtue => locale.pick("월덕귀인", "Monthly Virtue"),
            GeneralStar => locale.pick("장성살", "General Star"),
            PeachBlossom => locale.pick("도화살", "Peach Blossom"),
            TravelingHorse => locale.pick("역마살", "Traveling Horse"),
            Canopy => locale.pick("화개살", "Canopy"),
            RedFlame => locale.pick("홍염살", "Red Flame"),
            Kuigang => locale.pick("괴강살", "Kuigang"),
            YangBlade => locale.pick("양인살", "Yang Blade"),
            WhiteTiger => locale.pick("백호살", "White Tiger"),
            Resentment => locale.pick("원진살", "Resentment"),
            GhostGate => locale.pick("귀문관살", "Ghost Gate"),
            LonelyStar => locale.pick("고신살", "Lonely Star"),
            WidowStar => locale.pick("과숙살", "Widow Star"),
        }
    }
}

/// A detected star.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Star {
    pub rule: StarRule,
    pub tag: StarTag,
    pub themes: &'static [Theme],
    /// Positions that satisfied the rule, in chart order.
    pub positions: Vec<PillarPosition>,
}

impl Star {
    fn new(rule: StarRule, mut positions: Vec<PillarPosition>) -> Self {
        positions.sort();
        positions.dedup();
        Self {
            rule,
            tag: rule.tag(),
            themes: rule.themes(),
            positions,
        }
    }

    pub fn is_career(&self) -> bool {
        self.rule.has_theme(Theme::Career)
    }
}

// Day-stem keyed targets, indexed by stem ordinal.

const HEAVENLY_NOBLE: [[Branch; 2]; 10] = [
    [Branch::Chuk, Branch::Mi],
    [Branch::Ja, Branch::Sin],
    [Branch::Hae, Branch::Yu],
    [Branch::Hae, Branch::Yu],
    [Branch::Chuk, Branch::Mi],
    [Branch::Ja, Branch::Sin],
    [Branch::Chuk, Branch::Mi],
    [Branch::In, Branch::O],
    [Branch::Sa, Branch::Myo],
    [Branch::Sa, Branch::Myo],
];

const LITERARY: [Branch; 10] = [
    Branch::Sa,
    Branch::O,
    Branch::Sin,
    Branch::Yu,
    Branch::Sin,
    Branch::Yu,
    Branch::Hae,
    Branch::Ja,
    Branch::In,
    Branch::Myo,
];

const ACADEMIC_HALL: [Branch; 10] = [
    Branch::Hae,
    Branch::O,
    Branch::In,
    Branch::Yu,
    Branch::In,
    Branch::Yu,
    Branch::Sa,
    Branch::Ja,
    Branch::Sin,
    Branch::Myo,
];

const GOLDEN_CARRIAGE: [Branch; 10] = [
    Branch::Jin,
    Branch::Sa,
    Branch::Mi,
    Branch::Sin,
    Branch::Mi,
    Branch::Sin,
    Branch::Sul,
    Branch::Hae,
    Branch::Chuk,
    Branch::In,
];

const RED_FLAME: [Branch; 10] = [
    Branch::O,
    Branch::O,
    Branch::In,
    Branch::Mi,
    Branch::Jin,
    Branch::Jin,
    Branch::Sul,
    Branch::Yu,
    Branch::Ja,
    Branch::Sin,
];

/// Yang stems only.
const YANG_BLADE: [Option<Branch>; 10] = [
    Some(Branch::Myo),
    None,
    Some(Branch::O),
    None,
    Some(Branch::O),
    None,
    Some(Branch::Yu),
    None,
    Some(Branch::Ja),
    None,
];

const WHITE_TIGER: [(Stem, Branch); 7] = [
    (Stem::Gap, Branch::Jin),
    (Stem::Eul, Branch::Mi),
    (Stem::Byeong, Branch::Sul),
    (Stem::Jeong, Branch::Chuk),
    (Stem::Mu, Branch::Jin),
    (Stem::Im, Branch::Sul),
    (Stem::Gye, Branch::Chuk),
];

const KUIGANG: [(Stem, Branch); 5] = [
    (Stem::Gyeong, Branch::Jin),
    (Stem::Gyeong, Branch::Sul),
    (Stem::Im, Branch::Jin),
    (Stem::Im, Branch::Sul),
    (Stem::Mu, Branch::Sul),
];

const RESENTMENT_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Yu),
    (Branch::Myo, Branch::Sin),
    (Branch::Jin, Branch::Hae),
    (Branch::Sa, Branch::Sul),
];

const GHOST_GATE_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Yu),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Mi),
    (Branch::Myo, Branch::Sin),
    (Branch::Jin, Branch::Hae),
    (Branch::Sa, Branch::Sul),
];

/// Targets of the triad-keyed stars for a branch's triad:
/// (peach blossom, traveling horse, canopy, general star).
///
/// [`triad_of`] only yields the four triad elements; anything else is the
/// Hae-Myo-Mi wood triad.
const fn triad_targets(triad: Element) -> (Branch, Branch, Branch, Branch) {
    match triad {
        Element::Fire => (Branch::Myo, Branch::Sin, Branch::Sul, Branch::O),
        Element::Water => (Branch::Yu, Branch::In, Branch::Jin, Branch::Ja),
        Element::Metal => (Branch::O, Branch::Hae, Branch::Chuk, Branch::Yu),
        _ => (Branch::Ja, Branch::Sa, Branch::Mi, Branch::Myo),
    }
}

/// Monthly-virtue stem keyed by the month branch's triad.
const fn monthly_virtue(triad: Element) -> Stem {
    match triad {
        Element::Fire => Stem::Byeong,
        Element::Water => Stem::Im,
        Element::Metal => Stem::Gyeong,
        _ => Stem::Gap,
    }
}

/// (lonely, widow) keyed by the year branch's seasonal group.
const fn lonely_widow(year_branch: Branch) -> (Branch, Branch) {
    match year_branch {
        Branch::Hae | Branch::Ja | Branch::Chuk => (Branch::In, Branch::Sul),
        Branch::In | Branch::Myo | Branch::Jin => (Branch::Sa, Branch::Chuk),
        Branch::Sa | Branch::O | Branch::Mi => (Branch::Sin, Branch::Jin),
        Branch::Sin | Branch::Yu | Branch::Sul => (Branch::Hae, Branch::Mi),
    }
}

fn positions_with_branch(pillars: &FourPillars, targets: &[Branch]) -> Vec<PillarPosition> {
    pillars
        .iter()
        .filter(|(_, p)| targets.contains(&p.branch()))
        .map(|(pos, _)| pos)
        .collect()
}

/// Positions other than the bases whose branch hits the triad-keyed target.
fn triad_star(
    pillars: &FourPillars,
    pick: fn((Branch, Branch, Branch, Branch)) -> Branch,
) -> Vec<PillarPosition> {
    let mut hits = Vec::new();
    for base in [PillarPosition::Year, PillarPosition::Day] {
        let (_, element) = triad_of(pillars.get(base).branch());
        let target = pick(triad_targets(element));
        hits.extend(
            ALL_POSITIONS
                .into_iter()
                .filter(|&pos| pos != base && pillars.get(pos).branch() == target),
        );
    }
    hits
}

fn pair_star(pillars: &FourPillars, pairs: &[(Branch, Branch)]) -> Vec<PillarPosition> {
    let mut hits = Vec::new();
    for (i, a) in ALL_POSITIONS.into_iter().enumerate() {
        for b in ALL_POSITIONS.into_iter().skip(i + 1) {
            let (x, y) = (pillars.get(a).branch(), pillars.get(b).branch());
            if pairs
                .iter()
                .any(|&(p, q)| (p == x && q == y) || (p == y && q == x))
            {
                hits.push(a);
                hits.push(b);
            }
        }
    }
    hits
}

fn evaluate(rule: StarRule, pillars: &FourPillars) -> Vec<PillarPosition> {
    let dm = pillars.day_master().index();
    match rule {
        StarRule::HeavenlyNoble => positions_with_branch(pillars, &HEAVENLY_NOBLE[dm]),
        StarRule::LiteraryStar => positions_with_branch(pillars, &[LITERARY[dm]]),
        StarRule::AcademicHall => positions_with_branch(pillars, &[ACADEMIC_HALL[dm]]),
        StarRule::GoldenCarriage => positions_with_branch(pillars, &[GOLDEN_CARRIAGE[dm]]),
        StarRule::RedFlame => positions_with_branch(pillars, &[RED_FLAME[dm]]),
        StarRule::YangBlade => match YANG_BLADE[dm] {
            Some(b) => positions_with_branch(pillars, &[b]),
            None => Vec::new(),
        },
        StarRule::MonthlyVirtue => {
            let (_, element) = triad_of(pillars.month.branch());
            let target = monthly_virtue(element);
            pillars
                .iter()
                .filter(|(_, p)| p.stem() == target)
                .map(|(pos, _)| pos)
                .collect()
        }
        StarRule::PeachBlossom => triad_star(pillars, |t| t.0),
        StarRule::TravelingHorse => triad_star(pillars, |t| t.1),
        StarRule::Canopy => triad_star(pillars, |t| t.2),
        StarRule::GeneralStar => triad_star(pillars, |t| t.3),
        StarRule::WhiteTiger => pillars
            .iter()
            .filter(|(_, p)| WHITE_TIGER.contains(&(p.stem(), p.branch())))
            .map(|(pos, _)| pos)
            .collect(),
        StarRule::Kuigang => {
            let d = pillars.day;
            if KUIGANG.contains(&(d.stem(), d.branch())) {
                vec![PillarPosition::Day]
            } else {
                Vec::new()
            }
        }
        StarRule::Resentment => pair_star(pillars, &RESENTMENT_PAIRS),
        StarRule::GhostGate => pair_star(pillars, &GHOST_GATE_PAIRS),
        StarRule::LonelyStar | StarRule::WidowStar => {
            let (lonely, widow) = lonely_widow(pillars.year.branch());
            let target = if rule == StarRule::LonelyStar {
                lonely
            } else {
                widow
            };
            ALL_POSITIONS
                .into_iter()
                .filter(|&pos| pos != PillarPosition::Year && pillars.get(pos).branch() == target)
                .collect()
        }
    }
}

/// Detect all stars of a chart, one entry per rule that fires.
pub fn detect_stars(pillars: &FourPillars) -> Vec<Star> {
    ALL_STAR_RULES
        .into_iter()
        .filter_map(|rule| {
            let positions = evaluate(rule, pillars);
            (!positions.is_empty()).then(|| Star::new(rule, positions))
        })
        .collect()
}

/// Number of detected stars carrying the career theme.
pub fn career_star_count(stars: &[Star]) -> usize {
    stars.iter().filter(|s| s.is_career()).count()
}
