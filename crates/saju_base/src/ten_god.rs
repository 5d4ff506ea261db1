//! Ten-God (sipseong) relations of every chart slot to the day master.
//!
//! The relation is read from a static table keyed by the element relation
//! between day master and target and by whether their polarities agree.

use crate::chart::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::element::Element;
use crate::locale::Locale;
use crate::stem::Stem;

/// Ten-God classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

/// All ten in table order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

/// `TEN_GOD_TABLE[dm_element][target_element][same_polarity as 0 / different as 1]`.
const TEN_GOD_TABLE: [[[TenGod; 2]; 5]; 5] = build_table();

/// Element relation of a target to the day master, in table order.
const fn relation_slot(dm: Element, target: Element) -> usize {
    if dm.index() == target.index() {
        0
    } else if dm.generates().index() == target.index() {
        1
    } else if dm.controls().index() == target.index() {
        2
    } else if target.controls().index() == dm.index() {
        3
    } else {
        4
    }
}

const SLOT_GODS: [[TenGod; 2]; 5] = [
    [TenGod::Companion, TenGod::RobWealth],
    [TenGod::EatingGod, TenGod::HurtingOfficer],
    [TenGod::IndirectWealth, TenGod::DirectWealth],
    [TenGod::SevenKillings, TenGod::DirectOfficer],
    [TenGod::IndirectResource, TenGod::DirectResource],
];

const fn build_table() -> [[[TenGod; 2]; 5]; 5] {
    let elements = crate::element::ALL_ELEMENTS;
    let mut table = [[[TenGod::Companion; 2]; 5]; 5];
    let mut d = 0;
    while d < 5 {
        let mut t = 0;
        while t < 5 {
            table[d][t] = SLOT_GODS[relation_slot(elements[d], elements[t])];
            t += 1;
        }
        d += 1;
    }
    table
}

impl TenGod {
    pub const fn index(self) -> usize {
        match self {
            Self::Companion => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::SevenKillings => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }

    pub const fn name(self, locale: Locale) -> &'static str {
        match self {
            Self::Companion => locale.pick("비견", "Companion"),
            Self::RobWealth => locale.pick("겁재", "Rob Wealth"),
            Self::EatingGod => locale.pick("식신", "Eating God"),
            Self::HurtingOfficer => locale.pick("상관", "Hurting Officer"),
            Self::IndirectWealth => locale.pick("편재", "Indirect Wealth"),
            Self::DirectWealth => locale.pick("정재", "Direct Wealth"),
            Self::SevenKillings => locale.pick("편관", "Seven Killings"),
            Self::DirectOfficer => locale.pick("정관", "Direct Officer"),
            Self::IndirectResource => locale.pick("편인", "Indirect Resource"),
            Self::DirectResource => locale.pick("정인", "Direct Resource"),
        }
    }

    /// Officer group (Seven Killings, Direct Officer).
    pub const fn is_officer(self) -> bool {
        matches!(self, Self::SevenKillings | Self::DirectOfficer)
    }

    /// Wealth group.
    pub const fn is_wealth(self) -> bool {
        matches!(self, Self::IndirectWealth | Self::DirectWealth)
    }

    /// Resource group.
    pub const fn is_resource(self) -> bool {
        matches!(self, Self::IndirectResource | Self::DirectResource)
    }

    /// Output group (Eating God, Hurting Officer).
    pub const fn is_output(self) -> bool {
        matches!(self, Self::EatingGod | Self::HurtingOfficer)
    }

    /// Peer group (Companion, Rob Wealth).
    pub const fn is_peer(self) -> bool {
        matches!(self, Self::Companion | Self::RobWealth)
    }
}

/// Ten-God of `target` seen from `day_master`.
pub const fn ten_god(day_master: Stem, target: Stem) -> TenGod {
    let same = day_master.polarity() as u8 == target.polarity() as u8;
    TEN_GOD_TABLE[day_master.element().index()][target.element().index()]
        [if same { 0 } else { 1 }]
}

/// Stem and branch labels of one pillar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenGodSlot {
    pub position: PillarPosition,
    /// `None` only for the day stem (the day master itself).
    pub stem: Option<TenGod>,
    pub branch: TenGod,
}

/// Ten-God labels of all eight slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenGodMap {
    pub slots: [TenGodSlot; 4],
}

impl TenGodMap {
    /// Label every slot of a chart; branches use their main hidden stem.
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let dm = pillars.day_master();
        let slots = ALL_POSITIONS.map(|position| {
            let p = pillars.get(position);
            TenGodSlot {
                position,
                stem: (position != PillarPosition::Day).then(|| ten_god(dm, p.stem())),
                branch: ten_god(dm, p.branch().main_stem()),
            }
        });
        Self { slots }
    }

    pub fn slot(&self, position: PillarPosition) -> &TenGodSlot {
        &self.slots[position.index()]
    }

    /// All present labels (seven slots).
    pub fn labels(&self) -> impl Iterator<Item = TenGod> + '_ {
        self.slots
            .iter()
            .flat_map(|s| s.stem.into_iter().chain(std::iter::once(s.branch)))
    }
}

/// Minimum occurrences for a Ten-God to count as dominant.
pub const TEN_GOD_DOMINANT_COUNT: u8 = 2;

/// Occurrence counts over the seven labelled slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenGodSummary {
    /// Counts indexed by [`TenGod::index`].
    pub counts: [u8; 10],
    pub dominant: Vec<TenGod>,
    pub lacking: Vec<TenGod>,
}

impl TenGodSummary {
    pub fn from_map(map: &TenGodMap) -> Self {
        let mut counts = [0u8; 10];
        for g in map.labels() {
            counts[g.index()] += 1;
        }
        let dominant = ALL_TEN_GODS
            .into_iter()
            .filter(|g| counts[g.index()] >= TEN_GOD_DOMINANT_COUNT)
            .collect();
        let lacking = ALL_TEN_GODS
            .into_iter()
            .filter(|g| counts[g.index()] == 0)
            .collect();
        Self {
            counts,
            dominant,
            lacking,
        }
    }

    pub fn count(&self, god: TenGod) -> u8 {
        self.counts[god.index()]
    }

    /// Combined count of both officer gods.
    pub fn officer_count(&self) -> u8 {
        self.count(TenGod::SevenKillings) + self.count(TenGod::DirectOfficer)
    }

    pub fn is_dominant(&self, god: TenGod) -> bool {
        self.dominant.contains(&god)
    }
}
