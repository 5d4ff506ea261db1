//! Interaction of a cycle pillar with the natal chart.
//!
//! Branch relations are scored per natal branch; three-harmony is scored once
//! per cycle pillar (full when both partner branches are in the chart, half
//! when one is). Stem relations are scored per natal stem.

use crate::branch::Branch;
use crate::chart::{FourPillars, PillarPosition};
use crate::element::Element;
use crate::pillar::Pillar;
use crate::relation::{
    RelationKind, is_clash, is_harm, is_punishment, is_stem_clash, six_harmony, stem_combination,
    triad_of,
};

use super::types::{FortuneGrade, Interaction, InteractionHit};

pub const SIX_HARMONY_WEIGHT: i32 = 3;
pub const THREE_HARMONY_WEIGHT: i32 = 4;
pub const HALF_THREE_HARMONY_WEIGHT: i32 = 2;
pub const STEM_COMBINATION_WEIGHT: i32 = 2;
pub const CLASH_WEIGHT: i32 = -3;
pub const PUNISHMENT_WEIGHT: i32 = -2;
pub const HARM_WEIGHT: i32 = -1;
pub const STEM_CLASH_WEIGHT: i32 = -2;
/// Cycle element equal to the useful element.
pub const USEFUL_GOD_SUPPORT: i32 = 3;
/// Cycle element controlling the useful element.
pub const USEFUL_GOD_THREAT: i32 = -3;

/// Score a cycle pillar against the natal chart and its useful element.
pub fn interact(natal: &FourPillars, yongshin: Element, cycle: Pillar) -> Interaction {
    let mut hits = Vec::new();
    let cb = cycle.branch();
    let cs = cycle.stem();

    for (position, p) in natal.iter() {
        let nb = p.branch();
        let mut push = |kind: RelationKind, weight: i32| {
            hits.push(InteractionHit {
                kind,
                natal: position,
                weight,
            })
        };
        if is_clash(cb, nb) {
            push(RelationKind::Clash, CLASH_WEIGHT);
        }
        if six_harmony(cb, nb).is_some() {
            push(RelationKind::SixHarmony, SIX_HARMONY_WEIGHT);
        }
        if is_punishment(cb, nb) {
            push(RelationKind::Punishment, PUNISHMENT_WEIGHT);
        }
        if is_harm(cb, nb) {
            push(RelationKind::Harm, HARM_WEIGHT);
        }
        if stem_combination(cs, p.stem()).is_some() {
            push(RelationKind::StemCombination, STEM_COMBINATION_WEIGHT);
        }
        if is_stem_clash(cs, p.stem()) {
            push(RelationKind::StemClash, STEM_CLASH_WEIGHT);
        }
    }

    if let Some(hit) = triad_hit(natal, cycle) {
        hits.push(hit);
    }

    let element = cycle.stem_element();
    let useful_god = if element == yongshin {
        USEFUL_GOD_SUPPORT
    } else if element.controls() == yongshin {
        USEFUL_GOD_THREAT
    } else {
        0
    };

    let score = hits.iter().map(|h| h.weight).sum::<i32>() + useful_god;
    Interaction {
        hits,
        useful_god,
        score,
        grade: FortuneGrade::from_score(score),
    }
}

fn triad_hit(natal: &FourPillars, cycle: Pillar) -> Option<InteractionHit> {
    let cb = cycle.branch();
    let (members, _) = triad_of(cb);
    let partners: Vec<_> = members.iter().filter(|&&m| m != cb).collect();
    let first_position = |b: Branch| -> Option<PillarPosition> {
        natal
            .iter()
            .find(|(_, p)| p.branch() == b)
            .map(|(pos, _)| pos)
    };
    let found: Vec<PillarPosition> = partners
        .iter()
        .filter_map(|&&b| first_position(b))
        .collect();
    let (kind, weight) = match found.len() {
        0 => return None,
        1 => (RelationKind::HalfThreeHarmony, HALF_THREE_HARMONY_WEIGHT),
        _ => (RelationKind::ThreeHarmony, THREE_HARMONY_WEIGHT),
    };
    Some(InteractionHit {
        kind,
        natal: found[0],
        weight,
    })
}
