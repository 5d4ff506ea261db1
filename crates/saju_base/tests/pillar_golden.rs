//! Golden-value tests for the Pillar Engine.
//!
//! Solar-term instants come from the low-precision solar theory, so cases
//! near a term boundary keep at least 30 minutes of margin.

use saju_base::{
    BirthInput, Branch, Element, FourPillars, Pillar, Stem, TenGodMap, analyze, compute_pillars,
    element_scores, pillars_at_civil,
};
use saju_time::{CivilDate, CivilDateTime};

fn p(s: Stem, b: Branch) -> Pillar {
    Pillar::new(s, b).unwrap()
}

#[test]
fn reference_1990_01_15() {
    let chart =
        compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0)).unwrap();
    assert_eq!(
        chart.pillars,
        FourPillars::new(
            p(Stem::Gi, Branch::Sa),
            p(Stem::Jeong, Branch::Chuk),
            p(Stem::Gyeong, Branch::Jin),
            p(Stem::Im, Branch::O),
        )
    );
    assert!((chart.correction.longitude_minutes - (-32.0)).abs() < 1e-9);
    assert_eq!((chart.corrected.hour, chart.corrected.minute), (12, 48));
}

#[test]
fn hour_boundary_regression() {
    // 13:00 civil at 127E is about 12:19 true solar time: still the O hour.
    let chart =
        compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 0).with_longitude(127.0)).unwrap();
    assert_eq!(chart.corrected.hour, 12);
    assert_eq!(chart.pillars.hour.branch(), Branch::O);

    // The uncorrected civil clock would read the Mi hour.
    let civil = CivilDateTime::new(CivilDate::new(1990, 1, 15).unwrap(), 13, 0).unwrap();
    let raw = pillars_at_civil(&civil, 540).unwrap();
    assert_eq!(raw.hour.branch(), Branch::Mi);
    assert_eq!(raw.day, chart.pillars.day);
}

#[test]
fn ipchun_2024_year_switch() {
    // Ipchun 2024 is 17:27 KST; at 135E the clock runs about 14 minutes ahead.
    let before =
        compute_pillars(&BirthInput::solar(2024, 2, 4, 16, 30).with_longitude(135.0)).unwrap();
    let after =
        compute_pillars(&BirthInput::solar(2024, 2, 4, 18, 30).with_longitude(135.0)).unwrap();
    assert_eq!(before.pillars.year, p(Stem::Gye, Branch::Myo));
    assert_eq!(before.pillars.month, p(Stem::Eul, Branch::Chuk));
    assert_eq!(after.pillars.year, p(Stem::Gap, Branch::Jin));
    assert_eq!(after.pillars.month, p(Stem::Byeong, Branch::In));
    assert_eq!(before.pillars.day, after.pillars.day);
}

#[test]
fn correction_crosses_midnight() {
    // 00:10 at 126.978E loses about 45 minutes: 23:25 on the previous day.
    let chart = compute_pillars(&BirthInput::solar(2000, 3, 1, 0, 10)).unwrap();
    assert_eq!(chart.corrected.date, CivilDate::new(2000, 2, 29).unwrap());
    assert_eq!(chart.corrected.hour, 23);
    let prev = compute_pillars(&BirthInput::solar(2000, 2, 29, 12, 0)).unwrap();
    assert_eq!(chart.pillars.day, prev.pillars.day);
    assert_eq!(chart.pillars.hour.branch(), Branch::Ja);
}

#[test]
fn parity_and_totality_over_many_inputs() {
    for year in (1901..=2099).step_by(7) {
        for month in [1, 2, 5, 8, 11, 12] {
            for hour in [0, 5, 11, 17, 23] {
                let chart = compute_pillars(&BirthInput::solar(year, month, 13, hour, 41)).unwrap();
                for (_, pillar) in chart.pillars.iter() {
                    assert_eq!(pillar.stem().index() % 2, pillar.branch().index() % 2);
                }
                assert_eq!(element_scores(&chart.pillars).total(), 100);
                let map = TenGodMap::from_pillars(&chart.pillars);
                let mut present = 0;
                for slot in map.slots {
                    if slot.position == saju_base::PillarPosition::Day {
                        assert!(slot.stem.is_none());
                    } else {
                        assert!(slot.stem.is_some());
                    }
                    present += slot.stem.is_some() as usize + 1;
                }
                assert_eq!(present, 7);
            }
        }
    }
}

#[test]
fn deterministic() {
    let input = BirthInput::lunar(1985, 4, 10, false, 7, 15).with_longitude(129.075);
    let a = compute_pillars(&input).unwrap();
    let b = compute_pillars(&input).unwrap();
    assert_eq!(a, b);
    assert_eq!(analyze(&a.pillars), analyze(&b.pillars));
}

#[test]
fn analysis_of_reference() {
    let chart =
        compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0)).unwrap();
    let a = analyze(&chart.pillars);
    assert_eq!(a.elements.scores.get(Element::Earth), 40);
    assert_eq!(a.elements.yongshin, Element::Wood);
    assert_eq!(a.ten_god_summary.officer_count(), 3);
}
