use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::fortune::{FortuneProfile, Gender, interact};
use saju_base::{BirthInput, Element, Pillar, analyze, compute_pillars};

fn chart_bench(c: &mut Criterion) {
    let input = BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0);

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_pillars", |b| {
        b.iter(|| compute_pillars(black_box(&input)))
    });
    let lunar = BirthInput::lunar(1990, 1, 1, false, 10, 0);
    group.bench_function("compute_pillars_lunar", |b| {
        b.iter(|| compute_pillars(black_box(&lunar)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let chart = match compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 30)) {
        Ok(c) => c,
        Err(e) => panic!("reference chart: {e}"),
    };

    let mut group = c.benchmark_group("analysis");
    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&chart.pillars))));
    group.bench_function("interact_60", |b| {
        b.iter(|| {
            (0..60)
                .map(|i| interact(&chart.pillars, Element::Wood, Pillar::from_cycle_index(i)).score)
                .sum::<i32>()
        })
    });
    group.finish();
}

fn fortune_bench(c: &mut Criterion) {
    let chart = match compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 30)) {
        Ok(c) => c,
        Err(e) => panic!("reference chart: {e}"),
    };

    let mut group = c.benchmark_group("fortune");
    group.bench_function("profile_new", |b| {
        b.iter(|| FortuneProfile::new(black_box(&chart), Gender::Male))
    });
    if let Ok(prof) = FortuneProfile::new(&chart, Gender::Male) {
        group.bench_function("major_fortunes", |b| b.iter(|| prof.major_fortunes()));
        group.bench_function("monthly_range", |b| {
            b.iter(|| prof.monthly_range(black_box(2024)))
        });
    }
    group.finish();
}

criterion_group!(benches, chart_bench, analysis_bench, fortune_bench);
criterion_main!(benches);
