use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_time::{
    LunarDate, SolarTerm, apparent_solar_longitude, next_jie_after, solar_term_instant,
};

fn sun_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("sun");
    group.bench_function("apparent_solar_longitude", |b| {
        b.iter(|| apparent_solar_longitude(black_box(jd)))
    });
    group.bench_function("solar_term_instant_ipchun", |b| {
        b.iter(|| solar_term_instant(black_box(2024), SolarTerm::Ipchun))
    });
    group.bench_function("next_jie_after", |b| {
        b.iter(|| next_jie_after(black_box(jd)))
    });
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lunar");
    group.bench_function("lunar_to_solar_2090", |b| {
        b.iter(|| {
            LunarDate::new(black_box(2090), 6, 12, false)
                .and_then(|d| d.to_solar())
        })
    });
    group.finish();
}

criterion_group!(benches, sun_bench, lunar_bench);
criterion_main!(benches);
