//! Plain-text rendering of charts, fortunes and bundles.

use saju_advisor::PersonalizationBundle;
use saju_base::fortune::{
    DailyFortune, HourlyFortune, Interaction, MajorFortune, MinorFortune, MonthlyFortune,
    YearlyFortune,
};
use saju_base::{ALL_ELEMENTS, BirthChart, ChartAnalysis, Locale};

fn interaction_line(i: &Interaction, locale: Locale) -> String {
    let hits: Vec<String> = i
        .hits
        .iter()
        .map(|h| format!("{} {}({:+})", h.natal.name(locale), h.kind.name(locale), h.weight))
        .collect();
    let mut line = format!("{:+} {}", i.score, i.grade.name(locale));
    if !hits.is_empty() {
        line.push_str(&format!(" [{}]", hits.join(", ")));
    }
    if i.useful_god != 0 {
        line.push_str(&format!(" useful {:+}", i.useful_god));
    }
    line
}

pub fn chart(chart: &BirthChart, analysis: &ChartAnalysis, locale: Locale) {
    println!("Solar date:      {}", chart.solar_date);
    println!(
        "True solar time: {} ({:+.1} min: longitude {:+.1}, EoT {:+.1})",
        chart.corrected,
        chart.correction.total_minutes,
        chart.correction.longitude_minutes,
        chart.correction.equation_of_time_minutes
    );
    println!();
    for (pos, pillar) in chart.pillars.iter() {
        let hidden: Vec<String> = pillar
            .hidden_stems()
            .iter()
            .map(|s| s.name(locale).to_string())
            .collect();
        println!(
            "{:<6} {}  hidden: {}",
            pos.name(locale),
            pillar.reading(locale),
            hidden.join(" ")
        );
    }

    println!();
    let el = &analysis.elements;
    for e in ALL_ELEMENTS {
        println!("{:<6} {:>3}%", e.name(locale), el.scores.get(e));
    }
    println!(
        "Balance: {}, yongshin: {}",
        el.balance.name(locale),
        el.yongshin.name(locale)
    );

    println!();
    for slot in &analysis.ten_gods.slots {
        let stem = slot.stem.map_or("-", |g| g.name(locale));
        println!(
            "{:<6} stem {:<18} branch {}",
            slot.position.name(locale),
            stem,
            slot.branch.name(locale)
        );
    }

    if !analysis.stars.is_empty() {
        println!();
        for star in &analysis.stars {
            let at: Vec<&str> = star.positions.iter().map(|p| p.name(locale)).collect();
            println!(
                "* {} ({}) at {}",
                star.rule.name(locale),
                star.tag.name(locale),
                at.join(", ")
            );
        }
    }
    if !analysis.relations.is_empty() {
        println!();
        for r in &analysis.relations {
            println!(
                "{} - {}: {}",
                r.positions.0.name(locale),
                r.positions.1.name(locale),
                r.kind.name(locale)
            );
        }
    }
}

pub fn majors(list: &[MajorFortune], locale: Locale) {
    for m in list {
        println!(
            "{:>2}. age {:>3}-{:<3} {}  {}",
            m.index + 1,
            m.start_age,
            m.end_age,
            m.pillar.reading(locale),
            interaction_line(&m.interaction, locale)
        );
    }
}

pub fn minors(list: &[MinorFortune], locale: Locale) {
    for m in list {
        println!(
            "age {:>2}  {}  {}",
            m.age,
            m.pillar.reading(locale),
            interaction_line(&m.interaction, locale)
        );
    }
}

pub fn yearly(list: &[YearlyFortune], locale: Locale) {
    for y in list {
        println!(
            "{}  {}  {}",
            y.year,
            y.pillar.reading(locale),
            interaction_line(&y.interaction, locale)
        );
    }
}

pub fn monthly(list: &[MonthlyFortune], locale: Locale) {
    for m in list {
        println!(
            "{}-{:02}  {}  {}",
            m.year,
            m.month,
            m.pillar.reading(locale),
            interaction_line(&m.interaction, locale)
        );
    }
}

pub fn daily(list: &[DailyFortune], locale: Locale) {
    for d in list {
        println!(
            "{}  {}  {}",
            d.date,
            d.pillar.reading(locale),
            interaction_line(&d.interaction, locale)
        );
    }
}

pub fn hourly(list: &[HourlyFortune], locale: Locale) {
    for h in list {
        println!(
            "{:02}:00  {}  {}",
            h.start_hour,
            h.pillar.reading(locale),
            interaction_line(&h.interaction, locale)
        );
    }
}

pub fn bundle(b: &PersonalizationBundle) {
    let locale = b.locale;
    println!(
        "Today {}  age {} ({})  fortune runs {}",
        b.today,
        b.age,
        b.age_bucket.name(locale),
        b.direction.name(locale)
    );
    println!(
        "Current year {}  month {}",
        b.year_pillar.reading(locale),
        b.month_pillar.reading(locale)
    );
    if let Some(m) = &b.major_fortune {
        println!(
            "Major fortune {} (age {}-{})",
            m.pillar.reading(locale),
            m.start_age,
            m.end_age
        );
    }
    println!();
    println!("Recommended: {}", b.recommended_topics.join(", "));
    println!("Avoid:       {}", b.avoided_topics.join(", "));
    println!("Seasonal topics from {}", b.seasonal_source.name(locale));
    println!();
    for t in &b.timing {
        println!(
            "{} {} {}: {}",
            t.scope.name(locale),
            t.reading,
            t.grade.name(locale),
            t.advice
        );
    }
    let sections = [
        ("Life experience", &b.inferences.life_experience),
        ("Past events", &b.inferences.past_events),
        ("Direction", &b.inferences.future_direction),
    ];
    for (title, lines) in sections {
        println!();
        println!("{title}:");
        for l in lines {
            println!("  - {l}");
        }
    }
}
