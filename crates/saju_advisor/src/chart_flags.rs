//! Chart-derived flags and inference strings.

use saju_base::{Balance, ChartAnalysis, Element, Locale, StarRule, TenGod};
use serde::Serialize;

use crate::age::AgeBucket;
use crate::topic::Topic;

/// Career-themed stars needed to emphasize career on their own.
pub const CAREER_STAR_THRESHOLD: usize = 3;
/// Lacking elements that raise a health caution.
pub const HEALTH_LACKING_ELEMENTS: usize = 2;
/// Maximum strings per inference category.
pub const INFERENCE_CAP: usize = 3;

/// Boolean hints steering topic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PersonalizationFlags {
    pub avoid_marriage_advice: bool,
    pub emphasize_career: bool,
    pub emphasize_wealth: bool,
    pub emphasize_relationship: bool,
    pub emphasize_study: bool,
    pub health_caution: bool,
}

impl PersonalizationFlags {
    /// Derive flags from a chart analysis and the subject's life stage.
    pub fn derive(analysis: &ChartAnalysis, bucket: AgeBucket) -> Self {
        let summary = &analysis.ten_god_summary;
        let dominant = |pred: fn(TenGod) -> bool| summary.dominant.iter().any(|&g| pred(g));
        let solitary =
            analysis.has_star(StarRule::LonelyStar) || analysis.has_star(StarRule::WidowStar);
        Self {
            avoid_marriage_advice: solitary || bucket == AgeBucket::Youth,
            emphasize_career: analysis.career_star_count() >= CAREER_STAR_THRESHOLD
                || dominant(TenGod::is_officer),
            emphasize_wealth: dominant(TenGod::is_wealth),
            emphasize_relationship: analysis.has_star(StarRule::PeachBlossom)
                || analysis.has_star(StarRule::RedFlame),
            emphasize_study: analysis.has_star(StarRule::LiteraryStar)
                || analysis.has_star(StarRule::AcademicHall)
                || dominant(TenGod::is_resource),
            health_caution: analysis.has_star(StarRule::WhiteTiger)
                || analysis.has_star(StarRule::GhostGate)
                || analysis.elements.lacking.len() >= HEALTH_LACKING_ELEMENTS
                || (bucket >= AgeBucket::Mature
                    && analysis.elements.balance == Balance::Unbalanced),
        }
    }

    /// Topics the flags ask to recommend, in flag order.
    pub fn recommended_topics(&self) -> Vec<Topic> {
        let mut out = Vec::new();
        if self.emphasize_career {
            out.push(Topic::CareerFortune);
        }
        if self.emphasize_wealth {
            out.push(Topic::WealthFortune);
        }
        if self.emphasize_relationship && !self.avoid_marriage_advice {
            out.push(Topic::RelationshipFortune);
        }
        if self.emphasize_study {
            out.push(Topic::StudyFortune);
        }
        if self.health_caution {
            out.push(Topic::HealthCare);
        }
        out
    }

    /// Topics the flags ask to keep out.
    pub fn excluded_topics(&self) -> Vec<Topic> {
        let mut out = Vec::new();
        if self.avoid_marriage_advice {
            out.push(Topic::MarriageTiming);
        }
        if self.health_caution {
            out.push(Topic::Investment);
        }
        out
    }
}

/// Advisory strings, at most [`INFERENCE_CAP`] per category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Inferences {
    pub life_experience: Vec<String>,
    pub past_events: Vec<String>,
    pub future_direction: Vec<String>,
}

fn star_experience(rule: StarRule, locale: Locale) -> Option<&'static str> {
    use StarRule::*;
    let s = match rule {
        HeavenlyNoble => locale.pick(
            "어려울 때마다 도와주는 사람이 나타나곤 했습니다.",
            "Help tends to arrive from mentors when things get hard.",
        ),
        LiteraryStar | AcademicHall => locale.pick(
            "배움과 글에서 인정받은 경험이 있습니다.",
            "You have been recognized for learning or writing.",
        ),
        GoldenCarriage => locale.pick(
            "주변의 지원을 받아 안정을 누린 시기가 있었습니다.",
            "There were stretches of comfort built on others' support.",
        ),
        PeachBlossom | RedFlame => locale.pick(
            "사람을 끄는 매력으로 인연이 넓습니다.",
            "Your charm has drawn a wide circle of people.",
        ),
        TravelingHorse => locale.pick(
            "이사나 이동이 잦은 편이었습니다.",
            "Moves and travel have been frequent in your life.",
        ),
        Canopy => locale.pick(
            "홀로 깊이 생각하는 시간을 즐겨 왔습니다.",
            "You have valued time alone to reflect.",
        ),
        Kuigang => locale.pick(
            "남에게 기대기보다 스스로 밀고 나가는 편입니다.",
            "You have usually pushed ahead on your own terms.",
        ),
        YangBlade | GeneralStar => locale.pick(
            "치열한 경쟁 속에서 자리를 지켜 왔습니다.",
            "You have held your ground through fierce competition.",
        ),
        LonelyStar | WidowStar => locale.pick(
            "가까운 사람과 거리를 느낀 시기가 있었습니다.",
            "There were times you felt distant from those close to you.",
        ),
        _ => return None,
    };
    Some(s)
}

fn ten_god_past_event(god: TenGod, locale: Locale) -> &'static str {
    if god.is_officer() {
        locale.pick(
            "일찍부터 책임 있는 역할을 맡았을 가능성이 큽니다.",
            "You likely took on responsibility early.",
        )
    } else if god.is_wealth() {
        locale.pick(
            "이른 시기에 돈을 관리해 본 경험이 있을 것입니다.",
            "You probably handled money matters early on.",
        )
    } else if god.is_resource() {
        locale.pick(
            "학업이나 윗사람의 뒷받침을 받은 시기가 있었습니다.",
            "A period of strong support from elders or study shaped you.",
        )
    } else if god.is_output() {
        locale.pick(
            "재능을 드러내는 활동에 몰두한 적이 있습니다.",
            "You spent time absorbed in creative or expressive work.",
        )
    } else {
        locale.pick(
            "형제나 동료와 경쟁하며 자랐을 가능성이 큽니다.",
            "Rivalry with siblings or peers marked your past.",
        )
    }
}

fn yongshin_direction(element: Element, locale: Locale) -> &'static str {
    match element {
        Element::Wood => locale.pick(
            "배움과 새로운 시작이 운을 살립니다.",
            "Growth comes through learning and new ventures.",
        ),
        Element::Fire => locale.pick(
            "자신을 드러내고 표현할수록 길이 열립니다.",
            "Visibility and self-expression open doors.",
        ),
        Element::Earth => locale.pick(
            "안정된 기반을 다지는 일이 도움이 됩니다.",
            "Building a stable base pays off.",
        ),
        Element::Metal => locale.pick(
            "원칙과 체계를 세우면 성과가 따릅니다.",
            "Structure and discipline bring results.",
        ),
        Element::Water => locale.pick(
            "지식과 인맥을 넓히는 흐름이 유리합니다.",
            "Widening knowledge and networks works in your favor.",
        ),
    }
}

fn stage_direction(bucket: AgeBucket, locale: Locale) -> &'static str {
    match bucket {
        AgeBucket::Youth => locale.pick(
            "지금은 기초를 다지는 시기입니다.",
            "Now is the time to lay foundations.",
        ),
        AgeBucket::YoungAdult => locale.pick(
            "다양한 경험으로 방향을 찾을 때입니다.",
            "Try widely to find your direction.",
        ),
        AgeBucket::EarlyMidlife => locale.pick(
            "선택과 집중이 성과를 좌우합니다.",
            "Focus decides what you achieve next.",
        ),
        AgeBucket::Midlife => locale.pick(
            "쌓아 온 경험을 영향력으로 바꿀 때입니다.",
            "Turn accumulated experience into influence.",
        ),
        AgeBucket::Mature => locale.pick(
            "지켜야 할 것과 내려놓을 것을 가릴 때입니다.",
            "Decide what to keep and what to let go.",
        ),
        AgeBucket::Senior => locale.pick(
            "건강과 마음의 여유를 우선하십시오.",
            "Put health and ease of mind first.",
        ),
    }
}

fn push_capped(out: &mut Vec<String>, s: &str) {
    if out.len() < INFERENCE_CAP && !out.iter().any(|x| x == s) {
        out.push(s.to_string());
    }
}

impl Inferences {
    /// Pick strings from the fixed pools.
    pub fn from_analysis(analysis: &ChartAnalysis, bucket: AgeBucket, locale: Locale) -> Self {
        let mut out = Self::default();
        for star in &analysis.stars {
            if let Some(s) = star_experience(star.rule, locale) {
                push_capped(&mut out.life_experience, s);
            }
        }
        for &god in &analysis.ten_god_summary.dominant {
            push_capped(&mut out.past_events, ten_god_past_event(god, locale));
        }
        if out.past_events.is_empty() {
            let gods = analysis.ten_gods.labels().collect::<Vec<_>>();
            if let Some(&god) = gods.first() {
                push_capped(&mut out.past_events, ten_god_past_event(god, locale));
            }
        }
        push_capped(
            &mut out.future_direction,
            yongshin_direction(analysis.elements.yongshin, locale),
        );
        push_capped(&mut out.future_direction, stage_direction(bucket, locale));
        if let Some(&excess) = analysis.elements.dominant.first() {
            if excess != analysis.elements.yongshin {
                let s = match locale {
                    Locale::Ko => {
                        format!("넘치는 {} 기운을 다스리는 데 신경 쓰십시오.", excess.name(locale))
                    }
                    Locale::En => format!("Temper the excess of {}.", excess.name(locale)),
                };
                push_capped(&mut out.future_direction, &s);
            }
        }
        out
    }
}

/// Flags and inferences for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartContext {
    pub flags: PersonalizationFlags,
    pub inferences: Inferences,
}

pub fn analyze_chart_context(
    analysis: &ChartAnalysis,
    bucket: AgeBucket,
    locale: Locale,
) -> ChartContext {
    ChartContext {
        flags: PersonalizationFlags::derive(analysis, bucket),
        inferences: Inferences::from_analysis(analysis, bucket, locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{BirthInput, analyze, compute_pillars};

    fn reference() -> ChartAnalysis {
        let chart = compute_pillars(&BirthInput::solar(1990, 1, 15, 13, 30).with_longitude(127.0))
            .unwrap();
        analyze(&chart.pillars)
    }

    #[test]
    fn reference_flags() {
        let flags = PersonalizationFlags::derive(&reference(), AgeBucket::EarlyMidlife);
        // Direct Officer appears twice
        assert!(flags.emphasize_career);
        assert!(flags.emphasize_study);
        assert!(flags.emphasize_relationship);
        assert!(flags.avoid_marriage_advice);
        assert!(flags.health_caution);
        assert!(!flags.emphasize_wealth);
    }

    #[test]
    fn marriage_avoidance_suppresses_relationship_topic() {
        let flags = PersonalizationFlags {
            avoid_marriage_advice: true,
            emphasize_relationship: true,
            ..Default::default()
        };
        assert!(flags.recommended_topics().is_empty());
        assert_eq!(flags.excluded_topics(), [Topic::MarriageTiming]);
    }

    #[test]
    fn inferences_are_capped() {
        let analysis = reference();
        for locale in [Locale::Ko, Locale::En] {
            for bucket in [AgeBucket::Youth, AgeBucket::Senior] {
                let inf = Inferences::from_analysis(&analysis, bucket, locale);
                assert!(!inf.life_experience.is_empty());
                assert!(inf.life_experience.len() <= INFERENCE_CAP);
                assert!(!inf.past_events.is_empty());
                assert!(inf.past_events.len() <= INFERENCE_CAP);
                assert!((2..=INFERENCE_CAP).contains(&inf.future_direction.len()));
            }
        }
    }

    #[test]
    fn future_direction_leads_with_yongshin() {
        let inf = Inferences::from_analysis(&reference(), AgeBucket::Midlife, Locale::En);
        assert_eq!(
            inf.future_direction[0],
            "Growth comes through learning and new ventures."
        );
        assert_eq!(inf.future_direction[1], "Turn accumulated experience into influence.");
    }
}
