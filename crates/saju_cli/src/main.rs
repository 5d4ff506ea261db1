use std::path::PathBuf;
use std::sync::Arc;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use saju_advisor::{
    AdviceRequest, Advisor, AdvisorConfig, SeasonalSearch, StaticSeasonalTable,
};
use saju_base::fortune::{FortuneProfile, Gender};
use saju_base::{BirthChart, BirthInput, LateRatHour, Locale, analyze, compute_pillars};
use saju_time::CivilDate;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser)]
#[command(name = "saju", about = "Four-Pillars chart, fortune and advice CLI")]
struct Cli {
    /// Advisor config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Output locale tag (ko, en)
    #[arg(long, global = true)]
    locale: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD), solar unless --lunar
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM), local clock
    #[arg(long, default_value = "12:00")]
    time: String,
    /// Interpret --date as a lunar date
    #[arg(long)]
    lunar: bool,
    /// Lunar date is in the leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
    /// Birth longitude in degrees east (default from config)
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// UTC offset of the birth clock in minutes (default from config)
    #[arg(long, allow_negative_numbers = true)]
    utc_offset: Option<i32>,
    /// Day handling for 23:00-24:00 births
    #[arg(long, value_enum, default_value = "same-day")]
    late_rat: LateRatArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum LateRatArg {
    SameDay,
    NextDay,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars with element, Ten-God, star and relation analysis
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Fortune timeline
    Fortune {
        #[command(flatten)]
        birth: BirthArgs,
        #[arg(long, value_enum)]
        gender: GenderArg,
        #[command(subcommand)]
        kind: FortuneKind,
    },
    /// Personalization bundle for today
    Advise {
        #[command(flatten)]
        birth: BirthArgs,
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// Date to advise for (YYYY-MM-DD), default is the local date
        #[arg(long)]
        today: Option<String>,
        /// Skip the live search and use the static seasonal table
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Subcommand)]
enum FortuneKind {
    /// Ten-year major fortunes
    Major,
    /// Yearly minor fortunes before the first major fortune
    Minor,
    /// Yearly fortunes for a span of years
    Yearly {
        #[arg(long)]
        from: i32,
        #[arg(long)]
        to: i32,
    },
    /// Monthly fortunes for a year
    Monthly {
        #[arg(long)]
        year: i32,
    },
    /// Daily fortunes starting at a date
    Daily {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        #[arg(long, default_value = "7")]
        days: u32,
    },
    /// The twelve double-hours of a date
    Hourly {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> CivilDate {
    s.parse()
        .unwrap_or_else(|e| fail(format!("Invalid date '{s}' (YYYY-MM-DD): {e}")))
}

fn parse_hm(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got {s}"))?;
    let hour: u32 = h.trim().parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = m.trim().parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute))
}

fn birth_input(args: &BirthArgs, config: &AdvisorConfig) -> BirthInput {
    let date = parse_date(&args.date);
    let (hour, minute) =
        parse_hm(&args.time).unwrap_or_else(|e| fail(format!("Invalid time: {e}")));
    let base = if args.lunar {
        BirthInput::lunar(date.year, date.month, date.day, args.leap, hour, minute)
    } else {
        BirthInput::solar(date.year, date.month, date.day, hour, minute)
    };
    let late_rat = match args.late_rat {
        LateRatArg::SameDay => LateRatHour::SameDay,
        LateRatArg::NextDay => LateRatHour::NextDay,
    };
    base.with_longitude(args.lon.unwrap_or(config.chart.longitude_deg))
        .with_utc_offset(args.utc_offset.unwrap_or(config.chart.utc_offset_minutes))
        .with_late_rat_hour(late_rat)
}

fn load_chart(args: &BirthArgs, config: &AdvisorConfig) -> BirthChart {
    compute_pillars(&birth_input(args, config))
        .unwrap_or_else(|e| fail(format!("Failed to compute chart: {e}")))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

fn local_today() -> CivilDate {
    let now = chrono::Local::now().date_naive();
    CivilDate::new(now.year(), now.month(), now.day())
        .unwrap_or_else(|e| fail(format!("Invalid local date: {e}")))
}

#[derive(Serialize)]
struct ChartOutput<'a> {
    chart: &'a BirthChart,
    analysis: &'a saju_base::ChartAnalysis,
}

fn run_fortune(profile: &FortuneProfile, kind: FortuneKind, json: bool, locale: Locale) {
    match kind {
        FortuneKind::Major => {
            let list = profile.major_fortunes();
            if json {
                print_json(&list)
            } else {
                println!(
                    "Direction {}, start age {} ({:.1} days to jie)",
                    profile.direction().name(locale),
                    profile.start_age(),
                    profile.days_to_jie()
                );
                render::majors(&list, locale)
            }
        }
        FortuneKind::Minor => {
            let list = profile.minor_fortunes();
            if json {
                print_json(&list)
            } else {
                render::minors(&list, locale)
            }
        }
        FortuneKind::Yearly { from, to } => {
            let list = profile
                .yearly_range(from, to)
                .unwrap_or_else(|e| fail(format!("Fortune error: {e}")));
            if json {
                print_json(&list)
            } else {
                render::yearly(&list, locale)
            }
        }
        FortuneKind::Monthly { year } => {
            let list = profile
                .monthly_range(year)
                .unwrap_or_else(|e| fail(format!("Fortune error: {e}")));
            if json {
                print_json(&list)
            } else {
                render::monthly(&list, locale)
            }
        }
        FortuneKind::Daily { from, days } => {
            let list = profile
                .daily_range(parse_date(&from), days)
                .unwrap_or_else(|e| fail(format!("Fortune error: {e}")));
            if json {
                print_json(&list)
            } else {
                render::daily(&list, locale)
            }
        }
        FortuneKind::Hourly { date } => {
            let list = profile
                .hourly(parse_date(&date))
                .unwrap_or_else(|e| fail(format!("Fortune error: {e}")));
            if json {
                print_json(&list)
            } else {
                render::hourly(&list, locale)
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AdvisorConfig::load_or_default(cli.config.as_deref())
        .unwrap_or_else(|e| fail(format!("Failed to load config: {e}")));
    let locale = cli
        .locale
        .as_deref()
        .map_or(config.locale, Locale::from_tag);
    debug!(locale = locale.tag(), search = ?config.search.endpoint, "config loaded");

    match cli.command {
        Commands::Chart { birth } => {
            let chart = load_chart(&birth, &config);
            let analysis = analyze(&chart.pillars);
            if cli.json {
                print_json(&ChartOutput {
                    chart: &chart,
                    analysis: &analysis,
                });
            } else {
                render::chart(&chart, &analysis, locale);
            }
        }

        Commands::Fortune {
            birth,
            gender,
            kind,
        } => {
            let chart = load_chart(&birth, &config);
            let profile = FortuneProfile::new(&chart, gender.into())
                .unwrap_or_else(|e| fail(format!("Fortune error: {e}")));
            run_fortune(&profile, kind, cli.json, locale);
        }

        Commands::Advise {
            birth,
            gender,
            today,
            offline,
        } => {
            let chart = load_chart(&birth, &config);
            let today = today.as_deref().map_or_else(local_today, parse_date);
            let advisor = if offline {
                let search: Arc<dyn SeasonalSearch> = Arc::new(StaticSeasonalTable);
                Advisor::new(config, search)
            } else {
                Advisor::from_config(config)
                    .unwrap_or_else(|e| fail(format!("Failed to build advisor: {e}")))
            };
            let req = AdviceRequest::new(chart, gender.into(), locale, today);
            let bundle = advisor
                .advise(&req)
                .await
                .unwrap_or_else(|e| fail(format!("Advice failed: {e}")));
            if cli.json {
                print_json(&bundle);
            } else {
                render::bundle(&bundle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_fortune_subcommand() {
        let cli = Cli::try_parse_from([
            "saju", "--json", "fortune", "--date", "1990-01-15", "--time", "13:30", "--lon",
            "127", "--gender", "female", "yearly", "--from", "2020", "--to", "2030",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Fortune {
                kind: FortuneKind::Yearly { from, to },
                ..
            } => assert_eq!((from, to), (2020, 2030)),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn time_parsing() {
        assert_eq!(parse_hm("13:30"), Ok((13, 30)));
        assert_eq!(parse_hm("7:05"), Ok((7, 5)));
        assert!(parse_hm("1330").is_err());
    }

    #[test]
    fn config_defaults_fill_location() {
        let cli = Cli::try_parse_from(["saju", "chart", "--date", "1990-01-15"]).unwrap();
        let Commands::Chart { birth } = cli.command else {
            panic!("wrong subcommand");
        };
        let input = birth_input(&birth, &AdvisorConfig::default());
        assert_eq!(input.longitude_deg, saju_base::SEOUL_LONGITUDE_DEG);
        assert_eq!((input.hour, input.minute), (12, 0));
    }
}
