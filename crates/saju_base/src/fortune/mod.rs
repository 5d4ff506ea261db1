//! Fortune Timeline Engine.
//!
//! - Major fortunes: decades stepping the month pillar from the start age.
//! - Minor fortunes: single years before the start age, stepping the hour pillar.
//! - Yearly, monthly, daily and hourly cycle pillars for calendar periods.
//!
//! Every fortune carries an [`Interaction`] against the natal chart.

pub mod interaction;
pub mod periodic;
pub mod profile;
pub mod types;

pub use interaction::interact;
pub use periodic::{daily_pillar, hourly_pillars, monthly_pillar, yearly_pillar};
pub use profile::{FortuneProfile, start_age_from_days};
pub use types::{
    DailyFortune, FortuneDirection, FortuneGrade, Gender, HourlyFortune, Interaction,
    InteractionHit, MajorFortune, MinorFortune, MonthlyFortune, YearlyFortune,
};
