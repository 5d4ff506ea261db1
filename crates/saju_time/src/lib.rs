//! Calendar arithmetic for sexagenary charts.
//!
//! This crate provides:
//! - Julian Day Number ↔ Gregorian conversions
//! - Civil date/time types with exact second arithmetic
//! - True solar time correction (longitude offset + equation of time)
//! - Apparent solar longitude and the 24 solar terms
//! - Lunisolar ↔ solar conversion for lunar years 1900-2100

pub mod civil;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod solar_term;
pub mod solar_time;
pub mod sun;

pub use civil::{
    CivilDate, CivilDateTime, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, check_supported_year,
};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, date_from_jdn, day_of_year, days_in_month, is_leap_year,
    jdn_from_date,
};
pub use lunar::{
    LUNAR_FIRST_YEAR, LUNAR_LAST_YEAR, LunarDate, leap_month, lunar_month_days, lunar_year_days,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, IPCHUN_LONGITUDE_DEG, MONTH_SPAN_DEG, SolarTerm, SolarTermEvent,
    month_index_from_longitude, next_jie_after, prev_jie_at_or_before, solar_term_instant,
    solar_terms_for_year,
};
pub use solar_time::{
    SolarTimeCorrection, equation_of_time_minutes, standard_meridian_deg, true_solar_time,
};
pub use sun::{apparent_solar_longitude, normalize_360, normalize_to_pm180};
