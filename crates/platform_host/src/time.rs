//! Time helpers shared across host contracts and UI formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const YEAR_MONTH_FORMATS: &[(&str, &str)] = &[("%Y-%m-%d", "-01"), ("%Y/%m/%d", "/01")];

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Date-like values accepted by [`format_date`].
pub enum DateInput<'a> {
    /// Free-form text such as `2024-01-05` or an RFC 3339 timestamp.
    Text(&'a str),
    /// A UTC instant.
    Utc(DateTime<Utc>),
    /// A calendar date without time zone.
    Date(NaiveDate),
    /// Milliseconds since the unix epoch.
    UnixMillis(i64),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Utc(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        Self::UnixMillis(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Output selection for [`format_date`].
pub struct DateFormatOptions {
    /// `false` renders `YYYY-MM-DD`; `true` renders the abbreviated `Jan 5, 2024` form.
    pub human: bool,
}

impl DateFormatOptions {
    /// Options for the abbreviated human-friendly form.
    pub const fn human() -> Self {
        Self { human: true }
    }
}

/// Formats a date-like value, returning an empty string when it cannot be interpreted.
///
/// Instants are formatted in UTC. The human form uses English month abbreviations.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>, options: DateFormatOptions) -> String {
    let Some(date) = calendar_date(input.into()) else {
        return String::new();
    };
    let pattern = if options.human { "%b %-d, %Y" } else { "%Y-%m-%d" };
    date.format(pattern).to_string()
}

fn calendar_date(input: DateInput<'_>) -> Option<NaiveDate> {
    match input {
        DateInput::Text(raw) => parse_date_text(raw),
        DateInput::Utc(instant) => Some(instant.date_naive()),
        DateInput::Date(date) => Some(date),
        DateInput::UnixMillis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .map(|instant| instant.date_naive()),
    }
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc).date_naive());
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(raw) {
        return Some(instant.with_timezone(&Utc).date_naive());
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|stamp| stamp.date())
        })
        .or_else(|| parse_year_month(raw))
}

// Year-month input resolves to the first day of the month.
fn parse_year_month(raw: &str) -> Option<NaiveDate> {
    YEAR_MONTH_FORMATS
        .iter()
        .find_map(|(fmt, first_day)| {
            NaiveDate::parse_from_str(&format!("{raw}{first_day}"), fmt).ok()
        })
}
