//! Date normalization
//!
//! Post dates are rendered as UTC ISO-8601 with millisecond precision,
//! e.g. `2024-03-01T12:00:00.000Z`.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// YAML timestamp: `2001-12-14 21:59:43.10 -5`, `2001-12-14t21:59:43.10-05:00`, ...
fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[Tt]|[ \t]+)(\d{1,2}):(\d{2}):(\d{2})(\.\d+)?[ \t]*(?:([Zz])|([-+])(\d{1,2})(?::?(\d{2}))?)?$",
        )
        .expect("timestamp pattern is valid")
    })
}

fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let caps = timestamp_regex().captures(input)?;
    let num = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let offset = match caps.get(9) {
        Some(sign) => format!(
            "{}{:0>2}:{}",
            sign.as_str(),
            num(10),
            caps.get(11).map_or("00", |m| m.as_str())
        ),
        None => "Z".to_string(),
    };
    let rfc3339 = format!(
        "{}-{:0>2}-{:0>2}T{:0>2}:{}:{}{}{}",
        num(1),
        num(2),
        num(3),
        num(4),
        num(5),
        num(6),
        num(7),
        offset
    );

    DateTime::parse_from_rfc3339(&rfc3339)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a free-form front matter date. Dates without an offset are UTC.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_timestamp(input) {
        return Some(dt);
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Normalized post date: `explicit` when it parses, otherwise `fallback`
pub fn post_date(explicit: Option<&str>, fallback: &DateTime<Utc>) -> String {
    let parsed = explicit.and_then(|raw| {
        let parsed = parse_date(raw);
        if parsed.is_none() {
            tracing::warn!(date = %raw, "Unrecognized front matter date, using issue creation time");
        }
        parsed
    });

    to_iso_string(parsed.as_ref().unwrap_or(fallback))
}
