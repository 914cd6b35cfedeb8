//! # chronoglot
//!
//! Loose natural-language date/time phrase resolution.
//!
//! chronoglot turns free-form, possibly Polish- or Spanish-language
//! phrases ("next monday at 14:30", "jutro o 15", "31.01.2025",
//! "manana a las 14:30") into absolute timestamps carrying a fixed UTC
//! offset. All functions take explicit inputs (no system clock access);
//! the caller provides the "now" anchor, keeping resolution
//! deterministic and testable.
//!
//! # Design Principle
//!
//! The parser is intentionally loose. It runs a fixed cascade of
//! independent extraction rules over one translated string; each rule
//! unconditionally overwrites its target fields when its pattern
//! matches, and the cascade order is the only precedence. Substring
//! collisions ("at" inside "chat", a stray " pm") are accepted false
//! positives of that looseness, not errors. What it does not do is
//! guess silently past validation: out-of-calendar results surface as
//! typed errors.
//!
//! ## Modules
//!
//! - [`latin`]: diacritic transliteration table (Polish, Spanish)
//! - [`translate`]: keyword translation to the canonical vocabulary
//! - [`extract`]: the extractor cascade and the [`parse`] entry point
//! - [`error`]: error types

pub mod error;
pub mod extract;
pub mod latin;
pub mod translate;

mod fields;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::Serialize;

pub use error::{ParseError, Result};
pub use extract::parse;
pub use latin::to_latin;
pub use translate::translate;

/// A resolved phrase, broken out for serialization and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// The resolved instant (RFC 3339 with offset).
    pub rfc3339: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// The fixed UTC offset (e.g., "+02:00").
    pub utc_offset: String,
}

/// Resolve a phrase and report the result field by field.
///
/// Thin wrapper over [`parse`] for consumers that want the broken-out
/// fields (the CLI, JSON output) rather than a `chrono` value.
///
/// # Errors
///
/// Whatever [`parse`] returns.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
///
/// let now = FixedOffset::east_opt(2 * 3600)
///     .unwrap()
///     .with_ymd_and_hms(2026, 2, 18, 9, 0, 0)
///     .unwrap();
///
/// let report = chronoglot::resolve("dzisiaj wieczorem", now).unwrap();
/// assert_eq!(report.rfc3339, "2026-02-18T18:00:00+02:00");
/// assert_eq!(report.utc_offset, "+02:00");
/// ```
pub fn resolve(text: &str, now: DateTime<FixedOffset>) -> Result<Resolved> {
    let stamp = parse(text, now)?;
    Ok(Resolved {
        rfc3339: stamp.to_rfc3339(),
        year: stamp.year(),
        month: stamp.month(),
        day: stamp.day(),
        hour: stamp.hour(),
        minute: stamp.minute(),
        second: stamp.second(),
        utc_offset: format_utc_offset(&stamp),
    })
}

/// Format the UTC offset as a string (e.g., "-05:00", "+09:00").
fn format_utc_offset(stamp: &DateTime<FixedOffset>) -> String {
    let secs = stamp.offset().local_minus_utc();
    let sign = if secs >= 0 { '+' } else { '-' };
    let abs = secs.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 2, 18, 9, 15, 42)
            .unwrap()
    }

    #[test]
    fn test_resolve_reports_every_field() {
        let report = resolve("next monday at 14:30", anchor()).unwrap();
        assert_eq!(
            report,
            Resolved {
                rfc3339: "2026-02-23T14:30:00+00:00".to_string(),
                year: 2026,
                month: 2,
                day: 23,
                hour: 14,
                minute: 30,
                second: 0,
                utc_offset: "+00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_negative_offset_formatting() {
        let report = resolve("today at 8:00 utc-5", anchor()).unwrap();
        assert_eq!(report.utc_offset, "-05:00");
    }

    #[test]
    fn test_resolve_propagates_parse_errors() {
        assert_eq!(resolve("", anchor()).unwrap_err(), ParseError::EmptyExpression);
    }

    #[test]
    fn test_resolve_serializes_to_json() {
        let report = resolve("2025-01-31", anchor()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["year"], 2025);
        assert_eq!(json["month"], 1);
        assert_eq!(json["day"], 31);
    }
}
