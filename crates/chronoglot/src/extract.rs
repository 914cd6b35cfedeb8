//! The pattern extractor cascade.
//!
//! Twelve extraction rules run in a fixed array over the translated
//! phrase. Each rule is independent: it scans the whole phrase (or its
//! `at`-delimited segment), and when its pattern matches it overwrites
//! its target fields unconditionally. There is no merging and no
//! arbitration beyond array position, so the most recently applied
//! matching rule determines each field's final value.
//!
//! The cascade is deliberately loose. Substring checks fire inside
//! unrelated words ("at" inside "chat", " pm" anywhere in the phrase)
//! and digit runs are claimed by whichever rule sees them first; the
//! tests pin these false positives as accepted behavior rather than
//! papering over them.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset};
use regex::Regex;

use crate::error::{ParseError, Result};
use crate::fields::FieldSet;
use crate::translate::translate;

// ── Compiled patterns ───────────────────────────────────────────────────────

static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

static RE_SMALL_NUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{1,2})\b").unwrap());

static RE_SLASH_MDY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap());

static RE_DOT_DM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\b").unwrap());

static RE_DOT_DMY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b").unwrap());

static RE_DOT_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\.(\d{1,2})\.(\d{1,2})\b").unwrap());

static RE_HYPHEN_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap());

static RE_HYPHEN_DMY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b").unwrap());

static RE_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

static RE_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})(?::(\d{2}))?\b").unwrap());

static RE_GMT_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gmt([+-])(\d{1,2})").unwrap());

static RE_UTC_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"utc([+-])(\d{1,2})").unwrap());

// ── Lookup tables ───────────────────────────────────────────────────────────

/// Weekday name -> ordinal, Monday = 0. "weekend" is a synonym for
/// Saturday. The first name found in table order is the one used.
const WEEKDAYS: &[(&str, i32)] = &[
    ("monday", 0),
    ("tuesday", 1),
    ("wednesday", 2),
    ("thursday", 3),
    ("friday", 4),
    ("saturday", 5),
    ("sunday", 6),
    ("weekend", 5),
];

/// Month full name + three-letter abbreviation -> month number. Checked
/// as independent substring tests in calendar order, each overwriting,
/// so the latest calendar month present in the phrase wins.
const MONTHS: &[(&str, &str, u32)] = &[
    ("january", "jan", 1),
    ("february", "feb", 2),
    ("march", "mar", 3),
    ("april", "apr", 4),
    ("may", "may", 5),
    ("june", "jun", 6),
    ("july", "jul", 7),
    ("august", "aug", 8),
    ("september", "sep", 9),
    ("october", "oct", 10),
    ("november", "nov", 11),
    ("december", "dec", 12),
];

/// Named time of day -> (hour, minute, second). Checked in this order
/// with overwrite-last-wins, which is what lets "midnight" survive its
/// own "night" substring and "afternoon" survive "noon".
const NAMED_TIMES: &[(&str, u32, u32, u32)] = &[
    ("morning", 8, 0, 0),
    ("noon", 12, 0, 0),
    ("afternoon", 14, 0, 0),
    ("evening", 18, 0, 0),
    ("night", 22, 0, 0),
    ("midnight", 0, 0, 0),
];

/// Timezone abbreviation -> fixed whole-hour UTC offset. No DST: the
/// summer and winter names are independent entries. Entries that contain
/// another entry as a substring ("aedt" contains "edt", "cest" would
/// contain "est") must come later in the table, since every entry is an
/// unconditional substring check and the last hit wins. "est" itself is
/// absent: "yesterday" contains it. Half-hour zones (ist, acst) do not
/// fit the whole-hour model and are left out.
const TIMEZONES: &[(&str, i32)] = &[
    ("hst", -10),
    ("akst", -9),
    ("akdt", -8),
    ("pst", -8),
    ("pdt", -7),
    ("mst", -7),
    ("mdt", -6),
    ("cst", -6),
    ("cdt", -5),
    ("edt", -4),
    ("utc", 0),
    ("gmt", 0),
    ("wet", 0),
    ("bst", 1),
    ("west", 1),
    ("cet", 1),
    ("cest", 2),
    ("eet", 2),
    ("eest", 3),
    ("msk", 3),
    ("jst", 9),
    ("awst", 8),
    ("aest", 10),
    ("aedt", 11),
    ("nzst", 12),
    ("nzdt", 13),
];

// ── Entry point ─────────────────────────────────────────────────────────────

type Rule = fn(&str, &DateTime<FixedOffset>, &mut FieldSet) -> Result<()>;

/// The cascade. Array position is the precedence: a later rule that
/// matches overwrites whatever an earlier rule wrote.
const RULES: [Rule; 12] = [
    extract_year,
    extract_at_time,
    extract_day,
    extract_weekday,
    extract_date_literals,
    extract_month_name,
    extract_ordinal_day,
    extract_relative_day,
    extract_named_time,
    extract_clock,
    extract_meridiem,
    extract_zone,
];

/// Resolve a loose date/time phrase against an anchor instant.
///
/// The phrase is translated (lower-cased, transliterated, Polish and
/// Spanish keywords rewritten to English), then run through two fast
/// paths and the extraction cascade. Fields no rule touches keep the
/// anchor's values, so "2025-01-31" resolves to that date at the
/// anchor's time of day.
///
/// # Arguments
///
/// * `text`: the phrase; any mix of the canonical English vocabulary,
///   Polish, Spanish, numeric date literals, and noise words
/// * `now`: the anchor instant all relative expressions resolve against
///
/// # Errors
///
/// [`ParseError::EmptyExpression`] for blank input, and the calendar,
/// clock and offset variants when accumulated fields reject final
/// validation (e.g. "at 99", a month-13 literal, "utc+30").
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use chronoglot::parse;
///
/// // a Wednesday morning anchor
/// let now = FixedOffset::east_opt(0)
///     .unwrap()
///     .with_ymd_and_hms(2026, 2, 18, 9, 0, 0)
///     .unwrap();
///
/// let stamp = parse("jutro o 15", now).unwrap();
/// assert_eq!(stamp.to_rfc3339(), "2026-02-19T15:00:00+00:00");
/// ```
pub fn parse(text: &str, now: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    let translated = translate(text);
    let phrase = translated.trim();

    if phrase.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    // Global fast paths: a complete offset-aware timestamp short-circuits
    // the cascade entirely, as does the exact word "now".
    if let Ok(stamp) = DateTime::parse_from_rfc3339(phrase) {
        return Ok(stamp);
    }
    if phrase == "now" {
        return Ok(now);
    }

    let mut out = FieldSet::from_instant(&now);
    for rule in RULES {
        rule(phrase, &now, &mut out)?;
    }
    out.into_datetime()
}

// ── Extraction rules ────────────────────────────────────────────────────────

/// Split at the first occurrence of the substring "at". Raw substring:
/// "chat" and "saturday" both split. The head feeds day extraction, the
/// tail feeds the hour/minute/second runs.
fn split_at_token(text: &str) -> (&str, Option<&str>) {
    match text.find("at") {
        Some(idx) => (&text[..idx], Some(&text[idx + 2..])),
        None => (text, None),
    }
}

fn parse_num<T: FromStr>(digits: &str) -> Result<T> {
    digits
        .parse()
        .map_err(|_| ParseError::NumberRange(digits.to_string()))
}

/// First standalone four-digit run becomes the year.
fn extract_year(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    if let Some(caps) = RE_YEAR.captures(text) {
        out.year = parse_num(&caps[1])?;
    }
    Ok(())
}

/// Up to three standalone one/two-digit runs after "at" become hour,
/// minute, second. Missing runs keep their current (anchor) values.
fn extract_at_time(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    let (_, Some(tail)) = split_at_token(text) else {
        return Ok(());
    };
    let mut runs = RE_SMALL_NUM.find_iter(tail);
    if let Some(m) = runs.next() {
        out.hour = parse_num(m.as_str())?;
    }
    if let Some(m) = runs.next() {
        out.minute = parse_num(m.as_str())?;
    }
    if let Some(m) = runs.next() {
        out.second = parse_num(m.as_str())?;
    }
    Ok(())
}

/// First standalone one/two-digit run before "at" (or anywhere, when
/// there is no "at") becomes the day of month.
fn extract_day(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    let (head, _) = split_at_token(text);
    if let Some(caps) = RE_SMALL_NUM.captures(head) {
        out.day = parse_num(&caps[1])?;
    }
    Ok(())
}

/// Named weekday, with "last"/"next" stepping a full week. The target
/// day of month may leave the current month in either direction; the
/// normalizer rolls it onto the calendar afterwards.
fn extract_weekday(text: &str, now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    let Some(&(_, target)) = WEEKDAYS.iter().find(|(name, _)| text.contains(name)) else {
        return Ok(());
    };
    let current = now.weekday().num_days_from_monday() as i32;
    let mut day = now.day() as i32 + (target - current);
    if text.contains("last") {
        day -= 7;
    }
    if text.contains("next") {
        day += 7;
    }
    out.day = day;
    Ok(())
}

/// The six structured date literals, scanned in a fixed order with
/// unconditional overwrites, so when a phrase matches several forms the
/// last pattern in this list decides.
fn extract_date_literals(
    text: &str,
    _now: &DateTime<FixedOffset>,
    out: &mut FieldSet,
) -> Result<()> {
    // M/D/YYYY, US order
    if let Some(caps) = RE_SLASH_MDY.captures(text) {
        out.month = parse_num(&caps[1])?;
        out.day = parse_num(&caps[2])?;
        out.year = parse_num(&caps[3])?;
    }
    // D.M
    if let Some(caps) = RE_DOT_DM.captures(text) {
        out.day = parse_num(&caps[1])?;
        out.month = parse_num(&caps[2])?;
    }
    // D.M.YYYY
    if let Some(caps) = RE_DOT_DMY.captures(text) {
        out.day = parse_num(&caps[1])?;
        out.month = parse_num(&caps[2])?;
        out.year = parse_num(&caps[3])?;
    }
    // YYYY.M.D
    if let Some(caps) = RE_DOT_YMD.captures(text) {
        out.year = parse_num(&caps[1])?;
        out.month = parse_num(&caps[2])?;
        out.day = parse_num(&caps[3])?;
    }
    // YYYY-M-D
    if let Some(caps) = RE_HYPHEN_YMD.captures(text) {
        out.year = parse_num(&caps[1])?;
        out.month = parse_num(&caps[2])?;
        out.day = parse_num(&caps[3])?;
    }
    // D-M-YYYY
    if let Some(caps) = RE_HYPHEN_DMY.captures(text) {
        out.day = parse_num(&caps[1])?;
        out.month = parse_num(&caps[2])?;
        out.year = parse_num(&caps[3])?;
    }
    Ok(())
}

fn extract_month_name(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    for &(full, abbr, number) in MONTHS {
        if text.contains(full) || text.contains(abbr) {
            out.month = number;
        }
    }
    Ok(())
}

/// "1st"/"2nd"/"3rd" literals first, then the generic ordinal pattern,
/// so "23rd" recovers from its accidental "3rd" substring hit.
fn extract_ordinal_day(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    if text.contains("1st") {
        out.day = 1;
    }
    if text.contains("2nd") {
        out.day = 2;
    }
    if text.contains("3rd") {
        out.day = 3;
    }
    if let Some(caps) = RE_ORDINAL.captures(text) {
        out.day = parse_num(&caps[1])?;
    }
    Ok(())
}

fn extract_relative_day(text: &str, now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    if text.contains("yesterday") {
        out.day = now.day() as i32 - 1;
    }
    if text.contains("today") {
        out.day = now.day() as i32;
    }
    if text.contains("tomorrow") {
        out.day = now.day() as i32 + 1;
    }
    Ok(())
}

fn extract_named_time(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    for &(word, hour, minute, second) in NAMED_TIMES {
        if text.contains(word) {
            out.hour = hour;
            out.minute = minute;
            out.second = second;
        }
    }
    Ok(())
}

/// Explicit `H:M[:S]` literal. Runs after the named times, so an
/// explicit clock beats a keyword default. A missing seconds group
/// zeroes the seconds rather than keeping the anchor's.
fn extract_clock(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    if let Some(caps) = RE_CLOCK.captures(text) {
        out.hour = parse_num(&caps[1])?;
        out.minute = parse_num(&caps[2])?;
        out.second = match caps.get(3) {
            Some(m) => parse_num(m.as_str())?,
            None => 0,
        };
    }
    Ok(())
}

/// Free substring search over the whole phrase, not anchored to the
/// time literal: a stray " pm" anywhere shifts the hour.
fn extract_meridiem(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    if text.contains(" am") && out.hour == 12 {
        out.hour = 0;
    }
    if text.contains(" pm") && out.hour < 12 {
        out.hour += 12;
    }
    Ok(())
}

/// Abbreviation table sweep (last table hit wins), then the explicit
/// `gmt±N` / `utc±N` forms, which always win over a named zone.
fn extract_zone(text: &str, _now: &DateTime<FixedOffset>, out: &mut FieldSet) -> Result<()> {
    for &(abbr, hours) in TIMEZONES {
        if text.contains(abbr) {
            out.offset_hours = hours;
        }
    }
    if let Some(caps) = RE_GMT_OFFSET.captures(text) {
        let hours: i32 = parse_num(&caps[2])?;
        out.offset_hours = if &caps[1] == "-" { -hours } else { hours };
    }
    if let Some(caps) = RE_UTC_OFFSET.captures(text) {
        let hours: i32 = parse_num(&caps[2])?;
        out.offset_hours = if &caps[1] == "-" { -hours } else { hours };
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
