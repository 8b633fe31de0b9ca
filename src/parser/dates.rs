use std::ops::Range;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;

/// Month tokens as the pages write them, full and abbreviated forms
/// (September appears as both "Sep" and "Sept").
pub const MONTHS: &[(&str, u32)] = &[
    ("January", 1),
    ("Jan", 1),
    ("February", 2),
    ("Feb", 2),
    ("March", 3),
    ("Mar", 3),
    ("April", 4),
    ("Apr", 4),
    ("May", 5),
    ("June", 6),
    ("Jun", 6),
    ("July", 7),
    ("Jul", 7),
    ("August", 8),
    ("Aug", 8),
    ("September", 9),
    ("Sep", 9),
    ("Sept", 9),
    ("October", 10),
    ("Oct", 10),
    ("November", 11),
    ("Nov", 11),
    ("December", 12),
    ("Dec", 12),
];

/// Loose "Month Day[,] Year" pattern, case-sensitive to the source pages.
/// Three capture groups: month token, day, year. Public so the proceedings
/// rules can embed it in composite patterns.
pub fn date_pattern() -> String {
    let months: Vec<&str> = MONTHS.iter().map(|(m, _)| *m).collect();
    format!(r"({}) ([0-9]{{1,2}}),? ([0-9]{{4}})", months.join("|"))
}

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(&date_pattern()).unwrap());

fn month_number(token: &str) -> Option<u32> {
    MONTHS.iter().find(|(m, _)| *m == token).map(|(_, n)| *n)
}

/// Build a date from a matched (month token, day, year) triple. An
/// impossible combination (e.g. Feb 30) is a parse failure, never a default.
pub fn date_from_triple(month: &str, day: &str, year: &str) -> Result<NaiveDate> {
    let m = month_number(month).with_context(|| format!("unknown month token `{month}`"))?;
    let d: u32 = day.parse().with_context(|| format!("bad day `{day}`"))?;
    let y: i32 = year.parse().with_context(|| format!("bad year `{year}`"))?;
    NaiveDate::from_ymd_opt(y, m, d)
        .with_context(|| format!("impossible date `{month} {day} {year}`"))
}

/// First date in `text`, together with the byte span it occupies.
/// Ok(None) when no date-shaped token exists; Err when one matched but
/// names an impossible date.
pub fn find_date(text: &str) -> Result<Option<(NaiveDate, Range<usize>)>> {
    let Some(caps) = DATE_RE.captures(text) else {
        return Ok(None);
    };
    let span = caps.get(0).map(|m| m.range()).unwrap_or_default();
    let date = date_from_triple(&caps[1], &caps[2], &caps[3])?;
    Ok(Some((date, span)))
}

/// Two-stage parse for header meta values: the textual grammar first, then
/// the fixed numeric MM/DD/YYYY form. None = unparseable, caller omits the
/// field.
pub fn parse_loose(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Some(caps) = DATE_RE.captures(s) {
        if let Ok(date) = date_from_triple(&caps[1], &caps[2], &caps[3]) {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}
