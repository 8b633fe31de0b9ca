use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};

use super::{dates, text};

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static LINKED_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^linked with:?").unwrap());

/// Document-level metadata pulled from the annotation fields and labeled
/// table rows. `id`, `term` and `number` are mandatory; everything else is
/// "absent = not stated on the page".
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub id: String,
    pub creation_date: Option<NaiveDate>,
    pub docketed_date: Option<NaiveDate>,
    pub term: i32,
    pub number: i32,
    pub case_type: Option<String>,
    pub petitioner: Option<String>,
    pub respondent: Option<String>,
    pub lower_court: Option<String>,
    pub case_nos: Vec<String>,
    pub linked_cases: Vec<String>,
}

pub fn extract(doc: &Html) -> Result<Header> {
    let title = doc
        .select(&TITLE)
        .next()
        .map(text::text_of)
        .context("document has no <title>")?;
    let id = title
        .split_whitespace()
        .last()
        .context("document <title> is empty")?
        .to_string();

    let creation_date = meta(doc, "creation_date").and_then(|v| dates::parse_loose(&v));
    let docketed_date = meta(doc, "Docketed").and_then(|v| dates::parse_loose(&v));

    let term = meta(doc, "Term")
        .map(|v| leading_int(&v))
        .context("missing Term meta field")?;
    let number = meta(doc, "CaseNumber")
        .map(|v| leading_int(&v))
        .context("missing CaseNumber meta field")?;

    let case_type = meta(doc, "CaseType").filter(|v| !v.is_empty());
    let petitioner = meta(doc, "Petitioner").filter(|v| !v.is_empty());
    let respondent = meta(doc, "Respondent").filter(|v| !v.is_empty());

    // The four table scans below degrade to "absent"; a page without the
    // labeled cell still parses.
    let lower_court = td_containing(doc, "Lower Ct")
        .and_then(text::next_sibling_element)
        .map(|el| text::text_of(el).trim().to_string())
        .filter(|v| !v.is_empty());

    let case_nos = td_containing(doc, "Case No")
        .and_then(text::next_sibling_element)
        .map(|el| {
            let cleaned = text::text_of(el).replace([',', '(', ')'], "");
            dedup_tokens(&cleaned)
        })
        .unwrap_or_default();

    let linked_cases = doc
        .select(&TD)
        .find(|td| text::text_of(*td).trim().starts_with("Linked with"))
        .map(|td| {
            let own = text::text_of(td);
            let stripped = LINKED_PREFIX_RE.replace(own.trim(), "");
            dedup_tokens(&stripped.replacen(',', " ", 1))
        })
        .unwrap_or_default();

    Ok(Header {
        id,
        creation_date,
        docketed_date,
        term,
        number,
        case_type,
        petitioner,
        respondent,
        lower_court,
        case_nos,
        linked_cases,
    })
}

fn meta(doc: &Html, name: &str) -> Option<String> {
    let sel = Selector::parse(&format!(r#"meta[name="{name}"]"#)).ok()?;
    doc.select(&sel)
        .next()?
        .value()
        .attr("content")
        .map(|v| text::squash_ws(v).trim().to_string())
}

fn td_containing<'a>(doc: &'a Html, needle: &str) -> Option<scraper::ElementRef<'a>> {
    doc.select(&TD).find(|td| text::text_of(*td).contains(needle))
}

/// Leading ASCII digits as an integer (lenient, like to_i on the source
/// pages); 0 when the value starts with anything else.
fn leading_int(s: &str) -> i32 {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Whitespace-split, deduped preserving first occurrence.
fn dedup_tokens(s: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    s.split_whitespace()
        .filter(|t| seen.insert(t.to_string()))
        .map(|t| t.to_string())
        .collect()
}
