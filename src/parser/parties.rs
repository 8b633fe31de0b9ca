use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::{header::Header, text};
use crate::records::PartyRecord;

static BOLD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").unwrap());
static GROUP_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Attorneys? for ").unwrap());
static IN_RE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^in re\.? ").unwrap());

/// Segment the ~Name table region into party records. Lines between two
/// party-name lines are the metadata of the upcoming party: representative,
/// then counsel-of-record marker, in fixed positional order, with address
/// and phone in the trailing cells. Returns an empty list when the page has
/// no ~Name row — that layout is simply not modeled here.
pub fn extract(doc: &Html, header: &Header) -> Vec<PartyRecord> {
    let Some(rows) = text::sentinel_rows(doc, "~Name") else {
        return Vec::new();
    };

    let mut group: Option<String> = None;
    let mut partyset: Vec<Vec<String>> = Vec::new();
    let mut out = Vec::new();

    for row in rows {
        // Bold row = group header ("Attorneys for Petitioner:").
        if row.select(&BOLD).next().is_some() {
            let g = text::text_of(row);
            let g = GROUP_PREFIX_RE.replace(&g, "");
            let g = g.replacen(':', "", 1);
            group = Some(g.trim().to_string());
            continue;
        }

        let cells = text::significant_children(row);
        if cells.len() != 1 {
            // Representative / address / phone metadata preceding the
            // eventual "Party name:" line.
            partyset.push(cells);
            continue;
        }

        let mut name = text::text_of(row)
            .replacen("Party name: ", "", 1)
            .trim()
            .to_string();
        if name.is_empty() {
            // "In re" petitions leave the party name blank; fall back to
            // the header's petitioner.
            let petitionish = group
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains("etition"));
            if petitionish {
                if let Some(p) = &header.petitioner {
                    name = IN_RE_RE.replace(p, "").trim().to_string();
                }
            }
        }

        let representative = partyset
            .first()
            .and_then(|cells| cells.first())
            .map(|c| c.trim().to_string())
            .unwrap_or_default();
        let counsel_of_record = partyset
            .get(1)
            .and_then(|cells| cells.first())
            .is_some_and(|c| c.to_lowercase().contains("counsel of record"));
        let address = joined_column(&partyset, 1);
        let phone = joined_column(&partyset, 2);

        out.push(PartyRecord {
            name,
            representative,
            counsel_of_record,
            address,
            phone,
            group: group.clone(),
        });
        partyset.clear();
    }

    out
}

/// Newline-join of one cell position across the accumulated metadata lines,
/// matching the page's multi-line address/phone columns. Missing cells join
/// as empty lines; a fully empty column is omitted.
fn joined_column(partyset: &[Vec<String>], idx: usize) -> Option<String> {
    let joined = partyset
        .iter()
        .map(|cells| cells.get(idx).map(|c| c.trim()).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");
    let joined = joined.trim().to_string();
    (!joined.is_empty()).then_some(joined)
}
