pub mod dates;
pub mod header;
pub mod parties;
pub mod proceedings;
pub mod roster;
pub mod text;

use anyhow::Result;
use scraper::Html;

use crate::records::{CaseRecord, PartyRecord, ProceedingRecord};
use header::Header;
use roster::Roster;

/// Three-stage pipeline: header metadata → party list → proceedings lines.
/// The party extractor needs the header's petitioner as a fallback name, and
/// the proceedings extractor needs the header's id/type plus the party and
/// lower-court names for in-line mention matching.
pub fn parse_document(html: &str, roster: &Roster) -> Result<CaseRecord> {
    let doc = Html::parse_document(html);
    let header = header::extract(&doc)?;
    let parties = parties::extract(&doc, &header);
    let proceedings = proceedings::extract(&doc, &header, &parties, roster)?;
    Ok(assemble(header, parties, proceedings))
}

fn assemble(
    header: Header,
    parties: Vec<PartyRecord>,
    proceedings: Option<Vec<ProceedingRecord>>,
) -> CaseRecord {
    CaseRecord {
        id: header.id,
        creation_date: header.creation_date,
        docketed_date: header.docketed_date,
        term: header.term,
        number: header.number,
        case_type: header.case_type,
        petitioner: header.petitioner,
        respondent: header.respondent,
        lower_court: header.lower_court,
        case_nos: header.case_nos,
        linked_cases: header.linked_cases,
        parties,
        proceedings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/docket_12a45.htm").unwrap()
    }

    #[test]
    fn full_docket_page() {
        let case = parse_document(&fixture(), &Roster::default()).unwrap();

        assert_eq!(case.id, "12A45");
        assert_eq!(case.term, 2012);
        assert_eq!(case.number, 45);
        assert_eq!(case.case_type.as_deref(), Some("Application"));
        assert_eq!(case.creation_date, Some(d(2012, 1, 2)));
        assert_eq!(case.docketed_date, Some(d(2012, 1, 3)));
        assert_eq!(case.petitioner.as_deref(), Some("In re Smith"));
        assert_eq!(case.respondent.as_deref(), Some("Jones"));
        assert_eq!(
            case.lower_court.as_deref(),
            Some("United States Court of Appeals for the Ninth Circuit")
        );
        assert_eq!(case.case_nos, vec!["10-1234", "10-5678"]);
        assert_eq!(case.linked_cases, vec!["11A22", "11A33"]);

        assert_eq!(case.parties.len(), 2);
        assert_eq!(case.parties[0].name, "Smith");
        assert_eq!(case.parties[1].name, "Jones");

        let proceedings = case.proceedings.as_ref().unwrap();
        assert_eq!(proceedings.len(), 3);

        let first = &proceedings[0];
        assert_eq!(first.date, d(2012, 1, 3));
        assert_eq!(first.justice.as_deref(), Some("Kagan"));
        assert_eq!(first.response.as_deref(), Some("granted"));

        let second = &proceedings[1];
        assert_eq!(second.to_date, Some(d(2012, 3, 1)));
        assert_eq!(second.event, "an extension of time Order extending time to file");

        let third = &proceedings[2];
        assert_eq!(third.justice.as_deref(), Some("per curiam"));
        assert_eq!(third.abstained.as_deref(), Some("Sotomayor"));
        assert_eq!(third.response.as_deref(), Some("denied"));
    }

    #[test]
    fn parse_is_deterministic() {
        let html = fixture();
        let roster = Roster::default();
        let a = serde_json::to_string(&parse_document(&html, &roster).unwrap()).unwrap();
        let b = serde_json::to_string(&parse_document(&html, &roster).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn page_without_proceedings_section() {
        // Some dockets legitimately lack the section (e.g. 08A370).
        let html = "<html><head><title>Search - 08A370</title>\
            <meta name=\"Term\" content=\"2008\">\
            <meta name=\"CaseNumber\" content=\"370\">\
            </head><body></body></html>";
        let case = parse_document(html, &Roster::default()).unwrap();
        assert!(case.proceedings.is_none());
        assert!(case.parties.is_empty());
    }
}
