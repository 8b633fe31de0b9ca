use chrono::NaiveDate;
use serde::Serialize;

/// One parsed docket page. Optional fields mirror the page: absent means
/// "not stated", never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docketed_date: Option<NaiveDate>,
    pub term: i32,
    pub number: i32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub petitioner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_court: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub case_nos: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub linked_cases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<PartyRecord>,
    /// None when the page has no ~Proceedings section at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proceedings: Option<Vec<ProceedingRecord>>,
}

/// One party entry from the ~Name table region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyRecord {
    pub name: String,
    pub representative: String,
    pub counsel_of_record: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// One chronological docket-entry line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProceedingRecord {
    pub date: NaiveDate,
    /// A surname, "per curiam", or absent (unattributed / full court).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstained: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Party and lower-court names mentioned in the line, as matched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
