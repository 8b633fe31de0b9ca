use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use regex::Regex;
use scraper::Html;

use super::{dates, header::Header, roster::Roster, text};
use crate::records::{PartyRecord, ProceedingRecord};

static JUSTICE_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("Justice ?").unwrap());
static CHIEF_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(the )?chief").unwrap());
static PER_CURIAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)by the court").unwrap());
static RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)granted|denied").unwrap());
static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("from {d} to {d}", d = dates::date_pattern())).unwrap()
});
static UNTIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("until {}", dates::date_pattern())).unwrap());
static DEADLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([^ ]+) days after the entry of this order").unwrap());
static CONFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)(conference) of {}", dates::date_pattern())).unwrap()
});
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:it is )?ordered that (.*)").unwrap());
static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(to |for |a |the )+").unwrap());
static TRAILING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" (in|\.)$").unwrap());

/// Convert each raw proceedings line into a record via the ordered rule
/// pipeline. None when the page has no ~Proceedings row at all (some
/// documents legitimately lack the section).
pub fn extract(
    doc: &Html,
    header: &Header,
    parties: &[PartyRecord],
    roster: &Roster,
) -> Result<Option<Vec<ProceedingRecord>>> {
    let Some(rows) = text::sentinel_rows(doc, "~Proceedings") else {
        return Ok(None);
    };

    let extractor = Extractor::new(header, parties, roster)?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let raw = text::text_of(row);
        out.push(extractor.extract_line(raw.trim())?);
    }
    Ok(Some(out))
}

type Rule = fn(&Extractor, &mut Residual, &mut Draft) -> Result<()>;

/// Order is load-bearing: every rule's pattern assumes earlier matches are
/// already deleted from the residual. Each entry is independently testable
/// through `Extractor::extract_line` on crafted lines.
const PIPELINE: &[(&str, Rule)] = &[
    ("leading-date", Extractor::leading_date),
    ("docket-prefix", Extractor::docket_prefix),
    ("normalize", Extractor::normalize),
    ("abstention", Extractor::abstention),
    ("acting-justice", Extractor::acting_justice),
    ("per-curiam", Extractor::per_curiam),
    ("response", Extractor::response),
    ("party-mentions", Extractor::party_mentions),
    ("date-range", Extractor::date_range),
    ("relative-deadline", Extractor::relative_deadline),
    ("conference-date", Extractor::conference_date),
    ("event-split", Extractor::event_split),
];

/// Per-document line extractor. The justice, docket-prefix and mention
/// patterns depend on what the header and party extractors found, so they
/// are compiled once per document here.
pub struct Extractor {
    roster: Roster,
    prefix_re: Regex,
    justice_re: Regex,
    abstain_re: Regex,
    submitted_re: Regex,
    by_justice_re: Regex,
    /// (matcher, remover) pairs: the lower court group strictly before the
    /// party-name group, so a court match is not swallowed by a looser
    /// party-name match.
    mention_res: Vec<(Regex, Regex)>,
}

impl Extractor {
    pub fn new(header: &Header, parties: &[PartyRecord], roster: &Roster) -> Result<Self> {
        let mut prefix_alts: Vec<String> = Vec::new();
        if let Some(t) = &header.case_type {
            prefix_alts.push(regex::escape(t));
        }
        prefix_alts.push("application".to_string());
        prefix_alts.push("motion".to_string());
        let prefix_re = Regex::new(&format!(
            r"(?i)^\s*(?:{})\s?\({}\)",
            prefix_alts.join("|"),
            regex::escape(&header.id)
        ))
        .context("bad docket-prefix pattern")?;

        let jp = roster.justice_pattern();
        let justice_re = Regex::new(&format!("({jp})"))?;
        let abstain_re = Regex::new(&format!(r"({jp}) took no part [^.]+(\.|$)"))?;
        let submitted_re = Regex::new(&format!("submitted to ({jp})"))?;
        let by_justice_re = Regex::new(&format!("by ({jp})"))?;

        let mut mention_res = Vec::new();
        let mut groups: Vec<String> = Vec::new();
        if let Some(court) = &header.lower_court {
            if !court.trim().is_empty() {
                groups.push(regex::escape(court));
            }
        }
        let names: Vec<String> = parties
            .iter()
            .filter(|p| !p.name.trim().is_empty())
            .map(|p| regex::escape(&p.name))
            .collect();
        if !names.is_empty() {
            groups.push(names.join("|"));
        }
        for group in groups {
            let matcher = Regex::new(&group)?;
            let remover = Regex::new(&format!("(to |by )?(the )?(?:{group})"))?;
            mention_res.push((matcher, remover));
        }

        Ok(Extractor {
            roster: roster.clone(),
            prefix_re,
            justice_re,
            abstain_re,
            submitted_re,
            by_justice_re,
            mention_res,
        })
    }

    /// Run one line through the full pipeline.
    pub fn extract_line(&self, raw: &str) -> Result<ProceedingRecord> {
        let mut line = Residual::new(raw);
        let mut draft = Draft::default();
        for (name, rule) in PIPELINE {
            rule(self, &mut line, &mut draft)
                .with_context(|| format!("rule `{name}` failed on line: {raw}"))?;
        }
        draft.finish()
    }

    // Rule 1: the first date becomes the proceeding date; its span is
    // consumed. A line without one cannot be interpreted at all.
    fn leading_date(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        let (date, span) = dates::find_date(line.as_str())?
            .context("no detectable date")?;
        draft.date = Some(date);
        line.delete_range(span);
        Ok(())
    }

    // Rule 2: "<type> (<id>)" / "Application (<id>)" / "Motion (<id>)"
    // docket prefix is structural noise.
    fn docket_prefix(&self, line: &mut Residual, _draft: &mut Draft) -> Result<()> {
        line.remove_first(&self.prefix_re);
        Ok(())
    }

    // Rule 3: cosmetic cleanup; the remaining rules are written against
    // single-space separation.
    fn normalize(&self, line: &mut Residual, _draft: &mut Draft) -> Result<()> {
        line.normalize();
        Ok(())
    }

    // Rule 4: "<justice> took no part …" up to the sentence boundary.
    fn abstention(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        let Some(caps) = self.abstain_re.captures(line.as_str()) else {
            return Ok(());
        };
        let date = draft.date.context("date not yet extracted")?;
        draft.abstained = Some(self.clean_justice(&caps[1], date));
        line.remove_first(&self.abstain_re);
        Ok(())
    }

    // Rule 5: first justice mention names the acting justice; the
    // "submitted to <justice>" / "by <justice>" connectors become noise
    // once captured.
    fn acting_justice(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        let Some(caps) = self.justice_re.captures(line.as_str()) else {
            return Ok(());
        };
        let date = draft.date.context("date not yet extracted")?;
        draft.justice = Some(self.clean_justice(&caps[1], date));
        line.remove_first(&self.submitted_re);
        line.remove_first(&self.by_justice_re);
        Ok(())
    }

    // Rule 6: "by the Court" marks a per curiam order, unless rule 5
    // already attributed the line.
    fn per_curiam(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        if draft.justice.is_none() && PER_CURIAM_RE.is_match(line.as_str()) {
            draft.justice = Some("per curiam".to_string());
            line.remove_first(&PER_CURIAM_RE);
        }
        Ok(())
    }

    // Rule 7: granted/denied, casing preserved as found.
    fn response(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        if let Some(m) = RESPONSE_RE.find(line.as_str()) {
            let range = m.range();
            draft.response = Some(m.as_str().to_string());
            line.delete_range(range);
        }
        Ok(())
    }

    // Rule 8: lower-court and party-name mentions, each occurrence removed
    // together with its "to "/"by "/"the " connectors.
    fn party_mentions(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        for (matcher, remover) in &self.mention_res {
            let found: Vec<String> = matcher
                .find_iter(line.as_str())
                .map(|m| m.as_str().to_string())
                .collect();
            if found.is_empty() {
                continue;
            }
            draft.parties.extend(found);
            line.remove_all(remover);
        }
        Ok(())
    }

    // Rule 9: "from <date> to <date>" extension window, else "until <date>".
    fn date_range(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        if let Some(caps) = RANGE_RE.captures(line.as_str()) {
            draft.from_date = Some(dates::date_from_triple(&caps[1], &caps[2], &caps[3])?);
            draft.to_date = Some(dates::date_from_triple(&caps[4], &caps[5], &caps[6])?);
            line.remove_first(&RANGE_RE);
        } else if let Some(caps) = UNTIL_RE.captures(line.as_str()) {
            draft.to_date = Some(dates::date_from_triple(&caps[1], &caps[2], &caps[3])?);
            line.remove_first(&UNTIL_RE);
        }
        Ok(())
    }

    // Rule 10: "<number-word> days after the entry of this order". An
    // unrecognized token sets nothing and consumes nothing, so the phrase
    // survives into the event text instead of being guessed at.
    fn relative_deadline(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        let Some(caps) = DEADLINE_RE.captures(line.as_str()) else {
            return Ok(());
        };
        let Some(days) = number_word(&caps[1]) else {
            return Ok(());
        };
        let date = draft.date.context("date not yet extracted")?;
        draft.effective_date = Some(date + Duration::days(days));
        line.remove_first(&DEADLINE_RE);
        Ok(())
    }

    // Rule 11: "conference of <date>" pins the effective date explicitly;
    // the word "conference" stays, it still belongs to the event text.
    fn conference_date(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        if let Some(caps) = CONFERENCE_RE.captures(line.as_str()) {
            draft.effective_date = Some(dates::date_from_triple(&caps[2], &caps[3], &caps[4])?);
            line.replace_first(&CONFERENCE_RE, "$1");
        }
        Ok(())
    }

    // Rule 12: split the residual into the operative "ordered that" clause
    // (event) and whatever preceded it (comment). Without the phrase, the
    // whole residual is the event and there is no comment.
    fn event_split(&self, line: &mut Residual, draft: &mut Draft) -> Result<()> {
        let (mut event, comment) = match ORDERED_RE.captures(line.as_str()) {
            Some(caps) => {
                let whole = caps.get(0).context("unreachable: regex matched")?;
                let before = line.as_str()[..whole.start()].trim().to_string();
                (caps[1].to_string(), (!before.is_empty()).then_some(before))
            }
            None => (line.as_str().trim().to_string(), None),
        };

        event = FILLER_RE.replace(&event, "").to_string();
        event = TRAILING_RE.replace(&event, "").to_string();
        draft.event = Some(event);
        draft.comment = comment;
        Ok(())
    }

    fn clean_justice(&self, token: &str, date: NaiveDate) -> String {
        let stripped = JUSTICE_WORD_RE.replace_all(token, "");
        CHIEF_TOKEN_RE
            .replace_all(&stripped, self.roster.chief(date))
            .trim()
            .to_string()
    }
}

/// Spelled-out number words the relative-deadline rule recognizes. Single
/// words only; compounds and digit forms stay in the residual.
fn number_word(token: &str) -> Option<i64> {
    const WORDS: &[(&str, i64)] = &[
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ];
    let lower = token.to_lowercase();
    WORDS.iter().find(|(w, _)| *w == lower).map(|(_, n)| *n)
}

/// Fields accumulated across the pipeline before the record is finalized.
#[derive(Default)]
struct Draft {
    date: Option<NaiveDate>,
    justice: Option<String>,
    abstained: Option<String>,
    response: Option<String>,
    parties: Vec<String>,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    effective_date: Option<NaiveDate>,
    event: Option<String>,
    comment: Option<String>,
}

impl Draft {
    fn finish(self) -> Result<ProceedingRecord> {
        Ok(ProceedingRecord {
            date: self.date.context("pipeline finished without a date")?,
            justice: self.justice,
            abstained: self.abstained,
            response: self.response,
            parties: self.parties,
            from_date: self.from_date,
            to_date: self.to_date,
            effective_date: self.effective_date,
            event: self.event.context("pipeline finished without an event")?,
            comment: self.comment,
        })
    }
}

/// Working buffer for one line. Rules delete the spans they matched so
/// later rules only see the leftover text.
#[derive(Debug)]
struct Residual(String);

impl Residual {
    fn new(s: &str) -> Self {
        Residual(s.trim().to_string())
    }

    fn as_str(&self) -> &str {
        &self.0
    }

    fn delete_range(&mut self, range: std::ops::Range<usize>) {
        self.0.replace_range(range, "");
        self.tidy();
    }

    fn remove_first(&mut self, re: &Regex) {
        if let Some(m) = re.find(&self.0) {
            let range = m.range();
            self.0.replace_range(range, "");
            self.tidy();
        }
    }

    fn remove_all(&mut self, re: &Regex) {
        self.0 = re.replace_all(&self.0, "").into_owned();
        self.tidy();
    }

    fn replace_first(&mut self, re: &Regex, rep: &str) {
        self.0 = re.replace(&self.0, rep).into_owned();
        self.tidy();
    }

    // Line breaks and comma/period separators collapse to plain spaces,
    // plus the recurring "Court of Court" page artifact.
    fn normalize(&mut self) {
        self.0 = self.0.replace("Court of Court", "Court of");
        self.0 = self.0.replace('\r', "").replace('\n', " ");
        self.0 = self.0.replace(", ", " ").replace(". ", " ");
        self.tidy();
    }

    // Deleting a span can leave a doubled space; every rule downstream
    // assumes single-space separation.
    fn tidy(&mut self) {
        while self.0.contains("  ") {
            self.0 = self.0.replace("  ", " ");
        }
        let trimmed = self.0.trim();
        if trimmed.len() != self.0.len() {
            self.0 = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn party(name: &str) -> PartyRecord {
        PartyRecord {
            name: name.to_string(),
            representative: String::new(),
            counsel_of_record: false,
            address: None,
            phone: None,
            group: None,
        }
    }

    fn extractor(id: &str, lower_court: Option<&str>, party_names: &[&str]) -> Extractor {
        let header = Header {
            id: id.to_string(),
            case_type: Some("Application".to_string()),
            lower_court: lower_court.map(|c| c.to_string()),
            ..Header::default()
        };
        let parties: Vec<PartyRecord> = party_names.iter().map(|n| party(n)).collect();
        Extractor::new(&header, &parties, &Roster::default()).unwrap()
    }

    #[test]
    fn kagan_example_line() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line("Jan 3, 2012 Application (12A45) submitted to Justice Kagan granted.")
            .unwrap();
        assert_eq!(rec.date, d(2012, 1, 3));
        assert_eq!(rec.justice.as_deref(), Some("Kagan"));
        assert_eq!(rec.response.as_deref(), Some("granted"));
        assert!(!rec.event.contains("submitted"));
        assert!(!rec.event.contains("Kagan"));
        assert!(rec.comment.is_none());
    }

    #[test]
    fn chief_resolves_by_date() {
        let ex = extractor("04A456", None, &[]);
        let rec = ex
            .extract_line("Dec 1, 2004 Application (04A456) submitted to The Chief Justice denied.")
            .unwrap();
        assert_eq!(rec.justice.as_deref(), Some("Rehnquist"));

        let ex = extractor("06A12", None, &[]);
        let rec = ex
            .extract_line("Oct 2, 2006 Application (06A12) submitted to The Chief Justice denied.")
            .unwrap();
        assert_eq!(rec.justice.as_deref(), Some("Roberts"));
    }

    #[test]
    fn abstention_runs_before_acting_justice() {
        let ex = extractor("06A1", None, &[]);
        let rec = ex
            .extract_line(
                "Oct 2, 2006 Application (06A1) submitted to Justice Kennedy granted. \
                 The Chief Justice took no part in the consideration or decision of this application.",
            )
            .unwrap();
        assert_eq!(rec.justice.as_deref(), Some("Kennedy"));
        assert_eq!(rec.abstained.as_deref(), Some("Roberts"));
    }

    #[test]
    fn per_curiam_when_unattributed() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line("Feb 10, 2012 Application (12A45) denied by the Court.")
            .unwrap();
        assert_eq!(rec.justice.as_deref(), Some("per curiam"));
        assert_eq!(rec.response.as_deref(), Some("denied"));
    }

    #[test]
    fn per_curiam_does_not_overwrite_justice() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line("May 5, 2012 Application (12A45) granted by Justice Thomas by the Court.")
            .unwrap();
        assert_eq!(rec.justice.as_deref(), Some("Thomas"));
    }

    #[test]
    fn response_keeps_source_casing() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line("Apr 1, 2012 Application (12A45) Denied by Justice Scalia.")
            .unwrap();
        assert_eq!(rec.response.as_deref(), Some("Denied"));
        assert_eq!(rec.justice.as_deref(), Some("Scalia"));
    }

    #[test]
    fn lower_court_matched_before_party_names() {
        let court = "United States Court of Appeals for the Ninth Circuit";
        let ex = extractor("12A45", Some(court), &["United States"]);
        let rec = ex
            .extract_line(&format!(
                "Feb 1, 2012 Application (12A45) record requested from the {court}."
            ))
            .unwrap();
        assert_eq!(rec.parties, vec![court.to_string()]);
        assert_eq!(rec.event, "record requested from");
    }

    #[test]
    fn party_mention_recorded_and_removed() {
        let ex = extractor("12A45", None, &["Jones"]);
        let rec = ex
            .extract_line("Mar 5, 2012 Application (12A45) response requested from Jones.")
            .unwrap();
        assert_eq!(rec.parties, vec!["Jones".to_string()]);
        assert!(!rec.event.contains("Jones"));
    }

    #[test]
    fn extension_until_date() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line(
                "Jan 5, 2012 Application (12A45) for an extension of time submitted to \
                 Justice Kagan. Order extending time to file until Mar 1, 2012.",
            )
            .unwrap();
        assert_eq!(rec.justice.as_deref(), Some("Kagan"));
        assert_eq!(rec.to_date, Some(d(2012, 3, 1)));
        assert!(rec.from_date.is_none());
        assert_eq!(rec.event, "an extension of time Order extending time to file");
    }

    #[test]
    fn extension_window_from_to() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line(
                "Mar 2, 2012 Application (12A45) granted extending the time \
                 from Apr 1, 2012 to May 1, 2012.",
            )
            .unwrap();
        assert_eq!(rec.from_date, Some(d(2012, 4, 1)));
        assert_eq!(rec.to_date, Some(d(2012, 5, 1)));
        assert_eq!(rec.event, "extending the time");
    }

    #[test]
    fn deadline_arithmetic() {
        let ex = extractor("19A1044", None, &[]);
        let rec = ex
            .extract_line(
                "May 1, 2020 Application (19A1044) granted and it is ordered that the time \
                 is extended to ten days after the entry of this order.",
            )
            .unwrap();
        assert_eq!(rec.date, d(2020, 5, 1));
        assert_eq!(rec.effective_date, Some(d(2020, 5, 11)));
        assert_eq!(rec.event, "time is extended to.");
    }

    #[test]
    fn unrecognized_number_word_left_alone() {
        let ex = extractor("19A1044", None, &[]);
        let rec = ex
            .extract_line(
                "May 1, 2020 Application (19A1044) granted and it is ordered that the time \
                 is extended to 30 days after the entry of this order.",
            )
            .unwrap();
        assert!(rec.effective_date.is_none());
        assert!(rec.event.contains("days after the entry of this order"));
    }

    #[test]
    fn conference_date_pins_effective_date() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line(
                "Jun 1, 2012 Application (12A45) referred to the Court for the \
                 conference of Jun 14, 2012.",
            )
            .unwrap();
        assert_eq!(rec.effective_date, Some(d(2012, 6, 14)));
        // The word itself stays in the event text.
        assert!(rec.event.contains("conference"));
        assert!(!rec.event.contains("Jun 14"));
    }

    #[test]
    fn ordered_that_splits_event_and_comment() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line(
                "Jul 1, 2012 Application (12A45) presented to Justice Breyer. \
                 Upon consideration it is ordered that the stay is vacated.",
            )
            .unwrap();
        assert_eq!(rec.event, "stay is vacated.");
        assert_eq!(rec.comment.as_deref(), Some("presented to Justice Breyer Upon consideration"));
    }

    #[test]
    fn missing_date_is_a_hard_failure() {
        let ex = extractor("12A45", None, &[]);
        let err = ex
            .extract_line("Application (12A45) denied without a date.")
            .unwrap_err();
        assert!(err.to_string().contains("leading-date"));
    }

    #[test]
    fn court_of_court_artifact_fixed() {
        let ex = extractor("12A45", None, &[]);
        let rec = ex
            .extract_line(
                "Aug 1, 2012 Application (12A45) remanded to the Court of Court for further proceedings.",
            )
            .unwrap();
        assert!(!rec.event.contains("Court of Court"));
        assert!(rec.event.contains("Court of"));
    }

    #[test]
    fn event_never_full_original_when_rules_matched() {
        let raw = "Jan 3, 2012 Application (12A45) submitted to Justice Kagan granted.";
        let ex = extractor("12A45", None, &[]);
        let rec = ex.extract_line(raw).unwrap();
        assert_ne!(rec.event, raw);
    }

    #[test]
    fn extraction_is_deterministic() {
        let raw = "Jan 5, 2012 Application (12A45) for an extension of time submitted to \
                   Justice Kagan. Order extending time to file until Mar 1, 2012.";
        let ex = extractor("12A45", None, &[]);
        assert_eq!(ex.extract_line(raw).unwrap(), ex.extract_line(raw).unwrap());
    }

    #[test]
    fn number_words() {
        assert_eq!(number_word("ten"), Some(10));
        assert_eq!(number_word("Thirty"), Some(30));
        assert_eq!(number_word("twenty one"), None);
        assert_eq!(number_word("10"), None);
    }
}
