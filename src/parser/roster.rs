use chrono::NaiveDate;

/// Justice roster configuration for the modeled era. Lifted to a config
/// table so a roster change never touches the matching logic.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Surnames appearing on the pages, 2003 term onward.
    pub justices: Vec<String>,
    /// The chief seat changed hands once in the modeled period.
    pub chief_cutover: NaiveDate,
    pub chief_before: String,
    pub chief_after: String,
}

impl Default for Roster {
    fn default() -> Self {
        let justices = [
            "Souter",
            "Kagan",
            "O'Connor",
            "Sotomayor",
            "Rehnquist",
            "Alito",
            "Roberts",
            "Breyer",
            "Ginsburg",
            "Thomas",
            "Kennedy",
            "Scalia",
            "Stevens",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Roster {
            justices,
            chief_cutover: NaiveDate::from_ymd_opt(2005, 9, 29).unwrap(),
            chief_before: "Rehnquist".to_string(),
            chief_after: "Roberts".to_string(),
        }
    }
}

impl Roster {
    /// Surname of whoever held the Chief Justice seat on `date`.
    pub fn chief(&self, date: NaiveDate) -> &str {
        if date < self.chief_cutover {
            &self.chief_before
        } else {
            &self.chief_after
        }
    }

    /// Regex alternation matching "Justice <surname>" for every roster
    /// member, or the chief's title.
    pub fn justice_pattern(&self) -> String {
        let mut alts: Vec<String> = self
            .justices
            .iter()
            .map(|j| regex::escape(&format!("Justice {j}")))
            .collect();
        alts.push("The Chief Justice".to_string());
        alts.join("|")
    }
}
