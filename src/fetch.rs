use anyhow::{bail, Context, Result};
use tracing::info;

const BASE_URL: &str = "http://www.supremecourt.gov/docketfiles";

/// Applications and motions live in separate docket-file series,
/// distinguished by one letter in the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocketKind {
    Application,
    Motion,
}

impl DocketKind {
    fn letter(self) -> char {
        match self {
            DocketKind::Application => 'a',
            DocketKind::Motion => 'm',
        }
    }
}

/// Docket file URL for a term/number pair. Files exist for the 2003 term
/// onward; the path uses the term's last two digits.
pub fn docket_url(term: i32, number: u32, kind: DocketKind) -> Result<String> {
    if term < 2003 {
        bail!("docket files are only available from the 2003 term (got {term})");
    }
    Ok(format!(
        "{BASE_URL}/{:02}{}{}.htm",
        term % 100,
        kind.letter(),
        number
    ))
}

/// Fetch one docket page. A 404 means "no such case" (Ok(None)); any other
/// transport or status failure propagates to the caller untouched.
pub async fn fetch_docket(
    client: &reqwest::Client,
    term: i32,
    number: u32,
    kind: DocketKind,
) -> Result<Option<String>> {
    let url = docket_url(term, number, kind)?;
    info!("Fetching docket page: {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request failed: {url}"))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let body = response
        .error_for_status()
        .with_context(|| format!("fetch failed: {url}"))?
        .text()
        .await
        .with_context(|| format!("failed to read body: {url}"))?;

    Ok(Some(body))
}
