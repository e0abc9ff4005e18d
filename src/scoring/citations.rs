use crate::settings::Settings;

pub const CITATION_MULTIPLIER: f32 = 10.0;
pub const CITATION_SCORE_CAP: f32 = 100.0;

/// Result of the site-scoped scholar lookup. `Counted(0)` means the
/// search answered and nothing cites the URL; `Unavailable` means the
/// lookup itself never produced an answer.
#[derive(Debug, Clone)]
pub enum CitationOutcome {
    Counted(u32),
    Unavailable(String),
}

impl CitationOutcome {
    pub fn score(&self) -> f32 {
        match self {
            Self::Counted(count) => citation_score(*count),
            Self::Unavailable(_) => 0.0,
        }
    }
}

/// Normalizes a raw citation count to 0-100.
pub fn citation_score(count: u32) -> f32 {
    (count as f32 * CITATION_MULTIPLIER).min(CITATION_SCORE_CAP)
}

/// Looks up how often a URL is cited in scholarly results.
///
/// The API key comes from the environment variable named in settings;
/// a missing key is an unavailable signal, not a crash.
pub async fn check_citations(
    client: &reqwest::Client,
    url: &str,
    settings: &Settings,
) -> CitationOutcome {
    let key_env = &settings.endpoints.scholar_api_key_env;
    let api_key = match std::env::var(key_env) {
        Ok(key) if !key.is_empty() => key,
        _ => return CitationOutcome::Unavailable(format!("{key_env} is not set")),
    };

    let request_url = format!(
        "{}?q=site:{}&engine=google_scholar&api_key={}",
        settings.endpoints.scholar_api,
        urlencoding::encode(url),
        urlencoding::encode(&api_key)
    );

    let response = match client.get(&request_url).send().await {
        Ok(response) => response,
        Err(e) => return CitationOutcome::Unavailable(format!("scholar search failed: {e}")),
    };

    if !response.status().is_success() {
        return CitationOutcome::Unavailable(format!(
            "scholar search returned HTTP {}",
            response.status()
        ));
    }

    match response.json::<serde_json::Value>().await {
        Ok(body) => CitationOutcome::Counted(parse_citation_count(&body)),
        Err(e) => CitationOutcome::Unavailable(format!("scholar search parse failed: {e}")),
    }
}

/// Citation count of the first organic result, defaulting to 0 whenever
/// a key along the path is missing.
fn parse_citation_count(body: &serde_json::Value) -> u32 {
    body.get("organic_results")
        .and_then(|results| results.as_array())
        .and_then(|results| results.first())
        .and_then(|first| first.get("cited_by"))
        .and_then(|cited| cited.get("value"))
        .and_then(|value| value.as_u64())
        .unwrap_or(0) as u32
}
