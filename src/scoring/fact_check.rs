use serde::Deserialize;

use crate::page::excerpt;
use crate::settings::Settings;

pub const SCORE_CLAIMS_FOUND: f32 = 80.0;
pub const SCORE_NO_CLAIMS: f32 = 40.0;
pub const SCORE_UNAVAILABLE: f32 = 50.0;

/// Result of a claim-search lookup. Keeping the failure case explicit
/// lets the caller tell "nothing indexed" apart from "the lookup never
/// answered", even though both end up as fixed scores.
#[derive(Debug, Clone)]
pub enum FactCheckOutcome {
    ClaimsFound(usize),
    NoClaims,
    Unavailable(String),
}

impl FactCheckOutcome {
    pub fn score(&self) -> f32 {
        match self {
            Self::ClaimsFound(_) => SCORE_CLAIMS_FOUND,
            Self::NoClaims => SCORE_NO_CLAIMS,
            Self::Unavailable(_) => SCORE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<serde_json::Value>,
}

/// Cross-checks a page excerpt against a fact-check claim index.
///
/// The query string carries at most `claim_query_chars` characters of the
/// excerpt. Any transport or parse failure becomes `Unavailable` rather
/// than an error; the fallback score policy lives in [`FactCheckOutcome`].
pub async fn check_facts(
    client: &reqwest::Client,
    text: &str,
    settings: &Settings,
) -> FactCheckOutcome {
    let query = excerpt(text, settings.scoring.claim_query_chars);
    let url = format!(
        "{}?query={}",
        settings.endpoints.claim_search_api,
        urlencoding::encode(query)
    );

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => return FactCheckOutcome::Unavailable(format!("claim search failed: {e}")),
    };

    if !response.status().is_success() {
        return FactCheckOutcome::Unavailable(format!(
            "claim search returned HTTP {}",
            response.status()
        ));
    }

    match response.json::<ClaimSearchResponse>().await {
        Ok(parsed) => claim_outcome(parsed.claims.len()),
        Err(e) => FactCheckOutcome::Unavailable(format!("claim search parse failed: {e}")),
    }
}

fn claim_outcome(claim_count: usize) -> FactCheckOutcome {
    if claim_count > 0 {
        FactCheckOutcome::ClaimsFound(claim_count)
    } else {
        FactCheckOutcome::NoClaims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> Settings {
        let mut settings = Settings::default();
        settings.endpoints.claim_search_api = format!("{}/claimsearch", server.uri());
        settings
    }

    #[test]
    fn test_scores_are_exactly_the_three_fixed_values() {
        assert_eq!(FactCheckOutcome::ClaimsFound(3).score(), 80.0);
        assert_eq!(FactCheckOutcome::NoClaims.score(), 40.0);
        assert_eq!(
            FactCheckOutcome::Unavailable("timeout".to_string()).score(),
            50.0
        );
    }

    #[test]
    fn test_claim_outcome_boundary() {
        assert!(matches!(claim_outcome(0), FactCheckOutcome::NoClaims));
        assert!(matches!(claim_outcome(1), FactCheckOutcome::ClaimsFound(1)));
    }

    #[tokio::test]
    async fn test_claims_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/claimsearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "claims": [{"text": "a claim"}, {"text": "another"}]
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = check_facts(&client, "some page text", &settings_for(&server)).await;
        assert!(matches!(outcome, FactCheckOutcome::ClaimsFound(2)));
    }

    #[tokio::test]
    async fn test_no_claims_on_empty_or_missing_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/claimsearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = check_facts(&client, "some page text", &settings_for(&server)).await;
        assert!(matches!(outcome, FactCheckOutcome::NoClaims));
    }

    #[tokio::test]
    async fn test_unavailable_on_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/claimsearch"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = check_facts(&client, "some page text", &settings_for(&server)).await;
        assert!(matches!(outcome, FactCheckOutcome::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_unavailable_on_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/claimsearch"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = check_facts(&client, "some page text", &settings_for(&server)).await;
        assert!(matches!(outcome, FactCheckOutcome::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_query_is_truncated_to_limit() {
        let server = MockServer::start().await;
        let mut settings = settings_for(&server);
        settings.scoring.claim_query_chars = 10;

        Mock::given(method("GET"))
            .and(path("/claimsearch"))
            .and(query_param("query", "0123456789"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "claims": [{"text": "a claim"}]
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = check_facts(&client, "0123456789_overflow_", &settings).await;
        assert!(matches!(outcome, FactCheckOutcome::ClaimsFound(1)));
    }
}
