mod bias;
mod citations;
mod fact_check;
mod ml;
mod relevance;
mod validity;

pub use bias::{bias_score, SentimentLabel, SCORE_NEUTRAL};
pub use citations::{check_citations, citation_score, CitationOutcome};
pub use fact_check::{check_facts, FactCheckOutcome};
pub use ml::{MLHandle, PageAssessment};
pub use relevance::cosine_similarity;
pub use validity::{rate_validity, ValidityBreakdown};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_fact_check_fallbacks_feed_the_weighted_sum() {
        let weights = &Settings::default().scoring.weights;

        let unavailable = FactCheckOutcome::Unavailable("network down".to_string());
        let breakdown = rate_validity(70.0, 80.0, unavailable.score(), 75.0, 0.0, weights);
        assert_eq!(breakdown.fact_check, 50.0);

        let no_claims = FactCheckOutcome::NoClaims;
        let breakdown = rate_validity(70.0, 80.0, no_claims.score(), 75.0, 0.0, weights);
        assert_eq!(breakdown.fact_check, 40.0);
    }

    #[test]
    fn test_citation_outcome_feeds_the_weighted_sum() {
        let weights = &Settings::default().scoring.weights;
        let counted = CitationOutcome::Counted(12);
        let breakdown = rate_validity(70.0, 80.0, 80.0, 75.0, counted.score(), weights);
        assert_eq!(breakdown.citation, 100.0);
    }
}
