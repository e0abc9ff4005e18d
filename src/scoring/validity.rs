use serde::Serialize;

use crate::settings::Weights;

/// The six-field record the tool exists to produce. Field names follow
/// the published output format.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidityBreakdown {
    #[serde(rename = "Domain Trust")]
    pub domain_trust: f32,
    #[serde(rename = "Content Relevance")]
    pub relevance: f32,
    #[serde(rename = "Fact-Check Score")]
    pub fact_check: f32,
    #[serde(rename = "Bias Score")]
    pub bias: f32,
    #[serde(rename = "Citation Score")]
    pub citation: f32,
    #[serde(rename = "Final Validity Score")]
    pub final_score: f32,
}

/// Weighted blend of the five component scores. The final value is not
/// clamped; component bounding is each checker's own business.
pub fn rate_validity(
    domain_trust: f32,
    relevance: f32,
    fact_check: f32,
    bias: f32,
    citation: f32,
    weights: &Weights,
) -> ValidityBreakdown {
    let final_score = domain_trust * weights.domain_trust
        + relevance * weights.relevance
        + fact_check * weights.fact_check
        + bias * weights.bias
        + citation * weights.citation;

    ValidityBreakdown {
        domain_trust,
        relevance,
        fact_check,
        bias,
        citation,
        final_score,
    }
}
