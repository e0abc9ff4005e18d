use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub scoring: Scoring,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Http {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoring {
    /// Placeholder until real domain-authority scoring exists.
    pub domain_trust: f32,
    pub excerpt_chars: usize,
    pub claim_query_chars: usize,
    pub weights: Weights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    pub domain_trust: f32,
    pub relevance: f32,
    pub fact_check: f32,
    pub bias: f32,
    pub citation: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub claim_search_api: String,
    pub scholar_api: String,
    pub scholar_api_key_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http: Http {
                timeout_secs: 20,
                user_agent: concat!("url-validity/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            scoring: Scoring {
                domain_trust: 70.0,
                excerpt_chars: 512,
                claim_query_chars: 200,
                weights: Weights {
                    domain_trust: 0.3,
                    relevance: 0.3,
                    fact_check: 0.2,
                    bias: 0.1,
                    citation: 0.1,
                },
            },
            endpoints: Endpoints {
                claim_search_api: "https://toolbox.google.com/factcheck/api/v1/claimsearch"
                    .to_string(),
                scholar_api: "https://serpapi.com/search.json".to_string(),
                scholar_api_key_env: "SERPAPI_KEY".to_string(),
            },
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        SETTINGS.get_or_init(Self::load_from_files)
    }

    fn load_from_files() -> Settings {
        let default_path = Path::new("settings.default.ron");
        let override_path = Path::new("settings.ron");

        let mut settings = if default_path.exists() {
            fs::read_to_string(default_path)
                .ok()
                .and_then(|content| ron::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Settings::default()
        };

        if override_path.exists() {
            if let Ok(content) = fs::read_to_string(override_path) {
                if let Ok(overrides) = ron::from_str::<Settings>(&content) {
                    settings = overrides;
                }
            }
        }

        settings
    }
}

pub fn settings() -> &'static Settings {
    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = Settings::default().scoring.weights;
        let total = w.domain_trust + w.relevance + w.fact_check + w.bias + w.citation;
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_excerpt_limits() {
        let s = Settings::default();
        assert_eq!(s.scoring.excerpt_chars, 512);
        assert!(s.scoring.claim_query_chars <= s.scoring.excerpt_chars);
    }
}
