use anyhow::{anyhow, Result};
use rust_bert::pipelines::sequence_classification::SequenceClassificationModel;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use super::bias::bias_score;
use super::relevance::{load_embeddings_model, relevance_score};
use crate::utils::{log_ml_error, log_ml_model_loaded, log_ml_ready, log_ml_step};

pub enum MLRequest {
    Assess {
        query: String,
        excerpt: String,
        response_tx: tokio::sync::oneshot::Sender<Result<PageAssessment>>,
    },
}

/// Model-derived signals for one (query, excerpt) pair.
#[derive(Debug, Clone)]
pub struct PageAssessment {
    pub relevance_score: f32,
    pub bias_score: f32,
    pub bias_label: String,
    pub bias_label_confidence: f32,
}

/// Handle to the thread owning the rust-bert models. Models are loaded
/// once when the worker starts, not per request.
#[derive(Clone)]
pub struct MLHandle {
    request_tx: mpsc::Sender<MLRequest>,
}

impl MLHandle {
    pub fn spawn() -> Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<MLRequest>();

        thread::spawn(move || {
            if let Err(e) = run_ml_worker(request_rx) {
                log_ml_error(&format!("Worker failed: {e}"));
            }
        });

        Ok(Self { request_tx })
    }

    /// Scores relevance and sentiment bias for one page. Unlike the
    /// HTTP checkers there is no fallback value here: a model failure
    /// is an error the caller must surface.
    pub async fn assess(&self, query: String, excerpt: String) -> Result<PageAssessment> {
        let (response_tx, response_rx) = tokio::sync::oneshot::channel();

        self.request_tx
            .send(MLRequest::Assess {
                query,
                excerpt,
                response_tx,
            })
            .map_err(|_| anyhow!("ML worker is no longer running"))?;

        response_rx
            .await
            .map_err(|_| anyhow!("ML worker dropped the request (did the models load?)"))?
    }
}

fn run_ml_worker(request_rx: mpsc::Receiver<MLRequest>) -> Result<()> {
    log_ml_step("Loading sentence embeddings model...");
    let start = Instant::now();
    let embeddings = load_embeddings_model()?;
    log_ml_model_loaded("Embeddings model", start.elapsed().as_secs_f32());

    log_ml_step("Loading sentiment classification model...");
    let start = Instant::now();
    let classifier = SequenceClassificationModel::new(Default::default())?;
    log_ml_model_loaded("Sentiment model", start.elapsed().as_secs_f32());

    log_ml_ready();

    for request in request_rx {
        let MLRequest::Assess {
            query,
            excerpt,
            response_tx,
        } = request;

        let assessment = relevance_score(&embeddings, &query, &excerpt).map(|relevance| {
            let (bias_label, bias_label_confidence) = classify_sentiment(&classifier, &excerpt);

            PageAssessment {
                relevance_score: relevance,
                bias_score: bias_score(&bias_label),
                bias_label,
                bias_label_confidence,
            }
        });

        let _ = response_tx.send(assessment);
    }

    Ok(())
}

fn classify_sentiment(classifier: &SequenceClassificationModel, text: &str) -> (String, f32) {
    let predictions = classifier.predict([text]);

    match predictions.first() {
        Some(label) => (label.text.clone(), label.score as f32),
        None => (String::new(), 0.0),
    }
}
