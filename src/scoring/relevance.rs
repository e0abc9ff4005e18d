use anyhow::{anyhow, Result};
use rust_bert::pipelines::sentence_embeddings::{
    SentenceEmbeddingsBuilder, SentenceEmbeddingsModel, SentenceEmbeddingsModelType,
};
use simsimd::SpatialSimilarity;

pub fn load_embeddings_model() -> Result<SentenceEmbeddingsModel> {
    let model = SentenceEmbeddingsBuilder::remote(SentenceEmbeddingsModelType::AllMiniLmL6V2)
        .create_model()?;
    Ok(model)
}

/// Cosine similarity between query and page excerpt, scaled to 0-100.
///
/// The excerpt must already be truncated by the caller; this function
/// encodes exactly what it is given.
pub fn relevance_score(
    model: &SentenceEmbeddingsModel,
    query: &str,
    page_excerpt: &str,
) -> Result<f32> {
    let embeddings = model.encode(&[query, page_excerpt])?;
    let [query_embedding, excerpt_embedding] = embeddings.as_slice() else {
        return Err(anyhow!(
            "embedding model returned {} vectors for 2 inputs",
            embeddings.len()
        ));
    };

    Ok(cosine_similarity(query_embedding, excerpt_embedding) * 100.0)
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    f32::cosine(a, b)
        .map(|distance| (1.0 - distance) as f32)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [0.5_f32, 0.2, -0.3, 0.9];
        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = [1.0_f32, 0.0];
        let b = [0.0_f32, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_mismatched_lengths_fall_back_to_zero() {
        let a = [1.0_f32, 0.0];
        let b = [1.0_f32, 0.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }
}
