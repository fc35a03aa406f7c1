//! Weight sweep for tuning the semantic/keyword balance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, XystonError};
use crate::search::engine::HybridSearchEngine;
use crate::search::types::SearchOptions;
use crate::store::types::{DEFAULT_KEYWORD_WEIGHT, DEFAULT_SEMANTIC_WEIGHT};
use crate::store::SimilarityStore;

/// Result cap used for every point of a sweep.
const SWEEP_MATCH_COUNT: usize = 5;

/// Outcome of one weight combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    pub semantic_weight: f32,
    pub keyword_weight: f32,
    /// Results returned at this combination.
    pub result_count: usize,
    /// Mean hybrid score of the results, 0.0 when none matched.
    pub avg_score: f32,
    /// True when the results carried both signals.
    pub has_both_signals: bool,
    /// Failure message when this point could not be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A full sweep across the weight spectrum for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSweep {
    pub query: String,
    /// One point per combination, semantic weight ascending from 0.0.
    pub combinations: Vec<WeightPoint>,
    /// Best-scoring (semantic, keyword) pair.
    pub optimal: (f32, f32),
    pub recommendation: String,
}

impl<P: EmbeddingProvider, S: SimilarityStore> HybridSearchEngine<P, S> {
    /// Sweep the semantic weight from 0.0 to 1.0 in `steps` increments
    /// and report which combination scores best for this query.
    ///
    /// A failed point is recorded with its error message instead of
    /// aborting the sweep; if every point fails the optimum falls back
    /// to the stock 0.6/0.4 split. Sweeps are meant to stay small, on
    /// the order of ten steps.
    pub async fn find_optimal_weights(&self, query: &str, steps: usize) -> Result<WeightSweep> {
        if steps == 0 {
            return Err(XystonError::validation("weight sweep needs at least 1 step"));
        }

        let mut combinations = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let semantic_weight = i as f32 / steps as f32;
            let keyword_weight = 1.0 - semantic_weight;
            let options = SearchOptions::default()
                .with_weights(semantic_weight, keyword_weight)
                .with_count(SWEEP_MATCH_COUNT);

            match self.search(query, &options).await {
                Ok(response) => {
                    let result_count = response.len();
                    let avg_score = if result_count == 0 {
                        0.0
                    } else {
                        response.results.iter().map(|m| m.hybrid_score).sum::<f32>()
                            / result_count as f32
                    };
                    combinations.push(WeightPoint {
                        semantic_weight,
                        keyword_weight,
                        result_count,
                        avg_score,
                        has_both_signals: response.timing.has_semantic
                            && response.timing.has_keywords,
                        error: None,
                    });
                }
                Err(err) => {
                    debug!(semantic_weight, error = %err, "sweep point failed");
                    combinations.push(WeightPoint {
                        semantic_weight,
                        keyword_weight,
                        result_count: 0,
                        avg_score: 0.0,
                        has_both_signals: false,
                        error: Some(err.to_string()),
                    });
                }
            }
        }

        // First strictly-best point wins; ties keep the earlier (more
        // keyword-leaning) combination.
        let mut best: Option<(f32, f32, f32)> = None;
        for point in &combinations {
            if point.error.is_some() {
                continue;
            }
            if best.is_none_or(|(avg, _, _)| point.avg_score > avg) {
                best = Some((point.avg_score, point.semantic_weight, point.keyword_weight));
            }
        }
        let optimal = best
            .map(|(_, semantic, keyword)| (semantic, keyword))
            .unwrap_or((DEFAULT_SEMANTIC_WEIGHT, DEFAULT_KEYWORD_WEIGHT));

        let recommendation = format!(
            "Use semantic_weight={:.1} and keyword_weight={:.1} for this query",
            optimal.0, optimal.1
        );

        Ok(WeightSweep {
            query: query.to_string(),
            combinations,
            optimal,
            recommendation,
        })
    }
}
