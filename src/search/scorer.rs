//! Similarity scoring between a query and corpus records.
//!
//! One scorer, three dimensions, dispatched once per record on a closed
//! enum. The string metric is injected ([`StringMetric`]) so swapping
//! edit distance for a normalized metric never touches dimension logic.
//!
//! Scores are distances: non-negative, 0 for a canonical match. A
//! representation/dimension pairing that cannot be scored fails with
//! `IncomparableQuery` — it is never coerced to a number.

use std::sync::Arc;

use crate::corpus::NameRecord;
use crate::error::{Result, SonanceError};
use crate::phonetic::{EditDistance, StringMetric};
use crate::query::{ComparisonDimension, SearchQuery};

/// Weights of the secondary scoring terms.
///
/// These are empirical tie-break weights carried over from the system this
/// engine replaces; they are configuration, not physics.
#[derive(Debug, Clone, Copy)]
pub struct ScorerConfig {
    /// Weight of the code-vs-code distance in the hybrid dimension.
    pub hybrid_code_weight: f64,
    /// Divisor applied to the secondary distance when breaking ties.
    pub tie_break_scale: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        ScorerConfig {
            hybrid_code_weight: 100.0,
            tie_break_scale: 100.0,
        }
    }
}

/// Scores records against a normalized query.
#[derive(Clone)]
pub struct SimilarityScorer {
    metric: Arc<dyn StringMetric>,
    config: ScorerConfig,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        SimilarityScorer::new(Arc::new(EditDistance::new()))
    }
}

impl SimilarityScorer {
    /// Create a scorer over the given string metric.
    pub fn new(metric: Arc<dyn StringMetric>) -> Self {
        SimilarityScorer {
            metric,
            config: ScorerConfig::default(),
        }
    }

    /// Create a scorer with custom weights.
    pub fn with_config(metric: Arc<dyn StringMetric>, config: ScorerConfig) -> Self {
        SimilarityScorer { metric, config }
    }

    /// The name of the underlying metric.
    pub fn metric_name(&self) -> &'static str {
        self.metric.name()
    }

    /// Score `record` against `query` on `dimension`. Lower is closer.
    pub fn score(
        &self,
        query: &SearchQuery,
        record: &NameRecord,
        dimension: ComparisonDimension,
    ) -> Result<f64> {
        match dimension {
            ComparisonDimension::Metaphone => self.score_metaphone(query, record),
            ComparisonDimension::Ipa => self.score_ipa(query, record),
            ComparisonDimension::Hybrid => self.score_hybrid(query, record),
        }
    }

    /// Code distance dominates; IPA distance refines ties when both sides
    /// carry a transcription.
    fn score_metaphone(&self, query: &SearchQuery, record: &NameRecord) -> Result<f64> {
        let query_code = query.phonetic_code.as_deref().ok_or_else(|| {
            SonanceError::incomparable(format!(
                "{} query has no phonetic code for the metaphone dimension",
                query.representation
            ))
        })?;

        let mut score = self.metric.distance(query_code, &record.phonetic_code);
        if let Some(ipa_distance) = self.record_ipa_distance(query, record) {
            score += ipa_distance / self.config.tie_break_scale;
        }
        Ok(score)
    }

    /// IPA distance dominates; code distance refines ties when both sides
    /// carry one.
    fn score_ipa(&self, query: &SearchQuery, record: &NameRecord) -> Result<f64> {
        if query.ipa.is_none() {
            return Err(SonanceError::incomparable(format!(
                "{} query has no transcription for the ipa dimension",
                query.representation
            )));
        }
        let ipa_distance = self.record_ipa_distance(query, record).ok_or_else(|| {
            SonanceError::incomparable(format!(
                "record {:?} has no transcription for the ipa dimension",
                record.name
            ))
        })?;

        let mut score = ipa_distance;
        if let Some(query_code) = query.phonetic_code.as_deref() {
            score +=
                self.metric.distance(query_code, &record.phonetic_code) / self.config.tie_break_scale;
        }
        Ok(score)
    }

    /// Legacy blend: code-vs-code distance at full weight plus the raw
    /// IPA-against-code cross distance.
    fn score_hybrid(&self, query: &SearchQuery, record: &NameRecord) -> Result<f64> {
        let (Some(query_code), Some(query_ipa)) =
            (query.phonetic_code.as_deref(), query.ipa.as_deref())
        else {
            return Err(SonanceError::incomparable(format!(
                "{} query cannot be scored on the hybrid dimension",
                query.representation
            )));
        };

        let code_distance = self.metric.distance(query_code, &record.phonetic_code);
        let cross_distance = self.metric.distance(query_ipa, &record.phonetic_code);
        Ok(self.config.hybrid_code_weight * code_distance + cross_distance)
    }

    /// Smallest distance between the query transcription and any of the
    /// record's transcriptions. `None` when either side has none.
    fn record_ipa_distance(&self, query: &SearchQuery, record: &NameRecord) -> Option<f64> {
        let query_ipa = query.ipa.as_deref()?;
        record
            .ipa
            .iter()
            .map(String::as_str)
            .chain(record.ipa_alternates.iter().map(String::as_str))
            .map(|record_ipa| self.metric.distance(query_ipa, record_ipa))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}
