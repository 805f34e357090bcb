//! Similarity scoring and corpus ranking.

pub mod ranker;
pub mod scorer;

pub use ranker::{RankedMatch, Ranker, TOP_K};
pub use scorer::{ScorerConfig, SimilarityScorer};
