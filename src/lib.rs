//! # Sonance
//!
//! A phonetic name conversion and matching library for Rust.
//!
//! ## Features
//!
//! - IPA-to-English sound normalization with longest-symbol-first matching
//! - Rule-table phonetic encoding into compact consonant-skeleton codes
//! - Multi-dimensional similarity scoring with pluggable string metrics
//! - Top-K corpus ranking with stable, corpus-order tie-breaks
//! - Narrow capability traits for transliteration and transcription backends

pub mod cli;
pub mod corpus;
pub mod error;
pub mod phonetic;
pub mod query;
pub mod search;
pub mod service;

pub mod prelude {
    //! Convenience re-exports of the main public surface.
    pub use crate::corpus::{CorpusSource, Gender, InMemoryCorpus, NameRecord};
    pub use crate::error::{Result, SonanceError};
    pub use crate::phonetic::{encode_phonetic, normalize_ipa_to_sound};
    pub use crate::query::{
        ComparisonDimension, InputRepresentation, QueryNormalizer, SearchQuery,
    };
    pub use crate::search::{RankedMatch, Ranker, SimilarityScorer, TOP_K};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
