//! Ranking a corpus against a query.
//!
//! The ranker is a single synchronous pass: filter, score, stable sort,
//! truncate. The corpus slice is read-only throughout; ties keep the
//! corpus's relative order, which makes the tie-break policy a property of
//! the data rather than of the sort implementation.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusSource, NameRecord};
use crate::error::Result;
use crate::query::SearchQuery;
use crate::search::scorer::SimilarityScorer;

/// Maximum number of matches a ranking returns.
pub const TOP_K: usize = 10;

/// A corpus record paired with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// The matched record.
    pub record: NameRecord,
    /// Distance to the query; lower is closer.
    pub score: f64,
}

/// Ranks corpus records by phonetic closeness to a query.
#[derive(Clone, Default)]
pub struct Ranker {
    scorer: SimilarityScorer,
}

impl Ranker {
    /// Create a ranker over the given scorer.
    pub fn new(scorer: SimilarityScorer) -> Self {
        Ranker { scorer }
    }

    /// Rank `corpus` against `query`, returning the closest [`TOP_K`]
    /// records in ascending score order.
    ///
    /// Records that fail the gender filter, are malformed, or cannot be
    /// compared on the query's dimension are excluded; an exclusion never
    /// aborts the query. Equal scores keep corpus order.
    pub fn rank(&self, query: &SearchQuery, corpus: &[NameRecord]) -> Result<Vec<RankedMatch>> {
        let mut matches = Vec::new();

        for record in corpus {
            if let Some(filter) = &query.gender_filter {
                if record.gender != *filter {
                    continue;
                }
            }
            if !record.is_well_formed() {
                debug!("skipping malformed corpus record {:?}", record.name);
                continue;
            }

            match self.scorer.score(query, record, query.dimension) {
                Ok(score) => matches.push(RankedMatch {
                    record: record.clone(),
                    score,
                }),
                Err(e) if e.is_incomparable() => {
                    debug!("excluding record {:?}: {e}", record.name);
                }
                Err(e) => return Err(e),
            }
        }

        // Stable by contract: equal scores keep corpus order.
        matches.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        matches.truncate(TOP_K);
        Ok(matches)
    }

    /// Fetch the corpus snapshot from `source` and rank it.
    pub fn rank_from(
        &self,
        query: &SearchQuery,
        source: &dyn CorpusSource,
    ) -> Result<Vec<RankedMatch>> {
        let corpus = source.fetch_all()?;
        self.rank(query, &corpus)
    }
}
