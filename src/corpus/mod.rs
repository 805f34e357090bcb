//! Name corpus types and the corpus source boundary.
//!
//! The corpus is read-only at query time. It is built once by an ingestion
//! step outside this crate and handed over either as a plain slice of
//! [`NameRecord`]s or through the [`CorpusSource`] capability. The `(name,
//! gender)` pair is unique within a corpus; this crate assumes the invariant
//! rather than enforcing it.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Categorical gender tag attached to a corpus record.
///
/// The tag set is whatever the corpus ingestion produced ("M", "F", ...);
/// records without a tag are `Unspecified`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Unspecified,
    Tagged(String),
}

impl Gender {
    /// Create a tagged gender value.
    pub fn tagged<S: Into<String>>(tag: S) -> Self {
        let tag = tag.into();
        if tag.is_empty() {
            Gender::Unspecified
        } else {
            Gender::Tagged(tag)
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unspecified
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Gender::tagged(s)
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        Gender::tagged(s)
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> String {
        match g {
            Gender::Unspecified => String::new(),
            Gender::Tagged(tag) => tag,
        }
    }
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Gender::tagged(s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Unspecified => write!(f, "unspecified"),
            Gender::Tagged(tag) => write!(f, "{tag}"),
        }
    }
}

/// A single corpus entry: a name with its precomputed phonetic
/// representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    /// The name as stored in the corpus.
    pub name: String,
    /// Categorical tag used by the gender filter.
    #[serde(default)]
    pub gender: Gender,
    /// Precomputed orthographic phonetic key.
    pub phonetic_code: String,
    /// Primary IPA transcription, when the ingestion step produced one.
    #[serde(default)]
    pub ipa: Option<String>,
    /// Alternate IPA transcriptions, in preference order.
    #[serde(default)]
    pub ipa_alternates: Vec<String>,
}

impl NameRecord {
    /// Create a record with the required fields.
    pub fn new<S1, S2>(name: S1, gender: Gender, phonetic_code: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        NameRecord {
            name: name.into(),
            gender,
            phonetic_code: phonetic_code.into(),
            ipa: None,
            ipa_alternates: Vec::new(),
        }
    }

    /// Attach a primary IPA transcription.
    pub fn with_ipa<S: Into<String>>(mut self, ipa: S) -> Self {
        self.ipa = Some(ipa.into());
        self
    }

    /// Attach alternate IPA transcriptions.
    pub fn with_ipa_alternates(mut self, alternates: Vec<String>) -> Self {
        self.ipa_alternates = alternates;
        self
    }

    /// A record missing its required fields is skipped during ranking
    /// instead of aborting the query.
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && !self.phonetic_code.is_empty()
    }
}

/// Capability supplying the corpus snapshot, implemented by the storage
/// layer outside this crate.
pub trait CorpusSource: Send + Sync {
    /// Fetch every record, in corpus order. The order is meaningful: it is
    /// the tie-break order of the ranker.
    fn fetch_all(&self) -> Result<Vec<NameRecord>>;
}

/// A corpus held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    records: Vec<NameRecord>,
}

impl InMemoryCorpus {
    /// Create a corpus from records, preserving their order.
    pub fn new(records: Vec<NameRecord>) -> Self {
        InMemoryCorpus { records }
    }

    /// Parse a corpus from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<NameRecord> = serde_json::from_str(json)?;
        Ok(InMemoryCorpus { records })
    }

    /// Load a corpus from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The records, in corpus order.
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the corpus holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CorpusSource for InMemoryCorpus {
    fn fetch_all(&self) -> Result<Vec<NameRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from(""), Gender::Unspecified);
        assert_eq!(Gender::from("M"), Gender::Tagged("M".to_string()));
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Tagged("F".into()));
    }

    #[test]
    fn test_record_well_formed() {
        let good = NameRecord::new("Jon", Gender::from("M"), "JN");
        assert!(good.is_well_formed());

        let no_code = NameRecord::new("Jon", Gender::from("M"), "");
        assert!(!no_code.is_well_formed());

        let no_name = NameRecord::new("", Gender::Unspecified, "JN");
        assert!(!no_name.is_well_formed());
    }

    #[test]
    fn test_corpus_from_json() {
        let json = r#"[
            {"name": "Jon", "gender": "M", "phonetic_code": "JN", "ipa": "dʒɑn"},
            {"name": "Jane", "gender": "F", "phonetic_code": "JN",
             "ipa_alternates": ["dʒeɪn"]},
            {"name": "Ash", "phonetic_code": "AX"}
        ]"#;

        let corpus = InMemoryCorpus::from_json_str(json).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.records()[0].name, "Jon");
        assert_eq!(corpus.records()[0].gender, Gender::from("M"));
        assert_eq!(corpus.records()[0].ipa.as_deref(), Some("dʒɑn"));
        assert_eq!(corpus.records()[1].ipa_alternates, vec!["dʒeɪn"]);
        assert_eq!(corpus.records()[2].gender, Gender::Unspecified);
    }

    #[test]
    fn test_fetch_all_preserves_order() {
        let records = vec![
            NameRecord::new("B", Gender::Unspecified, "B"),
            NameRecord::new("A", Gender::Unspecified, "A"),
        ];
        let corpus = InMemoryCorpus::new(records.clone());
        assert_eq!(corpus.fetch_all().unwrap(), records);
    }

    #[test]
    fn test_gender_round_trips_through_json() {
        let record = NameRecord::new("Jon", Gender::from("M"), "JN");
        let json = serde_json::to_string(&record).unwrap();
        let back: NameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
