//! Search queries and query normalization.
//!
//! A caller declares what its raw text *is* (spelling, IPA, a ready-made
//! phonetic code, or tagged foreign-language text); the
//! [`QueryNormalizer`] derives the canonical pair of representations —
//! phonetic code and IPA transcription — that scoring works on. Derivation
//! happens once per query; fields that do not apply to the declared
//! representation stay `None`, and scoring decides later whether that makes
//! a given comparison impossible.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::Gender;
use crate::error::{Result, SonanceError};
use crate::phonetic::{encode_phonetic, normalize_ipa_to_sound};
use crate::service::{GraphemeToPhoneme, MetaphoneKeyer, Transliterator};

/// What the raw query text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputRepresentation {
    /// English spelling.
    Orthographic,
    /// An IPA transcription, passed through as-is.
    Ipa,
    /// A phonetic code, compared directly.
    Metaphone,
    /// Foreign-language spelling to be transliterated into IPA.
    Transliterated,
}

impl InputRepresentation {
    /// All supported representations.
    pub const ALL: &'static [InputRepresentation] = &[
        InputRepresentation::Orthographic,
        InputRepresentation::Ipa,
        InputRepresentation::Metaphone,
        InputRepresentation::Transliterated,
    ];

    /// The textual name of this representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputRepresentation::Orthographic => "orthographic",
            InputRepresentation::Ipa => "ipa",
            InputRepresentation::Metaphone => "metaphone",
            InputRepresentation::Transliterated => "transliterated",
        }
    }
}

impl fmt::Display for InputRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputRepresentation {
    type Err = SonanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "orthographic" => Ok(InputRepresentation::Orthographic),
            "ipa" => Ok(InputRepresentation::Ipa),
            "metaphone" => Ok(InputRepresentation::Metaphone),
            "transliterated" => Ok(InputRepresentation::Transliterated),
            other => Err(SonanceError::unsupported_representation(other)),
        }
    }
}

/// The axis a query is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonDimension {
    /// Phonetic-code distance, IPA distance as tie-break.
    Metaphone,
    /// IPA distance, phonetic-code distance as tie-break.
    Ipa,
    /// Legacy weighted blend of code distance and IPA-against-code distance.
    Hybrid,
}

impl ComparisonDimension {
    /// The textual name of this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonDimension::Metaphone => "metaphone",
            ComparisonDimension::Ipa => "ipa",
            ComparisonDimension::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for ComparisonDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonDimension {
    type Err = SonanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "metaphone" => Ok(ComparisonDimension::Metaphone),
            "ipa" => Ok(ComparisonDimension::Ipa),
            "hybrid" => Ok(ComparisonDimension::Hybrid),
            other => Err(SonanceError::invalid_argument(format!(
                "unknown comparison dimension: {other}"
            ))),
        }
    }
}

/// A normalized search query.
///
/// `phonetic_code` and `ipa` are derived once by [`QueryNormalizer`] and are
/// `None` when the declared representation cannot supply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The query text as submitted (capitalized for orthographic input).
    pub raw_text: String,
    /// What `raw_text` is.
    pub representation: InputRepresentation,
    /// The axis to score on.
    pub dimension: ComparisonDimension,
    /// Restrict results to records with exactly this gender.
    pub gender_filter: Option<Gender>,
    /// Language tag for transliterated input.
    pub language: Option<String>,
    /// Derived phonetic code.
    pub phonetic_code: Option<String>,
    /// Derived IPA transcription.
    pub ipa: Option<String>,
}

impl SearchQuery {
    /// Set the comparison dimension.
    pub fn with_dimension(mut self, dimension: ComparisonDimension) -> Self {
        self.dimension = dimension;
        self
    }

    /// Restrict results to a gender.
    pub fn with_gender_filter(mut self, gender: Gender) -> Self {
        self.gender_filter = Some(gender);
        self
    }
}

/// Derives the canonical representations of a query.
///
/// The three conversion services are optional: a normalizer without a
/// grapheme-to-phoneme backend still handles orthographic queries, it just
/// leaves the IPA field empty the same way an empty transcription would.
#[derive(Clone, Default)]
pub struct QueryNormalizer {
    keyer: Option<Arc<dyn MetaphoneKeyer>>,
    g2p: Option<Arc<dyn GraphemeToPhoneme>>,
    transliterator: Option<Arc<dyn Transliterator>>,
}

impl QueryNormalizer {
    /// Create a normalizer with no conversion services installed.
    pub fn new() -> Self {
        QueryNormalizer::default()
    }

    /// Install the orthographic phonetic key service.
    pub fn with_keyer(mut self, keyer: Arc<dyn MetaphoneKeyer>) -> Self {
        self.keyer = Some(keyer);
        self
    }

    /// Install the English grapheme-to-phoneme service.
    pub fn with_g2p(mut self, g2p: Arc<dyn GraphemeToPhoneme>) -> Self {
        self.g2p = Some(g2p);
        self
    }

    /// Install the transliteration service.
    pub fn with_transliterator(mut self, transliterator: Arc<dyn Transliterator>) -> Self {
        self.transliterator = Some(transliterator);
        self
    }

    /// Normalize raw text declared as `representation` into a query.
    ///
    /// `language` is only consulted for transliterated input. The returned
    /// query scores on the metaphone dimension with no gender filter;
    /// adjust with [`SearchQuery::with_dimension`] and
    /// [`SearchQuery::with_gender_filter`].
    pub fn normalize(
        &self,
        raw_text: &str,
        representation: InputRepresentation,
        language: Option<&str>,
    ) -> Result<SearchQuery> {
        let mut query = SearchQuery {
            raw_text: raw_text.to_string(),
            representation,
            dimension: ComparisonDimension::Metaphone,
            gender_filter: None,
            language: language.map(str::to_string),
            phonetic_code: None,
            ipa: None,
        };

        match representation {
            InputRepresentation::Orthographic => {
                query.raw_text = capitalize(raw_text);
                query.phonetic_code = match &self.keyer {
                    Some(keyer) => absent_if_empty(keyer.to_metaphone_key(raw_text))?,
                    None => None,
                };
                query.ipa = match &self.g2p {
                    Some(g2p) => {
                        absent_if_empty(g2p.to_ipa(raw_text).map(|t| t.primary))?
                    }
                    None => None,
                };
            }
            InputRepresentation::Ipa => {
                query.ipa = Some(raw_text.to_string());
            }
            InputRepresentation::Metaphone => {
                query.phonetic_code = Some(raw_text.to_uppercase());
            }
            InputRepresentation::Transliterated => {
                let ipa = match (&self.transliterator, language) {
                    (Some(transliterator), Some(language)) => {
                        absent_if_empty(transliterator.transliterate(raw_text, language))?
                    }
                    _ => {
                        debug!(
                            "transliterated query {raw_text:?} without a \
                             transliterator/language, derived fields stay empty"
                        );
                        None
                    }
                };
                if let Some(ipa) = &ipa {
                    query.phonetic_code =
                        Some(encode_phonetic(&normalize_ipa_to_sound(ipa)));
                }
                query.ipa = ipa;
            }
        }

        Ok(query)
    }
}

/// Map an empty-transcription failure to an absent field; other errors
/// propagate.
fn absent_if_empty(result: Result<String>) -> Result<Option<String>> {
    match result {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(SonanceError::EmptyTranscription(reason)) => {
            debug!("transcription service returned nothing: {reason}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Upper-case the first letter, lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
    }
}
