//! External capability boundaries.
//!
//! The conversion core composes three impure, library-backed services but
//! implements none of them: transliteration of tagged foreign-language text
//! to IPA, English grapheme-to-phoneme conversion, and the orthographic
//! phonetic key used for corpus precomputation. Each sits behind a narrow
//! trait so the rule engine stays pure and unit-testable with stubs.
//!
//! [`keyer::EnglishKeyer`] and [`g2p::EnglishG2p`] are self-contained
//! reference implementations of the two English-side services, good enough
//! for name matching without an external backend.

pub mod g2p;
pub mod keyer;

pub use g2p::EnglishG2p;
pub use keyer::EnglishKeyer;

use crate::error::Result;

/// A grapheme-to-phoneme result: one preferred transcription plus any
/// alternate pronunciations the backend knows.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    /// The preferred IPA transcription.
    pub primary: String,
    /// Alternate transcriptions, in preference order.
    pub alternates: Vec<String>,
}

impl Transcription {
    /// Create a transcription with no alternates.
    pub fn new<S: Into<String>>(primary: S) -> Self {
        Transcription {
            primary: primary.into(),
            alternates: Vec::new(),
        }
    }
}

/// Converts language-tagged orthographic text into an IPA transcription.
///
/// The core never implements foreign phonologies; it only routes the
/// returned transcription through the sound normalizer and the phonetic
/// encoder.
pub trait Transliterator: Send + Sync {
    /// Transliterate `text` written in the language identified by
    /// `language_tag` into IPA.
    fn transliterate(&self, text: &str, language_tag: &str) -> Result<String>;
}

/// Converts English spelling into IPA.
pub trait GraphemeToPhoneme: Send + Sync {
    /// Transcribe `text` into IPA, with alternates when known.
    fn to_ipa(&self, text: &str) -> Result<Transcription>;
}

/// Produces the orthographic phonetic key for English spelling.
///
/// This is a distinct, double-consonant-aware single-scan algorithm, not the
/// rewrite-rule encoder: it reads spelling, the encoder reads sound strings.
pub trait MetaphoneKeyer: Send + Sync {
    /// Compute the phonetic key of `text`.
    fn to_metaphone_key(&self, text: &str) -> Result<String>;
}
