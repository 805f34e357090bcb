//! Phonetic conversion primitives.
//!
//! The conversion chain runs IPA transcription → English sound string →
//! phonetic code:
//!
//! ```text
//! "ʃɔn"  --normalize_ipa_to_sound-->  "shon"  --encode_phonetic-->  "SON"
//! ```

pub mod encoder;
pub mod ipa;
pub mod metric;

pub use encoder::{RULES, Rule, RuleAction, encode_phonetic};
pub use ipa::{SoundNormalizer, default_symbol_table, normalize_ipa_to_sound};
pub use metric::{EditDistance, JaroWinkler, StringMetric, levenshtein_distance};
