//! IPA-to-English sound normalization.
//!
//! Maps a string of International Phonetic Alphabet symbols to a plain-letter
//! approximation of its pronunciation in English orthography. The result is
//! the input format of the phonetic encoder.
//!
//! Matching is performed symbol-by-symbol with a leftmost-longest automaton,
//! never as a sequence of text substitution passes: some symbols are
//! multi-codepoint sequences (tie-bar affricates such as "d\u{361}\u{292}")
//! whose constituent codepoints carry their own table entries, and a
//! substitution pass would split and double-map them.

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};
use lazy_static::lazy_static;

use crate::error::{Result, SonanceError};

/// IPA symbols and their closest English sound equivalents.
///
/// Stress, length, and tone marks map to the empty string. Symbols absent
/// from the table (including plain Latin letters and spaces) pass through
/// unchanged.
const IPA_TO_ENGLISH: &[(&str, &str)] = &[
    // Tie-bar affricates. Multi-codepoint; the automaton must see these
    // before their constituents.
    ("t\u{361}\u{283}", "ch"),
    ("d\u{361}\u{292}", "j"),
    ("t\u{361}s", "ts"),
    ("d\u{361}z", "z"),
    // Vowels
    ("ɑ", "a"),
    ("æ", "ae"),
    ("ɐ", "a"),
    ("ɒ", "o"),
    ("ɔ", "o"),
    ("ɘ", "e"),
    ("ə", "e"),
    ("ɚ", "er"),
    ("ɛ", "e"),
    ("ɜ", "e"),
    ("ɝ", "er"),
    ("ɞ", "e"),
    ("ɤ", "o"),
    ("ɨ", "i"),
    ("ɪ", "i"),
    ("ɯ", "u"),
    ("ɵ", "o"),
    ("ɶ", "o"),
    ("ʅ", "ng"),
    ("ʉ", "u"),
    ("ʊ", "u"),
    ("ʌ", "a"),
    ("ʏ", "y"),
    ("ʘ", "o"),
    // Consonants
    ("ɕ", "sh"),
    ("ç", "sh"),
    ("ð", "th"),
    ("θ", "th"),
    ("ŋ", "ng"),
    ("ɟ", "j"),
    ("ɡ", "g"),
    ("ɣ", "h"),
    ("ɥ", "h"),
    ("ɦ", "h"),
    ("ɧ", "ng"),
    ("ɫ", "l"),
    ("ɬ", "l"),
    ("ɭ", "l"),
    ("ɮ", "l"),
    ("ɰ", "w"),
    ("ɱ", "m"),
    ("ɲ", "n"),
    ("ɳ", "n"),
    ("ɴ", "n"),
    ("ɸ", "f"),
    ("β", "v"),
    ("ɹ", "r"),
    ("ɺ", "r"),
    ("ɻ", "r"),
    ("ɼ", "r"),
    ("ɽ", "r"),
    ("ɾ", "r"),
    ("ɿ", "r"),
    ("ʀ", "r"),
    ("ʁ", "r"),
    ("ʂ", "sh"),
    ("ʃ", "sh"),
    ("ʄ", "j"),
    ("ʆ", "n"),
    ("ʇ", "n"),
    ("ʈ", "t"),
    ("ʋ", "v"),
    ("ʍ", "wh"),
    ("ʎ", "l"),
    ("ʐ", "r"),
    ("ʑ", "z"),
    ("ʒ", "zh"),
    ("ʓ", "zh"),
    ("ʔ", ""),
    ("ʕ", "h"),
    ("ʖ", "r"),
    ("ʗ", "r"),
    ("ʙ", "b"),
    ("ʚ", "h"),
    ("ʛ", "g"),
    ("ʜ", "h"),
    ("ʝ", "y"),
    ("ʞ", "k"),
    ("ʟ", "l"),
    ("ʠ", "q"),
    ("ʡ", "g"),
    ("ʢ", "n"),
    // Affricate ligatures
    ("ʣ", "z"),
    ("ʤ", "j"),
    ("ʥ", "j"),
    ("ʦ", "ts"),
    ("ʧ", "ch"),
    ("ʨ", "ch"),
    ("ʩ", "r"),
    ("ʪ", "l"),
    ("ʫ", "l"),
    ("ʬ", "l"),
    ("ʭ", "w"),
    ("ʮ", "h"),
    ("ʯ", "n"),
    // Stress, length, tone and other marks
    ("ˈ", ""),
    ("ˌ", ""),
    ("ː", ""),
    ("ˑ", ""),
    ("ˀ", ""),
    ("ˁ", ""),
    ("ˆ", ""),
    ("ˍ", ""),
    ("ˎ", ""),
    ("ˏ", ""),
    ("ˠ", ""),
    ("ˡ", ""),
    ("ˢ", ""),
    ("ˣ", ""),
    ("ˤ", ""),
    ("˥", ""),
    ("˦", ""),
    ("˧", ""),
    ("˨", ""),
    ("˩", ""),
    ("ˬ", ""),
    ("ˮ", ""),
    ("\u{361}", ""),
];

/// Maps IPA transcriptions to approximate English sound strings.
///
/// Construction compiles the symbol table into a leftmost-longest
/// aho-corasick automaton; build once and reuse.
pub struct SoundNormalizer {
    ac: AhoCorasick,
    replacements: Vec<&'static str>,
}

impl SoundNormalizer {
    /// Create a normalizer over the built-in symbol table.
    pub fn new() -> Result<Self> {
        Self::with_table(IPA_TO_ENGLISH)
    }

    /// Create a normalizer over a custom symbol table.
    pub fn with_table(table: &[(&str, &'static str)]) -> Result<Self> {
        let mut keys = Vec::with_capacity(table.len());
        let mut replacements = Vec::with_capacity(table.len());

        for (symbol, replacement) in table {
            keys.push(*symbol);
            replacements.push(*replacement);
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| SonanceError::analysis(format!("IPA symbol table: {e}")))?;

        Ok(Self { ac, replacements })
    }

    /// Map an IPA transcription to a lower-case English sound string.
    ///
    /// Unmapped symbols pass through unchanged, so word boundaries in the
    /// input survive in the output.
    pub fn normalize(&self, ipa: &str) -> String {
        let mut output = String::with_capacity(ipa.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(ipa) {
            output.push_str(&ipa[last_match_end..m.start()]);
            output.push_str(self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }
        output.push_str(&ipa[last_match_end..]);

        output.to_lowercase()
    }
}

lazy_static! {
    static ref DEFAULT_NORMALIZER: SoundNormalizer =
        SoundNormalizer::new().expect("built-in IPA symbol table must compile");
}

/// Map an IPA transcription to an English sound string using the built-in
/// symbol table.
pub fn normalize_ipa_to_sound(ipa: &str) -> String {
    DEFAULT_NORMALIZER.normalize(ipa)
}

/// The built-in symbol table as a map, for callers that want to inspect or
/// extend it before building a custom [`SoundNormalizer`].
pub fn default_symbol_table() -> HashMap<&'static str, &'static str> {
    IPA_TO_ENGLISH.iter().copied().collect()
}
