//! Rule-based English grapheme-to-phoneme conversion.
//!
//! A best-effort approximation for names: digraphs first, then single
//! letters. A dictionary- or model-backed [`GraphemeToPhoneme`] will beat it
//! on real vocabulary; this one exists so the crate works end to end without
//! an external backend.

use crate::error::{Result, SonanceError};
use crate::service::{GraphemeToPhoneme, Transcription};

/// Reference implementation of [`GraphemeToPhoneme`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishG2p;

/// Two-letter groups, tried before single letters.
const DIGRAPHS: &[(&str, &str)] = &[
    ("th", "θ"),
    ("sh", "ʃ"),
    ("ch", "t\u{361}\u{283}"),
    ("ph", "f"),
    ("wh", "w"),
    ("ng", "ŋ"),
    ("ck", "k"),
    ("qu", "kw"),
    ("ee", "i"),
    ("ea", "i"),
    ("oo", "u"),
    ("ou", "aʊ"),
    ("ow", "oʊ"),
    ("ai", "eɪ"),
    ("ay", "eɪ"),
    ("oi", "ɔɪ"),
    ("oy", "ɔɪ"),
];

impl EnglishG2p {
    /// Create a new converter.
    pub fn new() -> Self {
        EnglishG2p
    }

    fn word_to_ipa(word: &str) -> String {
        let chars: Vec<char> = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let len = chars.len();
        let mut ipa = String::new();
        let mut i = 0;

        while i < len {
            if i + 1 < len {
                let pair: String = chars[i..i + 2].iter().collect();
                if let Some((_, replacement)) =
                    DIGRAPHS.iter().find(|(digraph, _)| *digraph == pair)
                {
                    ipa.push_str(replacement);
                    i += 2;
                    continue;
                }
            }

            match chars[i] {
                'a' => ipa.push('æ'),
                'b' => ipa.push('b'),
                'c' => {
                    if matches!(chars.get(i + 1), Some('e' | 'i' | 'y')) {
                        ipa.push('s');
                    } else {
                        ipa.push('k');
                    }
                }
                'd' => ipa.push('d'),
                'e' => {
                    // Terminal e is silent.
                    if i != len - 1 || ipa.is_empty() {
                        ipa.push('ɛ');
                    }
                }
                'f' => ipa.push('f'),
                'g' => {
                    if matches!(chars.get(i + 1), Some('e' | 'i' | 'y')) {
                        ipa.push_str("d\u{361}\u{292}");
                    } else {
                        ipa.push('ɡ');
                    }
                }
                'h' => ipa.push('h'),
                'i' => ipa.push('ɪ'),
                'j' => ipa.push_str("d\u{361}\u{292}"),
                'k' => ipa.push('k'),
                'l' => ipa.push('l'),
                'm' => ipa.push('m'),
                'n' => ipa.push('n'),
                'o' => ipa.push('ɑ'),
                'p' => ipa.push('p'),
                'q' => ipa.push('k'),
                'r' => ipa.push('ɹ'),
                's' => ipa.push('s'),
                't' => ipa.push('t'),
                'u' => ipa.push('ʌ'),
                'v' => ipa.push('v'),
                'w' => ipa.push('w'),
                'x' => ipa.push_str("ks"),
                'y' => {
                    if i == 0 {
                        ipa.push('j');
                    } else {
                        ipa.push('ɪ');
                    }
                }
                'z' => ipa.push('z'),
                _ => {}
            }
            i += 1;
        }

        ipa
    }
}

impl GraphemeToPhoneme for EnglishG2p {
    fn to_ipa(&self, text: &str) -> Result<Transcription> {
        let ipa = text
            .split_whitespace()
            .map(Self::word_to_ipa)
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if ipa.is_empty() {
            return Err(SonanceError::empty_transcription(format!(
                "no transcribable text in {text:?}"
            )));
        }
        Ok(Transcription::new(ipa))
    }
}
