//! Orthographic phonetic keys for English spelling.
//!
//! A single left-to-right scan over the spelling, collapsing doubled
//! letters and mapping letter groups to sound symbols. Distinct from the
//! sound-string encoder: this one knows about English spelling quirks
//! (silent gh, soft c before e/i/y, terminal silent e) that a sound string
//! no longer contains.

use crate::error::{Result, SonanceError};
use crate::service::MetaphoneKeyer;

/// Reference implementation of [`MetaphoneKeyer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishKeyer;

impl EnglishKeyer {
    /// Create a new keyer.
    pub fn new() -> Self {
        EnglishKeyer
    }

    /// Key a single word of English spelling.
    fn key_word(word: &str) -> String {
        let chars: Vec<char> = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let len = chars.len();
        let mut key = String::new();
        let mut i = 0;

        // Silent first letters.
        if len >= 2 {
            match (chars[0], chars[1]) {
                ('a', 'e') | ('g', 'n') | ('k', 'n') | ('p', 'n') | ('w', 'r') => i = 1,
                ('w', 'h') => {
                    key.push('W');
                    i = 2;
                }
                ('x', _) => {
                    key.push('S');
                    i = 1;
                }
                _ => {}
            }
        }

        while i < len {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            // Doubled letters key once.
            if i > 0 && chars[i - 1] == c {
                i += 1;
                continue;
            }

            match c {
                'a' | 'e' | 'i' | 'o' | 'u' => {
                    // Vowels key only when they open the word; a terminal e
                    // is silent either way.
                    if key.is_empty() && !(c == 'e' && i == len - 1) {
                        key.push(c.to_ascii_uppercase());
                    }
                    i += 1;
                }
                'b' => {
                    // Silent b in a terminal "mb".
                    let after_m = i > 0 && chars[i - 1] == 'm';
                    if !(after_m && i == len - 1) {
                        key.push('B');
                    }
                    i += 1;
                }
                'c' => {
                    if next == Some('h') {
                        key.push('X');
                        i += 2;
                    } else if matches!(next, Some('i') | Some('e') | Some('y')) {
                        key.push('S');
                        i += 1;
                    } else {
                        key.push('K');
                        // ck keys once.
                        if next == Some('k') {
                            i += 1;
                        }
                        i += 1;
                    }
                }
                'd' => {
                    if next == Some('g') && matches!(chars.get(i + 2), Some('e' | 'i' | 'y')) {
                        key.push('J');
                        i += 3;
                    } else {
                        key.push('T');
                        i += 1;
                    }
                }
                'g' => {
                    if next == Some('h') {
                        // Silent gh.
                        i += 2;
                    } else if next == Some('n') && i + 2 >= len {
                        // Silent g in a terminal "gn".
                        i += 1;
                    } else if matches!(next, Some('e') | Some('i') | Some('y')) {
                        key.push('J');
                        i += 1;
                    } else {
                        key.push('K');
                        i += 1;
                    }
                }
                'h' => {
                    // h keys word-initially or between vowels, silent
                    // otherwise.
                    let prev_vowel = i > 0 && matches!(chars[i - 1], 'a' | 'e' | 'i' | 'o' | 'u');
                    let next_vowel = matches!(next, Some('a' | 'e' | 'i' | 'o' | 'u'));
                    if i == 0 || (prev_vowel && next_vowel) {
                        key.push('H');
                    }
                    i += 1;
                }
                'p' => {
                    if next == Some('h') {
                        key.push('F');
                        i += 2;
                    } else {
                        key.push('P');
                        i += 1;
                    }
                }
                'q' => {
                    key.push('K');
                    i += 1;
                }
                's' => {
                    if next == Some('h') {
                        key.push('X');
                        i += 2;
                    } else {
                        key.push('S');
                        i += 1;
                    }
                }
                't' => {
                    if next == Some('h') {
                        key.push('0');
                        i += 2;
                    } else if next == Some('c') && chars.get(i + 2) == Some(&'h') {
                        // Silent t before ch.
                        i += 1;
                    } else {
                        key.push('T');
                        i += 1;
                    }
                }
                'v' => {
                    key.push('F');
                    i += 1;
                }
                'w' => {
                    if matches!(next, Some('a' | 'e' | 'i' | 'o' | 'u')) {
                        key.push('W');
                    }
                    i += 1;
                }
                'x' => {
                    key.push('K');
                    key.push('S');
                    i += 1;
                }
                'y' => {
                    if matches!(next, Some('a' | 'e' | 'i' | 'o' | 'u')) {
                        key.push('Y');
                    }
                    i += 1;
                }
                'z' => {
                    key.push('S');
                    i += 1;
                }
                other => {
                    key.push(other.to_ascii_uppercase());
                    i += 1;
                }
            }
        }

        key
    }
}

impl MetaphoneKeyer for EnglishKeyer {
    fn to_metaphone_key(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(SonanceError::empty_transcription(
                "no text to key".to_string(),
            ));
        }
        Ok(text
            .split_whitespace()
            .map(Self::key_word)
            .collect::<Vec<_>>()
            .join(" "))
    }
}
