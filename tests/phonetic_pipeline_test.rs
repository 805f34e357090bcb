//! Integration tests for the conversion chain: IPA normalization, phonetic
//! encoding, and the reference transcription services.

use std::sync::Arc;

use sonance::error::Result;
use sonance::phonetic::{encode_phonetic, normalize_ipa_to_sound};
use sonance::query::{InputRepresentation, QueryNormalizer};
use sonance::service::{EnglishG2p, EnglishKeyer, GraphemeToPhoneme, MetaphoneKeyer};

#[test]
fn test_ipa_symbols_map_to_english_sounds() {
    assert_eq!(normalize_ipa_to_sound("ʃ"), "sh");
    assert_eq!(normalize_ipa_to_sound("ɜ"), "e");
    assert_eq!(normalize_ipa_to_sound("ɞ"), "e");
    assert_eq!(normalize_ipa_to_sound("ɔ"), "o");
}

#[test]
fn test_affricates_map_as_single_symbols() {
    // Tie-bar and ligature forms agree, and neither is split into its
    // constituent codepoints.
    assert_eq!(normalize_ipa_to_sound("d\u{361}\u{292}"), "j");
    assert_eq!(normalize_ipa_to_sound("ʤ"), "j");
    assert_eq!(normalize_ipa_to_sound("t\u{361}\u{283}"), "ch");
    assert_eq!(normalize_ipa_to_sound("ʧ"), "ch");
}

#[test]
fn test_rule_order_is_load_bearing() {
    assert_eq!(encode_phonetic("watch"), "WAX");
}

#[test]
fn test_encoding_is_idempotent_on_own_output() {
    for word in ["watson", "smith", "knight", "phone", "brown"] {
        let once = encode_phonetic(word);
        let twice = encode_phonetic(&once.to_lowercase());
        assert_eq!(once, twice, "code for {word} drifted on re-encoding");
    }
}

#[test]
fn test_ipa_transcription_to_code() {
    // ʃɔn -> "shon" -> SON
    let sound = normalize_ipa_to_sound("ʃɔn");
    assert_eq!(sound, "shon");
    assert_eq!(encode_phonetic(&sound), "SON");
}

#[test]
fn test_reference_keyer_agrees_on_homophones() -> Result<()> {
    let keyer = EnglishKeyer::new();
    assert_eq!(
        keyer.to_metaphone_key("Jon")?,
        keyer.to_metaphone_key("John")?
    );
    assert_eq!(
        keyer.to_metaphone_key("Smith")?,
        keyer.to_metaphone_key("Smyth")?
    );
    Ok(())
}

#[test]
fn test_reference_g2p_feeds_the_chain() -> Result<()> {
    let g2p = EnglishG2p::new();
    let transcription = g2p.to_ipa("shannon")?;
    let sound = normalize_ipa_to_sound(&transcription.primary);
    let code = encode_phonetic(&sound);
    assert!(!code.is_empty());
    assert!(code.chars().all(|c| c.is_ascii_uppercase() || c == '0'));
    Ok(())
}

#[test]
fn test_orthographic_normalization_end_to_end() -> Result<()> {
    let normalizer = QueryNormalizer::new()
        .with_keyer(Arc::new(EnglishKeyer::new()))
        .with_g2p(Arc::new(EnglishG2p::new()));

    let query = normalizer.normalize("jon", InputRepresentation::Orthographic, None)?;
    assert_eq!(query.raw_text, "Jon");
    assert_eq!(query.phonetic_code.as_deref(), Some("JN"));
    assert!(query.ipa.is_some());
    Ok(())
}
