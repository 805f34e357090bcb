//! Integration tests for query normalization and corpus ranking.

use std::sync::Arc;

use sonance::corpus::{Gender, InMemoryCorpus, NameRecord};
use sonance::error::Result;
use sonance::phonetic::JaroWinkler;
use sonance::query::{ComparisonDimension, InputRepresentation, QueryNormalizer};
use sonance::search::{Ranker, SimilarityScorer, TOP_K};
use sonance::service::{EnglishG2p, EnglishKeyer};

fn name_corpus() -> Vec<NameRecord> {
    vec![
        NameRecord::new("Jon", Gender::from("M"), "JN"),
        NameRecord::new("John", Gender::from("M"), "JN"),
        NameRecord::new("Jane", Gender::from("F"), "JN"),
        NameRecord::new("Jonas", Gender::from("M"), "JNS"),
        NameRecord::new("Sean", Gender::from("M"), "SN").with_ipa("ʃɔn"),
        NameRecord::new("Kristen", Gender::from("F"), "KRSTN"),
    ]
}

#[test]
fn test_metaphone_query_end_to_end() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("Jon", InputRepresentation::Metaphone, None)?
        .with_dimension(ComparisonDimension::Metaphone);
    // A metaphone query is compared as uppercased raw text.
    assert_eq!(query.phonetic_code.as_deref(), Some("JON"));

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &name_corpus())?;
    assert!(!results.is_empty());
    assert!(results.windows(2).all(|w| w[0].score <= w[1].score));
    Ok(())
}

#[test]
fn test_exact_code_matches_lead_in_corpus_order() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("JN", InputRepresentation::Metaphone, None)?
        .with_dimension(ComparisonDimension::Metaphone);

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &name_corpus())?;

    // Jon and John both score 0 and keep corpus order, ahead of everything
    // with a non-zero score.
    assert_eq!(results[0].record.name, "Jon");
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[1].record.name, "John");
    assert_eq!(results[1].score, 0.0);
    assert!(results[3].score > 0.0);
    Ok(())
}

#[test]
fn test_gender_filter_restricts_results() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("JN", InputRepresentation::Metaphone, None)?
        .with_gender_filter(Gender::from("M"));

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &name_corpus())?;

    assert!(!results.is_empty());
    assert!(results.iter().all(|m| m.record.gender == Gender::from("M")));
    Ok(())
}

#[test]
fn test_ipa_query_on_metaphone_dimension_yields_empty_result() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("ʃɔn", InputRepresentation::Ipa, None)?
        .with_dimension(ComparisonDimension::Metaphone);

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &name_corpus())?;
    assert!(results.is_empty());
    Ok(())
}

#[test]
fn test_ipa_query_on_ipa_dimension_matches_transcribed_records() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("ʃɔn", InputRepresentation::Ipa, None)?
        .with_dimension(ComparisonDimension::Ipa);

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &name_corpus())?;

    // Only Sean carries a transcription; everything else is incomparable.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.name, "Sean");
    assert_eq!(results[0].score, 0.0);
    Ok(())
}

#[test]
fn test_orthographic_query_full_stack() -> Result<()> {
    let normalizer = QueryNormalizer::new()
        .with_keyer(Arc::new(EnglishKeyer::new()))
        .with_g2p(Arc::new(EnglishG2p::new()));

    let query = normalizer
        .normalize("jon", InputRepresentation::Orthographic, None)?
        .with_dimension(ComparisonDimension::Metaphone);

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &name_corpus())?;

    assert_eq!(results[0].record.name, "Jon");
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[1].record.name, "John");
    Ok(())
}

#[test]
fn test_top_k_bound_holds() -> Result<()> {
    let corpus: Vec<NameRecord> = (0..30)
        .map(|i| NameRecord::new(format!("Name{i}"), Gender::Unspecified, "JN"))
        .collect();

    let query = QueryNormalizer::new()
        .normalize("JN", InputRepresentation::Metaphone, None)?;

    let ranker = Ranker::default();
    let results = ranker.rank(&query, &corpus)?;
    assert_eq!(results.len(), TOP_K);

    // With fewer comparable records than K, all of them come back.
    let small = ranker.rank(&query, &corpus[..4])?;
    assert_eq!(small.len(), 4);
    Ok(())
}

#[test]
fn test_ranking_is_deterministic() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("JNS", InputRepresentation::Metaphone, None)?;

    let ranker = Ranker::default();
    let first = ranker.rank(&query, &name_corpus())?;
    let second = ranker.rank(&query, &name_corpus())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_jaro_winkler_metric_swaps_in() -> Result<()> {
    let query = QueryNormalizer::new()
        .normalize("JN", InputRepresentation::Metaphone, None)?;

    let ranker = Ranker::new(SimilarityScorer::new(Arc::new(JaroWinkler::new())));
    let results = ranker.rank(&query, &name_corpus())?;

    assert!(!results.is_empty());
    assert_eq!(results[0].record.name, "Jon");
    assert_eq!(results[0].score, 0.0);
    assert!(results.windows(2).all(|w| w[0].score <= w[1].score));
    Ok(())
}

#[test]
fn test_corpus_loaded_from_json_file() -> Result<()> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"[
            {{"name": "Jon", "gender": "M", "phonetic_code": "JN"}},
            {{"name": "Jane", "gender": "F", "phonetic_code": "JN"}}
        ]"#
    )?;

    let corpus = InMemoryCorpus::from_json_file(file.path())?;
    let query = QueryNormalizer::new()
        .normalize("JN", InputRepresentation::Metaphone, None)?;

    let ranker = Ranker::default();
    let results = ranker.rank_from(&query, &corpus)?;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record.name, "Jon");
    Ok(())
}
