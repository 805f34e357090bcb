//! Command implementations for the Sonance CLI.

use std::sync::Arc;

use serde_json::json;

use crate::cli::args::*;
use crate::corpus::{Gender, InMemoryCorpus};
use crate::error::{Result, SonanceError};
use crate::phonetic::{
    EditDistance, JaroWinkler, StringMetric, encode_phonetic, normalize_ipa_to_sound,
};
use crate::query::QueryNormalizer;
use crate::search::{Ranker, SimilarityScorer};
use crate::service::{EnglishG2p, EnglishKeyer};

/// Execute a CLI command.
pub fn execute_command(args: SonanceArgs) -> Result<()> {
    match &args.command {
        Command::Encode(encode_args) => encode(encode_args.clone(), &args),
        Command::Ipa(ipa_args) => ipa(ipa_args.clone(), &args),
        Command::Search(search_args) => search(search_args.clone(), &args),
    }
}

/// Encode a sound string.
fn encode(args: EncodeArgs, cli_args: &SonanceArgs) -> Result<()> {
    let code = encode_phonetic(&args.sound.to_lowercase());
    match cli_args.output_format {
        OutputFormat::Human => println!("{code}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "sound": args.sound,
                "phonetic_code": code,
            }))?
        ),
    }
    Ok(())
}

/// Normalize an IPA transcription and encode the result.
fn ipa(args: IpaArgs, cli_args: &SonanceArgs) -> Result<()> {
    let sound = normalize_ipa_to_sound(&args.ipa);
    let code = encode_phonetic(&sound);
    match cli_args.output_format {
        OutputFormat::Human => {
            println!("sound: {sound}");
            println!("code:  {code}");
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "ipa": args.ipa,
                "sound": sound,
                "phonetic_code": code,
            }))?
        ),
    }
    Ok(())
}

/// Rank a corpus file against a query.
fn search(args: SearchArgs, cli_args: &SonanceArgs) -> Result<()> {
    let corpus = InMemoryCorpus::from_json_file(&args.corpus)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} records from {}",
            corpus.len(),
            args.corpus.display()
        );
    }

    let metric: Arc<dyn StringMetric> = match args.metric.as_str() {
        "levenshtein" => Arc::new(EditDistance::new()),
        "jaro-winkler" => Arc::new(JaroWinkler::new()),
        other => {
            return Err(SonanceError::invalid_argument(format!(
                "unknown metric: {other}"
            )));
        }
    };

    let normalizer = QueryNormalizer::new()
        .with_keyer(Arc::new(EnglishKeyer::new()))
        .with_g2p(Arc::new(EnglishG2p::new()));

    let mut query = normalizer
        .normalize(
            &args.text,
            args.representation.parse()?,
            args.language.as_deref(),
        )?
        .with_dimension(args.dimension.parse()?);
    if let Some(gender) = &args.gender {
        query = query.with_gender_filter(Gender::from(gender.as_str()));
    }

    let ranker = Ranker::new(SimilarityScorer::new(metric));
    let results = ranker.rank(&query, corpus.records())?;

    match cli_args.output_format {
        OutputFormat::Human => {
            if results.is_empty() {
                println!("No comparable records.");
            }
            for (rank, hit) in results.iter().enumerate() {
                println!(
                    "{:>2}. {:<20} {:<8} {:<10} {:.4}",
                    rank + 1,
                    hit.record.name,
                    hit.record.gender,
                    hit.record.phonetic_code,
                    hit.score
                );
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "query": query,
                "results": results,
            }))?
        ),
    }
    Ok(())
}
