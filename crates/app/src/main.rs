//! huffpack: build a coding tree from a text and round trip it through the
//! packed word format.
//!
//! The pipeline is strictly sequential:
//! read input -> count -> build tree -> encode -> decode -> verify -> summary

mod config;
mod input_gen;

use std::process::ExitCode;

use config::{Config, InputSource};
use huffpack_core::{render, stats::CodecStats, Codec, Error, FrequencyTable, PackedBuffer, Result};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run once; `Ok(false)` means the round trip did not reproduce the input.
fn run(args: &[String]) -> Result<bool> {
    let config = Config::from_args(args).map_err(Error::Config)?;
    if config.print_config {
        config.print();
    }

    let input = load_input(&config.input)?;
    tracing::debug!(bytes = input.len(), "input loaded");

    let codec = Codec::from_sample(&input)?;

    if config.print_tree {
        println!("=== Tree ===");
        print!("{}", render(codec.tree()));
        println!();
    }

    if config.print_codes {
        print_codes(&codec);
    }

    match &config.words {
        Some(words) => decode_words(&codec, words),
        None => round_trip(&config, &codec, &input),
    }
}

fn load_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::File(path) => Ok(std::fs::read(path)?),
        InputSource::Text(text) => Ok(text.as_bytes().to_vec()),
        InputSource::Sample { seed, bytes } => Ok(input_gen::generate_sample_text(*seed, *bytes)),
    }
}

fn print_codes(codec: &Codec) {
    println!("=== Codes ===");
    for (symbol, path) in codec.codes().iter() {
        println!("{:>6}  {}", format!("'{}'", symbol.escape_ascii()), path);
    }
    println!();
}

/// Decode an existing buffer against the tree and print the text.
fn decode_words(codec: &Codec, words: &[i32]) -> Result<bool> {
    let packed = PackedBuffer::from_words(words)?;
    let decoded = codec.decode(&packed)?;
    tracing::debug!(chars = decoded.len(), "words decoded");

    println!("{}", String::from_utf8_lossy(&decoded));
    Ok(true)
}

fn round_trip(config: &Config, codec: &Codec, input: &[u8]) -> Result<bool> {
    let mut stats = CodecStats::new();
    let table = FrequencyTable::from_bytes(input);
    stats.input_bytes = table.total();
    stats.distinct_symbols = table.used_symbols();
    stats.tree_height = codec.tree().height();
    stats.max_code_length = codec.codes().max_code_length();

    let packed = codec.encode(input)?;
    let payload_bits = codec.codes().encoded_bits(input).unwrap_or(0);
    stats.record_packed(&packed, payload_bits as u64);

    if config.print_words {
        let words: Vec<String> = packed.to_words().iter().map(i32::to_string).collect();
        println!("=== Words ===");
        println!("{}", words.join(","));
        println!();
    }

    let decoded = codec.decode(&packed)?;
    stats.decoded_bytes = decoded.len() as u64;
    stats.verified = decoded == input;
    stats.complete();

    if !stats.verified {
        tracing::warn!(
            decoded = decoded.len(),
            expected = input.len(),
            "decoded text differs from input"
        );
    }

    if config.print_metrics {
        stats.print_summary();
    }

    Ok(stats.verified)
}
