//! Configuration for the huffpack driver.
//!
//! Handles parsing command-line arguments and filling in defaults. With no
//! arguments the driver builds a tree from a generated sample and round
//! trips it; the seed is always printed so a run can be repeated.

use std::path::PathBuf;

/// Default size of the generated sample text.
pub const DEFAULT_SAMPLE_BYTES: usize = 4096;

/// Where the text that shapes the tree comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read the text from a file
    File(PathBuf),

    /// Literal text from the command line
    Text(String),

    /// Generate a text-like sample
    Sample { seed: u64, bytes: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Input ===
    /// Text used to build the tree (and encoded, unless `words` is set)
    pub input: InputSource,

    /// Packed buffer to decode instead of encoding the input
    pub words: Option<Vec<i32>>,

    // === Output ===
    /// Print the tree diagram
    pub print_tree: bool,

    /// Print every symbol with its code
    pub print_codes: bool,

    /// Print the packed buffer as signed words
    pub print_words: bool,

    /// Print the resolved configuration
    pub print_config: bool,

    /// Print the run summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// `--in` and `--text` are mutually exclusive; without either, a sample
    /// is generated from `--seed` (time-based when omitted).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut text: Option<String> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut words: Option<Vec<i32>> = None;
        let mut print_tree = false;
        let mut print_codes = false;
        let mut print_words = false;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--words" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--words requires a comma-separated list".to_string());
                    }
                    words = Some(parse_words(&args[i])?);
                }
                "--print-tree" => {
                    print_tree = true;
                }
                "--print-codes" => {
                    print_codes = true;
                }
                "--print-words" => {
                    print_words = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let input = match (input_file, text) {
            (Some(_), Some(_)) => return Err("--in and --text are mutually exclusive".to_string()),
            (Some(path), None) => InputSource::File(path),
            (None, Some(text)) => InputSource::Text(text),
            (None, None) => {
                let bytes = sample_bytes.unwrap_or(DEFAULT_SAMPLE_BYTES);
                if bytes == 0 {
                    return Err("--sample-bytes must be at least 1".to_string());
                }
                InputSource::Sample {
                    seed: seed.unwrap_or_else(time_seed),
                    bytes,
                }
            }
        };

        Ok(Config {
            input,
            words,
            print_tree,
            print_codes,
            print_words,
            print_config,
            print_metrics,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input {
            InputSource::File(path) => println!("Input: file {}", path.display()),
            InputSource::Text(text) => println!("Input: text ({} bytes)", text.len()),
            InputSource::Sample { seed, bytes } => {
                println!("Input: generated sample ({} bytes)", bytes);
                println!("Seed: {}", seed);
            }
        }
        match &self.words {
            Some(words) => println!("Mode: decode {} words", words.len()),
            None => println!("Mode: encode + decode"),
        }
        println!();
    }
}

/// Parse `"45,-79266821,..."` into signed words.
fn parse_words(list: &str) -> Result<Vec<i32>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(|word| word.parse().map_err(|_| format!("invalid word: {}", word)))
        .collect()
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn print_help() {
    println!("huffpack: build a coding tree from text and pack text into 32-bit words");
    println!();
    println!("USAGE:");
    println!("    huffpack [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input text file (default: generate sample)");
    println!("    --text <STRING>         Literal input text");
    println!("    --sample-bytes <N>      Generated sample size (default: 4096)");
    println!("    --seed <N>              Sample generator seed (default: time-based)");
    println!();
    println!("    --words <I32,...>       Decode these packed words instead of encoding");
    println!();
    println!("    --print-tree            Print the tree sideways");
    println!("    --print-codes           Print every symbol with its code");
    println!("    --print-words           Print the packed words");
    println!("    --print-config          Print resolved configuration");
    println!("    --no-metrics            Don't print run summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack --seed 42                             # Deterministic sample run");
    println!("    huffpack --text \"Hello\" --print-tree           # Show the tree for a word");
    println!("    huffpack --in story.txt --words 6,3115323      # Decode an existing buffer");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();
        assert!(matches!(
            config.input,
            InputSource::Sample {
                bytes: DEFAULT_SAMPLE_BYTES,
                ..
            }
        ));
        assert!(config.words.is_none());
        assert!(config.print_metrics);
        assert!(!config.print_tree);
    }

    #[test]
    fn test_seeded_sample() {
        let config = Config::from_args(&args(&["--seed", "42", "--sample-bytes", "100"])).unwrap();
        assert_eq!(config.input, InputSource::Sample { seed: 42, bytes: 100 });
    }

    #[test]
    fn test_text_and_flags() {
        let config = Config::from_args(&args(&[
            "--text",
            "Hello",
            "--print-tree",
            "--print-codes",
            "--no-metrics",
        ]))
        .unwrap();
        assert_eq!(config.input, InputSource::Text("Hello".to_string()));
        assert!(config.print_tree);
        assert!(config.print_codes);
        assert!(!config.print_metrics);
    }

    #[test]
    fn test_words() {
        let config = Config::from_args(&args(&["--words", "50, -1188067013,0"])).unwrap();
        assert_eq!(config.words, Some(vec![50, -1188067013, 0]));
    }

    #[test]
    fn test_errors() {
        assert!(Config::from_args(&args(&["--in"])).is_err());
        assert!(Config::from_args(&args(&["--seed", "x"])).is_err());
        assert!(Config::from_args(&args(&["--words", "1,two"])).is_err());
        assert!(Config::from_args(&args(&["--sample-bytes", "0"])).is_err());
        assert!(Config::from_args(&args(&["--in", "a", "--text", "b"])).is_err());
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }
}
