//! Sample text generation.
//!
//! When no input is given, the driver builds its tree from generated text.
//! The sample is word-shaped with a skewed letter distribution, so the tree
//! has visibly short and long codes:
//! - Words of 1-9 letters drawn by English-like letter weights
//! - Single spaces between words, with occasional punctuation
//! - Newlines every few sentences

use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const LETTERS: &[u8] = b"etaoinshrdlcumwfgypbvkjxqz";

// Rough English letter frequencies, per mille
const LETTER_WEIGHTS: [u32; 26] = [
    127, 91, 82, 75, 70, 67, 63, 61, 60, 43, 40, 28, 28, 24, 24, 22, 20, 20, 19, 15, 10, 8, 2, 2,
    1, 1,
];

const PUNCTUATION: &[u8] = b".,!?;";

/// Generate `size_bytes` bytes of text-like sample data.
///
/// The same seed always gives the same text.
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = Vec::with_capacity(size_bytes);

    let letters = match WeightedIndex::new(LETTER_WEIGHTS) {
        Ok(letters) => letters,
        Err(_) => return text,
    };

    while text.len() < size_bytes {
        let word_len = rng.gen_range(1..=9);
        for _ in 0..word_len {
            text.push(LETTERS[letters.sample(&mut rng)]);
        }

        match rng.gen_range(0..20) {
            0 => text.push(b'\n'),
            1..=2 => {
                text.push(PUNCTUATION[rng.gen_range(0..PUNCTUATION.len())]);
                text.push(b' ');
            }
            _ => text.push(b' '),
        }
    }

    text.truncate(size_bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_text() {
        let text = generate_sample_text(42, 1000);
        assert_eq!(text.len(), 1000);
        assert!(text
            .iter()
            .all(|b| b.is_ascii_lowercase() || b" \n".contains(b) || PUNCTUATION.contains(b)));
    }

    #[test]
    fn test_determinism() {
        let text1 = generate_sample_text(12345, 5000);
        let text2 = generate_sample_text(12345, 5000);

        assert_eq!(text1, text2);
    }

    #[test]
    fn test_different_seeds() {
        let text1 = generate_sample_text(1, 1000);
        let text2 = generate_sample_text(2, 1000);

        assert_ne!(text1, text2);
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 100, 1000, 10000, 100000] {
            let text = generate_sample_text(999, size);
            assert_eq!(text.len(), size);
        }
    }

    #[test]
    fn test_letters_are_skewed() {
        let text = generate_sample_text(7, 20_000);
        let count = |symbol: u8| text.iter().filter(|&&b| b == symbol).count();
        assert!(count(b'e') > count(b'z') * 10);
    }
}
