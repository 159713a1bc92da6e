//! Integration tests for the full huffpack pipeline.
//!
//! These tests verify end-to-end behavior: input -> frequencies -> worklist ->
//! tree -> encode -> packed words -> decode -> output, with verification that
//! output matches input.

use huffpack_core::{
    build_frequency_table, build_leaf_worklist, build_tree, codec, count_used_symbols,
    error::{Error, HuffmanError},
    lookup_path, lookup_value, render, total_count, tree_height, Codec, CodingTree, PackedBuffer,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const R_ERROR: f64 = 1e-4;

/// Walk every stage by hand and verify the round trip.
#[test]
fn test_full_pipeline_stepwise() {
    let input = b"hello world! this is a test of the full pipeline with some repetition: aaaaaaaaaa bbbbbbbbbb";

    // Step 1: Count
    let table = build_frequency_table(input);
    assert_eq!(total_count(&table), input.len() as u64);

    // Step 2: Seed the worklist
    let worklist = build_leaf_worklist(&table);
    assert_eq!(worklist.len(), count_used_symbols(&table));

    // Step 3: Merge
    let tree = build_tree(worklist).expect("non-empty input builds a tree");
    assert!((tree.weight() - 1.0).abs() < R_ERROR);

    // Step 4: Encode
    let packed = codec::encode(&tree, input).expect("encode failed");
    assert_eq!(packed.char_count(), input.len());

    // Step 5: Ship as signed words and back
    let wire = packed.to_words();
    let received = PackedBuffer::from_words(&wire).expect("bad header");

    // Step 6: Decode
    let decoded = codec::decode(&tree, &received).expect("decode failed");
    assert_eq!(decoded, input, "output doesn't match input");
}

#[test]
fn test_empty_input() {
    let table = build_frequency_table(b"");
    assert_eq!(total_count(&table), 0);
    assert_eq!(count_used_symbols(&table), 0);

    let worklist = build_leaf_worklist(&table);
    assert!(worklist.is_empty());

    let tree = build_tree(worklist);
    assert!(tree.is_none());
    assert_eq!(tree_height(tree.as_ref()), 0);
    assert!(lookup_path(tree.as_ref(), 0).is_none());
    assert!(lookup_value(tree.as_ref(), &[]).is_none());
}

#[test]
fn test_single_symbol_input() {
    let table = build_frequency_table(b"b");
    assert_eq!(total_count(&table), 1);

    let tree = CodingTree::from_bytes(b"b").unwrap();
    assert_eq!(tree.height(), 1);

    let path = tree.lookup_path(b'b').unwrap();
    assert_eq!(path.len(), 0);
    assert_eq!(tree.lookup_value(path.as_slice()), Some(b'b'));

    let packed = codec::encode(&tree, b"b").unwrap();
    assert_eq!(packed.to_words(), vec![1, 0]);
    assert_eq!(codec::decode(&tree, &packed).unwrap(), b"b");

    let many = codec::encode(&tree, &[b'b'; 1000]).unwrap();
    assert_eq!(many.words(), &[0]);
    assert_eq!(codec::decode(&tree, &many).unwrap(), vec![b'b'; 1000]);
}

#[test]
fn test_bombom_symbols() {
    assert_eq!(count_used_symbols(&build_frequency_table(b"bombom")), 3);
}

#[test]
fn test_hello_height() {
    let tree = CodingTree::from_bytes(b"Hello").unwrap();
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.lookup_path(b'l').unwrap().to_string(), "0");
    assert_eq!(tree.lookup_path(b'o').unwrap().to_string(), "10");
    assert_eq!(tree.lookup_path(b'H').unwrap().to_string(), "110");
    assert_eq!(tree.lookup_path(b'e').unwrap().to_string(), "111");
}

#[test]
fn test_ascii_alphabet() {
    let alphabet: Vec<u8> = (1..=127).collect();
    let tree = CodingTree::from_bytes(&alphabet).unwrap();

    assert_eq!(tree.leaf_count(), 127);
    assert_eq!(tree.height(), 8);

    for &symbol in &alphabet {
        let path = tree.lookup_path(symbol).unwrap();
        assert!(path.len() == 6 || path.len() == 7);
        assert_eq!(tree.lookup_value(path.as_slice()), Some(symbol));
    }

    let packed = codec::encode(&tree, &alphabet).unwrap();
    assert_eq!(codec::decode(&tree, &packed).unwrap(), alphabet);
}

#[test]
fn test_full_byte_alphabet_including_zero() {
    let alphabet: Vec<u8> = (0..=255).collect();
    let tree = CodingTree::from_bytes(&alphabet).unwrap();

    // 256 equal weights make a perfect tree
    assert_eq!(tree.height(), 9);
    assert_eq!(tree.lookup_path(0).unwrap().len(), 8);

    let mut text = alphabet.clone();
    text.reverse();
    let packed = codec::encode(&tree, &text).unwrap();
    assert_eq!(codec::decode(&tree, &packed).unwrap(), text);
}

#[test]
fn test_sentence_fixture() {
    let sentence = b"thomas kielstra taking W's on assigments as always";
    let tree = CodingTree::from_bytes(sentence).unwrap();

    assert_eq!(tree.height(), 7);
    assert_eq!(tree.lookup_path(b'r').unwrap().to_string(), "110011");
    assert!(tree.lookup_path(b'!').is_none());

    let packed = PackedBuffer::from_words(&[6, 3115323]).unwrap();
    assert_eq!(codec::decode(&tree, &packed).unwrap(), b"thomas");
}

#[test]
fn test_tree_from_one_text_encodes_another() {
    let tree = CodingTree::from_bytes(b"poop!!!!!! nnToronTo").unwrap();
    assert_eq!(tree.height(), 5);

    let message = b"Toron!! poor porT";
    let packed = codec::encode(&tree, message).unwrap();
    assert_eq!(codec::decode(&tree, &packed).unwrap(), message);

    let result = codec::encode(&tree, b"Toroon Raptors");
    assert!(matches!(
        result,
        Err(Error::Huffman(HuffmanError::SymbolNotFound {
            symbol: b'R',
            position: 7
        }))
    ));
}

#[test]
fn test_random_text_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
    let text: Vec<u8> = (0..20_000)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    let codec = Codec::from_sample(&text).unwrap();
    let packed = codec.encode(&text).unwrap();

    // uniform over 31 symbols: entropy is just under 5 bits
    let bits = codec.codes().encoded_bits(&text).unwrap();
    assert!(bits < text.len() * 8);
    assert!(bits >= text.len() * 4);
    assert!(packed.words().len().is_power_of_two());

    let bytes = packed.to_bytes();
    let restored = PackedBuffer::from_bytes(&bytes).unwrap();
    assert_eq!(codec.decode(&restored).unwrap(), text);
}

#[test]
fn test_skewed_weights_deep_tree() {
    // Fibonacci counts give the deepest possible tree
    let mut text = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in b'a'..=b'l' {
        text.extend(std::iter::repeat(symbol).take(a));
        let next = a + b;
        a = b;
        b = next;
    }

    let tree = CodingTree::from_bytes(&text).unwrap();
    assert_eq!(tree.height(), 12);

    let packed = codec::encode(&tree, &text).unwrap();
    assert_eq!(codec::decode(&tree, &packed).unwrap(), text);
}

#[test]
fn test_render_matches_shape() {
    let tree = CodingTree::from_bytes(b"Hello").unwrap();
    let diagram = render(&tree);
    let lines: Vec<&str> = diagram.lines().collect();

    assert_eq!(
        lines,
        vec![
            "                              0.20 (e)",
            "                    0.40",
            "                              0.20 (H)",
            "          0.60",
            "                    0.20 (o)",
            "1.00",
            "          0.40 (l)",
        ]
    );
}
