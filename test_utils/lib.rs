#![allow(dead_code)]

use emoji_graph::{CooccurrenceGraph, FrequencyMap, ReviewRecord, TokenList, TokenPair};

pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

/// Path of a fixture under the test files directory.
pub fn test_file_path(name: &str) -> String {
    format!("{}/{}", TEST_FILES_DIRECTORY, name)
}

/// Builds records that carry only an `emojis` field.
pub fn reviews(emojis: &[Option<&str>]) -> Vec<ReviewRecord> {
    emojis
        .iter()
        .map(|emojis| ReviewRecord::with_emojis(*emojis))
        .collect()
}

pub fn token_lists(reviews: &[&[&str]]) -> Vec<TokenList> {
    reviews
        .iter()
        .map(|review| review.iter().map(|token| token.to_string()).collect())
        .collect()
}

pub fn pair(a: &str, b: &str) -> TokenPair {
    TokenPair::new(a, b).expect("test pairs must join two distinct tokens")
}

/// The four-review corpus used throughout the scenario tests.
pub fn smile_heart_wow_reviews() -> Vec<ReviewRecord> {
    reviews(&[
        Some(":smile: :heart:"),
        Some(":smile: :heart: :smile:"),
        Some(":wow:"),
        None,
    ])
}

/// Structural checks that hold for any graph assembled with isolated tokens dropped.
pub fn assert_graph_invariants(graph: &CooccurrenceGraph, frequencies: &FrequencyMap) {
    for (token, attributes) in graph.nodes() {
        assert!(
            frequencies.contains_key(token),
            "node {} is missing from the frequency map",
            token
        );
        assert_eq!(attributes.frequency, frequencies.get(token).copied());
        assert!(graph.degree(token) >= 1, "node {} has no edges", token);
    }

    for (source, target, attributes) in graph.edges() {
        assert!(source < target, "edge ({}, {}) is not canonical", source, target);
        assert!(attributes.weight > 0);
        assert!(graph.contains_node(source));
        assert!(graph.contains_node(target));
    }
}
