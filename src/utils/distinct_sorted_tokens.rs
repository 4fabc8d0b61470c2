use std::collections::BTreeSet;

use crate::types::{Token, TokenRef};

/// Collapses a token list to its distinct tokens in lexicographic order.
///
/// # Arguments
/// * `tokens` - The tokens of a single review, possibly with repeats.
///
/// # Returns
/// Borrowed views of each distinct token, sorted ascending.
pub fn distinct_sorted_tokens(tokens: &[Token]) -> Vec<&TokenRef> {
    tokens
        .iter()
        .map(|token| token.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
