use rayon::prelude::*;

use crate::models::TokenPair;
use crate::types::{PairCount, Token, TokenList};
use crate::utils::distinct_sorted_tokens;

/// Counts, for every unordered pair of distinct tokens, the number of reviews containing both.
///
/// Each review is reduced to its set of distinct tokens before pairs are formed, so a review
/// contributes at most 1 to any pair no matter how often either token repeats in it. This is
/// the deliberate asymmetry with [`crate::FrequencyCounter`].
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    pair_counts: PairCount,
}

impl PairCounter {
    pub fn new() -> Self {
        PairCounter {
            pair_counts: PairCount::new(),
        }
    }

    /// Adds one review's co-occurring pairs.
    pub fn add_tokens(&mut self, tokens: &[Token]) {
        // Fewer than two raw tokens cannot hold two distinct ones
        if tokens.len() < 2 {
            return;
        }

        let distinct = distinct_sorted_tokens(tokens);

        for (i, first) in distinct.iter().enumerate() {
            for second in &distinct[i + 1..] {
                if let Some(pair) = TokenPair::new(first, second) {
                    *self.pair_counts.entry(pair).or_insert(0) += 1;
                }
            }
        }
    }

    /// Combines two partial pair counts by key-wise summation.
    pub fn merge(self, other: Self) -> Self {
        let (mut larger, smaller) = if self.pair_counts.len() >= other.pair_counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        for (pair, count) in smaller.pair_counts {
            *larger.pair_counts.entry(pair).or_insert(0) += count;
        }

        larger
    }

    pub fn into_pair_count(self) -> PairCount {
        self.pair_counts
    }

    /// Counts the corpus sequentially.
    pub fn count(token_lists: &[TokenList]) -> PairCount {
        token_lists
            .iter()
            .fold(Self::new(), |mut counter, tokens| {
                counter.add_tokens(tokens);
                counter
            })
            .into_pair_count()
    }

    /// Counts the corpus by folding chunks on the rayon pool and merging the partial counts.
    pub fn par_count(token_lists: &[TokenList]) -> PairCount {
        token_lists
            .par_iter()
            .fold(Self::new, |mut counter, tokens| {
                counter.add_tokens(tokens);
                counter
            })
            .reduce(Self::new, Self::merge)
            .into_pair_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(review: &[&str]) -> TokenList {
        review.iter().map(|token| token.to_string()).collect()
    }

    fn pair(a: &str, b: &str) -> TokenPair {
        TokenPair::new(a, b).unwrap()
    }

    #[test]
    fn test_single_repeated_token_contributes_nothing() {
        let mut counter = PairCounter::new();
        counter.add_tokens(&tokens(&[":a:", ":a:", ":a:"]));

        assert!(counter.into_pair_count().is_empty());
    }

    #[test]
    fn test_repeats_count_once_per_review() {
        let mut counter = PairCounter::new();
        counter.add_tokens(&tokens(&[":smile:", ":heart:", ":smile:", ":heart:"]));

        let pair_counts = counter.into_pair_count();
        assert_eq!(pair_counts.len(), 1);
        assert_eq!(pair_counts.get(&pair(":heart:", ":smile:")), Some(&1));
    }

    #[test]
    fn test_all_combinations_are_formed() {
        let mut counter = PairCounter::new();
        counter.add_tokens(&tokens(&[":z:", ":x:", ":y:", ":w:"]));

        // 4 choose 2
        assert_eq!(counter.into_pair_count().len(), 6);
    }

    #[test]
    fn test_merge_sums_partial_counts() {
        let mut left = PairCounter::new();
        left.add_tokens(&tokens(&[":x:", ":y:"]));

        let mut right = PairCounter::new();
        right.add_tokens(&tokens(&[":y:", ":x:", ":z:"]));

        let pair_counts = left.merge(right).into_pair_count();
        assert_eq!(pair_counts.get(&pair(":x:", ":y:")), Some(&2));
        assert_eq!(pair_counts.get(&pair(":x:", ":z:")), Some(&1));
        assert_eq!(pair_counts.get(&pair(":y:", ":z:")), Some(&1));
    }
}
