use rayon::prelude::*;

use crate::types::{FrequencyMap, Token, TokenList};

/// Tallies raw token occurrences across a corpus.
///
/// Every element of every token list counts, so a token repeated three times within a single
/// review adds three. Partial counters built over disjoint slices of the corpus can be
/// combined with [`FrequencyCounter::merge`].
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    frequencies: FrequencyMap,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        FrequencyCounter {
            frequencies: FrequencyMap::new(),
        }
    }

    /// Adds one review's tokens to the tally.
    pub fn add_tokens(&mut self, tokens: &[Token]) {
        for token in tokens {
            *self.frequencies.entry(token.clone()).or_insert(0) += 1;
        }
    }

    /// Combines two partial tallies by key-wise summation.
    pub fn merge(self, other: Self) -> Self {
        let (mut larger, smaller) = if self.frequencies.len() >= other.frequencies.len() {
            (self, other)
        } else {
            (other, self)
        };

        for (token, frequency) in smaller.frequencies {
            *larger.frequencies.entry(token).or_insert(0) += frequency;
        }

        larger
    }

    pub fn into_frequency_map(self) -> FrequencyMap {
        self.frequencies
    }

    /// Counts the corpus sequentially.
    pub fn count(token_lists: &[TokenList]) -> FrequencyMap {
        token_lists
            .iter()
            .fold(Self::new(), |mut counter, tokens| {
                counter.add_tokens(tokens);
                counter
            })
            .into_frequency_map()
    }

    /// Counts the corpus by folding chunks on the rayon pool and merging the partial tallies.
    pub fn par_count(token_lists: &[TokenList]) -> FrequencyMap {
        token_lists
            .par_iter()
            .fold(Self::new, |mut counter, tokens| {
                counter.add_tokens(tokens);
                counter
            })
            .reduce(Self::new, Self::merge)
            .into_frequency_map()
    }
}
