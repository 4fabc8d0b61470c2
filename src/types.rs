use std::collections::HashMap;

use crate::models::TokenPair;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a reaction token (e.g. `:smile:`) as an owned `String`. Tokens are compared by
/// exact string equality.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// The ordered sequence of tokens parsed from a single review. May contain duplicates and may
/// be empty.
pub type TokenList = Vec<Token>;

/// Represents the total number of occurrences of a token across a corpus, repeats included.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their total frequency across a corpus.
/// The key is the `Token`, and the value is the `TokenFrequency`.
pub type FrequencyMap = HashMap<Token, TokenFrequency>;

/// The number of distinct reviews in which both tokens of a pair appear.
pub type EdgeWeight = usize;

/// Represents a map of canonical token pairs to the number of reviews they co-occur in.
pub type PairCount = HashMap<TokenPair, EdgeWeight>;

/// Zero-based position of a record within the corpus it was read from.
pub type RecordIndex = usize;
