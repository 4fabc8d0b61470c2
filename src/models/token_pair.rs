use std::fmt;

use crate::types::{Token, TokenRef};

/// An unordered pair of distinct tokens, stored with `first < second`.
///
/// Because the ordering is fixed at construction, `(a, b)` and `(b, a)` always produce the
/// same key, and a token can never be paired with itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPair {
    first: Token,
    second: Token,
}

impl TokenPair {
    /// Returns `None` when both tokens are equal.
    pub fn new(a: &TokenRef, b: &TokenRef) -> Option<Self> {
        match a.cmp(b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a.to_string(),
                second: b.to_string(),
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b.to_string(),
                second: a.to_string(),
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &TokenRef {
        &self.first
    }

    pub fn second(&self) -> &TokenRef {
        &self.second
    }

    pub fn contains(&self, token: &TokenRef) -> bool {
        self.first == token || self.second == token
    }

    /// Returns the other endpoint if `token` is part of this pair.
    pub fn other(&self, token: &TokenRef) -> Option<&TokenRef> {
        if self.first == token {
            Some(&self.second)
        } else if self.second == token {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
