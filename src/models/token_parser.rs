use crate::models::ReviewRecord;
use crate::types::TokenList;

/// Splits a review's raw reaction-token field into tokens.
///
/// Note: This explicitly does not normalize tokens beyond trimming whitespace, and it keeps
/// repeated tokens so that frequency counting sees every occurrence.
#[derive(Copy, Clone, Debug, Default)]
pub struct TokenParser;

impl TokenParser {
    pub fn new() -> Self {
        TokenParser
    }

    /// Parses a single `emojis` field. A missing or blank field yields an empty list.
    pub fn parse(self, field: Option<&str>) -> TokenList {
        match field {
            Some(text) => text
                .split_whitespace()
                .map(|token| token.trim())
                .filter(|token| !token.is_empty())
                .map(|token| token.to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Parses every record's `emojis` field, preserving record order.
    pub fn parse_records(self, records: &[ReviewRecord]) -> Vec<TokenList> {
        records
            .iter()
            .map(|record| self.parse(record.emojis()))
            .collect()
    }
}
