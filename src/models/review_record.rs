use serde::{Deserialize, Serialize};

use crate::types::RecordIndex;
use crate::Error;

/// A single customer review as produced by the collector.
///
/// Only `emojis` feeds the graph; the remaining fields are carried so that a review file
/// round-trips through the crate without loss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub review: String,
    /// Whitespace-separated reaction tokens, or `None` when the review had none.
    #[serde(default)]
    pub emojis: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub url: String,
}

impl ReviewRecord {
    /// Creates a record carrying only a reaction-token field.
    pub fn with_emojis(emojis: Option<&str>) -> Self {
        ReviewRecord {
            emojis: emojis.map(|emojis| emojis.to_string()),
            ..Default::default()
        }
    }

    pub fn emojis(&self) -> Option<&str> {
        self.emojis.as_deref()
    }
}

/// The records read from one review file, along with the shape problems that were degraded
/// rather than treated as fatal.
#[derive(Debug, Default)]
pub struct ReviewCorpus {
    pub records: Vec<ReviewRecord>,
    pub malformed_fields: Vec<Error>,
}

impl ReviewCorpus {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indices of records whose `emojis` field had to be discarded.
    pub fn malformed_record_indices(&self) -> Vec<RecordIndex> {
        self.malformed_fields
            .iter()
            .filter_map(|err| match err {
                Error::MalformedField { record_index, .. } => Some(*record_index),
                _ => None,
            })
            .collect()
    }
}
