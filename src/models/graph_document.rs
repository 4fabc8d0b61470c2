use serde::{Deserialize, Serialize};

use crate::types::{EdgeWeight, Token, TokenFrequency};

/// Interchange form of a [`crate::CooccurrenceGraph`], in the node-link layout that graph tools
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<GraphDocumentNode>,
    pub edges: Vec<GraphDocumentEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocumentNode {
    pub id: Token,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<TokenFrequency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocumentEdge {
    pub source: Token,
    pub target: Token,
    pub weight: EdgeWeight,
}
