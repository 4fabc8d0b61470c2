use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use crate::models::{GraphDocument, GraphDocumentEdge, GraphDocumentNode, TokenPair};
use crate::types::{EdgeWeight, Token, TokenFrequency, TokenRef};
use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeAttributes {
    pub frequency: Option<TokenFrequency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeAttributes {
    pub weight: EdgeWeight,
}

/// Undirected, simple, weighted graph of co-occurring tokens.
///
/// Nodes and edges live in ordered maps, so iteration order (and therefore serialized output)
/// only depends on the graph's contents. Edges are keyed by [`TokenPair`], which rules out
/// self-loops and parallel edges. An adjacency index kept alongside the edges answers
/// neighbor and degree queries without walking every edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceGraph {
    nodes: BTreeMap<Token, NodeAttributes>,
    edges: BTreeMap<TokenPair, EdgeAttributes>,
    adjacency: BTreeMap<Token, BTreeSet<Token>>,
}

impl CooccurrenceGraph {
    pub fn new() -> Self {
        CooccurrenceGraph {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Inserts an edge, creating both endpoints if they are not nodes yet.
    pub(crate) fn add_edge(&mut self, pair: TokenPair, weight: EdgeWeight) {
        self.nodes.entry(pair.first().to_string()).or_default();
        self.nodes.entry(pair.second().to_string()).or_default();
        self.adjacency
            .entry(pair.first().to_string())
            .or_default()
            .insert(pair.second().to_string());
        self.adjacency
            .entry(pair.second().to_string())
            .or_default()
            .insert(pair.first().to_string());
        self.edges.insert(pair, EdgeAttributes { weight });
    }

    /// Sets the frequency of an existing node. Returns `false`, leaving the graph untouched,
    /// when `token` is not a node.
    pub(crate) fn set_node_frequency(
        &mut self,
        token: &TokenRef,
        frequency: TokenFrequency,
    ) -> bool {
        match self.nodes.get_mut(token) {
            Some(attributes) => {
                attributes.frequency = Some(frequency);
                true
            }
            None => false,
        }
    }

    /// Inserts a node with no edges.
    pub(crate) fn add_isolated_node(&mut self, token: &TokenRef, frequency: TokenFrequency) {
        self.nodes.insert(
            token.to_string(),
            NodeAttributes {
                frequency: Some(frequency),
            },
        );
    }

    /// Iterates `(token, attributes)` in token order.
    pub fn nodes(&self) -> impl Iterator<Item = (&TokenRef, &NodeAttributes)> {
        self.nodes
            .iter()
            .map(|(token, attributes)| (token.as_str(), attributes))
    }

    /// Iterates `(token_a, token_b, attributes)` with `token_a < token_b`, in pair order.
    pub fn edges(&self) -> impl Iterator<Item = (&TokenRef, &TokenRef, &EdgeAttributes)> {
        self.edges
            .iter()
            .map(|(pair, attributes)| (pair.first(), pair.second(), attributes))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, token: &TokenRef) -> bool {
        self.nodes.contains_key(token)
    }

    pub fn node_attributes(&self, token: &TokenRef) -> Option<&NodeAttributes> {
        self.nodes.get(token)
    }

    pub fn node_frequency(&self, token: &TokenRef) -> Option<TokenFrequency> {
        self.nodes
            .get(token)
            .and_then(|attributes| attributes.frequency)
    }

    /// Weight of the edge between `a` and `b`, in either order.
    pub fn edge_weight(&self, a: &TokenRef, b: &TokenRef) -> Option<EdgeWeight> {
        TokenPair::new(a, b)
            .and_then(|pair| self.edges.get(&pair))
            .map(|attributes| attributes.weight)
    }

    /// Tokens sharing an edge with `token`, in token order.
    pub fn neighbors(&self, token: &TokenRef) -> impl Iterator<Item = &TokenRef> {
        self.adjacency
            .get(token)
            .into_iter()
            .flatten()
            .map(|neighbor| neighbor.as_str())
    }

    pub fn degree(&self, token: &TokenRef) -> usize {
        self.adjacency.get(token).map_or(0, |neighbors| neighbors.len())
    }

    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self
                .nodes()
                .map(|(token, attributes)| GraphDocumentNode {
                    id: token.to_string(),
                    frequency: attributes.frequency,
                })
                .collect(),
            edges: self
                .edges()
                .map(|(source, target, attributes)| GraphDocumentEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    weight: attributes.weight,
                })
                .collect(),
        }
    }

    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, &self.to_document())?;
        writeln!(writer)?;
        Ok(())
    }
}
