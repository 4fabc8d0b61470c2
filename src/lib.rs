#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_EMOJI_GRAPH_CONFIG;
mod constants;
pub mod models;
pub use models::{
    CooccurrenceGraph, CorpusCounts, EdgeAttributes, EmojiGraphBuilder, EmojiGraphConfig, Error,
    FrequencyCounter, GraphAssembler, GraphDocument, GraphDocumentEdge, GraphDocumentNode,
    IsolatedTokenPolicy, NodeAttributes, PairCounter, ReviewCorpus, ReviewRecord, TokenPair,
    TokenParser,
};
pub mod types;
mod utils;
pub use types::{EdgeWeight, FrequencyMap, PairCount, Token, TokenFrequency, TokenList, TokenRef};
pub use utils::{
    read_review_records_from_csv_reader, read_review_records_from_json_str,
    read_review_records_from_path, read_review_records_from_reader, sort_frequencies,
    ReviewFileFormat,
};

/// Builds the emoji co-occurrence graph of a review corpus with the default configuration.
pub fn build_emoji_graph(records: &[ReviewRecord]) -> CooccurrenceGraph {
    build_emoji_graph_with_config(records, DEFAULT_EMOJI_GRAPH_CONFIG)
}

pub fn build_emoji_graph_with_config(
    records: &[ReviewRecord],
    config: EmojiGraphConfig,
) -> CooccurrenceGraph {
    EmojiGraphBuilder::new(config).build_graph(records)
}
