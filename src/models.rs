pub mod config;
pub use config::{EmojiGraphConfig, IsolatedTokenPolicy};

pub mod cooccurrence_graph;
pub use cooccurrence_graph::{CooccurrenceGraph, EdgeAttributes, NodeAttributes};

pub mod emoji_graph_builder;
pub use emoji_graph_builder::{CorpusCounts, EmojiGraphBuilder};

pub mod error;
pub use error::Error;

pub mod frequency_counter;
pub use frequency_counter::FrequencyCounter;

pub mod graph_assembler;
pub use graph_assembler::GraphAssembler;

pub mod graph_document;
pub use graph_document::{GraphDocument, GraphDocumentEdge, GraphDocumentNode};

pub mod pair_counter;
pub use pair_counter::PairCounter;

pub mod review_record;
pub use review_record::{ReviewCorpus, ReviewRecord};

pub mod token_pair;
pub use token_pair::TokenPair;

pub mod token_parser;
pub use token_parser::TokenParser;
