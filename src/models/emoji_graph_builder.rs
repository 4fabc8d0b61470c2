use log::{debug, info};

use crate::models::{
    CooccurrenceGraph, EmojiGraphConfig, FrequencyCounter, GraphAssembler, PairCounter,
    ReviewRecord, TokenParser,
};
use crate::types::{FrequencyMap, PairCount, TokenList};

/// Both corpus reductions, completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusCounts {
    pub review_count: usize,
    pub frequencies: FrequencyMap,
    pub pair_counts: PairCount,
}

/// Runs the whole pipeline: parse tokens, count frequencies and pairs, assemble the graph.
pub struct EmojiGraphBuilder {
    config: EmojiGraphConfig,
    token_parser: TokenParser,
}

impl EmojiGraphBuilder {
    pub fn new(config: EmojiGraphConfig) -> Self {
        EmojiGraphBuilder {
            config,
            token_parser: TokenParser::new(),
        }
    }

    pub fn config(&self) -> &EmojiGraphConfig {
        &self.config
    }

    pub fn tokenize(&self, records: &[ReviewRecord]) -> Vec<TokenList> {
        self.token_parser.parse_records(records)
    }

    /// Computes the frequency and pair reductions.
    ///
    /// The two reductions are independent; in parallel mode they run side by side on the rayon
    /// pool and this returns only once both have finished.
    pub fn count(&self, token_lists: &[TokenList]) -> CorpusCounts {
        let (frequencies, pair_counts) = if self.config.parallel {
            rayon::join(
                || FrequencyCounter::par_count(token_lists),
                || PairCounter::par_count(token_lists),
            )
        } else {
            (
                FrequencyCounter::count(token_lists),
                PairCounter::count(token_lists),
            )
        };

        debug!(
            "Counted {} distinct tokens and {} distinct pairs over {} reviews",
            frequencies.len(),
            pair_counts.len(),
            token_lists.len()
        );

        CorpusCounts {
            review_count: token_lists.len(),
            frequencies,
            pair_counts,
        }
    }

    pub fn assemble(&self, counts: &CorpusCounts) -> CooccurrenceGraph {
        GraphAssembler::new(self.config.isolated_token_policy)
            .assemble(&counts.pair_counts, &counts.frequencies)
    }

    pub fn build_graph(&self, records: &[ReviewRecord]) -> CooccurrenceGraph {
        let token_lists = self.tokenize(records);
        let counts = self.count(&token_lists);
        let graph = self.assemble(&counts);

        info!(
            "Built emoji graph from {} reviews: {} nodes, {} edges",
            counts.review_count,
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }
}
