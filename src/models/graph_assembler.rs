use log::debug;

use crate::models::{CooccurrenceGraph, IsolatedTokenPolicy};
use crate::types::{FrequencyMap, PairCount};

/// Turns finished pair counts and token frequencies into a [`CooccurrenceGraph`].
///
/// The build runs in two phases. First every positive pair count becomes an edge, which fixes
/// the node set to exactly the tokens touched by some edge. Then frequencies are attached to
/// that fixed node set. Tokens that never formed a pair are handled by the configured
/// [`IsolatedTokenPolicy`].
#[derive(Copy, Clone, Debug, Default)]
pub struct GraphAssembler {
    isolated_token_policy: IsolatedTokenPolicy,
}

impl GraphAssembler {
    pub fn new(isolated_token_policy: IsolatedTokenPolicy) -> Self {
        GraphAssembler {
            isolated_token_policy,
        }
    }

    pub fn assemble(
        self,
        pair_counts: &PairCount,
        frequencies: &FrequencyMap,
    ) -> CooccurrenceGraph {
        let mut graph = CooccurrenceGraph::new();

        for (pair, &count) in pair_counts {
            if count > 0 {
                graph.add_edge(pair.clone(), count);
            }
        }

        let mut isolated_tokens = 0;
        for (token, &frequency) in frequencies {
            if graph.set_node_frequency(token, frequency) {
                continue;
            }

            isolated_tokens += 1;
            if self.isolated_token_policy == IsolatedTokenPolicy::Include {
                graph.add_isolated_node(token, frequency);
            }
        }

        debug!(
            "Assembled graph with {} nodes and {} edges ({} isolated tokens, policy {:?})",
            graph.node_count(),
            graph.edge_count(),
            isolated_tokens,
            self.isolated_token_policy
        );

        graph
    }
}
