#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::{assert_graph_invariants, pair, reviews, smile_heart_wow_reviews};

use emoji_graph::{
    build_emoji_graph, build_emoji_graph_with_config, EmojiGraphBuilder, EmojiGraphConfig,
    GraphDocument, IsolatedTokenPolicy, DEFAULT_EMOJI_GRAPH_CONFIG,
};

const SEQUENTIAL_CONFIG: EmojiGraphConfig = EmojiGraphConfig {
    isolated_token_policy: IsolatedTokenPolicy::Drop,
    parallel: false,
};

const INCLUDE_ISOLATED_CONFIG: EmojiGraphConfig = EmojiGraphConfig {
    isolated_token_policy: IsolatedTokenPolicy::Include,
    parallel: true,
};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_smile_heart_wow_corpus() {
        let records = smile_heart_wow_reviews();
        let builder = EmojiGraphBuilder::new(DEFAULT_EMOJI_GRAPH_CONFIG);

        let counts = builder.count(&builder.tokenize(&records));

        assert_eq!(counts.review_count, 4);
        assert_eq!(counts.pair_counts.len(), 1);
        assert_eq!(counts.pair_counts[&pair(":heart:", ":smile:")], 2);
        assert_eq!(counts.frequencies.len(), 3);
        assert_eq!(counts.frequencies[":smile:"], 3);
        assert_eq!(counts.frequencies[":heart:"], 2);
        assert_eq!(counts.frequencies[":wow:"], 1);

        let graph = builder.assemble(&counts);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(":smile:", ":heart:"), Some(2));
        assert_eq!(graph.node_frequency(":smile:"), Some(3));
        assert_eq!(graph.node_frequency(":heart:"), Some(2));
        assert!(!graph.contains_node(":wow:"));

        assert_graph_invariants(&graph, &counts.frequencies);
    }

    #[test]
    fn test_single_repeated_token_never_becomes_a_node() {
        let records = reviews(&[Some(":a: :a: :a:")]);
        let builder = EmojiGraphBuilder::new(DEFAULT_EMOJI_GRAPH_CONFIG);

        let counts = builder.count(&builder.tokenize(&records));
        let graph = builder.assemble(&counts);

        assert!(counts.pair_counts.is_empty());
        assert_eq!(counts.frequencies[":a:"], 3);
        assert!(graph.is_empty());
        assert!(!graph.contains_node(":a:"));
    }

    #[test]
    fn test_same_token_set_in_every_review() {
        let records = reviews(&[
            Some(":x: :y: :z:"),
            Some(":z: :x: :y: :x:"),
            Some(":y: :y: :z: :x: :z:"),
        ]);

        let graph = build_emoji_graph(&records);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(":x:", ":y:"), Some(3));
        assert_eq!(graph.edge_weight(":x:", ":z:"), Some(3));
        assert_eq!(graph.edge_weight(":y:", ":z:"), Some(3));
        assert_eq!(graph.node_frequency(":x:"), Some(4));
        assert_eq!(graph.node_frequency(":y:"), Some(4));
        assert_eq!(graph.node_frequency(":z:"), Some(4));
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    fn mixed_reviews() -> Vec<emoji_graph::ReviewRecord> {
        (0..300)
            .map(|i| match i % 9 {
                0 => None,
                1 => Some(":sob:".to_string()),
                n => Some(
                    (0..n)
                        .map(|j| format!(":e{}:", (i + j * 5) % 13))
                        .collect::<Vec<_>>()
                        .join(" "),
                ),
            })
            .map(|emojis| emoji_graph::ReviewRecord::with_emojis(emojis.as_deref()))
            .collect()
    }

    #[test]
    fn test_empty_corpus_yields_empty_graph() {
        let graph = build_emoji_graph(&[]);

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.to_document(), GraphDocument::default());
    }

    #[test]
    fn test_rebuilding_yields_identical_graph() {
        let records = mixed_reviews();

        let first = build_emoji_graph(&records);
        let second = build_emoji_graph(&records);

        assert_eq!(first, second);
        assert_eq!(first.to_json_string().unwrap(), second.to_json_string().unwrap());
    }

    #[test]
    fn test_parallel_and_sequential_pipelines_agree() {
        let records = mixed_reviews();

        let parallel = build_emoji_graph_with_config(&records, DEFAULT_EMOJI_GRAPH_CONFIG);
        let sequential = build_emoji_graph_with_config(&records, SEQUENTIAL_CONFIG);

        assert!(DEFAULT_EMOJI_GRAPH_CONFIG.parallel);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_record_order_does_not_matter() {
        let records = mixed_reviews();
        let mut reversed = records.clone();
        reversed.reverse();

        assert_eq!(build_emoji_graph(&records), build_emoji_graph(&reversed));
    }

    #[test]
    fn test_invariants_hold_on_mixed_corpus() {
        let records = mixed_reviews();
        let builder = EmojiGraphBuilder::new(DEFAULT_EMOJI_GRAPH_CONFIG);

        let counts = builder.count(&builder.tokenize(&records));
        let graph = builder.assemble(&counts);

        assert_graph_invariants(&graph, &counts.frequencies);
        assert!(graph.node_count() < counts.frequencies.len());
        assert!(!graph.contains_node(":sob:"));
        for (_, _, attributes) in graph.edges() {
            assert!(attributes.weight <= counts.review_count);
        }
    }

    #[test]
    fn test_isolated_tokens_can_be_kept() {
        let records = smile_heart_wow_reviews();

        let graph = build_emoji_graph_with_config(&records, INCLUDE_ISOLATED_CONFIG);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_frequency(":wow:"), Some(1));
        assert_eq!(graph.degree(":wow:"), 0);
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;

    #[test]
    fn test_json_document_shape() {
        let graph = build_emoji_graph(&smile_heart_wow_reviews());

        let json: serde_json::Value =
            serde_json::from_str(&graph.to_json_string().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [
                    { "id": ":heart:", "frequency": 2 },
                    { "id": ":smile:", "frequency": 3 }
                ],
                "edges": [
                    { "source": ":heart:", "target": ":smile:", "weight": 2 }
                ]
            })
        );
    }

    #[test]
    fn test_write_json_round_trips_through_document() {
        let graph = build_emoji_graph(&smile_heart_wow_reviews());

        let mut buffer = Vec::new();
        graph.write_json(&mut buffer).unwrap();
        let document: GraphDocument = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(document, graph.to_document());
    }
}
