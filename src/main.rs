use emoji_graph::{
    read_review_records_from_path, read_review_records_from_reader, sort_frequencies,
    EmojiGraphBuilder, IsolatedTokenPolicy, ReviewFileFormat, DEFAULT_EMOJI_GRAPH_CONFIG,
};
use log::{error, info, warn};
use std::io;

const TOP_TOKENS_TO_LOG: usize = 10;

const USAGE: &str = "Usage: emoji-graph-cli [--include-isolated] [--sequential] [--json] [PATH]

Reads customer reviews (CSV, or JSON with --json or a .json extension; .gz is decompressed)
from PATH or stdin and prints the emoji co-occurrence graph as JSON.";

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut config = DEFAULT_EMOJI_GRAPH_CONFIG;
    let mut stdin_format = ReviewFileFormat::Csv;
    let mut path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--include-isolated" => config.isolated_token_policy = IsolatedTokenPolicy::Include,
            "--sequential" => config.parallel = false,
            "--json" => stdin_format = ReviewFileFormat::Json,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            flag if flag.starts_with('-') => {
                eprintln!("Unknown option: {}\n\n{}", flag, USAGE);
                std::process::exit(2);
            }
            _ => path = Some(arg.clone()),
        }
    }

    // Read the reviews from the given file, or stdin
    let corpus = match &path {
        Some(path) => read_review_records_from_path(path),
        None => read_review_records_from_reader(io::stdin().lock(), stdin_format),
    };

    let corpus = match corpus {
        Ok(corpus) => corpus,
        Err(e) => {
            error!("Failed to read reviews: {}", e);
            std::process::exit(1);
        }
    };

    if !corpus.malformed_fields.is_empty() {
        warn!(
            "{} reviews had malformed fields and contribute no tokens",
            corpus.malformed_fields.len()
        );
    }

    let builder = EmojiGraphBuilder::new(config);
    let token_lists = builder.tokenize(&corpus.records);
    let counts = builder.count(&token_lists);
    let graph = builder.assemble(&counts);

    info!(
        "{} reviews, {} distinct emojis, {} nodes, {} edges",
        counts.review_count,
        counts.frequencies.len(),
        graph.node_count(),
        graph.edge_count()
    );

    for (token, frequency) in sort_frequencies(&counts.frequencies)
        .into_iter()
        .take(TOP_TOKENS_TO_LOG)
    {
        info!("{}: {}", token, frequency);
    }

    if let Err(e) = graph.write_json(io::stdout().lock()) {
        error!("Failed to write graph: {}", e);
        std::process::exit(1);
    }
}
