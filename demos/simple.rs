use emoji_graph::{build_emoji_graph, ReviewRecord};

fn main() {
    env_logger::init();

    let reviews = vec![
        ReviewRecord::with_emojis(Some(":+1: :ok: :heart:")),
        ReviewRecord::with_emojis(Some(":heart: :+1: :heart:")),
        ReviewRecord::with_emojis(Some(":sob:")),
        ReviewRecord::with_emojis(None),
    ];

    let graph = build_emoji_graph(&reviews);

    println!("Emoji co-occurrences across {} reviews", reviews.len());
    for (source, target, attributes) in graph.edges() {
        println!("{} -- {}: {}", source, target, attributes.weight);
    }
}
