use crate::models::{EmojiGraphConfig, IsolatedTokenPolicy};

pub const DEFAULT_EMOJI_GRAPH_CONFIG: EmojiGraphConfig = EmojiGraphConfig {
    isolated_token_policy: IsolatedTokenPolicy::Drop,
    parallel: true,
};
