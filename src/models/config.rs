/// What to do with tokens that appear in the corpus but never co-occur with another token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum IsolatedTokenPolicy {
    /// Leave them out of the graph. Every node then has at least one edge.
    #[default]
    Drop,
    /// Keep them as zero-degree nodes that carry only a frequency.
    Include,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmojiGraphConfig {
    pub isolated_token_policy: IsolatedTokenPolicy,
    /// Run the frequency and pair reductions on the rayon pool.
    pub parallel: bool,
}
