use crate::types::{FrequencyMap, Token, TokenFrequency};

/// Sorts a mapping of tokens to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two tokens have the same frequency, sorts by token in ascending
///   lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use emoji_graph::types::FrequencyMap;
/// use emoji_graph::sort_frequencies;
///
/// let mut frequencies = FrequencyMap::new();
/// frequencies.insert(":heart:".to_string(), 10);
/// frequencies.insert(":fire:".to_string(), 15);
/// frequencies.insert(":eyes:".to_string(), 10);
///
/// let sorted = sort_frequencies(&frequencies);
/// assert_eq!(sorted, vec![
///     (":fire:".to_string(), 15),
///     (":eyes:".to_string(), 10),
///     (":heart:".to_string(), 10)
/// ]);
/// ```
pub fn sort_frequencies(frequencies: &FrequencyMap) -> Vec<(Token, TokenFrequency)> {
    let mut sorted: Vec<(Token, TokenFrequency)> = frequencies
        .iter()
        .map(|(token, frequency)| (token.to_owned(), *frequency))
        .collect();

    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    sorted
}
