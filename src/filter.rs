//! Default fuzzy filtering using nucleo-matcher.

use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::item::Item;

/// Result of a filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Pluggable filter function.
///
/// Takes the current query and the full item list, returns the matches in
/// display order. [`fuzzy_filter`] is the default.
pub type FilterFn = Arc<dyn Fn(&str, &[Item]) -> Vec<FilterMatch> + Send + Sync>;

/// Default fuzzy filter using nucleo-matcher.
///
/// Matches against item labels and returns matches sorted by score
/// (highest first). Empty query returns all items with score 0.
///
/// # Example
///
/// ```ignore
/// let items = vec![
///     Item::new("ap", "apple"),
///     Item::new("ba", "banana"),
///     Item::new("apr", "apricot"),
/// ];
/// let matches = fuzzy_filter("ap", &items);
/// // Returns: apricot (highest score), apple
/// ```
pub fn fuzzy_filter(query: &str, items: &[Item]) -> Vec<FilterMatch> {
    // Empty query returns all items
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&item.label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Sort by score descending (higher score = better match)
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}

/// The default filter boxed as a [`FilterFn`].
pub fn default_filter() -> FilterFn {
    Arc::new(|query, items| fuzzy_filter(query, items))
}
