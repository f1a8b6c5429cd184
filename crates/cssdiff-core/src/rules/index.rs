//! Selector phrase index over a stylesheet's rules.

use std::collections::BTreeMap;

use crate::rules::StyleRule;

/// Maps each selector phrase to the rules that declare it.
///
/// A rule with N comma-separated selector phrases appears under all N
/// buckets; within a bucket, rule positions keep stylesheet order. Phrases
/// are case- and whitespace-sensitive after trimming; CSS selectors are
/// case-sensitive for element and attribute names, so no folding is
/// attempted. The ordered backing map makes phrase iteration deterministic
/// without a separate sort.
///
/// Built once in the stylesheet constructor and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct SelectorIndex {
    buckets: BTreeMap<String, Vec<usize>>,
}

impl SelectorIndex {
    /// Build the index by scanning `rules` once.
    pub fn build(rules: &[StyleRule]) -> Self {
        let mut buckets: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, rule) in rules.iter().enumerate() {
            for phrase in rule.selector_phrases() {
                buckets.entry(phrase.to_string()).or_default().push(position);
            }
        }
        Self { buckets }
    }

    /// All phrase keys, in lexicographic order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Whether any rule declares `phrase`.
    pub fn contains(&self, phrase: &str) -> bool {
        self.buckets.contains_key(phrase)
    }

    /// Positions of the rules declaring `phrase`, in stylesheet order.
    ///
    /// Unknown phrases yield an empty slice.
    pub fn get(&self, phrase: &str) -> &[usize] {
        self.buckets.get(phrase).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index has no phrases.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
