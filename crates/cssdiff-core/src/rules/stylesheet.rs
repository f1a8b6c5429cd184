//! Parsed stylesheet and its selector index.

use std::path::Path;

use crate::rules::{SelectorIndex, StyleRule};
use crate::{Error, Result};

/// A parsed stylesheet: an ordered sequence of rules plus the selector
/// phrase index built over them.
///
/// Stylesheets are immutable once constructed. The index is built eagerly
/// in the constructor, so it can never be observed half-initialized and
/// needs no invalidation story.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// Label identifying the source (file path or caller-supplied name).
    source: String,
    /// The rules in source order.
    rules: Vec<StyleRule>,
    /// Phrase index over `rules`.
    index: SelectorIndex,
}

impl StyleSheet {
    /// Load and parse a stylesheet from a CSS file.
    ///
    /// The sheet is labeled with the path as given, which is how it will be
    /// named in reports and error messages.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_css(path.display().to_string(), &content)
    }

    /// Parse a stylesheet from CSS text under the given source label.
    pub fn from_css(source: impl Into<String>, css: &str) -> Result<Self> {
        let rules = crate::parser::parse_css(css)?;
        let index = SelectorIndex::build(&rules);
        Ok(Self {
            source: source.into(),
            rules,
            index,
        })
    }

    /// The source label (file path or caller-supplied name).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The selector phrase index.
    pub fn index(&self) -> &SelectorIndex {
        &self.index
    }

    /// The rules declaring `phrase`, in stylesheet order.
    pub fn rules_for(&self, phrase: &str) -> impl Iterator<Item = &StyleRule> {
        self.index
            .get(phrase)
            .iter()
            .map(|&position| &self.rules[position])
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in source order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }
}
