//! Stylesheet comparison.
//!
//! The comparator asks two questions of a pair of parsed sheets: which
//! selector phrases exist on one side only, and, for phrases present on
//! both sides, which normalized declarations are declared on one side only.
//! It performs no I/O and never mutates its inputs.

use std::collections::{BTreeMap, BTreeSet};

use crate::Result;
use crate::normalize::NormalizedDeclaration;
use crate::rules::StyleSheet;

/// Declarations exclusive to one side for a shared selector phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationDiff {
    /// Declared for the phrase somewhere in the first sheet, nowhere in the
    /// second.
    pub only_in_a: BTreeSet<NormalizedDeclaration>,
    /// Declared for the phrase somewhere in the second sheet, nowhere in
    /// the first.
    pub only_in_b: BTreeSet<NormalizedDeclaration>,
}

/// The full outcome of comparing two stylesheets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Selector phrases present in the first sheet only.
    pub selectors_only_in_a: BTreeSet<String>,
    /// Selector phrases present in the second sheet only.
    pub selectors_only_in_b: BTreeSet<String>,
    /// Functional declaration differences, keyed by shared phrase.
    ///
    /// Entries exist only when at least one side is non-empty.
    pub declaration_diffs: BTreeMap<String, DeclarationDiff>,
}

impl DiffResult {
    /// Whether the two sheets compared functionally identical.
    pub fn is_empty(&self) -> bool {
        self.selectors_only_in_a.is_empty()
            && self.selectors_only_in_b.is_empty()
            && self.declaration_diffs.is_empty()
    }
}

/// Compute selector phrase set differences, both directions.
///
/// The first set holds phrases of `a` missing from `b`; the second holds
/// phrases of `b` missing from `a`. The ordered sets give deterministic
/// lexicographic iteration for display.
pub fn compare_selectors(a: &StyleSheet, b: &StyleSheet) -> (BTreeSet<String>, BTreeSet<String>) {
    let phrases_a: BTreeSet<&str> = a.index().phrases().collect();
    let phrases_b: BTreeSet<&str> = b.index().phrases().collect();

    let only_in_a = phrases_a
        .difference(&phrases_b)
        .map(|phrase| phrase.to_string())
        .collect();
    let only_in_b = phrases_b
        .difference(&phrases_a)
        .map(|phrase| phrase.to_string())
        .collect();

    (only_in_a, only_in_b)
}

/// Compute functional declaration differences for every phrase present in
/// both sheets.
///
/// A phrase's declared style is the union of all rule blocks declaring it:
/// duplicates across blocks collapse to one entry, and cascade override
/// order is not modeled. The only question asked is whether a given
/// name/value/priority triple is declared anywhere for the phrase. Phrases
/// unique to one sheet are not compared at all.
pub fn compare_declarations(
    a: &StyleSheet,
    b: &StyleSheet,
) -> Result<BTreeMap<String, DeclarationDiff>> {
    let mut diffs = BTreeMap::new();

    for phrase in a.index().phrases() {
        if !b.index().contains(phrase) {
            continue;
        }

        let decls_a = declared_set(a, phrase)?;
        let decls_b = declared_set(b, phrase)?;

        let only_in_a: BTreeSet<_> = decls_a.difference(&decls_b).cloned().collect();
        let only_in_b: BTreeSet<_> = decls_b.difference(&decls_a).cloned().collect();

        if !only_in_a.is_empty() || !only_in_b.is_empty() {
            diffs.insert(
                phrase.to_string(),
                DeclarationDiff {
                    only_in_a,
                    only_in_b,
                },
            );
        }
    }

    Ok(diffs)
}

/// The union of normalized declarations across all blocks declaring `phrase`.
fn declared_set(sheet: &StyleSheet, phrase: &str) -> Result<BTreeSet<NormalizedDeclaration>> {
    let mut declarations = BTreeSet::new();
    for rule in sheet.rules_for(phrase) {
        for declaration in &rule.declarations {
            declarations.insert(NormalizedDeclaration::new(declaration)?);
        }
    }
    Ok(declarations)
}

/// Compare two stylesheets in full.
///
/// Pure with respect to its inputs: neither sheet is mutated, and repeated
/// calls yield identical results. Normalization errors propagate; a single
/// malformed declaration aborts the whole comparison.
pub fn compare(a: &StyleSheet, b: &StyleSheet) -> Result<DiffResult> {
    let (selectors_only_in_a, selectors_only_in_b) = compare_selectors(a, b);
    let declaration_diffs = compare_declarations(a, b)?;

    Ok(DiffResult {
        selectors_only_in_a,
        selectors_only_in_b,
        declaration_diffs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(css: &str) -> StyleSheet {
        StyleSheet::from_css("test.css", css).unwrap()
    }

    fn strings(set: &BTreeSet<NormalizedDeclaration>) -> Vec<String> {
        set.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn selector_set_difference() {
        let a = sheet(".a { color: red; } .b { color: red; }");
        let b = sheet(".b { color: red; } .c { color: red; }");

        let (only_a, only_b) = compare_selectors(&a, &b);

        assert_eq!(only_a, BTreeSet::from([".a".to_string()]));
        assert_eq!(only_b, BTreeSet::from([".c".to_string()]));
    }

    #[test]
    fn selector_comparison_is_symmetric() {
        let a = sheet(".a { color: red; } .shared { color: red; }");
        let b = sheet(".b { color: red; } .shared { color: red; }");

        let forward = compare_selectors(&a, &b);
        let backward = compare_selectors(&b, &a);

        assert_eq!(forward.0, backward.1);
        assert_eq!(forward.1, backward.0);
    }

    #[test]
    fn comparing_a_sheet_with_itself_is_empty() {
        let a = sheet(".a { color: red; width: 10px; } .b, .c { margin: 0; }");

        let diff = compare(&a, &a).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn declaration_order_is_irrelevant() {
        let a = sheet(".x { width: 100px; height: 200px; }");
        let b = sheet(".x { height: 200px; width: 100px; }");

        assert!(compare(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn split_blocks_union_like_one_block() {
        let a = sheet(".x { width: 100px; } .x { height: 200px; }");
        let b = sheet(".x { height: 200px; width: 100px; }");

        assert!(compare_declarations(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn declaration_diff_is_detected() {
        let a = sheet(".y { color: #ffffff; }");
        let b = sheet(".y { color: #ff0000; }");

        let diffs = compare_declarations(&a, &b).unwrap();
        let diff = diffs.get(".y").expect("diff entry for .y");

        assert_eq!(strings(&diff.only_in_a), vec!["color: #ffffff"]);
        assert_eq!(strings(&diff.only_in_b), vec!["color: #ff0000"]);
    }

    #[test]
    fn equivalent_color_notations_do_not_differ() {
        let a = sheet(".y { color: #FF0000; background-color: white; }");
        let b = sheet(".y { color: rgb(255, 0, 0); background-color: #fff; }");

        assert!(compare_declarations(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn priority_difference_is_detected() {
        let a = sheet(".y { color: red; }");
        let b = sheet(".y { color: red !important; }");

        let diffs = compare_declarations(&a, &b).unwrap();
        let diff = diffs.get(".y").expect("diff entry for .y");

        assert_eq!(strings(&diff.only_in_a), vec!["color: #ff0000"]);
        assert_eq!(strings(&diff.only_in_b), vec!["color: #ff0000 !important"]);
    }

    #[test]
    fn unique_selectors_are_not_compared() {
        let a = sheet(".only-a { color: red; }");
        let b = sheet(".only-b { color: blue; }");

        let diff = compare(&a, &b).unwrap();

        assert!(diff.declaration_diffs.is_empty());
        assert!(diff.selectors_only_in_a.contains(".only-a"));
        assert!(diff.selectors_only_in_b.contains(".only-b"));
    }

    #[test]
    fn selector_phrases_stay_case_sensitive() {
        let a = sheet(".Foo { color: red; }");
        let b = sheet(".foo { color: red; }");

        let (only_a, only_b) = compare_selectors(&a, &b);

        assert!(only_a.contains(".Foo"));
        assert!(only_b.contains(".foo"));
    }

    #[test]
    fn comma_lists_compare_per_phrase() {
        let a = sheet("h1, h2 { margin: 0; }");
        let b = sheet("h2 { margin: 0; } h3 { margin: 0; }");

        let (only_a, only_b) = compare_selectors(&a, &b);

        assert_eq!(only_a, BTreeSet::from(["h1".to_string()]));
        assert_eq!(only_b, BTreeSet::from(["h3".to_string()]));
        assert!(compare_declarations(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn invalid_color_aborts_comparison() {
        let a = sheet(".y { color: #12345; }");
        let b = sheet(".y { color: red; }");

        assert!(compare(&a, &b).is_err());
    }
}
