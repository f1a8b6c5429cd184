//! End-to-end comparison tests over realistic stylesheets.

use std::collections::BTreeSet;
use std::io::Write;

use cssdiff_core::{StyleSheet, compare};

/// First cut of a small site theme.
const BASE_CSS: &str = r#"
/* Site theme, first cut. */

@import url("fonts.css");

body {
    margin: 0;
    font-family: Georgia, serif;
}

h1, h2 {
    font-weight: bold;
    margin-bottom: 12px;
}

.btn {
    color: #fff;
    background-color: #0050a0;
    padding: 4px 12px;
}

.nav a {
    color: RED;
    text-decoration: none;
}

.sidebar {
    float: left;
    width: 200px;
}

@media print {
    .sidebar { display: none; }
}
"#;

/// A revision: the sidebar is gone, an alert style is new, the button text
/// color changed, and two rules were reformatted without changing meaning.
const REVISED_CSS: &str = r#"
body { margin: 0; font-family: Georgia , serif; }

h1 {
    font-weight: bold;
    margin-bottom: 12px;
}
h2 {
    font-weight: bold;
    margin-bottom: 12px;
}

.btn {
    color: #eee;
    background-color: #0050A0;
    padding: 4px  12px;
}

.nav a {
    color: rgb(255, 0, 0);
    text-decoration: none;
}

.alert-info {
    color: navy;
    border: 1px solid navy;
}
"#;

fn fixtures() -> (StyleSheet, StyleSheet) {
    let base = StyleSheet::from_css("base.css", BASE_CSS).expect("base sheet should parse");
    let revised =
        StyleSheet::from_css("revised.css", REVISED_CSS).expect("revised sheet should parse");
    (base, revised)
}

#[test]
fn test_identical_sheets_compare_empty() {
    let base = StyleSheet::from_css("base.css", BASE_CSS).unwrap();
    let again = StyleSheet::from_css("again.css", BASE_CSS).unwrap();

    let diff = compare(&base, &again).expect("comparison should succeed");
    assert!(
        diff.is_empty(),
        "a sheet compared with itself should have no differences: {diff:?}"
    );
}

#[test]
fn test_selector_differences_are_reported() {
    let (base, revised) = fixtures();

    let diff = compare(&base, &revised).unwrap();

    assert_eq!(
        diff.selectors_only_in_a,
        BTreeSet::from([".sidebar".to_string()]),
        "only the sidebar phrase should be missing from the revision"
    );
    assert_eq!(
        diff.selectors_only_in_b,
        BTreeSet::from([".alert-info".to_string()]),
        "only the alert phrase should be new in the revision"
    );
}

#[test]
fn test_declaration_differences_are_reported() {
    let (base, revised) = fixtures();

    let diff = compare(&base, &revised).unwrap();

    let keys: Vec<_> = diff.declaration_diffs.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![".btn".to_string()],
        "only the button style changed functionally"
    );

    let btn = &diff.declaration_diffs[".btn"];
    let only_a: Vec<_> = btn.only_in_a.iter().map(ToString::to_string).collect();
    let only_b: Vec<_> = btn.only_in_b.iter().map(ToString::to_string).collect();
    assert_eq!(only_a, vec!["color: #ffffff"]);
    assert_eq!(only_b, vec!["color: #eeeeee"]);
}

#[test]
fn test_reformatted_rules_do_not_differ() {
    // Grouped selectors split apart, whitespace reshuffled, color notation
    // switched: none of it is a functional change, so none of these shared
    // phrases may appear in the diff.
    let (base, revised) = fixtures();

    let diff = compare(&base, &revised).unwrap();

    for phrase in ["body", "h1", "h2", ".nav a"] {
        assert!(
            !diff.declaration_diffs.contains_key(phrase),
            "{phrase} should not be reported as changed"
        );
    }
}

#[test]
fn test_sheets_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let base_path = dir.path().join("base.css");
    let revised_path = dir.path().join("revised.css");
    std::fs::File::create(&base_path)
        .unwrap()
        .write_all(BASE_CSS.as_bytes())
        .unwrap();
    std::fs::File::create(&revised_path)
        .unwrap()
        .write_all(REVISED_CSS.as_bytes())
        .unwrap();

    let base = StyleSheet::from_file(&base_path).expect("base file should load");
    let revised = StyleSheet::from_file(&revised_path).expect("revised file should load");

    assert_eq!(base.source(), base_path.display().to_string());

    let diff = compare(&base, &revised).unwrap();
    let (from_css_base, from_css_revised) = fixtures();
    let expected = compare(&from_css_base, &from_css_revised).unwrap();
    assert_eq!(
        diff, expected,
        "loading from files should not change the outcome"
    );
}
