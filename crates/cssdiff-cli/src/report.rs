//! Console rendering of a comparison result.
//!
//! The layout is fixed: phrase counts for both sheets, the missing/extra
//! counts, the first few phrases of each kind, then a per-selector listing
//! of declarations found on one side only. Writing into a generic
//! [`io::Write`] keeps the emitter testable without spawning the binary.

use std::io::{self, Write};

use colored::Colorize;
use cssdiff_core::{DiffResult, StyleSheet};

/// How many missing/extra phrases are listed before truncation.
const DISPLAY_LIMIT: usize = 5;

/// Write the full comparison report for `a` against `b`.
pub fn write_report<W: Write>(
    out: &mut W,
    a: &StyleSheet,
    b: &StyleSheet,
    diff: &DiffResult,
) -> io::Result<()> {
    writeln!(
        out,
        "Found {} distinct selector phrases in {}.",
        a.index().len(),
        a.source()
    )?;
    writeln!(
        out,
        "Found {} distinct selector phrases in {}.",
        b.index().len(),
        b.source()
    )?;
    writeln!(
        out,
        "There are {} phrases from {} missing from {}.",
        diff.selectors_only_in_a.len(),
        a.source(),
        b.source()
    )?;
    writeln!(
        out,
        "There are {} extra phrases found from {}.",
        diff.selectors_only_in_b.len(),
        b.source()
    )?;

    writeln!(out, "{}", "===== missing (1st 5) =====".bold())?;
    for phrase in diff.selectors_only_in_a.iter().take(DISPLAY_LIMIT) {
        writeln!(out, "[{}]", phrase.as_str().cyan())?;
    }

    writeln!(out, "{}", "=====  extra (1st 5)  =====".bold())?;
    for phrase in diff.selectors_only_in_b.iter().take(DISPLAY_LIMIT) {
        writeln!(out, "[{}]", phrase.as_str().cyan())?;
    }

    for (phrase, entry) in &diff.declaration_diffs {
        writeln!(out, "selector: {}", phrase.as_str().cyan())?;
        if !entry.only_in_a.is_empty() {
            writeln!(out, "    found in {} but not {}:", a.source(), b.source())?;
            for declaration in &entry.only_in_a {
                writeln!(out, "        {declaration}")?;
            }
        }
        if !entry.only_in_b.is_empty() {
            writeln!(out, "    found in {} but not {}:", b.source(), a.source())?;
            for declaration in &entry.only_in_b {
                writeln!(out, "        {declaration}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssdiff_core::compare;

    fn render(a_css: &str, b_css: &str) -> String {
        // Force plain output so the assertions see no escape codes.
        colored::control::set_override(false);

        let a = StyleSheet::from_css("a.css", a_css).unwrap();
        let b = StyleSheet::from_css("b.css", b_css).unwrap();
        let diff = compare(&a, &b).unwrap();

        let mut buf = Vec::new();
        write_report(&mut buf, &a, &b, &diff).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_report_layout() {
        let report = render(
            ".a { color: red; } .shared { margin: 0; }",
            ".b { color: blue; } .shared { margin: 4px; }",
        );

        let expected = "\
Found 2 distinct selector phrases in a.css.
Found 2 distinct selector phrases in b.css.
There are 1 phrases from a.css missing from b.css.
There are 1 extra phrases found from b.css.
===== missing (1st 5) =====
[.a]
=====  extra (1st 5)  =====
[.b]
selector: .shared
    found in a.css but not b.css:
        margin: 0
    found in b.css but not a.css:
        margin: 4px
";
        assert_eq!(report, expected);
    }

    #[test]
    fn missing_list_truncates_to_five() {
        let report = render(
            ".a {c:1} .b {c:1} .c {c:1} .d {c:1} .e {c:1} .f {c:1} .g {c:1}",
            ".zzz { c: 1; }",
        );

        let bracketed: Vec<&str> = report
            .lines()
            .skip_while(|line| !line.starts_with("====="))
            .skip(1)
            .take_while(|line| line.starts_with('['))
            .collect();
        assert_eq!(
            bracketed,
            vec!["[.a]", "[.b]", "[.c]", "[.d]", "[.e]"],
            "exactly the first five sorted phrases should be listed"
        );
        assert!(
            !report.contains("[.f]") && !report.contains("[.g]"),
            "phrases past the display limit must not appear"
        );
    }

    #[test]
    fn one_sided_entry_omits_empty_heading() {
        let report = render(
            ".x { width: 10px; height: 5px; }",
            ".x { width: 10px; }",
        );

        assert!(report.contains("selector: .x"));
        assert!(report.contains("    found in a.css but not b.css:"));
        assert!(report.contains("        height: 5px"));
        assert!(
            !report.contains("found in b.css but not a.css:"),
            "empty side must not print a heading"
        );
    }

    #[test]
    fn identical_sheets_report_only_counts() {
        let report = render(".x { color: red; }", ".x { color: RED; }");

        let expected = "\
Found 1 distinct selector phrases in a.css.
Found 1 distinct selector phrases in b.css.
There are 0 phrases from a.css missing from b.css.
There are 0 extra phrases found from b.css.
===== missing (1st 5) =====
=====  extra (1st 5)  =====
";
        assert_eq!(report, expected);
    }
}
