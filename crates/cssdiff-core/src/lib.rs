//! Semantic comparison of CSS stylesheets.
//!
//! This crate parses a pair of stylesheets and reports the functional
//! differences between them, featuring:
//!
//! - **Parsing**: Tokenizer-backed rule extraction with canonical value
//!   rendering, so cosmetic whitespace never counts as a difference
//! - **Normalization**: Color values collapse to `#rrggbb` across hex,
//!   named, `rgb()`, and `hsl()` notations; property names fold to lowercase
//! - **Indexing**: Selector phrases mapped to every rule block that declares
//!   them, however the source groups or repeats its selectors
//! - **Comparison**: Set differences over selector phrases and over the
//!   declared style of each shared phrase
//!
//! # Example
//!
//! ```
//! use cssdiff_core::{StyleSheet, compare};
//!
//! let old = StyleSheet::from_css("old.css", ".btn { color: #fff; }")?;
//! let new = StyleSheet::from_css("new.css", ".btn { color: white; }")?;
//!
//! // The two notations name the same color, so nothing differs.
//! let diff = compare(&old, &new)?;
//! assert!(diff.is_empty());
//! # Ok::<(), cssdiff_core::Error>(())
//! ```

pub mod color;
pub mod compare;
pub mod normalize;
pub mod parser;
pub mod rules;

mod error;

pub use compare::{DeclarationDiff, DiffResult, compare, compare_declarations, compare_selectors};
pub use error::{Error, Result};
pub use normalize::NormalizedDeclaration;
pub use rules::{Declaration, SelectorIndex, StyleRule, StyleSheet};
