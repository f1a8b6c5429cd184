//! Style rules, stylesheets, and the selector phrase index.

mod index;
mod rule;
mod stylesheet;

pub use index::SelectorIndex;
pub use rule::{Declaration, StyleRule};
pub use stylesheet::StyleSheet;
