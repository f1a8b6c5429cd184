//! Rule and declaration types produced by the parser.

/// One property declaration inside a rule block.
///
/// The value is stored as the canonical text rendered from its token stream
/// at parse time. Source position fields exist for diagnostics only and must
/// never participate in equality; functional equality lives on
/// [`NormalizedDeclaration`](crate::normalize::NormalizedDeclaration), so
/// this type deliberately derives no equality at all.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Property name as written in source.
    pub name: String,
    /// Canonical text rendering of the value tokens.
    pub value: String,
    /// Whether the declaration carries `!important`.
    pub important: bool,
    /// Source line where the declaration's name begins (1-based).
    pub line: u32,
    /// Source column where the declaration's name begins (1-based).
    pub column: u32,
}

/// One `selector { declarations }` block as it appears in source.
///
/// Each rule has:
/// - The verbatim selector list text (embedded commas preserved)
/// - The declarations in source order
///
/// Multiple blocks may share a selector phrase; grouping them is the
/// [`SelectorIndex`](crate::rules::SelectorIndex)'s job, not the rule's.
#[derive(Debug, Clone)]
pub struct StyleRule {
    /// Verbatim selector list text, trimmed of surrounding whitespace.
    pub selector: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Create a new rule.
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    /// The comma-separated selector phrases of this rule, each trimmed.
    ///
    /// `.a, .b { … }` yields `.a` and `.b`. Empty pieces left behind by
    /// stray commas are dropped.
    pub fn selector_phrases(&self) -> impl Iterator<Item = &str> {
        self.selector
            .split(',')
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty())
    }
}
