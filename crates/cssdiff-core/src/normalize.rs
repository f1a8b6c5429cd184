//! Functional normalization of declarations.

use std::fmt;

use crate::Result;
use crate::color;
use crate::rules::Declaration;

/// A declaration reduced to its functional identity.
///
/// Two declarations are functionally equal iff their lower-cased property
/// name, normalized value text, and `!important` flag all match. Source
/// position and block membership never participate. `Eq`, `Hash`, and
/// `Ord` all derive from exactly those three fields, so sets of normalized
/// declarations behave consistently with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedDeclaration {
    /// Property name, ASCII-lower-cased.
    pub name: String,
    /// Canonical value text, with single color terms rewritten to `#rrggbb`.
    pub value: String,
    /// Whether the declaration carries `!important`.
    pub important: bool,
}

impl NormalizedDeclaration {
    /// Normalize a raw declaration.
    ///
    /// Lower-cases the property name and rewrites the value through the
    /// color normalizer when it resolves as a single color term. Propagates
    /// [`Error::InvalidColor`](crate::Error::InvalidColor) when the value
    /// self-identifies as a color that cannot be resolved.
    pub fn new(declaration: &Declaration) -> Result<Self> {
        let value = match color::parse_color(&declaration.value)? {
            Some(rgba) => rgba.to_hex(),
            None => declaration.value.clone(),
        };

        Ok(Self {
            name: declaration.name.to_ascii_lowercase(),
            value,
            important: declaration.important,
        })
    }
}

impl fmt::Display for NormalizedDeclaration {
    /// Canonical string form: `name: value`, with ` !important` appended
    /// when the priority flag is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)?;
        if self.important {
            write!(f, " !important")?;
        }
        Ok(())
    }
}
