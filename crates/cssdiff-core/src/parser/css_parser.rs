//! CSS syntax parser using the `cssparser` crate.
//!
//! This module contains the core parsing logic for stylesheets. The parser
//! tokenizes CSS input and constructs [`StyleRule`] values holding the
//! verbatim selector text and the declarations with their values rendered
//! to canonical text.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, ToCss, Token};

use crate::rules::{Declaration, StyleRule};
use crate::{Error, Result};

/// Parse a CSS stylesheet string into a list of style rules.
///
/// # Arguments
///
/// * `css` - A string slice containing CSS stylesheet content.
///
/// # Returns
///
/// Returns `Ok(Vec<StyleRule>)` containing all parsed rules in source order.
///
/// Parsing is fail-fast: the first malformed rule or declaration aborts the
/// whole parse with [`Error::Parse`]. Comparing against a partially parsed
/// sheet would report phantom differences, so no recovery is attempted.
///
/// At-rules (`@media`, `@import`, ...) are outside comparison scope and are
/// skipped wholesale, prelude and block included.
///
/// # Example
///
/// ```ignore
/// let css = ".button { color: red; } .label { color: blue; }";
/// let rules = parse_css(css)?;
/// assert_eq!(rules.len(), 2);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];

    loop {
        // Skip whitespace and comments
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let state = parser.state();
        match parser.next() {
            // Legacy HTML comment guards sometimes wrap old stylesheets.
            Ok(Token::CDO) | Ok(Token::CDC) => continue,
            Ok(Token::AtKeyword(name)) => {
                let name = name.to_string();
                skip_at_rule(&mut parser).map_err(|e| convert_error("at-rule", e))?;
                tracing::debug!(rule = %name, "skipped at-rule");
            }
            Ok(_) => {
                parser.reset(&state);
                rules.push(parse_rule(&mut parser)?);
            }
            Err(_) => break,
        }
    }

    tracing::debug!(rule_count = rules.len(), "parsed stylesheet");
    Ok(rules)
}

/// Convert a cssparser error into a crate parse error at its source location.
fn convert_error(what: &str, e: CssParseError<'_, ()>) -> Error {
    Error::parse(
        format!("Failed to parse {}: {:?}", what, e.kind),
        e.location.line + 1,
        e.location.column,
    )
}

/// Parse a single CSS rule: selector { declarations }
fn parse_rule(parser: &mut Parser<'_, '_>) -> Result<StyleRule> {
    let location = parser.current_source_location();
    let start = parser.position();

    // Scan the selector prelude; the source slice from `start` keeps the
    // selector text verbatim, embedded commas included.
    parser
        .parse_until_before(cssparser::Delimiter::CurlyBracketBlock, |p| {
            while p.next_including_whitespace().is_ok() {}
            Ok::<_, CssParseError<'_, ()>>(())
        })
        .map_err(|e| convert_error("selector", e))?;

    let selector = parser.slice_from(start).trim().to_string();
    if selector.is_empty() {
        return Err(Error::parse(
            "Empty selector before '{'".to_string(),
            location.line + 1,
            location.column,
        ));
    }

    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block_parser| parse_declarations(block_parser))
            .map_err(|e| convert_error("declaration block", e))?,
        _ => {
            return Err(Error::parse(
                format!("Expected '{{' after selector '{}'", selector),
                location.line + 1,
                location.column,
            ));
        }
    };

    Ok(StyleRule::new(selector, declarations))
}

/// Parse the contents of a declaration block.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<Declaration>, CssParseError<'i, ()>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // Stray semicolons between declarations are legal.
        if parser.try_parse(|p| p.expect_semicolon()).is_ok() {
            continue;
        }

        let location = parser.current_source_location();
        let name = parser.expect_ident()?.to_string();
        parser.expect_colon()?;

        let mut value = String::new();
        parser.parse_until_before(
            cssparser::Delimiter::Bang | cssparser::Delimiter::Semicolon,
            |p| render_value(p, &mut value),
        )?;
        let value = value.trim_end().to_string();
        if value.is_empty() {
            return Err(parser.new_custom_error(()));
        }

        let important = parser.try_parse(cssparser::parse_important).is_ok();

        // After the value and optional priority, only `;` or the end of the
        // block may follow.
        parser.skip_whitespace();
        if !parser.is_exhausted() {
            let token = parser.next()?.clone();
            if !matches!(token, Token::Semicolon) {
                return Err(parser.new_custom_error(()));
            }
        }

        declarations.push(Declaration {
            name,
            value,
            important,
            line: location.line + 1,
            column: location.column,
        });
    }

    Ok(declarations)
}

/// Render a declaration value's token stream to canonical text.
///
/// Comments vanish at the tokenizer level; whitespace runs collapse to a
/// single space; commas render as `", "` regardless of source spacing;
/// nested blocks are re-emitted with their delimiters. Two values that
/// tokenize identically render identically.
fn render_value<'i>(
    parser: &mut Parser<'i, '_>,
    out: &mut String,
) -> std::result::Result<(), CssParseError<'i, ()>> {
    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match &token {
            Token::WhiteSpace(_) => {
                if !out.is_empty()
                    && !out.ends_with(' ')
                    && !out.ends_with('(')
                    && !out.ends_with('[')
                {
                    out.push(' ');
                }
            }
            Token::Comma => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push_str(", ");
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                out.push_str(&token.to_css_string());
                parser.parse_nested_block(|nested| render_value(nested, out))?;
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(closing_delimiter(&token));
            }
            Token::BadUrl(_) | Token::BadString(_) => {
                return Err(parser.new_custom_error(()));
            }
            _ => out.push_str(&token.to_css_string()),
        }
    }

    Ok(())
}

/// The closing delimiter matching a block-opening token.
fn closing_delimiter(token: &Token<'_>) -> char {
    match token {
        Token::Function(_) | Token::ParenthesisBlock => ')',
        Token::SquareBracketBlock => ']',
        _ => '}',
    }
}

/// Consume an entire at-rule: prelude plus its `;` or `{...}` block.
fn skip_at_rule<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<(), CssParseError<'i, ()>> {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) => return Ok(()),
            Ok(Token::CurlyBracketBlock) => {
                return parser.parse_nested_block(|block| {
                    while block.next().is_ok() {}
                    Ok(())
                });
            }
            Ok(_) => {}
            // End of input terminates the at-rule.
            Err(_) => return Ok(()),
        }
    }
}
