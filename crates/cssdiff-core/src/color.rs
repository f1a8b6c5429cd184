//! Color value normalization.
//!
//! Declaration values that consist of a single color term (hex, named
//! keyword, `rgb()`/`rgba()`, `hsl()`/`hsla()`) are rewritten to a canonical
//! lowercase `#rrggbb` form so that equivalent notations compare equal.
//! Alpha is always discarded: the canonical form has no transparency, so
//! two colors differing only in alpha are functionally equal here.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use crate::{Error, Result};

/// An RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    /// Create a color from 8-bit RGB channels, fully opaque.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Render as a lowercase, zero-padded `#rrggbb` string.
    ///
    /// Channels are emitted in red, green, blue order. Alpha never
    /// participates.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue)
        )
    }
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Try to resolve a canonical value text as a single color term.
///
/// Returns `Ok(None)` when the value is not a color at all: an unknown
/// keyword, a non-color function, or a multi-term value such as a border or
/// shadow shorthand. Returns [`Error::InvalidColor`] when the value
/// self-identifies as a color but its channels cannot be resolved (malformed
/// hash digits, bad `rgb()`/`hsl()` arguments).
pub fn parse_color(value: &str) -> Result<Option<Rgba>> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    parser.skip_whitespace();
    let token = match parser.next() {
        Ok(t) => t.clone(),
        Err(_) => return Ok(None),
    };

    // The inner Err marks a color-shaped term with unresolvable channels;
    // None marks a term that is not color-shaped at all.
    let resolved: Option<std::result::Result<Rgba, ()>> = match &token {
        Token::Hash(hash) | Token::IDHash(hash) => Some(parse_hex(hash.as_ref()).ok_or(())),
        Token::Ident(name) => named_color(name.as_ref()).map(Ok),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            Some(
                parser
                    .parse_nested_block(|args| parse_rgb_args(args))
                    .map_err(|_| ()),
            )
        }
        Token::Function(name)
            if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") =>
        {
            Some(
                parser
                    .parse_nested_block(|args| parse_hsl_args(args))
                    .map_err(|_| ()),
            )
        }
        _ => None,
    };

    parser.skip_whitespace();
    if !parser.is_exhausted() {
        // Trailing tokens: a shorthand or list, not a standalone color.
        return Ok(None);
    }

    match resolved {
        None => Ok(None),
        Some(Ok(rgba)) => Ok(Some(rgba)),
        Some(Err(())) => Err(Error::invalid_color(value)),
    }
}

/// Decode the digit portion of a hash token: `rgb`, `rrggbb`, or `rrggbbaa`.
fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Rgba::from_rgb8(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgba::from_rgb8(r, g, b))
        }
        8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let alpha = u8::from_str_radix(&hex[6..8], 16).ok()? as f32 / 255.0;
            Some(Rgba {
                alpha,
                ..Rgba::from_rgb8(r, g, b)
            })
        }
        _ => None,
    }
}

/// Parse `r, g, b[, a]` function arguments.
fn parse_rgb_args<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Rgba, CssParseError<'i, ()>> {
    let red = parse_color_component(parser)?;
    parser.expect_comma()?;
    let green = parse_color_component(parser)?;
    parser.expect_comma()?;
    let blue = parse_color_component(parser)?;
    let alpha = parse_optional_alpha(parser)?;
    parser.expect_exhausted()?;

    Ok(Rgba {
        red,
        green,
        blue,
        alpha,
    })
}

/// Parse `h, s%, l%[, a]` function arguments.
fn parse_hsl_args<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Rgba, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    let hue = match parser.next()? {
        Token::Number { value, .. } => *value,
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("deg") => *value,
        _ => return Err(parser.new_custom_error(())),
    };
    parser.expect_comma()?;
    let saturation = parse_percentage(parser)?;
    parser.expect_comma()?;
    let lightness = parse_percentage(parser)?;
    let alpha = parse_optional_alpha(parser)?;
    parser.expect_exhausted()?;

    let (red, green, blue) = hsl_to_rgb(hue, saturation, lightness);
    Ok(Rgba {
        red,
        green,
        blue,
        alpha,
    })
}

fn parse_color_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(*value / 255.0),
        Token::Percentage { unit_value, .. } => Ok(*unit_value),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_percentage<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_optional_alpha<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    if parser.try_parse(|p| p.expect_comma()).is_ok() {
        parser.skip_whitespace();
        match parser.next()? {
            Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
            Token::Percentage { unit_value, .. } => Ok(*unit_value),
            _ => Err(parser.new_custom_error(())),
        }
    } else {
        Ok(1.0)
    }
}

/// Convert HSL (hue in degrees, saturation/lightness in `[0,1]`) to RGB
/// channels in `[0,1]`.
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    if saturation == 0.0 {
        // Achromatic (gray)
        return (lightness, lightness, lightness);
    }

    let h = hue.rem_euclid(360.0) / 360.0;
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Resolve a CSS color keyword, case-insensitively.
///
/// Covers the extended keyword set plus `transparent` and `rebeccapurple`.
/// Unknown identifiers are not colors and yield `None`.
fn named_color(name: &str) -> Option<Rgba> {
    let name = name.to_ascii_lowercase();
    let rgba = match name.as_str() {
        "transparent" => Rgba {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 0.0,
        },
        "aliceblue" => Rgba::from_rgb8(240, 248, 255),
        "antiquewhite" => Rgba::from_rgb8(250, 235, 215),
        "aqua" | "cyan" => Rgba::from_rgb8(0, 255, 255),
        "aquamarine" => Rgba::from_rgb8(127, 255, 212),
        "azure" => Rgba::from_rgb8(240, 255, 255),
        "beige" => Rgba::from_rgb8(245, 245, 220),
        "bisque" => Rgba::from_rgb8(255, 228, 196),
        "black" => Rgba::from_rgb8(0, 0, 0),
        "blanchedalmond" => Rgba::from_rgb8(255, 235, 205),
        "blue" => Rgba::from_rgb8(0, 0, 255),
        "blueviolet" => Rgba::from_rgb8(138, 43, 226),
        "brown" => Rgba::from_rgb8(165, 42, 42),
        "burlywood" => Rgba::from_rgb8(222, 184, 135),
        "cadetblue" => Rgba::from_rgb8(95, 158, 160),
        "chartreuse" => Rgba::from_rgb8(127, 255, 0),
        "chocolate" => Rgba::from_rgb8(210, 105, 30),
        "coral" => Rgba::from_rgb8(255, 127, 80),
        "cornflowerblue" => Rgba::from_rgb8(100, 149, 237),
        "cornsilk" => Rgba::from_rgb8(255, 248, 220),
        "crimson" => Rgba::from_rgb8(220, 20, 60),
        "darkblue" => Rgba::from_rgb8(0, 0, 139),
        "darkcyan" => Rgba::from_rgb8(0, 139, 139),
        "darkgoldenrod" => Rgba::from_rgb8(184, 134, 11),
        "darkgray" | "darkgrey" => Rgba::from_rgb8(169, 169, 169),
        "darkgreen" => Rgba::from_rgb8(0, 100, 0),
        "darkkhaki" => Rgba::from_rgb8(189, 183, 107),
        "darkmagenta" => Rgba::from_rgb8(139, 0, 139),
        "darkolivegreen" => Rgba::from_rgb8(85, 107, 47),
        "darkorange" => Rgba::from_rgb8(255, 140, 0),
        "darkorchid" => Rgba::from_rgb8(153, 50, 204),
        "darkred" => Rgba::from_rgb8(139, 0, 0),
        "darksalmon" => Rgba::from_rgb8(233, 150, 122),
        "darkseagreen" => Rgba::from_rgb8(143, 188, 143),
        "darkslateblue" => Rgba::from_rgb8(72, 61, 139),
        "darkslategray" | "darkslategrey" => Rgba::from_rgb8(47, 79, 79),
        "darkturquoise" => Rgba::from_rgb8(0, 206, 209),
        "darkviolet" => Rgba::from_rgb8(148, 0, 211),
        "deeppink" => Rgba::from_rgb8(255, 20, 147),
        "deepskyblue" => Rgba::from_rgb8(0, 191, 255),
        "dimgray" | "dimgrey" => Rgba::from_rgb8(105, 105, 105),
        "dodgerblue" => Rgba::from_rgb8(30, 144, 255),
        "firebrick" => Rgba::from_rgb8(178, 34, 34),
        "floralwhite" => Rgba::from_rgb8(255, 250, 240),
        "forestgreen" => Rgba::from_rgb8(34, 139, 34),
        "fuchsia" | "magenta" => Rgba::from_rgb8(255, 0, 255),
        "gainsboro" => Rgba::from_rgb8(220, 220, 220),
        "ghostwhite" => Rgba::from_rgb8(248, 248, 255),
        "gold" => Rgba::from_rgb8(255, 215, 0),
        "goldenrod" => Rgba::from_rgb8(218, 165, 32),
        "gray" | "grey" => Rgba::from_rgb8(128, 128, 128),
        "green" => Rgba::from_rgb8(0, 128, 0),
        "greenyellow" => Rgba::from_rgb8(173, 255, 47),
        "honeydew" => Rgba::from_rgb8(240, 255, 240),
        "hotpink" => Rgba::from_rgb8(255, 105, 180),
        "indianred" => Rgba::from_rgb8(205, 92, 92),
        "indigo" => Rgba::from_rgb8(75, 0, 130),
        "ivory" => Rgba::from_rgb8(255, 255, 240),
        "khaki" => Rgba::from_rgb8(240, 230, 140),
        "lavender" => Rgba::from_rgb8(230, 230, 250),
        "lavenderblush" => Rgba::from_rgb8(255, 240, 245),
        "lawngreen" => Rgba::from_rgb8(124, 252, 0),
        "lemonchiffon" => Rgba::from_rgb8(255, 250, 205),
        "lightblue" => Rgba::from_rgb8(173, 216, 230),
        "lightcoral" => Rgba::from_rgb8(240, 128, 128),
        "lightcyan" => Rgba::from_rgb8(224, 255, 255),
        "lightgoldenrodyellow" => Rgba::from_rgb8(250, 250, 210),
        "lightgray" | "lightgrey" => Rgba::from_rgb8(211, 211, 211),
        "lightgreen" => Rgba::from_rgb8(144, 238, 144),
        "lightpink" => Rgba::from_rgb8(255, 182, 193),
        "lightsalmon" => Rgba::from_rgb8(255, 160, 122),
        "lightseagreen" => Rgba::from_rgb8(32, 178, 170),
        "lightskyblue" => Rgba::from_rgb8(135, 206, 250),
        "lightslategray" | "lightslategrey" => Rgba::from_rgb8(119, 136, 153),
        "lightsteelblue" => Rgba::from_rgb8(176, 196, 222),
        "lightyellow" => Rgba::from_rgb8(255, 255, 224),
        "lime" => Rgba::from_rgb8(0, 255, 0),
        "limegreen" => Rgba::from_rgb8(50, 205, 50),
        "linen" => Rgba::from_rgb8(250, 240, 230),
        "maroon" => Rgba::from_rgb8(128, 0, 0),
        "mediumaquamarine" => Rgba::from_rgb8(102, 205, 170),
        "mediumblue" => Rgba::from_rgb8(0, 0, 205),
        "mediumorchid" => Rgba::from_rgb8(186, 85, 211),
        "mediumpurple" => Rgba::from_rgb8(147, 112, 219),
        "mediumseagreen" => Rgba::from_rgb8(60, 179, 113),
        "mediumslateblue" => Rgba::from_rgb8(123, 104, 238),
        "mediumspringgreen" => Rgba::from_rgb8(0, 250, 154),
        "mediumturquoise" => Rgba::from_rgb8(72, 209, 204),
        "mediumvioletred" => Rgba::from_rgb8(199, 21, 133),
        "midnightblue" => Rgba::from_rgb8(25, 25, 112),
        "mintcream" => Rgba::from_rgb8(245, 255, 250),
        "mistyrose" => Rgba::from_rgb8(255, 228, 225),
        "moccasin" => Rgba::from_rgb8(255, 228, 181),
        "navajowhite" => Rgba::from_rgb8(255, 222, 173),
        "navy" => Rgba::from_rgb8(0, 0, 128),
        "oldlace" => Rgba::from_rgb8(253, 245, 230),
        "olive" => Rgba::from_rgb8(128, 128, 0),
        "olivedrab" => Rgba::from_rgb8(107, 142, 35),
        "orange" => Rgba::from_rgb8(255, 165, 0),
        "orangered" => Rgba::from_rgb8(255, 69, 0),
        "orchid" => Rgba::from_rgb8(218, 112, 214),
        "palegoldenrod" => Rgba::from_rgb8(238, 232, 170),
        "palegreen" => Rgba::from_rgb8(152, 251, 152),
        "paleturquoise" => Rgba::from_rgb8(175, 238, 238),
        "palevioletred" => Rgba::from_rgb8(219, 112, 147),
        "papayawhip" => Rgba::from_rgb8(255, 239, 213),
        "peachpuff" => Rgba::from_rgb8(255, 218, 185),
        "peru" => Rgba::from_rgb8(205, 133, 63),
        "pink" => Rgba::from_rgb8(255, 192, 203),
        "plum" => Rgba::from_rgb8(221, 160, 221),
        "powderblue" => Rgba::from_rgb8(176, 224, 230),
        "purple" => Rgba::from_rgb8(128, 0, 128),
        "rebeccapurple" => Rgba::from_rgb8(102, 51, 153),
        "red" => Rgba::from_rgb8(255, 0, 0),
        "rosybrown" => Rgba::from_rgb8(188, 143, 143),
        "royalblue" => Rgba::from_rgb8(65, 105, 225),
        "saddlebrown" => Rgba::from_rgb8(139, 69, 19),
        "salmon" => Rgba::from_rgb8(250, 128, 114),
        "sandybrown" => Rgba::from_rgb8(244, 164, 96),
        "seagreen" => Rgba::from_rgb8(46, 139, 87),
        "seashell" => Rgba::from_rgb8(255, 245, 238),
        "sienna" => Rgba::from_rgb8(160, 82, 45),
        "silver" => Rgba::from_rgb8(192, 192, 192),
        "skyblue" => Rgba::from_rgb8(135, 206, 235),
        "slateblue" => Rgba::from_rgb8(106, 90, 205),
        "slategray" | "slategrey" => Rgba::from_rgb8(112, 128, 144),
        "snow" => Rgba::from_rgb8(255, 250, 250),
        "springgreen" => Rgba::from_rgb8(0, 255, 127),
        "steelblue" => Rgba::from_rgb8(70, 130, 180),
        "tan" => Rgba::from_rgb8(210, 180, 140),
        "teal" => Rgba::from_rgb8(0, 128, 128),
        "thistle" => Rgba::from_rgb8(216, 191, 216),
        "tomato" => Rgba::from_rgb8(255, 99, 71),
        "turquoise" => Rgba::from_rgb8(64, 224, 208),
        "violet" => Rgba::from_rgb8(238, 130, 238),
        "wheat" => Rgba::from_rgb8(245, 222, 179),
        "white" => Rgba::from_rgb8(255, 255, 255),
        "whitesmoke" => Rgba::from_rgb8(245, 245, 245),
        "yellow" => Rgba::from_rgb8(255, 255, 0),
        "yellowgreen" => Rgba::from_rgb8(154, 205, 50),
        _ => return None,
    };
    Some(rgba)
}
