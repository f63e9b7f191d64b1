//! Select Graphic Rendition sequences for parsed styles.

use crate::color::{Color, Rgb};
use crate::style::Style;

/// Escape character that introduces a control sequence.
pub const ESC: char = '\x1b';

/// Sequence that resets every SGR attribute.
pub const RESET: &str = "\x1b[0m";

/// Build the SGR parameter list for a style, without `ESC[` or `m`.
///
/// | fg    | bg    | parameters                   |
/// |-------|-------|------------------------------|
/// | named | none  | `31`                         |
/// | named | named | `31;44`                      |
/// | named | hex   | `31;48;2;R;G;B`              |
/// | hex   | none  | `38;2;R;G;B`                 |
/// | hex   | named | `38;2;R;G;B;44`              |
/// | hex   | hex   | `38;2;R;G;B;48;2;R;G;B`      |
///
/// Attribute codes follow, in order. A named background after a hex
/// foreground stays a bare 40-47 code after the RGB triplet.
///
/// ```
/// use markup::{Style, sgr};
///
/// assert_eq!(sgr::parameters(&Style::parse("red on blue bold")), "31;44;1");
/// assert_eq!(sgr::parameters(&Style::parse("#fff on green")), "38;2;255;255;255;42");
/// ```
pub fn parameters(style: &Style) -> String {
    let mut params = String::with_capacity(32);

    match &style.fg {
        Color::Named(named) => push_code(&mut params, named.fg_code()),
        Color::Hex(hex) => push_true_color(&mut params, 38, hex),
    }

    match &style.bg {
        None => {}
        Some(Color::Named(named)) => push_code(&mut params, named.bg_code()),
        Some(Color::Hex(hex)) => push_true_color(&mut params, 48, hex),
    }

    for attribute in &style.attributes {
        push_code(&mut params, attribute.code);
    }

    params
}

/// Wrap `content` in the style's opening sequence and a trailing reset.
///
/// ```
/// use markup::{Style, sgr};
///
/// assert_eq!(
///     sgr::paint(&Style::parse("green"), "ok"),
///     "\x1b[32mok\x1b[0m"
/// );
/// ```
pub fn paint(style: &Style, content: &str) -> String {
    let params = parameters(style);
    let mut out = String::with_capacity(params.len() + content.len() + RESET.len() + 3);
    out.push(ESC);
    out.push('[');
    out.push_str(&params);
    out.push('m');
    out.push_str(content);
    out.push_str(RESET);
    out
}

fn push_code(params: &mut String, code: u8) {
    if !params.is_empty() {
        params.push(';');
    }
    params.push_str(&code.to_string());
}

fn push_true_color(params: &mut String, introducer: u8, hex: &str) {
    push_code(params, introducer);
    let rgb = Rgb::from_hex(hex);
    params.push_str(&format!(";2;{}", rgb));
}
