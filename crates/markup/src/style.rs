//! Style bodies: the text inside a `[...]` opener.
//!
//! Grammar: `<fg> [on <bg>] <attr>*`, whitespace separated. The first token
//! is always the foreground, even when it is not a color.

use crate::attribute::{Attribute, AttributeRegistry};
use crate::color::Color;

const BACKGROUND_KEYWORD: &str = "on";

/// Parsed style specification for one region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color, present only after `on`.
    pub bg: Option<Color>,
    /// Recognized attributes, in the order they appeared.
    pub attributes: Vec<Attribute>,
}

impl Style {
    /// Parse a style body with the default attribute registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::{Color, NamedColor, Style};
    ///
    /// let style = Style::parse("red on blue bold");
    /// assert_eq!(style.fg, Color::Named(NamedColor::Red));
    /// assert_eq!(style.bg, Some(Color::Named(NamedColor::Blue)));
    /// assert_eq!(style.attributes.len(), 1);
    ///
    /// let style = Style::parse("#ff0000 italic");
    /// assert!(style.fg.is_hex());
    /// assert!(style.attributes.is_empty());
    /// ```
    pub fn parse(body: &str) -> Self {
        Self::parse_with(body, &AttributeRegistry::default())
    }

    /// Parse a style body, recognizing attributes from `registry`.
    ///
    /// Never fails. An empty body yields the default style (white, no
    /// background, no attributes). A trailing `on` with no color after it is
    /// treated as an attribute name, and so ignored.
    pub fn parse_with(body: &str, registry: &AttributeRegistry) -> Self {
        let tokens: Vec<&str> = body.split_whitespace().collect();

        let Some(fg) = tokens.first() else {
            return Self::default();
        };

        let (bg, attribute_names) = match tokens.as_slice() {
            [_, BACKGROUND_KEYWORD, bg, rest @ ..] => (Some(Color::resolve(bg)), rest),
            [_, rest @ ..] => (None, rest),
            [] => (None, &[][..]),
        };

        let attributes = attribute_names
            .iter()
            .filter_map(|name| registry.lookup(name))
            .collect();

        Self {
            fg: Color::resolve(fg),
            bg,
            attributes,
        }
    }

    pub fn has_background(&self) -> bool {
        self.bg.is_some()
    }
}
