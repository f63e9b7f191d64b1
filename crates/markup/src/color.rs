//! Color tokens for markup styles.
//!
//! A token is either one of the eight base terminal colors or a `#` hex
//! literal. Resolution never fails: unknown names fall back to white.

use std::fmt;

/// One of the eight base terminal colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl NamedColor {
    /// All named colors, in SGR code order.
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Look up a color by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "black" => Some(NamedColor::Black),
            "red" => Some(NamedColor::Red),
            "green" => Some(NamedColor::Green),
            "yellow" => Some(NamedColor::Yellow),
            "blue" => Some(NamedColor::Blue),
            "magenta" => Some(NamedColor::Magenta),
            "cyan" => Some(NamedColor::Cyan),
            "white" => Some(NamedColor::White),
            _ => None,
        }
    }

    /// Foreground SGR code (30-37).
    pub fn fg_code(self) -> u8 {
        30 + self as u8
    }

    /// Background SGR code (40-47).
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }
}

/// 24-bit color components decoded from a hex token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a hex literal such as `#ff8800` or `#f80`.
    ///
    /// The leading `#` is optional. Three-digit shorthand is doubled per
    /// digit. Each component is read from a two-byte window; a window that
    /// is missing or not two hex digits decodes to 0. Bytes after the sixth
    /// are ignored.
    ///
    /// ```
    /// use markup::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#abc"), Rgb::new(170, 187, 204));
    /// assert_eq!(Rgb::from_hex("#aabbcc"), Rgb::new(170, 187, 204));
    /// assert_eq!(Rgb::from_hex("#zz0000"), Rgb::new(0, 0, 0));
    /// ```
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

        let expanded: Vec<u8>;
        let digits = if digits.len() == 3 {
            expanded = digits.iter().flat_map(|&d| [d, d]).collect();
            &expanded[..]
        } else {
            digits
        };

        Self {
            r: Self::component(digits, 0),
            g: Self::component(digits, 2),
            b: Self::component(digits, 4),
        }
    }

    fn component(digits: &[u8], at: usize) -> u8 {
        match digits.get(at..at + 2) {
            Some([hi, lo]) => match (Self::hex_digit(*hi), Self::hex_digit(*lo)) {
                (Some(hi), Some(lo)) => hi * 16 + lo,
                _ => 0,
            },
            _ => 0,
        }
    }

    fn hex_digit(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    /// Formats as the `R;G;B` tail of a true-color SGR parameter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.r, self.g, self.b)
    }
}

/// A resolved color token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Color {
    /// One of the eight base colors.
    Named(NamedColor),
    /// A `#` literal. The raw token is kept so malformed input still
    /// round-trips through `Display`.
    Hex(String),
}

impl Color {
    /// Resolve a color token. Total: anything that is neither a known name
    /// nor a `#` literal becomes white.
    ///
    /// ```
    /// use markup::{Color, NamedColor};
    ///
    /// assert_eq!(Color::resolve("Red"), Color::Named(NamedColor::Red));
    /// assert_eq!(Color::resolve("#0f0"), Color::Hex("#0f0".into()));
    /// assert_eq!(Color::resolve("chartreuse"), Color::Named(NamedColor::White));
    /// ```
    pub fn resolve(token: &str) -> Self {
        if let Some(named) = NamedColor::from_name(token) {
            return Color::Named(named);
        }

        if token.starts_with('#') {
            return Color::Hex(token.to_string());
        }

        Color::default()
    }

    pub fn is_hex(&self) -> bool {
        matches!(self, Color::Hex(_))
    }

    /// RGB components for a hex color, `None` for named colors.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Color::Hex(hex) => Some(Rgb::from_hex(hex)),
            Color::Named(_) => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::default())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Hex(hex) => f.write_str(hex),
        }
    }
}
