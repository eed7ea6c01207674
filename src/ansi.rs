//! ANSI SGR tables and escape sequence composition.
//!
//! The palette and style tables are fixed: 8 base and 8 bright foreground
//! colors (SGR 30-37 and 90-97) plus seven text attributes.

use std::fmt;
use std::str::FromStr;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Foreground color, either from the 16-color palette or a raw SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Raw SGR parameter, emitted as-is.
    Code(u8),
}

/// Palette lookup table, in SGR order.
const PALETTE: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("bright_black", Color::BrightBlack),
    ("bright_red", Color::BrightRed),
    ("bright_green", Color::BrightGreen),
    ("bright_yellow", Color::BrightYellow),
    ("bright_blue", Color::BrightBlue),
    ("bright_magenta", Color::BrightMagenta),
    ("bright_cyan", Color::BrightCyan),
    ("bright_white", Color::BrightWhite),
];

impl Color {
    /// Looks up a palette color by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        PALETTE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }

    /// All named palette colors, base colors first.
    pub fn palette() -> impl Iterator<Item = Color> {
        PALETTE.iter().map(|(_, color)| *color)
    }

    /// The SGR parameter for this color.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
            Self::Code(n) => n,
        }
    }

    /// Canonical palette name, `None` for raw codes.
    pub fn name(self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(key, _)| *key)
    }
}

impl FromStr for Color {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownName(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.code()),
        }
    }
}

/// Text attribute applied alongside a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
}

const STYLES: &[(&str, Style)] = &[
    ("bold", Style::Bold),
    ("dim", Style::Dim),
    ("italic", Style::Italic),
    ("underline", Style::Underline),
    ("blink", Style::Blink),
    ("reverse", Style::Reverse),
    ("hidden", Style::Hidden),
];

impl Style {
    /// Looks up a style by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        STYLES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, style)| *style)
    }

    /// The SGR parameter for this style.
    pub fn code(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
            Self::Hidden => 8,
        }
    }

    /// Lowercase name as accepted by [`Style::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
            Self::Hidden => "hidden",
        }
    }
}

impl AsRef<str> for Style {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl FromStr for Style {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownName(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by the strict `FromStr` impls for names outside the tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color or style name: {0}")]
pub struct UnknownName(pub String);

/// Join SGR parameters into a single escape prefix.
///
/// An empty list yields an empty string rather than a bare `CSI m`,
/// which terminals would treat as a reset.
pub fn sgr(codes: &[u8]) -> String {
    if codes.is_empty() {
        return String::new();
    }
    let params: Vec<String> = codes.iter().map(u8::to_string).collect();
    format!("{}{}m", CSI, params.join(";"))
}
