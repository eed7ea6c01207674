//! Wrapping text in color and style escape sequences.

use crate::ansi::{sgr, Color, Style, RESET};
use crate::capability::supports_color;

/// A color argument that tolerates unknown names.
///
/// Names outside the palette resolve to "no color" instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorToken(Option<Color>);

impl ColorToken {
    /// No color.
    pub const NONE: Self = Self(None);

    /// The resolved color, if any.
    pub fn color(self) -> Option<Color> {
        self.0
    }
}

impl From<Color> for ColorToken {
    fn from(color: Color) -> Self {
        Self(Some(color))
    }
}

impl From<u8> for ColorToken {
    fn from(code: u8) -> Self {
        Self(Some(Color::Code(code)))
    }
}

impl From<&str> for ColorToken {
    fn from(name: &str) -> Self {
        Self(Color::from_name(name))
    }
}

impl From<&String> for ColorToken {
    fn from(name: &String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<String> for ColorToken {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl<T: Into<ColorToken>> From<Option<T>> for ColorToken {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Color, styles and leading glyph to apply to a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paint {
    color: Option<Color>,
    styles: Vec<Style>,
    emoji: Option<String>,
}

impl Paint {
    /// A paint with no color, styles or glyph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color. Unknown names clear it.
    pub fn color(mut self, color: impl Into<ColorToken>) -> Self {
        self.color = color.into().color();
        self
    }

    /// Append one style by name; unknown names are skipped.
    pub fn style(mut self, name: &str) -> Self {
        self.styles.extend(Style::from_name(name));
        self
    }

    /// Replace the style list, keeping caller order and skipping unknown names.
    pub fn styles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.styles = names
            .into_iter()
            .filter_map(|name| Style::from_name(name.as_ref()))
            .collect();
        self
    }

    /// Set the leading glyph. An empty glyph means none.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        let emoji = emoji.into();
        self.emoji = (!emoji.is_empty()).then_some(emoji);
        self
    }

    /// Drop the leading glyph.
    pub fn no_emoji(mut self) -> Self {
        self.emoji = None;
        self
    }

    /// The leading glyph, if one is set.
    pub fn glyph(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    /// SGR parameters in emission order: color first, then styles.
    pub fn codes(&self) -> Vec<u8> {
        self.color
            .map(Color::code)
            .into_iter()
            .chain(self.styles.iter().map(|s| s.code()))
            .collect()
    }

    /// Render `text` with this paint.
    ///
    /// When `enabled` is false the result is the glyph-prefixed plain text.
    pub fn apply(&self, text: &str, enabled: bool) -> String {
        let glyph = match &self.emoji {
            Some(emoji) => format!("{} ", emoji),
            None => String::new(),
        };

        if !enabled {
            return format!("{}{}", glyph, text);
        }

        format!("{}{}{}{}", sgr(&self.codes()), glyph, text, RESET)
    }
}

/// Color `text` for the current stdout.
///
/// Unknown color or style names are ignored. When stdout does not support
/// escape sequences only the glyph prefix is added.
///
/// ```
/// use termcolorx::{colored, Color};
///
/// let out = colored("done", Color::Green, ["bold"], None);
/// assert!(out.ends_with("done") || out.ends_with("done\x1b[0m"));
/// ```
pub fn colored<C, I, S>(text: &str, color: C, styles: I, emoji: Option<&str>) -> String
where
    C: Into<ColorToken>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paint = Paint::new().color(color).styles(styles);
    if let Some(emoji) = emoji {
        paint = paint.emoji(emoji);
    }
    paint.apply(text, supports_color())
}

pub use self::colored as style_text;

/// Every palette color name rendered in its own color, separated by two spaces.
pub fn palette_sample(enabled: bool) -> String {
    Color::palette()
        .filter_map(|color| {
            let name = color.name()?;
            Some(Paint::new().color(color).apply(name, enabled))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
