//! Semantic message printing (success, warning, error, info, custom).
//!
//! A [`Message`] carries the text plus optional framing hints and line
//! terminator; a [`Printer`] decides color support and writes it out.

use std::io::{self, Write};

use crate::capability::ColorChoice;
use crate::frame::asciiize;
use crate::paint::{ColorToken, Paint};
use crate::theme::{Level, Theme};

/// Font hint fragments that select box framing.
const BOX_FONT_HINTS: &[&str] = &["big", "px", "20", "30", "40"];

/// A single message to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    paint: Paint,
    ascii: Option<String>,
    font: Option<String>,
    end: String,
}

impl Message {
    /// A message with no color, styles or glyph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            paint: Paint::new(),
            ascii: None,
            font: None,
            end: "\n".to_string(),
        }
    }

    /// A message styled by the level's theme entry.
    pub fn level(level: Level, theme: &Theme, text: impl Into<String>) -> Self {
        Self::new(text).paint(theme.level(level).paint())
    }

    /// Green, bold, `✅`, from the default theme.
    pub fn success(text: impl Into<String>) -> Self {
        Self::level(Level::Success, &Theme::default(), text)
    }

    /// Yellow, bold, `⚠️`, from the default theme.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::level(Level::Warning, &Theme::default(), text)
    }

    /// Red, bold, `❌`, from the default theme.
    pub fn error(text: impl Into<String>) -> Self {
        Self::level(Level::Error, &Theme::default(), text)
    }

    /// Blue, `ℹ️`, from the default theme.
    pub fn info(text: impl Into<String>) -> Self {
        Self::level(Level::Info, &Theme::default(), text)
    }

    /// Replace the whole paint.
    pub fn paint(mut self, paint: Paint) -> Self {
        self.paint = paint;
        self
    }

    /// Set the color; unknown names clear it.
    pub fn color(mut self, color: impl Into<ColorToken>) -> Self {
        self.paint = self.paint.color(color);
        self
    }

    /// Replace the styles, skipping unknown names.
    pub fn styles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.paint = self.paint.styles(names);
        self
    }

    /// Set the leading glyph.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.paint = self.paint.emoji(emoji);
        self
    }

    /// Print without a leading glyph.
    pub fn no_emoji(mut self) -> Self {
        self.paint = self.paint.no_emoji();
        self
    }

    /// Frame the message in a box (`true`) or not at all (`false`).
    pub fn ascii(mut self, enabled: bool) -> Self {
        self.ascii = enabled.then(|| "box".to_string());
        self
    }

    /// Frame the message with a named style; unknown names draw a box and an
    /// empty name disables framing.
    pub fn ascii_style(mut self, style: impl Into<String>) -> Self {
        let style = style.into();
        self.ascii = (!style.is_empty()).then_some(style);
        self
    }

    /// Font hint, consulted only when no ascii style is set.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Line terminator written after the message (default `"\n"`).
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    /// The unrendered message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Framing style this message resolves to, if any.
    pub fn frame_style(&self) -> Option<&str> {
        if let Some(style) = self.ascii.as_deref() {
            return Some(style);
        }

        let font = self.font.as_deref()?.to_lowercase();
        if font.contains("banner") {
            Some("banner")
        } else if BOX_FONT_HINTS.iter().any(|hint| font.contains(hint)) {
            Some("box")
        } else {
            None
        }
    }

    /// Render the framed and colored block, without the line terminator.
    pub fn render(&self, color: bool) -> String {
        match self.frame_style() {
            Some(style) => self.paint.apply(&asciiize(&self.text, Some(style)), color),
            None => self.paint.apply(&self.text, color),
        }
    }
}

/// Writes messages to an output stream.
pub struct Printer<W: Write> {
    out: W,
    choice: ColorChoice,
    theme: Theme,
}

impl Printer<io::Stdout> {
    /// Printer for stdout with detected color support and the default theme.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    /// Printer over `out` with detected color support and the default theme.
    pub fn new(out: W) -> Self {
        Self {
            out,
            choice: ColorChoice::Auto,
            theme: Theme::default(),
        }
    }

    /// Decide color with `choice` instead of detecting it.
    pub fn with_choice(mut self, choice: ColorChoice) -> Self {
        self.choice = choice;
        self
    }

    /// Use `theme` for the level helpers.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The theme the level helpers use.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Build a message for `level` using this printer's theme.
    pub fn message(&self, level: Level, text: impl Into<String>) -> Message {
        Message::level(level, &self.theme, text)
    }

    /// Write a message followed by its terminator.
    pub fn emit(&mut self, message: &Message) -> io::Result<()> {
        let rendered = message.render(self.choice.enabled());
        write!(self.out, "{}{}", rendered, message.end)?;
        self.out.flush()
    }

    /// Print `text` at the success level of this printer's theme.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        let message = self.message(Level::Success, text);
        self.emit(&message)
    }

    /// Print `text` at the warning level of this printer's theme.
    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        let message = self.message(Level::Warning, text);
        self.emit(&message)
    }

    /// Print `text` at the error level of this printer's theme.
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let message = self.message(Level::Error, text);
        self.emit(&message)
    }

    /// Print `text` at the info level of this printer's theme.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        let message = self.message(Level::Info, text);
        self.emit(&message)
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print a message to stdout, ignoring write failures.
pub fn print(message: &Message) {
    let _ = Printer::stdout().emit(message);
}

/// Print a green, bold `✅` message to stdout.
pub fn success(msg: &str) {
    print(&Message::success(msg));
}

/// Print a yellow, bold `⚠️` message to stdout.
pub fn warning(msg: &str) {
    print(&Message::warning(msg));
}

/// Print a red, bold `❌` message to stdout.
pub fn error(msg: &str) {
    print(&Message::error(msg));
}

/// Print a blue `ℹ️` message to stdout.
pub fn info(msg: &str) {
    print(&Message::info(msg));
}

/// Print a message in `color` with no styles or glyph.
pub fn custom(msg: &str, color: impl Into<ColorToken>) {
    print(&Message::new(msg).color(color));
}
