//! Lightweight terminal styling helpers.
//!
//! - [`colored`] wraps text in ANSI color/style codes when stdout supports them
//! - [`success`], [`warning`], [`error`], [`info`] and [`custom`] print
//!   semantic messages, optionally framed with [`asciiize`]
//! - [`input_colored`] and [`confirm`] prompt on stdin
//!
//! Color support is detected per call from `FORCE_COLOR` and whether stdout
//! is a terminal. Use [`Printer`], [`Prompter`] or [`Paint::apply`] with an
//! explicit [`ColorChoice`] to bypass detection.

pub mod ansi;
pub mod capability;
pub mod error;
pub mod frame;
pub mod message;
pub mod paint;
pub mod prompt;
pub mod theme;

pub use ansi::{Color, Style, RESET};
pub use capability::{supports_color, ColorChoice, Probe};
pub use error::{PromptError, ThemeError};
pub use frame::{asciiize, Frame};
pub use message::{custom, error, info, success, warning, Message, Printer};
pub use paint::{colored, palette_sample, style_text, ColorToken, Paint};
pub use prompt::{confirm, input_colored, Prompter};
pub use theme::{Level, LevelTheme, Theme, ThemeColor};
