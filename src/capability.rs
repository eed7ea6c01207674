//! Terminal color capability detection.
//!
//! Detection is split into gathering inputs ([`Probe::from_env`]) and a pure
//! decision ([`Probe::supports_color`]), so callers and tests can supply the
//! inputs explicitly.

use std::ffi::OsString;

use tracing::debug;

/// Environment variable that force-enables color output.
pub const FORCE_COLOR_VAR: &str = "FORCE_COLOR";

/// Values of `FORCE_COLOR` that do not force color on.
const FALSY_VALUES: &[&str] = &["0", "false", "no"];

/// Inputs to the color support decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probe {
    /// Raw value of the force-color override, if set.
    pub force_color: Option<String>,
    /// Whether stdout is an interactive terminal. `None` when the stream
    /// cannot report it.
    pub stdout_is_terminal: Option<bool>,
}

impl Probe {
    /// Read the override variable and stdout terminal status from the process.
    pub fn from_env() -> Self {
        Self {
            force_color: override_value(std::env::var_os(FORCE_COLOR_VAR)),
            stdout_is_terminal: Some(atty::is(atty::Stream::Stdout)),
        }
    }

    /// Probe for an interactive terminal without any override.
    pub fn terminal() -> Self {
        Self {
            force_color: None,
            stdout_is_terminal: Some(true),
        }
    }

    /// Probe for a redirected stream without any override.
    pub fn redirected() -> Self {
        Self {
            force_color: None,
            stdout_is_terminal: Some(false),
        }
    }

    /// Set the force-color override value.
    pub fn with_force_color(mut self, value: impl Into<String>) -> Self {
        self.force_color = Some(value.into());
        self
    }

    /// Whether the override is set to a truthy value.
    pub fn is_forced(&self) -> bool {
        self.force_color.as_deref().is_some_and(is_truthy)
    }

    /// Decide whether escape sequences should be emitted.
    ///
    /// The override always wins. Otherwise a stream that is not (or cannot
    /// say it is) a terminal gets plain text. On Windows the console is
    /// switched to VT mode first; failure there still counts as supported.
    pub fn supports_color(&self) -> bool {
        if self.is_forced() {
            debug!("{} set, forcing color output", FORCE_COLOR_VAR);
            return true;
        }

        match self.stdout_is_terminal {
            Some(true) => {}
            Some(false) => {
                debug!("stdout is not a terminal, disabling color");
                return false;
            }
            None => {
                debug!("stdout terminal status unknown, disabling color");
                return false;
            }
        }

        enable_virtual_terminal();
        true
    }
}

/// Override value as text. Non-UTF-8 values are kept, lossily converted.
fn override_value(raw: Option<OsString>) -> Option<String> {
    raw.map(|value| value.to_string_lossy().into_owned())
}

/// Whether an override value enables color.
fn is_truthy(value: &str) -> bool {
    !value.is_empty() && !FALSY_VALUES.iter().any(|v| v.eq_ignore_ascii_case(value))
}

/// Best-effort switch of the Windows console into VT processing mode.
#[cfg(windows)]
fn enable_virtual_terminal() {
    // crossterm performs the console mode change once and caches the outcome
    if !crossterm::ansi_support::supports_ansi() {
        debug!("could not enable virtual terminal processing, assuming ANSI support");
    }
}

#[cfg(not(windows))]
fn enable_virtual_terminal() {}

/// Whether the current stdout supports ANSI escape sequences.
pub fn supports_color() -> bool {
    Probe::from_env().supports_color()
}

/// How a caller wants color decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Detect from the environment on every call.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorChoice {
    /// Resolve to a yes/no answer, running detection for `Auto`.
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => supports_color(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl From<bool> for ColorChoice {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Always
        } else {
            Self::Never
        }
    }
}
