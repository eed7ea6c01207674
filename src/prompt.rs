//! Colored input prompts and yes/no confirmation.

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::capability::ColorChoice;
use crate::error::PromptError;
use crate::paint::{ColorToken, Paint};

/// Responses that count as "yes", compared after trimming and lowercasing.
const TRUTHY_RESPONSES: &[&str] = &["y", "yes", "1", "true", "t"];

/// Paint used by [`confirm`] unless the caller supplies one.
pub fn confirm_paint() -> Paint {
    Paint::new().color("yellow").style("bold").emoji("❓")
}

/// Reads answers from `input` after writing prompts to `output`.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    choice: ColorChoice,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter over the given streams with detected color support.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            choice: ColorChoice::Auto,
        }
    }

    /// Decide prompt color with `choice` instead of detecting it.
    pub fn with_choice(mut self, choice: ColorChoice) -> Self {
        self.choice = choice;
        self
    }

    /// Write the painted prompt and block for one line.
    ///
    /// The trailing line terminator is removed. Returns
    /// [`PromptError::Eof`] if the input is exhausted.
    pub fn input(&mut self, prompt: &str, paint: &Paint) -> Result<String, PromptError> {
        let rendered = paint.apply(prompt, self.choice.enabled());
        write!(self.output, "{}", rendered)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("end of input while prompting");
            return Err(PromptError::Eof);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask a yes/no question.
    ///
    /// An empty answer returns `default`; see [`is_truthy`] for what counts
    /// as yes.
    pub fn confirm(
        &mut self,
        prompt: &str,
        default: bool,
        paint: &Paint,
    ) -> Result<bool, PromptError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let response = self.input(&format!("{} {} ", prompt, hint), paint)?;
        Ok(parse_confirmation(&response, default))
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Whether a trimmed, lowercased response means yes.
pub fn is_truthy(response: &str) -> bool {
    TRUTHY_RESPONSES.contains(&response)
}

/// Interpret a confirmation response, falling back to `default` when empty.
pub fn parse_confirmation(response: &str, default: bool) -> bool {
    let response = response.trim().to_lowercase();
    if response.is_empty() {
        return default;
    }
    is_truthy(&response)
}

/// Show a colored prompt on stdout and read one line from stdin.
pub fn input_colored<C, I, S>(
    prompt: &str,
    color: C,
    styles: I,
    emoji: Option<&str>,
) -> Result<String, PromptError>
where
    C: Into<ColorToken>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paint = Paint::new().color(color).styles(styles);
    if let Some(emoji) = emoji {
        paint = paint.emoji(emoji);
    }
    Prompter::stdio().input(prompt, &paint)
}

/// Ask a yes/no question on stdin/stdout with the default yellow, bold `❓`
/// prompt.
pub fn confirm(prompt: &str, default: bool) -> Result<bool, PromptError> {
    Prompter::stdio().confirm(prompt, default, &confirm_paint())
}
