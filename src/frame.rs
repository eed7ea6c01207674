//! ASCII framing: bordered boxes and underlined banners.

use unicode_width::UnicodeWidthStr;

/// Framing style for a block of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frame {
    /// Lines padded to a common width between `+---+` rules.
    #[default]
    Box,
    /// Uppercased text underlined with `=`.
    Banner,
}

impl Frame {
    /// Resolve a style name. Anything other than `banner` is a box.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("banner") {
            Self::Banner
        } else {
            Self::Box
        }
    }

    /// Draw `text` in this frame.
    pub fn render(self, text: &str) -> String {
        match self {
            Self::Box => ascii_box(text),
            Self::Banner => ascii_banner(text),
        }
    }
}

/// Frame `text` by style name.
///
/// `None` or an empty name leaves the text untouched; unknown names fall
/// back to a box. The default style is [`Frame::Box`], so framing with the
/// default is `Frame::default().render(text)` or `asciiize(text, Some("box"))`.
pub fn asciiize(text: &str, style: Option<&str>) -> String {
    match style {
        None | Some("") => text.to_string(),
        Some(name) => Frame::from_name(name).render(text),
    }
}

/// Characters that end a line, besides `\r\n` which counts as one break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split on every line break character. A trailing break does not start
/// an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..pos]);
        let after = &rest[pos..];
        let skip = if after.starts_with("\r\n") {
            2
        } else {
            after.chars().next().map_or(1, char::len_utf8)
        };
        rest = &after[skip..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

fn ascii_box(text: &str) -> String {
    let mut lines = split_lines(text);
    if lines.is_empty() {
        lines.push(text);
    }

    let width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let rule = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::with_capacity((width + 5) * (lines.len() + 2));
    out.push_str(&rule);
    for line in &lines {
        out.push_str("\n| ");
        out.push_str(line);
        out.push_str(&" ".repeat(width - line.width()));
        out.push_str(" |");
    }
    out.push('\n');
    out.push_str(&rule);
    out
}

fn ascii_banner(text: &str) -> String {
    let upper = text.to_uppercase();
    let underline = "=".repeat(upper.width());
    format!("{}\n{}", upper, underline)
}
