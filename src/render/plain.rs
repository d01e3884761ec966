//! Plain-text rendering of the shell transcript, optionally colored.

use crate::shell::{Content, LogLine, Piece};
use crate::theme::Theme;

/// Render one response as text. Links show their label.
pub fn render_content(content: &Content, theme: Option<&Theme>) -> String {
    let mut out = String::new();
    for (i, line) in content.lines().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for piece in line {
            match (piece, theme) {
                (Piece::Link { label, .. }, Some(theme)) => out.push_str(&theme.accent_text(label)),
                _ => out.push_str(piece.text()),
            }
        }
    }
    out
}

/// Render a whole transcript. Each log line ends with a newline.
pub fn render_log(prompt: &str, lines: &[LogLine], theme: Option<&Theme>) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            LogLine::Prompt { input } => {
                match theme {
                    Some(theme) => out.push_str(&theme.accent_text(prompt)),
                    None => out.push_str(prompt),
                }
                out.push(' ');
                out.push_str(input);
            }
            LogLine::Response { content } => out.push_str(&render_content(content, theme)),
        }
        out.push('\n');
    }
    out
}
