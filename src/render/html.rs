//! HTML rendering of the shell transcript.
//!
//! Produces the same markup a browser-hosted terminal would append to its
//! output container. User input and the configured prompt are escaped; canned
//! text is trusted and written as is.

use crate::shell::{Content, LogLine, Segment};

/// HTML-escape a string into the output buffer.
pub fn escape_html_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// HTML-escape a string.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_html_into(&mut out, s);
    out
}

/// Render a prompt echo line.
pub fn render_prompt(prompt: &str, input: &str) -> String {
    let mut out = String::from("<div class=\"terminal-line\"><span class=\"terminal-prompt\">");
    escape_html_into(&mut out, prompt);
    out.push_str("</span><span class=\"terminal-text\">");
    escape_html_into(&mut out, input);
    out.push_str("</span></div>");
    out
}

/// Render a response block.
pub fn render_response(content: &Content) -> String {
    let mut out = String::from("<div class=\"terminal-response\">");
    render_content_into(&mut out, content);
    out.push_str("</div>");
    out
}

/// Render the body of a response (no wrapping `div`).
pub fn render_content_into(out: &mut String, content: &Content) {
    if content.preformatted {
        out.push_str("<pre>");
    }
    for segment in &content.segments {
        match segment {
            Segment::Text { text } => out.push_str(text),
            Segment::Input { text } => escape_html_into(out, text),
            Segment::Link { label, href } => {
                out.push_str("<a href=\"");
                escape_html_into(out, href);
                if href.starts_with("mailto:") {
                    out.push_str("\">");
                } else {
                    out.push_str("\" target=\"_blank\" rel=\"noopener\">");
                }
                out.push_str(label);
                out.push_str("</a>");
            }
        }
    }
    if content.preformatted {
        out.push_str("</pre>");
    }
}

/// Render a whole transcript, one element per log line.
pub fn render_log(prompt: &str, lines: &[LogLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            LogLine::Prompt { input } => out.push_str(&render_prompt(prompt, input)),
            LogLine::Response { content } => out.push_str(&render_response(content)),
        }
        out.push('\n');
    }
    out
}
