//! Transcript renderers for non-interactive output.
//!
//! - `html`: markup matching a browser-hosted terminal
//! - `plain`: text for a terminal or a pipe
//! - `Transcript`: serializable snapshot for JSON output

pub mod html;
pub mod plain;

use serde::Serialize;

use crate::shell::{Effect, LogLine};

/// Everything a non-interactive run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript<'a> {
    pub prompt: &'a str,
    pub lines: &'a [LogLine],
    pub effects: &'a [Effect],
}

impl Transcript<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Shell;

    #[test]
    fn json_transcript_tags_lines_and_segments() {
        let mut shell = Shell::new();
        shell.submit("Bogus");
        let effects: Vec<Effect> = shell.submit("resume").into_iter().collect();
        let transcript = Transcript {
            prompt: "$",
            lines: shell.log().lines(),
            effects: &effects,
        };
        let value: serde_json::Value =
            serde_json::from_str(&transcript.to_json().unwrap()).unwrap();

        assert_eq!(value["prompt"], "$");
        assert_eq!(value["lines"][0]["type"], "prompt");
        assert_eq!(value["lines"][0]["input"], "Bogus");
        assert_eq!(value["lines"][1]["type"], "response");
        assert_eq!(
            value["lines"][1]["content"]["segments"][1],
            serde_json::json!({ "kind": "input", "text": "bogus" })
        );
        assert_eq!(value["effects"][0]["kind"], "open_url");
        assert!(value["effects"][0]["target"]
            .as_str()
            .unwrap()
            .starts_with("https://drive.google.com/"));
    }
}
