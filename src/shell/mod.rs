//! Simulated command shell.
//!
//! A `Shell` owns the input line, the output log, the command history and a
//! reference to the static command table. It reacts synchronously to key-level
//! operations (`submit`, `recall_previous`, `recall_next`, `auto_complete`)
//! and never touches the environment: side effects come back as `Effect`
//! values for the host to interpret.
//!
//! # Example
//!
//! ```
//! use folio::shell::{Effect, Shell};
//!
//! let mut shell = Shell::new();
//! assert_eq!(shell.submit("  About "), None);
//! assert_eq!(shell.log().len(), 2); // prompt echo + response
//!
//! match shell.submit("resume") {
//!     Some(Effect::OpenUrl(url)) => assert!(url.starts_with("https://")),
//!     None => unreachable!(),
//! }
//! ```

pub mod commands;
pub mod content;
pub mod history;
pub mod log;
pub mod profile;
pub mod response;

pub use commands::{CommandSpec, CommandTable};
pub use content::{Content, Piece, Segment};
pub use history::{CommandHistory, Recall};
pub use log::{LogLine, OutputLog};
pub use response::{Effect, Response};

/// Trim surrounding whitespace and lower-case a command string.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Response for input that matches no command.
pub fn not_found(cmd: &str) -> Content {
    Content::inline()
        .text("Command not found: '")
        .input(cmd)
        .text("'. Type 'help' for available commands.")
}

/// Interactive shell state.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    table: CommandTable,
    input: String,
    output: OutputLog,
    history: CommandHistory,
}

impl Shell {
    /// Create a shell over the built-in command table.
    pub fn new() -> Self {
        Self::with_table(CommandTable::builtin())
    }

    pub fn with_table(table: CommandTable) -> Self {
        Self {
            table,
            input: String::new(),
            output: OutputLog::new(),
            history: CommandHistory::new(),
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn log(&self) -> &OutputLog {
        &self.output
    }

    pub fn log_mut(&mut self) -> &mut OutputLog {
        &mut self.output
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Submit whatever is in the input line, then empty it.
    pub fn submit_input(&mut self) -> Option<Effect> {
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw)
    }

    /// Run one line of input.
    ///
    /// The prompt echo always shows `raw` unchanged; history and dispatch use
    /// the normalized form. Returns the effect requested by the command, if any.
    pub fn submit(&mut self, raw: &str) -> Option<Effect> {
        let cmd = normalize(raw);
        if !cmd.is_empty() {
            self.history.push(cmd.clone());
        }
        self.output.push_prompt(raw);
        self.dispatch(&cmd)
    }

    fn dispatch(&mut self, cmd: &str) -> Option<Effect> {
        if cmd.is_empty() {
            return None;
        }

        match self.table.resolve(cmd) {
            Some(Response::Print { content }) => {
                tracing::debug!(command = cmd, "dispatched");
                self.output.push_response(content);
                None
            }
            Some(Response::Open { notice, url }) => {
                tracing::debug!(command = cmd, url = %url, "dispatched with open effect");
                self.output.push_response(notice);
                Some(Effect::OpenUrl(url.into_owned()))
            }
            Some(Response::Clear) => {
                tracing::debug!(command = cmd, "cleared output");
                self.output.clear();
                None
            }
            None => {
                tracing::debug!(command = cmd, "command not found");
                self.output.push_response(not_found(cmd));
                None
            }
        }
    }

    /// Arrow up: load the previous history entry into the input line.
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.previous() {
            self.input = entry.to_string();
        }
    }

    /// Arrow down: load the next entry, or an empty draft past the end.
    pub fn recall_next(&mut self) {
        match self.history.next() {
            Recall::Entry(entry) => self.input = entry.to_string(),
            Recall::Draft => self.input.clear(),
        }
    }

    /// Tab: complete `partial` against the command names.
    ///
    /// A single match replaces the input line. Several matches are echoed and
    /// listed in the log without touching the input.
    pub fn auto_complete(&mut self, partial: &str) {
        let partial = normalize(partial);
        if partial.is_empty() {
            return;
        }

        let matches = self.table.complete(&partial);
        match matches.as_slice() {
            [] => {}
            [only] => self.input = (*only).to_string(),
            many => {
                self.output.push_prompt(partial.as_str());
                self.output
                    .push_response(Content::inline().text(many.join("  ")));
            }
        }
    }

    /// Tab on the current input line.
    pub fn auto_complete_input(&mut self) {
        let partial = self.input.clone();
        self.auto_complete(&partial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_count(shell: &Shell) -> usize {
        shell
            .log()
            .lines()
            .iter()
            .filter(|l| matches!(l, LogLine::Response { .. }))
            .count()
    }

    fn last_response(shell: &Shell) -> Content {
        shell
            .log()
            .lines()
            .iter()
            .rev()
            .find_map(|l| match l {
                LogLine::Response { content } => Some(content.clone()),
                LogLine::Prompt { .. } => None,
            })
            .expect("no response in log")
    }

    #[test]
    fn known_command_appends_echo_and_canned_response() {
        let mut shell = Shell::new();
        shell.submit("about");
        assert_eq!(shell.log().len(), 2);
        assert_eq!(
            shell.log().lines()[0],
            LogLine::Prompt {
                input: "about".to_string()
            }
        );
        assert_eq!(last_response(&shell), profile::about());
    }

    #[test]
    fn normalization_ignores_case_and_whitespace() {
        let mut a = Shell::new();
        let mut b = Shell::new();
        a.submit("skills");
        b.submit("   SkIlLs \t");
        assert_eq!(last_response(&a), last_response(&b));
        assert_eq!(response_count(&b), 1);
    }

    #[test]
    fn prompt_echo_keeps_original_input() {
        let mut shell = Shell::new();
        shell.submit("  HeLp ");
        assert_eq!(
            shell.log().lines()[0],
            LogLine::Prompt {
                input: "  HeLp ".to_string()
            }
        );
        assert_eq!(shell.history().entries(), &["help".to_string()]);
    }

    #[test]
    fn unknown_command_reports_not_found_with_normalized_input() {
        let mut shell = Shell::new();
        shell.submit("  <Script>  ");
        let content = last_response(&shell);
        assert_eq!(content, not_found("<script>"));
        assert!(content.segments.contains(&Segment::Input {
            text: "<script>".to_string()
        }));
    }

    #[test]
    fn empty_input_echoes_without_response_or_history() {
        let mut shell = Shell::new();
        shell.submit("");
        shell.submit("    ");
        assert_eq!(shell.log().len(), 2);
        assert_eq!(response_count(&shell), 0);
        assert!(shell.history().is_empty());
    }

    #[test]
    fn clear_empties_log_regardless_of_content() {
        let mut shell = Shell::new();
        shell.submit("about");
        shell.submit("bogus");
        shell.submit("CLEAR");
        assert!(shell.log().is_empty());
        assert_eq!(shell.history().len(), 3);
    }

    #[test]
    fn certs_alias_matches_certifications() {
        let mut a = Shell::new();
        let mut b = Shell::new();
        a.submit("CERTS");
        b.submit("certifications");
        assert_eq!(last_response(&a), last_response(&b));
    }

    #[test]
    fn resume_returns_open_effect_and_notice() {
        let mut shell = Shell::new();
        let effect = shell.submit("resume");
        assert_eq!(
            effect,
            Some(Effect::OpenUrl(profile::RESUME_URL.to_string()))
        );
        assert_eq!(
            last_response(&shell).to_plain(),
            "Opening resume in new tab..."
        );
    }

    #[test]
    fn submit_input_clears_input_line() {
        let mut shell = Shell::new();
        shell.set_input("about");
        shell.submit_input();
        assert_eq!(shell.input(), "");
        assert_eq!(shell.log().len(), 2);
    }

    #[test]
    fn recall_previous_stops_at_oldest() {
        let mut shell = Shell::new();
        shell.submit("about");
        shell.submit("skills");
        shell.recall_previous();
        assert_eq!(shell.input(), "skills");
        shell.recall_previous();
        assert_eq!(shell.input(), "about");
        shell.recall_previous();
        assert_eq!(shell.input(), "about");
        assert_eq!(shell.history().cursor(), 0);
    }

    #[test]
    fn recall_previous_on_empty_history_keeps_input() {
        let mut shell = Shell::new();
        shell.set_input("draft");
        shell.recall_previous();
        assert_eq!(shell.input(), "draft");
    }

    #[test]
    fn recall_next_past_end_resets_to_empty_draft() {
        let mut shell = Shell::new();
        shell.submit("about");
        shell.submit("skills");
        shell.recall_previous();
        shell.recall_previous();
        shell.recall_next();
        assert_eq!(shell.input(), "skills");
        shell.recall_next();
        assert_eq!(shell.input(), "");
        assert_eq!(shell.history().cursor(), 2);
    }

    #[test]
    fn recalled_entries_are_normalized() {
        let mut shell = Shell::new();
        shell.submit("  ABOUT ");
        shell.recall_previous();
        assert_eq!(shell.input(), "about");
    }

    #[test]
    fn autocomplete_single_match_replaces_input() {
        let mut shell = Shell::new();
        shell.set_input("pro");
        shell.auto_complete_input();
        assert_eq!(shell.input(), "projects");
        assert!(shell.log().is_empty());
    }

    #[test]
    fn autocomplete_multiple_matches_lists_them() {
        let mut shell = Shell::new();
        shell.set_input("a");
        shell.auto_complete_input();
        assert_eq!(shell.input(), "a");
        assert_eq!(shell.log().len(), 2);
        assert_eq!(
            shell.log().lines()[0],
            LogLine::Prompt {
                input: "a".to_string()
            }
        );
        let listed = last_response(&shell).to_plain();
        assert_eq!(
            listed.split_whitespace().collect::<Vec<_>>(),
            vec!["about", "awards"]
        );
        assert!(shell.log_mut().take_scroll_request());
    }

    #[test]
    fn autocomplete_normalizes_partial() {
        let mut shell = Shell::new();
        shell.set_input("  PRO ");
        shell.auto_complete_input();
        assert_eq!(shell.input(), "projects");
    }

    #[test]
    fn autocomplete_no_match_or_empty_is_noop() {
        let mut shell = Shell::new();
        shell.set_input("xyz");
        shell.auto_complete_input();
        assert_eq!(shell.input(), "xyz");
        shell.set_input("   ");
        shell.auto_complete_input();
        assert_eq!(shell.input(), "   ");
        assert!(shell.log().is_empty());
    }

    #[test]
    fn autocomplete_does_not_touch_history() {
        let mut shell = Shell::new();
        shell.auto_complete("a");
        assert!(shell.history().is_empty());
    }

    #[test]
    fn every_command_produces_at_most_one_response() {
        let table = CommandTable::builtin();
        for name in table.all_names() {
            let mut shell = Shell::new();
            shell.submit(name);
            assert!(response_count(&shell) <= 1, "{} responded twice", name);
        }
    }
}
