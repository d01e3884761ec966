//! Static command table.
//!
//! Maps canonical command names to pure functions that build a `Response`.
//! Lookup expects an already normalized (trimmed, lower-cased) name.

use std::borrow::Cow;

use super::content::Content;
use super::profile;
use super::response::Response;

/// A single entry in the command table.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Primary name, offered by autocomplete and listed by `help`.
    pub name: &'static str,
    /// Extra names that resolve to the same action. Not completion candidates.
    pub aliases: &'static [&'static str],
    /// One-line description for `help`.
    pub summary: &'static str,
    action: fn(&CommandTable) -> Response,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

impl CommandSpec {
    /// Whether `cmd` is this command's name or one of its aliases.
    pub fn matches(&self, cmd: &str) -> bool {
        self.name == cmd || self.aliases.iter().any(|a| *a == cmd)
    }
}

const fn spec(
    name: &'static str,
    aliases: &'static [&'static str],
    summary: &'static str,
    action: fn(&CommandTable) -> Response,
) -> CommandSpec {
    CommandSpec {
        name,
        aliases,
        summary,
        action,
    }
}

/// Built-in commands in completion order.
static BUILTIN: &[CommandSpec] = &[
    spec("help", &[], "Show this list", help),
    spec("welcome", &[], "Welcome message", welcome),
    spec("about", &[], "About me", about),
    spec("experience", &[], "Work experience", experience),
    spec("projects", &[], "Featured projects", projects),
    spec("skills", &[], "Technical skills", skills),
    spec("certifications", &["certs"], "Certifications", certifications),
    spec("por", &[], "Positions of responsibility", positions),
    spec("awards", &[], "Honors & awards", awards),
    spec("contact", &[], "Contact information", contact),
    spec("socials", &[], "Social links", socials),
    spec("education", &[], "Education", education),
    spec("resume", &[], "Open resume", resume),
    spec("clear", &[], "Clear terminal", clear),
];

fn welcome(_: &CommandTable) -> Response {
    Response::print(profile::welcome())
}

fn about(_: &CommandTable) -> Response {
    Response::print(profile::about())
}

fn experience(_: &CommandTable) -> Response {
    Response::print(profile::experience())
}

fn projects(_: &CommandTable) -> Response {
    Response::print(profile::projects())
}

fn skills(_: &CommandTable) -> Response {
    Response::print(profile::skills())
}

fn certifications(_: &CommandTable) -> Response {
    Response::print(profile::certifications())
}

fn positions(_: &CommandTable) -> Response {
    Response::print(profile::positions())
}

fn awards(_: &CommandTable) -> Response {
    Response::print(profile::awards())
}

fn contact(_: &CommandTable) -> Response {
    Response::print(profile::contact())
}

fn socials(_: &CommandTable) -> Response {
    Response::print(profile::socials())
}

fn education(_: &CommandTable) -> Response {
    Response::print(profile::education())
}

fn resume(_: &CommandTable) -> Response {
    Response::Open {
        notice: profile::resume_notice(),
        url: Cow::Borrowed(profile::RESUME_URL),
    }
}

fn clear(_: &CommandTable) -> Response {
    Response::Clear
}

/// Width of the name column in `help` output.
const HELP_NAME_WIDTH: usize = 17;

fn help(table: &CommandTable) -> Response {
    let mut text = String::from("Available commands:\n\n");
    let listed = table
        .specs
        .iter()
        .filter(|s| s.name != "help")
        .chain(table.specs.iter().filter(|s| s.name == "help"));
    for spec in listed {
        text.push_str(&format!(
            "  {:<width$}{}\n",
            spec.name,
            spec.summary,
            width = HELP_NAME_WIDTH
        ));
    }
    Response::print(Content::pre().text(text))
}

/// Immutable mapping from command name to response builder.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    specs: &'static [CommandSpec],
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommandTable {
    /// The portfolio's built-in command set.
    pub fn builtin() -> Self {
        Self { specs: BUILTIN }
    }

    pub fn specs(&self) -> &'static [CommandSpec] {
        self.specs
    }

    /// Find the entry for a normalized command string.
    pub fn lookup(&self, cmd: &str) -> Option<&'static CommandSpec> {
        self.specs.iter().find(|s| s.matches(cmd))
    }

    /// Build the response for a normalized command string.
    pub fn resolve(&self, cmd: &str) -> Option<Response> {
        self.lookup(cmd).map(|spec| (spec.action)(self))
    }

    /// Primary names starting with `partial`, in table order.
    pub fn complete(&self, partial: &str) -> Vec<&'static str> {
        self.specs
            .iter()
            .map(|s| s.name)
            .filter(|name| name.starts_with(partial))
            .collect()
    }

    /// Every recognized string, aliases included.
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs
            .iter()
            .flat_map(|s| std::iter::once(s.name).chain(s.aliases.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_exactly_the_documented_commands() {
        let mut names: Vec<_> = CommandTable::builtin().all_names().collect();
        names.sort_unstable();
        let mut expected = vec![
            "help",
            "welcome",
            "about",
            "experience",
            "projects",
            "skills",
            "certifications",
            "certs",
            "por",
            "awards",
            "contact",
            "socials",
            "education",
            "resume",
            "clear",
        ];
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn certs_is_the_only_alias() {
        let table = CommandTable::builtin();
        let aliased: Vec<_> = table
            .specs()
            .iter()
            .filter(|s| !s.aliases.is_empty())
            .collect();
        assert_eq!(aliased.len(), 1);
        assert_eq!(aliased[0].name, "certifications");
        assert_eq!(aliased[0].aliases, &["certs"]);
    }

    #[test]
    fn alias_resolves_to_same_response() {
        let table = CommandTable::builtin();
        assert_eq!(table.resolve("certs"), table.resolve("certifications"));
    }

    #[test]
    fn lookup_is_exact_on_normalized_input() {
        let table = CommandTable::builtin();
        assert!(table.lookup("about").is_some());
        assert!(table.lookup("About").is_none());
        assert!(table.lookup(" about").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn complete_skips_aliases() {
        let table = CommandTable::builtin();
        assert_eq!(table.complete("cert"), vec!["certifications"]);
    }

    #[test]
    fn complete_returns_matches_in_table_order() {
        let table = CommandTable::builtin();
        assert_eq!(table.complete("a"), vec!["about", "awards"]);
        assert_eq!(table.complete("e"), vec!["experience", "education"]);
        assert_eq!(table.complete("pro"), vec!["projects"]);
        assert!(table.complete("zzz").is_empty());
    }

    #[test]
    fn clear_and_resume_are_not_prints() {
        let table = CommandTable::builtin();
        assert_eq!(table.resolve("clear"), Some(Response::Clear));
        match table.resolve("resume") {
            Some(Response::Open { notice, url }) => {
                assert_eq!(notice.to_plain(), "Opening resume in new tab...");
                assert_eq!(url, profile::RESUME_URL);
            }
            other => panic!("unexpected resume response: {:?}", other),
        }
    }

    #[test]
    fn help_lists_commands_aligned_with_help_last() {
        let table = CommandTable::builtin();
        let Some(Response::Print { content }) = table.resolve("help") else {
            panic!("help should print");
        };
        let text = content.to_plain();
        assert!(text.starts_with("Available commands:\n\n"));
        assert!(text.contains("  welcome          Welcome message\n"));
        assert!(text.contains("  certifications   Certifications\n"));
        assert!(text.ends_with("  help             Show this list\n"));
        assert!(!text.contains("certs "));
    }
}
