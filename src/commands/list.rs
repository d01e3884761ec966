//! `folio commands`: list the shell's command table

use anyhow::Result;

use folio::shell::{CommandSpec, CommandTable};
use folio::Theme;

use super::use_color;

/// Print every command with its summary.
pub fn handle() -> Result<()> {
    let table = CommandTable::builtin();
    let theme = use_color().then(Theme::default);
    for spec in table.specs() {
        println!("{}", format_entry(spec, theme.as_ref()));
    }
    Ok(())
}

fn format_entry(spec: &CommandSpec, theme: Option<&Theme>) -> String {
    let name = format!("{:<17}", spec.name);
    let name = match theme {
        Some(theme) => theme.accent_text(&name),
        None => name,
    };
    if spec.aliases.is_empty() {
        format!("  {}{}", name, spec.summary)
    } else {
        format!(
            "  {}{} (alias: {})",
            name,
            spec.summary,
            spec.aliases.join(", ")
        )
    }
}
