//! `folio exec`: run shell commands without the TUI

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use folio::cli::OutputFormat;
use folio::open::Opener;
use folio::render::{html, plain, Transcript};
use folio::shell::{Effect, Shell};
use folio::Config;

use super::use_color;

/// Run `commands` (or stdin lines) through a fresh shell and print the
/// transcript. Effects are carried out only when `open` is set.
pub fn handle(config: &Config, format: OutputFormat, open: bool, commands: Vec<String>) -> Result<()> {
    let inputs = if commands.is_empty() {
        read_stdin_lines()?
    } else {
        commands
    };

    let mut shell = Shell::new();
    let effects = run_all(&mut shell, &inputs);

    let color = format == OutputFormat::Text && use_color();
    let output = render(config, &shell, &effects, format, color)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    if open {
        apply_effects(&Opener::new(), &effects, config);
    } else if !effects.is_empty() {
        tracing::info!(count = effects.len(), "effects not applied (use --open)");
    }
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read commands from stdin")
}

/// Submit each input in order, collecting requested effects.
pub fn run_all(shell: &mut Shell, inputs: &[String]) -> Vec<Effect> {
    inputs
        .iter()
        .filter_map(|input| shell.submit(input))
        .collect()
}

/// Render the shell's log in the requested format.
pub fn render(
    config: &Config,
    shell: &Shell,
    effects: &[Effect],
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let prompt = config.shell.prompt.as_str();
    let lines = shell.log().lines();
    Ok(match format {
        OutputFormat::Text => {
            let theme = color.then(|| config.ui.theme());
            plain::render_log(prompt, lines, theme.as_ref())
        }
        OutputFormat::Html => html::render_log(prompt, lines),
        OutputFormat::Json => {
            let transcript = Transcript {
                prompt,
                lines,
                effects,
            };
            let mut json = transcript.to_json()?;
            json.push('\n');
            json
        }
    })
}

/// Hand each effect to the opener. Failures are reported, not returned.
fn apply_effects(opener: &Opener, effects: &[Effect], config: &Config) {
    let theme = config.ui.theme();
    for effect in effects {
        let Effect::OpenUrl(url) = effect;
        match opener.apply(effect) {
            Ok(method) => eprintln!(
                "{}",
                theme.success_text(&format!("Opened {} with {}", url, method.name()))
            ),
            Err(e) => eprintln!("{}", theme.error_text(&format!("Could not open link: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn effects_are_collected_in_order() {
        let mut shell = Shell::new();
        let effects = run_all(&mut shell, &inputs(&["about", "resume", "resume"]));
        assert_eq!(effects.len(), 2);
        assert_eq!(shell.log().len(), 6);
    }

    #[test]
    fn text_render_uses_configured_prompt() {
        let mut config = Config::default();
        config.shell.prompt = ">".to_string();
        let mut shell = Shell::new();
        run_all(&mut shell, &inputs(&["nope"]));

        let out = render(&config, &shell, &[], OutputFormat::Text, false).unwrap();
        assert!(out.starts_with("> nope\n"));
    }

    #[test]
    fn json_render_is_newline_terminated_json() {
        let config = Config::default();
        let mut shell = Shell::new();
        let effects = run_all(&mut shell, &inputs(&["resume"]));

        let out = render(&config, &shell, &effects, OutputFormat::Json, false).unwrap();
        assert!(out.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["effects"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn clear_leaves_empty_transcript() {
        let config = Config::default();
        let mut shell = Shell::new();
        run_all(&mut shell, &inputs(&["about", "clear"]));

        let out = render(&config, &shell, &[], OutputFormat::Html, false).unwrap();
        assert_eq!(out, "");
    }
}
