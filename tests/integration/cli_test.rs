//! Integration tests for the CLI surface.

use predicates::prelude::*;
use predicates::str::contains;

use crate::helpers::Folio;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    Folio::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("exec"))
        .stdout(contains("commands"))
        .stdout(contains("completions"));
}

#[test]
fn version_starts_with_package_version() {
    Folio::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "folio {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// ============================================================================
// exec
// ============================================================================

#[test]
fn exec_prints_prompt_and_canned_response() {
    Folio::new()
        .cmd()
        .args(["exec", "  About "])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("visitor@portfolio:~$   About \n"))
        .stdout(contains("About\n─────"));
}

#[test]
fn exec_unknown_command_reports_not_found() {
    Folio::new()
        .cmd()
        .args(["exec", "Foo"])
        .assert()
        .success()
        .stdout(contains(
            "Command not found: 'foo'. Type 'help' for available commands.",
        ));
}

#[test]
fn exec_reads_commands_from_stdin() {
    Folio::new()
        .cmd()
        .arg("exec")
        .write_stdin("whoami\nsocials\n")
        .assert()
        .success()
        .stdout(contains("visitor@portfolio:~$ whoami"))
        .stdout(contains("github.com/kvdhanush06"));
}

#[test]
fn exec_html_escapes_user_input() {
    Folio::new()
        .cmd()
        .args(["exec", "--format", "html", "<script>"])
        .assert()
        .success()
        .stdout(contains("&lt;script&gt;"))
        .stdout(contains("<script>").not());
}

#[test]
fn exec_json_lists_effects_without_opening() {
    let output = Folio::new()
        .cmd()
        .args(["exec", "--format", "json", "resume"])
        .output()
        .expect("run folio");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["prompt"], "visitor@portfolio:~$");
    assert_eq!(value["lines"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["effects"][0]["kind"], "open_url");
}

#[test]
fn exec_clear_produces_empty_transcript() {
    Folio::new()
        .cmd()
        .args(["exec", "help", "clear"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn exec_uses_configured_prompt() {
    let folio = Folio::new();
    folio.write_config("[shell]\nprompt = \"guest$\"\n");
    folio
        .cmd()
        .args(["exec", "about"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("guest$ about\n"));
}

#[test]
fn exec_html_escapes_configured_prompt() {
    let folio = Folio::new();
    folio.write_config("[shell]\nprompt = \"<guest> & co$\"\n");
    folio
        .cmd()
        .args(["exec", "--format", "html", "about"])
        .assert()
        .success()
        .stdout(contains(
            "<span class=\"terminal-prompt\">&lt;guest&gt; &amp; co$</span>",
        ))
        .stdout(contains("<guest>").not());
}

#[test]
fn exec_rejects_unknown_format() {
    Folio::new()
        .cmd()
        .args(["exec", "--format", "xml", "about"])
        .assert()
        .code(2)
        .stderr(contains("xml"));
}

// ============================================================================
// commands and completions
// ============================================================================

#[test]
fn commands_lists_table_with_alias() {
    Folio::new()
        .cmd()
        .arg("commands")
        .assert()
        .success()
        .stdout(contains("  help"))
        .stdout(contains("(alias: certs)"))
        .stdout(contains("resume"));
}

#[test]
fn completions_generate_for_bash() {
    Folio::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("_folio"));
}
