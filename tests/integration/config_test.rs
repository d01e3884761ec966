//! Integration tests for the config subcommands.

use predicates::prelude::*;
use predicates::str::contains;

use crate::helpers::Folio;

#[test]
fn config_path_honors_env() {
    let folio = Folio::new();
    folio
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains(folio.config_path().to_string_lossy().to_string()));
}

#[test]
fn config_flag_overrides_env() {
    let folio = Folio::new();
    let other = folio.dir.path().join("other.toml");
    folio
        .cmd()
        .args(["config", "path", "--config"])
        .arg(&other)
        .assert()
        .success()
        .stdout(contains("other.toml"));
}

#[test]
fn config_show_prints_defaults_when_missing() {
    Folio::new()
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("[typewriter]"))
        .stdout(contains("type_delay_ms = 80"))
        .stdout(contains("threshold = 0.15"));
}

#[test]
fn config_init_creates_file_once() {
    let folio = Folio::new();
    folio
        .cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("Created"));
    assert!(folio.config_path().exists());

    folio
        .cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn malformed_config_is_an_error() {
    let folio = Folio::new();
    folio.write_config("[ui\ntheme = ");
    folio
        .cmd()
        .args(["exec", "about"])
        .assert()
        .code(1)
        .stderr(contains("Invalid config"));
}

#[test]
fn show_reflects_file_values() {
    let folio = Folio::new();
    folio.write_config("[ui]\ntheme = \"ocean\"\n");
    folio
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("theme = \"ocean\""))
        .stdout(contains("tick_rate_ms = 250"));
}

#[test]
fn init_output_has_no_color_under_no_color() {
    let folio = Folio::new();
    folio
        .cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}
