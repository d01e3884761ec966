//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use folio::cli::ConfigAction;
use folio::Config;

use super::use_color;

pub fn handle(action: ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => handle_show(path),
        ConfigAction::Path => handle_path(path),
        ConfigAction::Init => handle_init(path),
    }
}

/// Show current configuration as TOML.
fn handle_show(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let toml_str = config.to_toml()?;
    if use_color() {
        println!("{}", config.ui.theme().primary_text(&toml_str));
    } else {
        println!("{}", toml_str);
    }
    Ok(())
}

/// Print where the config file lives (whether or not it exists).
fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write the default config file unless one already exists.
fn handle_init(path: &Path) -> Result<()> {
    let theme = folio::Theme::default();
    let paint = |text: String, ok: bool| match (use_color(), ok) {
        (false, _) => text,
        (true, true) => theme.success_text(&text),
        (true, false) => theme.primary_text(&text),
    };

    if path.exists() {
        println!(
            "{}",
            paint(format!("Config already exists at {}", path.display()), false)
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        paint(format!("Created {}", path.display()), true)
    );
    Ok(())
}
