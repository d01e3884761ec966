//! Interactive portfolio handler

use anyhow::Result;

use folio::Config;

/// Run the full-screen portfolio.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    folio::tui::run(config)
}
