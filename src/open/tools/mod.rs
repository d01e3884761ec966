//! Platform-specific URL openers.

mod gio;
mod mac_open;
mod windows_start;
mod xdg_open;

pub use gio::Gio;
pub use mac_open::MacOpen;
pub use windows_start::WindowsStart;
pub use xdg_open::XdgOpen;

use super::tool::{OpenTool, OpenToolError};
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn OpenTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(MacOpen::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![Box::new(XdgOpen::new()), Box::new(Gio::new())]
    }

    #[cfg(target_os = "windows")]
    {
        vec![Box::new(WindowsStart::new())]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        vec![]
    }
}

/// Check if a binary is on `PATH`.
fn tool_exists(binary: &str) -> bool {
    Command::new("which")
        .arg(binary)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Spawn `program` detached from the terminal and reap it in the background.
fn spawn_detached(program: &str, args: &[&str]) -> Result<(), OpenToolError> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OpenToolError::NotFound,
            _ => OpenToolError::Failed(e.to_string()),
        })?;
    reap_in_background(child, program);
    Ok(())
}

/// Wait on `child` from a short-lived thread so it does not linger as a
/// zombie while the TUI keeps running.
fn reap_in_background(mut child: Child, program: &str) -> Option<JoinHandle<()>> {
    let program = program.to_string();
    std::thread::Builder::new()
        .name("folio-reap".to_string())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::debug!(program = %program, %status, "opener exited with failure")
            }
            Ok(_) => {}
            Err(e) => tracing::debug!(program = %program, error = %e, "could not wait on opener"),
        })
        .map_err(|e| tracing::warn!(error = %e, "could not start reaper thread"))
        .ok()
}
