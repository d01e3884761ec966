//! Opener orchestrator for URL effects.

use super::error::OpenError;
use super::result::OpenMethod;
use super::tool::{OpenTool, OpenToolError};
use super::tools::platform_tools;
use crate::shell::Effect;

/// URL schemes the opener will hand to the system.
const ALLOWED_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Check that `url` is something a browser or mail client should receive.
pub fn validate_target(url: &str) -> Result<(), OpenError> {
    let lower = url.trim().to_ascii_lowercase();
    let allowed = ALLOWED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    if allowed && !url.chars().any(char::is_control) {
        Ok(())
    } else {
        Err(OpenError::InvalidTarget {
            target: url.to_string(),
        })
    }
}

/// Hands URLs to the first available system tool.
///
/// Tools are tried in priority order; a tool that fails to launch is skipped
/// and the next one is tried.
pub struct Opener {
    tools: Vec<Box<dyn OpenTool>>,
}

impl Opener {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn OpenTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn OpenTool>] {
        &self.tools
    }

    /// Open `url` in a new browsing context.
    pub fn open(&self, url: &str) -> Result<OpenMethod, OpenError> {
        validate_target(url)?;

        let mut last_failure = None;
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_open(url) {
                Ok(()) => {
                    tracing::info!(tool = tool.name(), url, "opened url");
                    return Ok(tool.method());
                }
                Err(OpenToolError::NotFound) => continue,
                Err(OpenToolError::Failed(message)) => {
                    tracing::warn!(tool = tool.name(), %message, "opener failed");
                    last_failure = Some(OpenError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(OpenError::NoToolAvailable))
    }

    /// Carry out a shell effect.
    pub fn apply(&self, effect: &Effect) -> Result<OpenMethod, OpenError> {
        match effect {
            Effect::OpenUrl(url) => self.open(url),
        }
    }
}

impl Default for Opener {
    fn default() -> Self {
        Self::new()
    }
}
