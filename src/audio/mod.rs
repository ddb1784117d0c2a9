//! External audio tool invocation.
//!
//! Ripping and transcoding shell out to the standard command-line tools
//! (cdparanoia, flac, lame) rather than binding codec libraries. This
//! works on every platform where the tools are installed, and the tools
//! themselves own all retry/IO concerns.

pub mod codec;
pub mod ripper;

use std::path::{Path, PathBuf};
use std::process::Command;

/// Explicit tool locations, normally taken from the config file.
///
/// An unset entry falls back to probing the common installation paths.
#[derive(Debug, Clone, Default)]
pub struct ToolPaths {
    pub cdparanoia: Option<PathBuf>,
    pub flac: Option<PathBuf>,
    pub lame: Option<PathBuf>,
}

/// Errors from the external audio tools.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("{tool} not found - install it and make sure it is on PATH")]
    ToolNotFound { tool: &'static str },

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: &'static str, stderr: String },

    #[error("Unsupported conversion: {0}")]
    UnsupportedConversion(String),
}

/// Find a tool executable, checking an explicit override first and then
/// common installation paths. Candidates are probed with `--version`.
pub(crate) fn find_tool(
    tool: &'static str,
    override_path: Option<&Path>,
    candidates: &[&str],
) -> Result<PathBuf, AudioError> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    candidates
        .iter()
        .find(|&path| {
            Command::new(path)
                .arg("--version")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .map(PathBuf::from)
        .ok_or(AudioError::ToolNotFound { tool })
}

/// Run a prepared command, mapping a non-zero exit to [`AudioError`].
pub(crate) fn run_tool(tool: &'static str, command: &mut Command) -> Result<(), AudioError> {
    tracing::debug!("Running {:?}", command);
    let output = command
        .output()
        .map_err(|source| AudioError::Spawn { tool, source })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AudioError::ToolFailed {
            tool,
            stderr: stderr.trim().to_string(),
        });
    }
    Ok(())
}

/// Get a tool's version string (for diagnostics)
pub(crate) fn tool_version(path: &Path) -> Option<String> {
    Command::new(path)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| {
            String::from_utf8_lossy(&o.stdout)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_path_wins_without_probing() {
        let path = find_tool("flac", Some(Path::new("/custom/flac")), &[]).unwrap();
        assert_eq!(path, PathBuf::from("/custom/flac"));
    }

    #[test]
    fn test_missing_tool_reports_name() {
        let result = find_tool("cdparanoia", None, &["/nonexistent/cdparanoia"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("cdparanoia"));
    }
}
