//! CD ripping via cdparanoia.
//!
//! Rips the inserted disc in batch mode: one WAV file per audio track,
//! named `track01.cdda.wav`, `track02.cdda.wav`, ... in disc order. That
//! ordering is what lets the tag and organize commands pair files with
//! catalog tracks by position.

use std::path::Path;
use std::process::Command;

use super::{AudioError, ToolPaths, find_tool, run_tool, tool_version};

const CDPARANOIA: &str = "cdparanoia";

const CDPARANOIA_PATHS: &[&str] = &[
    "cdparanoia", // In PATH
    "/usr/bin/cdparanoia",
    "/usr/local/bin/cdparanoia",
    "/opt/homebrew/bin/cdparanoia",
];

/// Rip the whole disc into per-track WAV files under `dest_dir`.
pub fn rip(dest_dir: &Path, device: Option<&str>, tools: &ToolPaths) -> Result<(), AudioError> {
    let tool = find_tool(CDPARANOIA, tools.cdparanoia.as_deref(), CDPARANOIA_PATHS)?;
    let mut command = Command::new(tool);
    command.args(rip_args(device)).current_dir(dest_dir);
    run_tool(CDPARANOIA, &mut command)
}

/// Arguments for a batch rip of every track on the disc.
fn rip_args(device: Option<&str>) -> Vec<String> {
    let mut args = vec!["--batch".to_string(), "--quiet".to_string()];
    if let Some(device) = device {
        args.push("--force-cdrom-device".to_string());
        args.push(device.to_string());
    }
    // "1-" spans from the first track to the end of the disc
    args.push("1-".to_string());
    args
}

/// Check if cdparanoia is available on the system
pub fn is_available(tools: &ToolPaths) -> bool {
    find_tool(CDPARANOIA, tools.cdparanoia.as_deref(), CDPARANOIA_PATHS).is_ok()
}

/// Get the cdparanoia version string (for diagnostics)
pub fn version(tools: &ToolPaths) -> Option<String> {
    let tool = find_tool(CDPARANOIA, tools.cdparanoia.as_deref(), CDPARANOIA_PATHS).ok()?;
    tool_version(&tool)
}
