//! WAV/FLAC/MP3 conversion via the flac and lame tools.
//!
//! The conversion direction is inferred from the source and destination
//! file extensions; anything outside the supported pairs is rejected
//! before any tool runs.

use std::path::Path;
use std::process::Command;

use super::{AudioError, ToolPaths, find_tool, run_tool};

const FLAC: &str = "flac";
const LAME: &str = "lame";

const FLAC_PATHS: &[&str] = &[
    "flac", // In PATH
    "/usr/bin/flac",
    "/usr/local/bin/flac",
    "/opt/homebrew/bin/flac",
];

const LAME_PATHS: &[&str] = &[
    "lame", // In PATH
    "/usr/bin/lame",
    "/usr/local/bin/lame",
    "/opt/homebrew/bin/lame",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    WavToFlac,
    FlacToWav,
    WavToMp3,
    Mp3ToWav,
}

/// Encode a WAV file to FLAC or MP3, chosen by the destination extension.
pub fn encode(source: &Path, dest: &Path, tools: &ToolPaths) -> Result<(), AudioError> {
    match conversion_for(source, dest)? {
        Conversion::WavToFlac => {
            let tool = find_tool(FLAC, tools.flac.as_deref(), FLAC_PATHS)?;
            let mut command = Command::new(tool);
            command
                .args(["--best", "--silent", "-o"])
                .arg(dest)
                .arg(source);
            run_tool(FLAC, &mut command)
        }
        Conversion::WavToMp3 => {
            let tool = find_tool(LAME, tools.lame.as_deref(), LAME_PATHS)?;
            let mut command = Command::new(tool);
            command.args(["--quiet", "-V", "0"]).arg(source).arg(dest);
            run_tool(LAME, &mut command)
        }
        other => Err(unsupported(source, dest, other)),
    }
}

/// Decode a FLAC or MP3 file back to WAV.
pub fn decode(source: &Path, dest: &Path, tools: &ToolPaths) -> Result<(), AudioError> {
    match conversion_for(source, dest)? {
        Conversion::FlacToWav => {
            let tool = find_tool(FLAC, tools.flac.as_deref(), FLAC_PATHS)?;
            let mut command = Command::new(tool);
            command
                .args(["-d", "--silent", "-o"])
                .arg(dest)
                .arg(source);
            run_tool(FLAC, &mut command)
        }
        Conversion::Mp3ToWav => {
            let tool = find_tool(LAME, tools.lame.as_deref(), LAME_PATHS)?;
            let mut command = Command::new(tool);
            command.args(["--quiet", "--decode"]).arg(source).arg(dest);
            run_tool(LAME, &mut command)
        }
        other => Err(unsupported(source, dest, other)),
    }
}

fn unsupported(source: &Path, dest: &Path, conversion: Conversion) -> AudioError {
    tracing::debug!("Rejected conversion {:?}", conversion);
    AudioError::UnsupportedConversion(format!(
        "{} -> {}",
        extension_of(source),
        extension_of(dest)
    ))
}

/// Classify the conversion by the extension pair, case-insensitively.
fn conversion_for(source: &Path, dest: &Path) -> Result<Conversion, AudioError> {
    let src = extension_of(source);
    let dst = extension_of(dest);
    match (src.as_str(), dst.as_str()) {
        ("wav", "flac") => Ok(Conversion::WavToFlac),
        ("flac", "wav") => Ok(Conversion::FlacToWav),
        ("wav", "mp3") => Ok(Conversion::WavToMp3),
        ("mp3", "wav") => Ok(Conversion::Mp3ToWav),
        _ => Err(AudioError::UnsupportedConversion(format!("{src} -> {dst}"))),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Check if the encoding tools are available on the system
pub fn flac_available(tools: &ToolPaths) -> bool {
    find_tool(FLAC, tools.flac.as_deref(), FLAC_PATHS).is_ok()
}

pub fn lame_available(tools: &ToolPaths) -> bool {
    find_tool(LAME, tools.lame.as_deref(), LAME_PATHS).is_ok()
}
