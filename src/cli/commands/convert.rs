//! Encode and decode commands.

use std::path::Path;

use crate::audio::codec;
use crate::config::Config;

/// Encode a WAV file to FLAC or MP3, chosen by the destination extension
pub fn cmd_encode(config: &Config, source: &Path, dest: &Path) -> anyhow::Result<()> {
    let tools = config.binaries.tool_paths();
    codec::encode(source, dest, &tools)?;
    println!("Encoded {} -> {}", source.display(), dest.display());
    Ok(())
}

/// Decode a FLAC or MP3 file back to WAV
pub fn cmd_decode(config: &Config, source: &Path, dest: &Path) -> anyhow::Result<()> {
    let tools = config.binaries.tool_paths();
    codec::decode(source, dest, &tools)?;
    println!("Decoded {} -> {}", source.display(), dest.display());
    Ok(())
}
