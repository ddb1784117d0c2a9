//! CD ripping command and tool diagnostics.

use anyhow::Context;
use std::path::Path;

use crate::audio::{codec, ripper};
use crate::config::Config;

/// Rip the inserted audio CD to per-track WAV files
pub fn cmd_rip(config: &Config, dest: &Path, device: Option<&str>) -> anyhow::Result<()> {
    let tools = config.binaries.tool_paths();
    let device = device.or(config.library.cd_device.as_deref());

    std::fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create destination directory: {dest:?}"))?;

    println!("Ripping disc to {}...", dest.display());
    ripper::rip(dest, device, &tools)?;

    let ripped = super::collect_audio_files(dest);
    println!("Ripped {} tracks", ripped.len());
    Ok(())
}

/// Report which external audio tools are installed
pub fn cmd_check_tools(config: &Config) -> anyhow::Result<()> {
    let tools = config.binaries.tool_paths();
    let mut all_found = true;

    if ripper::is_available(&tools) {
        let version = ripper::version(&tools).unwrap_or_else(|| "unknown version".to_string());
        println!("cdparanoia: OK ({version})");
    } else {
        println!("cdparanoia: NOT FOUND");
        all_found = false;
    }

    if codec::flac_available(&tools) {
        println!("flac:       OK");
    } else {
        println!("flac:       NOT FOUND");
        all_found = false;
    }

    if codec::lame_available(&tools) {
        println!("lame:       OK");
    } else {
        println!("lame:       NOT FOUND");
        all_found = false;
    }

    if !all_found {
        print_install_instructions();
    }
    Ok(())
}

/// Print installation instructions for the audio tools
fn print_install_instructions() {
    eprintln!("Some tools are missing. Install them:");
    eprintln!("  macOS:  brew install cdparanoia flac lame");
    eprintln!("  Linux:  apt install cdparanoia flac lame");
    eprintln!("Explicit paths can be set under [binaries] in the config file.");
}
