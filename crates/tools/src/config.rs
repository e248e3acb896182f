use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::Tuning;
use log::debug;

/// Reads a TOML tuning file. Missing keys keep their default values.
pub fn load_tuning(path: &Path) -> Result<Tuning> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tuning file: {}", path.display()))?;
    let tuning: Tuning = toml::from_str(&text)
        .with_context(|| format!("Failed to parse tuning file: {}", path.display()))?;
    tuning.validate().with_context(|| format!("Invalid tuning in {}", path.display()))?;
    debug!("loaded tuning from {}: {tuning:?}", path.display());
    Ok(tuning)
}

pub fn resolve_tuning(path: Option<&Path>) -> Result<Tuning> {
    match path {
        Some(path) => load_tuning(path),
        None => Ok(Tuning::default()),
    }
}
