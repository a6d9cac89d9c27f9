//! Shared helpers for command handlers.

use std::path::Path;

use oasis_api::types::ResourceRecord;

use crate::error::CliError;

/// Browse filters accept "All" sentinels meaning "no constraint"; the
/// county-wide location picker uses a longer one.
const SENTINELS: &[&str] = &["", "All", "All / Champaign County"];

/// Map a sentinel filter value to `None`, passing real values through.
pub fn normalize_filter(value: Option<String>) -> Option<String> {
    value.filter(|v| !SENTINELS.contains(&v.as_str()))
}

/// Parse a `--from "LAT,LNG"` flag into a coordinate pair.
pub fn parse_position(value: &str) -> Result<(f64, f64), CliError> {
    let invalid = || CliError::Validation {
        field: "from".into(),
        reason: format!("expected \"LAT,LNG\", got '{value}'"),
    };
    let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    Ok((lat, lng))
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    Ok(confirmed)
}

/// Read and parse a resource document for `--from-file` flags.
pub fn read_resource_file(path: &Path) -> Result<ResourceRecord, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid resource JSON: {e}"),
    })
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
