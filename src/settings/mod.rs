//!
//! The settings file: the parameters as they are kept on disk, under the `vpip`, `Paper` and
//! `Screen` sections
//!

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::hardware::Parameters;
use crate::settings::error::SettingsError;

pub mod error;

/// The settings directory, relative to the home directory.
pub const SETTINGS_DIR: &str = ".vpip";
/// The settings file name, inside `SETTINGS_DIR`.
pub const SETTINGS_FILE: &str = "config.json";

///
/// # Returns:
/// - The default settings file path, `~/.vpip/config.json`
/// - An error if the home directory is unknown
///
pub fn default_path() -> Result<PathBuf, SettingsError> {
    match dirs::home_dir() {
        Some(home) => Ok(home.join(SETTINGS_DIR).join(SETTINGS_FILE)),
        None => Err(SettingsError::NoHomeDirectory),
    }
}

///
/// Reads the parameters from a settings file. If the file does not exist, the first-run
/// defaults are written to it and it is read again.
///
/// # Parameters:
/// - `path`: The settings file path
///
/// # Returns:
/// - The parameters, and whether they came from an existing configuration (`true`) or were
/// freshly initialised with defaults (`false`)
/// - An error if the file could not be read, written or parsed
///
pub fn load(path: &Path) -> Result<(Parameters, bool), SettingsError> {
    info!("Config is being read from {}", path.display());

    if !path.is_file() {
        write_defaults(path)?;
        let (parameters, _) = load(path)?;
        return Ok((parameters, false));
    }

    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io { path: path.display().to_string(), source })?;
    let parameters: Parameters = serde_json::from_str(&contents).map_err(|source| SettingsError::Parse { path: path.display().to_string(), source })?;

    Ok((parameters, true))
}

///
/// Writes the first-run default parameters to a settings file, creating its directory if
/// needed. An existing file is overwritten.
///
/// # Parameters:
/// - `path`: The settings file path
///
/// # Returns:
/// - The path written to
/// - An error if the file could not be written
///
pub fn write_defaults(path: &Path) -> Result<PathBuf, SettingsError> {
    info!("Writing default configuration to {}", path.display());
    write_file(path, &Parameters::default())?;
    Ok(path.to_path_buf())
}

///
/// Writes parameters back to a settings file. This is refused unless the parameters were
/// loaded from an existing configuration, so defaults never silently replace a real file.
///
/// # Parameters:
/// - `path`: The settings file path
/// - `parameters`: The parameters to write
/// - `configured`: Whether the parameters came from an existing configuration
///
/// # Returns:
/// - Void if the file was written
/// - `UnconfiguredWrite` if `configured` is false, in which case nothing is written
/// - An error if the file could not be written
///
pub fn write(path: &Path, parameters: &Parameters, configured: bool) -> Result<(), SettingsError> {
    if !configured {
        warn!("Trying to write configuration to {} when unconfigured", path.display());
        return Err(SettingsError::UnconfiguredWrite);
    }

    write_file(path, parameters)
}

fn write_file(path: &Path, parameters: &Parameters) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io { path: path.display().to_string(), source };

    if let Some(dir) = path.parent() {
        // create_dir_all is fine with the directory already existing
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let contents = serde_json::to_string_pretty(parameters).map_err(|source| SettingsError::Parse { path: path.display().to_string(), source })?;
    fs::write(path, contents).map_err(io_err)
}
