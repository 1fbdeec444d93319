use thiserror::Error;

///
/// All errors emitted from the settings store.
/// The error messages can be displayed to users on the frontend. Format nicely please.
///
/// - `NoHomeDirectory`: When no settings path was given and the home directory is unknown
/// - `Io`: When the settings file or its directory could not be read or written
///     Parameters:
///     - `path`: The settings file path
///     - `source`: The underlying IO error
/// - `Parse`: When the settings file is not valid, or a section or key is missing
///     Parameters:
///     - `path`: The settings file path
///     - `source`: The underlying JSON error
/// - `UnconfiguredWrite`: When the settings are written back before a real configuration was
/// ever loaded
///
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not find a home directory to keep the settings in.")]
    NoHomeDirectory,

    #[error("Error accessing the settings file {}: {}", .path, .source)]
    Io { path: String, source: std::io::Error },

    #[error("The settings file {} is invalid: {}", .path, .source)]
    Parse { path: String, source: serde_json::Error },

    #[error("Refusing to write the settings before a configuration has been loaded.")]
    UnconfiguredWrite,
}
