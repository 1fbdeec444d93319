use thiserror::Error;

use crate::hardware::error::ConfigError;
use crate::settings::error::SettingsError;

///
/// All errors emitted while loading or saving a plotter configuration.
///
/// - `Settings`: When the settings file could not be read or written
/// - `Invalid`: When the loaded parameters cannot be used by the transforms
///
#[derive(Error, Debug)]
pub enum PlotterError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
