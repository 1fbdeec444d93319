use thiserror::Error;

///
/// All errors emitted while deriving the motor and pixel limits.
/// The error messages can be displayed to users on the frontend. Format nicely please.
///
/// - `ConfigurationInvalid`: When a parameter used as a divisor is zero, negative or not finite
///     Parameters:
///     - `parameter`: The name of the offending parameter, as it appears in the settings file
///     - `value`: The value which was rejected
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("The configuration value {} = {} is invalid, it must be a positive number.", .parameter, .value)]
    ConfigurationInvalid { parameter: &'static str, value: f64 },
}
