//!
//! A loaded plotter configuration: where it came from, and the kinematics built from it
//!

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::error::PlotterError;
use crate::coordinates::transform::Kinematics;
use crate::hardware::Parameters;
use crate::settings;

pub mod error;

///
/// A snapshot of the plotter configuration. It is never edited in place: reloading or
/// reconfiguring returns a new `PlotterConfig`, leaving any copy held by a running drawing
/// untouched.
///
/// # Fields:
/// - `path`: The settings file the configuration was read from
/// - `configured`: Whether the settings file existed before it was read, rather than being
/// initialised with defaults. The defaults never pass the limit calculation, so `load_from`
/// only ever returns `true` here; `false` stays possible for configurations built by hand
/// - `kinematics`: The parameters and derived limits
///
#[derive(Debug, Clone)]
pub struct PlotterConfig {
    path: PathBuf,
    configured: bool,
    kinematics: Kinematics,
}

impl PlotterConfig {
    ///
    /// Loads the configuration from the default settings file, `~/.vpip/config.json`.
    ///
    /// # Returns:
    /// - The loaded configuration
    /// - An error if the settings could not be read, or hold invalid parameters
    ///
    pub fn load() -> Result<PlotterConfig, PlotterError> {
        let path = settings::default_path()?;
        PlotterConfig::load_from(&path)
    }

    ///
    /// Loads the configuration from a given settings file. A missing file is initialised with
    /// the defaults first, which the limit calculation then rejects until they are edited.
    ///
    /// # Parameters:
    /// - `path`: The settings file path
    ///
    /// # Returns:
    /// - The loaded configuration
    /// - An error if the settings could not be read, or hold invalid parameters
    ///
    pub fn load_from(path: &Path) -> Result<PlotterConfig, PlotterError> {
        let (parameters, configured) = settings::load(path)?;
        let kinematics = Kinematics::new(parameters)?;

        Ok(PlotterConfig { path: path.to_path_buf(), configured, kinematics })
    }

    ///
    /// Reads the settings file again. Only call this once no transforms from the old
    /// configuration are still needed, e.g. between drawings.
    ///
    pub fn reload(&self) -> Result<PlotterConfig, PlotterError> {
        PlotterConfig::load_from(&self.path)
    }

    ///
    /// Builds a new configuration with edited parameters, recomputing every derived limit.
    /// Nothing is written to disk, see `PlotterConfig::write`.
    ///
    /// # Parameters:
    /// - `edit`: A function making the changes to a copy of the parameters
    ///
    /// # Returns:
    /// - The new configuration
    /// - An error if the edited parameters are invalid
    ///
    pub fn reconfigure<F>(&self, edit: F) -> Result<PlotterConfig, PlotterError>
    where
        F: FnOnce(&mut Parameters),
    {
        let kinematics = self.kinematics.with_parameters(edit)?;
        Ok(PlotterConfig { path: self.path.clone(), configured: self.configured, kinematics })
    }

    ///
    /// Writes the parameters back to the settings file.
    ///
    /// # Returns:
    /// - Void if the settings were written
    /// - `UnconfiguredWrite` if the configuration was initialised from defaults
    ///
    pub fn write(&self) -> Result<(), PlotterError> {
        settings::write(&self.path, self.kinematics.parameters(), self.configured)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn configured(&self) -> bool {
        self.configured
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }
}

impl fmt::Display for PlotterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.kinematics.parameters();
        let derived = self.kinematics.derived();
        let (machine, paper, screen) = (&params.machine, &params.paper, &params.screen);

        writeln!(f, "***** System configuration *****")?;
        writeln!(f, "configured = {}", self.configured)?;
        writeln!(f, "penSize = {}", machine.pen_size())?;
        writeln!(f, "machineWidth = {}", machine.machine_width())?;
        writeln!(f, "machineHeight = {}", machine.machine_height())?;
        writeln!(f, "mmPerRev = {}", machine.mm_per_rev())?;
        writeln!(f, "stepsPerRev = {}", machine.steps_per_rev())?;
        writeln!(f, "stepMultiplier = {}", machine.step_multiplier())?;
        writeln!(f, "serialPort = {}", machine.serial_port())?;
        writeln!(f, "timeSliceUS = {}", machine.time_slice_us())?;
        writeln!(f, "baud = {}", machine.baud())?;
        writeln!(f, "motorAccel = {}", machine.motor_accel())?;
        writeln!(f, "motorMaxSpeed = {}", machine.motor_max_speed())?;
        writeln!(f, "penUp = {}", machine.pen_up())?;
        writeln!(f, "penDown = {}", machine.pen_down())?;
        writeln!(f, "homeX = {}", machine.home_x())?;
        writeln!(f, "homeY = {}", machine.home_y())?;
        writeln!(f, "polarDraw = {}", machine.polar_draw())?;
        writeln!(f, "size = {}", paper.size())?;
        writeln!(f, "width = {}", derived.effective_width())?;
        writeln!(f, "height = {}", derived.effective_height())?;
        writeln!(f, "posX = {}", paper.pos_x())?;
        writeln!(f, "posY = {}", paper.pos_y())?;
        writeln!(f, "margin = {}", paper.margin())?;
        writeln!(f, "pixelsX = {}", paper.pixels())?;
        writeln!(f, "pixelsY = {}", derived.height_pixels())?;
        writeln!(f, "rotate = {}", paper.rotate())?;
        writeln!(f, "stepsSizeMM = {}", derived.steps_size_mm())?;
        writeln!(f, "stepsPerValue = {}", derived.steps_per_value())?;
        writeln!(f, "MaxSpeedMMs = {}", derived.max_speed_mms())?;
        writeln!(f, "AccelerationMMs2 = {}", derived.acceleration_mms2())?;
        writeln!(f, "screenX = {}", screen.screen_x())?;
        writeln!(f, "screenY = {}", derived.height_screen())?;
        writeln!(f, "showImage = {}", screen.show_image())?;
        write!(f, "saveImage = {}", screen.save_image())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::error::ConfigError;
    use crate::settings::error::SettingsError;
    use crate::settings::tests::temp_settings_path;

    fn a4_parameters() -> Parameters {
        let mut params = Parameters::default();
        params.machine
            .set_machine_width(1000)
            .set_mm_per_rev(40.0)
            .set_steps_per_rev(200)
            .set_step_multiplier(16)
            .set_time_slice_us(1000.)
            .set_motor_max_speed(100.0);
        params.paper.set_width(210).set_height(297).set_margin(5).set_pixels(800);
        params.screen.set_screen_x(400);
        params
    }

    #[test]
    fn first_run_defaults_are_rejected() {
        let (_dir, path) = temp_settings_path();
        let result = PlotterConfig::load_from(&path);

        assert!(matches!(result, Err(PlotterError::Invalid(ConfigError::ConfigurationInvalid { parameter: "width", .. }))));
        assert!(path.is_file());
    }

    #[test]
    fn load_existing_configuration() {
        let (_dir, path) = temp_settings_path();
        settings::write(&path, &a4_parameters(), true).unwrap();

        let config = PlotterConfig::load_from(&path).unwrap();
        assert!(config.configured());
        assert_eq!(config.path(), path.as_path());
        assert_eq!(config.kinematics().derived().pixels_per_mm(), 4.0);
        assert_eq!(config.kinematics().derived().height_pixels(), 1148);
    }

    #[test]
    fn reconfigure_write_and_reload() {
        let (_dir, path) = temp_settings_path();
        settings::write(&path, &a4_parameters(), true).unwrap();
        let config = PlotterConfig::load_from(&path).unwrap();

        let rotated = config.reconfigure(|params| { params.paper.set_rotate(true); }).unwrap();
        assert_eq!(rotated.kinematics().derived().effective_width(), 297.);
        assert_eq!(config.kinematics().derived().effective_width(), 210.);

        // nothing reaches the disk until written
        assert_eq!(config.reload().unwrap().kinematics(), config.kinematics());

        rotated.write().unwrap();
        assert_eq!(config.reload().unwrap().kinematics(), rotated.kinematics());
    }

    #[test]
    fn unconfigured_write_leaves_file_untouched() {
        let (_dir, path) = temp_settings_path();
        settings::write_defaults(&path).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let config = PlotterConfig { path: path.clone(), configured: false, kinematics: Kinematics::new(a4_parameters()).unwrap() };
        assert!(matches!(config.write(), Err(PlotterError::Settings(SettingsError::UnconfiguredWrite))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn report_lists_derived_values() {
        let config = PlotterConfig { path: PathBuf::from("config.json"), configured: true, kinematics: Kinematics::new(a4_parameters()).unwrap() };
        let report = config.to_string();

        assert!(report.starts_with("***** System configuration *****"));
        assert!(report.contains("stepsPerValue = 7.875"));
        assert!(report.contains("pixelsY = 1148"));
        assert!(report.contains("screenY = 574"));
    }
}
