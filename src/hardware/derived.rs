use getset::CopyGetters;
use log::debug;

use super::error::ConfigError;
use super::{Parameters, STEPS_MAX_VALUE};

///
/// The motor and pixel limits derived from the raw parameters. These are computed in full by
/// `DerivedParameters::compute` and never edited afterwards.
///
/// # Fields:
/// - `steps_size_mm`: The cord travel of a single microstep, in millimetres
/// - `steps_per_value`: The full steps a single speed command value may encode
/// - `max_speed_mms`: The carriage speed limit, in millimetres per second
/// - `acceleration_mms2`: The carriage acceleration limit, in millimetres per second squared
/// - `effective_width`: The page width after rotation, in millimetres
/// - `effective_height`: The page height after rotation, in millimetres
/// - `pixels_per_mm`: The drawing image resolution
/// - `height_pixels`: The height of the drawing image, in pixels
/// - `height_screen`: The height of the preview, in display pixels
///
#[derive(CopyGetters, Debug, Clone, Copy, PartialEq)]
#[getset(get_copy = "pub")]
pub struct DerivedParameters {
    steps_size_mm: f64,
    steps_per_value: f64,
    max_speed_mms: f64,
    acceleration_mms2: f64,
    effective_width: f64,
    effective_height: f64,
    pixels_per_mm: f64,
    height_pixels: u32,
    height_screen: u32,
}

impl DerivedParameters {
    ///
    /// Derives every limit from a set of parameters. A rotated page has its width and height
    /// swapped before any pixel metric is computed.
    ///
    /// # Parameters:
    /// - `params`: The raw machine, paper and screen parameters
    ///
    /// # Returns:
    /// - The derived parameters
    /// - An error naming the first parameter which is zero, negative or not finite
    ///
    pub fn compute(params: &Parameters) -> Result<DerivedParameters, ConfigError> {
        let machine = &params.machine;
        let paper = &params.paper;

        positive("machineWidth", machine.machine_width() as f64)?;
        let steps_per_rev = positive("stepsPerRev", machine.steps_per_rev() as f64)?;
        let step_multiplier = positive("stepMultiplier", machine.step_multiplier() as f64)?;
        let time_slice_us = positive("timeSliceUS", machine.time_slice_us())?;
        let motor_accel = positive("motorAccel", machine.motor_accel())?;
        let mm_per_rev = positive("mmPerRev", machine.mm_per_rev())?;
        let motor_max_speed = positive("motorMaxSpeed", machine.motor_max_speed())?;
        let pixels = positive("pixels", paper.pixels() as f64)?;

        let (effective_width, effective_height) = match paper.rotate() {
            true => (paper.height() as f64, paper.width() as f64),
            false => (paper.width() as f64, paper.height() as f64),
        };
        let margin = paper.margin() as f64;
        let drawable_width = positive("width", effective_width - 2. * margin)?;

        let microsteps_per_rev = steps_per_rev * step_multiplier;
        let steps_size_mm = (1. / microsteps_per_rev) * mm_per_rev;
        let steps_per_value = STEPS_MAX_VALUE / step_multiplier;

        // the fastest the control loop can go when every tick carries a full command value
        let loop_speed_mms = (steps_per_value / (time_slice_us / 1_000_000.) / microsteps_per_rev) * mm_per_rev;
        let max_speed_mms = motor_max_speed.min(loop_speed_mms);
        let acceleration_mms2 = max_speed_mms / motor_accel;

        let pixels_per_mm = pixels / drawable_width;
        let height_pixels = ((effective_height - 2. * margin) * pixels_per_mm).floor().max(0.) as u32;
        let height_screen = (height_pixels as f64 * params.screen.screen_x() as f64 / pixels).floor() as u32;

        let derived = DerivedParameters {
            steps_size_mm,
            steps_per_value,
            max_speed_mms,
            acceleration_mms2,
            effective_width,
            effective_height,
            pixels_per_mm,
            height_pixels,
            height_screen,
        };
        debug!("Derived parameters: {:?}", derived);

        Ok(derived)
    }
}

///
/// Checks a required value is finite and greater than zero.
///
/// # Returns:
/// - The value, if it is finite and greater than zero
/// - `ConfigurationInvalid` naming the parameter otherwise
///
fn positive(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(ConfigError::ConfigurationInvalid { parameter, value })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn a4_parameters() -> Parameters {
        let mut params = Parameters::default();
        params.machine
            .set_machine_width(1000)
            .set_mm_per_rev(40.0)
            .set_steps_per_rev(200)
            .set_step_multiplier(16)
            .set_time_slice_us(1000.)
            .set_motor_accel(2.0)
            .set_motor_max_speed(100.0);
        params.paper
            .set_width(210)
            .set_height(297)
            .set_margin(5)
            .set_pixels(800);
        params.screen.set_screen_x(400);
        params
    }

    #[test]
    fn step_size_per_microstep() {
        let derived = DerivedParameters::compute(&a4_parameters()).unwrap();
        assert!((derived.steps_size_mm() - 0.0125).abs() < 1e-12);
        assert!((derived.steps_per_value() - 126. / 16.).abs() < 1e-12);
    }

    #[test]
    fn speed_limited_by_control_loop() {
        // 7.875 steps per 1ms tick over 3200 steps/rev at 40mm/rev is 98.4375mm/s
        let derived = DerivedParameters::compute(&a4_parameters()).unwrap();
        assert!((derived.max_speed_mms() - 98.4375).abs() < 1e-9);
        assert!((derived.acceleration_mms2() - 98.4375 / 2.).abs() < 1e-9);
    }

    #[test]
    fn speed_limited_by_motor() {
        let mut params = a4_parameters();
        params.machine.set_motor_max_speed(50.);
        let derived = DerivedParameters::compute(&params).unwrap();
        assert_eq!(derived.max_speed_mms(), 50.);
        assert_eq!(derived.acceleration_mms2(), 25.);
    }

    #[test]
    fn page_pixel_metrics() {
        let derived = DerivedParameters::compute(&a4_parameters()).unwrap();
        assert_eq!(derived.pixels_per_mm(), 4.0);
        assert_eq!(derived.height_pixels(), 1148);
        assert_eq!(derived.height_screen(), 574);
    }

    #[test]
    fn rotation_swaps_before_pixel_metrics() {
        let mut params = a4_parameters();
        params.paper
            .set_width(100)
            .set_height(200)
            .set_margin(5)
            .set_pixels(100)
            .set_rotate(true);
        let derived = DerivedParameters::compute(&params).unwrap();

        assert_eq!(derived.effective_width(), 200.);
        assert_eq!(derived.effective_height(), 100.);
        assert_eq!(derived.pixels_per_mm(), 100. / 190.);
        assert_eq!(derived.height_pixels(), 47);

        // the raw parameters are left as loaded
        assert_eq!(params.paper.width(), 100);
    }

    #[test]
    fn zero_steps_per_rev_is_invalid() {
        let mut params = a4_parameters();
        params.machine.set_steps_per_rev(0);
        assert_eq!(
            DerivedParameters::compute(&params),
            Err(ConfigError::ConfigurationInvalid { parameter: "stepsPerRev", value: 0. })
        );
    }

    #[test]
    fn zero_mm_per_rev_is_invalid() {
        let mut params = a4_parameters();
        params.machine.set_mm_per_rev(0.);
        assert_eq!(
            DerivedParameters::compute(&params),
            Err(ConfigError::ConfigurationInvalid { parameter: "mmPerRev", value: 0. })
        );
    }

    #[test]
    fn negative_motor_max_speed_is_invalid() {
        let mut params = a4_parameters();
        params.machine.set_motor_max_speed(-5.);
        assert_eq!(
            DerivedParameters::compute(&params),
            Err(ConfigError::ConfigurationInvalid { parameter: "motorMaxSpeed", value: -5. })
        );
    }

    #[test]
    fn margins_wider_than_page_are_invalid() {
        let mut params = a4_parameters();
        params.paper.set_margin(105);
        assert!(matches!(
            DerivedParameters::compute(&params),
            Err(ConfigError::ConfigurationInvalid { parameter: "width", .. })
        ));
    }

    #[test]
    fn first_run_defaults_are_invalid() {
        assert!(DerivedParameters::compute(&Parameters::default()).is_err());
    }
}
