//!
//! Physical hardware representations and handling
//!

use getset::{CopyGetters, Getters, Setters};
use serde::{Deserialize, Serialize};

pub mod derived;
pub mod error;
pub mod math;

/// The command value which resets the motor controller.
pub const RESET_COMMAND: i8 = -128;
/// The command value which raises the pen.
pub const PEN_UP_COMMAND: i8 = -127;
/// The command value which lowers the pen.
pub const PEN_DOWN_COMMAND: i8 = 127;
/// The largest step magnitude a single motor speed command may encode.
pub const STEPS_MAX_VALUE: f64 = 126.0;

///
/// The physical description of the machine: the two cord anchors, the motors and the control
/// loop driving them. Lengths are measured in millimetres.
/// All fields have an associated getter and setter function.
///
/// # Fields:
/// - `pen_size`: The width of the line drawn by the pen
/// - `machine_width`: The horizontal distance between the two cord anchors
/// - `machine_height`: The vertical drop of the work area below the anchors
/// - `mm_per_rev`: The cord travel for one revolution of a motor
/// - `steps_per_rev`: The full steps per revolution of a motor
/// - `step_multiplier`: The microstepping factor of the motor drivers
/// - `serial_port`: The serial device of the motor controller, `"none"` when unset
/// - `time_slice_us`: The control loop tick period, in microseconds
/// - `baud`: The serial baud rate of the motor controller
/// - `motor_accel`: The raw motor acceleration setting
/// - `motor_max_speed`: The rated maximum speed of the motors
/// - `pen_up`: The actuator position which lifts the pen
/// - `pen_down`: The actuator position which lowers the pen
/// - `home_x`: The x position of the carriage when homed
/// - `home_y`: The y position of the carriage when homed
/// - `polar_draw`: Whether lines are drawn by interpolating in polar space
///
#[derive(Getters, CopyGetters, Setters, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MachineParameters {
    #[getset(get_copy = "pub", set = "pub")]
    pen_size: f64,
    #[getset(get_copy = "pub", set = "pub")]
    machine_width: u32,
    #[getset(get_copy = "pub", set = "pub")]
    machine_height: u32,
    #[getset(get_copy = "pub", set = "pub")]
    mm_per_rev: f64,
    #[getset(get_copy = "pub", set = "pub")]
    steps_per_rev: u32,
    #[getset(get_copy = "pub", set = "pub")]
    step_multiplier: u32,
    #[getset(get = "pub", set = "pub")]
    serial_port: String,
    #[serde(rename = "timeSliceUS")]
    #[getset(get_copy = "pub", set = "pub")]
    time_slice_us: f64,
    #[getset(get_copy = "pub", set = "pub")]
    baud: u32,
    #[getset(get_copy = "pub", set = "pub")]
    motor_accel: f64,
    #[getset(get_copy = "pub", set = "pub")]
    motor_max_speed: f64,
    #[getset(get_copy = "pub", set = "pub")]
    pen_up: i32,
    #[getset(get_copy = "pub", set = "pub")]
    pen_down: i32,
    #[getset(get_copy = "pub", set = "pub")]
    home_x: i32,
    #[getset(get_copy = "pub", set = "pub")]
    home_y: i32,
    #[getset(get_copy = "pub", set = "pub")]
    polar_draw: bool,
}

impl Default for MachineParameters {
    ///
    /// The first-run machine description. Every value is a placeholder the user is expected to
    /// replace.
    ///
    fn default() -> Self {
        MachineParameters {
            pen_size: 1.0,
            machine_width: 1,
            machine_height: 1,
            mm_per_rev: 1.0,
            steps_per_rev: 1,
            step_multiplier: 1,
            serial_port: "none".to_owned(),
            time_slice_us: 1.0,
            baud: 57600,
            motor_accel: 1.0,
            motor_max_speed: 1.0,
            pen_up: 0,
            pen_down: 0,
            home_x: 0,
            home_y: 0,
            polar_draw: true,
        }
    }
}

///
/// The page being drawn on, and where it is pinned on the machine.
/// All lengths are in millimetres, relative to the left cord anchor.
///
/// # Fields:
/// - `size`: The name of the paper size, `"custom"` for hand entered dimensions
/// - `width`: The width of the page as loaded, before any rotation
/// - `height`: The height of the page as loaded, before any rotation
/// - `pos_x`: The horizontal offset of the page from the left anchor
/// - `pos_y`: The vertical offset of the page from the left anchor
/// - `margin`: The blank border kept on every side of the page
/// - `pixels`: The width of the drawing image, in pixels
/// - `rotate`: Whether the page is turned on its side, swapping width and height
///
#[derive(Getters, CopyGetters, Setters, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaperParameters {
    #[getset(get = "pub", set = "pub")]
    size: String,
    #[getset(get_copy = "pub", set = "pub")]
    width: u32,
    #[getset(get_copy = "pub", set = "pub")]
    height: u32,
    #[getset(get_copy = "pub", set = "pub")]
    pos_x: i32,
    #[getset(get_copy = "pub", set = "pub")]
    pos_y: i32,
    #[getset(get_copy = "pub", set = "pub")]
    margin: u32,
    #[getset(get_copy = "pub", set = "pub")]
    pixels: u32,
    #[getset(get_copy = "pub", set = "pub")]
    rotate: bool,
}

impl Default for PaperParameters {
    fn default() -> Self {
        PaperParameters {
            size: "custom".to_owned(),
            width: 1,
            height: 1,
            pos_x: 1,
            pos_y: 1,
            margin: 1,
            pixels: 1,
            rotate: false,
        }
    }
}

///
/// The on-screen preview of a drawing.
///
/// # Fields:
/// - `screen_x`: The width of the preview, in display pixels
/// - `show_image`: Whether the preview is displayed while drawing
/// - `save_image`: Whether the preview is saved once a drawing completes
///
#[derive(CopyGetters, Setters, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[getset(get_copy = "pub", set = "pub")]
pub struct ScreenParameters {
    screen_x: u32,
    show_image: bool,
    save_image: bool,
}

impl Default for ScreenParameters {
    fn default() -> Self {
        ScreenParameters { screen_x: 1, show_image: false, save_image: false }
    }
}

///
/// The three parameter groups read from the settings store, as a single value.
/// Changing any of them means building new `DerivedParameters`, never patching old ones.
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Parameters {
    #[serde(rename = "vpip")]
    pub machine: MachineParameters,
    #[serde(rename = "Paper")]
    pub paper: PaperParameters,
    #[serde(rename = "Screen")]
    pub screen: ScreenParameters,
}
