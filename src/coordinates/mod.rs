//!
//! Coordinate representations and the transforms between coordinate spaces
//!

use std::fmt;

use crate::hardware::math::{mm_to_steps, steps_to_mm};

pub mod error;
pub mod transform;

///
/// A cartesian position. Which space it belongs to (system millimetres, drawing pixels or
/// screen pixels) is implied by where it came from.
///
/// # Fields:
/// - `x`: The horizontal position, growing rightwards
/// - `y`: The vertical position, growing downwards
/// - `pen_up`: Whether the pen is lifted while moving to this position
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub pen_up: bool,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, pen_up: bool) -> Coordinate {
        Coordinate { x, y, pen_up }
    }

    ///
    /// # Returns:
    /// - The coordinate moved by (`dx`, `dy`)
    ///
    pub fn translate(&self, dx: f64, dy: f64) -> Coordinate {
        Coordinate { x: self.x + dx, y: self.y + dy, pen_up: self.pen_up }
    }

    ///
    /// # Returns:
    /// - The coordinate with both axes multiplied by `factor`
    ///
    pub fn scale(&self, factor: f64) -> Coordinate {
        Coordinate { x: self.x * factor, y: self.y * factor, pen_up: self.pen_up }
    }

    ///
    /// # Returns:
    /// - The coordinate with both axes divided by `divisor`
    ///
    pub fn divide(&self, divisor: f64) -> Coordinate {
        Coordinate { x: self.x / divisor, y: self.y / divisor, pen_up: self.pen_up }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={} pen {}", self.x, self.y, if self.pen_up { "up" } else { "down" })
    }
}

///
/// A position expressed as the two cord lengths, the native space of the motors.
///
/// # Fields:
/// - `left_dist`: The distance from the left anchor to the carriage, in millimetres
/// - `right_dist`: The distance from the right anchor to the carriage, in millimetres
/// - `pen_up`: Whether the pen is lifted while moving to this position
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordinate {
    pub left_dist: f64,
    pub right_dist: f64,
    pub pen_up: bool,
}

impl PolarCoordinate {
    pub fn new(left_dist: f64, right_dist: f64, pen_up: bool) -> PolarCoordinate {
        PolarCoordinate { left_dist, right_dist, pen_up }
    }

    ///
    /// Converts both cord lengths into whole microsteps.
    ///
    /// # Parameters:
    /// - `steps_size_mm`: The cord travel of a single microstep, see `DerivedParameters`
    ///
    /// # Returns:
    /// - The left and right cord lengths in microsteps, respectively
    ///
    pub fn to_steps(&self, steps_size_mm: f64) -> (i64, i64) {
        (mm_to_steps(self.left_dist, steps_size_mm), mm_to_steps(self.right_dist, steps_size_mm))
    }

    ///
    /// Builds a polar coordinate from cord lengths counted in microsteps.
    ///
    /// # Parameters:
    /// - `left_steps`: The left cord length, in microsteps
    /// - `right_steps`: The right cord length, in microsteps
    /// - `steps_size_mm`: The cord travel of a single microstep
    /// - `pen_up`: The pen state
    ///
    pub fn from_steps(left_steps: i64, right_steps: i64, steps_size_mm: f64, pen_up: bool) -> PolarCoordinate {
        PolarCoordinate {
            left_dist: steps_to_mm(left_steps, steps_size_mm),
            right_dist: steps_to_mm(right_steps, steps_size_mm),
            pen_up,
        }
    }
}

impl fmt::Display for PolarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left={} right={} pen {}", self.left_dist, self.right_dist, if self.pen_up { "up" } else { "down" })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_keep_pen_state() {
        let c = Coordinate::new(2., 4., true);
        assert_eq!(c.translate(1., -1.), Coordinate::new(3., 3., true));
        assert_eq!(c.scale(2.), Coordinate::new(4., 8., true));
        assert_eq!(c.divide(2.), Coordinate::new(1., 2., true));
    }

    #[test]
    fn polar_steps() {
        let polar = PolarCoordinate::new(500., 806.2257, false);
        assert_eq!(polar.to_steps(0.0125), (40000, 64498));

        let back = PolarCoordinate::from_steps(40000, 64498, 0.0125, true);
        assert!((back.left_dist - 500.).abs() < 1e-9);
        assert!((back.right_dist - 806.225).abs() < 1e-9);
        assert!(back.pen_up);
    }
}
