use log::warn;

use crate::hardware::derived::DerivedParameters;
use crate::hardware::error::ConfigError;
use crate::hardware::math::{cartesian_to_cords, cords_to_cartesian};
use crate::hardware::Parameters;

use super::error::TransformError;
use super::{Coordinate, PolarCoordinate};

///
/// An immutable snapshot of the parameters and the limits derived from them. Every coordinate
/// transform is a method on this snapshot, so a transform can never observe parameters and
/// derived values which disagree.
/// Reconfiguring means building a new snapshot, see `Kinematics::with_parameters`.
///
/// # Fields:
/// - `parameters`: The raw machine, paper and screen parameters
/// - `derived`: The limits computed from `parameters`
///
#[derive(Debug, Clone, PartialEq)]
pub struct Kinematics {
    parameters: Parameters,
    derived: DerivedParameters,
}

impl Kinematics {
    ///
    /// Derives the limits for a set of parameters, making them ready for the transforms.
    ///
    /// # Parameters:
    /// - `parameters`: The raw parameters
    ///
    /// # Returns:
    /// - A new `Kinematics` snapshot
    /// - An error if any parameter would make the transforms divide by zero
    ///
    pub fn new(parameters: Parameters) -> Result<Kinematics, ConfigError> {
        let derived = DerivedParameters::compute(&parameters)?;
        Ok(Kinematics { parameters, derived })
    }

    ///
    /// Builds a new snapshot from edited parameters. `self` is left untouched, so transforms
    /// already running against it are unaffected.
    ///
    pub fn with_parameters<F>(&self, edit: F) -> Result<Kinematics, ConfigError>
    where
        F: FnOnce(&mut Parameters),
    {
        let mut parameters = self.parameters.clone();
        edit(&mut parameters);
        Kinematics::new(parameters)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn derived(&self) -> &DerivedParameters {
        &self.derived
    }

    fn machine_width(&self) -> f64 {
        self.parameters.machine.machine_width() as f64
    }

    ///
    /// Converts a machine position into a position on the drawing image.
    ///
    /// # Parameters:
    /// - `coord`: The position in millimetres, relative to the left anchor
    ///
    /// # Returns:
    /// - The position in drawing pixels
    ///
    pub fn system_to_drawing(&self, coord: &Coordinate) -> Coordinate {
        let paper = &self.parameters.paper;
        let margin = paper.margin() as f64;

        coord
            .translate(paper.pos_x() as f64 - margin, paper.pos_y() as f64 - margin)
            .scale(self.derived.pixels_per_mm())
    }

    ///
    /// Converts a position on the drawing image into a machine position.
    ///
    /// This is not the exact inverse of `system_to_drawing`: the page offset is added here with
    /// the margin added, where the forward transform adds it with the margin subtracted. Tools
    /// reading plotted output rely on these offsets, so keep them as they are.
    ///
    /// # Parameters:
    /// - `coord`: The position in drawing pixels
    ///
    /// # Returns:
    /// - The position in millimetres, relative to the left anchor
    ///
    pub fn drawing_to_system(&self, coord: &Coordinate) -> Coordinate {
        let paper = &self.parameters.paper;
        let margin = paper.margin() as f64;

        coord
            .divide(self.derived.pixels_per_mm())
            .translate(paper.pos_x() as f64 + margin, paper.pos_y() as f64 + margin)
    }

    ///
    /// Rescales a drawing position for the on-screen preview.
    ///
    pub fn drawing_to_screen(&self, coord: &Coordinate) -> Coordinate {
        coord.scale(self.parameters.screen.screen_x() as f64 / self.parameters.paper.pixels() as f64)
    }

    ///
    /// Converts a machine position into the cord lengths which hold the carriage there.
    ///
    /// # Parameters:
    /// - `coord`: The position in millimetres, relative to the left anchor
    ///
    /// # Returns:
    /// - The left and right cord lengths
    ///
    pub fn system_to_polar(&self, coord: &Coordinate) -> PolarCoordinate {
        let (left_dist, right_dist) = cartesian_to_cords(coord.x, coord.y, self.machine_width());
        PolarCoordinate { left_dist, right_dist, pen_up: coord.pen_up }
    }

    ///
    /// Converts cord lengths into a machine position.
    ///
    /// # Parameters:
    /// - `coord`: The left and right cord lengths
    ///
    /// # Returns:
    /// - The position in millimetres, relative to the left anchor
    /// - `UnreachableGeometry` if the cords are too short to span the anchors, or one outreaches
    /// the other by more than the span. The error's `fallback()` is the coordinate to use in its
    /// place
    ///
    pub fn polar_to_system(&self, coord: &PolarCoordinate) -> Result<Coordinate, TransformError> {
        let machine_width = self.machine_width();

        match cords_to_cartesian(coord.left_dist, coord.right_dist, machine_width) {
            Some((x, y)) => Ok(Coordinate { x, y, pen_up: coord.pen_up }),
            None => Err(TransformError::UnreachableGeometry {
                left_dist: coord.left_dist,
                right_dist: coord.right_dist,
                machine_width,
                pen_up: coord.pen_up,
            }),
        }
    }

    ///
    /// As `polar_to_system`, but an unreachable coordinate is logged and replaced by the
    /// fallback origin coordinate rather than returned as an error.
    ///
    pub fn polar_to_system_or_origin(&self, coord: &PolarCoordinate) -> Coordinate {
        match self.polar_to_system(coord) {
            Ok(system) => system,
            Err(err) => {
                warn!("polar_to_system received an invalid coordinate {}: {}", coord, err);
                err.fallback()
            }
        }
    }
}
