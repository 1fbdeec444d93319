use thiserror::Error;

use super::Coordinate;

///
/// All errors emitted from the coordinate transforms.
/// None of these are fatal, the caller decides whether to skip the point or use the fallback.
///
/// - `UnreachableGeometry`: When two cord lengths cannot span the anchors, so no carriage
/// position exists for them
///     Parameters:
///     - `left_dist`: The requested left cord length
///     - `right_dist`: The requested right cord length
///     - `machine_width`: The distance between the anchors
///     - `pen_up`: The pen state of the requested coordinate
///
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("The cord lengths {} and {} cannot reach across the {}mm between the anchors.", .left_dist, .right_dist, .machine_width)]
    UnreachableGeometry { left_dist: f64, right_dist: f64, machine_width: f64, pen_up: bool },
}

impl TransformError {
    ///
    /// # Returns:
    /// - The coordinate to use in place of the unreachable one: the origin, keeping the pen state
    ///
    pub fn fallback(&self) -> Coordinate {
        match self {
            TransformError::UnreachableGeometry { pen_up, .. } => Coordinate::new(0., 0., *pen_up),
        }
    }
}
