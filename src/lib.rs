//!
//! Geometry core of a polargraph pen plotter: a carriage hung from two cords, each wound by a
//! stepper motor at the top corners of the work area.
//!
//! Positions move between four spaces: system millimetres, drawing pixels, screen pixels and
//! polar cord lengths. The `Kinematics` snapshot holds the machine parameters with the limits
//! derived from them, and performs every transform.
//!

pub mod config;
pub mod coordinates;
pub mod hardware;
pub mod settings;

pub use config::PlotterConfig;
pub use coordinates::transform::Kinematics;
pub use coordinates::{Coordinate, PolarCoordinate};
pub use hardware::derived::DerivedParameters;
pub use hardware::Parameters;
