//! Structural solver seam
//!
//! Analysis code only talks to [`StructuralSolver`]. [`BeamSolver`] is the
//! bundled direct-stiffness implementation; any other back end can be
//! plugged in as long as it samples every result on the same station grid
//! for a given geometry.

mod beam;
pub mod element;

pub use beam::BeamSolver;

use crate::envelope::ResponseEnvelope;
use crate::errors::SolverError;
use crate::geometry::GeometryModel;
use crate::loads::{LoadCase, Vehicle};
use crate::results::ResponseSeries;

/// Static and moving-load analysis of a continuous beam
pub trait StructuralSolver {
    /// Shear, moment, deflection and reactions under one static load case
    fn solve_static(&self, geometry: &GeometryModel, load_case: &LoadCase) -> Result<ResponseSeries, SolverError>;

    /// Envelope of moment and shear as `vehicle` crosses the beam.
    ///
    /// The front axle travels from x = 0 to total length + vehicle length in
    /// increments of `step`; axles off the beam carry no load.
    fn sweep_vehicle(&self, geometry: &GeometryModel, vehicle: &Vehicle, step: f64) -> Result<ResponseEnvelope, SolverError>;
}
