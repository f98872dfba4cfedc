//! # bridge_core - Load Combination and Envelope Engine
//!
//! `bridge_core` runs preliminary checks of multi-span bridge beams under
//! Eurocode-style load combinations: dead and permanent actions, Load Model 1
//! lane loading and a moving axle train. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every run is a fresh computation from its input
//! - **Typed pipeline**: `GeometryModel → LoadCase → ResponseEnvelope → CriticalValue`
//! - **Rich Errors**: structured error types, not just strings
//! - **Pluggable solver**: the analysis talks to the [`solver::StructuralSolver`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_core::analysis::run_analysis;
//! use bridge_core::input::AnalysisInput;
//! use bridge_core::solver::BeamSolver;
//!
//! let input = AnalysisInput::demo();
//! let report = run_analysis(&input, &BeamSolver::new(input.settings.station_step))?;
//!
//! for value in &report.critical_values {
//!     println!("{}", value.summary());
//! }
//! # Ok::<(), bridge_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Spans, supports, end conditions and restraints
//! - [`loads`] - Load cases, LM1 traffic rule, vehicles and partial factors
//! - [`solver`] - Structural solver trait and the bundled stiffness solver
//! - [`envelope`] - Response envelopes and their combination
//! - [`critical`] - Per-span extreme values
//! - [`results`] - Per-load-case response series
//! - [`detail`] - Per-station detail tables
//! - [`analysis`] - The end-to-end pipeline
//! - [`input`] / [`settings`] - Run input and analysis settings
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON input loading and atomic report saves

pub mod analysis;
pub mod critical;
pub mod detail;
pub mod envelope;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod input;
pub mod loads;
pub mod results;
pub mod settings;
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use analysis::{run_analysis, AnalysisReport};
pub use errors::{CalcError, CalcResult, SolverError};
pub use file_io::{load_input, save_report};
pub use input::AnalysisInput;
