//! Load cases, code traffic loading and partial-factor combination
//!
//! # Overview
//!
//! - [`LoadCase`] - Per-span uniformly distributed load descriptors
//! - [`LoadCaseBuilder`] - Assembles dead, permanent and live-lane load cases
//! - [`lm1`] - Eurocode Load Model 1 traffic load from carriageway width
//! - [`Vehicle`] - Axle train plus optional residual distributed load
//! - [`combinations`] - Partial safety factors and linear combination
//!
//! # Example
//!
//! ```
//! use bridge_core::geometry::{EndCondition, GeometryModel, RestraintCategory, Span, Support};
//! use bridge_core::loads::{combine, LoadCaseBuilder};
//!
//! let geometry = GeometryModel::new(
//!     vec![Span::new(20.0, 1.0e6, EndCondition::FixedFixed)],
//!     vec![Support::new(RestraintCategory::Hinged); 2],
//! )?;
//!
//! let builder = LoadCaseBuilder::new(&geometry);
//! let dead = builder.per_span("DEAD", &[10.0])?;
//! let perm = builder.per_span("PERM", &[5.0])?;
//!
//! let factored = combine(&dead, &perm, 1.35, 1.5)?;
//! assert!((factored.loads[0].magnitude - 21.0).abs() < 1e-12);
//! # Ok::<(), bridge_core::errors::CalcError>(())
//! ```

pub mod combinations;
pub mod lm1;
pub mod load_case;
pub mod vehicle;

pub use combinations::{combine, factor_vehicle, PartialFactorPair};
pub use lm1::{derive_traffic_load, TrafficLoad};
pub use load_case::{LoadCase, LoadCaseBuilder, LoadCaseName, SpanLoad};
pub use vehicle::Vehicle;
