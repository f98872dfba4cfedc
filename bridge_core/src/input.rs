//! # Analysis Input
//!
//! [`AnalysisInput`] is everything the presentation layer collects for one
//! run: spans, supports, per-span permanent loads, partial factors, the
//! carriageway width and the vehicle. It serializes to plain JSON so a run
//! can be described in a file and fed to the CLI.
//!
//! Units are kN and m throughout (elastic modulus in kPa, inertia in m⁴).
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::input::AnalysisInput;
//!
//! let input = AnalysisInput::demo();
//! let geometry = input.geometry()?;
//! assert_eq!(geometry.span_count(), 3);
//! assert_eq!(geometry.total_length(), 90.0);
//! # Ok::<(), bridge_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{EndCondition, GeometryModel, RestraintCategory, Span, Support};
use crate::loads::{derive_traffic_load, LoadCaseBuilder, PartialFactorPair, Vehicle};
use crate::results::NamedLoadCases;
use crate::settings::AnalysisSettings;

/// Identification echoed on the report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub bridge_name: String,
    pub engineer: String,
    pub job_id: String,
}

impl ProjectInfo {
    pub fn new(bridge_name: impl Into<String>, engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        ProjectInfo {
            bridge_name: bridge_name.into(),
            engineer: engineer.into(),
            job_id: job_id.into(),
        }
    }
}

/// One span as entered: section inertia rather than EI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanInput {
    /// Span length (m)
    pub length: f64,
    /// Second moment of area (m⁴)
    pub inertia: f64,
    #[serde(default)]
    pub end_condition: EndCondition,
}

impl SpanInput {
    pub fn new(length: f64, inertia: f64, end_condition: EndCondition) -> Self {
        SpanInput {
            length,
            inertia,
            end_condition,
        }
    }
}

/// Unfactored permanent loads on one span (kN/m)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpanLoadsInput {
    pub dead: f64,
    pub permanent: f64,
}

/// Vehicle crossing the bridge
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum VehicleInput {
    /// Load Model 1 tandem derived from the carriageway width
    #[default]
    Lm1,
    /// Custom axle train
    UserDefined {
        axle_weights: Vec<f64>,
        axle_spacings: Vec<f64>,
        /// Residual pressure over the carriageway (kN/m²)
        #[serde(default)]
        residual_pressure: Option<f64>,
    },
}

/// Complete input for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub project: Option<ProjectInfo>,
    /// Elastic modulus (kPa)
    pub elastic_modulus: f64,
    pub spans: Vec<SpanInput>,
    /// Restraint category per support, left to right
    pub supports: Vec<RestraintCategory>,
    /// Dead and permanent load per span
    pub span_loads: Vec<SpanLoadsInput>,
    /// Unfavorable factor on dead load
    pub dead_factor: f64,
    /// Unfavorable factor on superimposed permanent load
    pub permanent_factor: f64,
    /// Carriageway width (m)
    pub carriageway_width: f64,
    #[serde(default)]
    pub vehicle: VehicleInput,
    /// Unfavorable factor on traffic
    pub vehicle_factor: f64,
    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl AnalysisInput {
    /// Three equal 30 m spans on hinged supports with LM1 traffic, all
    /// partial factors 1.0
    pub fn demo() -> Self {
        AnalysisInput {
            project: Some(ProjectInfo::new("Demo three-span bridge", "", "")),
            elastic_modulus: 35_000_000.0,
            spans: vec![SpanInput::new(30.0, 2.0, EndCondition::FixedFixed); 3],
            supports: vec![RestraintCategory::Hinged; 4],
            span_loads: vec![
                SpanLoadsInput {
                    dead: 10.0,
                    permanent: 10.0,
                };
                3
            ],
            dead_factor: 1.0,
            permanent_factor: 1.0,
            carriageway_width: 10.0,
            vehicle: VehicleInput::Lm1,
            vehicle_factor: 1.0,
            settings: AnalysisSettings::default(),
        }
    }

    /// Check the input fields that the geometry does not cover
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.elastic_modulus.is_finite() && self.elastic_modulus > 0.0) {
            return Err(CalcError::validation(
                "elastic_modulus",
                self.elastic_modulus.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if self.span_loads.len() != self.spans.len() {
            return Err(CalcError::validation(
                "span_loads",
                self.span_loads.len().to_string(),
                format!("Expected one entry per span ({})", self.spans.len()),
            ));
        }
        if !(self.carriageway_width.is_finite() && self.carriageway_width >= 0.0) {
            return Err(CalcError::validation(
                "carriageway_width",
                self.carriageway_width.to_string(),
                "Carriageway width must be a non-negative length",
            ));
        }
        self.dead_factors().validate("dead_factor")?;
        self.permanent_factors().validate("permanent_factor")?;
        self.vehicle_factors().validate("vehicle_factor")?;
        self.settings.validate()
    }

    /// Validated geometry with EI = E·I per span
    pub fn geometry(&self) -> CalcResult<GeometryModel> {
        let spans = self
            .spans
            .iter()
            .map(|s| Span::new(s.length, self.elastic_modulus * s.inertia, s.end_condition))
            .collect();
        let supports = self.supports.iter().copied().map(Support::new).collect();
        GeometryModel::new(spans, supports)
    }

    /// Unfactored DEAD, PERM and LIVE load cases
    ///
    /// LIVE is the vehicle's residual distributed load on every span.
    pub fn load_cases(&self, geometry: &GeometryModel, vehicle: &Vehicle) -> CalcResult<NamedLoadCases> {
        let builder = LoadCaseBuilder::new(geometry);
        let dead: Vec<f64> = self.span_loads.iter().map(|l| l.dead).collect();
        let perm: Vec<f64> = self.span_loads.iter().map(|l| l.permanent).collect();
        Ok(NamedLoadCases {
            dead: builder.per_span("DEAD", &dead)?,
            perm: builder.per_span("PERM", &perm)?,
            live: builder.uniform("LIVE", vehicle.residual_load)?,
        })
    }

    /// Unfactored vehicle, including its residual distributed load
    pub fn vehicle(&self) -> CalcResult<Vehicle> {
        let vehicle = match &self.vehicle {
            VehicleInput::Lm1 => derive_traffic_load(self.carriageway_width)?.vehicle(),
            VehicleInput::UserDefined {
                axle_weights,
                axle_spacings,
                residual_pressure,
            } => Vehicle::new(axle_weights.clone(), axle_spacings.clone())
                .with_residual_load(residual_pressure.map_or(0.0, |p| p * self.carriageway_width)),
        };
        vehicle.validate()?;
        Ok(vehicle)
    }

    pub fn dead_factors(&self) -> PartialFactorPair {
        PartialFactorPair::permanent(self.dead_factor)
    }

    pub fn permanent_factors(&self) -> PartialFactorPair {
        PartialFactorPair::permanent(self.permanent_factor)
    }

    pub fn vehicle_factors(&self) -> PartialFactorPair {
        PartialFactorPair::variable(self.vehicle_factor)
    }
}
