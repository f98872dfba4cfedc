//! # Analysis Pipeline
//!
//! [`run_analysis`] turns an [`AnalysisInput`] into an [`AnalysisReport`]:
//!
//! ```text
//! AnalysisInput
//!   → GeometryModel
//!   → DEAD / PERM / LIVE load cases, vehicle (LM1 or user-defined)
//!   → factored static case  → static envelope ─┐
//!   → factored vehicle      → vehicle sweep   ─┼→ governing envelope → critical values
//!   → unfactored per-case series → detail tables
//! ```
//!
//! Each stage is a function of the values before it. The first failing
//! stage aborts the run; no partial report is returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::critical::{extract_critical, CriticalValue};
use crate::detail::DetailTables;
use crate::envelope::{patterned_envelope, zero_like, ResponseEnvelope};
use crate::errors::CalcResult;
use crate::geometry::GeometryModel;
use crate::input::{AnalysisInput, ProjectInfo, VehicleInput};
use crate::loads::{combine, derive_traffic_load, factor_vehicle, TrafficLoad, Vehicle};
use crate::results::{accumulate, LoadCaseResults, NamedLoadCases};
use crate::settings::{AnalysisSettings, LiveLoading};
use crate::solver::StructuralSolver;

/// Everything produced by one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub project: Option<ProjectInfo>,
    pub settings: AnalysisSettings,
    /// Support coordinates from the left end (m)
    pub support_positions: Vec<f64>,
    /// LM1 breakdown, when the vehicle was derived from the carriageway
    pub traffic: Option<TrafficLoad>,
    /// Vehicle as swept, axle weights factored
    pub vehicle: Vehicle,
    pub static_envelope: ResponseEnvelope,
    pub vehicle_envelope: ResponseEnvelope,
    pub governing_envelope: ResponseEnvelope,
    pub critical_values: Vec<CriticalValue>,
    pub load_case_results: LoadCaseResults,
    pub detail_tables: DetailTables,
}

/// Factored static envelope for the permanent and live-lane cases
pub fn static_envelope<S: StructuralSolver + ?Sized>(
    solver: &S,
    geometry: &GeometryModel,
    cases: &NamedLoadCases,
    input: &AnalysisInput,
) -> CalcResult<ResponseEnvelope> {
    let permanent = combine(
        &cases.dead,
        &cases.perm,
        input.dead_factors().unfavorable,
        input.permanent_factors().unfavorable,
    )?;

    match input.settings.live_loading {
        LiveLoading::Full => {
            let factored = combine(&permanent, &cases.live, 1.0, input.vehicle_factors().unfavorable)?;
            log::debug!("Static case '{}'", factored.name);
            let series = solver.solve_static(geometry, &factored)?;
            ResponseEnvelope::from_series(&series)
        }
        LiveLoading::Patterned => {
            patterned_envelope(solver, geometry, &permanent, &cases.live, input.vehicle_factors())
        }
    }
}

/// Run the complete analysis
pub fn run_analysis<S: StructuralSolver + ?Sized>(input: &AnalysisInput, solver: &S) -> CalcResult<AnalysisReport> {
    input.validate()?;
    let settings = input.settings;

    let geometry = input.geometry()?;
    log::debug!(
        "Geometry: {} spans, total length {} m",
        geometry.span_count(),
        geometry.total_length()
    );
    if settings.station_step > geometry.shortest_span() {
        log::warn!(
            "Station step {} m exceeds the shortest span {} m",
            settings.station_step,
            geometry.shortest_span()
        );
    }

    let traffic = match input.vehicle {
        VehicleInput::Lm1 => Some(derive_traffic_load(input.carriageway_width)?),
        VehicleInput::UserDefined { .. } => None,
    };
    let vehicle = input.vehicle()?;
    let cases = input.load_cases(&geometry, &vehicle)?;

    let static_env = static_envelope(solver, &geometry, &cases, input)?;

    let factored_vehicle = factor_vehicle(&vehicle, input.vehicle_factors());
    log::debug!(
        "Sweeping {} axles ({} m) at {} m steps",
        factored_vehicle.axle_count(),
        factored_vehicle.length(),
        settings.sweep_step
    );
    let vehicle_env = solver.sweep_vehicle(&geometry, &factored_vehicle, settings.sweep_step)?;

    let mut governing = zero_like(&static_env);
    governing.augment(&static_env)?;
    governing.augment(&vehicle_env)?;

    let critical_values = extract_critical(&governing, &geometry)?;
    let load_case_results = accumulate(solver, &geometry, &cases)?;
    let support_positions = geometry.support_positions();
    let detail_tables = DetailTables::build(
        load_case_results.grid(),
        &load_case_results,
        &vehicle_env,
        &support_positions,
    )?;

    let report = AnalysisReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        project: input.project.clone(),
        settings,
        support_positions,
        traffic,
        vehicle: factored_vehicle,
        static_envelope: static_env,
        vehicle_envelope: vehicle_env,
        governing_envelope: governing,
        critical_values,
        load_case_results,
        detail_tables,
    };

    log::info!(
        "Analysis {} complete: {} spans, {} stations",
        report.run_id,
        geometry.span_count(),
        report.governing_envelope.len()
    );
    Ok(report)
}
