//! # Direct Stiffness Beam Solver
//!
//! Reference implementation of [`StructuralSolver`] for continuous beams.
//!
//! ## Algorithm Overview
//!
//! 1. Assemble the global stiffness matrix (two DOF per support: vertical
//!    translation and rotation)
//! 2. Remove restrained DOFs and rotation DOFs without stiffness (pure hinges)
//! 3. Factorize the reduced matrix once per geometry (LU)
//! 4. For each load vector: solve displacements, recover member end forces,
//!    then shear, moment and deflection at every station
//!
//! ## Stations
//!
//! Each span is divided into `ceil(L / station_step)` equal parts. Stations
//! are shared at supports; the value reported at an interior support is the
//! limit from the left span, at x = 0 the limit from the right.

use nalgebra::linalg::LU;
use nalgebra::{DMatrix, DVector, Dyn, Vector4};

use crate::envelope::ResponseEnvelope;
use crate::errors::{SolverError, SolverErrorKind};
use crate::geometry::GeometryModel;
use crate::loads::{LoadCase, Vehicle};
use crate::results::{ResponseSeries, SupportReaction};
use crate::solver::element::{fixed_end_actions, stiffness, MemberLoad};
use crate::solver::StructuralSolver;

/// Sub-intervals per station interval used to integrate curvature
const DEFLECTION_SUBDIVISION: usize = 8;

/// Pivot threshold, relative to the largest stiffness diagonal
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Relative tolerance for load offsets lying on a span end
const POSITION_TOLERANCE: f64 = 1e-9;

/// Direct stiffness solver for multi-span beams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSolver {
    station_step: f64,
}

impl BeamSolver {
    /// Create a solver reporting results at stations spaced at most
    /// `station_step` apart
    pub fn new(station_step: f64) -> Self {
        BeamSolver { station_step }
    }

    pub fn station_step(&self) -> f64 {
        self.station_step
    }

    /// Station coordinates for a geometry
    pub fn stations(&self, geometry: &GeometryModel) -> Result<Vec<f64>, SolverError> {
        Ok(station_layout(geometry, self.station_step)?
            .iter()
            .map(|s| s.x)
            .collect())
    }
}

impl Default for BeamSolver {
    fn default() -> Self {
        BeamSolver::new(0.5)
    }
}

/// Station location on the beam
#[derive(Debug, Clone, Copy)]
struct Station {
    span: usize,
    local: f64,
    x: f64,
}

/// Number of equal parts a span is divided into
fn divisions(length: f64, step: f64) -> usize {
    ((length / step) - POSITION_TOLERANCE).ceil().max(1.0) as usize
}

fn check_step(step: f64, what: &str) -> Result<(), SolverError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(SolverError::new(
            SolverErrorKind::InvalidStep,
            format!("{} must be positive, got {}", what, step),
        ))
    }
}

fn station_layout(geometry: &GeometryModel, step: f64) -> Result<Vec<Station>, SolverError> {
    check_step(step, "station step")?;

    let mut stations = Vec::new();
    let mut start = 0.0;
    for (i, span) in geometry.spans().iter().enumerate() {
        let n = divisions(span.length, step);
        let first = if i == 0 { 0 } else { 1 };
        for k in first..=n {
            let local = span.length * k as f64 / n as f64;
            stations.push(Station {
                span: i,
                local,
                x: start + local,
            });
        }
        start += span.length;
    }
    Ok(stations)
}

/// Assembled and factorized stiffness for one geometry
struct Assembly<'a> {
    geometry: &'a GeometryModel,
    /// Global DOF index for each row of the reduced system
    free_dofs: Vec<usize>,
    lu: Option<LU<f64, Dyn, Dyn>>,
}

impl<'a> Assembly<'a> {
    fn new(geometry: &'a GeometryModel) -> Result<Self, SolverError> {
        let n_dofs = 2 * geometry.support_count();
        let mut k_global = DMatrix::<f64>::zeros(n_dofs, n_dofs);

        for (e, span) in geometry.spans().iter().enumerate() {
            let k = stiffness(span.length, span.ei, span.end_condition);
            let dofs = element_dofs(e);
            for r in 0..4 {
                for c in 0..4 {
                    k_global[(dofs[r], dofs[c])] += k[(r, c)];
                }
            }
        }

        let scale = (0..n_dofs)
            .map(|d| k_global[(d, d)].abs())
            .fold(0.0_f64, f64::max);

        let mut free_dofs = Vec::new();
        for (node, support) in geometry.supports().iter().enumerate() {
            let v = 2 * node;
            let theta = v + 1;
            if !support.restraint.translation.is_restrained() {
                free_dofs.push(v);
            }
            // A rotation nothing resists (every connected end released) is
            // left out; no member force depends on it.
            if !support.restraint.rotation.is_restrained()
                && k_global[(theta, theta)].abs() > SINGULAR_TOLERANCE * scale
            {
                free_dofs.push(theta);
            }
        }
        free_dofs.sort_unstable();

        let lu = if free_dofs.is_empty() {
            None
        } else {
            let n = free_dofs.len();
            let k_ff = DMatrix::from_fn(n, n, |r, c| k_global[(free_dofs[r], free_dofs[c])]);
            let lu = k_ff.lu();
            let u = lu.u();
            if let Some(i) = (0..n).find(|&i| u[(i, i)].abs() <= SINGULAR_TOLERANCE * scale.max(f64::MIN_POSITIVE)) {
                let dof = free_dofs[i];
                return Err(SolverError::singular(format!(
                    "Stiffness matrix is singular at support {} ({}); geometry is unstable",
                    dof / 2,
                    if dof % 2 == 0 { "translation" } else { "rotation" }
                )));
            }
            Some(lu)
        };

        log::debug!(
            "Assembled {} spans: {} DOFs, {} free",
            geometry.span_count(),
            n_dofs,
            free_dofs.len()
        );

        Ok(Assembly {
            geometry,
            free_dofs,
            lu,
        })
    }

    /// Solve for member end forces given the loads on each member
    fn member_forces(&self, member_loads: &[Vec<MemberLoad>]) -> Result<MemberState, SolverError> {
        let spans = self.geometry.spans();
        let n_dofs = 2 * self.geometry.support_count();

        let mut fixed_end = Vec::with_capacity(spans.len());
        let mut f_global = DVector::<f64>::zeros(n_dofs);
        for (e, span) in spans.iter().enumerate() {
            let mut q = [0.0; 4];
            for load in &member_loads[e] {
                let qf = fixed_end_actions(load, span.length, span.end_condition);
                for k in 0..4 {
                    q[k] += qf[k];
                }
            }
            let dofs = element_dofs(e);
            for k in 0..4 {
                f_global[dofs[k]] -= q[k];
            }
            fixed_end.push(Vector4::from(q));
        }

        let mut d_global = DVector::<f64>::zeros(n_dofs);
        if let Some(lu) = &self.lu {
            let f_free = DVector::from_fn(self.free_dofs.len(), |r, _| f_global[self.free_dofs[r]]);
            let d_free = lu
                .solve(&f_free)
                .ok_or_else(|| SolverError::singular("LU solve failed"))?;
            for (r, &dof) in self.free_dofs.iter().enumerate() {
                d_global[dof] = d_free[r];
            }
        }

        let end_forces = spans
            .iter()
            .enumerate()
            .map(|(e, span)| {
                let dofs = element_dofs(e);
                let d = Vector4::new(d_global[dofs[0]], d_global[dofs[1]], d_global[dofs[2]], d_global[dofs[3]]);
                stiffness(span.length, span.ei, span.end_condition) * d + fixed_end[e]
            })
            .collect();

        Ok(MemberState {
            end_forces,
            displacements: d_global,
        })
    }
}

/// Global DOF indices of element `e`: [v_i, θ_i, v_j, θ_j]
fn element_dofs(e: usize) -> [usize; 4] {
    [2 * e, 2 * e + 1, 2 * e + 2, 2 * e + 3]
}

/// Solved state of every member for one load vector
struct MemberState {
    /// `[V_i, M_i, V_j, M_j]` per member
    end_forces: Vec<Vector4<f64>>,
    displacements: DVector<f64>,
}

impl MemberState {
    /// (shear, moment) at local `x` of member `e`; sagging moment positive
    fn internal_forces(&self, e: usize, x: f64, loads: &[MemberLoad]) -> (f64, f64) {
        let q = &self.end_forces[e];
        let (mut v, mut m) = (q[0], -q[1] + q[0] * x);
        for load in loads {
            let (force, moment) = load.left_of(x);
            v -= force;
            m -= moment;
        }
        (v, m)
    }

    fn reactions(&self, geometry: &GeometryModel) -> Vec<SupportReaction> {
        let mut reactions = vec![SupportReaction::default(); geometry.support_count()];
        for (e, q) in self.end_forces.iter().enumerate() {
            reactions[e].force += q[0];
            reactions[e].moment += q[1];
            reactions[e + 1].force += q[2];
            reactions[e + 1].moment += q[3];
        }
        for (reaction, support) in reactions.iter_mut().zip(geometry.supports()) {
            if !support.restraint.translation.is_restrained() {
                reaction.force = 0.0;
            }
            if !support.restraint.rotation.is_restrained() {
                reaction.moment = 0.0;
            }
        }
        reactions
    }

    /// Downward deflection at the given local stations of member `e`
    ///
    /// Integrates curvature M/EI twice on a refined grid and fixes the
    /// constant with the end translations.
    fn deflections(&self, geometry: &GeometryModel, e: usize, locals: &[f64], loads: &[MemberLoad]) -> Vec<f64> {
        let span = &geometry.spans()[e];
        let l = span.length;
        let n = DEFLECTION_SUBDIVISION * locals.len().max(2);
        let h = l / n as f64;

        let curvature: Vec<f64> = (0..=n)
            .map(|k| self.internal_forces(e, h * k as f64, loads).1 / span.ei)
            .collect();

        let mut slope = vec![0.0; n + 1];
        let mut shape = vec![0.0; n + 1];
        for k in 1..=n {
            slope[k] = slope[k - 1] + 0.5 * h * (curvature[k - 1] + curvature[k]);
            shape[k] = shape[k - 1] + 0.5 * h * (slope[k - 1] + slope[k]);
        }

        let v_i = self.displacements[2 * e];
        let v_j = self.displacements[2 * e + 2];
        let c = (v_j - v_i - shape[n]) / l;

        locals
            .iter()
            .map(|&x| {
                let pos = (x / h).clamp(0.0, n as f64);
                let k = (pos.floor() as usize).min(n - 1);
                let t = pos - k as f64;
                let f = shape[k] + t * (shape[k + 1] - shape[k]);
                -(v_i + c * x + f)
            })
            .collect()
    }
}

/// Translate a load case into per-member loads
fn member_loads(geometry: &GeometryModel, load_case: &LoadCase) -> Result<Vec<Vec<MemberLoad>>, SolverError> {
    let spans = geometry.spans();
    let mut loads = vec![Vec::new(); spans.len()];
    for (i, load) in load_case.loads.iter().enumerate() {
        let span = spans.get(load.span_index).ok_or_else(|| {
            SolverError::new(
                SolverErrorKind::InvalidLoad,
                format!("Load {} of '{}' references missing span {}", i, load_case.name, load.span_index),
            )
        })?;
        let tol = POSITION_TOLERANCE * span.length;
        if !load.magnitude.is_finite()
            || load.start < -tol
            || load.end > span.length + tol
            || load.start > load.end
        {
            return Err(SolverError::new(
                SolverErrorKind::InvalidLoad,
                format!(
                    "Load {} of '{}' on span {}: w={} over [{}, {}] outside span length {}",
                    i, load_case.name, load.span_index, load.magnitude, load.start, load.end, span.length
                ),
            ));
        }
        if load.magnitude != 0.0 && load.end > load.start {
            loads[load.span_index].push(MemberLoad::Uniform {
                w: load.magnitude,
                a: load.start.max(0.0),
                b: load.end.min(span.length),
            });
        }
    }
    Ok(loads)
}

impl StructuralSolver for BeamSolver {
    fn solve_static(&self, geometry: &GeometryModel, load_case: &LoadCase) -> Result<ResponseSeries, SolverError> {
        let stations = station_layout(geometry, self.station_step)?;
        let loads = member_loads(geometry, load_case)?;
        let assembly = Assembly::new(geometry)?;
        let state = assembly.member_forces(&loads)?;

        let mut series = ResponseSeries {
            x: Vec::with_capacity(stations.len()),
            shear: Vec::with_capacity(stations.len()),
            moment: Vec::with_capacity(stations.len()),
            deflection: Vec::with_capacity(stations.len()),
            reactions: state.reactions(geometry),
        };

        for e in 0..geometry.span_count() {
            let span_stations: Vec<&Station> = stations.iter().filter(|s| s.span == e).collect();
            let locals: Vec<f64> = span_stations.iter().map(|s| s.local).collect();
            let deflections = state.deflections(geometry, e, &locals, &loads[e]);
            for (station, deflection) in span_stations.iter().zip(deflections) {
                let (v, m) = state.internal_forces(e, station.local, &loads[e]);
                series.x.push(station.x);
                series.shear.push(v);
                series.moment.push(m);
                series.deflection.push(deflection);
            }
        }

        log::debug!(
            "Solved '{}' at {} stations",
            load_case.name,
            series.x.len()
        );
        Ok(series)
    }

    fn sweep_vehicle(&self, geometry: &GeometryModel, vehicle: &Vehicle, step: f64) -> Result<ResponseEnvelope, SolverError> {
        check_step(step, "sweep step")?;
        if vehicle.axle_weights.is_empty() || vehicle.axle_spacings.len() + 1 != vehicle.axle_weights.len() {
            return Err(SolverError::new(
                SolverErrorKind::InvalidLoad,
                format!(
                    "Vehicle has {} axles and {} spacings",
                    vehicle.axle_weights.len(),
                    vehicle.axle_spacings.len()
                ),
            ));
        }
        if vehicle.axle_weights.iter().any(|w| !w.is_finite())
            || vehicle.axle_spacings.iter().any(|s| !(s.is_finite() && *s > 0.0))
        {
            return Err(SolverError::new(
                SolverErrorKind::InvalidLoad,
                "Axle weights must be finite and spacings positive",
            ));
        }

        let stations = station_layout(geometry, self.station_step)?;
        let assembly = Assembly::new(geometry)?;
        let offsets = vehicle.axle_offsets();
        let total = geometry.total_length();
        let travel = total + vehicle.length();
        let positions = (travel / step + POSITION_TOLERANCE).floor() as usize;

        let n = stations.len();
        let mut envelope = ResponseEnvelope {
            x: stations.iter().map(|s| s.x).collect(),
            m_max: vec![f64::NEG_INFINITY; n],
            m_min: vec![f64::INFINITY; n],
            v_max: vec![f64::NEG_INFINITY; n],
            v_min: vec![f64::INFINITY; n],
        };

        for k in 0..=positions {
            let front = step * k as f64;
            let mut loads = vec![Vec::new(); geometry.span_count()];
            for (weight, offset) in vehicle.axle_weights.iter().zip(&offsets) {
                if let Some((span, local)) = geometry.span_at(front - offset) {
                    loads[span].push(MemberLoad::Point { p: *weight, a: local });
                }
            }

            let state = assembly.member_forces(&loads)?;
            for (i, station) in stations.iter().enumerate() {
                let (v, m) = state.internal_forces(station.span, station.local, &loads[station.span]);
                envelope.m_max[i] = envelope.m_max[i].max(m);
                envelope.m_min[i] = envelope.m_min[i].min(m);
                envelope.v_max[i] = envelope.v_max[i].max(v);
                envelope.v_min[i] = envelope.v_min[i].min(v);
            }
        }

        log::debug!(
            "Vehicle sweep: {} axles, {} positions, {} stations",
            vehicle.axle_count(),
            positions + 1,
            n
        );
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EndCondition, RestraintCategory, Span, Support};
    use crate::loads::LoadCaseBuilder;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EI: f64 = 2.0e5;

    fn beam(lengths: &[f64], supports: &[RestraintCategory], ec: EndCondition) -> GeometryModel {
        GeometryModel::new(
            lengths.iter().map(|&l| Span::new(l, EI, ec)).collect(),
            supports.iter().map(|&c| Support::new(c)).collect(),
        )
        .unwrap()
    }

    fn at(series_x: &[f64], x: f64) -> usize {
        series_x.iter().position(|&s| (s - x).abs() < 1e-9).unwrap()
    }

    #[test]
    fn test_station_layout() {
        let geometry = beam(&[10.0, 3.0], &[RestraintCategory::Hinged; 3], EndCondition::FixedFixed);
        let x = BeamSolver::new(2.0).stations(&geometry).unwrap();
        assert_eq!(x, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 11.5, 13.0]);
        assert!(x.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_simple_span_udl() {
        let w = 10.0;
        let l = 10.0;
        let geometry = beam(&[l], &[RestraintCategory::Hinged; 2], EndCondition::FixedFixed);
        let case = LoadCaseBuilder::new(&geometry).uniform("W", w).unwrap();
        let series = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap();

        let mid = at(&series.x, 5.0);
        assert_relative_eq!(series.moment[mid], w * l * l / 8.0, max_relative = 1e-9);
        assert_abs_diff_eq!(series.shear[mid], 0.0, epsilon = 1e-9);
        assert_relative_eq!(series.shear[0], w * l / 2.0, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[0].force, 50.0, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[1].force, 50.0, max_relative = 1e-9);
        assert_eq!(series.reactions[0].moment, 0.0);
        assert_relative_eq!(
            series.deflection[mid],
            5.0 * w * l.powi(4) / (384.0 * EI),
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_two_span_continuous_udl() {
        // Interior support moment -wL²/8, interior reaction 1.25wL
        let w = 20.0;
        let l = 12.0;
        let geometry = beam(&[l, l], &[RestraintCategory::Hinged; 3], EndCondition::FixedFixed);
        let case = LoadCaseBuilder::new(&geometry).uniform("W", w).unwrap();
        let series = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap();

        let support = at(&series.x, l);
        assert_relative_eq!(series.moment[support], -w * l * l / 8.0, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[1].force, 1.25 * w * l, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[0].force, 0.375 * w * l, max_relative = 1e-9);
        // Left-hand limit of shear at the interior support
        assert_relative_eq!(series.shear[support], -0.625 * w * l, max_relative = 1e-9);
        assert_abs_diff_eq!(series.deflection[support], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_fixed_supports() {
        let w = 6.0;
        let l = 8.0;
        let geometry = beam(&[l], &[RestraintCategory::Fixed; 2], EndCondition::FixedFixed);
        let case = LoadCaseBuilder::new(&geometry).uniform("W", w).unwrap();
        let series = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap();

        assert_relative_eq!(series.moment[0], -w * l * l / 12.0, max_relative = 1e-9);
        assert_relative_eq!(series.moment[at(&series.x, 4.0)], w * l * l / 24.0, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[0].moment, w * l * l / 12.0, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[1].moment, -w * l * l / 12.0, max_relative = 1e-9);
    }

    #[test]
    fn test_hinged_elements_behave_as_simple_spans() {
        // Two pinned-pinned elements over three hinged supports: no continuity
        let w = 10.0;
        let geometry = beam(&[10.0, 10.0], &[RestraintCategory::Hinged; 3], EndCondition::PinnedPinned);
        let case = LoadCaseBuilder::new(&geometry).uniform("W", w).unwrap();
        let series = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap();

        assert_abs_diff_eq!(series.moment[at(&series.x, 10.0)], 0.0, epsilon = 1e-9);
        assert_relative_eq!(series.moment[at(&series.x, 15.0)], 125.0, max_relative = 1e-9);
        assert_relative_eq!(series.reactions[1].force, 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_cantilever() {
        let w = 5.0;
        let l = 4.0;
        let geometry = beam(&[l], &[RestraintCategory::Fixed, RestraintCategory::Free], EndCondition::FixedFixed);
        let case = LoadCaseBuilder::new(&geometry).uniform("W", w).unwrap();
        let series = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap();

        assert_relative_eq!(series.moment[0], -w * l * l / 2.0, max_relative = 1e-9);
        assert_relative_eq!(
            *series.deflection.last().unwrap(),
            w * l.powi(4) / (8.0 * EI),
            max_relative = 1e-3
        );
        assert_eq!(series.reactions[1], SupportReaction::default());
    }

    #[test]
    fn test_unstable_geometry_is_singular() {
        let geometry = beam(&[10.0], &[RestraintCategory::Hinged, RestraintCategory::Free], EndCondition::FixedFixed);
        let case = LoadCaseBuilder::new(&geometry).uniform("W", 1.0).unwrap();
        let err = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap_err();
        assert_eq!(err.kind, SolverErrorKind::Singular);
    }

    #[test]
    fn test_invalid_step() {
        let geometry = beam(&[10.0], &[RestraintCategory::Hinged; 2], EndCondition::FixedFixed);
        let err = BeamSolver::new(0.0).stations(&geometry).unwrap_err();
        assert_eq!(err.kind, SolverErrorKind::InvalidStep);
    }

    #[test]
    fn test_load_outside_span() {
        let geometry = beam(&[10.0], &[RestraintCategory::Hinged; 2], EndCondition::FixedFixed);
        let case = LoadCase::new("bad").with_load(crate::loads::SpanLoad {
            span_index: 3,
            magnitude: 1.0,
            start: 0.0,
            end: 10.0,
        });
        let err = BeamSolver::new(0.5).solve_static(&geometry, &case).unwrap_err();
        assert_eq!(err.kind, SolverErrorKind::InvalidLoad);
    }

    #[test]
    fn test_single_axle_sweep_simple_span() {
        let p = 100.0;
        let l = 10.0;
        let geometry = beam(&[l], &[RestraintCategory::Hinged; 2], EndCondition::FixedFixed);
        let vehicle = Vehicle::new(vec![p], vec![]);
        let envelope = BeamSolver::new(0.5).sweep_vehicle(&geometry, &vehicle, 0.5).unwrap();

        let mid = at(&envelope.x, 5.0);
        assert_relative_eq!(envelope.m_max[mid], p * l / 4.0, max_relative = 1e-9);
        assert_abs_diff_eq!(envelope.m_min[mid], 0.0, epsilon = 1e-9);
        assert_relative_eq!(envelope.v_max[0], p, max_relative = 1e-9);
        assert!(envelope.v_min[mid] < 0.0);
    }

    #[test]
    fn test_weightless_axle_does_not_change_envelope() {
        let geometry = beam(&[15.0, 15.0], &[RestraintCategory::Hinged; 3], EndCondition::FixedFixed);
        let solver = BeamSolver::new(0.5);
        let single = solver.sweep_vehicle(&geometry, &Vehicle::new(vec![300.0], vec![]), 0.3).unwrap();
        let trailing = solver
            .sweep_vehicle(&geometry, &Vehicle::new(vec![300.0, 0.0], vec![1.2]), 0.3)
            .unwrap();

        assert_eq!(single.x, trailing.x);
        for i in 0..single.len() {
            assert_abs_diff_eq!(single.m_max[i], trailing.m_max[i], epsilon = 1e-9);
            assert_abs_diff_eq!(single.m_min[i], trailing.m_min[i], epsilon = 1e-9);
            assert_abs_diff_eq!(single.v_max[i], trailing.v_max[i], epsilon = 1e-9);
            assert_abs_diff_eq!(single.v_min[i], trailing.v_min[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tandem_sweep_continuous_beam() {
        let geometry = beam(&[15.0, 15.0], &[RestraintCategory::Hinged; 3], EndCondition::FixedFixed);
        let solver = BeamSolver::new(0.5);
        let single = solver.sweep_vehicle(&geometry, &Vehicle::new(vec![300.0], vec![]), 0.3).unwrap();
        let tandem = solver
            .sweep_vehicle(&geometry, &Vehicle::new(vec![300.0, 300.0], vec![1.2]), 0.3)
            .unwrap();

        let station = at(&tandem.x, 6.0);
        assert!(tandem.m_max[station] > single.m_max[station]);
        // Hogging over the interior support appears only under the moving load
        let support = at(&tandem.x, 15.0);
        assert!(tandem.m_min[support] < 0.0);
        assert_abs_diff_eq!(tandem.m_max[support], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sweep_rejects_bad_input() {
        let geometry = beam(&[10.0], &[RestraintCategory::Hinged; 2], EndCondition::FixedFixed);
        let solver = BeamSolver::new(0.5);
        let err = solver.sweep_vehicle(&geometry, &Vehicle::new(vec![], vec![]), 0.5).unwrap_err();
        assert_eq!(err.kind, SolverErrorKind::InvalidLoad);
        let err = solver
            .sweep_vehicle(&geometry, &Vehicle::new(vec![100.0], vec![]), -1.0)
            .unwrap_err();
        assert_eq!(err.kind, SolverErrorKind::InvalidStep);
    }
}
