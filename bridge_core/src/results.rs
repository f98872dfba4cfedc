//! # Response Series and Per-Load-Case Results
//!
//! [`ResponseSeries`] is what the structural solver returns for one static
//! load case. [`LoadCaseResults`] holds one series per named load case
//! (DEAD, PERM, LIVE), each solved unfactored, for decomposed reporting.
//! These results never feed the governing envelope.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::GeometryModel;
use crate::loads::{LoadCase, LoadCaseName};
use crate::solver::StructuralSolver;

/// Reaction at one support
///
/// Force positive upward; moment counter-clockwise positive. Components
/// the support does not restrain are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SupportReaction {
    pub force: f64,
    pub moment: f64,
}

/// Static response of the beam to one load case
///
/// `shear`, `moment` and `deflection` are aligned with `x`.
/// `reactions` has one entry per support.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseSeries {
    pub x: Vec<f64>,
    pub shear: Vec<f64>,
    pub moment: Vec<f64>,
    pub deflection: Vec<f64>,
    pub reactions: Vec<SupportReaction>,
}

impl ResponseSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Check that every per-station series is aligned with `x`
    pub fn validate(&self) -> CalcResult<()> {
        let n = self.x.len();
        for (name, len) in [
            ("shear", self.shear.len()),
            ("moment", self.moment.len()),
            ("deflection", self.deflection.len()),
        ] {
            if len != n {
                return Err(CalcError::grid_mismatch(
                    n,
                    len,
                    format!("{} series not aligned with station grid", name),
                ));
            }
        }
        Ok(())
    }
}

/// Unfactored response series for each named load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseResults {
    pub dead: ResponseSeries,
    pub perm: ResponseSeries,
    pub live: ResponseSeries,
}

impl LoadCaseResults {
    pub fn get(&self, name: LoadCaseName) -> &ResponseSeries {
        match name {
            LoadCaseName::Dead => &self.dead,
            LoadCaseName::Perm => &self.perm,
            LoadCaseName::Live => &self.live,
        }
    }

    /// Station grid shared by all three series
    pub fn grid(&self) -> &[f64] {
        &self.dead.x
    }
}

/// Named load cases fed to [`accumulate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLoadCases {
    pub dead: LoadCase,
    pub perm: LoadCase,
    pub live: LoadCase,
}

impl NamedLoadCases {
    pub fn get(&self, name: LoadCaseName) -> &LoadCase {
        match name {
            LoadCaseName::Dead => &self.dead,
            LoadCaseName::Perm => &self.perm,
            LoadCaseName::Live => &self.live,
        }
    }
}

/// Solve each named load case independently with factor 1.0.
///
/// The three solves are independent of each other; any solver error aborts
/// the whole accumulation.
pub fn accumulate<S: StructuralSolver + ?Sized>(
    solver: &S,
    geometry: &GeometryModel,
    cases: &NamedLoadCases,
) -> CalcResult<LoadCaseResults> {
    let solve = |name: LoadCaseName| -> CalcResult<ResponseSeries> {
        log::debug!("Solving load case {}", name);
        let series = solver.solve_static(geometry, cases.get(name))?;
        series.validate()?;
        Ok(series)
    };

    let dead = solve(LoadCaseName::Dead)?;
    let perm = solve(LoadCaseName::Perm)?;
    let live = solve(LoadCaseName::Live)?;

    for (name, series) in [(LoadCaseName::Perm, &perm), (LoadCaseName::Live, &live)] {
        if series.x != dead.x {
            return Err(CalcError::grid_mismatch(
                dead.len(),
                series.len(),
                format!("{} series sampled on a different grid than DEAD", name),
            ));
        }
    }

    Ok(LoadCaseResults { dead, perm, live })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EndCondition, RestraintCategory, Span, Support};
    use crate::loads::LoadCaseBuilder;
    use crate::solver::BeamSolver;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_alignment() {
        let series = ResponseSeries {
            x: vec![0.0, 1.0],
            shear: vec![0.0, 1.0],
            moment: vec![0.0],
            deflection: vec![0.0, 0.0],
            reactions: vec![],
        };
        assert_eq!(series.validate().unwrap_err().error_code(), "GRID_MISMATCH");
    }

    #[test]
    fn test_accumulate_named_cases() {
        let geometry = GeometryModel::new(
            vec![Span::new(10.0, 1.0e5, EndCondition::FixedFixed); 2],
            vec![Support::new(RestraintCategory::Hinged); 3],
        )
        .unwrap();
        let builder = LoadCaseBuilder::new(&geometry);
        let cases = NamedLoadCases {
            dead: builder.per_span("DEAD", &[10.0, 10.0]).unwrap(),
            perm: builder.per_span("PERM", &[5.0, 5.0]).unwrap(),
            live: builder.uniform("LIVE", 2.0).unwrap(),
        };

        let results = accumulate(&BeamSolver::new(0.5), &geometry, &cases).unwrap();
        assert_eq!(results.grid().len(), 41);

        // Total reaction equals total applied load for every case
        for name in LoadCaseName::ALL {
            let total: f64 = results.get(name).reactions.iter().map(|r| r.force).sum();
            assert_relative_eq!(total, cases.get(name).total_force(), max_relative = 1e-9);
        }
    }
}
