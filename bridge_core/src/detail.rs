//! Per-station detail tables
//!
//! Side-by-side shear and moment for each named load case together with the
//! vehicle extremes, plus support reactions per load case.

use serde::{Deserialize, Serialize};

use crate::envelope::{same_grid, ResponseEnvelope};
use crate::errors::{CalcError, CalcResult};
use crate::results::{LoadCaseResults, ResponseSeries};

/// One station of a shear or moment table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub x: f64,
    pub dead: f64,
    pub perm: f64,
    pub live: f64,
    pub vehicle_max: f64,
    pub vehicle_min: f64,
}

/// Unfactored reactions at one support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionRow {
    pub support_index: usize,
    pub x: f64,
    pub dead: f64,
    pub perm: f64,
    pub live: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailTables {
    /// Shear (kN)
    pub shear: Vec<DetailRow>,
    /// Bending moment (kNm)
    pub moment: Vec<DetailRow>,
    /// Vertical reactions (kN)
    pub reactions: Vec<ReactionRow>,
}

impl DetailTables {
    /// Assemble the tables.
    ///
    /// `vehicle` must be sampled on the load-case grid; a `GridMismatch` is
    /// returned otherwise. `support_positions` gives the x of each reaction.
    pub fn build(
        grid: &[f64],
        results: &LoadCaseResults,
        vehicle: &ResponseEnvelope,
        support_positions: &[f64],
    ) -> CalcResult<Self> {
        for series in [&results.dead, &results.perm, &results.live] {
            series.validate()?;
            if !same_grid(grid, &series.x) {
                return Err(CalcError::grid_mismatch(
                    grid.len(),
                    series.len(),
                    "Load case series not sampled on the detail grid",
                ));
            }
        }
        vehicle.validate()?;
        if !vehicle.same_grid(grid) {
            return Err(CalcError::grid_mismatch(
                grid.len(),
                vehicle.len(),
                "Vehicle envelope not sampled on the load case grid",
            ));
        }

        let reactions = support_positions
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let force = |s: &ResponseSeries| s.reactions.get(i).map_or(0.0, |r| r.force);
                ReactionRow {
                    support_index: i,
                    x,
                    dead: force(&results.dead),
                    perm: force(&results.perm),
                    live: force(&results.live),
                }
            })
            .collect();

        Ok(DetailTables {
            shear: rows(grid, results, shear_of, &vehicle.v_max, &vehicle.v_min),
            moment: rows(grid, results, moment_of, &vehicle.m_max, &vehicle.m_min),
            reactions,
        })
    }
}

fn shear_of(series: &ResponseSeries) -> &[f64] {
    &series.shear
}

fn moment_of(series: &ResponseSeries) -> &[f64] {
    &series.moment
}

fn rows(
    grid: &[f64],
    results: &LoadCaseResults,
    pick: fn(&ResponseSeries) -> &[f64],
    vehicle_max: &[f64],
    vehicle_min: &[f64],
) -> Vec<DetailRow> {
    grid.iter()
        .enumerate()
        .map(|(i, &x)| DetailRow {
            x,
            dead: pick(&results.dead)[i],
            perm: pick(&results.perm)[i],
            live: pick(&results.live)[i],
            vehicle_max: vehicle_max[i],
            vehicle_min: vehicle_min[i],
        })
        .collect()
}
