//! # Response Envelopes
//!
//! A [`ResponseEnvelope`] stores, for every station of a grid, the extreme
//! bending moments and shears found over one or more load scenarios.
//!
//! Envelopes are merged with [`augment`]: pointwise max of maxima and min of
//! minima. The operation is commutative and associative, so folding any set
//! of envelopes into [`zero_like`] in any order yields the same governing
//! envelope.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::envelope::{augment, zero_like, ResponseEnvelope};
//!
//! let grid = vec![0.0, 5.0, 10.0];
//! let a = ResponseEnvelope::new(grid.clone(), vec![0.0, 50.0, 0.0], vec![0.0; 3], vec![10.0, 0.0, 0.0], vec![0.0, 0.0, -10.0])?;
//! let b = ResponseEnvelope::new(grid, vec![0.0, 80.0, 0.0], vec![0.0, -5.0, 0.0], vec![5.0; 3], vec![-5.0; 3])?;
//!
//! let mut governing = zero_like(&a);
//! governing.augment(&a)?;
//! governing.augment(&b)?;
//! assert_eq!(governing.m_max[1], 80.0);
//! assert_eq!(governing.v_min[2], -10.0);
//! # Ok::<(), bridge_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::GeometryModel;
use crate::loads::{LoadCase, LoadCaseBuilder, PartialFactorPair};
use crate::results::ResponseSeries;
use crate::solver::StructuralSolver;

/// Relative tolerance when comparing station coordinates of two grids
const GRID_TOLERANCE: f64 = 1e-9;

/// Per-station extreme moments and shears on an ordered grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Stations along the beam, strictly increasing
    pub x: Vec<f64>,
    pub m_max: Vec<f64>,
    pub m_min: Vec<f64>,
    pub v_max: Vec<f64>,
    pub v_min: Vec<f64>,
}

impl ResponseEnvelope {
    /// Build an envelope, checking alignment and grid ordering
    pub fn new(x: Vec<f64>, m_max: Vec<f64>, m_min: Vec<f64>, v_max: Vec<f64>, v_min: Vec<f64>) -> CalcResult<Self> {
        let envelope = ResponseEnvelope {
            x,
            m_max,
            m_min,
            v_max,
            v_min,
        };
        envelope.validate()?;
        Ok(envelope)
    }

    /// Envelope of a single static response (max = min at every station)
    pub fn from_series(series: &ResponseSeries) -> CalcResult<Self> {
        series.validate()?;
        Self::new(
            series.x.clone(),
            series.moment.clone(),
            series.moment.clone(),
            series.shear.clone(),
            series.shear.clone(),
        )
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Check series alignment and strictly increasing stations
    pub fn validate(&self) -> CalcResult<()> {
        let n = self.x.len();
        for (name, len) in [
            ("m_max", self.m_max.len()),
            ("m_min", self.m_min.len()),
            ("v_max", self.v_max.len()),
            ("v_min", self.v_min.len()),
        ] {
            if len != n {
                return Err(CalcError::grid_mismatch(
                    n,
                    len,
                    format!("{} not aligned with station grid", name),
                ));
            }
        }
        if let Some(i) = self.x.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(CalcError::validation(
                "x",
                format!("x[{}]={}, x[{}]={}", i, self.x[i], i + 1, self.x[i + 1]),
                "Envelope stations must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Whether `other` is sampled on the same grid as `self`
    pub fn same_grid(&self, other: &[f64]) -> bool {
        same_grid(&self.x, other)
    }

    /// Fold `other` into `self` (pointwise max of maxima, min of minima)
    ///
    /// Fails with `GridMismatch` when the grids differ; no resampling is done.
    pub fn augment(&mut self, other: &ResponseEnvelope) -> CalcResult<()> {
        if !self.same_grid(&other.x) {
            return Err(CalcError::grid_mismatch(
                self.len(),
                other.len(),
                "Envelopes must share an identical station grid",
            ));
        }
        for i in 0..self.len() {
            self.m_max[i] = self.m_max[i].max(other.m_max[i]);
            self.m_min[i] = self.m_min[i].min(other.m_min[i]);
            self.v_max[i] = self.v_max[i].max(other.v_max[i]);
            self.v_min[i] = self.v_min[i].min(other.v_min[i]);
        }
        Ok(())
    }
}

/// Compare two station grids within a relative tolerance
pub fn same_grid(a: &[f64], b: &[f64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let scale = a
        .iter()
        .chain(b)
        .fold(1.0_f64, |acc, x| acc.max(x.abs()));
    a.iter()
        .zip(b)
        .all(|(p, q)| (p - q).abs() <= GRID_TOLERANCE * scale)
}

/// Envelope on the same grid as `reference` with every extreme set to zero
pub fn zero_like(reference: &ResponseEnvelope) -> ResponseEnvelope {
    let n = reference.len();
    ResponseEnvelope {
        x: reference.x.clone(),
        m_max: vec![0.0; n],
        m_min: vec![0.0; n],
        v_max: vec![0.0; n],
        v_min: vec![0.0; n],
    }
}

/// Non-mutating form of [`ResponseEnvelope::augment`]
pub fn augment(accumulated: &ResponseEnvelope, new: &ResponseEnvelope) -> CalcResult<ResponseEnvelope> {
    let mut merged = accumulated.clone();
    merged.augment(new)?;
    Ok(merged)
}

/// Static envelope with live load patterned span by span.
///
/// The permanent case is applied everywhere with factor 1.0. The live
/// intensity of each span is solved on its own and added at every station
/// with whichever partial factor (favorable or unfavorable) worsens the
/// extreme being built.
pub fn patterned_envelope<S: StructuralSolver + ?Sized>(
    solver: &S,
    geometry: &GeometryModel,
    permanent: &LoadCase,
    live: &LoadCase,
    live_factors: PartialFactorPair,
) -> CalcResult<ResponseEnvelope> {
    let base = solver.solve_static(geometry, permanent)?;
    let mut envelope = ResponseEnvelope::from_series(&base)?;
    let builder = LoadCaseBuilder::new(geometry);

    for load in &live.loads {
        let single = builder.single_span(
            format!("{}[span {}]", live.name, load.span_index),
            load.span_index,
            load.magnitude,
        )?;
        let response = solver.solve_static(geometry, &single)?;
        response.validate()?;
        if !envelope.same_grid(&response.x) {
            return Err(CalcError::grid_mismatch(
                envelope.len(),
                response.len(),
                "Pattern response sampled on a different grid",
            ));
        }
        for i in 0..envelope.len() {
            envelope.m_max[i] += live_factors.max_of(response.moment[i]);
            envelope.m_min[i] += live_factors.min_of(response.moment[i]);
            envelope.v_max[i] += live_factors.max_of(response.shear[i]);
            envelope.v_min[i] += live_factors.min_of(response.shear[i]);
        }
    }

    log::debug!("Patterned envelope over {} live spans", live.loads.len());
    Ok(envelope)
}
