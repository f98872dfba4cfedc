//! Partial safety factors and linear load-case combination
//!
//! Dead and permanent loads are folded into one factored static case with
//! their unfavorable factors; the vehicle axle train is scaled by its own
//! unfavorable factor. Favorable factors are 1.0 for permanent actions and
//! 0.0 for traffic.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadCase, SpanLoad, Vehicle};

/// Favorable/unfavorable partial factors for one action type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialFactorPair {
    pub favorable: f64,
    pub unfavorable: f64,
}

impl PartialFactorPair {
    pub fn new(favorable: f64, unfavorable: f64) -> Self {
        PartialFactorPair {
            favorable,
            unfavorable,
        }
    }

    /// Permanent action: favorable factor fixed at 1.0
    pub fn permanent(unfavorable: f64) -> Self {
        Self::new(1.0, unfavorable)
    }

    /// Variable (traffic) action: favorable factor fixed at 0.0
    pub fn variable(unfavorable: f64) -> Self {
        Self::new(0.0, unfavorable)
    }

    /// Validate that both factors are finite and non-negative
    pub fn validate(&self, field: &str) -> CalcResult<()> {
        for (name, value) in [("favorable", self.favorable), ("unfavorable", self.unfavorable)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CalcError::validation(
                    format!("{}.{}", field, name),
                    value.to_string(),
                    "Partial factor must be a non-negative number",
                ));
            }
        }
        Ok(())
    }

    /// Larger of the two factored responses
    pub fn max_of(&self, response: f64) -> f64 {
        (self.favorable * response).max(self.unfavorable * response)
    }

    /// Smaller of the two factored responses
    pub fn min_of(&self, response: f64) -> f64 {
        (self.favorable * response).min(self.unfavorable * response)
    }
}

/// Linearly combine two load cases span by span.
///
/// Each descriptor gets `a.magnitude * factor_a + b.magnitude * factor_b`;
/// span index and offsets come from `a`. Both cases must reference the same
/// span indices in the same order.
pub fn combine(a: &LoadCase, b: &LoadCase, factor_a: f64, factor_b: f64) -> CalcResult<LoadCase> {
    if a.loads.len() != b.loads.len() || !a.span_indices().eq(b.span_indices()) {
        return Err(CalcError::validation(
            format!("{}+{}", a.name, b.name),
            format!("{} vs {} descriptors", a.loads.len(), b.loads.len()),
            "Load cases must reference identical span indices in identical order",
        ));
    }

    let loads = a
        .loads
        .iter()
        .zip(&b.loads)
        .map(|(la, lb)| SpanLoad {
            magnitude: la.magnitude * factor_a + lb.magnitude * factor_b,
            ..*la
        })
        .collect();

    Ok(LoadCase {
        name: format!("{}·{} + {}·{}", factor_a, a.name, factor_b, b.name),
        loads,
    })
}

/// Scale a vehicle by the unfavorable factor of its partial factor pair.
///
/// Axle weights and the residual distributed load are both scaled.
pub fn factor_vehicle(vehicle: &Vehicle, factors: PartialFactorPair) -> Vehicle {
    Vehicle {
        axle_weights: vehicle
            .axle_weights
            .iter()
            .map(|w| w * factors.unfavorable)
            .collect(),
        axle_spacings: vehicle.axle_spacings.clone(),
        residual_load: vehicle.residual_load * factors.unfavorable,
    }
}
