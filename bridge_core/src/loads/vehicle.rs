//! Moving vehicle definition

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Axle train crossing the bridge.
///
/// `axle_weights[0]` is the front axle; `axle_spacings[i]` is the distance
/// between axle `i` and axle `i + 1`. The residual distributed load
/// (force per unit length) is not part of the moving train; it is applied
/// as the live-lane load case.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vehicle {
    pub axle_weights: Vec<f64>,
    pub axle_spacings: Vec<f64>,
    #[serde(default)]
    pub residual_load: f64,
}

impl Vehicle {
    pub fn new(axle_weights: Vec<f64>, axle_spacings: Vec<f64>) -> Self {
        Vehicle {
            axle_weights,
            axle_spacings,
            residual_load: 0.0,
        }
    }

    pub fn with_residual_load(mut self, residual_load: f64) -> Self {
        self.residual_load = residual_load;
        self
    }

    pub fn axle_count(&self) -> usize {
        self.axle_weights.len()
    }

    /// Distance from the front axle to the rear axle
    pub fn length(&self) -> f64 {
        self.axle_spacings.iter().sum()
    }

    /// Offsets of each axle behind the front axle
    pub fn axle_offsets(&self) -> Vec<f64> {
        let mut offsets = Vec::with_capacity(self.axle_weights.len());
        let mut offset = 0.0;
        offsets.push(offset);
        for spacing in &self.axle_spacings {
            offset += spacing;
            offsets.push(offset);
        }
        offsets
    }

    /// Validate axle train consistency
    pub fn validate(&self) -> CalcResult<()> {
        if self.axle_weights.is_empty() {
            return Err(CalcError::validation(
                "axle_weights",
                "empty",
                "Vehicle needs at least one axle",
            ));
        }
        if self.axle_spacings.len() + 1 != self.axle_weights.len() {
            return Err(CalcError::validation(
                "axle_spacings",
                self.axle_spacings.len().to_string(),
                format!(
                    "Expected {} spacings for {} axles",
                    self.axle_weights.len() - 1,
                    self.axle_weights.len()
                ),
            ));
        }
        if let Some(w) = self.axle_weights.iter().find(|w| !w.is_finite()) {
            return Err(CalcError::validation("axle_weights", w.to_string(), "Axle weight must be finite"));
        }
        if let Some(s) = self.axle_spacings.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
            return Err(CalcError::validation("axle_spacings", s.to_string(), "Axle spacing must be positive"));
        }
        if !self.residual_load.is_finite() {
            return Err(CalcError::validation(
                "residual_load",
                self.residual_load.to_string(),
                "Residual load must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axle_offsets() {
        let vehicle = Vehicle::new(vec![100.0, 150.0, 150.0], vec![3.0, 1.5]);
        assert_eq!(vehicle.axle_offsets(), vec![0.0, 3.0, 4.5]);
        assert_eq!(vehicle.length(), 4.5);
        assert!(vehicle.validate().is_ok());
    }

    #[test]
    fn test_spacing_count_mismatch() {
        let vehicle = Vehicle::new(vec![100.0, 100.0], vec![]);
        assert_eq!(vehicle.validate().unwrap_err().error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_non_positive_spacing() {
        let vehicle = Vehicle::new(vec![100.0, 100.0], vec![0.0]);
        assert!(vehicle.validate().is_err());
    }
}
