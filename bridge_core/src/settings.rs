//! Analysis settings
//!
//! Every field has a default, so an input file may omit the whole
//! `settings` block or any part of it.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How the factored live-lane load builds the static envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LiveLoading {
    /// Live load on every span in one factored case
    #[default]
    Full,
    /// Live load applied span by span where it worsens each extreme
    Patterned,
}

/// Solver sampling and load-arrangement settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Maximum spacing of output stations (m)
    pub station_step: f64,
    /// Vehicle advance per sweep position (m)
    pub sweep_step: f64,
    pub live_loading: LiveLoading,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            station_step: 0.5,
            sweep_step: 0.5,
            live_loading: LiveLoading::Full,
        }
    }
}

impl AnalysisSettings {
    pub fn with_station_step(mut self, step: f64) -> Self {
        self.station_step = step;
        self
    }

    pub fn with_sweep_step(mut self, step: f64) -> Self {
        self.sweep_step = step;
        self
    }

    pub fn with_live_loading(mut self, live_loading: LiveLoading) -> Self {
        self.live_loading = live_loading;
        self
    }

    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("settings.station_step", self.station_step),
            ("settings.sweep_step", self.sweep_step),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::configuration(
                    field,
                    value.to_string(),
                    "Step must be a positive finite length",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_partial_json() {
        let settings: AnalysisSettings = serde_json::from_str(r#"{"sweep_step": 0.25}"#).unwrap();
        assert_eq!(settings.station_step, 0.5);
        assert_eq!(settings.sweep_step, 0.25);
        assert_eq!(settings.live_loading, LiveLoading::Full);

        let settings: AnalysisSettings = serde_json::from_str(r#"{"live_loading": "Patterned"}"#).unwrap();
        assert_eq!(settings.live_loading, LiveLoading::Patterned);
    }

    #[test]
    fn test_rejects_non_positive_steps() {
        let err = AnalysisSettings::default().with_station_step(0.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(AnalysisSettings::default().with_sweep_step(f64::NAN).validate().is_err());
        assert!(AnalysisSettings::default().validate().is_ok());
    }
}
