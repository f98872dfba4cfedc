//! Eurocode Load Model 1 (LM1) traffic loading
//!
//! The carriageway is divided into notional lanes of 3 m. Each of the first
//! three lanes carries a distributed lane load and a tandem axle load; any
//! width left over carries the remaining-area pressure. Lanes beyond the
//! third add nothing.
//!
//! | Lane | Distributed | Axle  |
//! |------|-------------|-------|
//! | 1    | 27 kN/m     | 300 kN|
//! | 2    | 7.5 kN/m    | 200 kN|
//! | 3    | 7.5 kN/m    | 100 kN|
//! | rest | 2.5 kN/m²   | -     |
//!
//! Units are kN and m throughout.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::Vehicle;

/// Notional lane width (m)
pub const LANE_WIDTH: f64 = 3.0;

/// Distributed lane loads for lanes 1..=3 (kN/m)
pub const LANE_DISTRIBUTED: [f64; 3] = [27.0, 7.5, 7.5];

/// Axle loads for lanes 1..=3 (kN per axle)
pub const LANE_AXLE: [f64; 3] = [300.0, 200.0, 100.0];

/// Remaining-area pressure (kN/m²)
pub const REMAINING_AREA: f64 = 2.5;

/// Tandem axle spacing (m)
pub const AXLE_SPACING: f64 = 1.2;

/// Traffic load derived from the carriageway width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficLoad {
    /// Number of full notional lanes
    pub lanes: u32,
    /// Summed distributed load (kN/m)
    pub distributed: f64,
    /// Summed axle load, applied to both front and rear axle (kN)
    pub axle_load: f64,
    /// Spacing between front and rear axle (m)
    pub axle_spacing: f64,
}

impl TrafficLoad {
    /// Two-axle vehicle (front/rear each carrying the summed axle load)
    /// with the distributed load as residual
    pub fn vehicle(&self) -> Vehicle {
        Vehicle {
            axle_weights: vec![self.axle_load, self.axle_load],
            axle_spacings: vec![self.axle_spacing],
            residual_load: self.distributed,
        }
    }
}

/// Derive LM1 loads from the carriageway width.
///
/// The remaining width is `width - 3·lanes` in the one- and two-lane tiers and
/// `width - 9` from three lanes upward, so extra lanes only feed the
/// remaining-area term.
///
/// # Errors
///
/// `CalcError::Configuration` when the width holds less than one lane.
pub fn derive_traffic_load(carriageway_width: f64) -> CalcResult<TrafficLoad> {
    if !carriageway_width.is_finite() {
        return Err(CalcError::configuration(
            "carriageway_width",
            carriageway_width.to_string(),
            "Carriageway width must be finite",
        ));
    }

    let lanes = (carriageway_width / LANE_WIDTH).floor();
    if lanes < 1.0 {
        return Err(CalcError::configuration(
            "carriageway_width",
            carriageway_width.to_string(),
            "Carriageway too narrow to allow vehicle passage; width must be at least 3.00 m",
        ));
    }

    let (loaded_lanes, remaining_width) = if lanes < 3.0 {
        (lanes as usize, carriageway_width - LANE_WIDTH * lanes)
    } else {
        (3, carriageway_width - 3.0 * LANE_WIDTH)
    };

    let distributed = LANE_DISTRIBUTED[..loaded_lanes].iter().sum::<f64>()
        + REMAINING_AREA * remaining_width;
    let axle_load = LANE_AXLE[..loaded_lanes].iter().sum::<f64>();

    log::debug!(
        "LM1: width={} lanes={} distributed={} axle={}",
        carriageway_width,
        lanes,
        distributed,
        axle_load
    );

    Ok(TrafficLoad {
        lanes: lanes as u32,
        distributed,
        axle_load,
        axle_spacing: AXLE_SPACING,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_lane() {
        let load = derive_traffic_load(3.0).unwrap();
        assert_eq!(load.lanes, 1);
        assert_abs_diff_eq!(load.distributed, 27.0, epsilon = 1e-12);
        assert_abs_diff_eq!(load.axle_load, 300.0, epsilon = 1e-12);
        assert_abs_diff_eq!(load.axle_spacing, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_single_lane_with_remaining_width() {
        // 5.0 m: one lane, 2.0 m remaining
        let load = derive_traffic_load(5.0).unwrap();
        assert_eq!(load.lanes, 1);
        assert_abs_diff_eq!(load.distributed, 27.0 + 2.5 * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_lanes() {
        let load = derive_traffic_load(6.0).unwrap();
        assert_eq!(load.lanes, 2);
        assert_abs_diff_eq!(load.distributed, 34.5, epsilon = 1e-12);
        assert_abs_diff_eq!(load.axle_load, 500.0, epsilon = 1e-12);
    }

    #[test]
    fn test_three_lane_tier() {
        let load = derive_traffic_load(10.0).unwrap();
        assert_eq!(load.lanes, 3);
        assert_abs_diff_eq!(load.distributed, 44.5, epsilon = 1e-12);
        assert_abs_diff_eq!(load.axle_load, 600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lanes_beyond_three_are_capped() {
        // 13.0 m: four notional lanes, only three loaded, remaining = 13 - 9
        let load = derive_traffic_load(13.0).unwrap();
        assert_eq!(load.lanes, 4);
        assert_abs_diff_eq!(load.distributed, 42.0 + 2.5 * 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(load.axle_load, 600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_too_narrow() {
        let err = derive_traffic_load(2.0).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_vehicle_is_two_equal_axles() {
        let vehicle = derive_traffic_load(6.0).unwrap().vehicle();
        assert_eq!(vehicle.axle_weights, vec![500.0, 500.0]);
        assert_eq!(vehicle.axle_spacings, vec![1.2]);
        assert_abs_diff_eq!(vehicle.residual_load, 34.5, epsilon = 1e-12);
    }
}
