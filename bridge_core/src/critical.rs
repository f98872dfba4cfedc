//! # Per-Span Critical Values
//!
//! Restricts a governing envelope to each span's closed coordinate range
//! `[a_i, b_i]` and reduces it to scalar extrema. A station on an interior
//! support lies in both adjacent ranges and counts for both spans.

use serde::{Deserialize, Serialize};

use crate::envelope::ResponseEnvelope;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::GeometryModel;

/// Relative tolerance when testing a station against span bounds
const BOUND_TOLERANCE: f64 = 1e-9;

/// Extreme moments and shears over one span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValue {
    /// Span index (0-based)
    pub span_index: usize,
    /// Left bound of the span (m)
    pub start: f64,
    /// Right bound of the span (m)
    pub end: f64,
    pub m_max: f64,
    pub m_min: f64,
    pub v_max: f64,
    pub v_min: f64,
}

impl CriticalValue {
    /// One-line summary, values rounded to 2 decimals
    pub fn summary(&self) -> String {
        format!(
            "Span {} [{:.2}, {:.2}] m: M max {:.2} / min {:.2} kNm, V max {:.2} / min {:.2} kN",
            self.span_index + 1,
            self.start,
            self.end,
            self.m_max,
            self.m_min,
            self.v_max,
            self.v_min
        )
    }
}

/// Reduce `envelope` to one [`CriticalValue`] per span of `geometry`.
///
/// Fails with `EmptySubset` when a span range contains no station, which
/// happens when the sampling step is coarser than the shortest span.
pub fn extract_critical(envelope: &ResponseEnvelope, geometry: &GeometryModel) -> CalcResult<Vec<CriticalValue>> {
    envelope.validate()?;

    geometry
        .span_bounds()
        .into_iter()
        .enumerate()
        .map(|(span_index, (start, end))| {
            let tol = BOUND_TOLERANCE * end.abs().max(1.0);
            let indices: Vec<usize> = envelope
                .x
                .iter()
                .enumerate()
                .filter(|&(_, &x)| x >= start - tol && x <= end + tol)
                .map(|(i, _)| i)
                .collect();

            if indices.is_empty() {
                return Err(CalcError::EmptySubset {
                    span_index,
                    start,
                    end,
                });
            }

            let fold = |series: &[f64], init: f64, pick: fn(f64, f64) -> f64| {
                indices.iter().map(|&i| series[i]).fold(init, pick)
            };

            Ok(CriticalValue {
                span_index,
                start,
                end,
                m_max: fold(&envelope.m_max, f64::NEG_INFINITY, f64::max),
                m_min: fold(&envelope.m_min, f64::INFINITY, f64::min),
                v_max: fold(&envelope.v_max, f64::NEG_INFINITY, f64::max),
                v_min: fold(&envelope.v_min, f64::INFINITY, f64::min),
            })
        })
        .collect()
}
