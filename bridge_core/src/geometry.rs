//! # Beam Geometry
//!
//! Immutable description of a multi-span bridge beam: span lengths, flexural
//! stiffness, element end conditions and support restraints.
//!
//! ## Notation
//!
//! - N spans creates N+1 supports
//! - Supports are numbered 0 to N (left to right)
//! - Spans are numbered 0 to N-1 (left to right)
//!
//! ```text
//! Supp 0    Supp 1    Supp 2    Supp 3
//!   |--------|---------|---------|
//!    Span 0    Span 1    Span 2
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::geometry::{EndCondition, GeometryModel, RestraintCategory, Span, Support};
//!
//! let geometry = GeometryModel::new(
//!     vec![
//!         Span::new(30.0, 7.0e7, EndCondition::FixedFixed),
//!         Span::new(30.0, 7.0e7, EndCondition::FixedFixed),
//!     ],
//!     vec![
//!         Support::new(RestraintCategory::Hinged),
//!         Support::new(RestraintCategory::Hinged),
//!         Support::new(RestraintCategory::Hinged),
//!     ],
//! )?;
//! assert_eq!(geometry.total_length(), 60.0);
//! # Ok::<(), bridge_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// =============================================================================
// END CONDITION
// =============================================================================

/// Element end condition (moment continuity at each end of a span element)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EndCondition {
    /// Moment-continuous at both ends
    #[default]
    FixedFixed,
    /// Moment release at the right end
    FixedPinned,
    /// Moment release at the left end
    PinnedFixed,
    /// Moment release at both ends
    PinnedPinned,
}

impl EndCondition {
    /// All end conditions for UI selection
    pub const ALL: [EndCondition; 4] = [
        EndCondition::FixedFixed,
        EndCondition::FixedPinned,
        EndCondition::PinnedFixed,
        EndCondition::PinnedPinned,
    ];

    /// Numeric element-type code expected by matrix solvers
    pub fn code(&self) -> u8 {
        match self {
            EndCondition::FixedFixed => 1,
            EndCondition::FixedPinned => 2,
            EndCondition::PinnedFixed => 3,
            EndCondition::PinnedPinned => 4,
        }
    }

    /// Moment releases as (start released, end released)
    pub fn moment_releases(&self) -> (bool, bool) {
        match self {
            EndCondition::FixedFixed => (false, false),
            EndCondition::FixedPinned => (false, true),
            EndCondition::PinnedFixed => (true, false),
            EndCondition::PinnedPinned => (true, true),
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            EndCondition::FixedFixed => "Fixed-Fixed",
            EndCondition::FixedPinned => "Fixed-Pinned",
            EndCondition::PinnedFixed => "Pinned-Fixed",
            EndCondition::PinnedPinned => "Pinned-Pinned",
        }
    }
}

impl std::fmt::Display for EndCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// SUPPORT RESTRAINT
// =============================================================================

/// State of a single restrained degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestraintState {
    Restrained,
    Free,
}

impl RestraintState {
    pub fn is_restrained(&self) -> bool {
        matches!(self, RestraintState::Restrained)
    }
}

/// Restraint pair at a support: (translation, rotation)
///
/// `translation` is the vertical displacement restraint, `rotation` the
/// rotational restraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restraint {
    pub translation: RestraintState,
    pub rotation: RestraintState,
}

/// Support restraint category as selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RestraintCategory {
    /// Restrains translation and rotation
    Fixed,
    /// Restrains translation only
    #[default]
    Hinged,
    /// No restraint
    Free,
}

impl RestraintCategory {
    /// All categories for UI selection
    pub const ALL: [RestraintCategory; 3] = [
        RestraintCategory::Fixed,
        RestraintCategory::Hinged,
        RestraintCategory::Free,
    ];

    /// Fixed mapping from category to restraint pair
    pub fn restraint(&self) -> Restraint {
        use RestraintState::{Free, Restrained};
        match self {
            RestraintCategory::Fixed => Restraint { translation: Restrained, rotation: Restrained },
            RestraintCategory::Hinged => Restraint { translation: Restrained, rotation: Free },
            RestraintCategory::Free => Restraint { translation: Free, rotation: Free },
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RestraintCategory::Fixed => "Fixed",
            RestraintCategory::Hinged => "Hinged",
            RestraintCategory::Free => "Free",
        }
    }
}

impl std::fmt::Display for RestraintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A support (node) of the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub category: RestraintCategory,
    pub restraint: Restraint,
}

impl Support {
    pub fn new(category: RestraintCategory) -> Self {
        Support {
            category,
            restraint: category.restraint(),
        }
    }
}

impl From<RestraintCategory> for Support {
    fn from(category: RestraintCategory) -> Self {
        Support::new(category)
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A single span element between two supports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Span length
    pub length: f64,
    /// Flexural stiffness EI
    pub ei: f64,
    /// Element end condition
    pub end_condition: EndCondition,
}

impl Span {
    pub fn new(length: f64, ei: f64, end_condition: EndCondition) -> Self {
        Span {
            length,
            ei,
            end_condition,
        }
    }

    /// Validate span parameters
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(CalcError::validation(
                "length",
                self.length.to_string(),
                "Span length must be positive",
            ));
        }
        if !(self.ei.is_finite() && self.ei > 0.0) {
            return Err(CalcError::validation(
                "ei",
                self.ei.to_string(),
                "Flexural stiffness must be positive",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// GEOMETRY MODEL
// =============================================================================

/// Validated beam geometry.
///
/// Fields are private so a `GeometryModel` can only exist in a valid state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryModel {
    spans: Vec<Span>,
    supports: Vec<Support>,
}

impl GeometryModel {
    /// Build and validate a geometry.
    ///
    /// Requires at least one span, positive length and EI for every span,
    /// and exactly `spans.len() + 1` supports.
    pub fn new(spans: Vec<Span>, supports: Vec<Support>) -> CalcResult<Self> {
        if spans.is_empty() {
            return Err(CalcError::validation(
                "spans",
                "empty",
                "At least one span is required",
            ));
        }

        let expected_supports = spans.len() + 1;
        if supports.len() != expected_supports {
            return Err(CalcError::validation(
                "supports",
                supports.len().to_string(),
                format!(
                    "Expected {} supports for {} spans",
                    expected_supports,
                    spans.len()
                ),
            ));
        }

        for (i, span) in spans.iter().enumerate() {
            span.validate().map_err(|e| match e {
                CalcError::Validation { field, value, reason } => {
                    CalcError::validation(format!("spans[{}].{}", i, field), value, reason)
                }
                other => other,
            })?;
        }

        Ok(GeometryModel { spans, supports })
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    pub fn support_count(&self) -> usize {
        self.supports.len()
    }

    /// Total beam length
    pub fn total_length(&self) -> f64 {
        self.spans.iter().map(|s| s.length).sum()
    }

    /// Shortest span length
    pub fn shortest_span(&self) -> f64 {
        self.spans
            .iter()
            .map(|s| s.length)
            .fold(f64::INFINITY, f64::min)
    }

    /// Support coordinates from the left end, cumulative over span lengths
    ///
    /// Returns N+1 positions starting at 0.
    pub fn support_positions(&self) -> Vec<f64> {
        let mut positions = Vec::with_capacity(self.supports.len());
        let mut x = 0.0;
        positions.push(x);
        for span in &self.spans {
            x += span.length;
            positions.push(x);
        }
        positions
    }

    /// Closed coordinate bounds `[a_i, b_i]` of every span
    pub fn span_bounds(&self) -> Vec<(f64, f64)> {
        self.support_positions()
            .windows(2)
            .map(|w| (w[0], w[1]))
            .collect()
    }

    /// Index of the span containing coordinate `x`, if any.
    ///
    /// A coordinate on an interior support belongs to the span on its left.
    pub fn span_at(&self, x: f64) -> Option<(usize, f64)> {
        let mut start = 0.0;
        for (i, span) in self.spans.iter().enumerate() {
            let end = start + span.length;
            if x >= start && x <= end {
                return Some((i, x - start));
            }
            start = end;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hinged(n: usize) -> Vec<Support> {
        vec![Support::new(RestraintCategory::Hinged); n]
    }

    #[test]
    fn test_restraint_table() {
        let fixed = RestraintCategory::Fixed.restraint();
        assert!(fixed.translation.is_restrained() && fixed.rotation.is_restrained());

        let hinged = RestraintCategory::Hinged.restraint();
        assert!(hinged.translation.is_restrained());
        assert!(!hinged.rotation.is_restrained());

        let free = RestraintCategory::Free.restraint();
        assert!(!free.translation.is_restrained() && !free.rotation.is_restrained());
    }

    #[test]
    fn test_end_condition_codes() {
        let codes: Vec<u8> = EndCondition::ALL.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
        assert_eq!(EndCondition::FixedPinned.moment_releases(), (false, true));
        assert_eq!(EndCondition::PinnedFixed.to_string(), "Pinned-Fixed");
    }

    #[test]
    fn test_support_positions_and_bounds() {
        let geometry = GeometryModel::new(
            vec![
                Span::new(10.0, 1.0, EndCondition::FixedFixed),
                Span::new(15.0, 1.0, EndCondition::FixedFixed),
            ],
            hinged(3),
        )
        .unwrap();
        assert_eq!(geometry.support_positions(), vec![0.0, 10.0, 25.0]);
        assert_eq!(geometry.span_bounds(), vec![(0.0, 10.0), (10.0, 25.0)]);
        assert_eq!(geometry.shortest_span(), 10.0);
        assert_eq!(geometry.span_at(10.0), Some((0, 10.0)));
        assert_eq!(geometry.span_at(12.0), Some((1, 2.0)));
        assert_eq!(geometry.span_at(26.0), None);
    }

    #[test]
    fn test_validation_no_spans() {
        let err = GeometryModel::new(vec![], hinged(1)).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_validation_wrong_support_count() {
        let err = GeometryModel::new(
            vec![Span::new(10.0, 1.0, EndCondition::FixedFixed)],
            hinged(3),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::Validation { ref field, .. } if field == "supports"));
    }

    #[test]
    fn test_validation_non_positive_span() {
        let err = GeometryModel::new(
            vec![
                Span::new(10.0, 1.0, EndCondition::FixedFixed),
                Span::new(0.0, 1.0, EndCondition::FixedFixed),
            ],
            hinged(3),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::Validation { ref field, .. } if field == "spans[1].length"));

        let err = GeometryModel::new(
            vec![Span::new(10.0, -2.0, EndCondition::FixedFixed)],
            hinged(2),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::Validation { ref field, .. } if field == "spans[0].ei"));
    }
}
