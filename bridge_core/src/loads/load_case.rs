//! Per-span load descriptors and the builder for the named load cases.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::GeometryModel;

/// Named load cases reported individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCaseName {
    /// Structural self-weight
    Dead,
    /// Superimposed permanent load (surfacing, parapets)
    Perm,
    /// Distributed live-lane load
    Live,
}

impl LoadCaseName {
    pub const ALL: [LoadCaseName; 3] = [LoadCaseName::Dead, LoadCaseName::Perm, LoadCaseName::Live];

    /// Short label used in tables ("DEAD", "PERM", "LIVE")
    pub fn code(&self) -> &'static str {
        match self {
            LoadCaseName::Dead => "DEAD",
            LoadCaseName::Perm => "PERM",
            LoadCaseName::Live => "LIVE",
        }
    }
}

impl std::fmt::Display for LoadCaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Uniformly distributed load on one span.
///
/// Offsets are measured from the left end of the span. A full-span load
/// has `start = 0` and `end = span length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanLoad {
    /// Span index (0-based)
    pub span_index: usize,
    /// Load intensity, force per unit length, positive downward
    pub magnitude: f64,
    /// Start offset from the left end of the span
    pub start: f64,
    /// End offset from the left end of the span
    pub end: f64,
}

impl SpanLoad {
    pub fn full_span(span_index: usize, magnitude: f64, length: f64) -> Self {
        SpanLoad {
            span_index,
            magnitude,
            start: 0.0,
            end: length,
        }
    }

    /// Total force carried by this descriptor
    pub fn resultant(&self) -> f64 {
        self.magnitude * (self.end - self.start)
    }
}

/// Ordered sequence of per-span load descriptors
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadCase {
    pub name: String,
    pub loads: Vec<SpanLoad>,
}

impl LoadCase {
    pub fn new(name: impl Into<String>) -> Self {
        LoadCase {
            name: name.into(),
            loads: Vec::new(),
        }
    }

    pub fn with_load(mut self, load: SpanLoad) -> Self {
        self.loads.push(load);
        self
    }

    /// Sum of all load resultants
    pub fn total_force(&self) -> f64 {
        self.loads.iter().map(SpanLoad::resultant).sum()
    }

    /// Span indices in descriptor order
    pub fn span_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.loads.iter().map(|l| l.span_index)
    }
}

/// Assembles full-span uniform load cases for a geometry.
pub struct LoadCaseBuilder<'a> {
    geometry: &'a GeometryModel,
}

impl<'a> LoadCaseBuilder<'a> {
    pub fn new(geometry: &'a GeometryModel) -> Self {
        LoadCaseBuilder { geometry }
    }

    /// One full-span load per span, magnitudes given left to right
    pub fn per_span(&self, name: impl Into<String>, magnitudes: &[f64]) -> CalcResult<LoadCase> {
        let name = name.into();
        if magnitudes.len() != self.geometry.span_count() {
            return Err(CalcError::validation(
                format!("{}.magnitudes", name),
                magnitudes.len().to_string(),
                format!("Expected one magnitude per span ({})", self.geometry.span_count()),
            ));
        }
        if let Some(bad) = magnitudes.iter().find(|m| !m.is_finite()) {
            return Err(CalcError::validation(
                format!("{}.magnitudes", name),
                bad.to_string(),
                "Load magnitude must be finite",
            ));
        }

        let loads = self
            .geometry
            .spans()
            .iter()
            .zip(magnitudes)
            .enumerate()
            .map(|(i, (span, &w))| SpanLoad::full_span(i, w, span.length))
            .collect();

        Ok(LoadCase { name, loads })
    }

    /// Same intensity on every span (live-lane loading)
    pub fn uniform(&self, name: impl Into<String>, magnitude: f64) -> CalcResult<LoadCase> {
        let magnitudes = vec![magnitude; self.geometry.span_count()];
        self.per_span(name, &magnitudes)
    }

    /// Intensity on a single span only, zero elsewhere (pattern loading)
    pub fn single_span(&self, name: impl Into<String>, span_index: usize, magnitude: f64) -> CalcResult<LoadCase> {
        if span_index >= self.geometry.span_count() {
            return Err(CalcError::validation(
                "span_index",
                span_index.to_string(),
                "Span index out of range",
            ));
        }
        let magnitudes: Vec<f64> = (0..self.geometry.span_count())
            .map(|i| if i == span_index { magnitude } else { 0.0 })
            .collect();
        self.per_span(name, &magnitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EndCondition, RestraintCategory, Span, Support};

    fn two_span() -> GeometryModel {
        GeometryModel::new(
            vec![
                Span::new(10.0, 1.0, EndCondition::FixedFixed),
                Span::new(20.0, 1.0, EndCondition::FixedFixed),
            ],
            vec![Support::new(RestraintCategory::Hinged); 3],
        )
        .unwrap()
    }

    #[test]
    fn test_per_span_full_length_offsets() {
        let geometry = two_span();
        let case = LoadCaseBuilder::new(&geometry).per_span("DEAD", &[10.0, 12.0]).unwrap();
        assert_eq!(case.loads.len(), 2);
        assert_eq!(case.loads[1], SpanLoad { span_index: 1, magnitude: 12.0, start: 0.0, end: 20.0 });
        assert_eq!(case.total_force(), 10.0 * 10.0 + 12.0 * 20.0);
    }

    #[test]
    fn test_per_span_count_mismatch() {
        let geometry = two_span();
        let err = LoadCaseBuilder::new(&geometry).per_span("PERM", &[1.0]).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_single_span_pattern() {
        let geometry = two_span();
        let case = LoadCaseBuilder::new(&geometry).single_span("LIVE-2", 1, 5.0).unwrap();
        let magnitudes: Vec<f64> = case.loads.iter().map(|l| l.magnitude).collect();
        assert_eq!(magnitudes, vec![0.0, 5.0]);
        assert!(LoadCaseBuilder::new(&geometry).single_span("x", 2, 5.0).is_err());
    }

    #[test]
    fn test_load_case_names() {
        let codes: Vec<&str> = LoadCaseName::ALL.iter().map(|n| n.code()).collect();
        assert_eq!(codes, vec!["DEAD", "PERM", "LIVE"]);
    }
}
