//! # File I/O Module
//!
//! Reads analysis inputs and writes reports as JSON.
//!
//! Reports are saved atomically: the JSON goes to a `.tmp` sibling, is
//! synced to disk, then renamed over the target. An interrupted save never
//! leaves a truncated report behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bridge_core::analysis::run_analysis;
//! use bridge_core::file_io::{load_input, save_report};
//! use bridge_core::solver::BeamSolver;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("bridge.json"))?;
//! let report = run_analysis(&input, &BeamSolver::new(input.settings.station_step))?;
//! save_report(&report, Path::new("bridge-report.json"))?;
//! # Ok::<(), bridge_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::analysis::AnalysisReport;
use crate::errors::{CalcError, CalcResult};
use crate::input::AnalysisInput;

/// Load an analysis input from a JSON file
pub fn load_input(path: &Path) -> CalcResult<AnalysisInput> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let input: AnalysisInput =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    log::debug!("Loaded input with {} spans from {}", input.spans.len(), path.display());
    Ok(input)
}

/// Save a report with atomic write semantics
pub fn save_report(report: &AnalysisReport, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(report)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("Report {} written to {}", report.run_id, path.display());
    Ok(())
}
