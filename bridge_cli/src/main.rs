//! # Bridge CLI
//!
//! Runs the bridge beam analysis from a JSON input file, or on the built-in
//! three-span demo when no file is given, and prints the per-span critical
//! values. Logging is controlled with `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bridge_core::analysis::{run_analysis, AnalysisReport};
use bridge_core::file_io::{load_input, save_report};
use bridge_core::input::AnalysisInput;
use bridge_core::solver::BeamSolver;

#[derive(Debug, Parser)]
#[command(author, version, about = "Multi-span bridge beam load combination and envelope analysis")]
struct Cli {
    /// Analysis input (JSON); runs the built-in demo when omitted
    input: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the output station spacing in m
    #[arg(long)]
    station_step: Option<f64>,

    /// Override the vehicle sweep increment in m
    #[arg(long)]
    sweep_step: Option<f64>,

    /// Also print the per-station moment table
    #[arg(long)]
    details: bool,
}

fn print_report(input: &AnalysisInput, report: &AnalysisReport, details: bool) {
    println!("═══════════════════════════════════════");
    println!("  BRIDGE BEAM ENVELOPE RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    if let Some(project) = &report.project {
        println!("Project:  {}", project.bridge_name);
    }
    println!("Spans:    {}", input.spans.iter().map(|s| format!("{:.1}", s.length)).collect::<Vec<_>>().join(" + "));
    println!(
        "Factors:  dead {:.2}, permanent {:.2}, vehicle {:.2}",
        input.dead_factor, input.permanent_factor, input.vehicle_factor
    );
    if let Some(traffic) = &report.traffic {
        println!();
        println!("LM1 traffic (carriageway {:.2} m):", input.carriageway_width);
        println!("  Lanes:        {}", traffic.lanes);
        println!("  Distributed:  {:.2} kN/m", traffic.distributed);
        println!("  Axle load:    {:.2} kN", traffic.axle_load);
        println!("  Axle spacing: {:.2} m", traffic.axle_spacing);
    }

    println!();
    println!("Governing values per span:");
    for value in &report.critical_values {
        println!("  {}", value.summary());
    }

    println!();
    println!("Reactions (unfactored, kN):");
    println!("  {:>8} {:>10} {:>10} {:>10}", "x [m]", "DEAD", "PERM", "LIVE");
    for row in &report.detail_tables.reactions {
        println!("  {:>8.2} {:>10.2} {:>10.2} {:>10.2}", row.x, row.dead, row.perm, row.live);
    }

    if details {
        println!();
        println!("Bending moment (kNm):");
        println!(
            "  {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "x [m]", "DEAD", "PERM", "LIVE", "VEH max", "VEH min"
        );
        for row in &report.detail_tables.moment {
            println!(
                "  {:>8.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                row.x, row.dead, row.perm, row.live, row.vehicle_max, row.vehicle_min
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut input = match &cli.input {
        Some(path) => load_input(path).with_context(|| format!("loading {}", path.display()))?,
        None => {
            log::info!("No input file given, running the three-span demo");
            AnalysisInput::demo()
        }
    };
    if let Some(step) = cli.station_step {
        input.settings = input.settings.with_station_step(step);
    }
    if let Some(step) = cli.sweep_step {
        input.settings = input.settings.with_sweep_step(step);
    }

    let solver = BeamSolver::new(input.settings.station_step);
    let report = run_analysis(&input, &solver).context("analysis failed")?;
    print_report(&input, &report, cli.details);

    if let Some(out) = &cli.out {
        save_report(&report, out).with_context(|| format!("saving {}", out.display()))?;
        println!();
        println!("Report written to {}", out.display());
    }

    Ok(())
}
