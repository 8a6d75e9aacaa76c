// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Command-line entry points: parameter sweep, realtime run and the
//! mathematical validation report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use harmonic_analysis::report::{
    build_telemetry_document, generate_validation_report, timestamped_filename, write_json,
    write_sweep_csv,
};
use harmonic_analysis::sweep::run_parameter_sweep;
use harmonic_core::field::{
    basic_fusion_probability, enhanced_fusion_probability, traditional_probability,
};
use harmonic_core::simulator::HarmonicFusionSimulator;
use harmonic_types::config::SimulationConfig;
use harmonic_types::constants::PhysicsConstants;
use std::path::PathBuf;

/// Energies (MeV) of the probability table, bracketing ψ₀, φ and φ².
const TABLE_ENERGIES_MEV: [f64; 6] = [0.01, 0.916, 1.618, 2.618, 5.0, 10.0];

#[derive(Parser)]
#[command(
    name = "harmonic-fusion",
    about = "Harmonic fusion simulation, parameter sweep and validation"
)]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sweep the temperature × field × amplitude grid to CSV.
    Sweep {
        /// Output CSV path (default: parameter_sweep_<timestamp>.csv).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the realtime scenario and save the telemetry document.
    Run {
        /// Simulated duration in seconds (overrides the config).
        #[arg(long)]
        duration: Option<f64>,
        /// Output JSON path (default: fusion_telemetry_<timestamp>.json).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate the mathematical validation report.
    Validate {
        /// Output JSON path (default: harmonic_fusion_analysis_<timestamp>.json).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn load_config(path: &Option<PathBuf>) -> Result<SimulationConfig> {
    match path {
        Some(p) => SimulationConfig::from_file(&p.to_string_lossy())
            .with_context(|| format!("failed to load config from {}", p.display())),
        None => Ok(SimulationConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let constants = PhysicsConstants::default();

    log::info!(
        "harmonic fusion: ψ₀ = {}, φ = {}, base frequency = {} Hz",
        constants.psi_0,
        constants.phi,
        constants.freq_432
    );

    match cli.command {
        Command::Sweep { output } => {
            let outcome = run_parameter_sweep(&constants, &config.sweep)?;
            let path =
                output.unwrap_or_else(|| timestamped_filename("parameter_sweep", "csv").into());
            write_sweep_csv(&outcome.results, &path)?;

            println!("Parameter sweep complete: {} grid points", outcome.results.len());
            println!(
                "Optimal: T = {:.1} keV, B = {:.1} T, amplitude = {:.2} \
                 (enhancement {:.3}x, power {:.2} MW)",
                outcome.optimal.temperature_kev,
                outcome.optimal.magnetic_field_t,
                outcome.optimal.harmonic_amplitude,
                outcome.optimal.enhancement_factor,
                outcome.optimal.power_output_mw,
            );
            println!("Results written to {}", path.display());
        }

        Command::Run { duration, output } => {
            let mut preset = config.realtime.clone();
            if let Some(d) = duration {
                preset.duration_s = d;
            }

            let mut sim = HarmonicFusionSimulator::from_config(constants, &config);
            sim.run_realtime(&preset)?;

            let document = build_telemetry_document(&sim)?;
            let path =
                output.unwrap_or_else(|| timestamped_filename("fusion_telemetry", "json").into());
            write_json(&document, &path)?;

            let perf = &document.analysis_report.performance_metrics;
            println!("Simulation complete: {} data points", document.analysis_report.data_points);
            println!("Average power: {:.2} MW", perf.average_power_output_mw);
            println!("Maximum enhancement: {:.1}x", perf.maximum_enhancement_factor);
            println!(
                "Resonance peaks detected: {}",
                document.analysis_report.resonance_analysis.peak_count
            );
            println!("Telemetry written to {}", path.display());
        }

        Command::Validate { output } => {
            let report = generate_validation_report(&constants, &config);
            let path = output.unwrap_or_else(|| {
                timestamped_filename("harmonic_fusion_analysis", "json").into()
            });
            write_json(&report, &path)?;

            println!("Validation status: {}", report.validation_status);
            print_probability_table(&constants);

            let summary = &report.performance_metrics.enhancement_factors;
            if let Some(alpha) = summary.optimal_alpha {
                println!("Optimal α: {alpha}");
                println!(
                    "Maximum average enhancement: {:.2}x",
                    summary.maximum_average_enhancement
                );
            }
            println!(
                "Resonance window samples: {}",
                report.performance_metrics.resonance_analysis.total_peaks
            );
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Human-readable probability table over the test energies.
fn print_probability_table(c: &PhysicsConstants) {
    println!();
    println!("Energy (MeV) | Traditional | Basic (α=5) | Enhanced (α=10) | Enhancement");
    println!("{}", "-".repeat(75));

    for &energy in &TABLE_ENERGIES_MEV {
        let traditional = traditional_probability(energy);
        let basic = basic_fusion_probability(c, energy, 5.0);
        let enhanced = enhanced_fusion_probability(c, energy, 10.0);
        let enhancement = if traditional > 0.0 {
            format!("{:10.1}x", enhanced / traditional)
        } else {
            format!("{:>11}", "inf")
        };

        println!(
            "{energy:9.3}    | {traditional:10.6}  | {basic:10.6}  | {enhanced:11.6}  | {enhancement}"
        );
    }
    println!();
}
