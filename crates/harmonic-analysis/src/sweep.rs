// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Parameter Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cartesian parameter sweep over temperature, magnetic field and
//! harmonic amplitude.
//!
//! Each grid point runs a short, self-contained simulation and
//! reduces to mean enhancement/power/beta. Points are independent
//! pure computations, so the grid fans out across threads; results
//! are collected back in grid order.

use harmonic_core::simulator::HarmonicFusionSimulator;
use harmonic_math::stats::{argmax, mean};
use harmonic_types::config::SweepConfig;
use harmonic_types::constants::PhysicsConstants;
use harmonic_types::error::{HarmonicError, HarmonicResult};
use harmonic_types::state::SweepResult;
use rayon::prelude::*;

/// One point of the sweep grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub temperature_kev: f64,
    pub magnetic_field_t: f64,
    pub harmonic_amplitude: f64,
}

/// Full sweep output: every grid row plus the best one.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub results: Vec<SweepResult>,
    pub optimal: SweepResult,
}

/// Run a fixed number of steps at one grid point and average the
/// outputs. Pure: a fresh simulator per call, no carried state.
pub fn run_short_simulation(
    constants: &PhysicsConstants,
    point: &GridPoint,
    steps: usize,
) -> HarmonicResult<SweepResult> {
    let mut sim = HarmonicFusionSimulator::new(constants.clone());

    for _ in 0..steps {
        sim.update(
            Some(point.temperature_kev),
            Some(point.magnetic_field_t),
            Some(point.harmonic_amplitude),
        )?;
    }

    Ok(SweepResult {
        temperature_kev: point.temperature_kev,
        magnetic_field_t: point.magnetic_field_t,
        harmonic_amplitude: point.harmonic_amplitude,
        enhancement_factor: mean(&sim.telemetry.enhancement_factor),
        power_output_mw: mean(&sim.telemetry.power_output),
        plasma_beta: mean(&sim.telemetry.plasma_beta),
    })
}

/// Expand the configured ranges into the full Cartesian grid.
pub fn build_grid(config: &SweepConfig) -> Vec<GridPoint> {
    let temperatures = config.temperature.values();
    let fields = config.magnetic_field.values();
    let amplitudes = config.harmonic_amplitude.values();

    let mut grid = Vec::with_capacity(temperatures.len() * fields.len() * amplitudes.len());
    for &t in &temperatures {
        for &b in &fields {
            for &a in &amplitudes {
                grid.push(GridPoint {
                    temperature_kev: t,
                    magnetic_field_t: b,
                    harmonic_amplitude: a,
                });
            }
        }
    }
    grid
}

/// Sweep the full grid and pick the point with the highest mean
/// enhancement factor.
pub fn run_parameter_sweep(
    constants: &PhysicsConstants,
    config: &SweepConfig,
) -> HarmonicResult<SweepOutcome> {
    let grid = build_grid(config);
    log::info!(
        "parameter sweep: {} grid points, {} steps each",
        grid.len(),
        config.steps_per_point
    );

    let results: Vec<SweepResult> = grid
        .par_iter()
        .map(|point| run_short_simulation(constants, point, config.steps_per_point))
        .collect::<HarmonicResult<_>>()?;

    let enhancements: Vec<f64> = results.iter().map(|r| r.enhancement_factor).collect();
    let best = argmax(&enhancements)
        .ok_or_else(|| HarmonicError::ConfigError("sweep grid is empty".to_string()))?;
    let optimal = results[best].clone();

    log::info!(
        "optimal point: T = {:.1} keV, B = {:.1} T, amplitude = {:.2}, enhancement = {:.3}x",
        optimal.temperature_kev,
        optimal.magnetic_field_t,
        optimal.harmonic_amplitude,
        optimal.enhancement_factor
    );

    Ok(SweepOutcome { results, optimal })
}
