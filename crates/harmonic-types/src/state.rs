// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! State records shared across the simulation pipeline.

use serde::{Deserialize, Serialize};

/// Current state of the plasma. Recomputed every step from the
/// temperature/field/amplitude inputs; history lives in telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasmaState {
    pub temperature_kev: f64,
    pub density_m3: f64,
    pub magnetic_field_t: f64,
    pub pressure_pa: f64,
    pub beta: f64,
    pub confinement_time_s: f64,
}

impl PlasmaState {
    /// Initial operating point before the first step derives the
    /// pressure/beta/confinement quantities.
    pub fn new(temperature_kev: f64, density_m3: f64, magnetic_field_t: f64) -> Self {
        PlasmaState {
            temperature_kev,
            density_m3,
            magnetic_field_t,
            pressure_pa: 0.0,
            beta: 0.0,
            confinement_time_s: 0.0,
        }
    }
}

impl Default for PlasmaState {
    fn default() -> Self {
        PlasmaState::new(5.0, 1e20, 8.5)
    }
}

/// Harmonic enhancement parameters. All amplitudes are expected in
/// [0, 1] but not strictly enforced; they are mutated by explicit
/// parameter updates between steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicState {
    pub psi_amplitude: f64,
    pub phi_amplitude: f64,
    pub base_amplitude: f64,
    pub coherence_factor: f64,
    pub resonance_match: f64,
}

impl Default for HarmonicState {
    fn default() -> Self {
        HarmonicState {
            psi_amplitude: 0.7,
            phi_amplitude: 0.6,
            base_amplitude: 0.5,
            coherence_factor: 0.85,
            resonance_match: 0.75,
        }
    }
}

impl HarmonicState {
    /// Drive all three amplitudes from a single sweep parameter.
    /// The φ and base channels track the ψ channel at fixed ratios.
    pub fn set_drive_amplitude(&mut self, amplitude: f64) {
        self.psi_amplitude = amplitude;
        self.phi_amplitude = amplitude * 0.8;
        self.base_amplitude = amplitude * 0.6;
    }

    /// Mean drive amplitude scaled by the coherence factor.
    pub fn coherence(&self) -> f64 {
        (self.psi_amplitude + self.phi_amplitude + self.base_amplitude) / 3.0
            * self.coherence_factor
    }
}

/// A detected resonance peak. Produced fresh on each detection call,
/// never persisted as state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonancePeak {
    pub energy_mev: f64,
    pub cross_section: f64,
    pub enhancement_factor: f64,
    pub is_psi_resonance: bool,
    pub is_phi_resonance: bool,
    pub is_phi_squared_resonance: bool,
}

/// All scalar outputs of a single simulation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub time: f64,
    pub fusion_rate: f64,
    pub power_output: f64,
    pub cross_section: f64,
    pub plasma_temp: f64,
    pub plasma_density: f64,
    pub magnetic_field: f64,
    pub plasma_beta: f64,
    pub confinement_time: f64,
    pub harmonic_coherence: f64,
    pub enhancement_factor: f64,
    /// Absolute error estimate reported by the rate integrator.
    pub integration_error: f64,
    /// False when the rate integral hit its subdivision limit.
    pub rate_converged: bool,
    pub resonance_peaks: Vec<ResonancePeak>,
}

/// One row of the parameter sweep output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    #[serde(rename = "temperature_keV")]
    pub temperature_kev: f64,
    #[serde(rename = "magnetic_field_T")]
    pub magnetic_field_t: f64,
    pub harmonic_amplitude: f64,
    pub enhancement_factor: f64,
    #[serde(rename = "power_output_MW")]
    pub power_output_mw: f64,
    pub plasma_beta: f64,
}
