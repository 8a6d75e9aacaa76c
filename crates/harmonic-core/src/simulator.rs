// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Simulation Stepper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! The harmonic fusion simulation stepper.
//!
//! Each `update` recomputes the plasma state, the reaction rate and
//! power, the enhancement factor at the operating energy, the
//! coherence scalar and the resonance peaks, appends everything to
//! the telemetry series and advances the clock. There is no terminal
//! state; the caller decides when to stop stepping.

use crate::cross_section::{dt_cross_section, dt_cross_section_classical};
use crate::plasma::derive_plasma_state;
use crate::rate::reaction_rate;
use crate::resonance::{detect_peaks, STEPPER_WINDOW_MEV};
use crate::telemetry::TelemetrySeries;
use harmonic_types::config::{RealtimePoint, SimulationConfig};
use harmonic_types::constants::PhysicsConstants;
use harmonic_types::error::HarmonicResult;
use harmonic_types::state::{HarmonicState, PlasmaState, StepRecord};
use ndarray::Array1;
use std::f64::consts::PI;

/// Fixed step size of the simulation clock (s).
const DEFAULT_DT: f64 = 0.01;

/// Floor for the classical cross-section in the enhancement ratio.
const CLASSICAL_FLOOR: f64 = 1e-50;

/// Peak-scan energy range (MeV) and sample count.
const SCAN_E_MIN_MEV: f64 = 0.1;
const SCAN_E_MAX_MEV: f64 = 10.0;
const SCAN_SAMPLES: usize = 100;

/// Enhancement factor above which a step is logged as significant.
const ENHANCEMENT_NOTE: f64 = 10.0;

/// Beta above which plasma stability is logged as marginal.
const BETA_WARN: f64 = 0.1;

pub struct HarmonicFusionSimulator {
    pub constants: PhysicsConstants,
    pub plasma_state: PlasmaState,
    pub harmonic_state: HarmonicState,
    pub telemetry: TelemetrySeries,
    pub time: f64,
    pub dt: f64,
}

impl HarmonicFusionSimulator {
    /// Simulator at the default operating point (5 keV, 8.5 T).
    pub fn new(constants: PhysicsConstants) -> Self {
        HarmonicFusionSimulator {
            constants,
            plasma_state: PlasmaState::default(),
            harmonic_state: HarmonicState::default(),
            telemetry: TelemetrySeries::new(),
            time: 0.0,
            dt: DEFAULT_DT,
        }
    }

    /// Simulator at the configured initial operating point.
    pub fn from_config(constants: PhysicsConstants, config: &SimulationConfig) -> Self {
        let mut sim = Self::new(constants);
        sim.plasma_state.temperature_kev = config.initial.temperature_kev;
        sim.plasma_state.magnetic_field_t = config.initial.magnetic_field_t;
        sim.dt = config.time_step_s;
        sim
    }

    /// Jump to the realtime operating point and drive amplitudes.
    pub fn apply_realtime_preset(&mut self, preset: &RealtimePoint) {
        self.plasma_state.temperature_kev = preset.temperature_kev;
        self.plasma_state.magnetic_field_t = preset.magnetic_field_t;
        self.harmonic_state.psi_amplitude = preset.psi_amplitude;
        self.harmonic_state.phi_amplitude = preset.phi_amplitude;
        self.harmonic_state.base_amplitude = preset.base_amplitude;
    }

    /// Advance one step, optionally overwriting the drive inputs.
    pub fn update(
        &mut self,
        temp_kev: Option<f64>,
        b_field_t: Option<f64>,
        harmonic_amp: Option<f64>,
    ) -> HarmonicResult<StepRecord> {
        if let Some(t) = temp_kev {
            self.plasma_state.temperature_kev = t;
        }
        if let Some(b) = b_field_t {
            self.plasma_state.magnetic_field_t = b;
        }
        if let Some(a) = harmonic_amp {
            self.harmonic_state.set_drive_amplitude(a);
        }

        self.plasma_state = derive_plasma_state(
            &self.constants,
            self.plasma_state.temperature_kev,
            self.plasma_state.magnetic_field_t,
            self.harmonic_state.psi_amplitude,
            self.time,
        );

        let rate = reaction_rate(&self.constants, &self.plasma_state, &self.harmonic_state)?;

        // Enhancement factor at the operating energy
        let operating_kev = self.plasma_state.temperature_kev * 1000.0;
        let classical =
            dt_cross_section(&self.constants, &self.harmonic_state, operating_kev, false);
        let enhanced =
            dt_cross_section(&self.constants, &self.harmonic_state, operating_kev, true);
        let enhancement_factor = enhanced / classical.max(CLASSICAL_FLOOR);

        let harmonic_coherence = self.harmonic_state.coherence();
        let resonance_peaks = self.scan_peaks();

        let record = StepRecord {
            time: self.time,
            fusion_rate: rate.rate_per_m3_s,
            power_output: rate.power_mw,
            cross_section: enhanced,
            plasma_temp: self.plasma_state.temperature_kev,
            plasma_density: self.plasma_state.density_m3,
            magnetic_field: self.plasma_state.magnetic_field_t,
            plasma_beta: self.plasma_state.beta,
            confinement_time: self.plasma_state.confinement_time_s,
            harmonic_coherence,
            enhancement_factor,
            integration_error: rate.quad_error,
            rate_converged: rate.converged,
            resonance_peaks,
        };

        self.telemetry.record(&record);

        if enhancement_factor > ENHANCEMENT_NOTE {
            log::info!(
                "high enhancement: {enhancement_factor:.1}x at t = {:.2} s",
                self.time
            );
        }
        if self.plasma_state.beta > BETA_WARN {
            log::warn!(
                "high beta: {:.3} at t = {:.2} s",
                self.plasma_state.beta,
                self.time
            );
        }

        self.time += self.dt;
        Ok(record)
    }

    /// Sample the enhanced cross-section curve and detect peaks
    /// against the classical baseline.
    pub fn scan_peaks(&self) -> Vec<harmonic_types::state::ResonancePeak> {
        let energies = Array1::linspace(SCAN_E_MIN_MEV, SCAN_E_MAX_MEV, SCAN_SAMPLES);
        let samples: Vec<(f64, f64)> = energies
            .iter()
            .map(|&e_mev| {
                let value =
                    dt_cross_section(&self.constants, &self.harmonic_state, e_mev * 1000.0, true);
                (e_mev, value)
            })
            .collect();

        detect_peaks(
            &self.constants,
            &samples,
            |e_mev| dt_cross_section_classical(e_mev * 1000.0),
            STEPPER_WINDOW_MEV,
        )
    }

    /// Run the realtime scenario: hold the preset operating point
    /// under slow sinusoidal temperature and field excursions, with a
    /// once-per-second progress line.
    pub fn run_realtime(&mut self, preset: &RealtimePoint) -> HarmonicResult<()> {
        self.apply_realtime_preset(preset);

        let base_temp = preset.temperature_kev;
        let base_field = preset.magnetic_field_t;
        let steps = (preset.duration_s / self.dt) as usize;
        let steps_per_second = (1.0 / self.dt) as usize;

        for step in 0..steps {
            let elapsed = step as f64 * self.dt;
            // 2 s temperature breathing, 5 s field ripple
            let temp = base_temp + 0.5 * (2.0 * PI * elapsed / 2.0).sin();
            let field = base_field + 0.2 * (2.0 * PI * elapsed / 5.0).sin();

            let record = self.update(Some(temp), Some(field), None)?;

            if steps_per_second > 0 && step % steps_per_second == 0 {
                log::info!(
                    "t = {:.1} s: enhancement = {:.1}x, power = {:.2} MW, beta = {:.3}",
                    self.time,
                    record.enhancement_factor,
                    record.power_output,
                    record.plasma_beta
                );
            }
        }
        Ok(())
    }

    /// Reset the clock and telemetry for a fresh run; the operating
    /// point and harmonic amplitudes are left as configured.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.telemetry.reset();
    }
}
