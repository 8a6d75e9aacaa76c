// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Telemetry Series
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Append-only multi-channel telemetry.
//!
//! One sample per channel is appended per simulation step; channels
//! always hold equal lengths and are never truncated or rewritten.
//! `reset` starts a fresh series for the next sweep iteration.

use harmonic_types::state::StepRecord;
use serde::{Deserialize, Serialize};

/// Ordered per-step scalar samples, one `Vec` per channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySeries {
    pub time: Vec<f64>,
    pub fusion_rate: Vec<f64>,
    pub power_output: Vec<f64>,
    pub cross_section: Vec<f64>,
    pub plasma_temp: Vec<f64>,
    pub plasma_density: Vec<f64>,
    pub magnetic_field: Vec<f64>,
    pub plasma_beta: Vec<f64>,
    pub confinement_time: Vec<f64>,
    pub harmonic_coherence: Vec<f64>,
    pub enhancement_factor: Vec<f64>,
    pub integration_error: Vec<f64>,
}

impl TelemetrySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Append one step's scalars to every channel.
    pub fn record(&mut self, step: &StepRecord) {
        self.time.push(step.time);
        self.fusion_rate.push(step.fusion_rate);
        self.power_output.push(step.power_output);
        self.cross_section.push(step.cross_section);
        self.plasma_temp.push(step.plasma_temp);
        self.plasma_density.push(step.plasma_density);
        self.magnetic_field.push(step.magnetic_field);
        self.plasma_beta.push(step.plasma_beta);
        self.confinement_time.push(step.confinement_time);
        self.harmonic_coherence.push(step.harmonic_coherence);
        self.enhancement_factor.push(step.enhancement_factor);
        self.integration_error.push(step.integration_error);
    }

    /// Start a fresh series (sweep-iteration reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonic_types::state::StepRecord;

    fn step(t: f64) -> StepRecord {
        StepRecord {
            time: t,
            fusion_rate: 1.0,
            power_output: 2.0,
            cross_section: 3.0,
            plasma_temp: 4.0,
            plasma_density: 5.0,
            magnetic_field: 6.0,
            plasma_beta: 7.0,
            confinement_time: 8.0,
            harmonic_coherence: 9.0,
            enhancement_factor: 10.0,
            integration_error: 0.0,
            rate_converged: true,
            resonance_peaks: Vec::new(),
        }
    }

    #[test]
    fn test_channels_grow_in_lockstep() {
        let mut t = TelemetrySeries::new();
        for i in 0..25 {
            t.record(&step(i as f64 * 0.01));
        }
        assert_eq!(t.len(), 25);
        assert_eq!(t.fusion_rate.len(), 25);
        assert_eq!(t.integration_error.len(), 25);
        assert_eq!(t.enhancement_factor.len(), 25);
    }

    #[test]
    fn test_append_only_ordering() {
        let mut t = TelemetrySeries::new();
        for i in 0..10 {
            t.record(&step(i as f64));
        }
        for i in 1..10 {
            assert!(t.time[i] > t.time[i - 1]);
        }
    }

    #[test]
    fn test_reset_clears_all_channels() {
        let mut t = TelemetrySeries::new();
        t.record(&step(0.0));
        t.reset();
        assert!(t.is_empty());
        assert!(t.plasma_beta.is_empty());
    }

    #[test]
    fn test_serde_roundtrip_is_exact() {
        let mut t = TelemetrySeries::new();
        // Awkward values: subnormals-adjacent, repeating fractions
        for i in 0..50 {
            let mut s = step(i as f64 * 0.01);
            s.fusion_rate = (i as f64).sqrt() * 1e-17;
            s.plasma_beta = 1.0 / 3.0 + i as f64;
            t.record(&s);
        }
        let json = serde_json::to_string(&t).unwrap();
        let back: TelemetrySeries = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
