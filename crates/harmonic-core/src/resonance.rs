// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Resonance Detection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Resonance peak detection and window tagging.
//!
//! A sample is a peak when it is strictly greater than both
//! neighbours and above 10% of the sequence maximum. Boundary samples
//! are never peaks: no wraparound, no half-window comparison.

use crate::field::{enhanced_fusion_probability, traditional_probability};
use harmonic_types::constants::PhysicsConstants;
use harmonic_types::state::ResonancePeak;
use serde::{Deserialize, Serialize};

/// Relative height threshold against the sequence maximum.
const PEAK_THRESHOLD_FRAC: f64 = 0.1;

/// Floor for the baseline when forming enhancement ratios.
const BASELINE_FLOOR: f64 = 1e-50;

/// Window radius used by the simulation stepper (MeV).
pub const STEPPER_WINDOW_MEV: f64 = 0.1;

/// Window radius used by the validation scan (MeV).
pub const SCAN_WINDOW_MEV: f64 = 0.05;

/// Coupling strength used by the validation scan's probability ratio.
const SCAN_ALPHA: f64 = 10.0;

/// Scan an ordered (energy, value) curve for significant local
/// maxima. `baseline` supplies the non-enhanced value at a given
/// energy for the enhancement ratio.
pub fn detect_peaks<B: Fn(f64) -> f64>(
    c: &PhysicsConstants,
    samples: &[(f64, f64)],
    baseline: B,
    window_mev: f64,
) -> Vec<ResonancePeak> {
    if samples.len() < 3 {
        return Vec::new();
    }

    let max_value = samples
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);
    let threshold = max_value * PEAK_THRESHOLD_FRAC;

    let mut peaks = Vec::new();
    for i in 1..samples.len() - 1 {
        let (energy, value) = samples[i];
        if value > samples[i - 1].1 && value > samples[i + 1].1 && value > threshold {
            let enhancement = value / baseline(energy).max(BASELINE_FLOOR);
            peaks.push(ResonancePeak {
                energy_mev: energy,
                cross_section: value,
                enhancement_factor: enhancement,
                is_psi_resonance: (energy - c.psi_0).abs() < window_mev,
                is_phi_resonance: (energy - c.phi).abs() < window_mev,
                is_phi_squared_resonance: (energy - c.phi_squared()).abs() < window_mev,
            });
        }
    }
    peaks
}

/// A tagged sample inside a resonance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSample {
    pub energy_mev: f64,
    pub enhancement_factor: f64,
}

/// Samples collected per resonance window over an energy scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResonanceWindows {
    pub psi_resonances: Vec<WindowSample>,
    pub phi_resonances: Vec<WindowSample>,
    pub phi_squared_resonances: Vec<WindowSample>,
    pub total_peaks: usize,
}

/// Tag every energy sample that falls inside a ψ₀, φ or φ² window,
/// with the enhanced-probability / traditional-probability ratio as
/// its enhancement. Energies are expected well above zero so the
/// traditional curve has support inside each window.
pub fn scan_resonance_windows(
    c: &PhysicsConstants,
    energies: &[f64],
    window_mev: f64,
) -> ResonanceWindows {
    let mut windows = ResonanceWindows::default();
    let phi_squared = c.phi_squared();

    for &energy in energies {
        let ratio = || {
            let enhanced = enhanced_fusion_probability(c, energy, SCAN_ALPHA);
            enhanced / traditional_probability(energy).max(BASELINE_FLOOR)
        };

        if (energy - c.psi_0).abs() < window_mev {
            windows.psi_resonances.push(WindowSample {
                energy_mev: energy,
                enhancement_factor: ratio(),
            });
        }
        if (energy - c.phi).abs() < window_mev {
            windows.phi_resonances.push(WindowSample {
                energy_mev: energy,
                enhancement_factor: ratio(),
            });
        }
        if (energy - phi_squared).abs() < window_mev {
            windows.phi_squared_resonances.push(WindowSample {
                energy_mev: energy,
                enhancement_factor: ratio(),
            });
        }
    }

    windows.total_peaks = windows.psi_resonances.len()
        + windows.phi_resonances.len()
        + windows.phi_squared_resonances.len();
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consts() -> PhysicsConstants {
        PhysicsConstants::default()
    }

    #[test]
    fn test_boundary_samples_never_peaks() {
        let c = consts();
        // Maximum at index 0 and at the last index; neither may be
        // reported regardless of value.
        let samples = vec![(0.1, 100.0), (0.2, 1.0), (0.3, 2.0), (0.4, 500.0)];
        let peaks = detect_peaks(&c, &samples, |_| 1.0, STEPPER_WINDOW_MEV);
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_interior_peak_detected() {
        let c = consts();
        let samples = vec![(0.8, 1.0), (0.9, 10.0), (1.0, 2.0)];
        let peaks = detect_peaks(&c, &samples, |_| 2.0, STEPPER_WINDOW_MEV);
        assert_eq!(peaks.len(), 1);
        assert!((peaks[0].energy_mev - 0.9).abs() < 1e-12);
        assert!((peaks[0].enhancement_factor - 5.0).abs() < 1e-12);
        // 0.9 is within 0.1 MeV of ψ₀ ≈ 0.9157
        assert!(peaks[0].is_psi_resonance);
        assert!(!peaks[0].is_phi_resonance);
    }

    #[test]
    fn test_small_peaks_below_threshold_ignored() {
        let c = consts();
        // Local maximum at 0.5 but below 10% of the sequence max.
        let samples = vec![
            (1.0, 0.0),
            (2.0, 0.05),
            (3.0, 0.0),
            (4.0, 0.0),
            (5.0, 1.0),
            (6.0, 0.0),
        ];
        let peaks = detect_peaks(&c, &samples, |_| 1.0, STEPPER_WINDOW_MEV);
        assert_eq!(peaks.len(), 1);
        assert!((peaks[0].energy_mev - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_curve_yields_no_peaks() {
        let c = consts();
        let samples: Vec<(f64, f64)> = (0..100).map(|i| (0.1 + i as f64 * 0.1, 0.0)).collect();
        let peaks = detect_peaks(&c, &samples, |_| 0.0, STEPPER_WINDOW_MEV);
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_plateau_is_not_a_peak() {
        let c = consts();
        // Strictly-greater comparison rejects flat tops.
        let samples = vec![(1.0, 0.0), (2.0, 5.0), (3.0, 5.0), (4.0, 0.0)];
        let peaks = detect_peaks(&c, &samples, |_| 1.0, STEPPER_WINDOW_MEV);
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_short_sequences() {
        let c = consts();
        assert!(detect_peaks(&c, &[], |_| 1.0, 0.1).is_empty());
        assert!(detect_peaks(&c, &[(1.0, 5.0)], |_| 1.0, 0.1).is_empty());
        assert!(detect_peaks(&c, &[(1.0, 5.0), (2.0, 9.0)], |_| 1.0, 0.1).is_empty());
    }

    #[test]
    fn test_phi_squared_tagging() {
        let c = consts();
        let phi2 = c.phi_squared();
        let samples = vec![(phi2 - 0.02, 1.0), (phi2, 10.0), (phi2 + 0.02, 1.0)];
        let peaks = detect_peaks(&c, &samples, |_| 1.0, SCAN_WINDOW_MEV);
        assert_eq!(peaks.len(), 1);
        assert!(peaks[0].is_phi_squared_resonance);
        assert!(!peaks[0].is_psi_resonance);
    }

    #[test]
    fn test_window_scan_counts() {
        let c = consts();
        // 500 samples over [0.01, 10]: spacing ≈ 0.02, so a ±0.05
        // window catches 4-6 samples per centre.
        let step = (10.0 - 0.01) / 499.0;
        let energies: Vec<f64> = (0..500).map(|i| 0.01 + step * i as f64).collect();
        let w = scan_resonance_windows(&c, &energies, SCAN_WINDOW_MEV);
        assert!(!w.psi_resonances.is_empty());
        assert!(!w.phi_resonances.is_empty());
        assert!(!w.phi_squared_resonances.is_empty());
        assert_eq!(
            w.total_peaks,
            w.psi_resonances.len() + w.phi_resonances.len() + w.phi_squared_resonances.len()
        );
        for s in w
            .psi_resonances
            .iter()
            .chain(&w.phi_resonances)
            .chain(&w.phi_squared_resonances)
        {
            assert!(s.enhancement_factor.is_finite());
            assert!(s.enhancement_factor >= 0.0);
        }
    }
}
