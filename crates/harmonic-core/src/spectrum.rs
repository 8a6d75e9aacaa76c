// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Spectra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Particle energy distributions and the harmonic frequency spectrum.

use harmonic_math::quadrature::trapezoid;
use harmonic_types::constants::PhysicsConstants;
use ndarray::Array1;

/// Energy grid bounds (keV) and resolution of the distributions.
const E_MIN_KEV: f64 = 0.1;
const E_MAX_KEV: f64 = 50.0;
const E_SAMPLES: usize = 200;

/// Triton density relative to deuterons.
const TRITON_FRACTION: f64 = 0.8;

/// Frequency grid (Hz) and resolution of the spectrum.
const F_MIN_HZ: f64 = 100.0;
const F_MAX_HZ: f64 = 2000.0;
const F_SAMPLES: usize = 500;

/// Spectral line widths (Hz).
const PSI_LINE_SIGMA: f64 = 30.0;
const PHI_LINE_SIGMA: f64 = 40.0;
const BASE_LINE_SIGMA: f64 = 20.0;

/// Maxwell-Boltzmann energy distributions for deuterons and tritons,
/// normalized to unit area over the sampled grid.
pub struct EnergyDistribution {
    pub energies_kev: Vec<f64>,
    pub deuteron: Vec<f64>,
    pub triton: Vec<f64>,
}

pub fn energy_distribution(temp_kev: f64) -> EnergyDistribution {
    let energies = Array1::linspace(E_MIN_KEV, E_MAX_KEV, E_SAMPLES);
    let energies_kev: Vec<f64> = energies.to_vec();

    let raw: Vec<f64> = energies_kev
        .iter()
        .map(|&e| (e / temp_kev).sqrt() * (-e / temp_kev).exp())
        .collect();

    let deuteron_area = trapezoid(&raw, &energies_kev);
    let deuteron: Vec<f64> = raw.iter().map(|v| v / deuteron_area).collect();

    // The triton population is scaled before normalization, so both
    // curves integrate to one and differ only through rounding.
    let triton_raw: Vec<f64> = raw.iter().map(|v| v * TRITON_FRACTION).collect();
    let triton_area = trapezoid(&triton_raw, &energies_kev);
    let triton: Vec<f64> = triton_raw.iter().map(|v| v / triton_area).collect();

    EnergyDistribution {
        energies_kev,
        deuteron,
        triton,
    }
}

/// Gaussian spectral peaks at the ψ₀-, φ- and base-carrier
/// frequencies, weighted by the drive amplitudes.
pub struct HarmonicSpectrum {
    pub frequencies_hz: Vec<f64>,
    pub psi_spectrum: Vec<f64>,
    pub phi_spectrum: Vec<f64>,
    pub base_spectrum: Vec<f64>,
}

pub fn harmonic_spectrum(
    c: &PhysicsConstants,
    psi_amplitude: f64,
    phi_amplitude: f64,
    base_amplitude: f64,
) -> HarmonicSpectrum {
    let frequencies = Array1::linspace(F_MIN_HZ, F_MAX_HZ, F_SAMPLES);
    let frequencies_hz: Vec<f64> = frequencies.to_vec();

    let line = |centre: f64, amplitude: f64, sigma: f64| -> Vec<f64> {
        frequencies_hz
            .iter()
            .map(|&f| amplitude * (-((f - centre) * (f - centre)) / (2.0 * sigma * sigma)).exp())
            .collect()
    };

    HarmonicSpectrum {
        psi_spectrum: line(c.psi_frequency_hz(), psi_amplitude, PSI_LINE_SIGMA),
        phi_spectrum: line(c.phi_frequency_hz(), phi_amplitude, PHI_LINE_SIGMA),
        base_spectrum: line(c.freq_432, base_amplitude, BASE_LINE_SIGMA),
        frequencies_hz,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distributions_normalized() {
        let d = energy_distribution(15.0);
        let area_d = trapezoid(&d.deuteron, &d.energies_kev);
        let area_t = trapezoid(&d.triton, &d.energies_kev);
        assert!((area_d - 1.0).abs() < 1e-12);
        assert!((area_t - 1.0).abs() < 1e-12);
        assert_eq!(d.energies_kev.len(), 200);
    }

    #[test]
    fn test_distribution_nonnegative_with_interior_mode() {
        let d = energy_distribution(10.0);
        let mut max_idx = 0;
        for (i, &v) in d.deuteron.iter().enumerate() {
            assert!(v >= 0.0);
            if v > d.deuteron[max_idx] {
                max_idx = i;
            }
        }
        // The MB mode sits at T/2 = 5 keV, well inside the grid
        assert!(max_idx > 0 && max_idx < d.deuteron.len() - 1);
    }

    #[test]
    fn test_spectrum_peaks_at_line_centres() {
        let c = PhysicsConstants::default();
        let s = harmonic_spectrum(&c, 0.8, 0.7, 0.6);

        let argmax = |v: &[f64]| {
            v.iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                .map(|(i, _)| i)
                .unwrap()
        };
        let df = s.frequencies_hz[1] - s.frequencies_hz[0];

        let psi_peak = s.frequencies_hz[argmax(&s.psi_spectrum)];
        assert!((psi_peak - c.psi_frequency_hz()).abs() <= df);

        let phi_peak = s.frequencies_hz[argmax(&s.phi_spectrum)];
        assert!((phi_peak - c.phi_frequency_hz()).abs() <= df);

        let base_peak = s.frequencies_hz[argmax(&s.base_spectrum)];
        assert!((base_peak - c.freq_432).abs() <= df);
    }

    #[test]
    fn test_spectrum_amplitude_scaling() {
        let c = PhysicsConstants::default();
        let s = harmonic_spectrum(&c, 1.0, 0.5, 0.0);
        let max = |v: &[f64]| v.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max(&s.psi_spectrum) <= 1.0 + 1e-12);
        assert!(max(&s.phi_spectrum) <= 0.5 + 1e-12);
        assert_eq!(max(&s.base_spectrum), 0.0);
    }
}
