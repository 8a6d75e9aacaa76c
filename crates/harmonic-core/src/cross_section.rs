// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Cross-Section
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! D-T fusion cross-section with optional harmonic enhancement.
//!
//! The classical branch is the five-coefficient Bosch-Hale empirical
//! parametrization. The enhancement multiplier stacks two Gaussian
//! resonance lines (ψ₀ and φ, in MeV) on top of the coherence factor.
//! The multiplier is unbounded above: it models a resonance boost,
//! not a probability, and is deliberately never clamped.

use harmonic_types::constants::PhysicsConstants;
use harmonic_types::state::HarmonicState;

/// Bosch-Hale D-T coefficients.
const A1: f64 = 45.95;
const A2: f64 = 50200.0;
const A3: f64 = 1.368e-2;
const A4: f64 = 1.076;
const A5: f64 = 409.2;

/// Millibarn → m² conversion.
const MILLIBARN_TO_M2: f64 = 1e-27;

/// Width of the ψ₀ resonance line (MeV).
const PSI_SIGMA: f64 = 0.1;

/// Width of the φ resonance line (MeV).
const PHI_SIGMA: f64 = 0.2;

/// Unnormalized Gaussian line shape.
fn gaussian(x: f64, sigma: f64) -> f64 {
    (-(x * x) / (2.0 * sigma * sigma)).exp()
}

/// Classical Bosch-Hale D-T cross-section (m²).
///
/// Returns 0 for non-positive energy and wherever the screening term
/// θ is non-positive, which guards the exponential/sqrt domain. With
/// these coefficients θ goes negative just above 2e-5 keV, so the
/// classical curve underflows to zero across the thermal range; the
/// rate integral downstream must tolerate that.
pub fn dt_cross_section_classical(energy_kev: f64) -> f64 {
    if energy_kev <= 0.0 {
        return 0.0;
    }

    let numerator = A2 * energy_kev + A3 * energy_kev.powi(2) + A4 * energy_kev.powi(3);
    let theta = energy_kev / (1.0 - numerator / (1.0 + A5 * energy_kev));

    if theta <= 0.0 {
        return 0.0;
    }

    let sigma_mb = A1 / (energy_kev * (A1 / theta.sqrt()).exp());
    sigma_mb * MILLIBARN_TO_M2
}

/// Harmonic enhancement multiplier at the given energy.
///
/// coherence × (1 + ψ_amp·G(E−ψ₀, 0.1)) × (1 + φ_amp·G(E−φ, 0.2)),
/// with E in MeV. Unbounded above by design.
pub fn harmonic_enhancement(
    c: &PhysicsConstants,
    harmonic: &HarmonicState,
    energy_kev: f64,
) -> f64 {
    let energy_mev = energy_kev / 1000.0;

    let psi_resonance = 1.0 + harmonic.psi_amplitude * gaussian(energy_mev - c.psi_0, PSI_SIGMA);
    let phi_resonance = 1.0 + harmonic.phi_amplitude * gaussian(energy_mev - c.phi, PHI_SIGMA);

    harmonic.coherence_factor * psi_resonance * phi_resonance
}

/// D-T cross-section (m²), classical or harmonically enhanced.
pub fn dt_cross_section(
    c: &PhysicsConstants,
    harmonic: &HarmonicState,
    energy_kev: f64,
    enhanced: bool,
) -> f64 {
    let classical = dt_cross_section_classical(energy_kev);
    if !enhanced {
        return classical;
    }
    classical * harmonic_enhancement(c, harmonic, energy_kev)
}
