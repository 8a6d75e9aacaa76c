// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical and harmonic constants for fusion calculations.
//!
//! The bundle is constructed once and passed explicitly to every
//! component. Nothing here is read from global state, so components
//! stay independently testable and sweeps can run in parallel.

use serde::{Deserialize, Serialize};

/// Harmonic ground constant ψ₀.
pub const PSI_0: f64 = 0.915670570874434;

/// Golden ratio φ.
pub const PHI: f64 = 1.618033988749895;

/// Base carrier frequency (Hz).
pub const FREQ_432: f64 = 432.0;

/// Immutable bundle of numeric parameters used by all models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConstants {
    /// Harmonic ground constant ψ₀.
    pub psi_0: f64,
    /// Golden ratio φ.
    pub phi: f64,
    /// Base carrier frequency (Hz).
    pub freq_432: f64,

    /// Boltzmann constant (eV/K).
    pub boltzmann_ev: f64,
    /// Electron rest mass (MeV/c²).
    pub electron_mass: f64,
    /// Proton rest mass (MeV/c²).
    pub proton_mass: f64,
    /// Deuteron rest mass (MeV/c²).
    pub deuteron_mass: f64,
    /// Triton rest mass (MeV/c²).
    pub triton_mass: f64,
    /// Alpha particle rest mass (MeV/c²).
    pub alpha_mass: f64,
    /// Neutron rest mass (MeV/c²).
    pub neutron_mass: f64,

    /// Fine-structure constant.
    pub fine_structure: f64,
    /// Coulomb constant (MeV·fm).
    pub coulomb_constant: f64,

    /// Plasma frequency coefficient sqrt(n_e/m_e) (rad/s).
    pub plasma_freq_coeff: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        PhysicsConstants {
            psi_0: PSI_0,
            phi: PHI,
            freq_432: FREQ_432,
            boltzmann_ev: 8.617e-5,
            electron_mass: 0.511,
            proton_mass: 938.3,
            deuteron_mass: 1875.6,
            triton_mass: 2808.4,
            alpha_mass: 3727.4,
            neutron_mass: 939.6,
            fine_structure: 1.0 / 137.036,
            coulomb_constant: 1.44,
            plasma_freq_coeff: 8.98e3,
        }
    }
}

impl PhysicsConstants {
    /// ψ₀-scaled carrier frequency (Hz).
    pub fn psi_frequency_hz(&self) -> f64 {
        self.psi_0 * self.freq_432
    }

    /// φ-scaled carrier frequency (Hz).
    pub fn phi_frequency_hz(&self) -> f64 {
        self.phi * self.freq_432
    }

    /// Combined ψ₀·φ carrier frequency (Hz).
    pub fn combined_frequency_hz(&self) -> f64 {
        self.psi_0 * self.phi * self.freq_432
    }

    /// φ², the second resonance window centre.
    pub fn phi_squared(&self) -> f64 {
        self.phi * self.phi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_named_constants() {
        let c = PhysicsConstants::default();
        assert_eq!(c.psi_0, PSI_0);
        assert_eq!(c.phi, PHI);
        assert_eq!(c.freq_432, FREQ_432);
    }

    #[test]
    fn test_derived_frequencies() {
        let c = PhysicsConstants::default();
        assert!((c.psi_frequency_hz() - 395.5696866177).abs() < 1e-6);
        assert!((c.phi_frequency_hz() - 698.9906831399).abs() < 1e-6);
        // ψ₀ < 1 < φ, so the combined frequency sits between the two
        assert!(c.combined_frequency_hz() > c.psi_frequency_hz());
        assert!(c.combined_frequency_hz() < c.phi_frequency_hz());
    }

    #[test]
    fn test_phi_squared_identity() {
        // φ² = φ + 1
        let c = PhysicsConstants::default();
        assert!((c.phi_squared() - (c.phi + 1.0)).abs() < 1e-12);
    }
}
