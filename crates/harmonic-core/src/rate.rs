// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Reaction Rate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermally averaged D-T reaction rate and power output.
//!
//! Integrates σ(E)·v_rel(E)·f_MB(E, T) over the energy distribution
//! with adaptive quadrature. Negative or zero temperature is a
//! validation error; a non-converged integral is a flagged result,
//! never a panic.

use crate::cross_section::dt_cross_section;
use harmonic_math::quadrature::{adaptive_quadrature, Quadrature};
use harmonic_types::constants::PhysicsConstants;
use harmonic_types::error::{HarmonicError, HarmonicResult};
use harmonic_types::state::{HarmonicState, PlasmaState};
use std::f64::consts::PI;

/// Lower integration bound (keV).
const E_MIN_KEV: f64 = 0.1;

/// Upper integration bound as a multiple of the temperature.
const E_MAX_FACTOR: f64 = 50.0;

/// keV → Joule.
const KEV_TO_J: f64 = 1.602e-16;

/// MeV → Joule.
const MEV_TO_J: f64 = 1.602e-13;

/// Atomic mass unit (kg); pairs with the deuteron mass in MeV to
/// reproduce the reference relative-velocity scale.
const AMU_KG: f64 = 1.66e-27;

/// Energy released per D-T reaction (MeV).
const REACTION_ENERGY_MEV: f64 = 17.6;

/// Fixed reactor volume (m³).
const REACTOR_VOLUME_M3: f64 = 100.0;

/// Volumetric rate and power with integration diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateResult {
    /// Reactions per m³ per second.
    pub rate_per_m3_s: f64,
    /// Total power for the fixed reactor volume (MW).
    pub power_mw: f64,
    /// Absolute error estimate of the rate-coefficient integral.
    pub quad_error: f64,
    /// False when the integrator hit its subdivision limit.
    pub converged: bool,
}

/// Maxwell-Boltzmann averaged reaction rate and power output for a
/// 50/50 D-T mixture.
pub fn reaction_rate(
    c: &PhysicsConstants,
    plasma: &PlasmaState,
    harmonic: &HarmonicState,
) -> HarmonicResult<RateResult> {
    let temp_kev = plasma.temperature_kev;
    if temp_kev <= 0.0 {
        return Err(HarmonicError::PhysicsViolation(format!(
            "reaction rate requires positive temperature, got {temp_kev} keV"
        )));
    }

    let quad = rate_coefficient_integral(c, harmonic, temp_kev);
    let rate_coeff = quad.value * (2.0 / (PI * temp_kev)).sqrt();

    // 50/50 D-T mixture
    let n_d = plasma.density_m3 / 2.0;
    let n_t = plasma.density_m3 / 2.0;
    let rate = n_d * n_t * rate_coeff;

    let power_density_w_m3 = rate * REACTION_ENERGY_MEV * MEV_TO_J;
    let power_mw = power_density_w_m3 * REACTOR_VOLUME_M3 / 1e6;

    if !quad.converged {
        log::warn!(
            "rate integral did not converge at T = {temp_kev} keV (error estimate {:.3e})",
            quad.abs_error
        );
    }

    Ok(RateResult {
        rate_per_m3_s: rate,
        power_mw,
        quad_error: quad.abs_error,
        converged: quad.converged,
    })
}

/// σ·v·f_MB integral over [E_MIN, 50·T] keV.
fn rate_coefficient_integral(
    c: &PhysicsConstants,
    harmonic: &HarmonicState,
    temp_kev: f64,
) -> Quadrature {
    let integrand = |energy_kev: f64| {
        let sigma = dt_cross_section(c, harmonic, energy_kev, true);
        let v_rel = (2.0 * energy_kev * KEV_TO_J / (c.deuteron_mass * AMU_KG)).sqrt();
        let mb = (energy_kev / temp_kev).sqrt() * (-energy_kev / temp_kev).exp();
        sigma * v_rel * mb
    };
    adaptive_quadrature(integrand, E_MIN_KEV, E_MAX_FACTOR * temp_kev)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (PhysicsConstants, PlasmaState, HarmonicState) {
        (
            PhysicsConstants::default(),
            PlasmaState::new(15.0, 1e20, 12.0),
            HarmonicState::default(),
        )
    }

    #[test]
    fn test_negative_temperature_is_validation_error() {
        let (c, mut plasma, h) = fixtures();
        plasma.temperature_kev = -1.0;
        let err = reaction_rate(&c, &plasma, &h).unwrap_err();
        assert!(matches!(err, HarmonicError::PhysicsViolation(_)));
    }

    #[test]
    fn test_zero_temperature_is_validation_error() {
        let (c, mut plasma, h) = fixtures();
        plasma.temperature_kev = 0.0;
        assert!(reaction_rate(&c, &plasma, &h).is_err());
    }

    #[test]
    fn test_rate_over_underflowed_cross_section() {
        // The classical cross-section underflows to zero across the
        // whole thermal range, so the integrand is identically zero.
        // The integral must terminate cleanly with a zero, converged
        // result rather than stalling or erroring.
        let (c, plasma, h) = fixtures();
        let r = reaction_rate(&c, &plasma, &h).unwrap();
        assert!(r.rate_per_m3_s.abs() < 1e-30);
        assert!(r.power_mw.abs() < 1e-30);
        assert!(r.converged);
        assert!(r.quad_error.is_finite());
    }

    #[test]
    fn test_rate_finite_over_temperature_sweep() {
        let (c, mut plasma, h) = fixtures();
        for t in [0.5, 1.0, 5.0, 10.0, 20.0, 100.0] {
            plasma.temperature_kev = t;
            let r = reaction_rate(&c, &plasma, &h).unwrap();
            assert!(r.rate_per_m3_s.is_finite());
            assert!(r.power_mw.is_finite());
            assert!(r.power_mw >= 0.0);
        }
    }

    #[test]
    fn test_rate_scales_with_density_squared() {
        // With σ ≡ 0 both rates are zero; the invariant still holds
        // trivially, and this guards the (n/2)² wiring if the
        // parametrization is ever swapped for one with support.
        let (c, mut plasma, h) = fixtures();
        let r1 = reaction_rate(&c, &plasma, &h).unwrap();
        plasma.density_m3 *= 2.0;
        let r2 = reaction_rate(&c, &plasma, &h).unwrap();
        assert!((r2.rate_per_m3_s - 4.0 * r1.rate_per_m3_s).abs() < 1e-20);
    }
}
