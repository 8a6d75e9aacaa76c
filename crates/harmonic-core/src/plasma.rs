// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Plasma Scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form plasma parameter derivation.
//!
//! Density is the base value modulated by two harmonic sinusoids of
//! the simulation clock; pressure, beta and confinement follow from
//! scaling laws. Nothing here is clamped: out-of-range values are
//! accepted model behaviour, not defects.

use harmonic_types::constants::PhysicsConstants;
use harmonic_types::state::PlasmaState;
use std::f64::consts::PI;

/// Base plasma density (m⁻³).
const BASE_DENSITY_M3: f64 = 1e20;

/// keV → Joule, for the pressure conversion n·T.
const KEV_TO_J: f64 = 1.602e-16;

/// Derive the full plasma state from the primary inputs at the given
/// simulation time.
pub fn derive_plasma_state(
    c: &PhysicsConstants,
    temp_kev: f64,
    b_field_t: f64,
    harmonic_amp: f64,
    sim_time: f64,
) -> PlasmaState {
    // Harmonic density modulation: ψ₀ at full rate, φ at a tenth
    let psi_mod = 1.0 + harmonic_amp * (2.0 * PI * c.psi_0 * sim_time).sin();
    let phi_mod = 1.0 + harmonic_amp * (2.0 * PI * c.phi * sim_time / 10.0).sin();
    let density = BASE_DENSITY_M3 * psi_mod * phi_mod;

    let pressure = density * temp_kev * KEV_TO_J;

    // Magnetic pressure B²/2μ₀
    let b_pressure = b_field_t * b_field_t / (2.0 * 4e-7 * PI);
    let beta = pressure / b_pressure;

    // Empirical energy confinement scaling
    let confinement_time = 0.048
        * (density / 1e20).powf(0.6)
        * (b_field_t / 10.0).powf(0.8)
        * (temp_kev / 10.0).powf(0.5);

    PlasmaState {
        temperature_kev: temp_kev,
        density_m3: density,
        magnetic_field_t: b_field_t,
        pressure_pa: pressure,
        beta,
        confinement_time_s: confinement_time,
    }
}
