// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adaptive Simpson quadrature with an error estimate.
//!
//! Tolerance convention matches `scipy.integrate.quad` defaults
//! (epsabs = epsrel = 1.49e-8). Non-convergence is reported through
//! the result, never raised: a segment that exhausts the subdivision
//! depth contributes its best estimate and clears the `converged`
//! flag. Integrands that are exactly zero over stretches of the
//! domain (cross-section underflow) terminate immediately there.

/// Default absolute and relative tolerance.
pub const QUAD_EPS: f64 = 1.49e-8;

/// Maximum recursion depth per segment. 50 halvings reduce any
/// interval below the f64 spacing of its endpoints.
const MAX_DEPTH: usize = 50;

/// Outcome of an adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    /// Best estimate of the integral.
    pub value: f64,
    /// Accumulated absolute error estimate.
    pub abs_error: f64,
    /// False when any segment exhausted the subdivision depth
    /// before meeting the tolerance.
    pub converged: bool,
    /// Number of integrand evaluations performed.
    pub evaluations: usize,
}

/// Integrate `f` over [a, b] with the default tolerance.
pub fn adaptive_quadrature<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> Quadrature {
    adaptive_quadrature_tol(f, a, b, QUAD_EPS, QUAD_EPS)
}

/// Integrate `f` over [a, b] to the requested tolerances.
///
/// The per-segment acceptance test is the classic Richardson
/// criterion |S₂ − S₁| ≤ 15·tol with the tolerance halved at each
/// subdivision, and the accepted value is the extrapolated
/// S₂ + (S₂ − S₁)/15.
pub fn adaptive_quadrature_tol<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Quadrature {
    if !(b > a) {
        return Quadrature {
            value: 0.0,
            abs_error: 0.0,
            converged: true,
            evaluations: 0,
        };
    }

    let mut ctx = Context {
        f,
        evaluations: 0,
        abs_error: 0.0,
        converged: true,
    };

    let fa = ctx.eval(a);
    let fb = ctx.eval(b);
    let m = 0.5 * (a + b);
    let fm = ctx.eval(m);

    // Coarse whole-interval estimate seeds the relative tolerance.
    let whole = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
    let tol = abs_tol.max(rel_tol * whole.abs());

    let value = ctx.simpson(a, b, fa, fm, fb, whole, tol, MAX_DEPTH);

    Quadrature {
        value,
        abs_error: ctx.abs_error,
        converged: ctx.converged,
        evaluations: ctx.evaluations,
    }
}

struct Context<F> {
    f: F,
    evaluations: usize,
    abs_error: f64,
    converged: bool,
}

impl<F: Fn(f64) -> f64> Context<F> {
    fn eval(&mut self, x: f64) -> f64 {
        self.evaluations += 1;
        (self.f)(x)
    }

    #[allow(clippy::too_many_arguments)]
    fn simpson(
        &mut self,
        a: f64,
        b: f64,
        fa: f64,
        fm: f64,
        fb: f64,
        whole: f64,
        tol: f64,
        depth: usize,
    ) -> f64 {
        let m = 0.5 * (a + b);
        let lm = 0.5 * (a + m);
        let rm = 0.5 * (m + b);
        let flm = self.eval(lm);
        let frm = self.eval(rm);

        let left = (m - a) / 6.0 * (fa + 4.0 * flm + fm);
        let right = (b - m) / 6.0 * (fm + 4.0 * frm + fb);
        let delta = left + right - whole;

        if delta.abs() <= 15.0 * tol || m <= a || m >= b {
            self.abs_error += delta.abs() / 15.0;
            return left + right + delta / 15.0;
        }

        if depth == 0 {
            // Subdivision exhausted: keep the refined estimate and
            // flag the result as low-confidence.
            self.converged = false;
            self.abs_error += delta.abs();
            return left + right + delta / 15.0;
        }

        let half_tol = 0.5 * tol;
        self.simpson(a, m, fa, flm, fm, left, half_tol, depth - 1)
            + self.simpson(m, b, fm, frm, fb, right, half_tol, depth - 1)
    }
}

/// Trapezoidal rule over sampled data. `x` and `y` must have equal
/// length; fewer than two samples integrate to zero.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len(), "trapezoid requires matching lengths");
    if y.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 1..y.len() {
        total += 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_quadratic_exact() {
        // ∫₀¹ x² dx = 1/3; Simpson is exact for cubics
        let q = adaptive_quadrature(|x| x * x, 0.0, 1.0);
        assert!((q.value - 1.0 / 3.0).abs() < 1e-12, "got {}", q.value);
        assert!(q.converged);
    }

    #[test]
    fn test_sine_over_half_period() {
        // ∫₀^π sin x dx = 2
        let q = adaptive_quadrature(f64::sin, 0.0, PI);
        assert!((q.value - 2.0).abs() < 1e-9, "got {}", q.value);
        assert!(q.converged);
        assert!(q.abs_error < 1e-7);
    }

    #[test]
    fn test_exponential_tail() {
        // ∫₀⁵⁰ e⁻ˣ dx = 1 - e⁻⁵⁰ ≈ 1, integrand underflows on the tail
        let q = adaptive_quadrature(|x| (-x).exp(), 0.0, 50.0);
        assert!((q.value - 1.0).abs() < 1e-7, "got {}", q.value);
        assert!(q.converged);
    }

    #[test]
    fn test_zero_integrand() {
        let q = adaptive_quadrature(|_| 0.0, 0.1, 1000.0);
        assert_eq!(q.value, 0.0);
        assert_eq!(q.abs_error, 0.0);
        assert!(q.converged);
    }

    #[test]
    fn test_piecewise_zero_stretch() {
        // Zero over [0, 1), quadratic afterwards; the dead stretch
        // must not stall or distort the result.
        let f = |x: f64| if x < 1.0 { 0.0 } else { (x - 1.0) * (x - 1.0) };
        let q = adaptive_quadrature(f, 0.0, 2.0);
        assert!((q.value - 1.0 / 3.0).abs() < 1e-6, "got {}", q.value);
    }

    #[test]
    fn test_empty_interval() {
        let q = adaptive_quadrature(|x| x, 1.0, 1.0);
        assert_eq!(q.value, 0.0);
        assert!(q.converged);
        let q = adaptive_quadrature(|x| x, 2.0, 1.0);
        assert_eq!(q.value, 0.0);
    }

    #[test]
    fn test_sharp_gaussian_peak() {
        // Narrow resonance line: σ = 0.01 inside a unit interval.
        // ∫ exp(-x²/2σ²) dx over (-∞,∞) = σ√(2π); the tails outside
        // [0,1] are negligible.
        let sigma = 0.01_f64;
        let q = adaptive_quadrature(
            |x: f64| (-(x - 0.5) * (x - 0.5) / (2.0 * sigma * sigma)).exp(),
            0.0,
            1.0,
        );
        let expected = sigma * (2.0 * PI).sqrt();
        assert!(
            (q.value - expected).abs() / expected < 1e-6,
            "got {}, expected {}",
            q.value,
            expected
        );
    }

    #[test]
    fn test_trapezoid_linear() {
        // ∫₀¹ x dx = 1/2, exact for the trapezoidal rule
        let x: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
        let y = x.clone();
        assert!((trapezoid(&y, &x) - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_trapezoid_short_input() {
        assert_eq!(trapezoid(&[], &[]), 0.0);
        assert_eq!(trapezoid(&[1.0], &[0.0]), 0.0);
    }
}
