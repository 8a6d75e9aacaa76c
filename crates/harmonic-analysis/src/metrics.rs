// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Performance Metrics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-α performance metrics against the traditional baseline.

use harmonic_core::field::{
    basic_fusion_probability, enhanced_fusion_probability, traditional_probability,
};
use harmonic_core::resonance::{scan_resonance_windows, ResonanceWindows, SCAN_WINDOW_MEV};
use harmonic_math::stats::{argmax, mean, min_max};
use harmonic_types::config::ConsistencyConfig;
use harmonic_types::constants::PhysicsConstants;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Average/maximum probability and enhancement for one coupling α.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaMetrics {
    pub average_probability: f64,
    pub maximum_probability: f64,
    pub average_enhancement: f64,
    pub maximum_enhancement: f64,
}

/// Traditional-probability baseline over the test grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraditionalBaseline {
    pub average_probability: f64,
    pub maximum_probability: f64,
    pub energy_at_max: f64,
}

/// Winner of the per-α comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementSummary {
    pub optimal_alpha: Option<f64>,
    pub maximum_average_enhancement: f64,
    pub traditional_baseline: f64,
}

/// Full performance-metrics block of the validation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub traditional: TraditionalBaseline,
    pub harmonic_basic: BTreeMap<String, AlphaMetrics>,
    pub harmonic_enhanced: BTreeMap<String, AlphaMetrics>,
    pub enhancement_factors: EnhancementSummary,
    pub resonance_analysis: ResonanceWindows,
}

fn ratio(value: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        value / baseline
    } else {
        0.0
    }
}

/// Evaluate every probability model over the consistency grid for
/// each configured α and derive enhancement ratios.
pub fn calculate_performance_metrics(
    c: &PhysicsConstants,
    grid: &ConsistencyConfig,
    alpha_values: &[f64],
) -> PerformanceMetrics {
    let energies: Vec<f64> =
        Array1::linspace(grid.energy_min_mev, grid.energy_max_mev, grid.samples).to_vec();

    let traditional: Vec<f64> = energies.iter().map(|&e| traditional_probability(e)).collect();
    let traditional_avg = mean(&traditional);
    let (_, traditional_max) = min_max(&traditional);
    let energy_at_max = argmax(&traditional).map(|i| energies[i]).unwrap_or(0.0);

    let mut harmonic_basic = BTreeMap::new();
    let mut harmonic_enhanced = BTreeMap::new();

    for &alpha in alpha_values {
        let basic: Vec<f64> = energies
            .iter()
            .map(|&e| basic_fusion_probability(c, e, alpha))
            .collect();
        let enhanced: Vec<f64> = energies
            .iter()
            .map(|&e| enhanced_fusion_probability(c, e, alpha))
            .collect();

        let basic_avg = mean(&basic);
        let (_, basic_max) = min_max(&basic);
        let enhanced_avg = mean(&enhanced);
        let (_, enhanced_max) = min_max(&enhanced);

        let key = format!("alpha_{alpha}");
        harmonic_basic.insert(
            key.clone(),
            AlphaMetrics {
                average_probability: basic_avg,
                maximum_probability: basic_max,
                average_enhancement: ratio(basic_avg, traditional_avg),
                maximum_enhancement: ratio(basic_max, traditional_max),
            },
        );
        harmonic_enhanced.insert(
            key,
            AlphaMetrics {
                average_probability: enhanced_avg,
                maximum_probability: enhanced_max,
                average_enhancement: ratio(enhanced_avg, traditional_avg),
                maximum_enhancement: ratio(enhanced_max, traditional_max),
            },
        );
    }

    // Optimal α: highest average enhancement of the enhanced model
    let mut optimal_alpha = None;
    let mut best_enhancement = 0.0;
    for &alpha in alpha_values {
        let key = format!("alpha_{alpha}");
        if let Some(m) = harmonic_enhanced.get(&key) {
            if m.average_enhancement > best_enhancement {
                best_enhancement = m.average_enhancement;
                optimal_alpha = Some(alpha);
            }
        }
    }

    let resonance_analysis = scan_resonance_windows(c, &energies, SCAN_WINDOW_MEV);

    PerformanceMetrics {
        traditional: TraditionalBaseline {
            average_probability: traditional_avg,
            maximum_probability: traditional_max,
            energy_at_max,
        },
        harmonic_basic,
        harmonic_enhanced,
        enhancement_factors: EnhancementSummary {
            optimal_alpha,
            maximum_average_enhancement: best_enhancement,
            traditional_baseline: traditional_avg,
        },
        resonance_analysis,
    }
}

/// Default grid shared with the consistency check.
pub fn default_performance_metrics(c: &PhysicsConstants) -> PerformanceMetrics {
    calculate_performance_metrics(c, &ConsistencyConfig::default(), &[1.0, 5.0, 10.0])
}
