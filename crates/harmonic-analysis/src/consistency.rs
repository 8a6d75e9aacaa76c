// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Consistency Check
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mathematical consistency validation.
//!
//! Samples a dense energy grid and asserts that every probability and
//! field function stays inside [0, 1] and that the traditional curve
//! is monotonically non-decreasing. Violations are collected into
//! human-readable messages; the check itself never fails.

use harmonic_core::field::{
    basic_field, basic_fusion_probability, enhanced_field, enhanced_fusion_probability,
    traditional_probability,
};
use harmonic_math::stats::min_max;
use harmonic_types::config::ConsistencyConfig;
use harmonic_types::constants::PhysicsConstants;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Coupling strength of the basic probability under test.
const BASIC_ALPHA: f64 = 5.0;

/// Coupling strength of the enhanced probability under test.
const ENHANCED_ALPHA: f64 = 10.0;

/// Range and monotonicity summary of the traditional curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityCheck {
    pub min: f64,
    pub max: f64,
    pub valid_range: bool,
    pub monotonic_increasing: bool,
}

/// Range summary of a field function and its derived probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProbabilityCheck {
    pub probability_min: f64,
    pub probability_max: f64,
    pub probability_valid_range: bool,
    pub field_min: f64,
    pub field_max: f64,
    pub field_valid_range: bool,
}

/// Full consistency-check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub energy_range: (f64, f64),
    pub traditional_fusion: ProbabilityCheck,
    pub harmonic_basic: FieldProbabilityCheck,
    pub harmonic_enhanced: FieldProbabilityCheck,
    pub mathematical_errors: Vec<String>,
    pub consistency_validated: bool,
}

fn in_unit_interval(values: &[f64]) -> bool {
    values.iter().all(|&v| (0.0..=1.0).contains(&v))
}

fn non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn field_check(fields: &[f64], probabilities: &[f64]) -> FieldProbabilityCheck {
    let (field_min, field_max) = min_max(fields);
    let (probability_min, probability_max) = min_max(probabilities);
    FieldProbabilityCheck {
        probability_min,
        probability_max,
        probability_valid_range: in_unit_interval(probabilities),
        field_min,
        field_max,
        field_valid_range: in_unit_interval(fields),
    }
}

/// Run the consistency check over the configured energy grid.
pub fn run_consistency_check(
    c: &PhysicsConstants,
    config: &ConsistencyConfig,
) -> ConsistencyReport {
    let energies = Array1::linspace(config.energy_min_mev, config.energy_max_mev, config.samples);

    let traditional: Vec<f64> = energies.iter().map(|&e| traditional_probability(e)).collect();
    let basic_fields: Vec<f64> = energies.iter().map(|&e| basic_field(c, e, 0.0)).collect();
    let basic_probs: Vec<f64> = energies
        .iter()
        .map(|&e| basic_fusion_probability(c, e, BASIC_ALPHA))
        .collect();
    let enhanced_fields: Vec<f64> = energies.iter().map(|&e| enhanced_field(c, e, 0.0)).collect();
    let enhanced_probs: Vec<f64> = energies
        .iter()
        .map(|&e| enhanced_fusion_probability(c, e, ENHANCED_ALPHA))
        .collect();

    let (trad_min, trad_max) = min_max(&traditional);
    let traditional_fusion = ProbabilityCheck {
        min: trad_min,
        max: trad_max,
        valid_range: in_unit_interval(&traditional),
        monotonic_increasing: non_decreasing(&traditional),
    };
    let harmonic_basic = field_check(&basic_fields, &basic_probs);
    let harmonic_enhanced = field_check(&enhanced_fields, &enhanced_probs);

    let mut mathematical_errors = Vec::new();
    if !traditional_fusion.valid_range {
        mathematical_errors.push("Traditional fusion probabilities outside [0,1]".to_string());
    }
    if !traditional_fusion.monotonic_increasing {
        mathematical_errors.push("Traditional fusion curve not monotonic".to_string());
    }
    if !harmonic_basic.probability_valid_range {
        mathematical_errors.push("Basic harmonic probabilities outside [0,1]".to_string());
    }
    if !harmonic_basic.field_valid_range {
        mathematical_errors.push("Basic harmonic fields outside [0,1]".to_string());
    }
    if !harmonic_enhanced.probability_valid_range {
        mathematical_errors.push("Enhanced harmonic probabilities outside [0,1]".to_string());
    }
    if !harmonic_enhanced.field_valid_range {
        mathematical_errors.push("Enhanced harmonic fields outside [0,1]".to_string());
    }

    let consistency_validated = mathematical_errors.is_empty();
    if consistency_validated {
        log::info!("mathematical consistency check passed");
    } else {
        for error in &mathematical_errors {
            log::error!("consistency violation: {error}");
        }
    }

    ConsistencyReport {
        energy_range: (config.energy_min_mev, config.energy_max_mev),
        traditional_fusion,
        harmonic_basic,
        harmonic_enhanced,
        mathematical_errors,
        consistency_validated,
    }
}
