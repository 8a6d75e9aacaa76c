// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Reports
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Terminal artifacts: the validation report, the telemetry document
//! and the sweep CSV table.
//!
//! Writers go through scoped buffered handles, so every exit path
//! (including early `?` returns) flushes and closes the file.

use crate::consistency::{run_consistency_check, ConsistencyReport};
use crate::metrics::{calculate_performance_metrics, PerformanceMetrics};
use chrono::Utc;
use harmonic_core::simulator::HarmonicFusionSimulator;
use harmonic_core::telemetry::TelemetrySeries;
use harmonic_math::stats::{mean, min_max, std_dev};
use harmonic_types::config::SimulationConfig;
use harmonic_types::constants::PhysicsConstants;
use harmonic_types::error::{HarmonicError, HarmonicResult};
use harmonic_types::state::SweepResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Overall status literals of the validation report.
pub const STATUS_CONSISTENT: &str = "MATHEMATICALLY_CONSISTENT";
pub const STATUS_ERRORS: &str = "ERRORS_DETECTED";

/// Minimum telemetry length for a meaningful analysis report.
const MIN_REPORT_SAMPLES: usize = 10;

/// Carrier frequencies derived from the harmonic constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFrequencies {
    #[serde(rename = "psi_frequency_Hz")]
    pub psi_frequency_hz: f64,
    #[serde(rename = "phi_frequency_Hz")]
    pub phi_frequency_hz: f64,
    #[serde(rename = "combined_frequency_Hz")]
    pub combined_frequency_hz: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathematicalConstants {
    pub psi_0: f64,
    pub phi: f64,
    pub freq_432: f64,
    pub derived_frequencies: DerivedFrequencies,
}

impl MathematicalConstants {
    pub fn from_constants(c: &PhysicsConstants) -> Self {
        MathematicalConstants {
            psi_0: c.psi_0,
            phi: c.phi,
            freq_432: c.freq_432,
            derived_frequencies: DerivedFrequencies {
                psi_frequency_hz: c.psi_frequency_hz(),
                phi_frequency_hz: c.phi_frequency_hz(),
                combined_frequency_hz: c.combined_frequency_hz(),
            },
        }
    }
}

/// Terminal validation artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub validation_timestamp: String,
    pub mathematical_constants: MathematicalConstants,
    pub mathematical_consistency: ConsistencyReport,
    pub performance_metrics: PerformanceMetrics,
    pub corrections_applied: Vec<String>,
    pub validation_status: String,
}

/// Run the consistency check and performance metrics and assemble
/// the validation report.
pub fn generate_validation_report(
    c: &PhysicsConstants,
    config: &SimulationConfig,
) -> ValidationReport {
    let consistency = run_consistency_check(c, &config.consistency);
    let performance = calculate_performance_metrics(c, &config.consistency, &config.alpha_values);

    let validation_status = if consistency.consistency_validated {
        STATUS_CONSISTENT
    } else {
        STATUS_ERRORS
    };

    ValidationReport {
        validation_timestamp: Utc::now().to_rfc3339(),
        mathematical_constants: MathematicalConstants::from_constants(c),
        mathematical_consistency: consistency,
        performance_metrics: performance,
        corrections_applied: vec![
            "Enhanced harmonic field clamped to [0,1] range".to_string(),
            "Enhanced harmonic fusion probability guaranteed [0,1]".to_string(),
            "Mathematical validation for all probability functions".to_string(),
            "Resonance peak detection with corrected calculations".to_string(),
        ],
        validation_status: validation_status.to_string(),
    }
}

/// Performance block of the telemetry analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPerformance {
    pub average_enhancement_factor: f64,
    pub maximum_enhancement_factor: f64,
    #[serde(rename = "average_power_output_MW")]
    pub average_power_output_mw: f64,
    #[serde(rename = "maximum_power_output_MW")]
    pub maximum_power_output_mw: f64,
    pub energy_efficiency: f64,
}

/// Stability block: 1 − σ/μ per channel plus the beta range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityMetrics {
    pub temperature_stability: f64,
    pub density_stability: f64,
    pub plasma_beta_range: (f64, f64),
}

/// Resonance block: counts of tagged peaks in the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceSummary {
    pub peak_count: usize,
    pub psi_resonances: usize,
    pub phi_resonances: usize,
    pub phi_squared_resonances: usize,
    pub max_peak_enhancement: f64,
}

/// Summary appended to the telemetry document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub simulation_duration: f64,
    pub data_points: usize,
    pub performance_metrics: AnalysisPerformance,
    pub stability_metrics: StabilityMetrics,
    pub resonance_analysis: ResonanceSummary,
    pub mathematical_constants: MathematicalConstants,
}

/// Reduce a simulator's telemetry to the analysis report.
/// Fails with `InsufficientData` below the minimum sample count.
pub fn generate_analysis_report(
    sim: &HarmonicFusionSimulator,
) -> HarmonicResult<AnalysisReport> {
    let telemetry = &sim.telemetry;
    if telemetry.len() < MIN_REPORT_SAMPLES {
        return Err(HarmonicError::InsufficientData {
            have: telemetry.len(),
            need: MIN_REPORT_SAMPLES,
        });
    }

    let avg_power = mean(&telemetry.power_output);
    let (_, max_power) = min_max(&telemetry.power_output);
    let (_, max_enhancement) = min_max(&telemetry.enhancement_factor);

    let temp_mean = mean(&telemetry.plasma_temp);
    let density_mean = mean(&telemetry.plasma_density);

    let peaks = sim.scan_peaks();
    let max_peak_enhancement = peaks
        .iter()
        .map(|p| p.enhancement_factor)
        .fold(0.0, f64::max);

    Ok(AnalysisReport {
        simulation_duration: sim.time,
        data_points: telemetry.len(),
        performance_metrics: AnalysisPerformance {
            average_enhancement_factor: mean(&telemetry.enhancement_factor),
            maximum_enhancement_factor: max_enhancement,
            average_power_output_mw: avg_power,
            maximum_power_output_mw: max_power,
            energy_efficiency: avg_power / (avg_power * 0.1).max(1.0),
        },
        stability_metrics: StabilityMetrics {
            temperature_stability: 1.0 - std_dev(&telemetry.plasma_temp) / temp_mean,
            density_stability: 1.0 - std_dev(&telemetry.plasma_density) / density_mean,
            plasma_beta_range: min_max(&telemetry.plasma_beta),
        },
        resonance_analysis: ResonanceSummary {
            peak_count: peaks.len(),
            psi_resonances: peaks.iter().filter(|p| p.is_psi_resonance).count(),
            phi_resonances: peaks.iter().filter(|p| p.is_phi_resonance).count(),
            phi_squared_resonances: peaks
                .iter()
                .filter(|p| p.is_phi_squared_resonance)
                .count(),
            max_peak_enhancement,
        },
        mathematical_constants: MathematicalConstants::from_constants(&sim.constants),
    })
}

/// Telemetry file layout: every channel as a named sequence plus the
/// embedded analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryDocument {
    #[serde(flatten)]
    pub series: TelemetrySeries,
    pub analysis_report: AnalysisReport,
}

/// Assemble the telemetry document for a finished run.
pub fn build_telemetry_document(
    sim: &HarmonicFusionSimulator,
) -> HarmonicResult<TelemetryDocument> {
    Ok(TelemetryDocument {
        series: sim.telemetry.clone(),
        analysis_report: generate_analysis_report(sim)?,
    })
}

/// Serialize any report as pretty JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> HarmonicResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::info!("report written to {}", path.display());
    Ok(())
}

/// Write the sweep table with the fixed column contract:
/// temperature_keV, magnetic_field_T, harmonic_amplitude,
/// enhancement_factor, power_output_MW, plasma_beta.
pub fn write_sweep_csv(results: &[SweepResult], path: &Path) -> HarmonicResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in results {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!("sweep table written to {} ({} rows)", path.display(), results.len());
    Ok(())
}

/// `prefix_YYYYmmdd_HHMMSS.ext` in the current directory.
pub fn timestamped_filename(prefix: &str, extension: &str) -> String {
    format!(
        "{prefix}_{}.{extension}",
        Utc::now().format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonic_types::config::RealtimePoint;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("harmonic_report_test_{name}"))
    }

    fn run_simulator(steps: usize) -> HarmonicFusionSimulator {
        let mut sim = HarmonicFusionSimulator::new(PhysicsConstants::default());
        for _ in 0..steps {
            sim.update(None, None, None).unwrap();
        }
        sim
    }

    #[test]
    fn test_validation_report_status_and_timestamp() {
        let c = PhysicsConstants::default();
        let report = generate_validation_report(&c, &SimulationConfig::default());
        assert_eq!(report.validation_status, STATUS_CONSISTENT);
        assert!(report.mathematical_consistency.consistency_validated);
        assert_eq!(report.corrections_applied.len(), 4);
        // ISO-8601 timestamp must parse back
        chrono::DateTime::parse_from_rfc3339(&report.validation_timestamp).unwrap();
    }

    #[test]
    fn test_validation_report_derived_frequencies() {
        let c = PhysicsConstants::default();
        let report = generate_validation_report(&c, &SimulationConfig::default());
        let df = &report.mathematical_constants.derived_frequencies;
        assert!((df.psi_frequency_hz - c.psi_0 * 432.0).abs() < 1e-9);
        assert!((df.phi_frequency_hz - c.phi * 432.0).abs() < 1e-9);
        assert!((df.combined_frequency_hz - c.psi_0 * c.phi * 432.0).abs() < 1e-9);
    }

    #[test]
    fn test_analysis_report_requires_ten_samples() {
        let sim = run_simulator(9);
        let err = generate_analysis_report(&sim).unwrap_err();
        assert!(matches!(
            err,
            HarmonicError::InsufficientData { have: 9, need: 10 }
        ));
        let sim = run_simulator(10);
        assert!(generate_analysis_report(&sim).is_ok());
    }

    #[test]
    fn test_analysis_report_contents() {
        let mut sim = HarmonicFusionSimulator::new(PhysicsConstants::default());
        sim.run_realtime(&RealtimePoint {
            duration_s: 1.0,
            ..RealtimePoint::default()
        })
        .unwrap();

        let report = generate_analysis_report(&sim).unwrap();
        assert_eq!(report.data_points, 100);
        assert!((report.simulation_duration - 1.0).abs() < 1e-9);
        // Sinusoidal temperature drive leaves stability below 1
        assert!(report.stability_metrics.temperature_stability < 1.0);
        assert!(report.stability_metrics.temperature_stability > 0.9);
        let (beta_min, beta_max) = report.stability_metrics.plasma_beta_range;
        assert!(beta_min <= beta_max);
    }

    #[test]
    fn test_telemetry_document_roundtrip_exact() {
        let sim = run_simulator(25);
        let doc = build_telemetry_document(&sim).unwrap();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let back: TelemetryDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc.series, back.series, "sequences must survive exactly");
        assert_eq!(doc.analysis_report.data_points, back.analysis_report.data_points);

        // Channels appear as top-level named sequences
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("time").is_some());
        assert!(value.get("enhancement_factor").is_some());
        assert!(value.get("analysis_report").is_some());
    }

    #[test]
    fn test_write_json_and_read_back() {
        let c = PhysicsConstants::default();
        let report = generate_validation_report(&c, &SimulationConfig::default());
        let path = scratch("validation.json");
        write_json(&report, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back: ValidationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.validation_status, report.validation_status);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_sweep_csv_layout() {
        let rows = vec![
            SweepResult {
                temperature_kev: 1.0,
                magnetic_field_t: 5.0,
                harmonic_amplitude: 0.1,
                enhancement_factor: 0.0,
                power_output_mw: 0.0,
                plasma_beta: 0.003,
            },
            SweepResult {
                temperature_kev: 2.0,
                magnetic_field_t: 6.0,
                harmonic_amplitude: 0.2,
                enhancement_factor: 0.0,
                power_output_mw: 0.0,
                plasma_beta: 0.004,
            },
        ];
        let path = scratch("sweep.csv");
        write_sweep_csv(&rows, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "temperature_keV,magnetic_field_T,harmonic_amplitude,enhancement_factor,power_output_MW,plasma_beta"
        );
        assert_eq!(lines.count(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_timestamped_filename_shape() {
        let name = timestamped_filename("fusion_telemetry", "json");
        assert!(name.starts_with("fusion_telemetry_"));
        assert!(name.ends_with(".json"));
        // prefix + _YYYYmmdd_HHMMSS + .json
        assert_eq!(name.len(), "fusion_telemetry_".len() + 15 + ".json".len());
    }
}
