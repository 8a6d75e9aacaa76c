// ─────────────────────────────────────────────────────────────────────
// SCPN Harmonic Fusion — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
/// Maps 1:1 to the harmonic_config.json schema; every field carries a
/// default so a partial file (or none at all) still yields a runnable
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_simulation_name")]
    pub simulation_name: String,
    /// Fixed step size of the simulation clock (s).
    #[serde(default = "default_time_step")]
    pub time_step_s: f64,
    #[serde(default)]
    pub initial: InitialPoint,
    #[serde(default)]
    pub realtime: RealtimePoint,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub consistency: ConsistencyConfig,
    /// Coupling strengths probed by the performance metrics.
    #[serde(default = "default_alpha_values")]
    pub alpha_values: Vec<f64>,
}

/// Operating point a fresh simulator starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialPoint {
    #[serde(rename = "temperature_keV")]
    pub temperature_kev: f64,
    #[serde(rename = "magnetic_field_T")]
    pub magnetic_field_t: f64,
}

/// Operating point and drive amplitudes for the realtime run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimePoint {
    #[serde(rename = "temperature_keV")]
    pub temperature_kev: f64,
    #[serde(rename = "magnetic_field_T")]
    pub magnetic_field_t: f64,
    pub psi_amplitude: f64,
    pub phi_amplitude: f64,
    pub base_amplitude: f64,
    pub duration_s: f64,
}

/// One discretized parameter axis of the sweep grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl RangeSpec {
    /// Evenly spaced values over [min, max], endpoints included.
    pub fn values(&self) -> Vec<f64> {
        if self.points <= 1 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (self.points - 1) as f64;
        (0..self.points).map(|i| self.min + step * i as f64).collect()
    }
}

/// Cartesian sweep grid over the three drive parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub temperature: RangeSpec,
    pub magnetic_field: RangeSpec,
    pub harmonic_amplitude: RangeSpec,
    /// Steps run at each grid point before averaging.
    #[serde(default = "default_steps_per_point")]
    pub steps_per_point: usize,
}

/// Dense energy grid for the mathematical consistency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyConfig {
    #[serde(rename = "energy_min_MeV")]
    pub energy_min_mev: f64,
    #[serde(rename = "energy_max_MeV")]
    pub energy_max_mev: f64,
    pub samples: usize,
}

fn default_simulation_name() -> String {
    "SCPN-Harmonic-Standard".to_string()
}
fn default_time_step() -> f64 {
    0.01
}
fn default_steps_per_point() -> usize {
    50
}
fn default_alpha_values() -> Vec<f64> {
    vec![1.0, 5.0, 10.0]
}

impl Default for InitialPoint {
    fn default() -> Self {
        InitialPoint {
            temperature_kev: 5.0,
            magnetic_field_t: 8.5,
        }
    }
}

impl Default for RealtimePoint {
    fn default() -> Self {
        RealtimePoint {
            temperature_kev: 15.0,
            magnetic_field_t: 12.0,
            psi_amplitude: 0.8,
            phi_amplitude: 0.7,
            base_amplitude: 0.6,
            duration_s: 30.0,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            temperature: RangeSpec {
                min: 1.0,
                max: 20.0,
                points: 20,
            },
            magnetic_field: RangeSpec {
                min: 5.0,
                max: 15.0,
                points: 11,
            },
            harmonic_amplitude: RangeSpec {
                min: 0.1,
                max: 1.0,
                points: 10,
            },
            steps_per_point: default_steps_per_point(),
        }
    }
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        ConsistencyConfig {
            energy_min_mev: 0.01,
            energy_max_mev: 10.0,
            samples: 500,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            simulation_name: default_simulation_name(),
            time_step_s: default_time_step(),
            initial: InitialPoint::default(),
            realtime: RealtimePoint::default(),
            sweep: SweepConfig::default(),
            consistency: ConsistencyConfig::default(),
            alpha_values: default_alpha_values(),
        }
    }
}

impl SimulationConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::HarmonicResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Total number of grid points the sweep will evaluate.
    pub fn grid_size(&self) -> usize {
        self.sweep.temperature.points
            * self.sweep.magnetic_field.points
            * self.sweep.harmonic_amplitude.points
    }
}
