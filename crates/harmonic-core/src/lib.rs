//! Harmonic fusion numeric core.
//!
//! Field/probability models, Bosch-Hale cross-section with harmonic
//! enhancement, thermally averaged reaction rate, plasma scaling laws,
//! resonance peak detection, and the telemetry-producing stepper.

pub mod cross_section;
pub mod field;
pub mod plasma;
pub mod rate;
pub mod resonance;
pub mod simulator;
pub mod spectrum;
pub mod telemetry;
