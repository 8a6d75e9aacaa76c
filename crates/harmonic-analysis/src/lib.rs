//! Sweep, validation and report aggregation for SCPN Harmonic Fusion.
//!
//! Everything here consumes the numeric core through pure functions:
//! a sweep grid point is an immutable input and a fresh result, so
//! the Cartesian sweep parallelizes without shared state.

pub mod consistency;
pub mod metrics;
pub mod report;
pub mod sweep;
