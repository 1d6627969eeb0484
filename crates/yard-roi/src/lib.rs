//! Deterministic valuation engine for yard-automation programs, plus the
//! configuration, telemetry, and error plumbing shared by its front ends.

pub mod config;
pub mod error;
pub mod roi;
pub mod telemetry;

pub use roi::{calculate, RoiEngine, RoiInputs, RoiOutputs};
