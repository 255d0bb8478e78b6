//! State model for the job-board profile setup wizard.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
