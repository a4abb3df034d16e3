//! CLI library components for GeoQC.

pub mod logging;
pub mod workflow;
