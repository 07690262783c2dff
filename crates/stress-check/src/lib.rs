//! Stress questionnaire scoring with a remote scorer and a local rule-table fallback.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
