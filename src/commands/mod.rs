//! Top-level command orchestration.
pub mod generate;
