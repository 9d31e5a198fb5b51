pub mod cors;
pub mod telemetry;
