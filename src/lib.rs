pub mod configuration;
pub mod connectors;
pub mod telemetry;
