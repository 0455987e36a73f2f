pub mod config;
pub mod error;
pub mod household;
pub mod telemetry;
