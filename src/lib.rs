pub mod configuration;
pub mod errors;
pub mod pagination;
pub mod search;
pub mod telemetry;
