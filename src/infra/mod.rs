//! Infrastructure adapters and runtime bootstrap.

pub mod http;
pub mod telemetry;
pub mod theme;
