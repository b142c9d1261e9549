//! NewsGraph Common Library
//!
//! Shared code for the NewsGraph citation engine:
//! - Domain models (sources, citations, echo chambers)
//! - Error types and handling
//! - Configuration management
//! - Telemetry and metrics registration

pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AuthorityConfig, DetectionConfig, EngineConfig, ReportingConfig};
pub use errors::{EngineError, Result};
pub use models::{BiasLabel, Citation, CitationType, EchoChamber, Source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
