use crate::config::ConfigError;
use crate::roster::{ReportError, RosterImportError};
use crate::telemetry::TelemetryError;

/// Failures that end a planner invocation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster error: {0}")]
    Roster(#[from] RosterImportError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
