// Expected, transient failures. None of these are fatal: the host re-delivers
// the triggering event (mount, resize, pointer move) on its own.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("drawable surface is not available yet")]
    SurfaceUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error("container layout box cannot be measured")]
    MeasurementUnavailable,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
