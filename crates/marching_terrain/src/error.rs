//! Error types surfaced to the host.
//!
//! Configuration problems are reported before any sampling starts, so a
//! failed call never leaves a partial mesh behind.

use thiserror::Error;

/// Rejected cell or noise configuration.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
  /// Lattice needs at least one cube per axis.
  #[error("resolution must be at least 1, got {0}")]
  ResolutionTooSmall(u32),

  #[error("extent must be greater than zero, got {0}")]
  NonPositiveExtent(f32),

  /// Layered noise needs at least one octave.
  #[error("noise layers must be at least 1, got {0}")]
  NoLayers(u32),

  #[error("{field} must be finite, got {value}")]
  NonFinite { field: &'static str, value: f32 },
}

/// Failure of a whole generation call.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
  #[error("invalid configuration: {0}")]
  Config(#[from] ConfigError),

  /// The host cancelled the run through its [`CancelToken`](crate::CancelToken).
  #[error("generation cancelled")]
  Cancelled,
}

/// Reject NaN and infinities for a named float field.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
  if value.is_finite() {
    Ok(())
  } else {
    Err(ConfigError::NonFinite { field, value })
  }
}
