use thiserror::Error;

/// Errors raised when constructing view or grid values.
///
/// All of these are construction-time failures: invalid inputs are rejected
/// up front, never clamped to a nearby valid value.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("resolution must be positive in both axes, got {nx}x{ny}")]
    InvalidResolution { nx: u32, ny: u32 },

    #[error("half extent must be positive and finite, got {value}")]
    InvalidHalfExtent { value: f64 },

    #[error("zoom factor must be positive and finite, got {value}")]
    InvalidZoomFactor { value: f64 },
}
