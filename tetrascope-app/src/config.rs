//! Process-wide render configuration, fixed at startup.
//!
//! There are no CLI flags or environment variables: resolution, iteration
//! budget and zoom step are compile-time constants, and every render cycle
//! uses the same values.

use tetrascope_core::{CoreError, IterationParams, ViewState};

/// Output resolution in pixels (16:9).
pub const NX: u32 = 1920;
pub const NY: u32 = 1080;

/// Iteration budget per sample point.
pub const MAX_ITER: u32 = 1000;

/// Orbit modulus above which a point counts as divergent.
pub const ESCAPE_RADIUS: f64 = 1e10;

/// Magnification applied per primary click.
pub const ZOOM_STEP: f64 = 500.0;

/// Initial view: centered on the origin, spanning 10 plane units
/// horizontally, vertical extent derived from the 16:9 resolution.
pub const INITIAL_CENTER: (f64, f64) = (0.0, 0.0);
pub const INITIAL_HALF_EXTENT_X: f64 = 5.0;

pub fn initial_view() -> Result<ViewState, CoreError> {
    ViewState::with_aspect(
        INITIAL_CENTER.0,
        INITIAL_CENTER.1,
        INITIAL_HALF_EXTENT_X,
        NX,
        NY,
    )
}

pub fn iteration_params() -> IterationParams {
    IterationParams::new(MAX_ITER, ESCAPE_RADIUS)
}
