use crate::CoreError;
use serde::{Deserialize, Serialize};

/// Rectangular window of the complex plane currently being sampled.
///
/// Described by a center point and half extents along each axis:
/// the visible region is `[center.0 - half_extent_x, center.0 + half_extent_x]`
/// horizontally and the analogous range vertically. The aspect ratio of the
/// half extents is fixed by the output resolution, so `half_extent_y` is
/// normally derived via [`ViewState::with_aspect`] rather than set directly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center: (f64, f64),
    pub half_extent_x: f64,
    pub half_extent_y: f64,
}

impl ViewState {
    /// Create a view with explicit half extents.
    ///
    /// Rejects non-positive or non-finite half extents.
    pub fn new(
        center_x: f64,
        center_y: f64,
        half_extent_x: f64,
        half_extent_y: f64,
    ) -> Result<Self, CoreError> {
        for value in [half_extent_x, half_extent_y] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::InvalidHalfExtent { value });
            }
        }
        Ok(Self {
            center: (center_x, center_y),
            half_extent_x,
            half_extent_y,
        })
    }

    /// Create a view whose vertical half extent is derived from the output
    /// resolution, keeping plane units square on screen.
    pub fn with_aspect(
        center_x: f64,
        center_y: f64,
        half_extent_x: f64,
        nx: u32,
        ny: u32,
    ) -> Result<Self, CoreError> {
        if nx == 0 || ny == 0 {
            return Err(CoreError::InvalidResolution { nx, ny });
        }
        let half_extent_y = half_extent_x * ny as f64 / nx as f64;
        Self::new(center_x, center_y, half_extent_x, half_extent_y)
    }

    pub fn min_x(&self) -> f64 {
        self.center.0 - self.half_extent_x
    }

    pub fn max_x(&self) -> f64 {
        self.center.0 + self.half_extent_x
    }

    pub fn min_y(&self) -> f64 {
        self.center.1 - self.half_extent_y
    }

    pub fn max_y(&self) -> f64 {
        self.center.1 + self.half_extent_y
    }

    /// View produced by a zoom-in at plane point (cx, cy): the center moves
    /// to the chosen point and both half extents shrink by `factor`.
    ///
    /// Pure transition; the caller is responsible for recording the previous
    /// view if the zoom needs to be reversible.
    pub fn zoomed_to(&self, cx: f64, cy: f64, factor: f64) -> Result<Self, CoreError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(CoreError::InvalidZoomFactor { value: factor });
        }
        Self::new(
            cx,
            cy,
            self.half_extent_x / factor,
            self.half_extent_y / factor,
        )
    }
}
