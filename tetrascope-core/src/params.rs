use serde::{Deserialize, Serialize};

/// Iteration budget and escape threshold for the divergence kernel.
///
/// These are process-wide constants fixed at startup, not part of per-view
/// state: every render of every view uses the same budget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationParams {
    pub max_iter: u32,
    pub escape_radius: f64,
}

impl IterationParams {
    pub fn new(max_iter: u32, escape_radius: f64) -> Self {
        Self {
            max_iter,
            escape_radius,
        }
    }

    /// Squared threshold, so the kernel can compare against `norm_sqr()`
    /// without a square root per iteration.
    pub fn escape_radius_sq(&self) -> f64 {
        self.escape_radius * self.escape_radius
    }
}
