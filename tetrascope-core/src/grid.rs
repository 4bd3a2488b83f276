use crate::{CoreError, ViewState};
use num_complex::Complex64;

/// 2D array of complex sample coordinates, one per pixel center.
///
/// Derived deterministically from a [`ViewState`] and a fixed (nx, ny)
/// resolution; immutable once produced and recomputed on every render cycle.
///
/// Storage is a flat x-major vector: the sample for grid position (i, j) is
/// at `i * ny + j`, with i indexing the real axis and j the imaginary axis.
/// Axis orientation for display (e.g. flipping j so the imaginary axis points
/// up on screen) is the presenter's concern, not the grid's.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    points: Vec<Complex64>,
    nx: u32,
    ny: u32,
}

impl SampleGrid {
    /// Sample the view at the given resolution.
    ///
    /// Generates nx evenly spaced real values spanning `[min_x, max_x]` and
    /// ny evenly spaced imaginary values spanning `[min_y, max_y]`, both
    /// inclusive of their endpoints; sample (i, j) is `re[i] + i*im[j]`.
    ///
    /// Rejects a zero pixel count in either axis. A single-sample axis
    /// (nx == 1 or ny == 1) places its one sample at the lower bound, since
    /// the spacing is only defined for two or more samples.
    pub fn sample(view: &ViewState, nx: u32, ny: u32) -> Result<Self, CoreError> {
        if nx == 0 || ny == 0 {
            return Err(CoreError::InvalidResolution { nx, ny });
        }

        let re = linspace(view.min_x(), view.max_x(), nx);
        let im = linspace(view.min_y(), view.max_y(), ny);

        let mut points = Vec::with_capacity(nx as usize * ny as usize);
        for &x in &re {
            for &y in &im {
                points.push(Complex64::new(x, y));
            }
        }

        Ok(Self { points, nx, ny })
    }

    pub fn nx(&self) -> u32 {
        self.nx
    }

    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Sample at grid position (i, j); i indexes the real axis.
    pub fn get(&self, i: u32, j: u32) -> Complex64 {
        self.points[i as usize * self.ny as usize + j as usize]
    }

    /// Flat x-major view of all samples.
    pub fn points(&self) -> &[Complex64] {
        &self.points
    }
}

/// `n` evenly spaced values from `start` to `stop`, both endpoints included.
///
/// The final value is pinned to `stop` exactly rather than accumulated, so
/// the grid endpoint lands on the view bound to the ulp.
fn linspace(start: f64, stop: f64, n: u32) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n)
        .map(|k| {
            if k == n - 1 {
                stop
            } else {
                start + step * k as f64
            }
        })
        .collect()
}
