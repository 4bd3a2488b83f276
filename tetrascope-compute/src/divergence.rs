//! Escape-time divergence kernel for the tetration recurrence z <- c^z.
//!
//! Every grid point iterates independently, so the map is computed with a
//! data-parallel iterator over the sample grid: no shared mutable state, no
//! locks, and completion order across points does not affect the result.

use num_complex::Complex64;
use rayon::prelude::*;
use tetrascope_core::{IterationParams, SampleGrid};

/// Boolean raster, one cell per sample point: true iff the point's orbit
/// exceeded the escape radius within the iteration budget.
///
/// Same (nx, ny) shape and x-major indexing as the [`SampleGrid`] it was
/// computed from. Produced fresh every render cycle and consumed once by the
/// presenter; never cached across views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceMap {
    cells: Vec<bool>,
    nx: u32,
    ny: u32,
}

impl DivergenceMap {
    pub fn nx(&self) -> u32 {
        self.nx
    }

    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Cell at grid position (i, j); i indexes the real axis.
    pub fn get(&self, i: u32, j: u32) -> bool {
        self.cells[i as usize * self.ny as usize + j as usize]
    }

    /// Flat x-major view of all cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn count_divergent(&self) -> usize {
        self.cells.iter().filter(|&&d| d).count()
    }
}

/// Iterate z <- c^z from z = c and report whether the orbit escapes.
///
/// Exponentiation uses the principal branch, c^z = exp(z * ln c). Two edge
/// conventions apply:
/// - c == 0 is classified non-divergent immediately: the orbit under the
///   standard 0^0 = 1 limit is 0 -> 1 -> 0 -> ..., which stays bounded.
/// - A non-finite z (overflow to infinity, or NaN from a pathological c) is
///   classified divergent and iteration stops. Divergence detection is the
///   mechanism that bounds unbounded growth; it is never surfaced as an
///   error.
pub fn diverges_point(c: Complex64, params: &IterationParams) -> bool {
    if c == Complex64::new(0.0, 0.0) {
        return false;
    }

    let escape_sq = params.escape_radius_sq();
    let mut z = c;
    for _ in 0..params.max_iter {
        z = c.powc(z);
        if !z.re.is_finite() || !z.im.is_finite() {
            return true;
        }
        if z.norm_sqr() > escape_sq {
            return true;
        }
    }
    false
}

/// Compute the divergence map for every point of the grid in parallel.
pub fn compute_divergence(grid: &SampleGrid, params: &IterationParams) -> DivergenceMap {
    let cells: Vec<bool> = grid
        .points()
        .par_iter()
        .map(|&c| diverges_point(c, params))
        .collect();

    DivergenceMap {
        cells,
        nx: grid.nx(),
        ny: grid.ny(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrascope_core::ViewState;

    fn params() -> IterationParams {
        IterationParams::new(1000, 1e10)
    }

    #[test]
    fn base_two_diverges_within_a_handful_of_iterations() {
        // 2 -> 4 -> 16 -> 65536 -> overflow; any budget >= 5 must catch it
        for max_iter in [5, 10, 1000] {
            let p = IterationParams::new(max_iter, 1e10);
            assert!(
                diverges_point(Complex64::new(2.0, 0.0), &p),
                "c=2 must diverge with max_iter={max_iter}"
            );
        }
    }

    #[test]
    fn base_one_is_a_fixed_point() {
        // 1^1 = 1 forever, for any budget
        for max_iter in [1, 50, 1000] {
            let p = IterationParams::new(max_iter, 1e10);
            assert!(!diverges_point(Complex64::new(1.0, 0.0), &p));
        }
    }

    #[test]
    fn zero_base_is_non_divergent_by_convention() {
        assert!(!diverges_point(Complex64::new(0.0, 0.0), &params()));
    }

    #[test]
    fn nan_input_classified_divergent() {
        assert!(diverges_point(Complex64::new(f64::NAN, 0.0), &params()));
        assert!(diverges_point(Complex64::new(0.0, f64::NAN), &params()));
    }

    #[test]
    fn convergent_real_base_stays_bounded() {
        // Real tetration converges for bases in (e^-e, e^(1/e)) ~ (0.066, 1.445)
        assert!(!diverges_point(Complex64::new(0.5, 0.0), &params()));
        assert!(!diverges_point(Complex64::new(1.3, 0.0), &params()));
    }

    #[test]
    fn map_shape_matches_grid_shape() {
        let view = ViewState::new(0.0, 0.0, 5.0, 2.8125).unwrap();
        for (nx, ny) in [(1, 1), (16, 9), (7, 31)] {
            let grid = SampleGrid::sample(&view, nx, ny).unwrap();
            let map = compute_divergence(&grid, &params());
            assert_eq!(map.nx(), nx);
            assert_eq!(map.ny(), ny);
            assert_eq!(map.cells().len(), nx as usize * ny as usize);
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let view = ViewState::new(-0.2, 0.4, 1.5, 0.84375).unwrap();
        let grid = SampleGrid::sample(&view, 32, 18).unwrap();
        let p = IterationParams::new(200, 1e10);
        let first = compute_divergence(&grid, &p);
        let second = compute_divergence(&grid, &p);
        assert_eq!(first, second);
    }

    #[test]
    fn wide_view_scenario_mixes_divergent_and_bounded_points() {
        // 16x9 render of the default view; right edge at y=0 is c = 5+0i,
        // which explodes, while the near-origin column converges.
        let view = ViewState::new(0.0, 0.0, 5.0, 2.8125).unwrap();
        let grid = SampleGrid::sample(&view, 16, 9).unwrap();
        let p = IterationParams::new(50, 1e10);
        let map = compute_divergence(&grid, &p);

        assert_eq!(grid.get(15, 4), Complex64::new(5.0, 0.0));
        assert!(map.get(15, 4), "c = 5+0i must diverge");

        // i=8, j=4 is c ~ 0.333+0i, inside the real convergence interval
        assert!(!map.get(8, 4), "near-origin point must stay bounded");

        let divergent = map.count_divergent();
        assert!(divergent > 0 && divergent < map.cells().len());
    }
}
