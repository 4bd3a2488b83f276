//! Display-to-plane coordinate mapping for click events.

use tetrascope_core::ViewState;

/// Map a framebuffer pixel (row 0 at the top) to its complex-plane
/// coordinate under the current view.
///
/// Uses the same inclusive-endpoint spacing as the sample grid, so a click
/// on pixel (px, py) lands exactly on that pixel's sample point. The
/// vertical flip mirrors the presenter's: screen row 0 is the top of the
/// view, i.e. the maximum imaginary coordinate.
pub fn pixel_to_plane(view: &ViewState, px: u32, py: u32, nx: u32, ny: u32) -> (f64, f64) {
    let x = if nx > 1 {
        view.min_x() + (view.max_x() - view.min_x()) * px as f64 / (nx - 1) as f64
    } else {
        view.min_x()
    };
    let y = if ny > 1 {
        view.max_y() - (view.max_y() - view.min_y()) * py as f64 / (ny - 1) as f64
    } else {
        view.min_y()
    };
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrascope_core::SampleGrid;

    fn view() -> ViewState {
        ViewState::new(0.5, -0.25, 2.0, 1.125).unwrap()
    }

    #[test]
    fn corners_map_to_view_bounds() {
        let v = view();
        assert_eq!(pixel_to_plane(&v, 0, 0, 16, 9), (v.min_x(), v.max_y()));
        assert_eq!(pixel_to_plane(&v, 15, 8, 16, 9), (v.max_x(), v.min_y()));
    }

    #[test]
    fn clicks_land_on_grid_samples() {
        let v = view();
        let grid = SampleGrid::sample(&v, 16, 9).unwrap();
        for px in [0u32, 3, 15] {
            for py in [0u32, 4, 8] {
                let (x, y) = pixel_to_plane(&v, px, py, 16, 9);
                let sample = grid.get(px, 8 - py);
                assert!((x - sample.re).abs() < 1e-12);
                assert!((y - sample.im).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn single_pixel_axis_maps_to_lower_bound() {
        let v = view();
        let (x, y) = pixel_to_plane(&v, 0, 0, 1, 1);
        assert_eq!(x, v.min_x());
        assert_eq!(y, v.min_y());
    }
}
