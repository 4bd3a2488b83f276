//! Presenter boundary: turns a divergence map into something visible.
//!
//! The map is x-major with j indexing the imaginary axis upward; presenters
//! own the flip to screen rasters, where row 0 is the top of the image. The
//! plane's origin therefore sits at the lower left, divergent points render
//! white and bounded points black.

use std::path::PathBuf;

use anyhow::Context;
use image::{GrayImage, Luma};
use tetrascope_compute::DivergenceMap;
use tetrascope_core::ViewState;

pub trait Presenter {
    fn present(&mut self, map: &DivergenceMap, view: &ViewState) -> anyhow::Result<()>;
}

/// Write the map into an RGBA8 framebuffer laid out in screen order
/// (row-major, top row first).
///
/// The frame length must be exactly `nx * ny * 4`.
pub fn blit_rgba(map: &DivergenceMap, frame: &mut [u8]) {
    let (nx, ny) = (map.nx() as usize, map.ny() as usize);
    debug_assert_eq!(frame.len(), nx * ny * 4);

    for (idx, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let px = idx % nx;
        let py = idx / nx;
        let j = ny - 1 - py;
        let luma = if map.get(px as u32, j as u32) { 0xff } else { 0x00 };
        pixel.copy_from_slice(&[luma, luma, luma, 0xff]);
    }
}

/// Deterministic snapshot filename derived from the view parameters.
///
/// Identical views map to identical names, so re-rendering the same region
/// overwrites the previous snapshot instead of accumulating files.
pub fn snapshot_filename(view: &ViewState) -> String {
    format!(
        "mytetration_x_{}_y_{}_eps_{}.png",
        view.center.0, view.center.1, view.half_extent_x
    )
}

/// Saves one grayscale PNG per render cycle, named from the view parameters.
pub struct PngPresenter {
    out_dir: PathBuf,
}

impl PngPresenter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn snapshot_path(&self, view: &ViewState) -> PathBuf {
        self.out_dir.join(snapshot_filename(view))
    }
}

impl Presenter for PngPresenter {
    fn present(&mut self, map: &DivergenceMap, view: &ViewState) -> anyhow::Result<()> {
        let (nx, ny) = (map.nx(), map.ny());
        let image = GrayImage::from_fn(nx, ny, |px, py| {
            let j = ny - 1 - py;
            Luma([if map.get(px, j) { 0xff } else { 0x00 }])
        });

        let path = self.snapshot_path(view);
        image
            .save(&path)
            .with_context(|| format!("saving snapshot to {}", path.display()))?;
        log::info!("saved {}", path.display());
        Ok(())
    }
}
