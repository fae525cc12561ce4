//! Pure `Grid -> Grid` image transforms.
//!
//! Every transform builds a fresh output grid; the input is never
//! mutated and no state is shared between calls. Fractional results are
//! narrowed with truncation toward zero, saturating at the 0–255 channel
//! bounds.

mod color;
mod geometry;

pub use color::{clarendon, darken, grayscale, high_contrast, lighten, posterize, vignette};
pub use geometry::{enlarge, rotate90, rotate_quarters};

use crate::grid::Grid;

/// Copy the image unchanged.
pub fn identity(src: &Grid) -> Grid {
    src.clone()
}

/// Truncate a non-negative float toward zero into a channel value,
/// saturating at the u8 bounds.
pub(crate) fn narrow(v: f64) -> u8 {
    v as u8
}
