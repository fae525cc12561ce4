//! Geometric transforms: rotation and nearest-neighbor upscaling.

use crate::error::BmpError;
use crate::grid::Grid;

/// Rotate one quarter turn clockwise.
///
/// An `R x C` input becomes `C x R`, with
/// `out[col][R - 1 - row] = in[row][col]`.
pub fn rotate90(src: &Grid) -> Grid {
    let rows = src.height();
    // Dimensions are a transpose of a valid grid, so this cannot fail.
    Grid::from_fn(rows, src.width(), |row, col| src.get(rows - 1 - col, row))
        .unwrap_or_else(|_| src.clone())
}

/// Rotate `quarter_turns * 90` degrees clockwise by composing
/// [`rotate90`]. Full turns are reduced away, so `rotate_quarters(g, 4)`
/// is an identity copy.
pub fn rotate_quarters(src: &Grid, quarter_turns: u32) -> Grid {
    let mut out = src.clone();
    for _ in 0..quarter_turns % 4 {
        out = rotate90(&out);
    }
    out
}

/// Nearest-neighbor upscale by integer factors.
///
/// An `R x C` input becomes `R * y_scale x C * x_scale`, with
/// `out[row][col] = in[row / y_scale][col / x_scale]`. Zero scale
/// factors are rejected, as are output dimensions that overflow.
pub fn enlarge(src: &Grid, x_scale: usize, y_scale: usize) -> Result<Grid, BmpError> {
    if x_scale == 0 || y_scale == 0 {
        return Err(BmpError::EmptyImage);
    }
    let width = src
        .width()
        .checked_mul(x_scale)
        .ok_or(BmpError::DimensionsTooLarge {
            width: src.width() as u32,
            height: src.height() as u32,
        })?;
    let height = src
        .height()
        .checked_mul(y_scale)
        .ok_or(BmpError::DimensionsTooLarge {
            width: src.width() as u32,
            height: src.height() as u32,
        })?;
    Grid::from_fn(width, height, |row, col| {
        src.get(row / y_scale, col / x_scale)
    })
}
