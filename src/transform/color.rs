//! Per-pixel color transforms.

use super::narrow;
use crate::grid::{Grid, Pixel};

fn map_pixels(src: &Grid, mut f: impl FnMut(usize, usize, Pixel) -> Pixel) -> Grid {
    // Shape is taken from a valid source grid, so construction cannot fail.
    Grid::from_fn(src.width(), src.height(), |row, col| {
        f(row, col, src.get(row, col))
    })
    .unwrap_or_else(|_| src.clone())
}

fn scale_pixel(px: Pixel, factor: f64) -> Pixel {
    Pixel::new(
        narrow(f64::from(px.red) * factor),
        narrow(f64::from(px.green) * factor),
        narrow(f64::from(px.blue) * factor),
    )
}

fn boost_pixel(px: Pixel, factor: f64) -> Pixel {
    let boost = |c: u8| narrow(255.0 - f64::from(255 - c) * factor);
    Pixel::new(boost(px.red), boost(px.green), boost(px.blue))
}

/// Darken pixels toward the edges of the image.
///
/// Each pixel is scaled by `(cols - d) / cols` where `d` is its distance
/// from the image center (integer-division center coordinates).
pub fn vignette(src: &Grid) -> Grid {
    let cols = src.width();
    let rows = src.height();
    let (cx, cy) = ((cols / 2) as i64, (rows / 2) as i64);
    map_pixels(src, |row, col, px| {
        let dx = col as i64 - cx;
        let dy = row as i64 - cy;
        let d = libm::sqrt((dx * dx + dy * dy) as f64);
        let scale = (cols as f64 - d) / cols as f64;
        scale_pixel(px, scale)
    })
}

/// Boost highlights and deepen shadows, leaving midtones untouched.
///
/// Pixels averaging at least 170 are pushed toward white, pixels
/// averaging below 90 are scaled toward black by 0.3.
pub fn clarendon(src: &Grid) -> Grid {
    map_pixels(src, |_, _, px| {
        let avg = px.average();
        if avg >= 170 {
            boost_pixel(px, 0.3)
        } else if avg < 90 {
            scale_pixel(px, 0.3)
        } else {
            px
        }
    })
}

/// Replace every channel with the integer channel average.
pub fn grayscale(src: &Grid) -> Grid {
    map_pixels(src, |_, _, px| Pixel::splat(px.average()))
}

/// Threshold to pure black or pure white at a 127 gray midpoint.
pub fn high_contrast(src: &Grid) -> Grid {
    map_pixels(src, |_, _, px| {
        if px.average() >= 127 {
            Pixel::splat(255)
        } else {
            Pixel::splat(0)
        }
    })
}

/// Move every channel 20% of the way toward white.
pub fn lighten(src: &Grid) -> Grid {
    map_pixels(src, |_, _, px| boost_pixel(px, 0.8))
}

/// Scale every channel down by a fixed 0.8 factor.
pub fn darken(src: &Grid) -> Grid {
    map_pixels(src, |_, _, px| scale_pixel(px, 0.8))
}

/// Quantize to five colors: white, black, or the dominant primary.
///
/// Channel sums of 550 and up become white, 150 and down black.
/// Otherwise the largest channel wins, ties resolved in red, green,
/// blue order.
pub fn posterize(src: &Grid) -> Grid {
    map_pixels(src, |_, _, px| {
        let sum = px.channel_sum();
        if sum >= 550 {
            Pixel::splat(255)
        } else if sum <= 150 {
            Pixel::splat(0)
        } else if px.red >= px.green && px.red >= px.blue {
            Pixel::new(255, 0, 0)
        } else if px.green >= px.blue {
            Pixel::new(0, 255, 0)
        } else {
            Pixel::new(0, 0, 255)
        }
    })
}
