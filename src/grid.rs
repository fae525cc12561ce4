//! Flat row-major pixel grid.
//!
//! A [`Grid`] stores its pixels in a single arena (`Vec<Pixel>`) plus a
//! width and height, rather than nested per-row containers. Row 0 is the
//! logical top row of the image; the BMP codec handles the on-disk
//! bottom-to-top order itself.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;

/// A 24-bit RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Gray pixel with all three channels set to `v`.
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Integer average of the three channels, `(r + g + b) / 3`.
    pub fn average(&self) -> u8 {
        ((u16::from(self.red) + u16::from(self.green) + u16::from(self.blue)) / 3) as u8
    }

    /// Sum of the three channels.
    pub fn channel_sum(&self) -> u16 {
        u16::from(self.red) + u16::from(self.green) + u16::from(self.blue)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Pixel {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGB8 {
    fn from(p: Pixel) -> Self {
        Self {
            r: p.red,
            g: p.green,
            b: p.blue,
        }
    }
}

/// Rectangular, row-major pixel image.
///
/// Invariants, enforced at construction: `width > 0`, `height > 0`, and
/// the backing buffer holds exactly `width * height` pixels. Every `Grid`
/// a caller can obtain is therefore non-empty and rectangular, so the
/// codec and transforms never re-validate shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid of the given dimensions filled with black pixels.
    pub fn new(width: usize, height: usize) -> Result<Self, BmpError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            pixels: vec![Pixel::default(); len],
            width,
            height,
        })
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, BmpError> {
        let len = Self::checked_len(width, height)?;
        if pixels.len() != len {
            return Err(BmpError::BufferSizeMismatch {
                needed: len,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Result<Self, BmpError> {
        let len = Self::checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    fn checked_len(width: usize, height: usize) -> Result<usize, BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::EmptyImage);
        }
        width
            .checked_mul(height)
            .ok_or(BmpError::DimensionsTooLarge {
                width: width as u32,
                height: height as u32,
            })
    }

    /// Width in pixels (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(row, col)`, row 0 being the top of the image.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[row * self.width + col]
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[row * self.width + col] = pixel;
    }

    /// The backing row-major pixel slice.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels, self.width, self.height)
    }

    /// Convert an [`imgref::ImgVec`] into a grid.
    ///
    /// Returns [`BmpError::EmptyImage`] for zero-sized input. Images with
    /// a stride wider than their width are repacked row by row.
    #[cfg(feature = "imgref")]
    pub fn from_imgvec(img: imgref::ImgVec<Pixel>) -> Result<Self, BmpError> {
        let (width, height) = (img.width(), img.height());
        if img.stride() == width {
            let (buf, _, _) = img.into_contiguous_buf();
            return Self::from_pixels(width, height, buf);
        }
        let mut pixels = Vec::with_capacity(Self::checked_len(width, height)?);
        for row in img.rows() {
            pixels.extend_from_slice(row);
        }
        Self::from_pixels(width, height, pixels)
    }
}
