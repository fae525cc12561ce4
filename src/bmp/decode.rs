//! BMP header parsing and pixel-array decoding.
//!
//! Only the simple uncompressed bottom-up layout is handled: 24-bit
//! packed BGR, or 32-bit BGRX with the fourth byte discarded. Everything
//! else (palettes, RLE, bitfields, top-down rows) is rejected up front.

use alloc::vec;

use enough::Stop;

use crate::error::BmpError;
use crate::grid::{Grid, Pixel};

/// Byte offsets of the header fields we read. The signature bytes at
/// offset 0 are not examined; the file-size consistency check below is
/// the sole integrity gate.
const FILE_SIZE_OFFSET: usize = 2;
const PIXEL_ARRAY_OFFSET: usize = 10;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BPP_OFFSET: usize = 28;

/// Number of leading bytes the header fields span.
const HEADER_SPAN: usize = BPP_OFFSET + 2;

/// Named field accessors over the leading bytes of a BMP buffer.
///
/// All fields are little-endian at fixed offsets; construction fails if
/// the buffer is too short to contain them.
struct HeaderView<'a> {
    data: &'a [u8],
}

impl<'a> HeaderView<'a> {
    fn new(data: &'a [u8]) -> Result<Self, BmpError> {
        if data.len() < HEADER_SPAN {
            return Err(BmpError::UnexpectedEof);
        }
        Ok(Self { data })
    }

    fn u16_at(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.data[offset], self.data[offset + 1]])
    }

    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ])
    }

    fn file_size(&self) -> u32 {
        self.u32_at(FILE_SIZE_OFFSET)
    }

    fn pixel_array_offset(&self) -> u32 {
        self.u32_at(PIXEL_ARRAY_OFFSET)
    }

    fn width(&self) -> i32 {
        self.u32_at(WIDTH_OFFSET) as i32
    }

    fn height(&self) -> i32 {
        self.u32_at(HEIGHT_OFFSET) as i32
    }

    fn bits_per_pixel(&self) -> u16 {
        self.u16_at(BPP_OFFSET)
    }
}

/// Geometry and layout fields read from a BMP header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawHeader {
    /// Declared total file size in bytes.
    pub file_size: u32,
    /// Byte offset where the pixel array begins.
    pub pixel_array_offset: u32,
    /// Image width in pixels. Positive after validation.
    pub width: i32,
    /// Image height in pixels. Positive after validation; a negative
    /// value (top-down row order) is rejected.
    pub height: i32,
    /// Bits per pixel: 24 or 32 after validation.
    pub bits_per_pixel: u16,
}

impl RawHeader {
    /// Bytes of pixel data per stored row, before padding.
    pub fn scanline_size(&self) -> u64 {
        self.width as u64 * u64::from(self.bits_per_pixel / 8)
    }

    /// Filler bytes after each scanline so rows occupy multiples of 4.
    pub fn padding(&self) -> u64 {
        (4 - self.scanline_size() % 4) % 4
    }

    /// Bytes per stored row including padding.
    pub fn row_stride(&self) -> u64 {
        self.scanline_size() + self.padding()
    }

    /// Total pixel-array bytes including padding.
    pub fn pixel_array_size(&self) -> u64 {
        self.row_stride() * self.height as u64
    }

    fn validate(&self) -> Result<(), BmpError> {
        if self.width <= 0 {
            return Err(BmpError::InvalidHeader(alloc::format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.height == 0 {
            return Err(BmpError::InvalidHeader("height is zero".into()));
        }
        if self.height < 0 {
            return Err(BmpError::UnsupportedVariant(
                "top-down row order (negative height)".into(),
            ));
        }
        if !matches!(self.bits_per_pixel, 24 | 32) {
            return Err(BmpError::UnsupportedVariant(alloc::format!(
                "{} bits per pixel (only packed 24/32-bit BGR is decoded)",
                self.bits_per_pixel
            )));
        }
        let computed = u64::from(self.pixel_array_offset) + self.pixel_array_size();
        if u64::from(self.file_size) != computed {
            return Err(BmpError::SizeMismatch {
                declared: self.file_size,
                computed,
            });
        }
        Ok(())
    }
}

/// Parse and validate the leading header bytes of a BMP buffer.
pub(crate) fn parse_header(data: &[u8]) -> Result<RawHeader, BmpError> {
    let view = HeaderView::new(data)?;
    let header = RawHeader {
        file_size: view.file_size(),
        pixel_array_offset: view.pixel_array_offset(),
        width: view.width(),
        height: view.height(),
        bits_per_pixel: view.bits_per_pixel(),
    };
    header.validate()?;
    Ok(header)
}

/// Decode the pixel array described by `header` into a [`Grid`].
///
/// Stored rows run bottom-to-top on disk: the first stored row lands at
/// output row `height - 1` and the last at row 0. Bytes within a pixel
/// are blue, green, red; a fourth byte (32-bit input) is skipped.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &RawHeader,
    stop: &dyn Stop,
) -> Result<Grid, BmpError> {
    let width = header.width as usize;
    let height = header.height as usize;
    let bytes_per_pixel = usize::from(header.bits_per_pixel / 8);
    let stride = header.row_stride() as usize;
    let start = header.pixel_array_offset as usize;

    // The header arithmetic already matched the declared file size, but
    // the buffer itself may still be shorter than declared.
    let needed = u64::from(header.pixel_array_offset) + header.pixel_array_size();
    if (data.len() as u64) < needed {
        return Err(BmpError::UnexpectedEof);
    }

    let mut pixels = vec![Pixel::default(); width * height];
    for stored_row in 0..height {
        if stored_row % 16 == 0 {
            stop.check()?;
        }
        let row_base = start + stored_row * stride;
        let out_row = height - 1 - stored_row;
        let dst = &mut pixels[out_row * width..(out_row + 1) * width];
        for (col, px) in dst.iter_mut().enumerate() {
            let off = row_base + col * bytes_per_pixel;
            *px = Pixel::new(data[off + 2], data[off + 1], data[off]);
        }
    }

    Grid::from_pixels(width, height, pixels)
}
