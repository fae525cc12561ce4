//! BMP codec (internal).
//!
//! Use the top-level [`crate::DecodeRequest`] and [`crate::EncodeRequest`].

mod decode;
mod encode;

pub use decode::RawHeader;

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::grid::Grid;
use crate::limits::Limits;

/// A pending decode of a BMP byte buffer.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Attach resource limits, checked before the grid is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse and validate the header without decoding pixels.
    pub fn header(&self) -> Result<RawHeader, BmpError> {
        decode::parse_header(self.data)
    }

    /// Decode the full image into a [`Grid`].
    pub fn decode(self, stop: impl Stop) -> Result<Grid, BmpError> {
        let header = decode::parse_header(self.data)?;
        if let Some(limits) = self.limits {
            let (w, h) = (header.width as u64, header.height as u64);
            limits.check(w, h)?;
            limits.check_memory(w * h * core::mem::size_of::<crate::Pixel>() as u64)?;
        }
        decode::decode_pixels(self.data, &header, &stop)
    }
}

/// A pending encode of a [`Grid`] to BMP bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    _priv: (),
}

impl EncodeRequest {
    /// Canonical uncompressed 24-bit BMP output.
    pub fn bmp() -> Self {
        Self::default()
    }

    /// Serialize `grid` to a complete BMP file in memory.
    pub fn encode(self, grid: &Grid, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
        encode::encode_bmp(grid, &stop)
    }
}
