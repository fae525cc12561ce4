//! File-system convenience helpers (`std` feature).

use std::fs;
use std::path::Path;

use enough::Unstoppable;

use crate::bmp::{DecodeRequest, EncodeRequest};
use crate::error::BmpError;
use crate::grid::Grid;

/// Read and decode a BMP file.
///
/// Open/read failures surface as [`BmpError::SourceIo`]; malformed
/// contents surface as the usual decode errors.
pub fn read_bmp_file(path: impl AsRef<Path>) -> Result<Grid, BmpError> {
    let data = fs::read(path).map_err(BmpError::SourceIo)?;
    DecodeRequest::new(&data).decode(Unstoppable)
}

/// Encode `grid` and write it to `path`, replacing any existing file.
///
/// Open/write failures surface as [`BmpError::SinkIo`].
pub fn write_bmp_file(path: impl AsRef<Path>, grid: &Grid) -> Result<(), BmpError> {
    let bytes = EncodeRequest::bmp().encode(grid, Unstoppable)?;
    fs::write(path, bytes).map_err(BmpError::SinkIo)
}
