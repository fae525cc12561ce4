//! BMP encoder: canonical uncompressed 24-bit output.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::grid::Grid;

const FILE_HEADER_SIZE: usize = 14;
const DESCRIPTOR_SIZE: usize = 40;
const PIXEL_ARRAY_START: usize = FILE_HEADER_SIZE + DESCRIPTOR_SIZE;

/// Pixels per meter at 72 DPI, the conventional print-resolution value.
const RESOLUTION_PPM: u32 = 2835;

/// Serialize a grid as an uncompressed 24-bit BMP.
///
/// The emitted header is always canonical: 54-byte offset, 24 bits per
/// pixel, no compression. Rows are written bottom-to-top in blue, green,
/// red byte order, each padded with zeros to a 4-byte boundary.
pub(crate) fn encode_bmp(grid: &Grid, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let w = grid.width();
    let h = grid.height();
    let too_large = || BmpError::DimensionsTooLarge {
        width: w as u32,
        height: h as u32,
    };

    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or_else(too_large)?;
    let pixel_array_size = row_stride.checked_mul(h).ok_or_else(too_large)?;
    let file_size = pixel_array_size
        .checked_add(PIXEL_ARRAY_START)
        .ok_or_else(too_large)?;
    if u32::try_from(file_size).is_err() {
        return Err(too_large());
    }

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, file_size, pixel_array_size, w as u32, h as u32);

    let pad_bytes = row_stride - w * 3;
    for (i, row) in grid.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.push(px.blue);
            out.push(px.green);
            out.push(px.red);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_headers(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_array_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(PIXEL_ARRAY_START as u32).to_le_bytes());

    // Format descriptor (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&(DESCRIPTOR_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (none)
    out.extend_from_slice(&(pixel_array_size as u32).to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes()); // h resolution
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // palette colors
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
