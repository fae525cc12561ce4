//! # gridbmp
//!
//! Uncompressed 24-bit BMP decoder and encoder with a small library of
//! deterministic pixel transforms.
//!
//! ## Codec
//!
//! Decoding reconstructs a row-major [`Grid`] of RGB pixels from a BMP
//! byte buffer: little-endian header fields at fixed offsets, stored rows
//! walked bottom-to-top in blue-green-red byte order, scanlines padded to
//! 4-byte boundaries. Encoding re-serializes a grid byte-exact with a
//! canonical 54-byte header, so `decode(encode(g)) == g`.
//!
//! 32-bit input is accepted with the fourth (alpha) byte discarded.
//!
//! ## Transforms
//!
//! The [`transform`] module holds pure `Grid -> Grid` functions:
//! vignette, clarendon, grayscale, rotation, nearest-neighbor enlarge,
//! high contrast, lighten, darken, and a five-color posterize. Fractional
//! results are truncated toward zero and saturate at the channel bounds.
//!
//! ## Non-Goals
//!
//! - Compressed BMP variants (RLE, bitfields)
//! - Indexed-color/palette images and sub-24-bit depths
//! - Alpha preservation (alpha bytes are discarded, never written)
//!
//! ## Usage
//!
//! ```no_run
//! use gridbmp::{DecodeRequest, EncodeRequest, transform};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe the header without decoding
//! let header = DecodeRequest::new(data).header()?;
//! println!("{}x{} @{}bpp", header.width, header.height, header.bits_per_pixel);
//!
//! let grid = DecodeRequest::new(data).decode(Unstoppable)?;
//! let gray = transform::grayscale(&grid);
//! let encoded = EncodeRequest::bmp().encode(&gray, Unstoppable)?;
//! # Ok::<(), gridbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod error;
mod grid;
mod limits;

pub mod transform;

#[cfg(feature = "std")]
mod fs;

// Re-exports
pub use bmp::{DecodeRequest, EncodeRequest, RawHeader};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
#[cfg(feature = "std")]
pub use fs::{read_bmp_file, write_bmp_file};
pub use grid::{Grid, Pixel};
pub use limits::Limits;
