use crate::error::BmpError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Limits are checked after the
/// header is parsed and before the output grid is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the decoded grid allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check(&self, width: u64, height: u64) -> Result<(), BmpError> {
        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = width.saturating_mul(height);
            if pixels > max_px {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_memory(&self, bytes: u64) -> Result<(), BmpError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes > max_mem {
                return Err(BmpError::LimitExceeded(alloc::format!(
                    "allocation of {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
