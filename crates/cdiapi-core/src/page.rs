//! Pagination envelope — bounds validation, result metadata, and the
//! `{meta, data}` wrapper shared by every paginated list endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-supplied pagination window, bounds-checked against the configured
/// ceilings before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub offset: u32,
    pub limit: u32,
}

/// A pagination parameter fell outside the configured bounds. Mapped to an
/// HTTP 422 by the router; out-of-bounds values are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageBoundsError {
    #[error("limit must be at least 1")]
    ZeroLimit,
    #[error("limit {got} exceeds the maximum page size of {max}")]
    LimitTooLarge { got: u32, max: u32 },
    #[error("offset {got} exceeds the maximum offset of {max}")]
    OffsetTooLarge { got: u32, max: u32 },
}

impl PageParams {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Check `1 ≤ limit ≤ max_page` and `offset ≤ max_offset`.
    pub fn validate(&self, max_page: u32, max_offset: u32) -> Result<(), PageBoundsError> {
        if self.limit == 0 {
            return Err(PageBoundsError::ZeroLimit);
        }
        if self.limit > max_page {
            return Err(PageBoundsError::LimitTooLarge {
                got: self.limit,
                max: max_page,
            });
        }
        if self.offset > max_offset {
            return Err(PageBoundsError::OffsetTooLarge {
                got: self.offset,
                max: max_offset,
            });
        }
        Ok(())
    }
}

/// Per-request result metadata.
///
/// Invariants: `num` equals the number of items actually returned and never
/// exceeds `limit`; `offset + num ≤ total` when the backend's total is
/// accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMeta {
    pub offset: u32,
    pub limit: u32,
    pub num: u64,
    pub total: u64,
}

/// The `{meta, data}` wrapper standardizing paginated list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: SearchMeta,
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    /// Wrap a page of results. `total` is the count of records matching the
    /// filter with pagination ignored.
    pub fn new(page: PageParams, data: Vec<T>, total: u64) -> Self {
        Self {
            meta: SearchMeta {
                offset: page.offset,
                limit: page.limit,
                num: data.len() as u64,
                total,
            },
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
