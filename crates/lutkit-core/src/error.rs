//! Error types for conversion preconditions.
//!
//! The conversion engine has no recoverable I/O or transient failures;
//! every error here is a caller-side precondition violation surfaced as
//! a typed error at the rect-routine boundary.
//!
//! # Usage
//!
//! ```rust
//! use lutkit_core::{Error, RectI, Result};
//!
//! fn check(rect: RectI, rod: RectI) -> Result<()> {
//!     if !rod.contains_rect(&rect) {
//!         return Err(Error::RectOutsideRod { rect, rod });
//!     }
//!     Ok(())
//! }
//! ```

use crate::RectI;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported by the conversion routines.
#[derive(Debug, Error)]
pub enum Error {
    /// The processing sub-window is not contained in the region of
    /// definition.
    ///
    /// Rect routines require `rect ⊆ rod`; there is no silent clipping.
    #[error("rect {rect} is not contained in rod {rod}")]
    RectOutsideRod {
        /// Sub-window that was requested
        rect: RectI,
        /// Region of definition of the buffers
        rod: RectI,
    },

    /// A packed buffer does not hold exactly `rod.area() * 4` elements.
    #[error("{role} buffer holds {got} elements, expected {expected} for rod {rod}")]
    BufferSize {
        /// Which buffer was mis-sized ("source" or "destination")
        role: &'static str,
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
        /// Region of definition the buffers must cover
        rod: RectI,
    },

    /// Requested integer width is outside the supported range.
    ///
    /// Short conversions accept 1..=16 bits.
    #[error("bit depth {bits} out of range (expected 1..=16)")]
    InvalidBitDepth {
        /// Requested bit depth
        bits: u32,
    },
}

impl Error {
    /// Creates an [`Error::RectOutsideRod`].
    #[inline]
    pub fn rect_outside_rod(rect: RectI, rod: RectI) -> Self {
        Self::RectOutsideRod { rect, rod }
    }

    /// Creates an [`Error::BufferSize`].
    #[inline]
    pub fn buffer_size(role: &'static str, expected: usize, got: usize, rod: RectI) -> Self {
        Self::BufferSize {
            role,
            expected,
            got,
            rod,
        }
    }
}
