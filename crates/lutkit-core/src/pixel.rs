//! Packed pixel layouts.
//!
//! The packed conversion routines operate on 4-channel interleaved
//! buffers. The only layout variation supported is the channel order:
//! RGBA or BGRA. The stride is always 4 elements per pixel; only the
//! positions of the red and blue samples change.

/// Channel order of a 4-channel interleaved pixel buffer.
///
/// # Example
///
/// ```rust
/// use lutkit_core::PixelPacking;
///
/// assert_eq!(PixelPacking::Rgba.offsets(), [0, 1, 2, 3]);
/// assert_eq!(PixelPacking::Bgra.offsets(), [2, 1, 0, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelPacking {
    /// Red, green, blue, alpha.
    #[default]
    Rgba,
    /// Blue, green, red, alpha (common for on-screen BGRA surfaces).
    Bgra,
}

impl PixelPacking {
    /// Offsets of the (r, g, b, a) samples within one packed pixel.
    #[inline]
    pub const fn offsets(self) -> [usize; 4] {
        match self {
            Self::Rgba => [0, 1, 2, 3],
            Self::Bgra => [2, 1, 0, 3],
        }
    }

    /// Offset of the red sample.
    #[inline]
    pub const fn r(self) -> usize {
        self.offsets()[0]
    }

    /// Offset of the green sample.
    #[inline]
    pub const fn g(self) -> usize {
        self.offsets()[1]
    }

    /// Offset of the blue sample.
    #[inline]
    pub const fn b(self) -> usize {
        self.offsets()[2]
    }

    /// Offset of the alpha sample.
    #[inline]
    pub const fn a(self) -> usize {
        self.offsets()[3]
    }
}
