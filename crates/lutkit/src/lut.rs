//! Per-curve lookup-table cache.
//!
//! A [`Lut`] owns two precomputed tables for its transfer curve:
//!
//! - `to_byte`: 65536 entries indexed by a 16-bit fixed-point linear
//!   value; each entry packs the encoded byte in the high 8 bits and a
//!   dithering remainder in the low 8 bits (`encoded_byte * 256 +
//!   remainder`), so the error-diffusion loops can carry sub-byte
//!   precision between pixels.
//! - `from_byte`: 256 entries mapping an encoded byte straight back to
//!   a linear float.
//!
//! Tables are filled lazily on first real use, exactly once even under
//! concurrent first access, then shared read-only for the lifetime of
//! the `Lut`. A `Lut` for [`TransferCurve::Linear`] never fills
//! anything; every conversion routine checks [`Lut::is_linear`] first
//! and takes the direct-arithmetic path in [`crate::linear`].

use std::sync::OnceLock;

use tracing::debug;

use crate::curve::TransferCurve;
use crate::linear;

/// Number of entries in the fixed-point to-byte table.
const TO_BYTE_SIZE: usize = 0x1_0000;

/// The immutable table pair, built once per non-linear curve.
pub(crate) struct LutTables {
    /// Encoded byte scaled by 256 plus sub-byte remainder, indexed by
    /// `round(linear * 65535)`.
    pub to_byte: Vec<u16>,
    /// Linear float per encoded byte.
    pub from_byte: Vec<f32>,
}

impl LutTables {
    fn build(curve: TransferCurve) -> Self {
        debug_assert!(!curve.is_linear());
        debug!(curve = curve.name(), "filling conversion tables");

        let mut to_byte = vec![0_u16; TO_BYTE_SIZE];
        for (i, entry) in to_byte.iter_mut().enumerate() {
            let l = i as f32 / 65535.0;
            let encoded = linear::clamp01(curve.encode(l));
            *entry = (encoded * 255.0 * 256.0 + 0.5) as u16;
        }

        let from_byte = (0..256)
            .map(|b| linear::clamp01(curve.decode(b as f32 / 255.0)))
            .collect();

        Self { to_byte, from_byte }
    }
}

/// Shared, lazily-filled conversion tables for one transfer curve.
///
/// Cheap to construct (no table is built until first use); usually
/// obtained from a [`crate::LutContext`] rather than built directly.
///
/// # Example
///
/// ```rust
/// use lutkit::{Lut, TransferCurve};
///
/// let lut = Lut::new(TransferCurve::SRgb);
/// assert_eq!(lut.to_byte_fast(1.0), 255);
/// assert_eq!(lut.from_byte_fast(0), 0.0);
/// ```
pub struct Lut {
    curve: TransferCurve,
    tables: OnceLock<LutTables>,
}

impl Lut {
    /// Creates an empty cache for `curve`; tables fill on first use.
    pub fn new(curve: TransferCurve) -> Self {
        Self {
            curve,
            tables: OnceLock::new(),
        }
    }

    /// The transfer curve this cache serves.
    #[inline]
    pub fn curve(&self) -> TransferCurve {
        self.curve
    }

    /// Returns `true` for the identity curve (no tables ever built).
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.curve.is_linear()
    }

    /// Returns the filled tables, building them on first call.
    ///
    /// Must not be called for the linear curve; callers branch on
    /// [`Lut::is_linear`] first.
    #[inline]
    pub(crate) fn tables(&self) -> &LutTables {
        debug_assert!(!self.is_linear(), "linear curve never uses tables");
        self.tables.get_or_init(|| LutTables::build(self.curve))
    }

    /// 16-bit fixed-point table index for a linear value.
    #[inline]
    pub(crate) fn fixed_index(v: f32) -> usize {
        (linear::clamp01(v) * 65535.0 + 0.5) as usize
    }

    /// Converts one linear float to an encoded byte, round-to-nearest.
    ///
    /// One-off variant of [`Lut::to_byte`] for callers like color
    /// pickers; there is no neighbor to diffuse the remainder into, so
    /// it rounds instead.
    #[inline]
    pub fn to_byte_fast(&self, v: f32) -> u8 {
        if self.is_linear() {
            return linear::to_byte(v);
        }
        let packed = self.tables().to_byte[Self::fixed_index(v)] as u32;
        ((packed + 0x80) >> 8) as u8
    }

    /// Converts one encoded byte to a linear float.
    #[inline]
    pub fn from_byte_fast(&self, b: u8) -> f32 {
        if self.is_linear() {
            return linear::from_byte(b);
        }
        self.tables().from_byte[b as usize]
    }

    /// Encodes one linear float to an encoded float, clamped.
    #[inline]
    pub fn to_float_fast(&self, v: f32) -> f32 {
        if self.is_linear() {
            return linear::clamp01(v);
        }
        self.curve.encode(linear::clamp01(v))
    }

    /// Decodes one encoded float to a linear float, clamped input.
    #[inline]
    pub fn from_float_fast(&self, v: f32) -> f32 {
        if self.is_linear() {
            return linear::clamp01(v);
        }
        self.curve.decode(linear::clamp01(v))
    }
}

impl std::fmt::Debug for Lut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lut")
            .field("curve", &self.curve)
            .field("filled", &self.tables.get().is_some())
            .finish()
    }
}
