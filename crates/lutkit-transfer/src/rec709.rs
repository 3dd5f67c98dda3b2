//! Rec.709 (BT.709) transfer curve.
//!
//! The Rec.709 OETF is used for HDTV encoding. Note that the commonly
//! used Rec.709 display EOTF is actually BT.1886 (gamma 2.4), not the
//! inverse of the OETF; this module implements the OETF pair.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Rec.709 encode: Linear light to Rec.709 signal.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Rec.709 decode: Rec.709 signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}
