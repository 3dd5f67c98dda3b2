//! Direct-arithmetic conversions for the identity curve.
//!
//! When the transfer curve is linear there is nothing to look up:
//! encoding is plain quantization and decoding plain scaling, both
//! exact enough that no dithering is needed. The [`crate::Lut`]
//! routines route here automatically for `TransferCurve::Linear`;
//! the functions are public for callers that know they are dealing
//! with linear data and want to skip the `Lut` entirely.

/// Clamps to `[0, 1]`, mapping NaN to 0.
///
/// Inputs must be clamped before any table indexing or quantization;
/// NaN fails both comparisons and lands on 0.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x >= 1.0 {
        1.0
    } else if x >= 0.0 {
        x
    } else {
        0.0
    }
}

/// Quantizes a linear float to a byte: `round(clamp01(v) * 255)`.
#[inline]
pub fn to_byte(v: f32) -> u8 {
    (clamp01(v) * 255.0 + 0.5) as u8
}

/// Expands a byte to a linear float in `[0, 1]`.
#[inline]
pub fn from_byte(b: u8) -> f32 {
    b as f32 * (1.0 / 255.0)
}

/// Quantizes a linear float to a `bits`-wide integer (1..=16 bits).
#[inline]
pub fn to_short(v: f32, bits: u32) -> u16 {
    debug_assert!((1..=16).contains(&bits));
    let max = ((1_u32 << bits) - 1) as f32;
    (clamp01(v) * max + 0.5) as u16
}

/// Expands a `bits`-wide integer to a linear float in `[0, 1]`.
#[inline]
pub fn from_short(s: u16, bits: u32) -> f32 {
    debug_assert!((1..=16).contains(&bits));
    let max = ((1_u32 << bits) - 1) as f32;
    s as f32 / max
}

/// Planar float-to-byte quantization with stride `delta`.
pub fn to_byte_planar(dst: &mut [u8], src: &[f32], w: usize, delta: usize) {
    assert!(delta >= 1, "delta must be >= 1");
    for i in (0..w * delta).step_by(delta) {
        dst[i] = to_byte(src[i]);
    }
}

/// Planar byte-to-float expansion with stride `delta`.
pub fn from_byte_planar(dst: &mut [f32], src: &[u8], w: usize, delta: usize) {
    assert!(delta >= 1, "delta must be >= 1");
    for i in (0..w * delta).step_by(delta) {
        dst[i] = from_byte(src[i]);
    }
}

/// Planar float-to-short quantization with stride `delta`.
pub fn to_short_planar(dst: &mut [u16], src: &[f32], w: usize, bits: u32, delta: usize) {
    assert!(delta >= 1, "delta must be >= 1");
    for i in (0..w * delta).step_by(delta) {
        dst[i] = to_short(src[i], bits);
    }
}

/// Planar short-to-float expansion with stride `delta`.
pub fn from_short_planar(dst: &mut [f32], src: &[u16], w: usize, bits: u32, delta: usize) {
    assert!(delta >= 1, "delta must be >= 1");
    for i in (0..w * delta).step_by(delta) {
        dst[i] = from_short(src[i], bits);
    }
}

/// Planar clamped copy with stride `delta`.
pub fn to_float_planar(dst: &mut [f32], src: &[f32], w: usize, delta: usize) {
    assert!(delta >= 1, "delta must be >= 1");
    for i in (0..w * delta).step_by(delta) {
        dst[i] = clamp01(src[i]);
    }
}
