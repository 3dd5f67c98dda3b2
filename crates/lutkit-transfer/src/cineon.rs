//! Kodak Cineon log transfer curve.
//!
//! Cineon encodes printing density over 10-bit code values: reference
//! black at CV 95 and reference white at CV 685, with 0.002 density per
//! code value over a 0.6 negative gamma (300 code values per decade).
//! The softclip offset is `10^-1.97`.
//!
//! Anchored here so black maps to signal 0 and reference white to
//! signal 1 (see the crate-level note on normalization).
//!
//! # Reference
//!
//! Kodak Cineon System Description

/// Softclip offset: 10^-1.97.
const OFFSET: f32 = 0.010715193;

/// Linear multiplier `(1 - OFFSET) / OFFSET`.
const SLOPE: f32 = 92.32543;

/// Code-value decades between black and white: 1.97 = (685 - 94) / 300.
const DECADES: f32 = 1.97;

/// Cineon encode: Linear light to log signal.
///
/// # Example
///
/// ```rust
/// use lutkit_transfer::cineon::encode;
///
/// // 18% gray sits in the lower-middle of the signal range
/// let v = encode(0.18);
/// assert!(v > 0.5 && v < 0.7);
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    let arg = 1.0 + SLOPE * l;
    if arg <= 0.0 {
        return 0.0;
    }
    arg.log10() / DECADES
}

/// Cineon decode: Log signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    (10.0_f32.powf(DECADES * v) - 1.0) / SLOPE
}
