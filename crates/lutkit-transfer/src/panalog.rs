//! Panalog transfer curve (Panavision Genesis).
//!
//! Cineon-style log over 10-bit code values with a 0.0408 black offset,
//! 444 code values per decade and white at CV 681. Anchored so black
//! maps to 0 and reference white to 1.

/// Black offset of the published curve.
const OFFSET: f32 = 0.0408;

/// Linear multiplier `(1 - OFFSET) / OFFSET`.
const SLOPE: f32 = 23.509804;

/// Decades between black and white: log10(1 / OFFSET).
const DECADES: f32 = 1.3893398;

/// Panalog encode: Linear light to log signal.
#[inline]
pub fn encode(l: f32) -> f32 {
    let arg = 1.0 + SLOPE * l;
    if arg <= 0.0 {
        return 0.0;
    }
    arg.log10() / DECADES
}

/// Panalog decode: Log signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    (10.0_f32.powf(DECADES * v) - 1.0) / SLOPE
}
