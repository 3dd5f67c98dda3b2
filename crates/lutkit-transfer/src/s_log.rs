//! Sony S-Log transfer curve.
//!
//! S-Log is Sony's logarithmic encoding for their digital cinema
//! cameras (F35, F23, and later the F65/F55 families via S-Log2/3).
//! The published IRE formula is
//! `0.432699 * log10(x + 0.037584) + 0.616596 + 0.03`, which puts
//! black at 3% IRE with headroom above reference white; anchored here
//! so linear [0, 1] spans signal [0, 1] (see the crate-level note on
//! normalization). The 0.037584 linear offset, and therefore the
//! curve shape, is unchanged.
//!
//! # Reference
//!
//! Sony S-Log Technical Summary

/// Linear offset added before the log.
const LIN_OFFSET: f32 = 0.037584;

/// Reciprocal of the linear offset.
const SLOPE: f32 = 26.60707;

/// Decades between black and white: `log10(1 + 1 / LIN_OFFSET)`.
const DECADES: f32 = 1.4410203;

/// S-Log encode: Linear light to log signal.
#[inline]
pub fn encode(l: f32) -> f32 {
    let arg = 1.0 + SLOPE * l;
    if arg <= 0.0 {
        return 0.0;
    }
    arg.log10() / DECADES
}

/// S-Log decode: Log signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    (10.0_f32.powf(DECADES * v) - 1.0) / SLOPE
}
