//! ARRI ALEXA LogC transfer curve (v3, EI 800).
//!
//! LogC is ARRI's logarithmic encoding for their digital cinema
//! cameras. Parameters vary with the camera EI (Exposure Index)
//! setting; this implementation uses the v3 curve at EI 800, the most
//! common configuration.
//!
//! The published curve encodes scene-referred light with headroom
//! above 1.0; here it is anchored so linear [0, 1] spans signal
//! [0, 1] (see the crate-level note on normalization).
//!
//! # Reference
//!
//! ARRI LogC3 Specification

// LogC3 constants for EI 800
const CUT: f32 = 0.010591;
const A: f32 = 5.555556;
const B: f32 = 0.052272;
const C: f32 = 0.247190;
const D: f32 = 0.385537;
const E: f32 = 5.367655;
const F: f32 = 0.092809;

/// Raw signal at linear 0 (`F`, the toe intercept).
const BLACK: f32 = F;

/// Raw signal at linear 1: `C * log10(A + B) + D`.
const WHITE: f32 = 0.57063156;

/// Raw signal span between [`BLACK`] and [`WHITE`].
const RANGE: f32 = WHITE - BLACK;

/// Raw signal at the linear/log breakpoint: `E * CUT + F`.
const RAW_CUT: f32 = 0.14965849;

/// LogC encode: Linear light to LogC signal.
///
/// # Example
///
/// ```rust
/// use lutkit_transfer::alexa_log_c::encode;
///
/// let v = encode(0.18);
/// assert!(v > 0.5 && v < 0.75);
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    let raw = if l > CUT {
        C * (A * l + B).log10() + D
    } else {
        E * l + F
    };
    (raw - BLACK) / RANGE
}

/// LogC decode: LogC signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    let raw = v * RANGE + BLACK;
    if raw > RAW_CUT {
        (10.0_f32.powf((raw - D) / C) - B) / A
    } else {
        (raw - F) / E
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let x = i as f32 / 1000.0;
            let back = decode(encode(x));
            assert!((x - back).abs() < 1e-5, "x={}, back={}", x, back);
        }
    }

    #[test]
    fn test_anchors() {
        assert!(encode(0.0).abs() < 1e-6);
        assert!((encode(1.0) - 1.0).abs() < 1e-5);
        assert!(decode(0.0).abs() < 1e-6);
        assert!((decode(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_breakpoint_continuity() {
        let below = encode(CUT - 1e-6);
        let above = encode(CUT + 1e-6);
        assert!(
            (below - above).abs() < 1e-4,
            "discontinuity at cut: {} vs {}",
            below,
            above
        );
    }
}
