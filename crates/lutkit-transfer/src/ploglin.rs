//! Pivoted log/lin transfer curve (Josh Pines style).
//!
//! A pure Cineon-density log pivoted so that 18% gray sits at code
//! value 445: 0.002 density per code value over a 0.6 negative gamma
//! (300 code values per decade). Like ViperLog it has no mathematical
//! black; the white end is anchored so linear 1.0 encodes to signal 1.

/// Linear pivot (18% gray).
const LIN_REFERENCE: f32 = 0.18;

/// Code value of the pivot.
const LOG_REFERENCE: f32 = 445.0;

/// Code values per decade: negative gamma 0.6 over 0.002 density/CV.
const CV_PER_DECADE: f32 = 300.0;

/// Code value of linear 1.0: `300 * log10(1 / 0.18) + 445`.
const CV_WHITE: f32 = 668.41825;

/// Linear value that encodes to signal 0: `0.18 * 10^(-445/300)`.
const MIN_LINEAR: f32 = 0.005915023;

/// Ploglin encode: Linear light to log signal.
///
/// Inputs at or below [`MIN_LINEAR`] (including 0) map to 0.
#[inline]
pub fn encode(l: f32) -> f32 {
    if l <= MIN_LINEAR {
        return 0.0;
    }
    (CV_PER_DECADE * (l / LIN_REFERENCE).log10() + LOG_REFERENCE) / CV_WHITE
}

/// Ploglin decode: Log signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    LIN_REFERENCE * 10.0_f32.powf((CV_WHITE * v - LOG_REFERENCE) / CV_PER_DECADE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_above_floor() {
        for i in 0..=1000 {
            let x = MIN_LINEAR + (1.0 - MIN_LINEAR) * i as f32 / 1000.0;
            let back = decode(encode(x));
            assert!((x - back).abs() < 1e-5, "x={}, back={}", x, back);
        }
    }

    #[test]
    fn test_pivot() {
        // 18% gray sits at CV 445 of the anchored range
        let v = encode(LIN_REFERENCE);
        assert!((v - LOG_REFERENCE / CV_WHITE).abs() < 1e-6);
        assert!((decode(LOG_REFERENCE / CV_WHITE) - LIN_REFERENCE).abs() < 1e-6);
    }

    #[test]
    fn test_floor_and_white() {
        assert_eq!(encode(0.0), 0.0);
        assert!((decode(0.0) - MIN_LINEAR).abs() < 1e-6);
        assert!((encode(1.0) - 1.0).abs() < 1e-5);
    }
}
