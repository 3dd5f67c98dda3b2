//! sRGB transfer curve.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB encode: Linear light to sRGB signal.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use lutkit_transfer::srgb::encode;
///
/// let v = encode(0.214);
/// assert!((v - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// sRGB decode: sRGB signal to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use lutkit_transfer::srgb::decode;
///
/// let l = decode(0.5);
/// assert!((l - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            assert_abs_diff_eq!(decode(encode(x)), x, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode(0.0), 0.0);
        assert_abs_diff_eq!(encode(1.0), 1.0, epsilon = 1e-6);
        assert_eq!(decode(0.0), 0.0);
        assert_abs_diff_eq!(decode(1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint() {
        // sRGB 0.5 should be approximately 0.214 linear
        assert_abs_diff_eq!(decode(0.5), 0.214, epsilon = 0.01);
        // and linear 0.5 encodes to approximately 0.735
        assert_abs_diff_eq!(encode(0.5), 0.735, epsilon = 0.001);
    }
}
