//! ViperLog transfer curve (Grass Valley Viper FilmStream).
//!
//! Pure logarithm over 10-bit code values, 500 code values per decade,
//! white at CV 1023. Being a pure log the curve has no mathematical
//! black; everything at or below `10^(-1023/500)` linear clamps to
//! signal 0.

/// Code values per decade.
const CV_PER_DECADE: f32 = 500.0;

/// Full-scale code value.
const CV_MAX: f32 = 1023.0;

/// Linear value that encodes to signal 0: 10^(-1023/500).
const MIN_LINEAR: f32 = 0.008995298;

/// ViperLog encode: Linear light to log signal.
///
/// Inputs at or below [`MIN_LINEAR`] (including 0) map to 0.
#[inline]
pub fn encode(l: f32) -> f32 {
    if l <= MIN_LINEAR {
        return 0.0;
    }
    (CV_PER_DECADE * l.log10() + CV_MAX) / CV_MAX
}

/// ViperLog decode: Log signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    10.0_f32.powf(CV_MAX * (v - 1.0) / CV_PER_DECADE)
}
