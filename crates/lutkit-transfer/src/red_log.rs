//! REDLog transfer curve (RED cameras).
//!
//! Cineon-style log over 10-bit code values: 0.01 black offset, 511
//! code values per decade, white at CV 1023. The published curve
//! already spans the full signal range (black at CV 1, white at CV
//! 1023), so no re-anchoring is needed.
//!
//! # Reference
//!
//! RED Digital Cinema - REDLog white paper

/// Black offset of the log argument.
const OFFSET: f32 = 0.01;

/// Code values per decade.
const CV_PER_DECADE: f32 = 511.0;

/// Full-scale code value.
const CV_MAX: f32 = 1023.0;

/// REDLog encode: Linear light to log signal.
#[inline]
pub fn encode(l: f32) -> f32 {
    let arg = OFFSET + (1.0 - OFFSET) * l;
    if arg <= 0.0 {
        return 0.0;
    }
    (CV_PER_DECADE * arg.log10() + CV_MAX) / CV_MAX
}

/// REDLog decode: Log signal to linear light.
#[inline]
pub fn decode(v: f32) -> f32 {
    (10.0_f32.powf(CV_MAX * (v - 1.0) / CV_PER_DECADE) - OFFSET) / (1.0 - OFFSET)
}
