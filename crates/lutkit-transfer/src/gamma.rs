//! Plain power-law gamma curves.
//!
//! `encode` is the inverse gamma (`l^(1/g)`), `decode` the forward
//! gamma (`v^g`), so that encode/decode matches the linear-to-signal
//! direction used by every other module in this crate.
//!
//! Fixed 1.8 (legacy Mac/print preview) and 2.2 (legacy PC CRT)
//! wrappers are provided for the profiles that need them.

/// Encode with an arbitrary gamma: `l^(1/gamma)`.
#[inline]
pub fn encode(l: f32, gamma: f32) -> f32 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Decode with an arbitrary gamma: `v^gamma`.
#[inline]
pub fn decode(v: f32, gamma: f32) -> f32 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// Gamma 1.8 encode.
#[inline]
pub fn encode_18(l: f32) -> f32 {
    encode(l, 1.8)
}

/// Gamma 1.8 decode.
#[inline]
pub fn decode_18(v: f32) -> f32 {
    decode(v, 1.8)
}

/// Gamma 2.2 encode.
#[inline]
pub fn encode_22(l: f32) -> f32 {
    encode(l, 2.2)
}

/// Gamma 2.2 decode.
#[inline]
pub fn decode_22(v: f32) -> f32 {
    decode(v, 2.2)
}
