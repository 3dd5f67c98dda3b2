//! Planar (strided flat-array) conversion routines.
//!
//! Every routine processes `w` logical elements separated by `delta`
//! array slots, so callers can address interleaved buffers (`delta =
//! 4` for one channel of RGBA) or de-interleaved channel planes
//! (`delta = 1`).
//!
//! # Preconditions
//!
//! - `delta >= 1`, asserted at entry. `w == 0` is a no-op.
//! - both slices hold at least `(w - 1) * delta + 1` elements
//!   (enforced by slice indexing).
//! - `src` and `dst` must not overlap: the dithering error carry
//!   assumes forward, non-aliased writes. Not detected at runtime.
//!
//! # Dithering
//!
//! `to_byte`/`to_short` carry the quantization remainder of each
//! element into the next (1-D error diffusion). The accumulator is a
//! local reset at the start of every call, never hidden state, so the
//! routines are reentrant and independent scanlines can run in
//! parallel.

use crate::linear;
use crate::lut::Lut;

#[inline]
fn max_value(bits: u32) -> u32 {
    assert!((1..=16).contains(&bits), "bits must be in 1..=16");
    (1_u32 << bits) - 1
}

impl Lut {
    /// Converts linear floats to encoded bytes with error-diffusion
    /// dithering.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutkit::{Lut, TransferCurve};
    ///
    /// let lut = Lut::new(TransferCurve::SRgb);
    /// let src = [0.0_f32, 0.5, 1.0];
    /// let mut dst = [0_u8; 3];
    /// lut.to_byte(&mut dst, &src, 3, 1);
    /// assert_eq!(dst[0], 0);
    /// assert_eq!(dst[2], 255);
    /// assert!((dst[1] as i32 - 188).abs() <= 1);
    /// ```
    pub fn to_byte(&self, dst: &mut [u8], src: &[f32], w: usize, delta: usize) {
        assert!(delta >= 1, "delta must be >= 1");
        if w == 0 {
            return;
        }
        if self.is_linear() {
            linear::to_byte_planar(dst, src, w, delta);
            return;
        }
        let table = &self.tables().to_byte;
        let mut error: u32 = 0;
        for i in (0..w * delta).step_by(delta) {
            error = (error & 0xff) + table[Self::fixed_index(src[i])] as u32;
            dst[i] = (error >> 8) as u8;
        }
    }

    /// Like [`Lut::to_byte`], pre-multiplying each value by its alpha
    /// before encoding.
    pub fn to_byte_premult(
        &self,
        dst: &mut [u8],
        src: &[f32],
        alpha: &[f32],
        w: usize,
        delta: usize,
    ) {
        assert!(delta >= 1, "delta must be >= 1");
        if w == 0 {
            return;
        }
        if self.is_linear() {
            for i in (0..w * delta).step_by(delta) {
                dst[i] = linear::to_byte(src[i] * alpha[i]);
            }
            return;
        }
        let table = &self.tables().to_byte;
        let mut error: u32 = 0;
        for i in (0..w * delta).step_by(delta) {
            error = (error & 0xff) + table[Self::fixed_index(src[i] * alpha[i])] as u32;
            dst[i] = (error >> 8) as u8;
        }
    }

    /// Converts linear floats to `bits`-wide integers (1..=16) with
    /// error-diffusion dithering at the target depth.
    ///
    /// Works by direct arithmetic through the curve rather than the
    /// 8-bit table, keeping 8 fractional bits for the error carry.
    pub fn to_short(&self, dst: &mut [u16], src: &[f32], w: usize, bits: u32, delta: usize) {
        assert!(delta >= 1, "delta must be >= 1");
        let max = max_value(bits);
        if w == 0 {
            return;
        }
        if self.is_linear() {
            linear::to_short_planar(dst, src, w, bits, delta);
            return;
        }
        let scale = (max * 256) as f32;
        let mut error: u32 = 0;
        for i in (0..w * delta).step_by(delta) {
            let encoded = linear::clamp01(self.curve().encode(linear::clamp01(src[i])));
            error = (error & 0xff) + (encoded * scale + 0.5) as u32;
            dst[i] = (error >> 8) as u16;
        }
    }

    /// Encodes linear floats to encoded floats, clamped. No precision
    /// is lost, so there is no dithering.
    pub fn to_float(&self, dst: &mut [f32], src: &[f32], w: usize, delta: usize) {
        assert!(delta >= 1, "delta must be >= 1");
        if self.is_linear() {
            linear::to_float_planar(dst, src, w, delta);
            return;
        }
        for i in (0..w * delta).step_by(delta) {
            dst[i] = self.curve().encode(linear::clamp01(src[i]));
        }
    }

    /// Like [`Lut::to_float`], pre-multiplying by alpha before
    /// encoding.
    pub fn to_float_premult(
        &self,
        dst: &mut [f32],
        src: &[f32],
        alpha: &[f32],
        w: usize,
        delta: usize,
    ) {
        assert!(delta >= 1, "delta must be >= 1");
        for i in (0..w * delta).step_by(delta) {
            dst[i] = self.to_float_fast(src[i] * alpha[i]);
        }
    }

    /// Converts encoded bytes to linear floats by table lookup.
    ///
    /// Decoding discards no precision, so no dithering is involved.
    pub fn from_byte(&self, dst: &mut [f32], src: &[u8], w: usize, delta: usize) {
        assert!(delta >= 1, "delta must be >= 1");
        if w == 0 {
            return;
        }
        if self.is_linear() {
            linear::from_byte_planar(dst, src, w, delta);
            return;
        }
        let table = &self.tables().from_byte;
        for i in (0..w * delta).step_by(delta) {
            dst[i] = table[src[i] as usize];
        }
    }

    /// Like [`Lut::from_byte`], dividing each decoded value by its
    /// alpha (0 where alpha is 0).
    ///
    /// The caller is expected to re-multiply by alpha once any further
    /// work on the unpremultiplied values is done; this routine only
    /// removes the premultiplication.
    pub fn from_byte_unpremult(
        &self,
        dst: &mut [f32],
        src: &[u8],
        alpha: &[u8],
        w: usize,
        delta: usize,
    ) {
        assert!(delta >= 1, "delta must be >= 1");
        for i in (0..w * delta).step_by(delta) {
            let a = alpha[i];
            dst[i] = if a == 0 {
                0.0
            } else {
                self.from_byte_fast(src[i]) * 255.0 / a as f32
            };
        }
    }

    /// Converts `bits`-wide integers (1..=16) to linear floats by
    /// direct arithmetic through the curve.
    pub fn from_short(&self, dst: &mut [f32], src: &[u16], w: usize, bits: u32, delta: usize) {
        assert!(delta >= 1, "delta must be >= 1");
        let max = max_value(bits);
        if w == 0 {
            return;
        }
        if self.is_linear() {
            linear::from_short_planar(dst, src, w, bits, delta);
            return;
        }
        let inv = 1.0 / max as f32;
        for i in (0..w * delta).step_by(delta) {
            dst[i] = self.curve().decode(linear::clamp01(src[i] as f32 * inv));
        }
    }

    /// Decodes encoded floats to linear floats, clamped input.
    pub fn from_float(&self, dst: &mut [f32], src: &[f32], w: usize, delta: usize) {
        assert!(delta >= 1, "delta must be >= 1");
        for i in (0..w * delta).step_by(delta) {
            dst[i] = self.from_float_fast(src[i]);
        }
    }

    /// Like [`Lut::from_float`], dividing each decoded value by its
    /// alpha (0 where alpha is 0). See [`Lut::from_byte_unpremult`]
    /// for the re-multiplication contract.
    pub fn from_float_unpremult(
        &self,
        dst: &mut [f32],
        src: &[f32],
        alpha: &[f32],
        w: usize,
        delta: usize,
    ) {
        assert!(delta >= 1, "delta must be >= 1");
        for i in (0..w * delta).step_by(delta) {
            let a = alpha[i];
            dst[i] = if a > 0.0 {
                self.from_float_fast(src[i]) / a
            } else {
                0.0
            };
        }
    }
}
