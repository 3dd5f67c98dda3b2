//! Packed-rect conversion routines.
//!
//! These apply the planar conversions across a sub-rectangle of a
//! 4-channel interleaved buffer, handling vertical flip, RGBA/BGRA
//! channel order and alpha premultiplication.
//!
//! # Buffer contract
//!
//! Both buffers are anchored at `rod`'s bottom-left corner and hold
//! exactly `rod.area() * 4` elements; `rect` selects the scanline
//! spans actually touched. The [`PixelPacking`] argument describes the
//! **encoded** buffer (bytes/shorts, or the encoded float side); the
//! linear float buffer is always RGBA. Violations are reported as
//! typed errors, never silently clipped.
//!
//! # Premultiplication
//!
//! On the `to_*` side, `premult` multiplies each channel by alpha
//! before encoding. On the `from_*` side it un-premultiplies before
//! decoding and re-multiplies after, because a transfer curve is only
//! meaningful on unpremultiplied values. Alpha itself always converts
//! by plain quantization; no curve is applied to coverage.
//!
//! # Parallelism
//!
//! The dithering error carry runs strictly left-to-right within one
//! scanline, but scanlines are independent. With the `parallel`
//! feature (default) they are dispatched across the rayon pool.

use lutkit_core::{Error, PixelPacking, RectI, Result};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::linear;
use crate::lut::Lut;

/// Checks the rect/rod/buffer preconditions shared by every routine.
fn validate<D, S>(dst: &[D], src: &[S], rect: RectI, rod: RectI) -> Result<()> {
    if !rod.contains_rect(&rect) {
        return Err(Error::rect_outside_rod(rect, rod));
    }
    let expected = rod.area() as usize * 4;
    if dst.len() != expected {
        return Err(Error::buffer_size("destination", expected, dst.len(), rod));
    }
    if src.len() != expected {
        return Err(Error::buffer_size("source", expected, src.len(), rod));
    }
    Ok(())
}

fn validate_bits(bits: u32) -> Result<u32> {
    if !(1..=16).contains(&bits) {
        return Err(Error::InvalidBitDepth { bits });
    }
    Ok((1_u32 << bits) - 1)
}

/// Runs `kernel` over every scanline of `rect`, handing it the dst and
/// src spans for that row. `invert_y` flips which source row feeds
/// each destination row, mirrored over `rod`.
fn convert_rows<D, S, K>(
    dst: &mut [D],
    src: &[S],
    rect: RectI,
    rod: RectI,
    invert_y: bool,
    kernel: K,
) where
    D: Send,
    S: Sync,
    K: Fn(&mut [D], &[S]) + Sync + Send,
{
    let row_len = rod.width() as usize * 4;
    let x_off = (rect.x1 - rod.x1) as usize * 4;
    let span = rect.width() as usize * 4;
    let lo = (rect.y1 - rod.y1) as usize;
    let hi = (rect.y2 - rod.y1) as usize;
    let last = rod.height() as usize - 1;

    let row = |r: usize, chunk: &mut [D]| {
        if r < lo || r >= hi {
            return;
        }
        let src_r = if invert_y { last - r } else { r };
        let src_base = src_r * row_len + x_off;
        kernel(
            &mut chunk[x_off..x_off + span],
            &src[src_base..src_base + span],
        );
    };

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(r, chunk)| row(r, chunk));

    #[cfg(not(feature = "parallel"))]
    for (r, chunk) in dst.chunks_mut(row_len).enumerate() {
        row(r, chunk);
    }
}

/// Splits one RGBA pixel into channels, premultiplied on request.
#[inline]
fn rgba_in(px: &[f32], premult: bool) -> (f32, f32, f32, f32) {
    let a = px[3];
    if premult {
        (px[0] * a, px[1] * a, px[2] * a, a)
    } else {
        (px[0], px[1], px[2], a)
    }
}

impl Lut {
    /// Converts a `rect` of a linear RGBA float buffer to encoded,
    /// dithered bytes in `packing` order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutkit::{Lut, PixelPacking, RectI, TransferCurve};
    ///
    /// let lut = Lut::new(TransferCurve::SRgb);
    /// let rod = RectI::from_size(8, 8);
    /// let src = vec![1.0_f32; rod.area() as usize * 4];
    /// let mut dst = vec![0_u8; rod.area() as usize * 4];
    /// lut.to_byte_rect(&mut dst, &src, rod, rod, false, false, PixelPacking::Rgba)
    ///     .unwrap();
    /// assert!(dst.iter().all(|&b| b == 255));
    /// ```
    pub fn to_byte_rect(
        &self,
        dst: &mut [u8],
        src: &[f32],
        rect: RectI,
        rod: RectI,
        invert_y: bool,
        premult: bool,
        packing: PixelPacking,
    ) -> Result<()> {
        validate(dst, src, rect, rod)?;
        if rect.is_empty() {
            return Ok(());
        }
        trace!(curve = self.curve().name(), %rect, %rod, invert_y, premult, "to_byte_rect");
        let [ro, go, bo, ao] = packing.offsets();

        if self.is_linear() {
            convert_rows(dst, src, rect, rod, invert_y, |d, s| {
                for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                    let (r, g, b, a) = rgba_in(sp, premult);
                    dp[ro] = linear::to_byte(r);
                    dp[go] = linear::to_byte(g);
                    dp[bo] = linear::to_byte(b);
                    dp[ao] = linear::to_byte(a);
                }
            });
            return Ok(());
        }

        let table = &self.tables().to_byte;
        convert_rows(dst, src, rect, rod, invert_y, |d, s| {
            let mut err_r: u32 = 0;
            let mut err_g: u32 = 0;
            let mut err_b: u32 = 0;
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let (r, g, b, a) = rgba_in(sp, premult);
                err_r = (err_r & 0xff) + table[Self::fixed_index(r)] as u32;
                err_g = (err_g & 0xff) + table[Self::fixed_index(g)] as u32;
                err_b = (err_b & 0xff) + table[Self::fixed_index(b)] as u32;
                dp[ro] = (err_r >> 8) as u8;
                dp[go] = (err_g >> 8) as u8;
                dp[bo] = (err_b >> 8) as u8;
                dp[ao] = linear::to_byte(a);
            }
        });
        Ok(())
    }

    /// Converts a `rect` of a linear RGBA float buffer to encoded,
    /// dithered `bits`-wide integers in `packing` order.
    #[allow(clippy::too_many_arguments)]
    pub fn to_short_rect(
        &self,
        dst: &mut [u16],
        src: &[f32],
        rect: RectI,
        rod: RectI,
        invert_y: bool,
        premult: bool,
        bits: u32,
        packing: PixelPacking,
    ) -> Result<()> {
        validate(dst, src, rect, rod)?;
        let max = validate_bits(bits)?;
        if rect.is_empty() {
            return Ok(());
        }
        trace!(curve = self.curve().name(), %rect, %rod, invert_y, premult, bits, "to_short_rect");
        let [ro, go, bo, ao] = packing.offsets();

        if self.is_linear() {
            convert_rows(dst, src, rect, rod, invert_y, |d, s| {
                for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                    let (r, g, b, a) = rgba_in(sp, premult);
                    dp[ro] = linear::to_short(r, bits);
                    dp[go] = linear::to_short(g, bits);
                    dp[bo] = linear::to_short(b, bits);
                    dp[ao] = linear::to_short(a, bits);
                }
            });
            return Ok(());
        }

        let curve = self.curve();
        let scale = (max * 256) as f32;
        let quant = |v: f32| (linear::clamp01(curve.encode(linear::clamp01(v))) * scale + 0.5) as u32;
        convert_rows(dst, src, rect, rod, invert_y, |d, s| {
            let mut err_r: u32 = 0;
            let mut err_g: u32 = 0;
            let mut err_b: u32 = 0;
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let (r, g, b, a) = rgba_in(sp, premult);
                err_r = (err_r & 0xff) + quant(r);
                err_g = (err_g & 0xff) + quant(g);
                err_b = (err_b & 0xff) + quant(b);
                dp[ro] = (err_r >> 8) as u16;
                dp[go] = (err_g >> 8) as u16;
                dp[bo] = (err_b >> 8) as u16;
                dp[ao] = linear::to_short(a, bits);
            }
        });
        Ok(())
    }

    /// Converts a `rect` of a linear RGBA float buffer to encoded
    /// floats in `packing` order. No precision is lost, so there is no
    /// dithering.
    pub fn to_float_rect(
        &self,
        dst: &mut [f32],
        src: &[f32],
        rect: RectI,
        rod: RectI,
        invert_y: bool,
        premult: bool,
        packing: PixelPacking,
    ) -> Result<()> {
        validate(dst, src, rect, rod)?;
        if rect.is_empty() {
            return Ok(());
        }
        trace!(curve = self.curve().name(), %rect, %rod, invert_y, premult, "to_float_rect");
        let [ro, go, bo, ao] = packing.offsets();
        let curve = self.curve();

        convert_rows(dst, src, rect, rod, invert_y, |d, s| {
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let (r, g, b, a) = rgba_in(sp, premult);
                dp[ro] = curve.encode(linear::clamp01(r));
                dp[go] = curve.encode(linear::clamp01(g));
                dp[bo] = curve.encode(linear::clamp01(b));
                dp[ao] = linear::clamp01(a);
            }
        });
        Ok(())
    }

    /// Converts a `rect` of an encoded byte buffer in `packing` order
    /// back to linear RGBA floats.
    pub fn from_byte_rect(
        &self,
        dst: &mut [f32],
        src: &[u8],
        rect: RectI,
        rod: RectI,
        invert_y: bool,
        premult: bool,
        packing: PixelPacking,
    ) -> Result<()> {
        validate(dst, src, rect, rod)?;
        if rect.is_empty() {
            return Ok(());
        }
        trace!(curve = self.curve().name(), %rect, %rod, invert_y, premult, "from_byte_rect");
        let [ro, go, bo, ao] = packing.offsets();

        if self.is_linear() {
            // unpremultiply then re-premultiply cancels for identity
            convert_rows(dst, src, rect, rod, invert_y, |d, s| {
                for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                    dp[0] = linear::from_byte(sp[ro]);
                    dp[1] = linear::from_byte(sp[go]);
                    dp[2] = linear::from_byte(sp[bo]);
                    dp[3] = linear::from_byte(sp[ao]);
                }
            });
            return Ok(());
        }

        let table = &self.tables().from_byte;
        convert_rows(dst, src, rect, rod, invert_y, |d, s| {
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let a8 = sp[ao];
                let a = linear::from_byte(a8);
                if premult {
                    for (out, enc) in [(0, ro), (1, go), (2, bo)] {
                        dp[out] = if a8 == 0 {
                            0.0
                        } else {
                            let unpre =
                                (sp[enc] as f32 * 255.0 / a8 as f32 + 0.5).min(255.0) as usize;
                            table[unpre] * a
                        };
                    }
                } else {
                    dp[0] = table[sp[ro] as usize];
                    dp[1] = table[sp[go] as usize];
                    dp[2] = table[sp[bo] as usize];
                }
                dp[3] = a;
            }
        });
        Ok(())
    }

    /// Converts a `rect` of an encoded `bits`-wide integer buffer in
    /// `packing` order back to linear RGBA floats.
    #[allow(clippy::too_many_arguments)]
    pub fn from_short_rect(
        &self,
        dst: &mut [f32],
        src: &[u16],
        rect: RectI,
        rod: RectI,
        invert_y: bool,
        premult: bool,
        bits: u32,
        packing: PixelPacking,
    ) -> Result<()> {
        validate(dst, src, rect, rod)?;
        let max = validate_bits(bits)?;
        if rect.is_empty() {
            return Ok(());
        }
        trace!(curve = self.curve().name(), %rect, %rod, invert_y, premult, bits, "from_short_rect");
        let [ro, go, bo, ao] = packing.offsets();
        let curve = self.curve();
        let inv = 1.0 / max as f32;

        convert_rows(dst, src, rect, rod, invert_y, |d, s| {
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let a = linear::clamp01(sp[ao] as f32 * inv);
                for (out, enc) in [(0, ro), (1, go), (2, bo)] {
                    let v = sp[enc] as f32 * inv;
                    dp[out] = if premult {
                        if a > 0.0 {
                            curve.decode(linear::clamp01(v / a)) * a
                        } else {
                            0.0
                        }
                    } else {
                        curve.decode(linear::clamp01(v))
                    };
                }
                dp[3] = a;
            }
        });
        Ok(())
    }

    /// Converts a `rect` of an encoded float buffer in `packing` order
    /// back to linear RGBA floats.
    pub fn from_float_rect(
        &self,
        dst: &mut [f32],
        src: &[f32],
        rect: RectI,
        rod: RectI,
        invert_y: bool,
        premult: bool,
        packing: PixelPacking,
    ) -> Result<()> {
        validate(dst, src, rect, rod)?;
        if rect.is_empty() {
            return Ok(());
        }
        trace!(curve = self.curve().name(), %rect, %rod, invert_y, premult, "from_float_rect");
        let [ro, go, bo, ao] = packing.offsets();
        let curve = self.curve();

        convert_rows(dst, src, rect, rod, invert_y, |d, s| {
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let a = linear::clamp01(sp[ao]);
                for (out, enc) in [(0, ro), (1, go), (2, bo)] {
                    let v = sp[enc];
                    dp[out] = if premult {
                        if a > 0.0 {
                            curve.decode(linear::clamp01(v / a)) * a
                        } else {
                            0.0
                        }
                    } else {
                        curve.decode(linear::clamp01(v))
                    };
                }
                dp[3] = a;
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::TransferCurve;

    fn checkerboard(rod: RectI) -> Vec<f32> {
        let w = rod.width() as usize;
        let h = rod.height() as usize;
        let mut buf = vec![0.0_f32; w * h * 4];
        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) * 4;
                let v = ((x + y) % 5) as f32 / 4.0;
                buf[i] = v;
                buf[i + 1] = 1.0 - v;
                buf[i + 2] = v * 0.5;
                buf[i + 3] = 1.0;
            }
        }
        buf
    }

    #[test]
    fn test_full_rect_matches_planar() {
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(16, 4);
        let src = checkerboard(rod);
        let n = rod.area() as usize * 4;

        let mut packed = vec![0_u8; n];
        lut.to_byte_rect(&mut packed, &src, rod, rod, false, false, PixelPacking::Rgba)
            .unwrap();

        // scanline-by-scanline planar conversion of each channel
        let mut planar = vec![0_u8; n];
        let row = rod.width() as usize * 4;
        for y in 0..rod.height() as usize {
            for c in 0..3 {
                let base = y * row + c;
                lut.to_byte(&mut planar[base..], &src[base..], rod.width() as usize, 4);
            }
            for x in 0..rod.width() as usize {
                let i = y * row + x * 4 + 3;
                planar[i] = linear::to_byte(src[i]);
            }
        }
        assert_eq!(packed, planar);
    }

    #[test]
    fn test_rect_outside_rod_rejected() {
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(8, 8);
        let rect = RectI::new(4, 4, 12, 8);
        let src = vec![0.0_f32; rod.area() as usize * 4];
        let mut dst = vec![0_u8; rod.area() as usize * 4];
        let err = lut
            .to_byte_rect(&mut dst, &src, rect, rod, false, false, PixelPacking::Rgba)
            .unwrap_err();
        assert!(matches!(err, Error::RectOutsideRod { .. }));
    }

    #[test]
    fn test_buffer_size_rejected() {
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(8, 8);
        let src = vec![0.0_f32; rod.area() as usize * 4];
        let mut dst = vec![0_u8; rod.area() as usize * 4 - 1];
        let err = lut
            .to_byte_rect(&mut dst, &src, rod, rod, false, false, PixelPacking::Rgba)
            .unwrap_err();
        assert!(matches!(err, Error::BufferSize { role: "destination", .. }));
    }

    #[test]
    fn test_empty_rect_is_noop() {
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(4, 4);
        let rect = RectI::new(2, 2, 2, 4);
        let src = vec![1.0_f32; rod.area() as usize * 4];
        let mut dst = vec![7_u8; rod.area() as usize * 4];
        lut.to_byte_rect(&mut dst, &src, rect, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        assert!(dst.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_sub_rect_touches_only_rect() {
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(8, 8);
        let rect = RectI::new(2, 2, 6, 6);
        let src = vec![1.0_f32; rod.area() as usize * 4];
        let mut dst = vec![7_u8; rod.area() as usize * 4];
        lut.to_byte_rect(&mut dst, &src, rect, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        for y in 0..8_i32 {
            for x in 0..8_i32 {
                let i = (y * 8 + x) as usize * 4;
                if rect.contains(x, y) {
                    assert_eq!(dst[i], 255);
                } else {
                    assert_eq!(dst[i], 7, "pixel ({}, {}) touched", x, y);
                }
            }
        }
    }

    #[test]
    fn test_bgra_swaps_channels() {
        let lut = Lut::new(TransferCurve::Linear);
        let rod = RectI::from_size(2, 1);
        // red-only pixels
        let src = [1.0_f32, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
        let mut rgba = [0_u8; 8];
        let mut bgra = [0_u8; 8];
        lut.to_byte_rect(&mut rgba, &src, rod, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        lut.to_byte_rect(&mut bgra, &src, rod, rod, false, false, PixelPacking::Bgra)
            .unwrap();
        assert_eq!(&rgba[..4], &[255, 0, 0, 255]);
        assert_eq!(&bgra[..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn test_invert_y_twice_is_identity() {
        let lut = Lut::new(TransferCurve::Rec709);
        let rod = RectI::from_size(6, 5);
        let src = checkerboard(rod);
        let n = rod.area() as usize * 4;

        let mut straight = vec![0_u8; n];
        let mut flipped = vec![0_u8; n];
        lut.to_byte_rect(&mut straight, &src, rod, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        lut.to_byte_rect(&mut flipped, &src, rod, rod, true, false, PixelPacking::Rgba)
            .unwrap();

        // flipping the flipped output row-wise reproduces the straight one
        let row = rod.width() as usize * 4;
        let h = rod.height() as usize;
        let unflipped: Vec<u8> = (0..h)
            .rev()
            .flat_map(|r| flipped[r * row..(r + 1) * row].to_vec())
            .collect();
        assert_eq!(straight, unflipped);
    }

    #[test]
    fn test_byte_rect_roundtrip() {
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(8, 3);
        let src = checkerboard(rod);
        let n = rod.area() as usize * 4;

        let mut bytes = vec![0_u8; n];
        let mut back = vec![0.0_f32; n];
        lut.to_byte_rect(&mut bytes, &src, rod, rod, false, false, PixelPacking::Bgra)
            .unwrap();
        lut.from_byte_rect(&mut back, &bytes, rod, rod, false, false, PixelPacking::Bgra)
            .unwrap();
        for (x, b) in src.iter().zip(&back) {
            assert!((x - b).abs() < 0.01, "x={}, back={}", x, b);
        }
    }

    #[test]
    fn test_premult_to_byte() {
        let lut = Lut::new(TransferCurve::Linear);
        let rod = RectI::from_size(1, 1);
        let src = [1.0_f32, 0.5, 0.0, 0.5];
        let mut dst = [0_u8; 4];
        lut.to_byte_rect(&mut dst, &src, rod, rod, false, true, PixelPacking::Rgba)
            .unwrap();
        assert_eq!(dst, [128, 64, 0, 128]);
    }

    #[test]
    fn test_from_byte_premult_bracket() {
        // decode(unpremult) then re-premult must equal premultiplying
        // the plain decode of the unpremultiplied source
        let lut = Lut::new(TransferCurve::SRgb);
        let rod = RectI::from_size(1, 1);
        let a8 = 128_u8;
        let c8 = 64_u8;
        let src = [c8, c8, c8, a8];
        let mut dst = [0.0_f32; 4];
        lut.from_byte_rect(&mut dst, &src, rod, rod, false, true, PixelPacking::Rgba)
            .unwrap();
        let a = a8 as f32 / 255.0;
        let unpre = (c8 as f32 * 255.0 / a8 as f32 + 0.5) as u8;
        let expected = lut.from_byte_fast(unpre) * a;
        assert!((dst[0] - expected).abs() < 1e-6);
        assert!((dst[3] - a).abs() < 1e-6);
    }

    #[test]
    fn test_short_rect_roundtrip_10bit() {
        let lut = Lut::new(TransferCurve::Cineon);
        let rod = RectI::from_size(4, 4);
        let src = checkerboard(rod);
        let n = rod.area() as usize * 4;

        let mut shorts = vec![0_u16; n];
        let mut back = vec![0.0_f32; n];
        lut.to_short_rect(&mut shorts, &src, rod, rod, false, false, 10, PixelPacking::Rgba)
            .unwrap();
        assert!(shorts.iter().all(|&s| s <= 1023));
        lut.from_short_rect(&mut back, &shorts, rod, rod, false, false, 10, PixelPacking::Rgba)
            .unwrap();
        for (x, b) in src.iter().zip(&back) {
            assert!((x - b).abs() < 0.01, "x={}, back={}", x, b);
        }
    }

    #[test]
    fn test_bad_bit_depth_rejected() {
        let lut = Lut::new(TransferCurve::Cineon);
        let rod = RectI::from_size(2, 2);
        let src = vec![0.0_f32; 16];
        let mut dst = vec![0_u16; 16];
        let err = lut
            .to_short_rect(&mut dst, &src, rod, rod, false, false, 17, PixelPacking::Rgba)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBitDepth { bits: 17 }));
    }

    #[test]
    fn test_float_rect_roundtrip() {
        let lut = Lut::new(TransferCurve::Rec709);
        let rod = RectI::from_size(3, 2);
        let mut src = checkerboard(rod);
        for (i, px) in src.chunks_exact_mut(4).enumerate() {
            px[3] = 0.25 + 0.15 * (i % 5) as f32;
        }
        let n = rod.area() as usize * 4;
        let mut enc = vec![0.0_f32; n];
        let mut back = vec![0.0_f32; n];
        lut.to_float_rect(&mut enc, &src, rod, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        lut.from_float_rect(&mut back, &enc, rod, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        for (x, b) in src.iter().zip(&back) {
            assert!((x - b).abs() < 1e-5, "x={}, back={}", x, b);
        }
    }

    #[test]
    fn test_rod_offset_origin() {
        // rod anchored away from (0, 0): offsets are relative to rod
        let lut = Lut::new(TransferCurve::Linear);
        let rod = RectI::new(10, 20, 14, 23);
        let rect = RectI::new(11, 21, 13, 22);
        let n = rod.area() as usize * 4;
        let src = vec![1.0_f32; n];
        let mut dst = vec![0_u8; n];
        lut.to_byte_rect(&mut dst, &src, rect, rod, false, false, PixelPacking::Rgba)
            .unwrap();
        // row 1 of 3, columns 1..3 of 4
        let row = rod.width() as usize * 4;
        let touched: usize = dst.iter().filter(|&&b| b == 255).count();
        assert_eq!(touched, rect.area() as usize * 4);
        assert_eq!(dst[row + 4], 255);
        assert_eq!(dst[0], 0);
    }
}
