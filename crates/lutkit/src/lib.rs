//! # lutkit
//!
//! Conversion engine between a working linear floating-point
//! representation and encoded, fixed-point, or packed pixel
//! representations (8-bit, 16-bit, float; RGBA/BGRA interleaved
//! buffers), using precomputed lookup tables and error-diffusion
//! dithering to avoid banding.
//!
//! # Architecture
//!
//! Leaf to root:
//!
//! - [`TransferCurve`] - closed enum of encode/decode curve pairs
//!   (backed by `lutkit-transfer`)
//! - [`Lut`] - per-curve table cache, filled lazily exactly once, then
//!   shared read-only; carries the planar and packed-rect conversion
//!   routines
//! - [`LutContext`] / [`Profile`] - resolves named profiles (monitor,
//!   viewer, int8, ...) to shared [`Lut`] instances
//! - [`linear`] - direct-arithmetic bypass used whenever the curve is
//!   the identity
//!
//! # Dithering
//!
//! Quantizing a smooth float gradient to 8 or 16 bits by independent
//! rounding produces visible banding, especially in shadows. The
//! `to_byte`/`to_short` routines instead carry the rounding remainder
//! of each pixel into the next one along the scanline (1-D error
//! diffusion), which the precomputed tables support by storing the
//! encoded byte together with 8 bits of sub-byte precision.
//!
//! # Threading
//!
//! Every conversion call is synchronous. Filled tables are immutable
//! and safely shared between any number of threads; the first fill is
//! guarded by a one-time-initialization primitive so concurrent first
//! use is race-free. With the default `parallel` feature the rect
//! routines dispatch independent scanlines across the rayon pool.
//!
//! # Usage
//!
//! ```rust
//! use lutkit::{LutContext, PixelPacking, Profile, RectI};
//!
//! let ctx = LutContext::new();
//! let lut = ctx.lut(Profile::MonitorDefault);
//!
//! // Planar: linear floats to dithered sRGB bytes
//! let src = [0.0_f32, 0.5, 1.0];
//! let mut dst = [0_u8; 3];
//! lut.to_byte(&mut dst, &src, 3, 1);
//!
//! // Packed: a sub-rect of an RGBA float buffer to BGRA bytes
//! let rod = RectI::from_size(16, 16);
//! let floats = vec![0.25_f32; rod.area() as usize * 4];
//! let mut bytes = vec![0_u8; rod.area() as usize * 4];
//! lut.to_byte_rect(&mut bytes, &floats, rod, rod, false, false, PixelPacking::Bgra)
//!     .unwrap();
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - rayon-parallel scanline dispatch in the rect
//!   routines (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod curve;
pub mod linear;
pub mod lut;
mod packed;
mod planar;

pub use context::{LutContext, Profile};
pub use curve::TransferCurve;
pub use lut::Lut;

// Re-export the core types the public API is expressed in.
pub use lutkit_core::{Error, PixelPacking, RectI, Result};
