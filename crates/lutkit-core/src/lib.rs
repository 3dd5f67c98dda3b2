//! # lutkit-core
//!
//! Core types shared by the lutkit conversion engine.
//!
//! This crate provides the leaf types used throughout lutkit:
//!
//! - [`RectI`] - Integer rectangle in image coordinates (y-up)
//! - [`PixelPacking`] - Channel order of 4-channel interleaved buffers
//! - [`Error`], [`Result`] - Typed errors for conversion preconditions
//!
//! ## Coordinate Convention
//!
//! Unlike screen-space conventions, all rectangles here live in image
//! space: the origin is at the **bottom-left**, y increases **upward**,
//! and the top/right edges are exclusive. Consumers that hold top-down
//! buffers reconcile the two with the engine's `invert_y` flag.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of lutkit and has no internal
//! dependencies. Both other lutkit crates depend on it:
//!
//! ```text
//! lutkit-core (this crate)
//!    ^
//!    |
//!    +-- lutkit-transfer (transfer curves)
//!    +-- lutkit (table cache, planar/packed conversions)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod rect;

pub use error::{Error, Result};
pub use pixel::PixelPacking;
pub use rect::RectI;
