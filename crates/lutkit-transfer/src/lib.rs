//! # lutkit-transfer
//!
//! Transfer curves (encode/decode pairs) for color encoding and decoding.
//!
//! Each module provides a pure pair of functions converting between
//! linear light and an encoded signal, both normalized to `[0, 1]`:
//!
//! - `encode(linear) -> encoded` - for storage or display
//! - `decode(encoded) -> linear` - back to the working representation
//!
//! # Supported Curves
//!
//! | Module | Use Case |
//! |--------|----------|
//! | [`srgb`] | Web, consumer displays |
//! | [`rec709`] | HDTV broadcast |
//! | [`gamma`] | Plain power curves (1.8, 2.2) |
//! | [`cineon`] | Kodak Cineon film scans |
//! | [`panalog`] | Panavision Genesis |
//! | [`red_log`] | RED cameras (REDLog) |
//! | [`viper_log`] | Grass Valley Viper FilmStream |
//! | [`alexa_log_c`] | ARRI ALEXA (LogC v3, EI 800) |
//! | [`ploglin`] | Pivoted log/lin (Josh Pines style) |
//! | [`s_log`] | Sony S-Log |
//!
//! # Normalization
//!
//! Camera and film log curves are published against 10-bit code values
//! with headroom above reference white. Here every curve is anchored so
//! that `encode(0) == 0` and `encode(1) == 1`: the full signal range
//! maps onto the full working range, which is what a display/storage
//! conversion table indexed over `[0, 1]` needs. The curve shapes and
//! published constants are unchanged.
//!
//! # Contract
//!
//! Every curve is monotonic on `[0, 1]`, numerically stable at 0 and 1,
//! and round-trips `decode(encode(x))` within 1e-5 absolute error.
//!
//! # Usage
//!
//! ```rust
//! use lutkit_transfer::{srgb, cineon};
//!
//! let encoded = srgb::encode(0.5);
//! let linear = srgb::decode(encoded);
//! assert!((linear - 0.5).abs() < 1e-5);
//!
//! let log = cineon::encode(0.18);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alexa_log_c;
pub mod cineon;
pub mod gamma;
pub mod panalog;
pub mod ploglin;
pub mod red_log;
pub mod rec709;
pub mod s_log;
pub mod srgb;
pub mod viper_log;

// Re-export common functions
pub use alexa_log_c::{decode as alexa_log_c_decode, encode as alexa_log_c_encode};
pub use cineon::{decode as cineon_decode, encode as cineon_encode};
pub use gamma::{decode as gamma_decode, encode as gamma_encode};
pub use panalog::{decode as panalog_decode, encode as panalog_encode};
pub use ploglin::{decode as ploglin_decode, encode as ploglin_encode};
pub use rec709::{decode as rec709_decode, encode as rec709_encode};
pub use red_log::{decode as red_log_decode, encode as red_log_encode};
pub use s_log::{decode as s_log_decode, encode as s_log_encode};
pub use srgb::{decode as srgb_decode, encode as srgb_encode};
pub use viper_log::{decode as viper_log_decode, encode as viper_log_encode};
