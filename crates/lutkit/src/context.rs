//! Profile registry and context object.
//!
//! A [`LutContext`] owns one shared [`Lut`] per transfer curve and
//! hands out clones of the `Arc` on demand. Constructing a context is
//! cheap: no table is built until a profile's `Lut` is first used for
//! a non-trivial conversion.
//!
//! Callers that want process-wide sharing without threading a context
//! through their call graph can use [`LutContext::global`], which
//! lazily initializes a single static context; everything else should
//! own or borrow a context explicitly.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::curve::TransferCurve;
use crate::lut::Lut;

/// A named conversion profile.
///
/// The role-based defaults resolve to a concrete curve via
/// [`Profile::curve`]; aliased profiles share one [`Lut`] inside a
/// [`LutContext`], so the monitor, viewer and integer defaults all hit
/// the same sRGB tables.
///
/// # Example
///
/// ```rust
/// use lutkit::{Profile, TransferCurve};
///
/// assert_eq!(Profile::MonitorDefault.curve(), TransferCurve::SRgb);
/// assert_eq!(Profile::LogDefault.curve(), TransferCurve::Cineon);
/// assert_eq!(
///     Profile::Curve(TransferCurve::Rec709).curve(),
///     TransferCurve::Rec709,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Default for display on a standard monitor.
    MonitorDefault,
    /// Default for viewer/preview rendering.
    ViewerDefault,
    /// Default for 8-bit integer images.
    Int8Default,
    /// Default for 16-bit integer images.
    Int16Default,
    /// Default for log-encoded film scans.
    LogDefault,
    /// Default for float images (no encoding).
    FloatDefault,
    /// An explicit named curve.
    Curve(TransferCurve),
}

impl Profile {
    /// Resolves the profile to its concrete transfer curve.
    pub const fn curve(self) -> TransferCurve {
        match self {
            Self::MonitorDefault
            | Self::ViewerDefault
            | Self::Int8Default
            | Self::Int16Default => TransferCurve::SRgb,
            Self::LogDefault => TransferCurve::Cineon,
            Self::FloatDefault => TransferCurve::Linear,
            Self::Curve(c) => c,
        }
    }
}

impl From<TransferCurve> for Profile {
    fn from(curve: TransferCurve) -> Self {
        Self::Curve(curve)
    }
}

/// Owns one shared [`Lut`] per transfer curve.
///
/// The closed profile set is fixed at compile time; nothing can be
/// registered at runtime and nothing is dropped before the context
/// itself. Conversions borrow the context, so its lifetime is explicit
/// and a test can spin up an isolated context of its own.
///
/// # Example
///
/// ```rust
/// use lutkit::{LutContext, Profile};
///
/// let ctx = LutContext::new();
/// let lut = ctx.lut(Profile::MonitorDefault);
/// assert_eq!(lut.to_byte_fast(1.0), 255);
/// ```
#[derive(Debug)]
pub struct LutContext {
    luts: [Arc<Lut>; TransferCurve::ALL.len()],
}

impl LutContext {
    /// Creates a context with an empty `Lut` for every curve.
    pub fn new() -> Self {
        debug!("creating lut context");
        Self {
            luts: TransferCurve::ALL.map(|curve| Arc::new(Lut::new(curve))),
        }
    }

    /// Returns the shared `Lut` for a profile.
    ///
    /// Profiles that alias the same curve return clones of the same
    /// `Arc`, so tables are filled at most once per curve per context.
    pub fn lut(&self, profile: Profile) -> Arc<Lut> {
        Arc::clone(&self.luts[profile.curve() as usize])
    }

    /// The process-wide shared context, created on first call.
    pub fn global() -> &'static LutContext {
        static GLOBAL: OnceLock<LutContext> = OnceLock::new();
        GLOBAL.get_or_init(LutContext::new)
    }
}

impl Default for LutContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_mapping() {
        assert_eq!(Profile::MonitorDefault.curve(), TransferCurve::SRgb);
        assert_eq!(Profile::ViewerDefault.curve(), TransferCurve::SRgb);
        assert_eq!(Profile::Int8Default.curve(), TransferCurve::SRgb);
        assert_eq!(Profile::Int16Default.curve(), TransferCurve::SRgb);
        assert_eq!(Profile::LogDefault.curve(), TransferCurve::Cineon);
        assert_eq!(Profile::FloatDefault.curve(), TransferCurve::Linear);
    }

    #[test]
    fn test_aliased_profiles_share_one_lut() {
        let ctx = LutContext::new();
        let monitor = ctx.lut(Profile::MonitorDefault);
        let viewer = ctx.lut(Profile::ViewerDefault);
        let srgb = ctx.lut(Profile::Curve(TransferCurve::SRgb));
        assert!(Arc::ptr_eq(&monitor, &viewer));
        assert!(Arc::ptr_eq(&monitor, &srgb));

        let log = ctx.lut(Profile::LogDefault);
        assert!(!Arc::ptr_eq(&monitor, &log));
        assert_eq!(log.curve(), TransferCurve::Cineon);
    }

    #[test]
    fn test_every_curve_reachable() {
        let ctx = LutContext::new();
        for curve in TransferCurve::ALL {
            assert_eq!(ctx.lut(curve.into()).curve(), curve);
        }
    }

    #[test]
    fn test_global_is_stable() {
        let a = LutContext::global();
        let b = LutContext::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_contexts_are_isolated() {
        let a = LutContext::new();
        let b = LutContext::new();
        let la = a.lut(Profile::MonitorDefault);
        let lb = b.lut(Profile::MonitorDefault);
        assert!(!Arc::ptr_eq(&la, &lb));
    }
}
