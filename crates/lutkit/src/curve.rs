//! The closed set of transfer curves the engine knows about.
//!
//! The set is fixed at compile time, so dispatch is a plain `match`
//! over a fieldless enum rather than dynamic dispatch over trait
//! objects; a [`TransferCurve`] is `Copy` and costs nothing to pass
//! around.

use lutkit_transfer::{
    alexa_log_c, cineon, gamma, panalog, ploglin, rec709, red_log, s_log, srgb, viper_log,
};

/// A named transfer curve: a pure `encode`/`decode` pair over
/// normalized floats.
///
/// [`TransferCurve::Linear`] is the identity; the engine skips all
/// table machinery for it and uses direct arithmetic instead (see
/// [`crate::linear`]).
///
/// # Example
///
/// ```rust
/// use lutkit::TransferCurve;
///
/// let c = TransferCurve::SRgb;
/// let v = c.encode(0.5);
/// assert!((c.decode(v) - 0.5).abs() < 1e-5);
/// assert!(!c.is_linear());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransferCurve {
    /// Identity: encoded == linear.
    #[default]
    Linear,
    /// sRGB (IEC 61966-2-1).
    SRgb,
    /// Rec.709 OETF (ITU-R BT.709).
    Rec709,
    /// Kodak Cineon log.
    Cineon,
    /// Pure gamma 1.8.
    Gamma18,
    /// Pure gamma 2.2.
    Gamma22,
    /// Panalog (Panavision Genesis).
    Panalog,
    /// REDLog (RED cameras).
    RedLog,
    /// ViperLog (Grass Valley Viper FilmStream).
    ViperLog,
    /// ARRI ALEXA LogC v3, EI 800.
    AlexaV3LogC,
    /// Pivoted log/lin, 18% gray at CV 445.
    Ploglin,
    /// Sony S-Log.
    SLog,
}

impl TransferCurve {
    /// Every curve, in discriminant order.
    pub const ALL: [TransferCurve; 12] = [
        Self::Linear,
        Self::SRgb,
        Self::Rec709,
        Self::Cineon,
        Self::Gamma18,
        Self::Gamma22,
        Self::Panalog,
        Self::RedLog,
        Self::ViperLog,
        Self::AlexaV3LogC,
        Self::Ploglin,
        Self::SLog,
    ];

    /// Encodes a linear value to the curve's signal.
    #[inline]
    pub fn encode(self, l: f32) -> f32 {
        match self {
            Self::Linear => l,
            Self::SRgb => srgb::encode(l),
            Self::Rec709 => rec709::encode(l),
            Self::Cineon => cineon::encode(l),
            Self::Gamma18 => gamma::encode_18(l),
            Self::Gamma22 => gamma::encode_22(l),
            Self::Panalog => panalog::encode(l),
            Self::RedLog => red_log::encode(l),
            Self::ViperLog => viper_log::encode(l),
            Self::AlexaV3LogC => alexa_log_c::encode(l),
            Self::Ploglin => ploglin::encode(l),
            Self::SLog => s_log::encode(l),
        }
    }

    /// Decodes the curve's signal back to a linear value.
    #[inline]
    pub fn decode(self, v: f32) -> f32 {
        match self {
            Self::Linear => v,
            Self::SRgb => srgb::decode(v),
            Self::Rec709 => rec709::decode(v),
            Self::Cineon => cineon::decode(v),
            Self::Gamma18 => gamma::decode_18(v),
            Self::Gamma22 => gamma::decode_22(v),
            Self::Panalog => panalog::decode(v),
            Self::RedLog => red_log::decode(v),
            Self::ViperLog => viper_log::decode(v),
            Self::AlexaV3LogC => alexa_log_c::decode(v),
            Self::Ploglin => ploglin::decode(v),
            Self::SLog => s_log::decode(v),
        }
    }

    /// Returns `true` for the identity curve.
    ///
    /// Guarantees `encode(x) == x` and `decode(x) == x` for all x,
    /// which lets the engine skip table construction entirely.
    #[inline]
    pub const fn is_linear(self) -> bool {
        matches!(self, Self::Linear)
    }

    /// Human-readable curve name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::SRgb => "sRGB",
            Self::Rec709 => "Rec709",
            Self::Cineon => "Cineon",
            Self::Gamma18 => "Gamma1.8",
            Self::Gamma22 => "Gamma2.2",
            Self::Panalog => "Panalog",
            Self::RedLog => "REDLog",
            Self::ViperLog => "ViperLog",
            Self::AlexaV3LogC => "AlexaV3LogC",
            Self::Ploglin => "Ploglin",
            Self::SLog => "SLog",
        }
    }
}

impl std::fmt::Display for TransferCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
