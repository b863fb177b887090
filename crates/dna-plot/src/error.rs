//! Render-boundary errors.
//!
//! Every variant is detected by [`PlotConfig::validate`] before a single
//! field cell is written, so a render either returns the complete text
//! block or one of these — never a half-built plot.
//!
//! [`PlotConfig::validate`]: crate::config::PlotConfig::validate

use thiserror::Error;

/// Why a plot configuration was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// The wavelength is zero. It divides the angular multiplier, so zero
    /// would fault before the first column is projected.
    #[error("wavelength must be non-zero")]
    ZeroWavelength,

    /// A numeric parameter is NaN or infinite.
    #[error("{name} must be finite")]
    NonFinite {
        /// Which parameter failed.
        name: &'static str,
    },

    /// The amplitude is negative. The output row count is the rounded
    /// amplitude, so it must be zero or more.
    #[error("amplitude must be non-negative, got {value}")]
    NegativeAmplitude {
        /// The offending amplitude.
        value: f64,
    },

    /// The bar gap is zero. It is the cross-bar column modulus.
    #[error("bar gap must be positive")]
    ZeroBarGap,

    /// A glyph that does not occupy exactly one terminal column. Wide
    /// (CJK, emoji) and zero-width characters would break the fixed-width
    /// row contract.
    #[error("{name} glyph {glyph:?} is not a single-column character")]
    GlyphWidth {
        /// Which glyph parameter failed.
        name: &'static str,
        /// The offending character.
        glyph: char,
    },

    /// A requested dimension exceeds the field capacity.
    #[error("{name} {value} exceeds field capacity {max}")]
    FieldOverflow {
        /// Which dimension overflowed.
        name: &'static str,
        /// The requested value.
        value: usize,
        /// The largest accepted value.
        max: usize,
    },
}
