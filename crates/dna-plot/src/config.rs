//! Plot parameters — the strongly-typed record one render consumes.
//!
//! | field                  | meaning                                  | valid                  |
//! |------------------------|------------------------------------------|------------------------|
//! | `line_width`           | output columns                           | ≤ `FieldCaps::x_max`   |
//! | `wavelength`           | columns per full twist                   | finite, non-zero       |
//! | `amplitude`            | vertical scale; rounds to the row count  | finite, ≥ 0            |
//! | `phase1`, `phase2`     | horizontal offset of each strand         | finite                 |
//! | `strand1`, `strand2`   | glyph tracing each strand                | one column wide        |
//! | `bar_major`, `bar_minor` | glyphs filling the cross-bar rungs     | one column wide        |
//! | `bar_gap`              | column stride between rungs              | > 0                    |
//!
//! `Default` reproduces the classic plotter's starting state: a 160-column,
//! 16-row helix twisting every 48 columns, strands `W` and `C` shifted −2
//! and 8, rungs `|` and `:` every third column.
//!
//! Unsigned dimensions make negative widths and strides unrepresentable;
//! the only signed quantity that still needs a sign check is the amplitude.
//! Glyphs are single `char`s, so multi-character input cannot reach this
//! layer — but wide and zero-width characters can, and [`PlotConfig::validate`]
//! rejects them because every output row must be exactly `line_width`
//! columns.

use unicode_width::UnicodeWidthChar;

use crate::error::PlotError;

// ─── FieldCaps ───────────────────────────────────────────────────────────────

/// Capacity bounds of the plot field.
///
/// Callers embedding the renderer behind their own parameter limits can
/// tighten or widen these; rendering rejects any configuration that would
/// not fit rather than clamping it silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCaps {
    /// Maximum `line_width`.
    pub x_max: usize,
    /// Field height bound. Must exceed the rounded amplitude by at least
    /// one row: a sine crest rounds onto `round(amplitude)`, one past the
    /// last serialized row.
    pub y_max: usize,
}

impl FieldCaps {
    /// The classic plotter's bounds: 400 columns of line width, amplitudes
    /// up to 150 (plus the crest row, with room to spare).
    pub const DEFAULT: Self = Self { x_max: 400, y_max: 160 };
}

impl Default for FieldCaps {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ─── PlotConfig ──────────────────────────────────────────────────────────────

/// The full parameter record for one render.
///
/// Immutable per call: the renderer takes it by reference, derives
/// everything else (angular multiplier, row count, field size), and never
/// writes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Number of columns in every output row.
    pub line_width: usize,
    /// Columns per full twist of the helix. Divides the angular step, so
    /// it must be non-zero.
    pub wavelength: f64,
    /// Vertical scale. The output has `amplitude.round()` rows.
    pub amplitude: f64,
    /// Phase offset of the first strand, in columns.
    pub phase1: f64,
    /// Phase offset of the second strand, in columns.
    pub phase2: f64,
    /// Glyph tracing the first strand.
    pub strand1: char,
    /// Glyph tracing the second strand.
    pub strand2: char,
    /// Rung glyph used when the first strand is above the second.
    pub bar_major: char,
    /// Rung glyph used when the second strand is above the first.
    pub bar_minor: char,
    /// Column stride between cross-bar rungs.
    pub bar_gap: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            line_width: 160,
            wavelength: 48.0,
            amplitude: 16.0,
            phase1: -2.0,
            phase2: 8.0,
            strand1: 'W',
            strand2: 'C',
            bar_major: '|',
            bar_minor: ':',
            bar_gap: 3,
        }
    }
}

impl PlotConfig {
    /// Number of output rows: the rounded amplitude.
    ///
    /// Meaningful only for a validated configuration (a finite,
    /// non-negative amplitude).
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.amplitude.round() as usize
    }

    /// Check every parameter against the plotting contract and `caps`.
    ///
    /// Runs in full before any field cell is written. Returns the first
    /// violation found; parameter checks precede capacity checks so a
    /// nonsense value is reported as such rather than as an overflow.
    ///
    /// # Errors
    ///
    /// See [`PlotError`] — one variant per violation class.
    pub fn validate(&self, caps: FieldCaps) -> Result<(), PlotError> {
        let numeric = [
            ("wavelength", self.wavelength),
            ("amplitude", self.amplitude),
            ("phase1", self.phase1),
            ("phase2", self.phase2),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(PlotError::NonFinite { name });
            }
        }

        if self.wavelength == 0.0 {
            return Err(PlotError::ZeroWavelength);
        }
        if self.amplitude < 0.0 {
            return Err(PlotError::NegativeAmplitude {
                value: self.amplitude,
            });
        }
        if self.bar_gap == 0 {
            return Err(PlotError::ZeroBarGap);
        }

        let glyphs = [
            ("strand1", self.strand1),
            ("strand2", self.strand2),
            ("bar_major", self.bar_major),
            ("bar_minor", self.bar_minor),
        ];
        for (name, glyph) in glyphs {
            if glyph.width() != Some(1) {
                return Err(PlotError::GlyphWidth { name, glyph });
            }
        }

        if self.line_width > caps.x_max {
            return Err(PlotError::FieldOverflow {
                name: "line width",
                value: self.line_width,
                max: caps.x_max,
            });
        }
        // The field needs rows + 1 rows: sine crests round onto the row
        // just past the visible block.
        let rows = self.rows();
        if rows >= caps.y_max {
            return Err(PlotError::FieldOverflow {
                name: "amplitude rows",
                value: rows,
                max: caps.y_max.saturating_sub(1),
            });
        }

        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const CAPS: FieldCaps = FieldCaps::DEFAULT;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PlotConfig::default().validate(CAPS), Ok(()));
    }

    #[test]
    fn default_rows_match_amplitude() {
        assert_eq!(PlotConfig::default().rows(), 16);
    }

    #[test]
    fn rows_round_half_away_from_zero() {
        let config = PlotConfig {
            amplitude: 4.5,
            ..PlotConfig::default()
        };
        assert_eq!(config.rows(), 5);
    }

    // ── Numeric violations ───────────────────────────────────────────────

    #[test]
    fn zero_wavelength_rejected() {
        let config = PlotConfig {
            wavelength: 0.0,
            ..PlotConfig::default()
        };
        assert_eq!(config.validate(CAPS), Err(PlotError::ZeroWavelength));
    }

    #[test]
    fn negative_wavelength_is_valid() {
        // The wave runs backwards; the divisor just has to be non-zero.
        let config = PlotConfig {
            wavelength: -48.0,
            ..PlotConfig::default()
        };
        assert_eq!(config.validate(CAPS), Ok(()));
    }

    #[test]
    fn nan_wavelength_rejected_as_non_finite() {
        let config = PlotConfig {
            wavelength: f64::NAN,
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(CAPS),
            Err(PlotError::NonFinite { name: "wavelength" })
        );
    }

    #[test]
    fn infinite_phase_rejected() {
        let config = PlotConfig {
            phase2: f64::INFINITY,
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(CAPS),
            Err(PlotError::NonFinite { name: "phase2" })
        );
    }

    #[test]
    fn negative_amplitude_rejected() {
        let config = PlotConfig {
            amplitude: -1.0,
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(CAPS),
            Err(PlotError::NegativeAmplitude { value: -1.0 })
        );
    }

    #[test]
    fn zero_bar_gap_rejected() {
        let config = PlotConfig {
            bar_gap: 0,
            ..PlotConfig::default()
        };
        assert_eq!(config.validate(CAPS), Err(PlotError::ZeroBarGap));
    }

    // ── Glyph violations ─────────────────────────────────────────────────

    #[test]
    fn wide_glyph_rejected() {
        let config = PlotConfig {
            strand1: '中',
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(CAPS),
            Err(PlotError::GlyphWidth {
                name: "strand1",
                glyph: '中',
            })
        );
    }

    #[test]
    fn control_glyph_rejected() {
        let config = PlotConfig {
            bar_minor: '\n',
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(CAPS),
            Err(PlotError::GlyphWidth {
                name: "bar_minor",
                glyph: '\n',
            })
        );
    }

    #[test]
    fn space_glyph_is_valid() {
        // One column wide, just invisible — same as an empty cell.
        let config = PlotConfig {
            bar_major: ' ',
            ..PlotConfig::default()
        };
        assert_eq!(config.validate(CAPS), Ok(()));
    }

    // ── Capacity ─────────────────────────────────────────────────────────

    #[test]
    fn line_width_at_cap_is_valid() {
        let config = PlotConfig {
            line_width: 400,
            ..PlotConfig::default()
        };
        assert_eq!(config.validate(CAPS), Ok(()));
    }

    #[test]
    fn line_width_over_cap_rejected() {
        let config = PlotConfig {
            line_width: 401,
            ..PlotConfig::default()
        };
        assert_eq!(
            config.validate(CAPS),
            Err(PlotError::FieldOverflow {
                name: "line width",
                value: 401,
                max: 400,
            })
        );
    }

    #[test]
    fn amplitude_needs_the_crest_row() {
        let caps = FieldCaps { x_max: 40, y_max: 5 };
        let ok = PlotConfig {
            line_width: 10,
            amplitude: 4.0,
            ..PlotConfig::default()
        };
        assert_eq!(ok.validate(caps), Ok(()));

        let over = PlotConfig {
            amplitude: 5.0,
            ..ok
        };
        assert_eq!(
            over.validate(caps),
            Err(PlotError::FieldOverflow {
                name: "amplitude rows",
                value: 5,
                max: 4,
            })
        );
    }

    #[test]
    fn parameter_errors_win_over_capacity_errors() {
        let config = PlotConfig {
            wavelength: 0.0,
            line_width: 10_000,
            ..PlotConfig::default()
        };
        assert_eq!(config.validate(CAPS), Err(PlotError::ZeroWavelength));
    }
}
