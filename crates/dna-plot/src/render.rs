//! The helix renderer — plot two strands and their rungs, then serialize.
//!
//! One render is three passes over the columns:
//!
//! 1. Validate the configuration; nothing is allocated on failure.
//! 2. For each column, project both strands (sine → row, cosine → depth),
//!    fill the rung between them at every `bar_gap`-th column, then write
//!    the strand glyphs — nearer strand last, so it wins a shared cell.
//! 3. Walk the rows and emit `line_width` characters per line, empty cells
//!    as spaces, each line ending in `\n`.
//!
//! Two quirks of the classic plot are preserved deliberately:
//!
//! - The column loop stops one short of the full width, while serialization
//!   still emits every column — so the last column of every row is blank.
//!   Golden outputs depend on it; widening the loop is a format change.
//! - A sine crest rounds onto the row just past the visible block. The
//!   field carries one extra row to absorb those writes; it is never
//!   serialized.

use crate::config::{FieldCaps, PlotConfig};
use crate::error::PlotError;
use crate::field::Field;
use crate::trace::{Projection, multiplier};

/// The plotting engine, parameterized by field capacity.
///
/// Most callers want [`render`], which uses [`FieldCaps::DEFAULT`]. Hosts
/// with their own parameter limits construct one via [`with_caps`] so the
/// capacity check matches their bounds.
///
/// [`with_caps`]: HelixRenderer::with_caps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelixRenderer {
    caps: FieldCaps,
}

impl HelixRenderer {
    /// A renderer with the default field capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            caps: FieldCaps::DEFAULT,
        }
    }

    /// A renderer with caller-supplied capacity bounds.
    #[must_use]
    pub const fn with_caps(caps: FieldCaps) -> Self {
        Self { caps }
    }

    /// Render `config` into a newline-delimited text block.
    ///
    /// Pure and deterministic: no side effects, no retained state, and
    /// byte-identical output for identical input. The block has
    /// `config.rows()` lines of exactly `config.line_width` characters,
    /// each followed by `\n`; a zero amplitude yields the empty string.
    ///
    /// # Errors
    ///
    /// Any [`PlotError`] from [`PlotConfig::validate`]. On failure nothing
    /// has been computed — there is no partial output.
    pub fn render(&self, config: &PlotConfig) -> Result<String, PlotError> {
        config.validate(self.caps)?;

        let rows = config.rows();
        let step = multiplier(config.wavelength);
        let mut field = Field::new(config.line_width, rows + 1);

        for x in 0..config.line_width.saturating_sub(1) {
            let first = Projection::at(x, config.phase1, step, config.amplitude);
            let second = Projection::at(x, config.phase2, step, config.amplitude);

            // Rung pass. The half-open span between the strands means an
            // aligned column (first.y == second.y) fills nothing.
            if x % config.bar_gap == 0 {
                if first.y < second.y {
                    field.fill_column(x, first.y..second.y, config.bar_major);
                } else {
                    field.fill_column(x, second.y..first.y, config.bar_minor);
                }
            }

            // Strand pass, after the rungs so strand glyphs win shared
            // cells. The nearer strand (larger cosine depth) is drawn
            // last — when both land on one row, it owns the cell.
            if first.z > second.z {
                field.set(x, second.y, config.strand2);
                field.set(x, first.y, config.strand1);
            } else {
                field.set(x, first.y, config.strand1);
                field.set(x, second.y, config.strand2);
            }
        }

        let mut text = String::with_capacity((config.line_width + 1) * rows);
        for y in 0..rows {
            for x in 0..config.line_width {
                text.push(field.get(x, y).unwrap_or(' '));
            }
            text.push('\n');
        }
        Ok(text)
    }
}

/// Render with the default field capacity.
///
/// # Errors
///
/// Any [`PlotError`] from [`PlotConfig::validate`].
pub fn render(config: &PlotConfig) -> Result<String, PlotError> {
    HelixRenderer::new().render(config)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
