//! Strand projection math — pure scalar trig.
//!
//! Each plotted column projects a strand twice: the sine component gives
//! the row its glyph lands on, the cosine component gives a depth value
//! used only to decide which strand is drawn in front. Both samples go
//! through the same scaling, `round(amplitude * (v + 1) / 2)`, mapping the
//! wave's [-1, 1] range onto [0, round(amplitude)].
//!
//! Note the upper end: a crest (`v = 1`) lands on `round(amplitude)`, one
//! row past the last serialized row. The renderer sizes its field to absorb
//! that write.

use std::f64::consts::TAU;

/// Angular step per column: one full turn every `wavelength` columns.
///
/// The caller guarantees a non-zero wavelength; validation rejects zero
/// before any projection runs.
#[inline]
#[must_use]
pub fn multiplier(wavelength: f64) -> f64 {
    TAU / wavelength
}

/// Scale a wave sample from [-1, 1] onto a row index in [0, round(amplitude)].
///
/// Rounding is `f64::round` — half away from zero — applied uniformly to
/// every projection so strand and bar positions agree.
#[inline]
fn scale(sample: f64, amplitude: f64) -> usize {
    (amplitude * (sample + 1.0) / 2.0).round() as usize
}

/// The two scalar projections of one strand at one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Vertical position: the row the strand glyph lands on.
    pub y: usize,
    /// Depth: decides draw order when strands share a cell. Larger is
    /// nearer the viewer.
    pub z: usize,
}

impl Projection {
    /// Project a strand at column `x` with the given phase offset.
    #[must_use]
    pub fn at(x: usize, phase: f64, multiplier: f64, amplitude: f64) -> Self {
        let angle = multiplier * (x as f64 + phase);
        Self {
            y: scale(angle.sin(), amplitude),
            z: scale(angle.cos(), amplitude),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn multiplier_is_turn_over_wavelength() {
        assert!((multiplier(8.0) - FRAC_PI_4).abs() < 1e-12);
        assert!((multiplier(1.0) - TAU).abs() < 1e-12);
    }

    #[test]
    fn crest_lands_one_past_midline_span() {
        // Quarter wavelength into an 8-column wave: sin = 1, the crest.
        // With amplitude 4 that is row 4 — one past the last visible row 3.
        let p = Projection::at(2, 0.0, multiplier(8.0), 4.0);
        assert_eq!(p.y, 4);
    }

    #[test]
    fn trough_lands_on_row_zero() {
        let p = Projection::at(6, 0.0, multiplier(8.0), 4.0);
        assert_eq!(p.y, 0);
    }

    #[test]
    fn column_zero_sits_on_the_midline() {
        let p = Projection::at(0, 0.0, multiplier(8.0), 4.0);
        assert_eq!(p.y, 2);
        // cos(0) = 1: the strand starts at full depth, nearest the viewer.
        assert_eq!(p.z, 4);
    }

    #[test]
    fn phase_shifts_the_trace() {
        // A phase of half a wavelength mirrors the sine sample.
        let a = Projection::at(0, 0.0, multiplier(8.0), 4.0);
        let b = Projection::at(4, 0.0, multiplier(8.0), 4.0);
        let shifted = Projection::at(0, 4.0, multiplier(8.0), 4.0);
        assert_eq!(shifted.y, b.y);
        assert_ne!(a.z, b.z);
    }

    #[test]
    fn zero_amplitude_projects_to_row_zero() {
        for x in 0..16 {
            let p = Projection::at(x, 3.0, multiplier(5.0), 0.0);
            assert_eq!(p.y, 0);
            assert_eq!(p.z, 0);
        }
    }

    #[test]
    fn negative_phase_is_accepted() {
        let p = Projection::at(0, -2.0, multiplier(48.0), 16.0);
        // sin(-π/12) ≈ -0.2588 → round(16 · 0.7412 / 2) = round(5.93) = 6.
        assert_eq!(p.y, 6);
    }
}
