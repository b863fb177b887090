//! # dna-plot — Helix plotting core for asciidna
//!
//! Renders an ASCII-art double helix: two sinusoidal strands traced across
//! a character grid, joined by vertical cross-bar rungs at a fixed column
//! stride. The whole crate is one pure computation:
//!
//! ```text
//! PlotConfig
//!     │
//!     ▼
//! config.rs:  validate every parameter (nothing is written on failure)
//!     │
//!     ▼
//! trace.rs:   per-column sine/cosine projections for both strands
//!     │
//!     ▼
//! field.rs:   paint bars, then strands, into the glyph grid
//!     │
//!     ▼
//! render.rs:  serialize the grid into newline-delimited rows
//! ```
//!
//! The algorithm is a rendition of the Delila ASCII DNA plot; its quirks
//! (the never-computed final column, the cosine depth tie-break) are kept
//! bit-for-bit so existing outputs stay reproducible.
//!
//! Rendering is deterministic for a fixed [`PlotConfig`]: same input, same
//! bytes out. There is no retained state — each call builds a fresh
//! [`field::Field`], serializes it, and drops it.

// Column indices feed trig as f64 (widths are bounded by the field caps).
#![allow(clippy::cast_precision_loss)]
// Rounded projections are non-negative before the cast back to a row index.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod config;
pub mod error;
pub mod field;
pub mod render;
pub mod trace;

pub use config::{FieldCaps, PlotConfig};
pub use error::PlotError;
pub use render::{HelixRenderer, render};
