// SPDX-License-Identifier: MIT
//
// dna-plot demo — a small gallery of helix plots straight to stdout.
//
// Renders the classic default configuration plus a few variations so the
// effect of each parameter is visible side by side: a tighter wavelength,
// a taller amplitude, and alternate glyph sets from the classic
// suggestion lists.
//
// Usage:
//   cargo run -p dna-plot --example demo

use dna_plot::{PlotConfig, render};

fn show(title: &str, config: &PlotConfig) {
    println!("── {title}");
    match render(config) {
        Ok(plot) => print!("{plot}"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();
}

fn main() {
    let classic = PlotConfig::default();
    show("classic", &classic);

    show(
        "tight twist (wavelength 16)",
        &PlotConfig {
            line_width: 72,
            wavelength: 16.0,
            amplitude: 8.0,
            ..classic
        },
    );

    show(
        "tall and sparse (amplitude 24, rungs every 6)",
        &PlotConfig {
            line_width: 96,
            amplitude: 24.0,
            bar_gap: 6,
            ..classic
        },
    );

    show(
        "alternate glyphs (# and *, ! rungs)",
        &PlotConfig {
            line_width: 72,
            wavelength: 24.0,
            amplitude: 10.0,
            strand1: '#',
            strand2: '*',
            bar_major: '!',
            bar_minor: '!',
            ..classic
        },
    );
}
