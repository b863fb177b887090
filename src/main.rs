// SPDX-License-Identifier: MIT
//
// asciidna — plot an ASCII-art DNA double helix in the terminal.
//
// This binary is the presentation shell around dna-plot's renderer:
//
//   flags → parse → clamp to the classic ranges → render → stdout
//
// Every knob of the classic web plotter is a flag here: the sliders became
// numeric flags clamped to the same ranges, the glyph inputs became
// single-character flags with the same suggestion lists in --help, and the
// accent-colored output became --color. All plotting logic lives in the
// dna-plot crate; the shell only collects parameters and prints.
//
// Errors go to stderr prefixed with the program name. Exit codes: 2 for a
// usage error (bad flag or value), 1 for a rejected configuration.

use std::env;
use std::io::{self, Write};
use std::process;

use dna_plot::{PlotConfig, render};

// ─── Parameter ranges ────────────────────────────────────────────────────────
//
// The classic plotter's slider bounds. Values outside these are clamped,
// not rejected — the renderer's own capacity check then never fires in
// normal use. The wavelength is the exception: zero is a real fault the
// renderer reports, so it passes through unclamped.

const LINE_WIDTH_MAX: usize = 400;
const AMPLITUDE_MAX: f64 = 150.0;
const PHASE_MIN: f64 = -10.0;
const PHASE_MAX: f64 = 10.0;

/// Glyphs the classic plotter suggests for the strands.
const STRAND_SUGGESTIONS: &str = "# X % * + - W C";
/// Glyphs the classic plotter suggests for the rungs.
const BAR_SUGGESTIONS: &str = "| : !";

// ─── Accent color ────────────────────────────────────────────────────────────

/// Foreground accent for the output block, off by default.
///
/// Named after the classic plotter's palette; each maps to an ANSI 256
/// foreground SGR. Presentation only — the renderer never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Accent {
    #[default]
    Plain,
    Green,
    Cyan,
    Magenta,
    Amber,
}

impl Accent {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "green" => Some(Self::Green),
            "cyan" => Some(Self::Cyan),
            "magenta" => Some(Self::Magenta),
            "amber" => Some(Self::Amber),
            _ => None,
        }
    }

    /// The SGR prefix for this accent, or `None` for plain output.
    const fn sgr(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Green => Some("\x1b[38;5;84m"),
            Self::Cyan => Some("\x1b[38;5;51m"),
            Self::Magenta => Some("\x1b[38;5;201m"),
            Self::Amber => Some("\x1b[38;5;214m"),
        }
    }
}

// ─── Flag parsing ────────────────────────────────────────────────────────────

/// Everything main needs from the command line.
#[derive(Debug, Clone, PartialEq)]
struct Args {
    config: PlotConfig,
    accent: Accent,
}

fn usage() -> String {
    let d = PlotConfig::default();
    format!(
        "asciidna — plot an ASCII-art DNA double helix\n\
         \n\
         USAGE:\n\
         \x20   asciidna [FLAGS]\n\
         \n\
         FLAGS:\n\
         \x20   --line-width <n>    columns to plot, 0–{LINE_WIDTH_MAX} [default: {}]\n\
         \x20   --wavelength <n>    columns per full twist, non-zero [default: {}]\n\
         \x20   --amplitude <n>     rows of output, 0–{AMPLITUDE_MAX} [default: {}]\n\
         \x20   --phase1 <n>        first strand shift, {PHASE_MIN}–{PHASE_MAX} [default: {}]\n\
         \x20   --phase2 <n>        second strand shift, {PHASE_MIN}–{PHASE_MAX} [default: {}]\n\
         \x20   --strand1 <c>       first strand glyph [default: {}]  (try: {STRAND_SUGGESTIONS})\n\
         \x20   --strand2 <c>       second strand glyph [default: {}]\n\
         \x20   --bar-major <c>     rung glyph, first strand above [default: {}]  (try: {BAR_SUGGESTIONS})\n\
         \x20   --bar-minor <c>     rung glyph, second strand above [default: {}]\n\
         \x20   --bar-gap <n>       columns between rungs, at least 1 [default: {}]\n\
         \x20   --color <name>      accent: plain, green, cyan, magenta, amber [default: plain]\n\
         \x20   -h, --help          show this text\n",
        d.line_width,
        d.wavelength,
        d.amplitude,
        d.phase1,
        d.phase2,
        d.strand1,
        d.strand2,
        d.bar_major,
        d.bar_minor,
        d.bar_gap,
    )
}

/// The value following a flag, or an error naming the flag.
fn take<'a, I>(flag: &str, values: &mut I) -> Result<&'a str, String>
where
    I: Iterator<Item = &'a String>,
{
    values
        .next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_usize(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} wants a non-negative integer, got {value:?}"))
}

fn parse_f64(flag: &str, value: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} wants a number, got {value:?}"))
}

/// A glyph flag takes exactly one character.
fn parse_glyph(flag: &str, value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Ok(glyph),
        _ => Err(format!("{flag} wants a single character, got {value:?}")),
    }
}

/// Parse flags (program name already stripped) into a clamped config.
fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut config = PlotConfig::default();
    let mut accent = Accent::default();

    let mut values = args.iter();
    while let Some(flag) = values.next() {
        match flag.as_str() {
            "--line-width" => config.line_width = parse_usize(flag, take(flag, &mut values)?)?,
            "--wavelength" => config.wavelength = parse_f64(flag, take(flag, &mut values)?)?,
            "--amplitude" => config.amplitude = parse_f64(flag, take(flag, &mut values)?)?,
            "--phase1" => config.phase1 = parse_f64(flag, take(flag, &mut values)?)?,
            "--phase2" => config.phase2 = parse_f64(flag, take(flag, &mut values)?)?,
            "--strand1" => config.strand1 = parse_glyph(flag, take(flag, &mut values)?)?,
            "--strand2" => config.strand2 = parse_glyph(flag, take(flag, &mut values)?)?,
            "--bar-major" => config.bar_major = parse_glyph(flag, take(flag, &mut values)?)?,
            "--bar-minor" => config.bar_minor = parse_glyph(flag, take(flag, &mut values)?)?,
            "--bar-gap" => config.bar_gap = parse_usize(flag, take(flag, &mut values)?)?,
            "--color" => {
                let name = take(flag, &mut values)?;
                accent = Accent::from_name(name)
                    .ok_or_else(|| format!("unknown accent {name:?}"))?;
            }
            _ => return Err(format!("unrecognized flag {flag:?}, try --help")),
        }
    }

    clamp_to_ranges(&mut config);
    Ok(Args { config, accent })
}

/// Clamp numeric parameters to the classic slider ranges.
///
/// The bar gap's ceiling tracks the line width (a tenth of it, at least 1),
/// so it is clamped after all flags are read.
fn clamp_to_ranges(config: &mut PlotConfig) {
    config.line_width = config.line_width.min(LINE_WIDTH_MAX);
    config.amplitude = config.amplitude.clamp(0.0, AMPLITUDE_MAX);
    config.phase1 = config.phase1.clamp(PHASE_MIN, PHASE_MAX);
    config.phase2 = config.phase2.clamp(PHASE_MIN, PHASE_MAX);
    config.bar_gap = config.bar_gap.clamp(1, (config.line_width / 10).max(1));
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print!("{}", usage());
        return;
    }

    let Args { config, accent } = match parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("asciidna: {message}");
            process::exit(2);
        }
    };

    let plot = match render(&config) {
        Ok(plot) => plot,
        Err(e) => {
            eprintln!("asciidna: {e}");
            process::exit(1);
        }
    };

    let mut out = io::stdout().lock();
    let written = match accent.sgr() {
        Some(sgr) => write!(out, "{sgr}{plot}\x1b[0m"),
        None => out.write_all(plot.as_bytes()),
    };
    if written.is_err() {
        // Broken pipe downstream; nothing sensible left to report.
        process::exit(1);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
