//! Terminal rendering of bar charts.

use colored::{ColoredString, Colorize};

use super::bar::{Bar, BarChart};

/// Character width of a full (100%) bar.
pub const BAR_WIDTH: usize = 40;

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: String, color: &str) -> ColoredString {
    match hex_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Number of block characters for `bar`.
pub fn cells(bar: &Bar) -> usize {
    (bar.width / 100.0 * BAR_WIDTH as f64).round() as usize
}

/// Renders each bar as a label line followed by a block line.
///
/// Colors are emitted only when the `colored` crate decides the output
/// supports them.
pub fn render(chart: &BarChart) -> String {
    let mut out = String::new();

    for bar in &chart.bars {
        let filled = cells(bar);
        let mut blocks = "█".repeat(filled);
        if bar.show_count() {
            blocks.push_str(&format!(" {}", bar.value));
        }

        out.push_str(&format!("  {}\n", bar.label));
        out.push_str(&format!("  {}\n", paint(blocks, bar.color)));
    }

    out
}
