//! Text layout for sequences and their statistics.

use crate::error::{Error, Result};
use crate::run::runs;
use crate::stats::Statistics;
use crate::symbol::Symbol;
use std::fmt::Write;

/// Glyph used to draw a run of `1`s.
pub const ONE_GLYPH: char = '#';
/// Glyph used to draw a run of `2`s.
pub const TWO_GLYPH: char = '.';

/// Lays the sequence out as rows of `width` digits, each labelled with the
/// index of its first term.
///
/// ```
/// use kolakoski::{format_rows, generate};
///
/// let text = format_rows(&generate(10), 4).unwrap();
/// assert_eq!(text, "     0: 1221\n     4: 1212\n     8: 21\n");
/// ```
pub fn format_rows(sequence: &[Symbol], width: usize) -> Result<String> {
    if width == 0 {
        return Err(Error::ZeroWidth);
    }

    let mut out = String::with_capacity(sequence.len() + (sequence.len() / width + 1) * 9);
    for (row, chunk) in sequence.chunks(width).enumerate() {
        let _ = write!(out, "{:6}: ", row * width);
        for symbol in chunk {
            let _ = write!(out, "{symbol}");
        }
        out.push('\n');
    }
    Ok(out)
}

/// Renders the statistics as labelled lines.
pub fn format_statistics(stats: &Statistics<Symbol>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, " Total terms: {}", stats.total_terms);
    let _ = writeln!(out, " Count of 1: {}", stats.count(&Symbol::One));
    let _ = writeln!(out, " Count of 2: {}", stats.count(&Symbol::Two));
    let _ = writeln!(out, " Runs: {}", stats.num_runs);
    let _ = writeln!(out, " Run length distribution (length : frequency):");
    for (length, freq) in &stats.run_length_distribution {
        let _ = writeln!(out, "  {length:2} : {freq}");
    }
    out
}

/// Draws the first `max_runs` runs, one glyph per term.
pub fn visualize_runs(sequence: &[Symbol], max_runs: usize) -> String {
    runs(sequence.iter().copied())
        .take(max_runs)
        .flat_map(|run| {
            let glyph = match run.symbol {
                Symbol::One => ONE_GLYPH,
                Symbol::Two => TWO_GLYPH,
            };
            std::iter::repeat(glyph).take(run.length)
        })
        .collect()
}
