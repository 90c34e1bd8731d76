//! # Kolakoski - Self-Describing Sequence Generator
//!
//! Generates the Kolakoski sequence over the symbols `1` and `2` and computes
//! run statistics for a finite prefix.
//!
//! The sequence is its own run-length encoding: reading the lengths of its
//! maximal runs gives back the sequence itself.
//!
//! ```text
//! sequence:    1 | 2 2 | 1 1 | 2 | 1 | 2 2 | 1 ...
//! run lengths: 1   2     2     1   1   2     1 ...
//! ```
//!
//! ## Example
//!
//! ```
//! use kolakoski::{analyze, generate, Symbol};
//!
//! let seq = generate(10);
//! let digits: String = seq.iter().map(|s| s.to_string()).collect();
//! assert_eq!(digits, "1221121221");
//!
//! let stats = analyze(&seq);
//! assert_eq!(stats.total_terms, 10);
//! assert_eq!(stats.num_runs, 7);
//! assert_eq!(stats.count(&Symbol::Two), 5);
//! ```
//!
//! ## Performance
//!
//! - Generation and analysis are single passes, linear in the prefix length
//! - The lazy [`Kolakoski`] iterator buffers what it has produced, since the
//!   read cursor consumes earlier terms

mod error;
mod generator;
mod render;
mod run;
mod stats;
mod symbol;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use generator::{generate, Kolakoski, SEED};
pub use render::{format_rows, format_statistics, visualize_runs, ONE_GLYPH, TWO_GLYPH};
pub use run::{runs, Run, RunTracker, Runs};
pub use stats::{analyze, Statistics};
pub use symbol::Symbol;
