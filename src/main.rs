//! kolakoski - prints the Kolakoski sequence and its run statistics

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use kolakoski::{analyze, format_rows, format_statistics, generate, visualize_runs};
use kolakoski::{ONE_GLYPH, TWO_GLYPH};
use std::process;
use tracing::info;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!(terms = cli.terms, width = cli.width, runs = cli.runs, "starting");

    let seq = generate(cli.terms);
    let rows = format_rows(&seq, cli.width)
        .with_context(|| format!("Cannot lay out {} terms", cli.terms))?;
    let stats = analyze(&seq);

    println!("Kolakoski sequence - the self-describing sequence of 1s and 2s\n");
    println!("First {} terms:\n", cli.terms);
    print!("{rows}");

    println!("\nStatistics:");
    print!("{}", format_statistics(&stats));

    println!("\nRun visualization (first {} runs):", cli.runs);
    println!("{}", visualize_runs(&seq, cli.runs));
    println!(
        "\n(Legend: '{}' = run of 1s, '{}' = run of 2s)",
        ONE_GLYPH, TWO_GLYPH
    );

    Ok(())
}
