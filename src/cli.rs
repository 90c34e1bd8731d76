//! Command-line argument parsing for kolakoski

use clap::Parser;

/// Print the Kolakoski sequence and its run statistics
#[derive(Parser, Debug)]
#[command(name = "kolakoski")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of terms to generate
    #[arg(short = 'n', long, default_value = "300")]
    pub terms: usize,

    /// Digits per printed row
    #[arg(short, long, default_value = "100")]
    pub width: usize,

    /// Number of runs drawn in the visualization
    #[arg(short, long, default_value = "80")]
    pub runs: usize,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
