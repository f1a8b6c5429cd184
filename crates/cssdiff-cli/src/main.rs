use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use cssdiff_core::{StyleSheet, compare};
use tracing_subscriber::EnvFilter;

mod report;

/// Compare two CSS stylesheets and report functional differences.
///
/// Reordered rules, merged or split blocks, whitespace, and equivalent
/// color notations are ignored; real changes in selectors or declared
/// styles are reported.
#[derive(Parser)]
#[command(name = "cssdiff", version, about, long_about = None)]
struct Cli {
    /// First stylesheet (the reference)
    stylesheet_a: PathBuf,
    /// Second stylesheet (the one compared against the reference)
    stylesheet_b: PathBuf,
}

fn main() {
    // Logs go to stderr so the report on stdout stays clean. Silent unless
    // RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and exit 0; usage errors go to
            // stderr and exit 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let a = StyleSheet::from_file(&cli.stylesheet_a)?;
    let b = StyleSheet::from_file(&cli.stylesheet_b)?;

    let diff = compare(&a, &b)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &a, &b, &diff)?;
    out.flush()?;

    Ok(())
}
