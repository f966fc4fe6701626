//! CLI for pandoc-tablespan - run as `pandoc --filter pandoc-tablespan`.

use clap::Parser;
use pandoc_tablespan::TableFilter;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target output format, passed by pandoc (e.g. latex)
    format: Option<String>,
}

fn main() {
    let args = Args::parse();

    // stdout carries the document, so logs go to stderr (`RUST_LOG=debug`).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let filter = TableFilter::with_defaults();
    let format = args.format.as_deref().unwrap_or_default();

    if let Err(e) = filter.filter_reader(io::stdin().lock(), io::stdout().lock(), format) {
        eprintln!("Error filtering document: {}", e);
        std::process::exit(1);
    }
}
