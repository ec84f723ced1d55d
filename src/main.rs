//! Webpbatch: batch convert files from an input tree to WebP.
//!
//! Walks the input path, converts every file it can, and mirrors the
//! folder structure under the output root.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use webpbatch::cli::Cli;
use webpbatch::convert;
use webpbatch::utils::{print_completion, print_count, print_header, print_info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        eprintln!(
            "{} Input path does not exist: {}",
            style("✗").red().bold(),
            cli.input.display()
        );
        std::process::exit(2);
    }

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output folder: {}", cli.output.display()))?;

    print_header(&cli.input, &cli.output);

    let sources = convert::collect_sources(&cli.input)?;
    if sources.is_empty() {
        print_info("No files found to process");
        return Ok(());
    }
    print_count("file(s) to process", sources.len());
    println!();

    let summary = convert::run_batch(&cli.input, &cli.output, &sources, &cli.options());
    summary.display();
    print_completion();

    Ok(())
}
