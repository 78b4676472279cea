//! hashmark CLI - convert a Markdown file to an HTML file.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Convert a restricted Markdown file to HTML.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        eprintln!("Missing {}", cli.input.display());
        process::exit(1);
    }

    let input = fs::read_to_string(&cli.input)?;
    let html = hashmark::to_html(&input);
    fs::write(&cli.output, html)?;

    Ok(())
}
