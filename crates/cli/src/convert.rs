use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use polaris_core::{EBOOK_CONVERT, conversion_command};

/// Convert extracted book HTML files into Kindle ebooks
#[derive(Parser, Debug)]
#[command(name = "html2ebook")]
#[command(version)]
#[command(about = "Convert extracted book HTML files into Kindle ebooks", long_about = None)]
struct Args {
    /// HTML files to convert; each produces a .mobi next to it
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    for file in &args.files {
        // Each conversion runs to completion; the converter's own output
        // and exit status are not interpreted.
        let _ = conversion_command(file)
            .status()
            .with_context(|| format!("Failed to run {EBOOK_CONVERT}"))?;
    }

    Ok(())
}
