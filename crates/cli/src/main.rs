use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use polaris_core::{assemble_book, list_books, sanitize_filename, wrap_document};

/// Extract every book on a Polaris CD-ROM into single-page HTML files
#[derive(Parser, Debug)]
#[command(name = "polaris2html")]
#[command(version)]
#[command(about = "Extract CD-ROM catalog books into single-page HTML files", long_about = None)]
struct Args {
    /// Root of the CD-ROM copy (contains html/s1.html)
    #[arg(value_name = "SOURCE_DIR")]
    source_dir: PathBuf,

    /// Directory the per-book HTML files are written into
    #[arg(value_name = "TARGET_DIR")]
    target_dir: PathBuf,
}

/// Print a one-line progress entry for a written book
fn print_step(done: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", done, total).dimmed(), message.bright_cyan());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !args.source_dir.is_dir() {
        bail!("Not a directory: {}", args.source_dir.display());
    }
    if !args.target_dir.is_dir() {
        bail!("Not a directory: {}", args.target_dir.display());
    }

    let books = list_books(&args.source_dir)?;
    let total = books.len();

    for (done, book) in books.iter().enumerate() {
        let title = book.display_title();
        let content = assemble_book(&args.source_dir, book)?;
        let document = wrap_document(&content, &title);

        let path = args.target_dir.join(format!("{}.html", sanitize_filename(&title)));
        fs::write(&path, document).with_context(|| format!("Failed to write {}", path.display()))?;

        print_step(done + 1, total, &path.display().to_string());
    }

    Ok(())
}
