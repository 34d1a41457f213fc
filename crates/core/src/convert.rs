//! Invocation of the external `ebook-convert` program.
//!
//! Conversion is dispatch-only: the command is built here so the argument
//! list is testable, and the caller runs it without interpreting the
//! converter's outcome.

use std::path::{Path, PathBuf};
use std::process::Command;

/// The Calibre conversion binary, resolved through `PATH`.
pub const EBOOK_CONVERT: &str = "ebook-convert";

/// Chapter split points: any h1 through h4 element.
const CHAPTER_XPATH: &str = "//*[(name()='h1' or name()='h2' or name()='h3' or name()='h4')]";

/// Output path for a conversion: the `.html` suffix swapped for `.mobi`.
pub fn mobi_output_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    let stem = name.strip_suffix(".html").unwrap_or(&name);
    PathBuf::from(format!("{stem}.mobi"))
}

/// Build the converter invocation for one extracted book.
///
/// Kindle output profile, chapters split at any header, and the table of
/// contents bound to h2/h3/h4 for its three levels.
pub fn conversion_command(input: &Path) -> Command {
    let mut cmd = Command::new(EBOOK_CONVERT);
    cmd.arg(input)
        .arg(mobi_output_path(input))
        .args(["--output-profile", "kindle"])
        .args(["--chapter", CHAPTER_XPATH])
        .args(["--level1-toc", "//h:h2"])
        .args(["--level2-toc", "//h:h3"])
        .args(["--level3-toc", "//h:h4"]);
    cmd
}
