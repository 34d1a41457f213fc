//! Book assembly from the per-book menu page.

use std::path::Path;

use regex::Regex;

use crate::Result;
use crate::catalog::Book;
use crate::encoding::read_windows1250;
use crate::page::extract_page;

/// Concatenate every content page of a book, in menu order.
///
/// The menu page (`menu.html` in the book's directory) links each content
/// page into the body frame with unquoted attributes:
///
/// ```text
/// <A HREF=p3.html target=frbody>III</A>
/// ```
///
/// Fragments are joined with a blank-line separator. An unreadable menu,
/// an unreadable page, or a page with no cell fails the whole book.
pub fn assemble_book(root: &Path, book: &Book) -> Result<String> {
    let book_dir = root.join("html").join(&book.slug);
    let menu = read_windows1250(&book_dir.join("menu.html"))?;
    let entry = Regex::new(r"(?i)<a href=(p\d+\.html) target=frbody>").unwrap();

    let mut fragments = Vec::new();
    for caps in entry.captures_iter(&menu) {
        fragments.push(extract_page(&book_dir.join(&caps[1]))?);
    }

    Ok(fragments.join("\n\n\n"))
}
