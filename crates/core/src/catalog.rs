//! Catalog index parsing.
//!
//! The top-level index page (`html/s1.html`) lists every book on the disc
//! as an anchor pointing at the book's title page:
//!
//! ```text
//! <A HREF="knjiga1/naslov.html" target="_top">ZLATAROVO ZLATO, August Senoa</A>
//! ```
//!
//! The label before the first comma is the title, the rest the author;
//! entries without a comma have no author.

use std::path::Path;

use regex::Regex;

use crate::Result;
use crate::encoding::read_windows1250;

/// One book entry from the catalog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Per-book directory name under `html/`, uppercased.
    pub slug: String,
    /// Book title, title-cased.
    pub title: String,
    /// Author as listed, empty when the entry has none.
    pub author: String,
}

impl Book {
    /// Title used for the output document and its filename.
    pub fn display_title(&self) -> String {
        if self.author.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.author, self.title)
        }
    }
}

/// List every book in the catalog index, in document order.
pub fn list_books(root: &Path) -> Result<Vec<Book>> {
    let page = read_windows1250(&root.join("html").join("s1.html"))?;
    let entry = Regex::new(r#"(?i)<a href="(\w+)/naslov\.html" target="_top">(.+?)</a>"#).unwrap();

    let books = entry
        .captures_iter(&page)
        .map(|caps| {
            let (title, author) = match caps[2].split_once(',') {
                Some((title, author)) => (title, author),
                None => (&caps[2], ""),
            };
            Book {
                slug: caps[1].to_uppercase(),
                title: title_case(title.trim()),
                author: author.trim().to_string(),
            }
        })
        .collect();

    Ok(books)
}

/// Uppercase the first letter of every word, lowercase the rest.
///
/// Any non-alphabetic character starts a new word, so hyphenated and
/// apostrophed names capitalize each segment.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}
