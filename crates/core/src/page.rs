//! Content page extraction and markup repair.
//!
//! A content page holds one physical page of book text inside a table cell.
//! The export's markup is malformed in a handful of known ways: Windows
//! line endings, paragraph breaks encoded as a `<BR>` plus five
//! non-breaking-space entities of indentation, and header tags that are
//! never closed. Repairs are targeted substitutions for exactly those
//! patterns; everything else passes through untouched.

use std::path::Path;

use regex::{Captures, Regex};

use crate::encoding::read_windows1250;
use crate::{PolarisError, Result};

/// Indentation run the export uses in place of paragraph markup.
const INDENT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;";

/// Extract and repair the body of one content page.
///
/// The page text lives in the first table cell; the match spans the whole
/// cell body, newlines and nested markup included. A page without a cell
/// aborts the run.
pub fn extract_page(path: &Path) -> Result<String> {
    let page = read_windows1250(path)?;
    let cell = Regex::new(r"(?is)<td>(.+)</td>").unwrap();
    let caps = cell
        .captures(&page)
        .ok_or_else(|| PolarisError::MissingCell(path.to_path_buf()))?;
    Ok(repair_markup(&caps[1]))
}

/// Repair the export's known markup quirks.
///
/// Steps run in a fixed order and the whole sequence is idempotent:
/// repairing an already repaired fragment changes nothing.
pub fn repair_markup(contents: &str) -> String {
    let mut contents = contents.replace("\r\n", "\n");

    // A line break followed by the indentation run marks a paragraph
    // boundary; a bare indentation run carries no structure at all.
    contents = contents.replace(&format!("<BR>{INDENT}"), "</p><p>");
    contents = contents.replace(INDENT, "");

    // Drop the leftover break right before a paragraph close, then put the
    // tags of adjacent paragraphs on their own lines.
    contents = contents.replace("<BR>\n</p>", "</p>\n");
    contents = contents.replace("\n</p><p>", "</p>\n<p>");

    close_headers(&contents)
}

/// Close header tags left unterminated before a line break.
///
/// Header text never spans lines in the export, but tag case varies, so
/// matching is case-insensitive and the rewritten pair is lowercased. An
/// already closed header is normalized, not double-closed.
fn close_headers(contents: &str) -> String {
    let header = Regex::new(r"(?i)<h(\d)>([^\n]+)\n").unwrap();
    header
        .replace_all(contents, |caps: &Captures| {
            let level = &caps[1];
            let closing = format!("</h{level}>");
            let mut body = &caps[2];
            if body.len() >= closing.len()
                && body.as_bytes()[body.len() - closing.len()..].eq_ignore_ascii_case(closing.as_bytes())
            {
                body = &body[..body.len() - closing.len()];
            }
            format!("<h{level}>{body}{closing}\n")
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_paragraph_break_reconstruction() {
        assert_eq!(
            repair_markup("text<BR>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;more"),
            "text</p><p>more"
        );
    }

    #[test]
    fn test_indentation_noise_stripped() {
        assert_eq!(repair_markup("<p>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;Uvod</p>"), "<p>Uvod</p>");
    }

    #[test]
    fn test_windows_line_endings_normalized() {
        assert_eq!(repair_markup("jedan\r\ndva"), "jedan\ndva");
    }

    #[test]
    fn test_trailing_break_before_close_collapsed() {
        assert_eq!(repair_markup("<p>kraj<BR>\n</p>"), "<p>kraj</p>\n");
    }

    #[test]
    fn test_adjacent_paragraph_tags_on_own_lines() {
        assert_eq!(repair_markup("<p>a\n</p><p>b</p>"), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_reconstructed_break_lands_on_own_line() {
        assert_eq!(
            repair_markup("a\n<BR>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;b"),
            "a</p>\n<p>b"
        );
    }

    #[test]
    fn test_header_closing() {
        assert_eq!(repair_markup("<H2>Chapter One\n"), "<h2>Chapter One</h2>\n");
    }

    #[test]
    fn test_closed_header_not_duplicated() {
        assert_eq!(repair_markup("<H2>Chapter One</H2>\n"), "<h2>Chapter One</h2>\n");
    }

    #[test]
    fn test_lowercase_header_closed() {
        assert_eq!(repair_markup("<h3>Uvod\n"), "<h3>Uvod</h3>\n");
    }

    #[test]
    fn test_every_header_occurrence_closed() {
        assert_eq!(
            repair_markup("<H1>Naslov\ntekst\n<H2>Prva glava\n"),
            "<h1>Naslov</h1>\ntekst\n<h2>Prva glava</h2>\n"
        );
    }

    #[test]
    fn test_repair_is_idempotent() {
        let raw = "<H1>Naslov\r\nprvi<BR>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;drugi<BR>\r\n</p>";
        let once = repair_markup(raw);
        assert_eq!(repair_markup(&once), once);
    }

    #[test]
    fn test_extract_page_spans_cell_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p1.html");
        fs::write(&path, "<html><table><tr><td>line one\r\nline two</td></tr></table></html>").unwrap();
        assert_eq!(extract_page(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_extract_page_spans_nested_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p1.html");
        fs::write(&path, "<td>outer<table><td>inner</td></table>tail</td>").unwrap();
        assert_eq!(extract_page(&path).unwrap(), "outer<table><td>inner</td></table>tail");
    }

    #[test]
    fn test_extract_page_uppercase_cell_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p1.html");
        fs::write(&path, "<TD>tekst</TD>").unwrap();
        assert_eq!(extract_page(&path).unwrap(), "tekst");
    }

    #[test]
    fn test_extract_page_without_cell_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p1.html");
        fs::write(&path, "<html><body>no table here</body></html>").unwrap();
        let err = extract_page(&path).unwrap_err();
        assert!(matches!(err, PolarisError::MissingCell(_)));
    }

    #[test]
    fn test_extract_page_missing_file_fails() {
        let err = extract_page(Path::new("/nonexistent/p1.html")).unwrap_err();
        assert!(matches!(err, PolarisError::Read { .. }));
    }
}
