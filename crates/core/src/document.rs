//! Output document shell.

/// Wrap repaired book content in a complete HTML document.
///
/// The shell itself is always well formed; the content goes into `<body>`
/// verbatim and its well-formedness is the repair pipeline's job.
///
/// ```
/// let doc = polaris_core::wrap_document("<p>tekst</p>", "Naslov");
/// assert!(doc.starts_with("<!DOCTYPE html>"));
/// assert!(doc.contains("<title>Naslov</title>"));
/// ```
pub fn wrap_document(content: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" lang="hr-HR">
<head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8"/>
    <title>{title}</title>
</head>
<body>
{content}
</body>
</html>"#
    )
}

/// Rewrite filename-hostile characters in a display title.
///
/// Only `/` and `:` are rewritten; everything else is kept as-is.
pub fn sanitize_filename(title: &str) -> String {
    title.replace('/', "-").replace(':', " -")
}
