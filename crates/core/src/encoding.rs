//! Legacy codepage decoding.
//!
//! Every page in the export is windows-1250 text, the single-byte Central
//! European codepage the CD-ROM was mastered with. Pages are read fully and
//! decoded to owned UTF-8 strings; no file handle outlives the call.

use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1250;

use crate::{PolarisError, Result};

/// Read a file and decode it from windows-1250.
///
/// Decoding itself cannot fail: bytes without a mapping come out as U+FFFD
/// replacement characters.
pub fn read_windows1250(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| PolarisError::Read { path: path.to_path_buf(), source })?;
    let (text, _, _) = WINDOWS_1250.decode(&bytes);
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_croatian_letters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, b"\x8Aenoa pi\x9Ae").unwrap();
        assert_eq!(read_windows1250(&path).unwrap(), "Šenoa piše");
    }

    #[test]
    fn test_ascii_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html><td>plain</td></html>").unwrap();
        assert_eq!(read_windows1250(&path).unwrap(), "<html><td>plain</td></html>");
    }

    #[test]
    fn test_missing_file_propagates() {
        let err = read_windows1250(Path::new("/nonexistent/page.html")).unwrap_err();
        assert!(matches!(err, PolarisError::Read { .. }));
    }
}
