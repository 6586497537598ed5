// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain text file loading.

use std::path::Path;

use lesewerk_core::error::{LesewerkError, Result};
use tracing::{info, instrument};

/// File extensions offered in the "open text" dialog.
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Read a UTF-8 text file for display.
///
/// Line endings are normalised to `\n`; every other character, including a
/// leading byte-order mark, is kept as-is.
///
/// # Errors
///
/// [`LesewerkError::ResourceUnavailable`] if the file cannot be read or is
/// not valid UTF-8.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|err| LesewerkError::unreadable(format!("{}: {}", path.display(), err)))?;

    let text = String::from_utf8(bytes).map_err(|err| {
        LesewerkError::not_utf8(format!(
            "{} is not valid UTF-8 (first bad byte at offset {})",
            path.display(),
            err.utf8_error().valid_up_to()
        ))
    })?;

    let text = normalize_newlines(text);
    info!(bytes = text.len(), "Text file loaded");
    Ok(text)
}

/// Turn `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesewerk_core::error::Unavailable;

    #[test]
    fn newline_normalisation() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n".into()), "a\nb\nc\n");
        assert_eq!(normalize_newlines("untouched\n".into()), "untouched\n");
        assert_eq!(normalize_newlines("\r\r\n".into()), "\n\n");
    }

    #[test]
    fn reads_utf8_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "\u{feff}Grüße\n\tindented  \n").unwrap();
        assert_eq!(
            read_text_file(&path).unwrap(),
            "\u{feff}Grüße\n\tindented  \n"
        );
    }

    #[test]
    fn empty_file_is_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xe9").unwrap();
        let err = read_text_file(&path).unwrap_err();
        match err {
            LesewerkError::ResourceUnavailable {
                reason: Unavailable::NotUtf8,
                detail,
            } => assert!(detail.contains("offset 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = read_text_file(Path::new("/nonexistent/lesewerk/notes.txt")).unwrap_err();
        assert!(matches!(
            err,
            LesewerkError::ResourceUnavailable { reason: Unavailable::Unreadable, .. }
        ));
    }
}
