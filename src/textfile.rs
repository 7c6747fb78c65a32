// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read, annotate, and write text files.
//!
//! Files are read as UTF-8 first; on invalid UTF-8 the bytes are decoded
//! again as Latin-1, which always succeeds (every byte maps to a code
//! point). [`Document::encoding`] records which decoder was used so
//! callers can tell the user about the fallback.
//!
//! # Examples
//!
//! ```no_run
//! use devsim_lib::textfile::{annotate, read_text, write_text};
//!
//! let doc = read_text("notes.txt".as_ref())?;
//! let annotated = annotate(&doc.content);
//! write_text("notes_out.txt".as_ref(), &annotated)?;
//! # Ok::<(), devsim_lib::error::FileError>(())
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FileError;

/// Character encoding a file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Decoded as UTF-8.
    Utf8,
    /// Fell back to Latin-1 after invalid UTF-8.
    Latin1,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Latin1 => write!(f, "Latin-1"),
        }
    }
}

/// Decoded text plus the encoding used to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The decoded file content.
    pub content: String,
    /// Which decoder produced `content`.
    pub encoding: TextEncoding,
}

/// Reads a text file, falling back to Latin-1 on invalid UTF-8.
///
/// # Errors
///
/// Returns a classified [`FileError`] when the file is missing, is a
/// directory, or cannot be accessed.
pub fn read_text(path: &Path) -> Result<Document, FileError> {
    let bytes = fs::read(path).map_err(|e| FileError::classify(e, path))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(Document {
            content,
            encoding: TextEncoding::Utf8,
        }),
        Err(err) => {
            tracing::warn!(path = %path.display(), "invalid UTF-8, decoding as Latin-1");
            // Latin-1 maps every byte to the same code point.
            let content = err.into_bytes().iter().map(|&b| b as char).collect();
            Ok(Document {
                content,
                encoding: TextEncoding::Latin1,
            })
        }
    }
}

/// Writes `content` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns a classified [`FileError`] when the path cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<(), FileError> {
    fs::write(path, content).map_err(|e| FileError::classify(e, path))
}

/// Uppercases every line and prefixes it with a right-aligned line number.
///
/// # Examples
///
/// ```
/// use devsim_lib::textfile::annotate;
///
/// assert_eq!(annotate("hello\nworld"), "  1. HELLO\n  2. WORLD\n");
/// ```
#[must_use]
pub fn annotate(content: &str) -> String {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>3}. {}\n", i + 1, line.to_uppercase()))
        .collect()
}

/// Returns the first `max_lines` lines, noting how many were elided.
#[must_use]
pub fn preview(content: &str, max_lines: usize) -> String {
    let total = content.lines().count();
    let mut out: String = content
        .lines()
        .take(max_lines)
        .map(|line| format!("{line}\n"))
        .collect();

    if total > max_lines {
        out.push_str(&format!("... and {} more lines\n", total - max_lines));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn read_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello\nworld").unwrap();

        let doc = read_text(file.path()).unwrap();
        assert_eq!(doc.content, "hello\nworld");
        assert_eq!(doc.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn read_falls_back_to_latin1() {
        let mut file = NamedTempFile::new().unwrap();
        // 0xE9 is 'é' in Latin-1 but invalid as a lone UTF-8 byte.
        file.write_all(b"caf\xe9").unwrap();

        let doc = read_text(file.path()).unwrap();
        assert_eq!(doc.content, "café");
        assert_eq!(doc.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn read_missing_file_is_classified() {
        let err = read_text(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn read_directory_is_classified() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(dir.path()).unwrap_err();
        assert!(matches!(err, FileError::IsADirectory(_)));
    }

    #[test]
    fn annotate_numbers_and_uppercases() {
        let out = annotate("first line\nSecond Line\nthird");
        assert_eq!(out, "  1. FIRST LINE\n  2. SECOND LINE\n  3. THIRD\n");
    }

    #[test]
    fn annotate_aligns_past_three_digits() {
        let content: String = (0..100).map(|_| "x\n").collect();
        let out = annotate(&content);
        assert!(out.contains("  9. X\n"));
        assert!(out.contains(" 10. X\n"));
        assert!(out.contains("100. X\n"));
    }

    #[test]
    fn annotate_empty_content() {
        assert_eq!(annotate(""), "");
    }

    #[test]
    fn write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "  1. HELLO\n").unwrap();
        let doc = read_text(&path).unwrap();
        assert_eq!(doc.content, "  1. HELLO\n");
    }

    #[test]
    fn preview_elides_long_content() {
        let out = preview("a\nb\nc\nd\ne", 2);
        assert_eq!(out, "a\nb\n... and 3 more lines\n");
    }

    #[test]
    fn preview_short_content_is_unchanged() {
        let out = preview("a\nb", 5);
        assert_eq!(out, "a\nb\n");
    }
}
