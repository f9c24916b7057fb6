// SPDX-FileCopyrightText: 2026 Daniel Nylander <daniel@danielnylander.se>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use thiserror::Error as TeError;

use crate::entry::TranslationEntry;
use super::{gettext, linguist};

pub enum I18nFileKind {
    /// Qt Linguist translation file format (.ts)
    Linguist,
    /// GNU Gettext translation file format (.po/.pot)
    Gettext,
}

#[derive(TeError, Debug)]
pub enum ParseError {
    #[error("Can not read file {0:?} because: {1}")]
    IoError(PathBuf, #[source] std::io::Error),
    #[error("File {0:?} is not well-formed XML: {1}")]
    MalformedXml(PathBuf, #[source] quick_xml::DeError),
    #[error("Unsupported translation file extension in path {0:?}, expected .po, .pot or .ts")]
    UnsupportedFormat(PathBuf),
}

impl I18nFileKind {
    /// Try detecting translation file kind from the file extension alone,
    /// case-insensitively. No content sniffing.
    pub fn from_ext_hint(path_hint: &Path) -> Result<Self, ParseError> {
        let ext = path_hint.extension().map(|e| e.to_ascii_lowercase());
        match ext.as_deref().and_then(|e| e.to_str()) {
            Some("ts") => Ok(Self::Linguist),
            Some("po") | Some("pot") => Ok(Self::Gettext),
            _ => Err(ParseError::UnsupportedFormat(path_hint.to_path_buf())),
        }
    }
}

/// Parses one translation file into its ordered entry sequence.
///
/// The whole file is read into memory up front; invalid UTF-8 byte
/// sequences are replaced rather than rejected. Each call is independent,
/// so reparsing replaces the previous sequence wholesale.
pub fn parse_file(path: &Path) -> Result<Vec<TranslationEntry>, ParseError> {
    let kind = I18nFileKind::from_ext_hint(path)?;
    let bytes = std::fs::read(path).map_err(|e| ParseError::IoError(path.to_path_buf(), e))?;
    let text = String::from_utf8_lossy(&bytes);
    match kind {
        I18nFileKind::Gettext => Ok(gettext::parse_str(&text)),
        I18nFileKind::Linguist => {
            linguist::parse_str(&text).map_err(|e| ParseError::MalformedXml(path.to_path_buf(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_unsupported_extension() {
        let err = parse_file(Path::new("notes.docx")).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(p) if p == Path::new("notes.docx")));
        assert!(parse_file(Path::new("no_extension")).is_err());
    }

    #[test]
    fn tst_extension_is_case_insensitive() {
        assert!(matches!(I18nFileKind::from_ext_hint(Path::new("app_de.TS")), Ok(I18nFileKind::Linguist)));
        assert!(matches!(I18nFileKind::from_ext_hint(Path::new("de.PO")), Ok(I18nFileKind::Gettext)));
        assert!(matches!(I18nFileKind::from_ext_hint(Path::new("app.PoT")), Ok(I18nFileKind::Gettext)));
    }

    #[test]
    fn tst_missing_file_is_io_error() {
        let err = parse_file(Path::new("/nonexistent/l10n-preview-test.po")).unwrap_err();
        assert!(matches!(err, ParseError::IoError(_, _)));
    }
}
