//! Reading text files of unknown encoding.
//!
//! Detection order: UTF-8 BOM, UTF-16 BOM (little or big endian), valid
//! UTF-8, then Windows-1252. The last step accepts any byte sequence, so
//! decoding itself never fails.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Windows1252,
}

impl Encoding {
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Bom => "UTF-8 (BOM)",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Windows1252 => "Windows-1252",
        }
    }
}

/// Where a text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub path: PathBuf,
    pub encoding: Encoding,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct LoadedText {
    pub text: String,
    pub source: SourceInfo,
}

/// Read and decode the file at `path`.
pub fn load_text(path: impl AsRef<Path>) -> Result<LoadedText, CliError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CliError::NotFound(path.to_path_buf()),
        _ => CliError::Io(err),
    })?;
    let (text, encoding) = decode(&bytes);
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.label(),
        "loaded text"
    );
    Ok(LoadedText {
        text,
        source: SourceInfo {
            path: path.to_path_buf(),
            encoding,
            size_bytes: bytes.len() as u64,
        },
    })
}

/// Read and decode everything from `reader` (usually stdin).
pub fn read_text(mut reader: impl Read) -> Result<(String, Encoding), CliError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&bytes))
}

pub fn decode(bytes: &[u8]) -> (String, Encoding) {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return (String::from_utf8_lossy(rest).into_owned(), Encoding::Utf8Bom);
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return (decode_utf16(rest, u16::from_le_bytes), Encoding::Utf16Le);
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return (decode_utf16(rest, u16::from_be_bytes), Encoding::Utf16Be);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), Encoding::Utf8),
        Err(err) => {
            warn!(
                valid_up_to = err.valid_up_to(),
                "input is not UTF-8, decoding as Windows-1252"
            );
            (decode_windows_1252(bytes), Encoding::Windows1252)
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    // A dangling odd byte cannot form a code unit and is dropped.
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

// 0x80..=0x9F; the remaining bytes map to the same Latin-1 code point.
const WINDOWS_1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

fn decode_windows_1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(b - 0x80)],
            _ => char::from(b),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8() {
        assert_eq!(decode("héllo".as_bytes()), ("héllo".to_string(), Encoding::Utf8));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"hi");
        assert_eq!(decode(&bytes), ("hi".to_string(), Encoding::Utf8Bom));
    }

    #[test]
    fn utf16_both_endians() {
        let le = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
        assert_eq!(decode(&le), ("hi".to_string(), Encoding::Utf16Le));

        let be = [0xFE, 0xFF, 0x00, b'h', 0x00, b'i'];
        assert_eq!(decode(&be), ("hi".to_string(), Encoding::Utf16Be));
    }

    #[test]
    fn windows_1252_fallback() {
        // "café “quoted”" in Windows-1252
        let bytes = [b'c', b'a', b'f', 0xE9, b' ', 0x93, b'q', 0x94];
        assert_eq!(
            decode(&bytes),
            ("café \u{201C}q\u{201D}".to_string(), Encoding::Windows1252)
        );
    }

    #[test]
    fn empty_input_is_utf8() {
        assert_eq!(decode(&[]), (String::new(), Encoding::Utf8));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match load_text(&path) {
            Err(CliError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
