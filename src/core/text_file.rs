//! Decoding files into text before they reach a scanner.

use std::path::Path;

use anyhow::{Context, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Windows-1252 characters for bytes 0x80..=0x9F; the rest of the high half
/// maps straight to Latin-1.
const CP1252_HIGH: [char; 32] = [
    '€', '\u{81}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{8D}', 'Ž',
    '\u{8F}', '\u{90}', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{9D}',
    'ž', 'Ÿ',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub text: String,
    /// A byte-order mark was present (and stripped).
    pub had_bom: bool,
    /// The bytes were not valid in the detected encoding and were mapped
    /// byte by byte instead.
    pub needed_fallback: bool,
}

impl TextFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::decode(&bytes))
    }

    pub fn decode(bytes: &[u8]) -> Self {
        if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
            let (text, needed_fallback) = decode_utf8(rest);
            return Self {
                text,
                had_bom: true,
                needed_fallback,
            };
        }
        if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
            let (text, needed_fallback) = decode_utf16(rest, u16::from_le_bytes);
            return Self {
                text,
                had_bom: true,
                needed_fallback,
            };
        }
        if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
            let (text, needed_fallback) = decode_utf16(rest, u16::from_be_bytes);
            return Self {
                text,
                had_bom: true,
                needed_fallback,
            };
        }
        let (text, needed_fallback) = decode_utf8(bytes);
        Self {
            text,
            had_bom: false,
            needed_fallback,
        }
    }
}

fn decode_utf8(bytes: &[u8]) -> (String, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), false),
        Err(_) => (decode_single_byte(bytes), true),
    }
}

fn decode_single_byte(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
            _ => char::from(b),
        })
        .collect()
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> (String, bool) {
    let odd_length = bytes.len() % 2 != 0;
    let units = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]));
    let mut lossy = false;
    let text: String = char::decode_utf16(units)
        .map(|c| {
            c.unwrap_or_else(|_| {
                lossy = true;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();
    (text, lossy || odd_length)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("Grüße".as_bytes());
        let file = TextFile::decode(&bytes);
        assert_eq!(file.text, "Grüße");
        assert!(file.had_bom);
        assert!(!file.needed_fallback);
    }

    #[test]
    fn test_plain_utf8() {
        let file = TextFile::decode("MessageBox(\"x\");".as_bytes());
        assert_eq!(file.text, "MessageBox(\"x\");");
        assert!(!file.had_bom);
        assert!(!file.needed_fallback);
    }

    #[test]
    fn test_utf16_both_orders() {
        let le: Vec<u8> = UTF16_LE_BOM
            .iter()
            .copied()
            .chain("Año".encode_utf16().flat_map(|u| u.to_le_bytes()))
            .collect();
        let file = TextFile::decode(&le);
        assert_eq!(file.text, "Año");
        assert!(file.had_bom);

        let be: Vec<u8> = UTF16_BE_BOM
            .iter()
            .copied()
            .chain("Año".encode_utf16().flat_map(|u| u.to_be_bytes()))
            .collect();
        assert_eq!(TextFile::decode(&be).text, "Año");
    }

    #[test]
    fn test_legacy_bytes_fall_back() {
        // "Café" in Windows-1252, then a curly quote
        let file = TextFile::decode(&[b'C', b'a', b'f', 0xE9, b' ', 0x93]);
        assert_eq!(file.text, "Café “");
        assert!(!file.had_bom);
        assert!(file.needed_fallback);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextFile::read(&dir.path().join("missing.cpp")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
