//! Text decoding for playlist files
//!
//! Playlists arrive in whatever encoding the program that wrote them
//! preferred. Candidates are tried in order and the first one that decodes
//! the whole file without error is used.

use encoding_rs::{UTF_8, WINDOWS_1252};
use std::fmt;
use std::str::FromStr;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A candidate text encoding for playlist files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistEncoding {
    /// Strict UTF-8, any BOM is kept as U+FEFF
    Utf8,

    /// UTF-8 with an optional leading signature (BOM) removed
    Utf8Sig,

    /// ISO-8859-1, maps every byte to the code point of the same value
    Latin1,

    /// Windows-1252 (cp1252)
    Windows1252,
}

/// Default fallback order: unicode first, then single-byte Western encodings
pub const DEFAULT_ENCODINGS: [PlaylistEncoding; 4] = [
    PlaylistEncoding::Utf8,
    PlaylistEncoding::Utf8Sig,
    PlaylistEncoding::Latin1,
    PlaylistEncoding::Windows1252,
];

impl PlaylistEncoding {
    /// Decode the full byte buffer, or `None` if any byte sequence is invalid
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            PlaylistEncoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|s| s.into_owned()),
            PlaylistEncoding::Utf8Sig => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|s| s.into_owned())
            }
            PlaylistEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            PlaylistEncoding::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|s| s.into_owned()),
        }
    }

    /// Canonical label, as accepted by `FromStr`
    pub fn label(&self) -> &'static str {
        match self {
            PlaylistEncoding::Utf8 => "utf-8",
            PlaylistEncoding::Utf8Sig => "utf-8-sig",
            PlaylistEncoding::Latin1 => "latin-1",
            PlaylistEncoding::Windows1252 => "cp1252",
        }
    }
}

impl fmt::Display for PlaylistEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlaylistEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(PlaylistEncoding::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(PlaylistEncoding::Utf8Sig),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(PlaylistEncoding::Latin1),
            "cp1252" | "windows-1252" => Ok(PlaylistEncoding::Windows1252),
            other => Err(format!("unsupported playlist encoding: {}", other)),
        }
    }
}

/// Decode with the first candidate that accepts the whole buffer
pub fn decode_with_fallback(
    bytes: &[u8],
    candidates: &[PlaylistEncoding],
) -> Option<(String, PlaylistEncoding)> {
    candidates
        .iter()
        .find_map(|encoding| encoding.decode(bytes).map(|text| (text, *encoding)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_preferred() {
        let (text, encoding) =
            decode_with_fallback("Björk.mp3".as_bytes(), &DEFAULT_ENCODINGS).unwrap();
        assert_eq!(text, "Björk.mp3");
        assert_eq!(encoding, PlaylistEncoding::Utf8);
    }

    #[test]
    fn test_latin1_fallback() {
        // "Björk" in Latin-1, invalid as UTF-8
        let bytes: &[u8] = &[0x42, 0x6A, 0xF6, 0x72, 0x6B];
        let (text, encoding) = decode_with_fallback(bytes, &DEFAULT_ENCODINGS).unwrap();
        assert_eq!(text, "Björk");
        assert_eq!(encoding, PlaylistEncoding::Latin1);
    }

    #[test]
    fn test_utf8_sig_strips_bom() {
        let bytes = b"\xEF\xBB\xBF#EXTM3U";
        assert_eq!(
            PlaylistEncoding::Utf8Sig.decode(bytes).as_deref(),
            Some("#EXTM3U")
        );
        assert_eq!(
            PlaylistEncoding::Utf8.decode(bytes).as_deref(),
            Some("\u{FEFF}#EXTM3U")
        );
    }

    #[test]
    fn test_windows1252_smart_quotes() {
        let bytes: &[u8] = &[0x93, 0x48, 0x69, 0x94];
        assert_eq!(
            PlaylistEncoding::Windows1252.decode(bytes).as_deref(),
            Some("\u{201C}Hi\u{201D}")
        );
    }

    #[test]
    fn test_no_candidate_accepts() {
        let bytes: &[u8] = &[0xFF, 0xFE, 0xC3];
        let unicode_only = [PlaylistEncoding::Utf8, PlaylistEncoding::Utf8Sig];
        assert!(decode_with_fallback(bytes, &unicode_only).is_none());
        assert!(decode_with_fallback(bytes, &[]).is_none());
    }

    #[test]
    fn test_labels_round_trip() {
        for encoding in DEFAULT_ENCODINGS {
            assert_eq!(encoding.label().parse::<PlaylistEncoding>(), Ok(encoding));
        }
        assert_eq!(
            "Windows-1252".parse::<PlaylistEncoding>(),
            Ok(PlaylistEncoding::Windows1252)
        );
        assert!("shift-jis".parse::<PlaylistEncoding>().is_err());
    }
}
