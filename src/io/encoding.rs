//! Text encoding detection
//!
//! Point files arrive from all kinds of tooling, so the reader sniffs the
//! encoding before decoding: a byte-order mark wins outright, otherwise a
//! strict UTF-8 scan of the leading bytes decides between UTF-8 and a
//! configurable legacy 8-bit code page. Detection never fails; the absence
//! of a confident signal always yields the fallback.

use encoding_rs::Encoding;

/// Legacy code page assumed when a file is neither BOM-marked nor valid UTF-8.
pub const DEFAULT_FALLBACK: &Encoding = encoding_rs::WINDOWS_1251;

/// How many leading bytes the UTF-8 validity scan inspects.
const UTF8_PROBE_LEN: usize = 4096;

const BOM_UTF32_BE: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
const BOM_UTF32_LE: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];

/// The encoding selected for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    /// Fallback 8-bit code page (Windows-1251 unless configured otherwise).
    Legacy(&'static Encoding),
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf32Be => "UTF-32BE",
            TextEncoding::Utf32Le => "UTF-32LE",
            TextEncoding::Legacy(enc) => enc.name(),
        }
    }

    /// Decode a whole file, stripping the BOM when one is present.
    /// Undecodable sequences become replacement characters rather than errors.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => {
                let body = bytes.strip_prefix(&BOM_UTF8[..]).unwrap_or(bytes);
                String::from_utf8_lossy(body).into_owned()
            }
            TextEncoding::Utf16Be => {
                let body =
                    bytes.strip_prefix(&BOM_UTF16_BE[..]).unwrap_or(bytes);
                encoding_rs::UTF_16BE
                    .decode_without_bom_handling(body)
                    .0
                    .into_owned()
            }
            TextEncoding::Utf16Le => {
                let body =
                    bytes.strip_prefix(&BOM_UTF16_LE[..]).unwrap_or(bytes);
                encoding_rs::UTF_16LE
                    .decode_without_bom_handling(body)
                    .0
                    .into_owned()
            }
            TextEncoding::Utf32Be => {
                let body =
                    bytes.strip_prefix(&BOM_UTF32_BE[..]).unwrap_or(bytes);
                decode_utf32(body, true)
            }
            TextEncoding::Utf32Le => {
                let body =
                    bytes.strip_prefix(&BOM_UTF32_LE[..]).unwrap_or(bytes);
                decode_utf32(body, false)
            }
            TextEncoding::Legacy(enc) => {
                enc.decode_without_bom_handling(bytes).0.into_owned()
            }
        }
    }
}

/// Pick an encoding for a file's raw bytes.
///
/// Ordered checks, first match wins: 4-byte BOMs before 2-byte BOMs (a
/// UTF-32LE mark would otherwise be misread as UTF-16LE), then a strict
/// UTF-8 scan of the first [`UTF8_PROBE_LEN`] bytes, then the fallback.
pub fn detect(bytes: &[u8], fallback: &'static Encoding) -> TextEncoding {
    if bytes.starts_with(&BOM_UTF32_BE) {
        return TextEncoding::Utf32Be;
    }
    if bytes.starts_with(&BOM_UTF32_LE) {
        return TextEncoding::Utf32Le;
    }
    if bytes.starts_with(&BOM_UTF8) {
        return TextEncoding::Utf8;
    }
    if bytes.starts_with(&BOM_UTF16_BE) {
        return TextEncoding::Utf16Be;
    }
    if bytes.starts_with(&BOM_UTF16_LE) {
        return TextEncoding::Utf16Le;
    }

    let window = &bytes[..bytes.len().min(UTF8_PROBE_LEN)];
    if scans_as_utf8(window, window.len() == UTF8_PROBE_LEN) {
        TextEncoding::Utf8
    } else {
        TextEncoding::Legacy(fallback)
    }
}

/// Look up a fallback code page by its WHATWG label, e.g. "windows-1251".
pub fn fallback_by_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
}

/// Strict UTF-8 validity scan over a probe window.
///
/// Lead bytes select the sequence length via their high bits, every
/// continuation byte must match `10xxxxxx`. A sequence cut off by the end
/// of the window is tolerated only when the window was truncated at the
/// probe limit (`truncated`: the file continues past what we scanned).
fn scans_as_utf8(window: &[u8], truncated: bool) -> bool {
    let mut i = 0;
    while i < window.len() {
        let lead = window[i];
        let len = if lead <= 0x7F {
            1
        } else if lead & 0xE0 == 0xC0 {
            2
        } else if lead & 0xF0 == 0xE0 {
            3
        } else if lead & 0xF8 == 0xF0 {
            4
        } else {
            // Continuation byte without a lead, or an invalid lead (0xF8+)
            return false;
        };

        if i + len > window.len() {
            return truncated;
        }
        for k in 1..len {
            if window[i + k] & 0xC0 != 0x80 {
                return false;
            }
        }
        i += len;
    }
    true
}

fn decode_utf32(bytes: &[u8], big_endian: bool) -> String {
    bytes
        .chunks_exact(4)
        .map(|chunk| {
            let raw = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let value = if big_endian {
                u32::from_be_bytes(raw)
            } else {
                u32::from_le_bytes(raw)
            };
            char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}
