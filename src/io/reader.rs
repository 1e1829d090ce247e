//! Delimited point file reader
//!
//! Parses a text file into an ordered coordinate sequence. Malformed data
//! lines are skipped, not fatal; each skip is recorded so the UI can tell
//! the user what was ignored. Zero parsed coordinates is a valid outcome,
//! distinct from an I/O failure.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use geo::Coord;

use crate::core::errors::{AppContext, AppResult};
use crate::io::encoding::{self, TextEncoding};
use crate::io::format::FileFormat;

/// A data line the parser gave up on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based row number in the file.
    pub row: usize,
    pub content: String,
}

/// Everything a successful load produces.
#[derive(Clone, Debug, Default)]
pub struct LoadedPoints {
    /// Coordinates in file order; duplicates preserved.
    pub coords: Vec<Coord<f64>>,
    /// Header labels for the two axes, empty strings when absent.
    pub header_x: String,
    pub header_y: String,
    /// The encoding the file was decoded with.
    pub encoding_name: &'static str,
    pub skipped: Vec<SkippedLine>,
}

/// Read a point file according to `format`.
///
/// The encoding is re-sniffed from the file bytes only when a header row
/// is expected; headerless files are decoded with the configured fallback
/// as-is. That asymmetry is long-standing observed behavior of the format
/// and is pinned by tests rather than "fixed".
pub fn load_points(path: &Path, format: &FileFormat) -> AppResult<LoadedPoints> {
    format.validate()?;

    let bytes = fs::read(path).with_file_context("read", path)?;
    let encoding = if format.has_header {
        encoding::detect(&bytes, format.fallback_encoding)
    } else {
        TextEncoding::Legacy(format.fallback_encoding)
    };
    let text = encoding.decode(&bytes);

    let mut result = LoadedPoints {
        encoding_name: encoding.name(),
        ..Default::default()
    };

    let mut lines = text.lines().enumerate();

    if format.has_header {
        if let Some((_, line)) = lines.next() {
            let line = line.trim();
            if !line.is_empty() {
                let mut fields =
                    line.split(format.delimiter).filter(|f| !f.is_empty());
                result.header_x =
                    fields.next().unwrap_or_default().to_string();
                result.header_y =
                    fields.next().unwrap_or_default().to_string();
            }
        }
    }

    for (index, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line
            .split(format.delimiter)
            .filter(|f| !f.is_empty())
            .collect();

        // Only the first two fields matter; extras are ignored
        let parsed = match fields.as_slice() {
            [x, y, ..] => parse_scalar(x, format.decimal_separator)
                .zip(parse_scalar(y, format.decimal_separator)),
            _ => None,
        };

        match parsed {
            Some((x, y)) => result.coords.push(Coord { x, y }),
            None => {
                warn!("Skipping unparseable row {}: {:?}", index + 1, line);
                result.skipped.push(SkippedLine {
                    row: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(result)
}

/// Parse one numeric field using `decimal_separator` as the radix point.
///
/// Strict: a '.' in the input is only the radix point when '.' is the
/// configured separator, and non-finite results (overflow, inf, nan
/// spellings) are treated as parse failures.
fn parse_scalar(field: &str, decimal_separator: char) -> Option<f64> {
    let field = field.trim();
    let normalized;
    let candidate = if decimal_separator == '.' {
        field
    } else {
        if field.contains('.') {
            return None;
        }
        normalized = field.replace(decimal_separator, ".");
        &normalized
    };
    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    fn comma_format() -> FileFormat {
        FileFormat {
            delimiter: ',',
            decimal_separator: '.',
            has_header: false,
            ..Default::default()
        }
    }

    #[test]
    fn parses_lines_and_reports_skips() {
        let file = write_temp(b"1,2\nbad,data\n3,4\n");
        let loaded = load_points(file.path(), &comma_format()).unwrap();

        assert_eq!(
            loaded.coords,
            vec![Coord { x: 1.0, y: 2.0 }, Coord { x: 3.0, y: 4.0 }]
        );
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].row, 2);
        assert_eq!(loaded.skipped[0].content, "bad,data");
    }

    #[test]
    fn equal_delimiter_and_separator_fails_before_io() {
        let format = FileFormat {
            delimiter: ',',
            decimal_separator: ',',
            ..Default::default()
        };
        let missing = Path::new("/nonexistent/points.csv");
        // The configuration error wins even though the file does not exist
        assert!(load_points(missing, &format).is_err());
    }

    #[test]
    fn missing_file_is_an_error_not_an_empty_result() {
        let missing = Path::new("/nonexistent/points.csv");
        assert!(load_points(missing, &comma_format()).is_err());
    }

    #[test]
    fn header_labels_captured_and_header_only_file_is_empty() {
        let file = write_temp("lat;lon\n".as_bytes());
        let format = FileFormat {
            delimiter: ';',
            decimal_separator: '.',
            has_header: true,
            ..Default::default()
        };
        let loaded = load_points(file.path(), &format).unwrap();
        assert!(loaded.coords.is_empty());
        assert_eq!(loaded.header_x, "lat");
        assert_eq!(loaded.header_y, "lon");
    }

    #[test]
    fn comma_decimal_separator_with_semicolon_delimiter() {
        let file = write_temp(b"1,5;2,25\n-3,0;4\n");
        let format = FileFormat {
            delimiter: ';',
            decimal_separator: ',',
            has_header: false,
            ..Default::default()
        };
        let loaded = load_points(file.path(), &format).unwrap();
        assert_eq!(
            loaded.coords,
            vec![Coord { x: 1.5, y: 2.25 }, Coord { x: -3.0, y: 4.0 }]
        );
    }

    #[test]
    fn period_rejected_when_comma_is_the_separator() {
        assert_eq!(parse_scalar("1.5", ','), None);
        assert_eq!(parse_scalar("1,5", ','), Some(1.5));
    }

    #[test]
    fn extra_fields_ignored_and_adjacent_delimiters_collapsed() {
        let file = write_temp(b"1,,2,junk,more\n");
        let loaded = load_points(file.path(), &comma_format()).unwrap();
        assert_eq!(loaded.coords, vec![Coord { x: 1.0, y: 2.0 }]);
    }

    #[test]
    fn blank_lines_skipped_silently() {
        let file = write_temp(b"\n1,2\n   \n3,4\n");
        let loaded = load_points(file.path(), &comma_format()).unwrap();
        assert_eq!(loaded.coords.len(), 2);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn header_path_redetects_encoding() {
        // UTF-16LE with BOM; headerless decoding with the 1251 fallback
        // would produce garbage, the header path sniffs the BOM
        let mut bytes = vec![0xFF, 0xFE];
        for ch in "x,y\n1,2\n".encode_utf16() {
            bytes.extend_from_slice(&ch.to_le_bytes());
        }
        let file = write_temp(&bytes);
        let format = FileFormat {
            delimiter: ',',
            decimal_separator: '.',
            has_header: true,
            ..Default::default()
        };
        let loaded = load_points(file.path(), &format).unwrap();
        assert_eq!(loaded.encoding_name, "UTF-16LE");
        assert_eq!(loaded.header_x, "x");
        assert_eq!(loaded.coords, vec![Coord { x: 1.0, y: 2.0 }]);
    }

    #[test]
    fn headerless_uses_fallback_encoding() {
        // Plain ASCII decodes identically under Windows-1251, but the
        // reader must report the fallback, not a sniffed UTF-8
        let file = write_temp(b"1,2\n");
        let loaded = load_points(file.path(), &comma_format()).unwrap();
        assert_eq!(loaded.encoding_name, "windows-1251");
        assert_eq!(loaded.coords, vec![Coord { x: 1.0, y: 2.0 }]);
    }

    #[test]
    fn non_finite_spellings_are_skipped() {
        let file = write_temp(b"inf,2\nNaN,3\n1e999,4\n5,6\n");
        let loaded = load_points(file.path(), &comma_format()).unwrap();
        assert_eq!(loaded.coords, vec![Coord { x: 5.0, y: 6.0 }]);
        assert_eq!(loaded.skipped.len(), 3);
    }
}
