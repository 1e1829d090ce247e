//! File format descriptor shared by the reader and writer.

use encoding_rs::Encoding;

use crate::core::errors::{bail, AppResult};
use crate::io::encoding::DEFAULT_FALLBACK;

/// How a delimited point file is shaped.
///
/// The encoding field is only a *fallback*: the actual encoding is sniffed
/// from the file when a header row is expected (see `io::reader`).
#[derive(Clone, Copy, Debug)]
pub struct FileFormat {
    pub delimiter: char,
    pub decimal_separator: char,
    pub has_header: bool,
    pub fallback_encoding: &'static Encoding,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat {
            delimiter: ';',
            decimal_separator: '.',
            has_header: false,
            fallback_encoding: DEFAULT_FALLBACK,
        }
    }
}

impl FileFormat {
    /// A delimiter equal to the decimal separator makes rows unparseable;
    /// reject the combination before any file is touched.
    pub fn validate(&self) -> AppResult<()> {
        if self.delimiter == self.decimal_separator {
            bail!(
                "Delimiter '{}' and decimal separator '{}' must differ",
                self.delimiter,
                self.decimal_separator
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_valid() {
        assert!(FileFormat::default().validate().is_ok());
    }

    #[test]
    fn equal_delimiter_and_separator_rejected() {
        let format = FileFormat {
            delimiter: ',',
            decimal_separator: ',',
            ..Default::default()
        };
        assert!(format.validate().is_err());
    }
}
