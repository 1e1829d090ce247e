//! Settings
//!
//! Interaction constants for the canvas, plus the persisted file-format
//! settings remembered between sessions.

use std::path::PathBuf;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppContext, AppResult};
use crate::io::encoding::{fallback_by_label, DEFAULT_FALLBACK};
use crate::io::FileFormat;

// Canvas ////////////////////////////////////////////////////////////////////

/// Fixed size of the drawing canvas in world units. The camera, not the
/// canvas, absorbs window resizes.
pub const CANVAS_SIZE: Vec2 = Vec2::new(1000.0, 700.0);

/// Hit-test tolerance around vertices and edges, in canvas units.
pub const HIT_TEST_RADIUS: f32 = 5.0;

// Camera Zoom Settings //////////////////////////////////////////////////////

/// Minimum allowed camera scale (maximum zoom in)
pub const MIN_ALLOWED_ZOOM_SCALE: f32 = 0.05;

/// Maximum allowed camera scale (maximum zoom out)
pub const MAX_ALLOWED_ZOOM_SCALE: f32 = 10.0;

// Persisted format settings /////////////////////////////////////////////////

/// Last-used file format, remembered across sessions as a small JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormatSettings {
    pub delimiter: char,
    pub decimal_separator: char,
    pub has_header: bool,
    pub fallback_encoding: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        let format = FileFormat::default();
        FormatSettings {
            delimiter: format.delimiter,
            decimal_separator: format.decimal_separator,
            has_header: format.has_header,
            fallback_encoding: format.fallback_encoding.name().to_string(),
        }
    }
}

impl FormatSettings {
    pub fn from_format(format: &FileFormat) -> Self {
        FormatSettings {
            delimiter: format.delimiter,
            decimal_separator: format.decimal_separator,
            has_header: format.has_header,
            fallback_encoding: format.fallback_encoding.name().to_string(),
        }
    }

    /// Resolve back to a `FileFormat`. An unknown encoding label falls
    /// back to the default code page rather than failing.
    pub fn to_format(&self) -> FileFormat {
        FileFormat {
            delimiter: self.delimiter,
            decimal_separator: self.decimal_separator,
            has_header: self.has_header,
            fallback_encoding: fallback_by_label(&self.fallback_encoding)
                .unwrap_or(DEFAULT_FALLBACK),
        }
    }

    /// Load persisted settings; any problem (missing file, stale schema)
    /// just yields the defaults.
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                warn!("Ignoring malformed settings file: {err}");
                FormatSettings::default()
            }),
            Err(_) => FormatSettings::default(),
        }
    }

    pub fn save(&self, path: &std::path::Path) -> AppResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_file_context("write", path)?;
        Ok(())
    }
}

/// Where the settings file lives: next to the user's config, falling back
/// to the working directory.
pub fn settings_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".hullview.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = FormatSettings {
            delimiter: '\t',
            decimal_separator: ',',
            has_header: true,
            fallback_encoding: "windows-1251".into(),
        };
        settings.save(&path).unwrap();
        assert_eq!(FormatSettings::load(&path), settings);

        let format = settings.to_format();
        assert_eq!(format.delimiter, '\t');
        assert_eq!(format.fallback_encoding.name(), "windows-1251");
    }

    #[test]
    fn missing_or_garbled_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(FormatSettings::load(&missing), FormatSettings::default());

        let garbled = dir.path().join("bad.json");
        std::fs::write(&garbled, "{not json").unwrap();
        assert_eq!(FormatSettings::load(&garbled), FormatSettings::default());
    }

    #[test]
    fn unknown_encoding_label_falls_back() {
        let settings = FormatSettings {
            fallback_encoding: "no-such-encoding".into(),
            ..Default::default()
        };
        assert_eq!(
            settings.to_format().fallback_encoding.name(),
            DEFAULT_FALLBACK.name()
        );
    }
}
