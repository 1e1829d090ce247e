//! Application state management.
//!
//! One resource owns the loaded data: the point sequence, the current
//! boundary ring, and the file settings captured when the points were
//! loaded. Every update is a wholesale replacement: a failed load or a
//! rejected edit leaves the previous state untouched, and nothing else in
//! the app holds a second copy to fall out of sync.

use std::path::PathBuf;

use bevy::prelude::*;
use geo::Coord;

use crate::geometry::HullRing;
use crate::io::{FileFormat, LoadedPoints};

/// A message for the status bar. The latest one wins.
#[derive(Event, Clone, Debug)]
pub struct StatusEvent(pub String);

/// The main application state resource.
#[derive(Resource, Default)]
pub struct AppState {
    pub workspace: Workspace,
}

/// The current editing session.
#[derive(Default)]
pub struct Workspace {
    /// File the points came from; also the default base for exports.
    pub source_path: Option<PathBuf>,
    /// Explicit export destination, when one was given on the CLI.
    pub output_path: Option<PathBuf>,
    /// Format settings used for loading and, captured as-is, for saving.
    pub format: FileFormat,
    /// Loaded point sequence, file order.
    pub points: Vec<Coord<f64>>,
    /// Current hull boundary, if one has been computed.
    pub ring: Option<HullRing>,
    /// Header labels captured at load time, replayed on save.
    pub header_x: String,
    pub header_y: String,
}

impl Workspace {
    /// Install a successful load, replacing points and headers and
    /// dropping any boundary computed for the previous point set.
    pub fn set_points(&mut self, loaded: LoadedPoints, path: PathBuf) {
        self.points = loaded.coords;
        self.header_x = loaded.header_x;
        self.header_y = loaded.header_y;
        self.source_path = Some(path);
        self.ring = None;
    }

    /// Replace the boundary ring (new computation or a finished edit).
    pub fn set_ring(&mut self, ring: HullRing) {
        self.ring = Some(ring);
    }

    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn has_ring(&self) -> bool {
        self.ring.is_some()
    }

    /// Where an export should go: the explicit output path, or the source
    /// file with a `_hull` suffix before the extension.
    pub fn export_path(&self) -> Option<PathBuf> {
        if let Some(out) = &self.output_path {
            return Some(out.clone());
        }
        let source = self.source_path.as_ref()?;
        let stem = source.file_stem()?.to_string_lossy();
        let name = match source.extension() {
            Some(ext) => format!("{}_hull.{}", stem, ext.to_string_lossy()),
            None => format!("{stem}_hull"),
        };
        Some(source.with_file_name(name))
    }
}
