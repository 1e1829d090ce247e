//! Reading and writing delimited point files.

pub mod encoding;
pub mod format;
pub mod reader;
pub mod writer;

pub use format::FileFormat;
pub use reader::{load_points, LoadedPoints};
pub use writer::save_ring;
