//! Command line arguments for the application

use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for point loading and file format selection.
#[derive(Parser, Debug, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to a delimited point file to load on startup
    #[arg(long = "load")]
    pub input: Option<PathBuf>,

    /// where to write the exported boundary (default: <input>_hull.<ext>)
    #[arg(long = "out")]
    pub output: Option<PathBuf>,

    /// field delimiter: a single character, or "tab" / "space"
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// decimal separator, "." or ","
    #[arg(long = "decimal-separator", value_parser = parse_decimal_separator)]
    pub decimal_separator: Option<char>,

    /// treat the first line of the input as a header row
    #[arg(long = "has-header", default_value_t = false)]
    pub has_header: bool,

    /// code page assumed for non-UTF files, e.g. "windows-1251"
    #[arg(long = "fallback-encoding")]
    pub fallback_encoding: Option<String>,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    match value {
        "tab" | "\\t" => Ok('\t'),
        "space" => Ok(' '),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!(
                    "expected a single character, \"tab\" or \"space\", \
                     got {value:?}"
                )),
            }
        }
    }
}

fn parse_decimal_separator(value: &str) -> Result<char, String> {
    match value {
        "." => Ok('.'),
        "," => Ok(','),
        _ => Err(format!("expected \".\" or \",\", got {value:?}")),
    }
}
