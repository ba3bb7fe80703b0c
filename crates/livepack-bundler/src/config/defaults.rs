//! Fixed values of the browser build.

use crate::config::types::{EsTarget, OutputFormat, Platform};
use std::path::PathBuf;

/// Entry point, relative to the project directory.
pub const ENTRY_POINT: &str = "src/index.ts";

pub fn default_entry_point() -> PathBuf {
    PathBuf::from(ENTRY_POINT)
}

pub fn default_bundle() -> bool {
    true
}

pub fn default_format() -> OutputFormat {
    OutputFormat::Esm
}

pub fn default_platform() -> Platform {
    Platform::Browser
}

pub fn default_target() -> EsTarget {
    EsTarget::Esnext
}

pub fn default_source_map() -> bool {
    true
}

pub fn default_minify() -> bool {
    false
}
