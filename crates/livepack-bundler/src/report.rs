//! Summary of a successful build.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::output::EmittedAsset;

/// Role of a committed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Bundle,
    SourceMap,
    Asset,
}

/// A file that now exists in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedFile {
    pub filename: String,
    pub kind: FileKind,
    /// Size in bytes
    pub size: u64,
}

impl From<&EmittedAsset> for EmittedFile {
    fn from(asset: &EmittedAsset) -> Self {
        let kind = if asset.is_chunk {
            FileKind::Bundle
        } else if asset.filename.ends_with(".map") {
            FileKind::SourceMap
        } else {
            FileKind::Asset
        };

        Self {
            filename: asset.filename.clone(),
            kind,
            size: asset.content.len() as u64,
        }
    }
}

/// Outcome of [`build`](crate::build).
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    output_dir: PathBuf,
    files: Vec<EmittedFile>,
    warnings: Vec<String>,
    #[serde(skip)]
    duration: Duration,
}

impl BuildReport {
    pub(crate) fn new(
        output_dir: PathBuf,
        files: Vec<EmittedFile>,
        warnings: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            output_dir,
            files,
            warnings,
            duration,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Committed files in engine order.
    pub fn files(&self) -> &[EmittedFile] {
        &self.files
    }

    /// Engine warnings, rendered as the engine printed them.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Time spent in the engine plus the commit.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn bundle(&self) -> Option<&EmittedFile> {
        self.files.iter().find(|f| f.kind == FileKind::Bundle)
    }

    pub fn source_map(&self) -> Option<&EmittedFile> {
        self.files.iter().find(|f| f.kind == FileKind::SourceMap)
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kinds() {
        let chunk = EmittedFile::from(&EmittedAsset::chunk("index.js", "x"));
        let map = EmittedFile::from(&EmittedAsset::asset("index.js.map", "{}"));
        let other = EmittedFile::from(&EmittedAsset::asset("logo.svg", "<svg/>"));

        assert_eq!(chunk.kind, FileKind::Bundle);
        assert_eq!(map.kind, FileKind::SourceMap);
        assert_eq!(other.kind, FileKind::Asset);
        assert_eq!(other.size, 6);
    }

    #[test]
    fn test_report_accessors() {
        let files = vec![
            EmittedFile::from(&EmittedAsset::chunk("index.js", "abcd")),
            EmittedFile::from(&EmittedAsset::asset("index.js.map", "{}")),
        ];
        let report = BuildReport::new(
            PathBuf::from("/srv/app/static/dist"),
            files,
            Vec::new(),
            Duration::from_millis(12),
        );

        assert_eq!(report.bundle().map(|f| f.filename.as_str()), Some("index.js"));
        assert_eq!(
            report.source_map().map(|f| f.filename.as_str()),
            Some("index.js.map")
        );
        assert_eq!(report.total_size(), 6);
        assert_eq!(report.duration(), Duration::from_millis(12));
    }
}
