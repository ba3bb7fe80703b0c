//! Engine output, detached from Rolldown's types, and its commit to disk.

pub mod writer;

use rolldown::BundleOutput;
use rolldown_common::Output;

pub use writer::commit_output;

/// One file produced by the engine, held in memory until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    /// Path relative to the output directory.
    pub filename: String,
    pub content: Vec<u8>,
    /// `true` for JavaScript chunks, `false` for maps and other assets.
    pub is_chunk: bool,
}

impl EmittedAsset {
    pub fn chunk(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            is_chunk: true,
        }
    }

    pub fn asset(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            is_chunk: false,
        }
    }
}

/// Copy every chunk and asset out of a Rolldown bundle, keeping engine order.
pub fn collect_assets(output: &BundleOutput) -> Vec<EmittedAsset> {
    output
        .assets
        .iter()
        .map(|item| match item {
            Output::Chunk(chunk) => EmittedAsset::chunk(chunk.filename.as_str(), chunk.code.as_bytes()),
            Output::Asset(asset) => {
                EmittedAsset::asset(asset.filename.as_str(), asset.source.as_bytes())
            }
        })
        .collect()
}
