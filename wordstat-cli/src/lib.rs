//! Input, output and presentation around `wordstat-core`: decoding text
//! files, exporting JSON, the sample document and terminal reports.

pub mod export;
pub mod loader;
pub mod render;
pub mod sample;

use std::path::PathBuf;

pub use export::{save_json, ComparisonReport, DocumentReport};
pub use loader::{load_text, Encoding, LoadedText, SourceInfo};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] wordstat_core::WordStatError),
}
