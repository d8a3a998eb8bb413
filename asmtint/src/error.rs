///
/// Annotation error types.
///
/// Unreadable source files referenced by `.file` are not errors: they only
/// degrade `.loc` markers. Everything here is either an internal failure the
/// annotator falls back from, or a front-end problem (input, palette,
/// architecture name) reported by the CLI.
///

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error(".loc refers to file index {index}, which no .file directive declared")]
    UnknownFile { index: u32 },

    #[error("file index {index} declared twice (second path: {path})")]
    DuplicateFile { index: u32, path: String },

    #[error("annotation panicked: {0}")]
    Panicked(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid palette {}: {reason}", path.display())]
    Palette { path: PathBuf, reason: String },

    #[error("Unknown architecture '{0}' (expected x86, arm or wasm)")]
    UnknownArchitecture(String),
}
