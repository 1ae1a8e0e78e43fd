//! Error types raised while loading visit datasets.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or decoding a visit dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Nothing exists at the dataset path.
    #[error("dataset {path} does not exist")]
    Missing {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// The dataset path exists but is not a regular file.
    #[error("dataset {path} is not a regular file")]
    NotAFile {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// Checking the dataset path failed.
    #[error("failed to inspect dataset {path}")]
    Inspect {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// The dataset extension names no supported format.
    #[error("dataset {path} has an unsupported format; expected .json, .jsonl or .ndjson")]
    UnsupportedFormat {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// Opening the dataset failed.
    #[error("failed to open dataset {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// Reading a line of a JSON Lines dataset failed.
    #[error("failed to read dataset {path} at line {line}")]
    Read {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Source error from the reader.
        #[source]
        source: io::Error,
    },
    /// A JSON array dataset is malformed.
    #[error("failed to parse dataset {path}")]
    Parse {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// One record of a JSON Lines dataset is malformed.
    #[error("failed to parse dataset {path} at line {line}")]
    ParseLine {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
