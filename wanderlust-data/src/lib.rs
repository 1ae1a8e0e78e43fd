//! Visit dataset loading for Wanderlust.
//!
//! Responsibilities:
//! - Locate a dataset on disk and pick its format from the extension.
//! - Decode visit records from a JSON array or from JSON Lines.
//!
//! Boundaries:
//! - No catalog or similarity logic; that lives in `wanderlust-core` and
//!   `wanderlust-similarity`.
//! - Records are returned as read. Missing attraction names stay `None` and
//!   are normalised when the catalog is built.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wanderlust_data::load_visits;
//!
//! let visits = load_visits(Utf8Path::new("data/visits.jsonl"))?;
//! println!("loaded {} visits", visits.len());
//! # Ok::<(), wanderlust_data::DatasetError>(())
//! ```

#![forbid(unsafe_code)]

use std::io::{self, BufRead, BufReader, Read};

use camino::Utf8Path;
use log::{debug, warn};
use wanderlust_core::VisitRecord;

mod error;
pub mod fs;

pub use error::DatasetError;

/// On-disk encodings a dataset may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// One JSON array of visit objects (`.json`).
    Json,
    /// One visit object per line (`.jsonl`, `.ndjson`).
    JsonLines,
}

impl DatasetFormat {
    /// Infer the format from the path extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// Load every visit record stored at `path`.
///
/// # Errors
/// Returns [`DatasetError::Missing`] or [`DatasetError::NotAFile`] when the
/// path does not name a regular file, [`DatasetError::UnsupportedFormat`] for
/// unknown extensions, and the read or parse variants when decoding fails.
pub fn load_visits(path: &Utf8Path) -> Result<Vec<VisitRecord>, DatasetError> {
    require_regular_file(path)?;
    let format = DatasetFormat::from_path(path).ok_or_else(|| DatasetError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let file = fs::open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let visits = read_visits(file, format, path)?;

    debug!("loaded {} visits from {path}", visits.len());
    let unnamed = visits
        .iter()
        .filter(|visit| visit.attraction.is_none())
        .count();
    if unnamed > 0 {
        warn!("{unnamed} visits in {path} have no attraction name; indexing them under \"\"");
    }
    Ok(visits)
}

/// Decode visit records from `reader`.
///
/// `path` is only used to label errors.
///
/// # Errors
/// Returns [`DatasetError::Parse`] for a malformed JSON array, and
/// [`DatasetError::Read`] or [`DatasetError::ParseLine`] with the one-based
/// line number for JSON Lines input.
pub fn read_visits<R: Read>(
    reader: R,
    format: DatasetFormat,
    path: &Utf8Path,
) -> Result<Vec<VisitRecord>, DatasetError> {
    let buffered = BufReader::new(reader);
    match format {
        DatasetFormat::Json => {
            serde_json::from_reader(buffered).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
        DatasetFormat::JsonLines => read_json_lines(buffered, path),
    }
}

fn read_json_lines<R: BufRead>(mut reader: R, path: &Utf8Path) -> Result<Vec<VisitRecord>, DatasetError> {
    let mut line = String::new();
    let mut line_number = 0_usize;
    let mut visits = Vec::new();

    loop {
        line.clear();
        line_number += 1;
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(DatasetError::Read {
                    path: path.to_path_buf(),
                    line: line_number,
                    source,
                });
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let visit = serde_json::from_str(trimmed).map_err(|source| DatasetError::ParseLine {
            path: path.to_path_buf(),
            line: line_number,
            source,
        })?;
        visits.push(visit);
    }

    Ok(visits)
}

fn require_regular_file(path: &Utf8Path) -> Result<(), DatasetError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(DatasetError::NotAFile {
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(DatasetError::Missing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(DatasetError::Inspect {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
