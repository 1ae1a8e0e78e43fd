//! Test helpers for writing visit datasets to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use wanderlust_core::test_support::SAMPLE_DESTINATIONS;

/// Temporary workspace holding visit datasets for one test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the sample landmarks as JSON Lines, with the Eiffel Tower
    /// visited twice and one rated visit per landmark.
    pub(super) fn write_sample_dataset(&self) -> Utf8PathBuf {
        let path = self.path("visits.jsonl");
        let mut contents = String::new();
        for (month, name) in (1_u8..).zip(SAMPLE_DESTINATIONS) {
            contents.push_str(&format!(
                "{{\"Attraction\": \"{name}\", \"UserCountry\": \"France\", \"Rating\": 4, \"VisitMonth\": {month}, \"VisitMode\": \"Couples\"}}\n"
            ));
        }
        contents.push_str(
            "{\"Attraction\": \"Eiffel Tower, Paris\", \"UserCountry\": \"Japan\", \"Rating\": 5, \"VisitMonth\": 1, \"VisitMode\": \"Family\"}\n",
        );
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write dataset file");
}
