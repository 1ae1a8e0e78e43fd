//! Unit coverage for dataset loading.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use wanderlust_core::VisitRecord;

use crate::{DatasetError, DatasetFormat, load_visits, read_visits};

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|err| panic!("create temporary directory: {err}"))
}

fn write_dataset(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name))
        .unwrap_or_else(|path| panic!("non-UTF-8 temporary path {}", path.display()));
    fs::write(&path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
    path
}

#[rstest]
#[case("visits.json", Some(DatasetFormat::Json))]
#[case("VISITS.JSON", Some(DatasetFormat::Json))]
#[case("visits.jsonl", Some(DatasetFormat::JsonLines))]
#[case("visits.ndjson", Some(DatasetFormat::JsonLines))]
#[case("visits.csv", None)]
#[case("visits", None)]
fn infers_format_from_extension(#[case] name: &str, #[case] expected: Option<DatasetFormat>) {
    assert_eq!(DatasetFormat::from_path(Utf8Path::new(name)), expected);
}

#[rstest]
fn loads_json_array_with_dataset_headers(temp_dir: TempDir) {
    let path = write_dataset(
        &temp_dir,
        "visits.json",
        r#"[
            {"Attraction": "Louvre", "UserCountry": "France", "UserContinent": "Europe",
             "Rating": 5, "VisitMonth": 7, "VisitYear": 2022, "VisitMode": "Family"},
            {"attraction": "Colosseum", "cleaned_attraction_name": "colosseum rome"}
        ]"#,
    );

    let visits = load_visits(&path).unwrap_or_else(|err| panic!("load {path}: {err}"));

    assert_eq!(
        visits,
        vec![
            VisitRecord::named("Louvre")
                .with_origin("France", "Europe")
                .with_rating(5.0)
                .with_date(7, 2022)
                .with_mode("Family"),
            VisitRecord::named("Colosseum").with_cleaned_name("colosseum rome"),
        ]
    );
}

#[rstest]
fn loads_json_lines_skipping_blank_lines(temp_dir: TempDir) {
    let path = write_dataset(
        &temp_dir,
        "visits.jsonl",
        "{\"Attraction\": \"Louvre\"}\n\n   \n{\"Attraction\": null}\n{}\n",
    );

    let visits = load_visits(&path).unwrap_or_else(|err| panic!("load {path}: {err}"));

    assert_eq!(
        visits,
        vec![VisitRecord::named("Louvre"), VisitRecord::default(), VisitRecord::default()]
    );
}

#[rstest]
fn reports_line_of_malformed_record(temp_dir: TempDir) {
    let path = write_dataset(&temp_dir, "visits.ndjson", "{\"Attraction\": \"Louvre\"}\n\n{oops}\n");

    let err = load_visits(&path).err();

    assert!(
        matches!(err, Some(DatasetError::ParseLine { line: 3, .. })),
        "unexpected result: {err:?}"
    );
}

#[rstest]
fn reports_malformed_json_array(temp_dir: TempDir) {
    let path = write_dataset(&temp_dir, "visits.json", "{\"Attraction\": \"Louvre\"}");

    assert!(matches!(load_visits(&path), Err(DatasetError::Parse { .. })));
}

#[rstest]
fn rejects_missing_file(temp_dir: TempDir) {
    let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("absent.json"))
        .unwrap_or_else(|path| panic!("non-UTF-8 temporary path {}", path.display()));

    assert!(matches!(load_visits(&path), Err(DatasetError::Missing { .. })));
}

#[rstest]
fn rejects_directory(temp_dir: TempDir) {
    let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("nested.json"))
        .unwrap_or_else(|path| panic!("non-UTF-8 temporary path {}", path.display()));
    fs::create_dir(&path).unwrap_or_else(|err| panic!("create {path}: {err}"));

    assert!(matches!(load_visits(&path), Err(DatasetError::NotAFile { .. })));
}

#[rstest]
fn rejects_unknown_extension(temp_dir: TempDir) {
    let path = write_dataset(&temp_dir, "visits.csv", "Attraction\nLouvre\n");

    let err = load_visits(&path).err();

    assert!(matches!(err, Some(DatasetError::UnsupportedFormat { .. })));
    assert_eq!(
        err.map(|error| error.to_string()),
        Some(format!(
            "dataset {path} has an unsupported format; expected .json, .jsonl or .ndjson"
        ))
    );
}

#[rstest]
fn reads_from_any_reader() {
    let input = "{\"Attraction\": \"Louvre\", \"Rating\": 4.5}\n";

    let visits = read_visits(input.as_bytes(), DatasetFormat::JsonLines, Utf8Path::new("inline"))
        .unwrap_or_else(|err| panic!("read inline visits: {err}"));

    assert_eq!(visits, vec![VisitRecord::named("Louvre").with_rating(4.5)]);
}
