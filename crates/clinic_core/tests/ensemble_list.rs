use std::fs;

use clinic_core::{load_ensemble_list, parse_ensemble_list, ListError, COMMON_ENSEMBLES};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn skips_blank_lines_and_comments() {
    assert_eq!(parse_ensemble_list("A\n\n# comment\nB\n"), vec!["A", "B"]);
}

#[test]
fn trims_whitespace_and_keeps_order() {
    let text = "  Zeta \r\n\t# indented comment\nAlpha\n   \nMid Name\n";
    assert_eq!(parse_ensemble_list(text), vec!["Zeta", "Alpha", "Mid Name"]);
}

#[test]
fn loads_list_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("known.txt");
    fs::write(&path, "# military\nUSAF\nNavyBand\n").unwrap();

    assert_eq!(load_ensemble_list(&path).unwrap(), vec!["USAF", "NavyBand"]);
}

#[test]
fn missing_list_is_an_error() {
    clinic_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.txt");

    let err = load_ensemble_list(&path).unwrap_err();
    let ListError::Read { path: reported, .. } = &err;
    assert_eq!(reported, &path);
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn builtin_vocabulary_has_no_duplicates() {
    let mut names: Vec<_> = COMMON_ENSEMBLES.to_vec();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(names.len(), before);
    assert!(COMMON_ENSEMBLES.contains(&"USAF"));
}
