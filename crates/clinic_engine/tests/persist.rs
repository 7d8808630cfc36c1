use std::fs;

use clinic_engine::{ensure_output_dir, target_exists, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir_idempotently() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("programs").join("2019");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    ensure_output_dir(&new_dir).unwrap();
}

#[test]
fn output_dir_must_be_a_directory() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();
    assert!(matches!(
        ensure_output_dir(&file_path),
        Err(PersistError::OutputDir(_))
    ));
}

#[test]
fn atomic_write_stores_exact_bytes() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("2020"));

    let bytes = [0x25, 0x50, 0x44, 0x46, 0x00, 0xff];
    let written = writer.write_new("2020_A_Concert.pdf", &bytes).unwrap();
    assert_eq!(written.file_name().unwrap(), "2020_A_Concert.pdf");
    assert_eq!(fs::read(&written).unwrap(), bytes);
    assert!(target_exists(&written));
}

#[test]
fn atomic_write_never_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write_new("doc.pdf", b"first").unwrap();
    let err = writer.write_new("doc.pdf", b"second").unwrap_err();
    assert!(matches!(err, PersistError::AlreadyExists(_)));
    assert_eq!(fs::read(&first).unwrap(), b"first");

    // Only the final file is left behind, no stray temp files.
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write_new("doc.pdf", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.pdf").exists());
}
