use std::fs;

use campaign_store::{ensure_state_dir, read_optional, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("favorites.ron", "(favorites: [1])").unwrap();
    assert_eq!(first.file_name().unwrap(), "favorites.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "(favorites: [1])");

    let second = writer.write("favorites.ron", "(favorites: [])").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(favorites: [])");
}

#[test]
fn state_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("favorites.ron", "data").is_err());
    assert!(!file_path.with_file_name("favorites.ron").exists());
}

#[test]
fn read_optional_maps_missing_to_none() {
    let temp = TempDir::new().unwrap();
    assert_eq!(read_optional(&temp.path().join("absent.ron")).unwrap(), None);

    let present = temp.path().join("present.ron");
    fs::write(&present, "()").unwrap();
    assert_eq!(read_optional(&present).unwrap().as_deref(), Some("()"));
}
