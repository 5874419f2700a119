use std::fs;
use syncfolder_fs::{NormalizedPath, Removal, io};
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("tinypng.json"));

    io::write_atomic(&path, b"{}").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "{}");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("tinypng.json");
    fs::write(&file_path, "{\"a.png\": 1}").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"{}").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "{}");
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("tinypng.json"));

    io::write_atomic(&path, b"{}").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.json"));
    assert!(io::read_text(&path).is_err());
}

#[test]
fn test_remove_file_missing_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ghost.png");
    assert_eq!(io::remove_file(&path).unwrap(), Removal::AlreadyGone);
}

#[test]
fn test_remove_empty_dir_removes_only_empty() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty");
    fs::create_dir(&empty).unwrap();

    assert!(io::is_empty_dir(&empty).unwrap());
    assert_eq!(io::remove_empty_dir(&empty).unwrap(), Removal::Removed);
    assert!(!empty.exists());
    assert_eq!(io::remove_empty_dir(&empty).unwrap(), Removal::AlreadyGone);
}

#[cfg(unix)]
#[test]
fn test_remove_file_deletes_symlink_not_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("real.png");
    let link = temp.path().join("link.png");
    fs::write(&target, "x").unwrap();
    std::os::unix::fs::symlink(&target, &link).unwrap();

    assert_eq!(io::remove_file(&link).unwrap(), Removal::Removed);
    assert!(target.exists());
    assert!(link.symlink_metadata().is_err());
}
