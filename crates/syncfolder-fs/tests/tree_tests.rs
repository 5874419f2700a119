//! Tree expansion against real directory layouts

use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use syncfolder_fs::{EntryKind, Tree};

fn sorted_keys(tree: &Tree) -> Vec<(String, EntryKind)> {
    let mut keys: Vec<_> = tree
        .iter()
        .map(|e| (e.key.as_str().to_string(), e.kind))
        .collect();
    keys.sort();
    keys
}

#[test]
fn expand_lists_root_files_and_directories() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("img/cat.jpg").write_str("cat").unwrap();
    temp.child("img/old").create_dir_all().unwrap();

    let tree = Tree::expand(temp.path());

    assert_eq!(
        sorted_keys(&tree),
        vec![
            ("".to_string(), EntryKind::Directory),
            ("img".to_string(), EntryKind::Directory),
            ("img/cat.jpg".to_string(), EntryKind::File),
            ("img/old".to_string(), EntryKind::Directory),
        ]
    );
}

#[test]
fn expand_missing_root_is_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    let tree = Tree::expand(temp.path().join("nope"));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn expand_includes_dotfiles() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".DS_Store").write_str("").unwrap();

    let tree = Tree::expand(temp.path());
    assert!(tree.keys().contains(std::path::Path::new(".DS_Store")));
}

#[test]
fn expand_yields_parents_before_children() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b/c/d.txt").write_str("d").unwrap();

    let tree = Tree::expand(temp.path());
    let position = |key: &str| tree.iter().position(|e| e.key.as_str() == key).unwrap();

    assert!(tree.entries()[0].is_root());
    assert!(position("a") < position("a/b"));
    assert!(position("a/b") < position("a/b/c"));
    assert!(position("a/b/c") < position("a/b/c/d.txt"));
}

#[test]
fn expand_records_full_paths_under_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("x.png").write_str("x").unwrap();

    let tree = Tree::expand(temp.path());
    let entry = tree.iter().find(|e| e.key.as_str() == "x.png").unwrap();
    assert!(entry.path.is_file());
    assert_eq!(entry.path, temp.path().join("x.png"));
    assert_eq!(entry.relative, std::path::Path::new("x.png"));
}

#[test]
fn entry_depth_and_descendants_use_whole_components() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("img/old/a.png").write_str("a").unwrap();
    temp.child("img/older/b.png").write_str("b").unwrap();

    let tree = Tree::expand(temp.path());
    let find = |key: &str| tree.iter().find(|e| e.key.as_str() == key).unwrap();

    let old = find("img/old");
    assert_eq!(old.depth(), 2);
    assert_eq!(find("").depth(), 0);
    assert!(find("img/old/a.png").is_descendant_of(old));
    assert!(!find("img/older/b.png").is_descendant_of(old));
    assert!(!old.is_descendant_of(old));
}

#[cfg(unix)]
#[test]
fn expand_keeps_native_path_for_unusual_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = assert_fs::TempDir::new().unwrap();
    let odd = temp.path().join(OsStr::from_bytes(b"bad\xff.png"));
    std::fs::write(&odd, "x").unwrap();
    std::fs::write(temp.path().join("a\\b.png"), "x").unwrap();

    let tree = Tree::expand(temp.path());

    assert!(tree.iter().any(|e| e.path == odd));
    let slashed = tree
        .iter()
        .find(|e| e.relative == std::path::Path::new("a\\b.png"))
        .unwrap();
    assert_eq!(slashed.depth(), 1);
    assert_eq!(slashed.key.as_str(), "a/b.png");
    assert!(slashed.path.is_file());
}

#[cfg(unix)]
#[test]
fn expand_reports_symlinked_dir_as_file_without_following() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("real/inner.png").write_str("x").unwrap();
    std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

    let tree = Tree::expand(temp.path());
    let link = tree.iter().find(|e| e.key.as_str() == "link").unwrap();
    assert_eq!(link.kind, EntryKind::File);
    assert!(!tree.keys().contains(std::path::Path::new("link/inner.png")));
}
