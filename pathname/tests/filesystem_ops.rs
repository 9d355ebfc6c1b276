//! Integration tests for filesystem operations on absolute scratch paths.

mod common;

use common::Scratch;
use pathname::{CopyBackend, Error, Pathname, WalkControl};

#[test]
fn test_write_then_read_round_trips() {
    let scratch = Scratch::new();
    for text in ["123", "你好", "123🥳123"] {
        let path = scratch.base.append_random();
        path.write(text).unwrap();
        assert_eq!(path.read().unwrap(), text);
        path.rmtree().unwrap();
        assert!(!path.exist());
    }
}

#[test]
fn test_second_write_replaces_contents() {
    let scratch = Scratch::new();
    let path = scratch.base.append_random();
    path.write("a much longer first value").unwrap();
    path.write("2").unwrap();
    assert_eq!(path.read().unwrap(), "2");
}

#[test]
fn test_write_into_directory_fails() {
    let scratch = Scratch::new();
    let dir = scratch.base.append_random();
    dir.mkpath().unwrap();
    assert!(dir.write("123 by ut").is_err());
}

#[test]
fn test_mkpath_nested_and_idempotent() {
    let scratch = Scratch::new();
    let base = scratch.base.append_random();
    base.mkpath().unwrap();
    assert!(base.is_directory());

    let nested = base.append("1").append("2").append("3");
    nested.mkpath().unwrap();
    assert!(nested.is_directory());

    // Existing target is not an error
    base.append("1").append("2").append("3").mkpath().unwrap();
    assert!(nested.is_directory());
}

#[test]
fn test_rmtree_removes_everything() {
    let scratch = Scratch::new();
    let base = scratch.base.append_random();
    base.mkpath().unwrap();
    assert!(base.exist());
    base.rmtree().unwrap();
    assert!(!base.exist());

    base.mkpath().unwrap();
    let dir = base.append("1").append("2").append("3");
    let file = base.append("1").append("file");
    dir.mkpath().unwrap();
    file.write("").unwrap();

    base.rmtree().unwrap();
    assert!(!base.exist());
    assert!(!dir.exist());
    assert!(!file.exist());

    // Missing path is a no-op
    base.rmtree().unwrap();
}

#[test]
fn test_copy_file_to() {
    let scratch = Scratch::new();
    let source = scratch.base.append_random();
    source.write("123").unwrap();

    let target = scratch.base.append_random();
    source.copy_file_to(&target).unwrap();
    assert_eq!(target.read().unwrap(), "123");
    assert_eq!(target.read_bytes().unwrap(), source.read_bytes().unwrap());

    // Never overwrites
    assert!(matches!(
        source.copy_file_to(&target),
        Err(Error::TargetExists { .. })
    ));

    // Directories are rejected with their own error
    assert!(matches!(
        scratch.base.copy_file_to(&scratch.base.append_random()),
        Err(Error::SourceIsDirectory { .. })
    ));

    // Missing source
    let missing = scratch.base.append_random();
    assert!(missing.copy_file_to(&scratch.base.append_random()).is_err());
}

#[test]
fn test_copy_dir_to() {
    let scratch = Scratch::new();
    let source = scratch.base.append_random();
    source.mkpath().unwrap();
    let file = source.append_random();
    file.write("1234").unwrap();

    for backend in [CopyBackend::Command, CopyBackend::Native] {
        let target = scratch.base.append_random();
        source.copy_dir_to_with(&target, backend).unwrap();

        assert!(target.is_directory());
        let copied = target.append(&file.basename());
        assert!(copied.exist());
        assert_eq!(copied.read().unwrap(), "1234");
    }
}

#[test]
fn test_move_to() {
    let scratch = Scratch::new();
    let source = scratch.base.append_random();
    source.write("123").unwrap();

    let target = scratch.base.append_random();
    source.move_to(&target).unwrap();
    assert!(!source.exist());
    assert_eq!(target.read().unwrap(), "123");

    // A file cannot replace a directory
    let other = scratch.base.append_random();
    other.write("x").unwrap();
    assert!(other.move_to(&scratch.base).is_err());
}

#[test]
fn test_children_and_names() {
    let scratch = Scratch::with_files(&["b.txt", "a.txt", "dir/c.txt"]);

    let children = scratch.base.children().unwrap();
    assert_eq!(
        children,
        vec![
            scratch.base.append("a.txt"),
            scratch.base.append("b.txt"),
            scratch.base.append("dir"),
        ]
    );
    assert_eq!(scratch.base.children_names(), vec!["a.txt", "b.txt", "dir"]);

    let file = scratch.base.append("a.txt");
    assert!(file.children().is_err());
    assert!(file.children_names().is_empty());
}

#[test]
fn test_walk_collects_files() {
    let scratch = Scratch::with_files(&["1.txt", "sub/2", "sub2/sub22/3.txt"]);

    let mut files = Vec::new();
    scratch
        .base
        .walk(|path, entry| {
            if entry.is_ok_and(|e| e.file_type().is_file()) {
                files.push(path.clone());
            }
            Ok(WalkControl::Continue)
        })
        .unwrap();

    assert_eq!(
        files,
        vec![
            scratch.base.append("1.txt"),
            scratch.base.append("sub/2"),
            scratch.base.append("sub2/sub22/3.txt"),
        ]
    );
}

#[test]
fn test_glob_with_absolute_base() {
    let scratch = Scratch::with_files(&["1.txt", "sub/2", "sub2/sub22/3.txt"]);
    let base = &scratch.base;

    assert_eq!(
        base.glob("*"),
        vec![base.append("1.txt"), base.append("sub"), base.append("sub2")]
    );
    assert_eq!(base.glob("*.txt"), vec![base.append("1.txt")]);
    assert_eq!(
        base.glob("*/*"),
        vec![base.append("sub/2"), base.append("sub2/sub22")]
    );
    assert_eq!(base.glob("*/*/*.txt"), vec![base.append("sub2/sub22/3.txt")]);
    assert!(base.glob("[").is_empty());
}

#[test]
#[cfg(unix)]
fn test_symlink_and_permissions() {
    let scratch = Scratch::new();
    let file = scratch.base.append("file");
    let link = scratch.base.append("link");
    file.write("data").unwrap();

    file.symlink_to(&link).unwrap();
    assert!(link.is_symlink());
    assert!(!link.is_regular_file());
    assert!(file.is_regular_file());

    file.chmod(0o600).unwrap();
    assert_eq!(file.perm(), 0o600);
    // Permission queries follow the link
    assert_eq!(link.perm(), 0o600);
}

#[test]
#[cfg(unix)]
fn test_well_known_system_paths() {
    assert!(Pathname::new("/").is_directory());
    assert!(!Pathname::new("/").is_file());
    assert!(Pathname::new("/").children().unwrap().iter().any(|p| p.basename() == "usr"));
    assert!(!Pathname::new("/asdfljlsajf").exist());
    assert!(Pathname::new("/asdfljlsajf").children().is_err());
}
