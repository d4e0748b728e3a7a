//! Tests for the snapshot writer

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use fedsnap_config::ArchiveConfig;
use fedsnap_gather::Record;

use crate::error::ArchiveError;
use crate::writer::ArchiveWriter;

fn writer_in(root: &TempDir) -> ArchiveWriter {
    ArchiveWriter::new(&ArchiveConfig {
        path: root.path().to_path_buf(),
        prefix: "fedsnap".to_string(),
    })
}

fn walk_files(dir: &PathBuf) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.clone()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}

#[test]
fn test_writes_record_at_logical_name() {
    let root = TempDir::new().unwrap();
    let records = [Record::new("config/metrics", b"up 1\n".to_vec())];

    let snapshot = writer_in(&root).write_snapshot(&records).unwrap();

    let written = fs::read(snapshot.join("config/metrics")).unwrap();
    assert_eq!(written, b"up 1\n");
}

#[test]
fn test_snapshot_directory_carries_prefix() {
    let root = TempDir::new().unwrap();
    let snapshot = writer_in(&root).write_snapshot(&[]).unwrap();

    let name = snapshot.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("fedsnap-"), "got '{}'", name);
    assert!(snapshot.starts_with(root.path()));
}

#[test]
fn test_multiple_records_one_snapshot() {
    let root = TempDir::new().unwrap();
    let records = [
        Record::new("config/metrics", b"a\n".to_vec()),
        Record::new("config/version", b"4.yz\n".to_vec()),
    ];

    let snapshot = writer_in(&root).write_snapshot(&records).unwrap();

    assert_eq!(fs::read(snapshot.join("config/metrics")).unwrap(), b"a\n");
    assert_eq!(fs::read(snapshot.join("config/version")).unwrap(), b"4.yz\n");
}

#[test]
fn test_no_partial_files_remain() {
    let root = TempDir::new().unwrap();
    let records = [Record::new("config/metrics", b"up 1\n".to_vec())];

    let snapshot = writer_in(&root).write_snapshot(&records).unwrap();

    let leftovers: Vec<_> = walk_files(&snapshot)
        .into_iter()
        .filter(|p| p.to_string_lossy().ends_with(".partial"))
        .collect();
    assert!(leftovers.is_empty(), "leftover staging files: {:?}", leftovers);
}

#[test]
fn test_rewrite_replaces_record() {
    let root = TempDir::new().unwrap();
    let writer = writer_in(&root);

    // Same second, same directory: the second write must win cleanly.
    writer
        .write_snapshot(&[Record::new("config/metrics", b"old\n".to_vec())])
        .unwrap();
    let snapshot = writer
        .write_snapshot(&[Record::new("config/metrics", b"new\n".to_vec())])
        .unwrap();

    assert_eq!(fs::read(snapshot.join("config/metrics")).unwrap(), b"new\n");
}

// ============================================================================
// Record name hygiene
// ============================================================================

#[test]
fn test_rejects_absolute_record_name() {
    let root = TempDir::new().unwrap();
    let records = [Record::new("/etc/shadow", Vec::new())];

    let err = writer_in(&root).write_snapshot(&records).unwrap_err();
    assert!(matches!(err, ArchiveError::InvalidRecordName(_)));
}

#[test]
fn test_rejects_parent_traversal() {
    let root = TempDir::new().unwrap();
    let records = [Record::new("../outside", Vec::new())];

    let err = writer_in(&root).write_snapshot(&records).unwrap_err();
    assert!(matches!(err, ArchiveError::InvalidRecordName(_)));
}

#[test]
fn test_rejects_empty_record_name() {
    let root = TempDir::new().unwrap();
    let records = [Record::new("", Vec::new())];

    let err = writer_in(&root).write_snapshot(&records).unwrap_err();
    assert!(matches!(err, ArchiveError::InvalidRecordName(_)));
}
