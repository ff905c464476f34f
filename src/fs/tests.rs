#![cfg(test)]

use std::io::{Read, Write};

use tempfile::{NamedTempFile, TempDir};

use super::*;

#[test]
fn test_open_and_read() {
    let mut temp = NamedTempFile::new().expect("temp file should be created");
    temp.write_all("héllo\r\nworld".as_bytes())
        .expect("temp file should be writable");

    let mut file = File::open(temp.path()).expect("existing file should open");
    let mut contents = String::new();
    file.read_to_string(&mut contents).expect("file should be readable");
    assert_eq!(contents, "héllo\r\nworld", "All bytes should be read back unchanged.");

    assert!(file.close().is_ok(), "Closing an open file should succeed.");
}

#[test]
fn test_open_errors() {
    let dir = TempDir::new().expect("temp dir should be created");

    let missing = File::open(dir.path().join("missing.txt"));
    assert!(
        missing.is_err_and(|e| e.is_missing_component()),
        "Opening a missing file should report the missing component."
    );

    let directory = File::open(dir.path());
    assert!(
        directory.is_err_and(|e| e.is_is_directory()),
        "Opening a directory should be rejected."
    );

    let not_dir = NamedTempFile::new_in(dir.path()).expect("temp file should be created");
    let through_file = File::open(not_dir.path().join("child"));
    assert!(
        through_file.is_err_and(|e| e.is_non_dir_component()),
        "A file used as a directory in the path should be reported."
    );

    let nul = File::open("bad\0path");
    assert!(
        nul.is_err_and(|e| e.is_interior_nul()),
        "Paths containing nul bytes can't be passed to the OS."
    );
}

#[test]
fn test_read_empty() {
    let temp = NamedTempFile::new().expect("temp file should be created");
    let mut file = File::open(temp.path()).expect("existing file should open");

    let mut buf = [0_u8; 16];
    assert_eq!(file.read(&mut buf).ok(), Some(0), "An empty file should read as EOF.");
}
