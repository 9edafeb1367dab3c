mod common;

use assert_cmd::Command;
use common::{create_temp_directory, write_test_jpeg, write_test_png};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_missing_directory_exits_zero_with_message() {
    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.arg("/definitely/does/not/exist");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory not found"))
        .stdout(predicate::str::contains(
            "Compression could not be completed",
        ));
}

#[test]
fn test_empty_directory_exits_zero_with_message() {
    let dir = create_temp_directory();
    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No image files found"))
        .stdout(predicate::str::contains(
            "Compression could not be completed",
        ));
}

#[test]
fn test_prompt_reads_directory_from_stdin() {
    let dir = create_temp_directory();
    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.write_stdin(format!("{}\n", dir.path().display()));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enter the path"))
        .stdout(predicate::str::contains("No image files found"));
}

#[test]
fn test_prompt_and_argument_agree_on_missing_directory() {
    let mut by_arg = Command::cargo_bin("img-slim").unwrap();
    by_arg.arg("/no/such/dir");
    by_arg
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory not found"));

    let mut by_prompt = Command::cargo_bin("img-slim").unwrap();
    by_prompt.write_stdin("/no/such/dir\n");
    by_prompt
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory not found"));
}

#[test]
fn test_successful_run_prints_progress_and_summary() {
    let dir = create_temp_directory();
    write_test_jpeg(&dir.path().join("photo.jpg"));

    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[1/1] photo.jpg"))
        .stdout(predicate::str::contains("COMPRESSION SUMMARY"))
        .stdout(predicate::str::contains("Total images: 1"))
        .stdout(predicate::str::contains("✅ Compression complete!"));
}

#[test]
fn test_run_never_grows_files_and_cleans_temp_files() {
    let dir = create_temp_directory();
    let jpg = dir.path().join("a.jpg");
    let png = dir.path().join("b.png");
    write_test_jpeg(&jpg);
    write_test_png(&png);
    let jpg_before = fs::metadata(&jpg).unwrap().len();
    let png_before = fs::metadata(&png).unwrap().len();

    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.arg(dir.path());
    cmd.assert().success();

    assert!(fs::metadata(&jpg).unwrap().len() <= jpg_before);
    assert!(fs::metadata(&png).unwrap().len() <= png_before);
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_corrupt_file_is_reported_but_run_continues() {
    let dir = create_temp_directory();
    write_test_jpeg(&dir.path().join("good.jpg"));
    fs::write(dir.path().join("bad.png"), b"not a png").unwrap();

    let mut cmd = Command::cargo_bin("img-slim").unwrap();
    cmd.arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("Errors: 1"))
        .stdout(predicate::str::contains("✅ Compression complete!"));

    assert_eq!(fs::read(dir.path().join("bad.png")).unwrap(), b"not a png");
}
