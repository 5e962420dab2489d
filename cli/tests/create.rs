//! # MkFile CLI Create Integration Tests
//!
//! File: cli/tests/create.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/mkfile
//!
//! ## Overview
//!
//! Integration tests for the `mkfile` binary: file creation, conflict
//! policies, batch partial failure, and exit status behavior. Each test runs
//! the compiled binary inside its own temporary directory so the project
//! config search and relative path resolution stay isolated.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Creating an absent file succeeds, reports `Created`, and leaves an
/// empty file behind.
#[test]
fn test_create_absent_file() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("new.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(target.is_file());
    assert_eq!(fs::read_to_string(&target).unwrap(), "");
}

/// Content without a trailing newline is written with exactly one added.
#[test]
fn test_content_gains_trailing_newline() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("note.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .args(["--content", "hello"])
        .arg(&target)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "hello\n");
}

/// Content already ending with a newline is not given a second one.
#[test]
fn test_content_newline_not_duplicated() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("note.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .args(["--content", "hello\n"])
        .arg(&target)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "hello\n");
}

/// An existing file under the default policy fails with AlreadyExists,
/// exits non-zero, and leaves the file untouched.
#[test]
fn test_existing_file_fails_without_force() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("present.txt");
    fs::write(&target, "original\n").expect("fixture");

    mkfile_cmd()
        .current_dir(temp.path())
        .args(["--content", "new"])
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "original\n");
}

/// `--force` overwrites, and doing it twice converges on identical content.
#[test]
fn test_force_overwrites_idempotently() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("note.txt");
    fs::write(&target, "a long original body\n").expect("fixture");

    for _ in 0..2 {
        mkfile_cmd()
            .current_dir(temp.path())
            .args(["--force", "--content", "short"])
            .arg(&target)
            .assert()
            .success()
            .stdout(predicate::str::contains("Overwrote"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "short\n");
    }
}

/// Appending "x" to a file containing "y\n" yields "y\nx\n".
#[test]
fn test_append_semantics() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("log.txt");
    fs::write(&target, "y\n").expect("fixture");

    mkfile_cmd()
        .current_dir(temp.path())
        .args(["--append", "--content", "x"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "y\nx\n");
}

/// A directory target is rejected under every policy, `--force` included.
#[test]
fn test_directory_target_always_fails() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("taken");
    fs::create_dir(&target).expect("fixture dir");

    for flags in [&[][..], &["--force"][..], &["--append"][..]] {
        mkfile_cmd()
            .current_dir(temp.path())
            .args(flags)
            .arg(&target)
            .assert()
            .failure()
            .stderr(predicate::str::contains("path is a directory"));
    }
}

/// A failing path never stops the rest of the batch, and the summary
/// reports the partial outcome.
#[test]
fn test_batch_partial_failure() {
    let temp = tempdir().expect("Failed to create temp dir");
    let existing_dir = temp.path().join("taken");
    fs::create_dir(&existing_dir).expect("fixture dir");
    let absent = temp.path().join("new.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .arg(&existing_dir)
        .arg(&absent)
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("Created")
                .and(predicate::str::contains("1 of 2 paths succeeded")),
        )
        .stderr(predicate::str::contains("path is a directory"));

    assert!(absent.is_file());
}

/// Missing ancestor directories are created along with the file.
#[test]
fn test_missing_ancestors_created() {
    let temp = tempdir().expect("Failed to create temp dir");

    mkfile_cmd()
        .current_dir(temp.path())
        .arg("a/b/c/file.txt")
        .assert()
        .success();

    assert!(temp.path().join("a").is_dir());
    assert!(temp.path().join("a/b").is_dir());
    assert!(temp.path().join("a/b/c").is_dir());
    assert!(temp.path().join("a/b/c/file.txt").is_file());
}

/// `--skip-existing` downgrades an AlreadyExists failure to a Skipped
/// success: exit zero, content untouched.
#[test]
fn test_skip_existing_succeeds() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("present.txt");
    fs::write(&target, "original\n").expect("fixture");

    mkfile_cmd()
        .current_dir(temp.path())
        .args(["--skip-existing", "--content", "new"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "original\n");
}

/// A project `.mkfile.toml` can change the default policy; the binary picks
/// it up from the working directory.
#[test]
fn test_project_config_sets_default_policy() {
    let temp = tempdir().expect("Failed to create temp dir");
    fs::write(
        temp.path().join(".mkfile.toml"),
        "[defaults]\npolicy = \"force\"\n",
    )
    .expect("config fixture");
    let target = temp.path().join("present.txt");
    fs::write(&target, "original\n").expect("fixture");

    mkfile_cmd()
        .current_dir(temp.path())
        .args(["--content", "new"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
}

/// An invalid project config is an application-level error: nothing is
/// created and the process reports the configuration failure.
#[test]
fn test_invalid_project_config_aborts() {
    let temp = tempdir().expect("Failed to create temp dir");
    fs::write(
        temp.path().join(".mkfile.toml"),
        "[defaults]\npolicy = \"clobber\"\n",
    )
    .expect("config fixture");
    let target = temp.path().join("new.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));

    assert!(!target.exists());
}

/// Interactive mode reads content lines from stdin until a lone '.'.
#[test]
fn test_interactive_content_from_stdin() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("note.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .arg("--interactive")
        .arg(&target)
        .write_stdin("first line\nsecond line\n.\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "first line\nsecond line\n"
    );
}

/// Interactive mode with immediate EOF creates an empty file.
#[test]
fn test_interactive_empty_input_creates_empty_file() {
    let temp = tempdir().expect("Failed to create temp dir");
    let target = temp.path().join("empty.txt");

    mkfile_cmd()
        .current_dir(temp.path())
        .arg("--interactive")
        .arg(&target)
        .write_stdin("")
        .assert()
        .success();

    assert!(target.is_file());
    assert_eq!(fs::read_to_string(&target).unwrap(), "");
}
