//! Integration tests for session creation and listing

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::labbook_cmd;

#[test]
fn test_new_session_appears_in_listing() {
    let temp = TempDir::new().unwrap();

    labbook_cmd()
        .current_dir(temp.path())
        .args(["new", "Sesja 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created session 1."));

    labbook_cmd()
        .current_dir(temp.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sesja 1"))
        .stdout(predicate::str::is_match(r"\(\d{4}-\d{2}-\d{2} \d{2}:\d{2}\)").unwrap());
}

#[test]
fn test_blank_title_inserts_nothing() {
    let temp = TempDir::new().unwrap();

    labbook_cmd()
        .current_dir(temp.path())
        .args(["new", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not());

    labbook_cmd()
        .current_dir(temp.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet"));
}

#[test]
fn test_sessions_empty_notebook() {
    let temp = TempDir::new().unwrap();

    labbook_cmd()
        .current_dir(temp.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet"));
}

#[test]
fn test_sessions_listed_in_creation_order() {
    let temp = TempDir::new().unwrap();

    for title in ["first", "second", "third"] {
        labbook_cmd()
            .current_dir(temp.path())
            .args(["new", title])
            .assert()
            .success();
    }

    labbook_cmd()
        .current_dir(temp.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)first.*second.*third").unwrap());
}
