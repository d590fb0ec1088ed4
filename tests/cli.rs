use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn prints_both_answers() {
    let mut cmd = Command::cargo_bin("guard-patrol").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert().success().stdout("41\n6\n");
}

#[test]
fn sequential_prints_same_answers() {
    let mut cmd = Command::cargo_bin("guard-patrol").unwrap();
    cmd.arg("--sequential").arg("tests/inputs/example.txt");

    cmd.assert().success().stdout("41\n6\n");
}

#[test]
fn missing_input_path_prints_usage() {
    let mut cmd = Command::cargo_bin("guard-patrol").unwrap();

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Usage"));
}

#[test]
fn missing_file_fails_without_answer() {
    let mut cmd = Command::cargo_bin("guard-patrol").unwrap();
    cmd.arg("tests/inputs/does_not_exist.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Failed to open given file"));
}

#[test]
fn jagged_rows_are_rejected() {
    let mut cmd = Command::cargo_bin("guard-patrol").unwrap();
    cmd.arg("tests/inputs/jagged.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Expect 4 columns in row 1, given 3."));
}

#[test]
fn lab_without_guard_is_rejected() {
    let mut cmd = Command::cargo_bin("guard-patrol").unwrap();
    cmd.arg("tests/inputs/no_guard.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("There's no guard in given laboratory"));
}
