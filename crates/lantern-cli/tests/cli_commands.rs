//! Integration tests for the lantern CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STUB: &str = r#"printf 'Stub Adventure\nRelease 1.\n>'
while IFS= read -r line; do
  case "$line" in
    save|restore)
      printf 'Please enter a filename: '
      IFS= read -r name
      printf '%s: Ok (%s).\n>' "$line" "$name" ;;
    *) printf 'You said: %s\n>' "$line" ;;
  esac
done
"#;

/// Create a games directory holding a shell-script "game".
fn games_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stub.sh"), STUB).unwrap();
    dir
}

/// `lantern play` pointed at the stub directory.
fn play(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lantern").unwrap();
    cmd.env_remove("LANTERN_INTERPRETER")
        .env_remove("LANTERN_GAMES_DIR")
        .args(["play", "-i", "/bin/sh", "-g", dir.path().to_str().unwrap()]);
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_succeeds_with_valid_setup() {
    let dir = games_dir();
    Command::cargo_bin("lantern")
        .unwrap()
        .args(["check", "stub.sh", "-i", "/bin/sh", "-g"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("/bin/sh"))
                .and(predicate::str::contains("stub.sh")),
        );
}

#[test]
fn check_missing_game_file() {
    let dir = games_dir();
    Command::cargo_bin("lantern")
        .unwrap()
        .args(["check", "LostPig.z8", "-i", "/bin/sh", "-g"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("game file not found"));
}

#[test]
fn check_without_game() {
    let dir = games_dir();
    Command::cargo_bin("lantern")
        .unwrap()
        .args(["check", "-i", "/bin/sh", "-g"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no game given"));
}

#[test]
fn check_rejects_path_outside_games_dir() {
    let dir = games_dir();
    let outside = dir.path().join("stub.sh");
    Command::cargo_bin("lantern")
        .unwrap()
        .args(["check", "-i", "/bin/sh", "-g"])
        .arg(dir.path())
        .arg(&outside)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid game name"));
}

#[test]
fn check_missing_interpreter() {
    let dir = games_dir();
    Command::cargo_bin("lantern")
        .unwrap()
        .env_remove("LANTERN_INTERPRETER")
        .args(["check", "stub.sh", "-g"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("zvm_path"));
}

#[test]
fn check_reads_settings_file() {
    let dir = games_dir();
    let settings = dir.path().join("settings.json");
    let json = format!(
        r#"{{"interactive fiction": {{"zvm_path": "/bin/sh", "game_directory": "{}"}}}}"#,
        dir.path().display()
    );
    fs::write(&settings, json).unwrap();

    Command::cargo_bin("lantern")
        .unwrap()
        .env_remove("LANTERN_INTERPRETER")
        .env_remove("LANTERN_GAMES_DIR")
        .args(["check", "stub.sh", "-s"])
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn check_invalid_settings_file() {
    let dir = games_dir();
    let settings = dir.path().join("settings.json");
    fs::write(&settings, "{ not json").unwrap();

    Command::cargo_bin("lantern")
        .unwrap()
        .args(["check", "stub.sh", "-s"])
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_full_session() {
    let dir = games_dir();
    play(&dir)
        .args(["stub.sh", "-t", "5000"])
        .write_stdin("look\nsave slotA\nrestore slotA\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Stub Adventure")
                .and(predicate::str::contains("You said: look"))
                .and(predicate::str::contains("save: Ok (slotA)."))
                .and(predicate::str::contains("restore: Ok (slotA)."))
                .and(predicate::str::contains("Goodbye")),
        );
}

#[test]
fn play_ends_on_eof() {
    let dir = games_dir();
    play(&dir)
        .args(["stub.sh", "-t", "5000"])
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You said: inventory"));
}

#[test]
fn play_asks_for_game() {
    let dir = games_dir();
    play(&dir)
        .args(["-t", "5000"])
        .write_stdin("stub.sh\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Which fiction would you play?")
                .and(predicate::str::contains("Stub Adventure")),
        );
}

#[test]
fn play_missing_game_file() {
    let dir = games_dir();
    play(&dir)
        .args(["minizork.z3"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start game"));
}

#[test]
fn play_save_without_name_asks() {
    let dir = games_dir();
    play(&dir)
        .args(["stub.sh", "-t", "5000"])
        .write_stdin("save\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a name"));
}

#[test]
fn play_verbose_echoes_lines() {
    let dir = games_dir();
    play(&dir)
        .args(["stub.sh", "-t", "5000", "--verbose"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Release 1.").count(2));
}
