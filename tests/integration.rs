//! Integration tests for the `rainmachine` binary.
//!
//! These tests exercise the CLI layer end-to-end: they spawn the actual
//! compiled binary and assert on exit codes, stdout, and stderr.  Every path
//! covered here exits on its own — the signal-driven idle behaviour lives in
//! `tests/e2e.rs`.
//!
//! # Running
//!
//! ```sh
//! cargo test --test integration
//! ```

use std::{fs, process::Command};

/// Absolute path to the compiled `rainmachine` binary, resolved at compile
/// time by Cargo.  This works correctly for both `cargo test` and `cargo test
/// --release` without any hardcoding.
const BIN: &str = env!("CARGO_BIN_EXE_rainmachine");

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Run `rainmachine` with `args` in the given working directory.
///
/// Returns `(exit_code, stdout, stderr)`.
fn run_in(args: &[&str], dir: &std::path::Path) -> (Option<i32>, String, String) {
    let out = Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {BIN}: {e}"));

    (
        out.status.code(),
        String::from_utf8_lossy(&out.stdout).into_owned(),
        String::from_utf8_lossy(&out.stderr).into_owned(),
    )
}

/// Run `rainmachine` with `args` in a fresh temporary directory.
fn run(args: &[&str]) -> (Option<i32>, String, String) {
    let dir = tempfile::tempdir().unwrap();
    run_in(args, dir.path())
}

// ─── -v / --version ───────────────────────────────────────────────────────────

#[test]
fn version_prints_banner_and_exits_zero() {
    for flag in ["-v", "--version"] {
        let (code, stdout, _) = run(&[flag]);
        assert_eq!(code, Some(0), "{flag} should exit 0");
        assert!(
            stdout.contains(concat!("rainmachine v", env!("CARGO_PKG_VERSION"))),
            "{flag} should print the version banner; got: {stdout}"
        );
        assert!(stdout.contains("Copyright"));
    }
}

#[test]
fn version_does_not_read_the_config() {
    // A config file that would be a fatal parse error anywhere else must not
    // get in the way of -v.
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rainmachine.toml"), "not valid toml ][[[").unwrap();

    let (code, stdout, _) = run_in(&["-v"], dir.path());
    assert_eq!(code, Some(0), "-v must not load the config file");
    assert!(stdout.contains("rainmachine v"));
}

// ─── --help / usage errors ────────────────────────────────────────────────────

#[test]
fn help_exits_zero() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, Some(0), "rainmachine --help should exit 0");
    assert!(
        stdout.contains("rainmachine"),
        "help text should mention the binary name"
    );
    assert!(
        stdout.contains("--backup") && stdout.contains("--restore"),
        "help text should list the mode flags"
    );
}

#[test]
fn unknown_flag_exits_nonzero() {
    let (code, _, _) = run(&["--this-flag-does-not-exist"]);
    assert_ne!(code, Some(0), "unknown flag should exit non-zero");
}

#[test]
fn backup_and_restore_together_are_rejected() {
    let (code, _, stderr) = run(&["--backup", "--restore"]);
    assert_ne!(code, Some(0), "-b and -r together should be a usage error");
    assert!(
        stderr.contains("cannot be used with"),
        "clap should explain the conflict; got: {stderr}"
    );
}

// ─── rainmachine init ─────────────────────────────────────────────────────────

#[test]
fn init_creates_rainmachine_toml() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_in(&["init"], dir.path());
    assert_eq!(code, Some(0), "rainmachine init should exit 0");

    let toml_path = dir.path().join("rainmachine.toml");
    assert!(toml_path.exists(), "rainmachine.toml should be created");

    let content = fs::read_to_string(&toml_path).unwrap();
    assert!(content.contains("[rainmachine]"));
}

#[test]
fn init_with_custom_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let custom = dir.path().join("custom.toml");
    let (code, _, _) = run_in(&["--config", custom.to_str().unwrap(), "init"], dir.path());
    assert_eq!(code, Some(0));
    assert!(custom.exists(), "custom.toml should be created");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("rainmachine.toml");
    fs::write(&toml_path, "# existing").unwrap();

    let (code, _, stderr) = run_in(&["init"], dir.path());
    assert_eq!(code, Some(1), "init should fail when the file already exists");

    // The original content must be untouched.
    assert_eq!(fs::read_to_string(&toml_path).unwrap(), "# existing");
    assert!(
        stderr.contains("refusing"),
        "error message should explain why init failed; got: {stderr}"
    );
}

#[test]
fn init_generated_config_loads_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    run_in(&["init"], dir.path());

    // The generated file must round-trip through the tool itself.
    let (code, _, _) = run_in(&["--print-config"], dir.path());
    assert_eq!(code, Some(0), "generated config must parse");
}

// ─── --print-config ───────────────────────────────────────────────────────────

#[test]
fn print_config_shows_file_values() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("rainmachine.toml"),
        r#"
[rainmachine]
host = "test-host-xyz"
"#,
    )
    .unwrap();

    let (code, stdout, _) = run_in(&["--print-config"], dir.path());
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("test-host-xyz"),
        "merged config should carry the file's host; got: {stdout}"
    );
}

#[test]
fn print_config_exits_zero_without_a_config_file() {
    let (code, _, _) = run(&["--print-config"]);
    assert_eq!(
        code,
        Some(0),
        "--print-config should exit 0 even without a config file"
    );
}

#[test]
fn print_config_fails_on_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rainmachine.toml"), "not valid toml ][[[").unwrap();

    let (code, _, stderr) = run_in(&["--print-config"], dir.path());
    assert_eq!(code, Some(1), "invalid TOML is a fatal error");
    assert!(
        stderr.contains("parsing"),
        "error should point at the parse failure; got: {stderr}"
    );
}

// ─── missing required settings ────────────────────────────────────────────────

#[test]
fn missing_key_exits_one_and_names_the_key() {
    // host comes from the command line, user and pass from nowhere.
    let (code, _, stderr) = run(&["--backup", "--host", "rainmachine.local"]);
    assert_eq!(code, Some(1), "missing required setting must exit 1");
    assert!(
        stderr.contains("missing configuration setting"),
        "stderr should carry the fatal message; got: {stderr}"
    );
    assert!(
        stderr.contains("user"),
        "the missing key should be named; got: {stderr}"
    );
}

#[test]
fn config_file_satisfies_required_keys_for_restore() {
    // All three connection settings come from the file; the mode still fails
    // later because the backup file does not exist — proving resolution
    // succeeded and the run got past it.
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("rainmachine.toml"),
        r#"
[rainmachine]
host = "rainmachine.local"
user = "admin"
pass = "secret"
"#,
    )
    .unwrap();

    let (code, _, stderr) = run_in(&["--restore", "-f", "no-such-backup.json"], dir.path());
    assert_eq!(code, Some(1));
    assert!(
        !stderr.contains("missing configuration setting"),
        "all keys were present; got: {stderr}"
    );
    assert!(
        stderr.contains("no-such-backup.json") && stderr.contains("not found"),
        "restore should report the absent backup file; got: {stderr}"
    );
}
