//! Integration tests for binsig-cli.
//!
//! Every test points `--config` at a temporary file so the user's own
//! settings never leak into the results.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Helper to get the path to the `binsig` binary built by cargo.
fn binsig_bin(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_binsig"));
    cmd.arg("--config").arg(config);
    cmd
}

fn run(config: &Path, args: &[&str]) -> Output {
    binsig_bin(config)
        .args(args)
        .output()
        .expect("failed to run binsig")
}

fn stdout_of(config: &Path, args: &[&str]) -> String {
    let output = run(config, args);
    assert!(
        output.status.success(),
        "binsig {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn settings_in(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("settings.toml")
}

// ---------------------------------------------------------------------------
// Edits
// ---------------------------------------------------------------------------

#[test]
fn cli_show_chart() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(&settings_in(&dir), &["show", "10011100", "-o", "chart"]);
    assert_eq!(out, "'\\../'''\\..\n");
}

#[test]
fn cli_show_default_outputs_are_labelled() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(&settings_in(&dir), &["show", "100"]);
    assert_eq!(out, "bits: 100\nchart: '\\..\n");
}

#[test]
fn cli_repeat_append_invert() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    assert_eq!(
        stdout_of(&config, &["repeat", "10", "3", "-o", "bits"]),
        "101010\n"
    );
    assert_eq!(
        stdout_of(&config, &["append", "10", "@strobe", "0", "-o", "bits"]),
        "10100000000\n"
    );
    assert_eq!(
        stdout_of(&config, &["invert", "1100", "-o", "bits"]),
        "0011\n"
    );
}

#[test]
fn cli_insert_and_remove() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    assert_eq!(
        stdout_of(&config, &["insert", "10011100", "11", "--at", "2", "-o", "bits"]),
        "1011011100\n"
    );
    assert_eq!(
        stdout_of(
            &config,
            &["remove", "10011100", "--at", "2", "--duration", "3", "-o", "bits"]
        ),
        "10100\n"
    );
}

#[test]
fn cli_level_query() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    assert_eq!(stdout_of(&config, &["level", "10011100", "3"]), "1\n");
    assert_eq!(stdout_of(&config, &["level", "10011100", "7"]), "0\n");
    assert!(!run(&config, &["level", "10011100", "8"]).status.success());
}

#[test]
fn cli_input_formats() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    assert_eq!(
        stdout_of(&config, &["-f", "number", "show", "1:3", "-o", "bits"]),
        "111\n"
    );
    assert_eq!(
        stdout_of(&config, &["-f", "levels", "show", "1,0,1", "-o", "intervals"]),
        "1 1\n0 1\n1 1\n"
    );
}

#[test]
fn cli_reads_signal_from_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = binsig_bin(&settings_in(&dir))
        .args(["show", "-", "-o", "bits"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binsig");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0110\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0110\n");
}

// ---------------------------------------------------------------------------
// Rejected input
// ---------------------------------------------------------------------------

#[test]
fn cli_rejects_invalid_bits() {
    let dir = TempDir::new().unwrap();
    let output = run(&settings_in(&dir), &["show", "10201"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid argument"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_out_of_range_edits() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    assert!(!run(&config, &["insert", "1001", "1", "--at", "5"]).status.success());
    assert!(
        !run(&config, &["remove", "1001", "--at", "2", "--duration", "3"])
            .status
            .success()
    );
    assert!(!run(&config, &["insert", "1001", "1", "--at", "-1"]).status.success());
    assert!(!run(&config, &["repeat", "1001", "0"]).status.success());
}

#[test]
fn cli_unknown_pattern_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(&settings_in(&dir), &["show", "@nope"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}

// ---------------------------------------------------------------------------
// Patterns and settings
// ---------------------------------------------------------------------------

#[test]
fn cli_patterns_lists_factory_and_user() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    std::fs::write(
        &config,
        "[[patterns]]\nname = \"gap\"\nbits = \"000\"\ndescription = \"short low gap\"\n",
    )
    .unwrap();

    let out = stdout_of(&config, &["patterns"]);
    assert!(out.contains("Factory Patterns"));
    assert!(out.contains("clock"));
    assert!(out.contains("preamble"));
    assert!(out.contains("User Patterns"));
    assert!(out.contains("short low gap"));

    assert_eq!(
        stdout_of(&config, &["append", "@clock", "@gap", "-o", "bits"]),
        "10101010000\n"
    );
}

#[test]
fn cli_patterns_detail() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(&settings_in(&dir), &["patterns", "sync"]);
    assert!(out.contains("sync"));
    assert!(out.contains("Duration:  12"));
    assert!(out.contains("Intervals: 3"));
    assert!(out.contains("bits: 111100001111"));
}

#[test]
fn cli_config_init_show_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("settings.toml");

    let out = stdout_of(&config, &["config", "init"]);
    assert!(out.contains("Wrote"));
    assert!(config.exists());

    // refuses to clobber without --force
    assert!(!run(&config, &["config", "init"]).status.success());
    assert!(run(&config, &["config", "init", "--force"]).status.success());

    let shown = stdout_of(&config, &["config", "show", "-o", "intervals"]);
    assert!(shown.contains("intervals"), "shown: {shown}");

    let path = stdout_of(&config, &["config", "path"]);
    assert_eq!(path.trim(), config.display().to_string());
}

#[test]
fn cli_config_init_replaces_broken_settings() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    std::fs::write(&config, "input = \"hex\"\n").unwrap();

    // edits and `config show` need the parsed file
    assert!(!run(&config, &["show", "10"]).status.success());
    assert!(!run(&config, &["config", "show"]).status.success());

    let path = stdout_of(&config, &["config", "path"]);
    assert_eq!(path.trim(), config.display().to_string());

    assert!(stdout_of(&config, &["config", "init", "--force"]).contains("Wrote"));
    assert!(stdout_of(&config, &["config", "show"]).contains("input = \"bits\""));
    assert_eq!(stdout_of(&config, &["show", "10", "-o", "bits"]), "10\n");
}

#[test]
fn cli_settings_output_applies() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    std::fs::write(&config, "output = [\"intervals\"]\n").unwrap();
    assert_eq!(stdout_of(&config, &["show", "1100"]), "1 2\n0 2\n");
}

#[test]
fn cli_config_check_flags_bad_pattern() {
    let dir = TempDir::new().unwrap();
    let config = settings_in(&dir);
    std::fs::write(&config, "[[patterns]]\nname = \"bad\"\nbits = \"12\"\n").unwrap();
    assert!(!run(&config, &["config", "check"]).status.success());

    std::fs::write(&config, "[[patterns]]\nname = \"ok\"\nbits = \"10\"\n").unwrap();
    assert!(stdout_of(&config, &["config", "check"]).contains("1 user pattern(s) OK"));
}
