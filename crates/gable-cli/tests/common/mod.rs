//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the CLI with an isolated home directory and panel base URL.
///
/// `HOME` and `XDG_DATA_HOME` point into the temp dir so session state
/// never leaks between tests or into the real user profile.
pub fn run_gable(args: &[&str], home: &Path, base: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gable"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("GABLE_BASE", base);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_gable_success(args: &[&str], home: &Path, base: &str) -> String {
    let output = run_gable(args, home, base);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Where the session file lands under an isolated home.
pub fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("gable").join("session.json")
}

/// Seed a stored session, as a previous login would have left it.
pub fn seed_session(home: &Path, access: &str, refresh: Option<&str>) {
    let path = session_file(home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let stored = serde_json::json!({
        "accessToken": access,
        "refreshToken": refresh,
        "savedAt": "2026-08-01T00:00:00Z"
    });
    fs::write(&path, serde_json::to_string_pretty(&stored).unwrap()).unwrap();
}
