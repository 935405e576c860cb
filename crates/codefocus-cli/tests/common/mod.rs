//! Common utilities for CLI E2E tests.

#![allow(dead_code)]

use std::process::Command;

use tempfile::TempDir;

/// A CLI sandbox with its own data directory.
pub struct Cli {
    dir: TempDir,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Invoke a CLI command and return (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_codefocus"))
            .args(args)
            .env("CODEFOCUS_DATA_DIR", self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (stdout, stderr, code)
    }

    /// Invoke a CLI command and expect success.
    pub fn success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        if code != 0 && !stderr.is_empty() {
            eprintln!("CLI error output: {}", stderr);
        }
        assert_eq!(code, 0, "CLI command failed with code {}: {:?}", code, args);
        stdout
    }

    /// Invoke a CLI command, expect success, and parse stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.success(args);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }

    /// Invoke a CLI command and expect failure; returns stderr.
    pub fn failure(&self, args: &[&str]) -> String {
        let (_, stderr, code) = self.run(args);
        assert_eq!(code, 1, "CLI command did not fail with code 1: {:?}", args);
        stderr
    }
}
