//! Test environment for isolated descsync runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a descsync CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}):\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: a working directory holding the store, catalogs
/// and an optional `descsync.toml`, with HOME and XDG dirs pointed inside it.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_descsync")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn store_path(&self) -> PathBuf {
        self.path("store")
    }

    /// Write a catalog document and return its `file://` locator.
    pub fn write_catalog(&self, name: &str, body: &str) -> String {
        let path = self.path(&format!("catalogs/{}", name));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        file_url(&path)
    }

    pub fn write_config(&self, body: &str) {
        fs::write(self.path("descsync.toml"), body).unwrap();
    }

    /// Run descsync with the isolated store.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let home = self.path("home");
        fs::create_dir_all(&home).unwrap();

        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("XDG_DATA_HOME", home.join(".local/share"))
            .env("DESCSYNC_STORE_PATH", self.store_path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
