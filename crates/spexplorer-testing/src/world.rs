//! TestWorld pattern for CLI integration tests.
//!
//! Provides:
//! - An isolated data directory (config + log file land there)
//! - Fixture documents written to disk
//! - Command configuration that never picks up the developer's own
//!   token or data directory

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ISOLATED_ENV_VARS: [&str; 3] = ["SPEXPLORER_ACCESS_TOKEN", "SPEXPLORER_PATH", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use spexplorer_testing::{TestWorld, entries};
///
/// let world = TestWorld::new().with_fixture("lists.json", &entries::tasks_document());
/// let mut cmd = assert_cmd::Command::new("spexplorer");
/// world.configure_command(&mut cmd).args(["--fixture", "lists.json", "lists"]);
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: Vec<(String, String)>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".spexplorer");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: Vec::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Write a bulk wire document relative to the temp root.
    pub fn with_fixture(self, name: &str, document: &Value) -> Self {
        self.write_fixture(name, document)
            .expect("Failed to write fixture");
        self
    }

    pub fn write_fixture(&self, name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(document)?)?;
        Ok(path)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Points the command at this world's data directory and working
    /// directory, strips inherited spexplorer variables, then applies
    /// explicitly set ones.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for key in ISOLATED_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
