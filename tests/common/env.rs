//! Test environment builder for isolated Spellcaster testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Spellcaster CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }

    /// Values of `field` on every event named `event`
    pub fn event_field(&self, event: &str, field: &str) -> Vec<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .filter(|v| v["event"] == event)
            .map(|v| v[field].clone())
            .collect()
    }
}

/// Isolated project directory with the binary wired up
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run spellcaster from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run spellcaster from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("SPELLCASTER_LOG")
            .env_remove("SPELLCASTER_TARGETS")
            .env_remove("SPELLCASTER_CONCURRENCY")
            .env_remove("SPELLCASTER_BATCH_SIZE")
            .env_remove("SPELLCASTER_STOP_ON_ERROR")
            .env_remove("SPELLCASTER_COPY_FROM_SOURCE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute spellcaster");
        output_to_result(output)
    }

    /// Read a project file, panicking with the path on failure
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Write a file to the project directory
    pub fn write(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.project_path(relative)).expect("Failed to remove file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
    config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            dirs: Vec::new(),
            config: None,
        }
    }

    /// Add a file (source or prebuilt output) relative to the project root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Add an empty directory relative to the project root
    pub fn with_dir(mut self, relative: &str) -> Self {
        self.dirs.push(relative.to_string());
        self
    }

    /// Write `spellcaster.toml`
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create temp dir");
        let root = project_root.path();

        // Anchors project root discovery at the temp dir.
        write_file(&root.join("package.json"), "{}\n");

        if let Some(config) = &self.config {
            write_file(&root.join("spellcaster.toml"), config);
        }
        for dir in &self.dirs {
            std::fs::create_dir_all(root.join(dir)).expect("Failed to create directory");
        }
        for (relative, content) in &self.files {
            write_file(&root.join(relative), content);
        }

        TestEnv {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_spellcaster")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
