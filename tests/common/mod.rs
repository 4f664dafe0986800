//! Shared testing utilities for clawdeploy CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `clawdeploy` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("clawdeploy").expect("Failed to locate clawdeploy binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Path to the generated `deploy_<app>` directory.
    pub fn deploy_dir(&self, app: &str) -> PathBuf {
        self.work_dir.join(format!("deploy_{}", app))
    }

    /// Read a generated file.
    pub fn read_output(&self, app: &str, file: &str) -> String {
        fs::read_to_string(self.deploy_dir(app).join(file))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", file, e))
    }

    /// Sorted names of the entries in `deploy_<app>/`.
    pub fn output_entries(&self, app: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.deploy_dir(app))
            .expect("deploy dir should exist")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Write a file into `templates/` in the work directory.
    pub fn write_template(&self, name: &str, content: &str) {
        let dir = self.work_dir.join("templates");
        fs::create_dir_all(&dir).expect("Failed to create templates dir");
        fs::write(dir.join(name), content).expect("Failed to write template");
    }

    /// Create a `skills/` library in the work directory with one skill file.
    pub fn write_skills_library(&self) {
        let dir = self.work_dir.join("skills").join("web-search");
        fs::create_dir_all(&dir).expect("Failed to create skills dir");
        fs::write(dir.join("SKILL.md"), "# Web search\n").expect("Failed to write skill");
    }

    /// Assert that a generated file has its executable bit set.
    pub fn assert_executable(&self, app: &str, file: &str) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(self.deploy_dir(app).join(file))
                .expect("file should exist")
                .permissions()
                .mode();
            assert!(mode & 0o111 != 0, "{} should be executable", file);
        }
    }

    /// Path to the temp root (outside the work directory).
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
