use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const GO_MIT_MAPPING: &str = r#"{
    "software": { "extensions": [".go"], "licenses": ["MIT"] },
    "documentation": { "extensions": [".md"], "licenses": ["CC-BY-4.0"] },
    "multimedia": { "extensions": [], "licenses": [] },
    "data_sets_and_models": { "extensions": [], "licenses": [] }
}"#;

/// A working directory holding config files plus a `repo/` tree to audit.
pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_file-license-auditor").to_string();
        fs::create_dir(dir.path().join("repo")).expect("Failed to create repo dir");

        Self { dir, binary_path }
    }

    pub fn with_mapping(self, mapping: &str) -> Self {
        self.write("mapping.json", mapping);
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn repo(&self) -> PathBuf {
        self.dir.path().join("repo")
    }

    /// Write a file relative to the working directory
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent dir");
        fs::write(path, content).expect("Failed to write file");
    }

    /// Create files inside the audited tree
    pub fn repo_files(&self, files: &[&str]) {
        for file in files {
            self.write(&format!("repo/{}", file), "content");
        }
    }

    pub fn run_auditor(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run file-license-auditor")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
