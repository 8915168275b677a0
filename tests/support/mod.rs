use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const DATA_FILE: &str = "task_database.csv";

/// Scratch working directory for one test; the binary resolves its backing
/// file relative to the cwd.
pub struct TaskDir {
    dir: TempDir,
}

impl TaskDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join(DATA_FILE)
    }

    pub fn read_db(&self) -> String {
        fs::read_to_string(self.data_file()).expect("backing file should exist")
    }

    pub fn write_db(&self, contents: &str) {
        fs::write(self.data_file(), contents).expect("failed to seed backing file");
    }
}

pub fn task_cmd(dir: &TaskDir) -> Command {
    let mut cmd = Command::cargo_bin("task").expect("binary");
    cmd.current_dir(dir.path());
    cmd
}
