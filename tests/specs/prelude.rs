//! Shared helpers for behavioral specs.
//!
//! Each test gets its own temp directory. Commands run the `tunnel` binary
//! from inside it and return an assertion wrapper over the captured output.

#![allow(dead_code)]

use std::path::Path;
use std::process::Output;

/// Traffic that finishes in a few milliseconds
pub const QUICK_TRAFFIC: &str = r#"
[traffic]
north_cars = 3
south_cars = 3
pedestrians = 2
car_spacing = "1ms"
pedestrian_spacing = "2ms"
car_transit = ["2ms"]
pedestrian_transit = ["4ms"]
seed = 1
"#;

pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn tunnel(&self) -> CliBuilder {
        CliBuilder::new(self.path())
    }
}

pub fn cli() -> CliBuilder {
    CliBuilder::new(&std::env::temp_dir())
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    #[allow(deprecated)]
    fn new(dir: &Path) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("tunnel").unwrap();
        cmd.current_dir(dir).env_remove("RUST_LOG");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}",
            run.stdout()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout lacks {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr lacks {needle:?}:\n{stderr}");
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}
