// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the specs.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Short grace period so specs that do not exercise timing stay fast.
pub const FAST_GRACE: &str = "50";

/// Scratch directory holding scripts and config files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// `jsr` running inside this project directory.
    pub fn jsr(&self) -> CliBuilder {
        cli().current_dir(self.path())
    }
}

/// `jsr` with colors off and no inherited configuration.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), stdin: None, env: Vec::new(), cwd: None }
}

pub struct CliBuilder {
    args: Vec<String>,
    stdin: Option<String>,
    env: Vec<(String, String)>,
    cwd: Option<PathBuf>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Inline script with the fast grace period.
    pub fn eval(self, code: &str) -> Self {
        self.args(&["--grace-ms", FAST_GRACE, "--eval", code])
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    fn output(self) -> Output {
        let mut cmd = assert_cmd::Command::cargo_bin("jsr").expect("jsr binary");
        cmd.args(&self.args)
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("JSR_LOG")
            .env_remove("JSR_GRACE_MS")
            .env_remove("JSR_RUN_TIMEOUT_MS");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.output().expect("run jsr")
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let args = self.args.join(" ");
        let output = self.output();
        let run = RunAssert { output };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "jsr {args}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            run.stdout(),
            run.stderr()
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

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(expected), "expected stdout to contain {expected:?}\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(unexpected), "expected stdout to lack {unexpected:?}\n{stdout}");
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(expected), "expected stderr to contain {expected:?}\n{stderr}");
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout is JSON")
    }
}
