//! Test environment for driving the kirby-deploy binary.
//!
//! Every run gets its own project directory and config home, and the
//! `KIRBY_DEPLOY_*` variables of the outer environment are cleared.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "KIRBY_DEPLOY_HOST",
    "KIRBY_DEPLOY_USER",
    "KIRBY_DEPLOY_PASSWORD",
    "KIRBY_DEPLOY_URL",
    "KIRBY_DEPLOY_TOKEN",
    "KIRBY_DEPLOY_LFTP",
    "KIRBY_DEPLOY_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_kirby-deploy")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write("kirby-deploy.toml", content)
    }

    /// Write an executable shell script standing in for lftp.
    #[cfg(unix)]
    pub fn fake_lftp(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.home_dir.path().join("fake-lftp");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut command = Command::new(&self.bin);
        command
            .args(args)
            .current_dir(cwd)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TERM", "xterm-256color")
            .env("LANG", "C.UTF-8")
            .env("NO_COLOR", "1");
        for key in ENV_VARS {
            command.env_remove(key);
        }
        for (key, value) in env {
            command.env(key, value);
        }

        let output = command.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Minimal valid config without webhooks
pub fn basic_config(extra: &str) -> String {
    format!(
        "host = \"ftp.example.com\"\n\
         user = \"alice\"\n\
         password = \"secretpw\"\n\
         remote_dir = \"www\"\n\
         call_webhooks = false\n\
         check_composer_lock = false\n\
         {extra}\n"
    )
}
