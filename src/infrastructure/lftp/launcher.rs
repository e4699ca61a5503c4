//! Host launcher for the mirror tool
//!
//! lftp has no native Windows build, so there it runs through `wsl`.

use std::process::Stdio;

use tokio::process::Command;

/// Program (and optional shim) used to run command scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    shim: Option<String>,
    program: String,
}

impl Launcher {
    /// Launcher appropriate for the current host
    pub fn for_host(program: impl Into<String>) -> Self {
        if cfg!(windows) {
            Self::through("wsl", program)
        } else {
            Self::direct(program)
        }
    }

    pub fn direct(program: impl Into<String>) -> Self {
        Self {
            shim: None,
            program: program.into(),
        }
    }

    pub fn through(shim: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            shim: Some(shim.into()),
            program: program.into(),
        }
    }

    /// Executable actually spawned
    pub fn executable(&self) -> &str {
        self.shim.as_deref().unwrap_or(&self.program)
    }

    /// Arguments for running `script`
    pub fn args(&self, script: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if self.shim.is_some() {
            args.push(self.program.clone());
        }
        args.push("-c".to_string());
        args.push(script.to_string());
        args
    }

    /// Command with stdin closed and both output streams piped
    pub fn command(&self, script: &str) -> Command {
        let mut cmd = Command::new(self.executable());
        cmd.args(self.args(script))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_launcher_runs_program() {
        let launcher = Launcher::direct("lftp");
        assert_eq!(launcher.executable(), "lftp");
        assert_eq!(launcher.args("open h; bye"), vec!["-c", "open h; bye"]);
    }

    #[test]
    fn shim_launcher_prepends_program() {
        let launcher = Launcher::through("wsl", "lftp");
        assert_eq!(launcher.executable(), "wsl");
        assert_eq!(launcher.args("bye"), vec!["lftp", "-c", "bye"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn host_launcher_is_direct_off_windows() {
        assert_eq!(Launcher::for_host("lftp"), Launcher::direct("lftp"));
    }
}
