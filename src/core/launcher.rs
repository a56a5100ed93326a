use crate::error::{BinwrapError, Result};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// Exit status of a child that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    pub code: i32,
}

impl From<ExitStatus> for ProcessResult {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self { code };
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self { code: 128 + signal };
            }
        }

        Self { code: 1 }
    }
}

pub struct Launcher {
    install_dir: PathBuf,
    working_dir: PathBuf,
}

impl Launcher {
    pub fn new(install_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn binary_path(&self, name: &str) -> PathBuf {
        self.install_dir.join(name)
    }

    /// Run `install_dir/name` with `args`, sharing this process's stdio, and
    /// wait for it to exit.
    pub fn launch<I, S>(&self, name: &str, args: I) -> Result<ProcessResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let path = self.binary_path(name);
        tracing::debug!(binary = %path.display(), cwd = %self.working_dir.display(), "launching");

        let status = Command::new(&path)
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| BinwrapError::Spawn {
                path: path.clone(),
                source,
            })?;

        let result = ProcessResult::from(status);
        tracing::debug!(code = result.code, "child exited");
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_propagates_exit_code() {
        let install = tempfile::tempdir().unwrap();
        write_script(install.path(), "tool", "exit 7");

        let launcher = Launcher::new(install.path(), install.path());
        let result = launcher.launch("tool", Vec::<String>::new()).unwrap();

        assert_eq!(result, ProcessResult { code: 7 });
    }

    #[test]
    fn test_forwards_arguments_verbatim() {
        let install = tempfile::tempdir().unwrap();
        let out = install.path().join("args.txt");
        write_script(
            install.path(),
            "tool",
            &format!("printf '%s\\n' \"$@\" > '{}'", out.display()),
        );

        let launcher = Launcher::new(install.path(), install.path());
        let result = launcher
            .launch("tool", ["--flag", "two words", ""])
            .unwrap();

        assert_eq!(result.code, 0);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "--flag\ntwo words\n\n");
    }

    #[test]
    fn test_runs_in_caller_working_dir() {
        let install = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write_script(install.path(), "tool", "pwd > where.txt");

        let launcher = Launcher::new(install.path(), cwd.path());
        launcher.launch("tool", Vec::<String>::new()).unwrap();

        assert!(cwd.path().join("where.txt").exists());
        assert!(!install.path().join("where.txt").exists());
    }

    #[test]
    fn test_signal_maps_to_128_plus_signal() {
        let install = tempfile::tempdir().unwrap();
        write_script(install.path(), "tool", "kill -9 $$");

        let launcher = Launcher::new(install.path(), install.path());
        let result = launcher.launch("tool", Vec::<String>::new()).unwrap();

        assert_eq!(result.code, 128 + 9);
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let install = tempfile::tempdir().unwrap();
        let launcher = Launcher::new(install.path(), install.path());

        let err = launcher.launch("tool", Vec::<String>::new()).unwrap_err();
        match err {
            BinwrapError::Spawn { path, .. } => assert_eq!(path, install.path().join("tool")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_executable_is_spawn_error() {
        let install = tempfile::tempdir().unwrap();
        std::fs::write(install.path().join("tool"), "not a program").unwrap();
        std::fs::set_permissions(
            install.path().join("tool"),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();

        let launcher = Launcher::new(install.path(), install.path());
        let err = launcher.launch("tool", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, BinwrapError::Spawn { .. }));
    }
}
