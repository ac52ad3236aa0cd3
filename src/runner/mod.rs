pub mod signals;

use crate::error::MoldError;
use crate::utils::command_line;
use log::{debug, info, warn};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

pub use signals::ignore_interrupts;

/// Launches resolved subcommand binaries with the parent's standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    timeout: Option<Duration>,
}

impl Runner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Runs `path` to completion. Only a zero exit status is success.
    pub fn execute(&self, path: &Path, args: &[String]) -> Result<(), MoldError> {
        info!("Executing: {}", command_line(path, args));

        let mut child = Command::new(path)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| MoldError::Launch {
                path: path.to_path_buf(),
                source,
            })?;

        let status = match self.timeout {
            Some(limit) => wait_with_timeout(&mut child, path, limit)?,
            None => child.wait().map_err(|source| MoldError::Wait {
                path: path.to_path_buf(),
                source,
            })?,
        };

        if status.success() {
            debug!("{} exited successfully", path.display());
            Ok(())
        } else {
            Err(MoldError::ChildExit {
                path: path.to_path_buf(),
                code: status.code(),
            })
        }
    }
}

fn wait_with_timeout(
    child: &mut Child,
    path: &Path,
    limit: Duration,
) -> Result<ExitStatus, MoldError> {
    let waited = child.wait_timeout(limit).map_err(|source| MoldError::Wait {
        path: path.to_path_buf(),
        source,
    })?;

    match waited {
        Some(status) => Ok(status),
        None => {
            warn!("{} exceeded {:?}, killing it", path.display(), limit);
            if let Err(e) = child.kill() {
                debug!("kill failed: {}", e);
            }
            // Reap so no zombie outlives the dispatcher.
            let _ = child.wait();
            Err(MoldError::ChildTimeout {
                path: path.to_path_buf(),
                timeout: limit,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_zero_exit_is_success() {
        let dir = TempDir::new().unwrap();
        let path = script(&dir, "mm-ok", "echo ok");
        Runner::default().execute(&path, &[]).unwrap();
    }

    #[test]
    fn test_args_reach_the_child() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("args.txt");
        let path = script(&dir, "mm-args", &format!("echo \"$@\" > '{}'", out.display()));

        Runner::default()
            .execute(&path, &["one".to_string(), "two words".to_string()])
            .unwrap();
        assert_eq!(fs::read_to_string(out).unwrap().trim(), "one two words");
    }

    #[test]
    fn test_non_zero_exit_reports_code() {
        let dir = TempDir::new().unwrap();
        let path = script(&dir, "mm-fail", "exit 3");

        let err = Runner::default().execute(&path, &[]).unwrap_err();
        assert!(matches!(err, MoldError::ChildExit { code: Some(3), .. }));
        assert!(err.to_string().contains("exit code 3"));
    }

    #[test]
    fn test_missing_binary_is_launch_error() {
        let dir = TempDir::new().unwrap();
        let err = Runner::default()
            .execute(&dir.path().join("mm-missing"), &[])
            .unwrap_err();
        assert!(matches!(err, MoldError::Launch { .. }));
    }

    #[test]
    fn test_exec_format_error_is_launch_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mm-garbage");
        fs::write(&path, [0u8, 1, 2, 3]).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let err = Runner::default().execute(&path, &[]).unwrap_err();
        assert!(matches!(err, MoldError::Launch { .. }));
    }

    #[test]
    fn test_timeout_kills_child() {
        let dir = TempDir::new().unwrap();
        let path = script(&dir, "mm-slow", "exec sleep 5");

        let runner = Runner::new(Some(Duration::from_millis(200)));
        let err = runner.execute(&path, &[]).unwrap_err();
        assert!(matches!(err, MoldError::ChildTimeout { .. }));
    }

    #[test]
    fn test_fast_child_finishes_within_timeout() {
        let dir = TempDir::new().unwrap();
        let path = script(&dir, "mm-fast", "exit 0");

        Runner::new(Some(Duration::from_secs(10))).execute(&path, &[]).unwrap();
    }
}
