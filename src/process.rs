//! Best-effort detection of whether this process was started by the
//! `master-mold` dispatcher.

use std::fmt;
use std::path::Path;

pub const DISPATCHER_NAME: &str = "master-mold";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Dispatcher,
    Standalone,
    /// The parent could not be inspected on this platform.
    Unknown,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Dispatcher => write!(f, "Running as a subcommand of {}", DISPATCHER_NAME),
            Invocation::Standalone => write!(f, "Running as a standalone command"),
            Invocation::Unknown => write!(f, "Could not determine how this command was started"),
        }
    }
}

/// Classifies a parent process name (as reported by the OS).
pub fn classify_parent(parent_name: &str) -> Invocation {
    let trimmed = parent_name.trim();
    if trimmed.is_empty() {
        return Invocation::Unknown;
    }
    let base = Path::new(trimmed)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if base == DISPATCHER_NAME {
        Invocation::Dispatcher
    } else {
        Invocation::Standalone
    }
}

pub fn detect_invocation() -> Invocation {
    match parent_name() {
        Some(name) => classify_parent(&name),
        None => Invocation::Unknown,
    }
}

#[cfg(unix)]
fn parent_name() -> Option<String> {
    use log::debug;
    use std::fs;
    use std::process::Command;

    let ppid = std::os::unix::process::parent_id();

    if let Ok(comm) = fs::read_to_string(format!("/proc/{}/comm", ppid)) {
        return Some(comm);
    }

    let ps = which::which("ps").ok()?;
    let output = Command::new(ps)
        .args(["-o", "comm=", "-p", &ppid.to_string()])
        .output()
        .map_err(|e| debug!("ps failed: {}", e))
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(not(unix))]
fn parent_name() -> Option<String> {
    None
}
