pub mod discovery;
pub mod locator;
pub mod search_path;

use std::fs;
use std::path::Path;

pub use discovery::{find_all, find_in_directory, find_in_path};
pub use locator::find_executable;
pub use search_path::SearchPath;

/// Short prefix for subcommand binaries.
pub const MM_PREFIX: &str = "mm-";
/// Long prefix for subcommand binaries.
pub const MASTER_MOLD_PREFIX: &str = "master-mold-";

/// Recognized prefixes, in the order they are tried.
pub const VALID_PREFIXES: [&str; 2] = [MM_PREFIX, MASTER_MOLD_PREFIX];

pub fn has_valid_prefix(filename: &str) -> bool {
    VALID_PREFIXES.iter().any(|p| filename.starts_with(p))
}

/// Derives the logical command name from a binary path: the file name with
/// the first matching prefix stripped, or the file name unchanged.
pub fn extract_command_name(binary_path: &Path) -> String {
    let file_name = binary_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    VALID_PREFIXES
        .iter()
        .find_map(|p| file_name.strip_prefix(p))
        .map(str::to_string)
        .unwrap_or(file_name)
}

/// Candidate file names for a command, one per prefix.
pub fn candidate_names(command: &str) -> Vec<String> {
    VALID_PREFIXES
        .iter()
        .map(|p| format!("{}{}", p, command))
        .collect()
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

// No execute bit to inspect: an existing regular file counts.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
