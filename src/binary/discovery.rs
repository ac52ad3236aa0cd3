use super::{has_valid_prefix, is_executable, SearchPath};
use crate::error::MoldError;
use log::debug;
use std::fs;
use std::path::{self, Path, PathBuf};

/// Lists every prefixed executable directly inside `dir`, sorted by file
/// name. A directory that does not exist yields nothing.
pub fn find_in_directory(dir: &Path) -> Result<Vec<PathBuf>, MoldError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| MoldError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut binaries = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !has_valid_prefix(name) {
            continue;
        }

        let full_path = dir.join(name);
        // Follows symlinks, so a link to an executable counts.
        if is_executable(&full_path) {
            binaries.push(path::absolute(&full_path).unwrap_or(full_path));
        }
    }
    binaries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(binaries)
}

/// Scans every search-path directory; unreadable ones are skipped.
pub fn find_in_path(search_path: &SearchPath) -> Vec<PathBuf> {
    let mut all = Vec::new();
    for dir in search_path.dirs() {
        match find_in_directory(dir) {
            Ok(found) => all.extend(found),
            Err(e) => debug!("Skipping {}: {}", dir.display(), e),
        }
    }
    all
}

/// Fallback-directory binaries first, then search-path binaries. The
/// fallback directory is created when missing. Duplicate command names are
/// kept; [`crate::display::process_binaries`] resolves them.
pub fn find_all(
    fallback_dir: &Path,
    search_path: &SearchPath,
) -> Result<Vec<PathBuf>, MoldError> {
    if !fallback_dir.exists() {
        fs::create_dir_all(fallback_dir).map_err(|source| MoldError::DirectoryCreation {
            path: fallback_dir.to_path_buf(),
            source,
        })?;
        debug!("Created {}", fallback_dir.display());
    }

    let mut binaries = find_in_directory(fallback_dir)?;
    binaries.extend(find_in_path(search_path));
    Ok(binaries)
}
