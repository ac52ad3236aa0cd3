use super::{candidate_names, is_executable, SearchPath};
use crate::error::MoldError;
use crate::utils::expand_env_vars;
use log::debug;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resolves `command` to one executable: every prefix is tried across the
/// whole search-path first, then inside `fallback_dir` (after env expansion).
pub fn find_executable(
    command: &str,
    fallback_dir: &str,
    search_path: &SearchPath,
) -> Result<PathBuf, MoldError> {
    let candidates = candidate_names(command);

    if let Some(found) = find_on_search_path(&candidates, search_path) {
        debug!("Resolved '{}' on the search path: {}", command, found.display());
        return Ok(found);
    }

    let base = PathBuf::from(expand_env_vars(fallback_dir));
    if let Some(found) = find_in_fallback(&candidates, &base)? {
        debug!("Resolved '{}' in {}: {}", command, base.display(), found.display());
        return Ok(found);
    }

    Err(MoldError::CommandNotFound {
        name: command.to_string(),
    })
}

fn find_on_search_path(candidates: &[String], search_path: &SearchPath) -> Option<PathBuf> {
    if search_path.is_empty() {
        return None;
    }
    let paths = search_path.to_os_string();
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    candidates
        .iter()
        .find_map(|name| which::which_in(name, Some(&paths), &cwd).ok())
}

/// Tries every candidate in order. A stat failure only surfaces when no
/// later candidate resolves.
fn find_in_fallback(candidates: &[String], base: &Path) -> Result<Option<PathBuf>, MoldError> {
    let mut first_error = None;
    for name in candidates {
        let full_path = base.join(name);
        match fs::metadata(&full_path) {
            Ok(_) if is_executable(&full_path) => return Ok(Some(full_path)),
            Ok(_) => debug!("Skipping non-executable {}", full_path.display()),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {}
            Err(e) => {
                debug!("Cannot stat {}: {}", full_path.display(), e);
                if first_error.is_none() {
                    first_error = Some(MoldError::ExecutableResolution {
                        path: full_path,
                        source: e,
                    });
                }
            }
        }
    }
    match first_error {
        Some(e) => Err(e),
        None => Ok(None),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    fn search_path(dirs: &[&TempDir]) -> SearchPath {
        dirs.iter().map(|d| d.path().to_path_buf()).collect()
    }

    fn fallback(dir: &TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_search_path_wins_over_fallback() {
        let on_path = TempDir::new().unwrap();
        let base = TempDir::new().unwrap();
        let expected = touch(on_path.path(), "mm-foo", 0o755);
        touch(base.path(), "mm-foo", 0o755);

        let found = find_executable("foo", &fallback(&base), &search_path(&[&on_path])).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_first_search_path_dir_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = touch(first.path(), "mm-foo", 0o755);
        touch(second.path(), "mm-foo", 0o755);

        let found =
            find_executable("foo", "/non-existent-dir", &search_path(&[&first, &second])).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_long_prefix_on_search_path() {
        let on_path = TempDir::new().unwrap();
        let expected = touch(on_path.path(), "master-mold-test3", 0o755);

        let found =
            find_executable("test3", "/non-existent-dir", &search_path(&[&on_path])).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_falls_back_to_base_dir() {
        let base = TempDir::new().unwrap();
        let expected = touch(base.path(), "master-mold-build", 0o755);

        let found = find_executable("build", &fallback(&base), &SearchPath::default()).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_short_prefix_preferred_in_base_dir() {
        let base = TempDir::new().unwrap();
        let expected = touch(base.path(), "mm-build", 0o755);
        touch(base.path(), "master-mold-build", 0o755);

        let found = find_executable("build", &fallback(&base), &SearchPath::default()).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_non_executable_is_not_found() {
        let base = TempDir::new().unwrap();
        touch(base.path(), "mm-bar", 0o644);

        let err = find_executable("bar", &fallback(&base), &search_path(&[&base])).unwrap_err();
        assert!(matches!(err, MoldError::CommandNotFound { ref name } if name == "bar"));
    }

    #[test]
    fn test_unknown_command_is_not_found() {
        let base = TempDir::new().unwrap();
        touch(base.path(), "mm-test1", 0o755);

        let err = find_executable("non-existent", &fallback(&base), &search_path(&[&base]))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unreadable_candidate_does_not_hide_the_next_one() {
        let base = TempDir::new().unwrap();
        std::os::unix::fs::symlink(base.path().join("mm-foo"), base.path().join("mm-foo"))
            .unwrap();
        let expected = touch(base.path(), "master-mold-foo", 0o755);

        let found = find_executable("foo", &fallback(&base), &SearchPath::default()).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_unresolvable_candidate_is_reported() {
        let base = TempDir::new().unwrap();
        let looped = base.path().join("mm-foo");
        std::os::unix::fs::symlink(&looped, &looped).unwrap();

        let err = find_executable("foo", &fallback(&base), &SearchPath::default()).unwrap_err();
        assert!(matches!(err, MoldError::ExecutableResolution { ref path, .. } if *path == looped));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_unprefixed_binary_is_ignored() {
        let base = TempDir::new().unwrap();
        touch(base.path(), "test4", 0o755);

        let err = find_executable("test4", &fallback(&base), &search_path(&[&base])).unwrap_err();
        assert!(err.is_not_found());
    }
}
