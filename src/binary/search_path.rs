use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The ordered directories of the search-path, earliest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Splits the inherited `PATH` on the platform list separator.
    pub fn from_env() -> Self {
        let dirs = env::var_os("PATH")
            .map(|raw| env::split_paths(&raw).collect())
            .unwrap_or_default();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Joins the directories back into a `PATH`-style value. Entries that
    /// contain the separator cannot be represented and are dropped.
    pub fn to_os_string(&self) -> OsString {
        env::join_paths(&self.dirs).unwrap_or_else(|_| {
            let usable: Vec<&Path> = self
                .dirs
                .iter()
                .map(PathBuf::as_path)
                .filter(|d| env::join_paths([d]).is_ok())
                .collect();
            env::join_paths(usable).unwrap_or_default()
        })
    }
}

impl FromIterator<PathBuf> for SearchPath {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_value_preserves_order() {
        let path: SearchPath = ["/usr/local/bin", "/usr/bin"].iter().map(PathBuf::from).collect();
        let joined = path.to_os_string();
        let split: Vec<PathBuf> = env::split_paths(&joined).collect();
        assert_eq!(split, path.dirs());
    }

    #[test]
    fn test_empty_search_path() {
        let path = SearchPath::default();
        assert!(path.is_empty());
        assert!(path.to_os_string().is_empty());
    }
}
