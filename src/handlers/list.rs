use crate::binary::{find_all, SearchPath};
use crate::display::print_binary_paths;
use crate::registry::Handler;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const LIST_BINARIES: &str = "list-binaries";

/// Prints every reachable subcommand binary, one line per command name.
pub struct ListBinariesHandler {
    base_dir: PathBuf,
    search_path: SearchPath,
}

impl ListBinariesHandler {
    pub fn new(base_dir: PathBuf, search_path: SearchPath) -> Self {
        Self {
            base_dir,
            search_path,
        }
    }
}

impl Handler for ListBinariesHandler {
    fn execute(&self, _args: &[String]) -> Result<()> {
        let binaries =
            find_all(&self.base_dir, &self.search_path).context("Failed to find binaries")?;
        print_binary_paths(&binaries).context("Failed to print binaries")?;
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_creates_missing_base_dir() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join(".master-mold");

        ListBinariesHandler::new(base.clone(), SearchPath::default())
            .execute(&[])
            .unwrap();
        assert!(base.is_dir());
    }

    #[test]
    fn test_list_fails_when_base_dir_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = ListBinariesHandler::new(blocker.join("inner"), SearchPath::default())
            .execute(&[])
            .unwrap_err();
        assert!(err.to_string().contains("Failed to find binaries"));
    }
}
