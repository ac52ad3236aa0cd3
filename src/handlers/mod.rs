pub mod list;

use crate::binary::SearchPath;
use crate::config::Config;
use crate::registry::RegistryBuilder;
use list::{ListBinariesHandler, LIST_BINARIES};

/// Adds the in-process commands to a registry under construction.
pub fn register_builtins(
    builder: RegistryBuilder,
    config: &Config,
    search_path: &SearchPath,
) -> RegistryBuilder {
    builder.register(
        LIST_BINARIES,
        ListBinariesHandler::new(config.expanded_base_dir(), search_path.clone()),
    )
}
