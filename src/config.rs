use crate::error::MoldError;
use crate::utils::expand_env_vars;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_BASE_DIR: &str = "${HOME}/.master-mold";

const ENV_BASE_DIR: &str = "MM_BASE_DIR";
const ENV_TIMEOUT: &str = "MM_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback directory for `mm-*` binaries. May reference env vars.
    pub base_dir: String,
    /// Seconds a subcommand may run; `0` means no limit.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            timeout: 0,
        }
    }
}

impl Config {
    pub fn expanded_base_dir(&self) -> PathBuf {
        PathBuf::from(expand_env_vars(&self.base_dir))
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// `MM_BASE_DIR` and `MM_TIMEOUT` take precedence over the file.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), MoldError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_BASE_DIR).filter(|v| !v.is_empty()) {
            self.base_dir = dir;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT).filter(|v| !v.is_empty()) {
            self.timeout = raw.trim().parse().map_err(|_| MoldError::ConfigEnv {
                var: ENV_TIMEOUT.to_string(),
                value: raw.clone(),
            })?;
        }
        Ok(())
    }
}

/// `./config` then `${HOME}/.master-mold`.
pub fn default_search_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("config"),
        PathBuf::from(expand_env_vars(DEFAULT_BASE_DIR)),
    ]
}

pub fn parse_config(path: &Path) -> Result<Config, MoldError> {
    let content = fs::read_to_string(path).map_err(|source| MoldError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| MoldError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration.
///
/// An explicit file must exist. Otherwise the first `config.toml` found in
/// `search_dirs` is used; when there is none, the defaults are written to
/// the last search dir so the user has a file to edit.
pub fn load_config(explicit: Option<&Path>, search_dirs: &[PathBuf]) -> Result<Config, MoldError> {
    load_config_with(explicit, search_dirs, |name| env::var(name).ok())
}

/// [`load_config`] with a caller supplied environment lookup for overrides.
pub fn load_config_with<F>(
    explicit: Option<&Path>,
    search_dirs: &[PathBuf],
    lookup: F,
) -> Result<Config, MoldError>
where
    F: Fn(&str) -> Option<String>,
{
    info!("Loading configuration");

    let mut config = match explicit {
        Some(path) => parse_config(path)?,
        None => match search_dirs.iter().map(|d| d.join(CONFIG_FILE_NAME)).find(|p| p.is_file()) {
            Some(path) => {
                debug!("Using config file {}", path.display());
                parse_config(&path)?
            }
            None => {
                let config = Config::default();
                if let Some(dir) = search_dirs.last() {
                    let path = write_default_config(dir, &config)?;
                    info!("No config file found, created {}", path.display());
                }
                config
            }
        },
    };

    config.apply_env_overrides(lookup)?;
    info!("Configuration loaded: base_dir={} timeout={}", config.base_dir, config.timeout);
    Ok(config)
}

fn write_default_config(dir: &Path, config: &Config) -> Result<PathBuf, MoldError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let write_err = |message: String| MoldError::ConfigWrite {
        path: path.clone(),
        message,
    };

    fs::create_dir_all(dir).map_err(|e| write_err(e.to_string()))?;
    let body = toml::to_string_pretty(config).map_err(|e| write_err(e.to_string()))?;
    fs::write(&path, body).map_err(|e| write_err(e.to_string()))?;
    Ok(path)
}
