use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

const APP_DIR: &str = "smartfin";

pub const DEFAULT_TITLE: &str = "SmartFin-Go";
pub const DEFAULT_FOOTER: &str = "Created by FinTech Team";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shell title, also the breadcrumb root
    pub title: String,
    pub footer: String,
    /// Location the shell mounts on
    pub start: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            start: "/".to_string(),
            log_file: None,
        }
    }
}

/// Load the config file. A missing file yields the defaults.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("SMARTFIN_CONFIG") {
        return Some(PathBuf::from(path));
    }
    user_dir("XDG_CONFIG_HOME", &[".config"])
        .or_else(|| project_dirs().map(|dirs| dirs.config_dir().to_path_buf()))
        .map(|dir| dir.join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    user_dir("XDG_DATA_HOME", &[".local", "share"])
        .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
}

/// `$<xdg_var>/smartfin`, else `$HOME/<home_rel>/smartfin`.
fn user_dir(xdg_var: &str, home_rel: &[&str]) -> Option<PathBuf> {
    let base = match std::env::var_os(xdg_var) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let home = PathBuf::from(std::env::var_os("HOME")?);
            home_rel.iter().fold(home, |dir, part| dir.join(part))
        }
    };
    Some(base.join(APP_DIR))
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", APP_DIR, APP_DIR)
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("smartfin.log"))
}
