//! Error types for the shell core

use std::path::PathBuf;

use thiserror::Error;

use crate::menu::MenuKey;

/// Errors raised while building the menu tree. Any of these means the shell
/// must not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("duplicate menu key `{key}`")]
    DuplicateKey { key: MenuKey },

    #[error("menu node `{key}` has an invalid path `{path}` (must start with `/`)")]
    InvalidPath { key: MenuKey, path: String },
}

/// Why a clicked key produced no navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no menu node with key `{0}`")]
    KeyNotFound(MenuKey),

    #[error("menu node `{0}` has no path")]
    NodeNotNavigable(MenuKey),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
