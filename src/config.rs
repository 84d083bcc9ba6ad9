//! Server configuration
//!
//! Defaults match the reference deployment: listen on `localhost:8080` and
//! serve from `www` relative to the working directory. An optional YAML file
//! (named by `DOCROOT_CONFIG`) and the `LISTEN` / `DOCUMENT_ROOT` environment
//! variables override them, in that order.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LISTEN_ADDR: &str = "localhost:8080";
pub const DEFAULT_DOCUMENT_ROOT: &str = "www";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the listener binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory files are served from
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_document_root() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT_ROOT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            document_root: default_document_root(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        let file = std::env::var("DOCROOT_CONFIG").ok().map(PathBuf::from);
        Self::from_lookup(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build a configuration from an optional YAML file and an environment
    /// lookup function.
    pub fn from_lookup<F>(file: Option<&Path>, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(addr) = lookup("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Some(root) = lookup("DOCUMENT_ROOT") {
            cfg.document_root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse YAML; missing keys take their defaults.
    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
