//! Configuration loading and representation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming the menu file.
pub const MENU_FILE_VAR: &str = "PIZZASHOP_MENU_FILE";
/// Environment variable naming the payment log file.
pub const PAYMENTS_FILE_VAR: &str = "PIZZASHOP_PAYMENTS_FILE";

pub const DEFAULT_MENU_FILE: &str = "data/menu.txt";
pub const DEFAULT_PAYMENTS_FILE: &str = "data/payments.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Where the shop keeps its menu and payment log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    menu_path: PathBuf,
    payments_path: PathBuf,
}

impl ShopConfig {
    pub fn new(menu_path: impl Into<PathBuf>, payments_path: impl Into<PathBuf>) -> Self {
        Self {
            menu_path: menu_path.into(),
            payments_path: payments_path.into(),
        }
    }

    /// Load from `PIZZASHOP_MENU_FILE` / `PIZZASHOP_PAYMENTS_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset variables fall back to
    /// the defaults under `data/`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let menu_path = path_var(&lookup, MENU_FILE_VAR, DEFAULT_MENU_FILE)?;
        let payments_path = path_var(&lookup, PAYMENTS_FILE_VAR, DEFAULT_PAYMENTS_FILE)?;
        Ok(Self::new(menu_path, payments_path))
    }

    pub fn menu_path(&self) -> &Path {
        &self.menu_path
    }

    pub fn payments_path(&self) -> &Path {
        &self.payments_path
    }
}

fn path_var<F>(lookup: &F, key: &'static str, default: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(value) => Ok(PathBuf::from(value)),
        None => {
            tracing::warn!("{key} not set; using default {default}");
            Ok(PathBuf::from(default))
        }
    }
}
