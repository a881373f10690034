use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod catalog;
mod error;
mod path;

pub use catalog::*;
pub use error::*;
pub use path::*;

/// unigo configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Icon catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Default config path:
    /// - `debug`: `$CARGO_MANIFEST_DIR/../unigo.toml`
    /// - `release`: `$HOME/.config/unigo.toml`
    pub fn path() -> Result<PathBuf> {
        #[cfg(debug_assertions)]
        return Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("unigo.toml"));

        #[cfg(not(debug_assertions))]
        dirs::home_dir()
            .ok_or(Error::HomeDirNotFound)
            .map(|p| p.join(".config").join("unigo.toml"))
    }

    /// Loads config from a toml string
    pub fn from_toml(toml: &str) -> Result<Self> {
        let span = tracing::debug_span!("config::from_toml");
        let _enter = span.enter();

        toml::from_str(toml).map_err(Into::into)
    }

    /// Loads config from path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let span = tracing::debug_span!("config::load_from_path", ?path);
        let _enter = span.enter();

        let toml = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&toml)
    }

    /// Loads config from a canonical path, see [`Self::path`]
    pub fn load() -> Result<Self> {
        let span = tracing::debug_span!("config::load");
        let _enter = span.enter();

        Self::load_from_path(Self::path()?)
    }

    /// Loads config from a canonical path, see [`Self::path`],
    /// falling back to default on any failure.
    pub fn load_with_fallback() -> Self {
        Self::load()
            .inspect_err(|e| tracing::error!("failed to load config, falling back to default: {e}"))
            .unwrap_or_default()
    }
}
