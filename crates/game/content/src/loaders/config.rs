//! Game tuning loader.

use std::path::Path;

use gemgrid_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load tuning data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Parse tuning data from TOML text.
    pub fn from_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
