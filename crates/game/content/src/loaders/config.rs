//! Rules configuration loader.

use std::path::Path;

use tactics_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`RulesConfig::default`].
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if config.reset_hour_utc > 23 {
            anyhow::bail!("reset_hour_utc must be 0..=23, got {}", config.reset_hour_utc);
        }
        if config.daily_caps.is_empty() {
            anyhow::bail!("daily_caps must define at least one level band");
        }
        if config.crit_multiplier.percent() < 100 {
            anyhow::bail!(
                "crit_multiplier must be at least 100, got {}",
                config.crit_multiplier.percent()
            );
        }

        Ok(config)
    }
}
