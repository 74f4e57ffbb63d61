use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub checkin: CheckinConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckinConfig {
    /// Drain the belt onto the cart when check-in finds nobody waiting
    #[serde(default = "default_drain_on_idle")]
    pub drain_belt_on_idle: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_table_width")]
    pub table_width: usize,
}

fn default_drain_on_idle() -> bool {
    true
}

fn default_table_width() -> usize {
    56
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            drain_belt_on_idle: default_drain_on_idle(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            table_width: default_table_width(),
        }
    }
}

impl AppConfig {
    /// Layered load: default file, then local overrides, then environment.
    /// Every key has a default, so running with no files at all is fine.
    pub fn load(config_dir: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/local", config_dir)).required(false))
            .add_source(config::Environment::with_prefix("AEROGATE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_files() {
        let config = AppConfig::load("no-such-config-dir").unwrap();
        assert!(config.checkin.drain_belt_on_idle);
        assert_eq!(config.display.table_width, 56);
    }
}
