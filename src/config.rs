use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::parse_level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl CheckerConfig {
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: CheckerConfig = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(config_path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> AppResult<()> {
        parse_level(&self.general.log_level)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> AppResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.general.log_level, "warn");
        assert!(config.general.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = CheckerConfig::from_toml_str("[general]\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(config.general.color);

        let empty = CheckerConfig::from_toml_str("").unwrap();
        assert_eq!(empty, CheckerConfig::default());
    }

    #[test]
    fn test_rejects_bad_config() {
        let err = CheckerConfig::from_toml_str("[general]\nlog_level = \"chatty\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = CheckerConfig::from_toml_str("[general]\ncolor = \"yes\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_log_level_must_be_lowercase_name() {
        for level in ["3", "1", "WARN", "Trace"] {
            let content = format!("[general]\nlog_level = \"{}\"\n", level);
            let result = CheckerConfig::from_toml_str(&content);
            assert!(matches!(result, Err(AppError::Config(_))), "{level:?} should be rejected");
        }
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let mut config = CheckerConfig::default();
        config.general.color = false;
        config.general.log_level = "info".to_string();

        let path = std::env::temp_dir().join(format!("primegram-config-{}.toml", std::process::id()));
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
        let loaded = CheckerConfig::load_custom(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::path::Path::new("/nonexistent/primegram/config.toml");
        assert!(matches!(CheckerConfig::load_custom(path), Err(AppError::Io(_))));
    }
}
