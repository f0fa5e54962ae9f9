use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::RelResult;

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "relvisitor".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 分派配置
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DispatchConfig {
    /// 是否为每次分派输出 trace 日志（见 `TracingVisitor`）
    pub trace: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub dispatch: DispatchConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> RelResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> RelResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> RelResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RelError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.max_files, 5);
        assert!(!config.dispatch.trace);
    }

    #[test]
    fn test_config_load_save() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.dispatch.trace = true;
        config.log.level = "trace".to_string();
        config.save(temp_file.path()).expect("Failed to save config");

        let loaded = Config::load(temp_file.path()).expect("Failed to load config");
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_config_partial_sections_use_defaults() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[dispatch]\ntrace = true\n")
            .expect("Failed to write TOML content to temporary file");

        let config = Config::load(temp_file.path()).expect("Failed to load config");
        assert!(config.dispatch.trace);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = Config::from_toml("[log\nlevel = ");
        assert!(matches!(result, Err(RelError::Config(_))));
    }

    #[test]
    fn test_config_missing_file() {
        let result = Config::load("/nonexistent/relvisitor.toml");
        assert!(matches!(result, Err(RelError::Io(_))));
    }
}
