use crate::utils::error::{Result, SmashlyError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub slot_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SmashlyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SmashlyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SMASHLY_API_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SmashlyError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        if let Some(url) = &self.api.base_url {
            validate_url("api.base_url", url)?;
        }
        if let Some(retries) = self.api.retry_attempts {
            validate_range("api.retry_attempts", retries, 0, 10)?;
        }
        if let Some(delay) = self.api.retry_delay_seconds {
            validate_range("api.retry_delay_seconds", delay, 0, 60)?;
        }
        if let Some(dir) = &self.storage.data_dir {
            validate_path("storage.data_dir", dir)?;
        }
        if let Some(key) = &self.storage.slot_key {
            validate_slot_key("storage.slot_key", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://api.smashly.example"
timeout_seconds = 5
retry_attempts = 2
retry_delay_seconds = 3

[storage]
data_dir = "./data"
slot_key = "smashly_comparison_list"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url.as_deref(), Some("https://api.smashly.example"));
        assert_eq!(config.api.retry_attempts, Some(2));
        assert_eq!(config.api.retry_delay_seconds, Some(3));
        assert_eq!(config.storage.data_dir.as_deref(), Some("./data"));
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.logging.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMASHLY_TEST_API_URL", "https://test.api.com");

        let toml_content = r#"
[api]
base_url = "${SMASHLY_TEST_API_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://test.api.com"));

        std::env::remove_var("SMASHLY_TEST_API_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[api]
base_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_delay_out_of_range() {
        let config = TomlConfig::from_toml_str("[api]\nretry_delay_seconds = 600\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SmashlyError::InvalidConfigValueError { field, .. }) if field == "api.retry_delay_seconds"
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"/tmp/smashly\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/smashly"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[api\nbase_url = 1"),
            Err(SmashlyError::ConfigValidationError { .. })
        ));
    }
}
