use crate::adapters::catalog::CatalogSettings;
use crate::config::toml_config::TomlConfig;
use crate::core::persistence::COMPARISON_SLOT_KEY;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DATA_DIR: &str = "./.smashly";

/// 合併 TOML 檔與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    pub data_dir: String,
    pub slot_key: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: 10,
            retry_attempts: 1,
            retry_delay: Duration::from_millis(500),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            slot_key: COMPARISON_SLOT_KEY.to_string(),
        }
    }
}

impl AppSettings {
    /// 預設值 < TOML 檔 < 命令列
    pub fn resolve(
        file: Option<&TomlConfig>,
        api_base_url: Option<&str>,
        data_dir: Option<&str>,
    ) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(file) = file {
            file.validate()?;
            if let Some(url) = &file.api.base_url {
                settings.api_base_url = url.clone();
            }
            if let Some(timeout) = file.api.timeout_seconds {
                settings.timeout_seconds = timeout;
            }
            if let Some(retries) = file.api.retry_attempts {
                settings.retry_attempts = retries;
            }
            if let Some(delay) = file.api.retry_delay_seconds {
                settings.retry_delay = Duration::from_secs(delay);
            }
            if let Some(dir) = &file.storage.data_dir {
                settings.data_dir = dir.clone();
            }
            if let Some(key) = &file.storage.slot_key {
                settings.slot_key = key.clone();
            }
        }

        if let Some(url) = api_base_url {
            settings.api_base_url = url.to_string();
        }
        if let Some(dir) = data_dir {
            settings.data_dir = dir.to_string();
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            base_url: self.api_base_url.clone(),
            timeout_seconds: Some(self.timeout_seconds),
            retry_attempts: self.retry_attempts,
            retry_delay: self.retry_delay,
        }
    }
}

impl ConfigProvider for AppSettings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn slot_key(&self) -> &str {
        &self.slot_key
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("api_base_url", &self.api_base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_range("retry_attempts", self.retry_attempts, 0, 10)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_slot_key("slot_key", &self.slot_key)?;
        Ok(())
    }
}
