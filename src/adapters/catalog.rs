use crate::domain::model::{Racket, RacketQuery};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, SmashlyError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const RACKETS_PATH: &str = "/api/rackets";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl CatalogSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: Some(10),
            retry_attempts: 0,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// 目錄 REST API 的客戶端
pub struct HttpCatalog {
    client: Client,
    settings: CatalogSettings,
}

impl HttpCatalog {
    pub fn new(settings: CatalogSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            RACKETS_PATH
        )
    }

    async fn fetch_once(&self, query: &RacketQuery) -> Result<Vec<Racket>> {
        let url = self.endpoint();
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(&url).query(&query.to_params());
        if let Some(timeout) = self.settings.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SmashlyError::ApiStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let body: serde_json::Value = response.json().await?;
        parse_rackets(body)
    }
}

/// 接受裸陣列，或包在 `data` / `rackets` 底下的陣列
fn parse_rackets(body: serde_json::Value) -> Result<Vec<Racket>> {
    let items = match body {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut obj) => match obj
            .remove("data")
            .or_else(|| obj.remove("rackets"))
        {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                tracing::warn!("API response object has no racket array");
                Vec::new()
            }
        },
        other => {
            tracing::warn!("Unexpected API response shape: {}", other);
            Vec::new()
        }
    };

    let mut rackets = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Racket>(item) {
            Ok(racket) => rackets.push(racket),
            // 缺 nombre 的記錄不能進比較清單，略過
            Err(e) => tracing::debug!("Skipping catalog record: {}", e),
        }
    }
    Ok(rackets)
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_rackets(&self, query: &RacketQuery) -> Result<Vec<Racket>> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(query).await {
                Ok(rackets) => {
                    tracing::info!("📦 Fetched {} rackets from catalog", rackets.len());
                    return Ok(rackets);
                }
                Err(e) if e.is_retryable() && attempt < self.settings.retry_attempts => {
                    attempt += 1;
                    tracing::warn!(
                        "🔄 Catalog request failed ({}), retry {}/{}",
                        e,
                        attempt,
                        self.settings.retry_attempts
                    );
                    tokio::time::sleep(self.settings.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
