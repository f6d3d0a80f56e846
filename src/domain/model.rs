use serde::{Deserialize, Serialize};
use std::fmt;

/// 球拍識別碼，API 可能回傳數字或字串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RacketId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RacketId::Number(n) => write!(f, "{}", n),
            RacketId::Text(s) => f.write_str(s),
        }
    }
}

/// 比較清單中的最小單位。`nombre` 是去重的鍵，其餘欄位只用於顯示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacketSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RacketId>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imagenes: Vec<String>,
    /// 未知欄位原樣保留，讓持久化來回不遺失資料
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RacketSummary {
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            marca: None,
            precio_actual: None,
            imagenes: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_marca(mut self, marca: impl Into<String>) -> Self {
        self.marca = Some(marca.into());
        self
    }

    /// JSON 無法表示 NaN 或無限大，這類價格視為未知
    pub fn with_precio(mut self, precio: f64) -> Self {
        self.precio_actual = Some(precio).filter(|p| p.is_finite());
        self
    }

    /// 清掉 JSON 無法來回保存的價格
    pub(crate) fn normalize(&mut self) {
        if self.precio_actual.is_some_and(|p| !p.is_finite()) {
            self.precio_actual = None;
        }
    }

    pub fn with_id(mut self, id: RacketId) -> Self {
        self.id = Some(id);
        self
    }
}

/// 目錄 API 回傳的完整球拍記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Racket {
    #[serde(default)]
    pub id: Option<RacketId>,
    pub nombre: String,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub precio_actual: Option<f64>,
    #[serde(default)]
    pub precio_original: Option<f64>,
    #[serde(default)]
    pub descuento_porcentaje: Option<f64>,
    #[serde(default)]
    pub enlace: Option<String>,
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub es_bestseller: bool,
    #[serde(default)]
    pub en_oferta: bool,
}

impl From<Racket> for RacketSummary {
    fn from(racket: Racket) -> Self {
        let mut imagenes = racket.imagenes;
        if imagenes.is_empty() {
            imagenes.extend(racket.imagen);
        }

        let mut extra = serde_json::Map::new();
        if let Some(modelo) = racket.modelo {
            extra.insert("modelo".to_string(), serde_json::Value::String(modelo));
        }
        if let Some(precio) = racket.precio_original.and_then(serde_json::Number::from_f64) {
            extra.insert("precio_original".to_string(), serde_json::Value::Number(precio));
        }
        if let Some(enlace) = racket.enlace {
            extra.insert("enlace".to_string(), serde_json::Value::String(enlace));
        }

        Self {
            id: racket.id,
            nombre: racket.nombre,
            marca: racket.marca,
            precio_actual: racket.precio_actual,
            imagenes,
            extra,
        }
    }
}

/// 目錄查詢參數
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RacketQuery {
    pub marca: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl RacketQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(marca) = &self.marca {
            params.push(("marca", marca.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}
