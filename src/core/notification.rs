use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::core::comparison::MAX_COMPARISON_ITEMS;

pub const ERROR_TITLE: &str = "Error";

/// 短暫顯示給使用者的錯誤訊息（toast）。成功的操作不發通知。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub emitted_at: DateTime<Utc>,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: message.into(),
            emitted_at: Utc::now(),
        }
    }
}

/// 加入比較清單被拒絕的原因。這是政策結果，不是程式錯誤。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonRejection {
    #[error("La pala \"{nombre}\" ya está en la comparación")]
    Duplicate { nombre: String },

    #[error("Solo puedes comparar hasta {limit} palas a la vez")]
    CapacityExceeded { limit: usize },
}

impl ComparisonRejection {
    pub fn capacity() -> Self {
        ComparisonRejection::CapacityExceeded {
            limit: MAX_COMPARISON_ITEMS,
        }
    }

    pub fn to_notification(&self) -> Notification {
        Notification::error(self.to_string())
    }
}
