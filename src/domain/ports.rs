use crate::domain::model::{Racket, RacketQuery, RacketSummary};
use crate::core::notification::Notification;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 單一字串鍵的儲存槽，語意類似瀏覽器的 localStorage
pub trait SlotStorage: Send + Sync {
    fn read_slot(&self, key: &str) -> Result<Option<String>>;
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}

/// 使用者可見的通知出口
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 比較清單變更後的觀察者
pub trait ComparisonObserver: Send + Sync {
    fn on_change(&self, rackets: &[RacketSummary]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn slot_key(&self) -> &str;
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_rackets(&self, query: &RacketQuery) -> Result<Vec<Racket>>;

    /// 以名稱精確比對，先用 search 參數縮小範圍
    async fn find_by_name(&self, nombre: &str) -> Result<Option<Racket>> {
        let rackets = self.list_rackets(&RacketQuery::search(nombre)).await?;
        Ok(rackets.into_iter().find(|r| r.nombre == nombre))
    }
}
