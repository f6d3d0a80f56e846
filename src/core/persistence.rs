use crate::core::comparison::ComparisonSet;
use crate::domain::model::RacketSummary;
use crate::domain::ports::{ComparisonObserver, SlotStorage};
use crate::utils::error::Result;

pub const COMPARISON_SLOT_KEY: &str = "smashly_comparison_list";

/// 把比較清單同步到單一儲存槽。值是 RacketSummary 的 JSON 陣列。
pub struct SlotPersistence<S: SlotStorage> {
    storage: S,
    key: String,
}

impl<S: SlotStorage> SlotPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, COMPARISON_SLOT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 讀取儲存槽。不存在、讀取失敗或格式錯誤都回傳空集合，不會回傳錯誤。
    pub fn load(&self) -> ComparisonSet {
        let raw = match self.storage.read_slot(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("Slot '{}' is empty, starting with no rackets", self.key);
                return ComparisonSet::new();
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not read slot '{}': {}. Starting empty", self.key, e);
                return ComparisonSet::new();
            }
        };

        let records: Vec<RacketSummary> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("⚠️ Slot '{}' holds malformed data: {}. Starting empty", self.key, e);
                return ComparisonSet::new();
            }
        };

        let (set, dropped) = ComparisonSet::from_records(records);
        if dropped > 0 {
            tracing::warn!(
                "⚠️ Dropped {} stored rackets that were duplicated or over the limit",
                dropped
            );
        }
        tracing::debug!("Hydrated {} rackets from slot '{}'", set.len(), self.key);
        set
    }

    pub fn save(&self, rackets: &[RacketSummary]) -> Result<()> {
        let raw = serde_json::to_string(rackets)?;
        self.storage.write_slot(&self.key, &raw)?;
        tracing::debug!("Persisted {} rackets to slot '{}'", rackets.len(), self.key);
        Ok(())
    }
}

impl<S: SlotStorage> ComparisonObserver for SlotPersistence<S> {
    fn on_change(&self, rackets: &[RacketSummary]) -> Result<()> {
        self.save(rackets)
    }
}
