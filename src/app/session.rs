use crate::adapters::storage::FileSlotStorage;
use crate::core::persistence::SlotPersistence;
use crate::core::store::ComparisonStore;
use crate::core::{ConfigProvider, Notifier};

/// 依設定建立以檔案為後端的比較清單
pub fn open_store<C, N>(config: &C, notifier: N) -> ComparisonStore<N>
where
    C: ConfigProvider,
    N: Notifier,
{
    let storage = FileSlotStorage::new(config.data_dir());
    tracing::debug!("Using comparison storage at {}", storage.base_path().display());
    let persistence = SlotPersistence::with_key(storage, config.slot_key());
    ComparisonStore::with_persistence(persistence, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::TracingNotifier;
    use crate::config::AppSettings;
    use crate::domain::model::RacketSummary;
    use tempfile::TempDir;

    #[test]
    fn test_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let settings = AppSettings {
            data_dir: temp_dir.path().to_str().unwrap().to_string(),
            ..AppSettings::default()
        };

        {
            let mut store = open_store(&settings, TracingNotifier);
            assert!(store.add_racket(RacketSummary::new("Racket 1")));
            assert!(store.add_racket(RacketSummary::new("Racket 2")));
        }

        let store = open_store(&settings, TracingNotifier);
        assert_eq!(store.count(), 2);
        assert!(store.is_racket_in_comparison("Racket 2"));
        assert!(temp_dir.path().join("smashly_comparison_list.json").exists());
    }
}
