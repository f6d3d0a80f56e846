use crate::core::comparison::ComparisonSet;
use crate::core::persistence::SlotPersistence;
use crate::domain::model::RacketSummary;
use crate::domain::ports::{ComparisonObserver, Notifier, SlotStorage};

/// 比較清單的唯一寫入者。
///
/// 所有變更都經過這裡：規則由 [`ComparisonSet`] 檢查，被拒絕時透過
/// [`Notifier`] 通知使用者，成功後把新狀態交給每個 [`ComparisonObserver`]
/// （例如 [`SlotPersistence`]）。呼叫端持有這個值並以參數傳給需要的地方。
pub struct ComparisonStore<N: Notifier> {
    set: ComparisonSet,
    notifier: N,
    observers: Vec<Box<dyn ComparisonObserver>>,
}

impl<N: Notifier> ComparisonStore<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            set: ComparisonSet::new(),
            notifier,
            observers: Vec::new(),
        }
    }

    /// 從儲存槽讀取一次初始狀態，之後的每次變更都寫回同一個槽
    pub fn with_persistence<S>(persistence: SlotPersistence<S>, notifier: N) -> Self
    where
        S: SlotStorage + 'static,
    {
        let set = persistence.load();
        tracing::info!("🎾 Comparison restored with {} rackets", set.len());
        Self {
            set,
            notifier,
            observers: vec![Box::new(persistence)],
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn ComparisonObserver>) {
        self.observers.push(observer);
    }

    /// 加入一支球拍。重複或已滿時回傳 `false` 並發出錯誤通知，集合不變。
    pub fn add_racket(&mut self, racket: RacketSummary) -> bool {
        let nombre = racket.nombre.clone();
        match self.set.try_add(racket) {
            Ok(()) => {
                tracing::debug!("Added '{}' to comparison ({} total)", nombre, self.set.len());
                self.publish();
                true
            }
            Err(rejection) => {
                tracing::debug!("Rejected '{}': {}", nombre, rejection);
                self.notifier.notify(rejection.to_notification());
                false
            }
        }
    }

    /// 不存在時什麼都不做，也不算錯誤
    pub fn remove_racket(&mut self, nombre: &str) {
        if self.set.remove(nombre).is_some() {
            tracing::debug!("Removed '{}' from comparison", nombre);
        }
        self.publish();
    }

    pub fn clear_comparison(&mut self) {
        self.set.clear();
        tracing::debug!("Comparison cleared");
        self.publish();
    }

    pub fn is_racket_in_comparison(&self, nombre: &str) -> bool {
        self.set.contains(nombre)
    }

    pub fn count(&self) -> usize {
        self.set.len()
    }

    pub fn rackets(&self) -> &[RacketSummary] {
        self.set.rackets()
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.set
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // 觀察者失敗不回滾記憶體狀態，只記錄警告
    fn publish(&self) {
        for observer in &self.observers {
            if let Err(e) = observer.on_change(self.set.rackets()) {
                tracing::warn!("⚠️ Comparison change not persisted: {}", e);
            }
        }
    }
}
