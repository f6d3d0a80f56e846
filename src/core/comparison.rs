use crate::core::notification::ComparisonRejection;
use crate::domain::model::RacketSummary;

pub const MAX_COMPARISON_ITEMS: usize = 3;

/// 有序、無重複、最多三筆的比較集合。
///
/// 不變量：
/// - `len() <= MAX_COMPARISON_ITEMS`
/// - 任兩筆的 `nombre` 都不相同（大小寫敏感的精確比對）
///
/// 這裡只有規則，沒有儲存或通知，所以可以單獨測試。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    rackets: Vec<RacketSummary>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由儲存資料建立集合，違反不變量的部分會被丟棄。
    /// 回傳集合與被丟棄的筆數。
    pub fn from_records(records: Vec<RacketSummary>) -> (Self, usize) {
        let total = records.len();
        let mut set = Self::new();
        for racket in records {
            if let Err(rejection) = set.try_add(racket) {
                tracing::debug!("Skipping stored racket: {}", rejection);
            }
        }
        let dropped = total - set.len();
        (set, dropped)
    }

    /// 先檢查重複，再檢查容量
    pub fn try_add(&mut self, mut racket: RacketSummary) -> Result<(), ComparisonRejection> {
        if self.contains(&racket.nombre) {
            return Err(ComparisonRejection::Duplicate {
                nombre: racket.nombre,
            });
        }
        if self.rackets.len() >= MAX_COMPARISON_ITEMS {
            return Err(ComparisonRejection::capacity());
        }
        racket.normalize();
        self.rackets.push(racket);
        Ok(())
    }

    pub fn remove(&mut self, nombre: &str) -> Option<RacketSummary> {
        let index = self.rackets.iter().position(|r| r.nombre == nombre)?;
        Some(self.rackets.remove(index))
    }

    pub fn clear(&mut self) {
        self.rackets.clear();
    }

    pub fn contains(&self, nombre: &str) -> bool {
        self.rackets.iter().any(|r| r.nombre == nombre)
    }

    pub fn len(&self) -> usize {
        self.rackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rackets.is_empty()
    }

    pub fn rackets(&self) -> &[RacketSummary] {
        &self.rackets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RacketSummary> {
        self.rackets.iter()
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a RacketSummary;
    type IntoIter = std::slice::Iter<'a, RacketSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.rackets.iter()
    }
}
