use crate::domain::ports::SlotStorage;
use crate::utils::error::{Result, SmashlyError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 記憶體內的儲存槽，clone 之後共用同一份資料
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn poisoned(key: &str) -> SmashlyError {
        SmashlyError::StorageError {
            key: key.to_string(),
            message: "in-memory storage lock poisoned".to_string(),
        }
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        slots.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// 每個槽存成 `<base_path>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    base_path: PathBuf,
}

impl FileSlotStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl SlotStorage for FileSlotStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 先寫暫存檔再改名，避免中途失敗留下半個檔案
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
