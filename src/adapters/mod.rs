// Adapters layer: concrete implementations for external systems (storage, http, notifications).

pub mod catalog;
pub mod notifier;
pub mod storage;
