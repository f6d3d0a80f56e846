pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::app::commands::{CommandOutcome, SmashlyApp};
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::catalog::{CatalogSettings, HttpCatalog};
pub use crate::adapters::notifier::{ConsoleNotifier, TracingNotifier};
pub use crate::adapters::storage::{FileSlotStorage, MemorySlotStorage};
pub use crate::config::AppSettings;
pub use crate::core::{
    comparison::{ComparisonSet, MAX_COMPARISON_ITEMS},
    notification::{ComparisonRejection, Notification},
    persistence::{SlotPersistence, COMPARISON_SLOT_KEY},
    store::ComparisonStore,
};
pub use crate::domain::model::{Racket, RacketId, RacketQuery, RacketSummary};
pub use crate::utils::error::{Result, SmashlyError};
