pub mod comparison;
pub mod notification;
pub mod persistence;
pub mod store;

pub use crate::domain::model::{Racket, RacketId, RacketQuery, RacketSummary};
pub use crate::domain::ports::{CatalogSource, ComparisonObserver, ConfigProvider, Notifier, SlotStorage};
pub use crate::utils::error::Result;
