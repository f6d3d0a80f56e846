#[cfg(feature = "cli")]
pub mod commands;
pub mod export;
pub mod session;
pub mod view;
