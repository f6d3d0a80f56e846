use crate::core::notification::Notification;
use crate::domain::ports::Notifier;

/// 只寫進日誌，適合非互動環境
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::warn!("🔔 {}: {}", notification.title, notification.message);
    }
}

/// CLI 用的 toast：印到 stderr，同時留一份日誌
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notification: &Notification) -> String {
        format!("❌ {}: {}", notification.title, notification.message)
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::format(&notification));
        TracingNotifier.notify(notification);
    }
}
