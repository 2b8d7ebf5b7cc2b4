use std::sync::Mutex;
use tracing::warn;

/// Блокирующее сообщение администратору (аналог `alert`).
pub trait Notifier: Send + Sync + 'static {
    fn alert(&self, message: &str);
}

/// Копит сообщения до следующей отрисовки страницы.
#[derive(Debug, Default)]
pub struct AlertQueue {
    pending: Mutex<Vec<String>>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Забирает все накопленные сообщения.
    pub fn drain(&self) -> Vec<String> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for AlertQueue {
    fn alert(&self, message: &str) {
        warn!(alert = message, "Alert shown to administrator");
        match self.pending.lock() {
            Ok(mut pending) => pending.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
