use log::{info, warn};

/// Scoped logger used by the store and the listing controllers.
#[derive(Debug, Clone, Copy)]
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn reject(&self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("console")
    }
}
