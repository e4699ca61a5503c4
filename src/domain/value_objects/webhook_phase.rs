//! Webhook phase - which side of the maintenance window a call marks

/// Phase of a webhook notification around a committed transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookPhase {
    /// Enter maintenance mode before the transfer
    Start,
    /// Leave maintenance mode and flush caches after the transfer
    Finish,
}

impl WebhookPhase {
    /// Path segment appended to the webhook base route
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookPhase::Start => "start",
            WebhookPhase::Finish => "finish",
        }
    }
}

impl std::fmt::Display for WebhookPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
