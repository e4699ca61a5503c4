//! Webhook Notifier Port
//!
//! Remote start/finish notifications that toggle maintenance mode around a
//! committed push.

use std::fmt;

use async_trait::async_trait;

use crate::domain::value_objects::WebhookPhase;

/// Route prefix served by the site-side plugin
pub const WEBHOOK_ROUTE: &str = "plugin-kirby-deploy";

/// Where and how to call the webhooks
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    base_url: String,
    token: String,
}

impl WebhookTarget {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `{base_url}/plugin-kirby-deploy/{phase}`
    pub fn endpoint(&self, phase: WebhookPhase) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            WEBHOOK_ROUTE,
            phase
        )
    }
}

impl fmt::Debug for WebhookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookTarget")
            .field("base_url", &self.base_url)
            .field("token", &"<token>")
            .finish()
    }
}

/// Trait for webhook notifiers
///
/// Implementations never fail: transport errors and non-2xx responses are
/// logged and reported as `false`.
#[async_trait]
pub trait WebhookNotifier: Send + Sync {
    async fn notify(&self, target: &WebhookTarget, phase: WebhookPhase) -> bool;
}
