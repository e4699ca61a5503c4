//! Webhook notifier implementations

mod http;

pub use http::HttpWebhookNotifier;
