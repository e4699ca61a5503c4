//! HTTP Webhook Notifier
//!
//! `GET {base}/plugin-kirby-deploy/{phase}` with a bearer token. Only a 2xx
//! response counts as success; everything else is logged and returned as
//! `false`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::domain::ports::{WebhookNotifier, WebhookTarget};
use crate::domain::value_objects::WebhookPhase;
use crate::error::{DeployError, DeployResult};

/// `WebhookNotifier` backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpWebhookNotifier {
    http: Client,
}

impl HttpWebhookNotifier {
    pub fn new(timeout: Duration) -> DeployResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kirby-deploy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DeployError::HttpClient)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl WebhookNotifier for HttpWebhookNotifier {
    async fn notify(&self, target: &WebhookTarget, phase: WebhookPhase) -> bool {
        let endpoint = target.endpoint(phase);
        let url = match url::Url::parse(&endpoint) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(url = %endpoint, error = %err, "invalid webhook url");
                return false;
            }
        };

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(target.token())
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(url = %endpoint, status = %response.status(), "webhook called");
                true
            }
            Ok(response) => {
                tracing::warn!(url = %endpoint, status = %response.status(), "failed to call webhook");
                false
            }
            Err(err) => {
                tracing::warn!(url = %endpoint, error = %err.without_url(), "failed to call webhook");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn notifier() -> HttpWebhookNotifier {
        HttpWebhookNotifier::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn start_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/plugin-kirby-deploy/start")
                .header("authorization", "Bearer tok");
            then.status(200);
        });

        let target = WebhookTarget::new(server.base_url(), "tok");
        assert!(notifier().notify(&target, WebhookPhase::Start).await);
        mock.assert();
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_ignored() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/plugin-kirby-deploy/finish");
            then.status(204);
        });

        let target = WebhookTarget::new(format!("{}/", server.base_url()), "tok");
        assert!(notifier().notify(&target, WebhookPhase::Finish).await);
        mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_is_false() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/plugin-kirby-deploy/start");
            then.status(401);
        });

        let target = WebhookTarget::new(server.base_url(), "wrong");
        assert!(!notifier().notify(&target, WebhookPhase::Start).await);
        mock.assert();
    }

    #[tokio::test]
    async fn unreachable_server_is_false() {
        let target = WebhookTarget::new("http://127.0.0.1:9", "tok");
        let notifier = HttpWebhookNotifier::new(Duration::from_millis(500)).unwrap();
        assert!(!notifier.notify(&target, WebhookPhase::Finish).await);
    }

    #[tokio::test]
    async fn unparseable_url_is_false() {
        let target = WebhookTarget::new("not a url", "tok");
        assert!(!notifier().notify(&target, WebhookPhase::Start).await);
    }
}
