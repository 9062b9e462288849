use async_trait::async_trait;
use bitebot_core::{ChatClient, ChatReply, RetryPolicy};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::retry::retry_with_backoff;

/// HTTP client for the recommendation bot's webhook.
pub struct WebhookClient {
    client: Client,
    url: String,
    retry: RetryPolicy,
}

impl WebhookClient {
    pub fn new(url: String, timeout: Duration) -> anyhow::Result<Self> {
        if url.trim().is_empty() {
            anyhow::bail!("Webhook URL is empty. Set webhook.url in the config file.");
        }

        info!("Creating WebhookClient for {url}");
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url,
            retry: RetryPolicy::default(),
        })
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Body of a chat query: the raw text and the session it belongs to.
    #[must_use]
    pub fn request_body(query: &str, session_id: &Uuid) -> serde_json::Value {
        json!({
            "text": query,
            "session": session_id.to_string(),
        })
    }

    /// Helper method to send a single request
    async fn try_send(&self, request: &serde_json::Value) -> anyhow::Result<ChatReply> {
        let body = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(ChatReply::from_slice(&body)?)
    }
}

#[async_trait]
impl ChatClient for WebhookClient {
    async fn send(&self, query: &str, session_id: &Uuid) -> anyhow::Result<ChatReply> {
        let request = Self::request_body(query, session_id);

        info!("Sending chat query: session={session_id}");

        let reply = retry_with_backoff(|| self.try_send(&request), &self.retry).await?;

        info!("Received {} message(s) from webhook", reply.messages.len());
        Ok(reply)
    }
}
