//! Conversation with the recommendation bot over its webhook.

use bitebot_conversation::ConversationManager;
use bitebot_core::ResponseExtractor;
use bitebot_providers::WebhookClient;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::load_config;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Config file overriding the default location
    pub config: Option<PathBuf>,
}

/// Strategy for executing the Chat command.
///
/// This strategy handles:
/// - Loading configuration and building the webhook client
/// - Starting a session with the configured greeting
/// - Running in interactive or single-message mode
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = load_config(input.config.as_deref())?;

        let client = WebhookClient::new(
            config.webhook.url.clone(),
            Duration::from_secs(config.webhook.timeout_secs),
        )?
        .with_retry(config.retry.clone());

        let mut manager = ConversationManager::new(
            client,
            ResponseExtractor::new(config.extraction.clone()),
            &config.chat.greeting,
        )
        .with_history_limit(config.chat.history_limit);

        if let Some(msg) = input.message {
            let result = manager.process_turn(&msg).await;
            for message in &result.replies {
                println!("{message}\n");
            }

            info!(
                "Turn completed: {} restaurant(s) recommended",
                result.restaurant_count()
            );
            if let Some(error) = result.error {
                anyhow::bail!("Chat request failed: {error}");
            }
        } else {
            manager.run_interactive().await?;
        }

        Ok(())
    }
}
