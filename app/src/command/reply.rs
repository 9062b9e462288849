use bitebot_core::{ChatReply, ResponseExtractor, Restaurant};
use std::path::PathBuf;
use tracing::info;

use super::{markers_or_default, print_restaurants, read_input};

/// Input parameters for the Reply command strategy.
#[derive(Debug, Clone)]
pub struct ReplyInput {
    /// Webhook JSON payload file (stdin when not provided)
    pub file: Option<PathBuf>,
    /// Print JSON instead of messages and cards
    pub json: bool,
    /// Config file overriding the default location
    pub config: Option<PathBuf>,
}

/// Strategy for decoding a saved webhook payload.
///
/// Every message of the payload is run through the extractor, the same way
/// the chat command handles live replies.
#[derive(Debug, Clone, Copy)]
pub struct ReplyStrategy;

impl super::CommandStrategy for ReplyStrategy {
    type Input = ReplyInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let extractor = ResponseExtractor::new(markers_or_default(input.config.as_deref()));
        let payload = read_input(input.file.as_ref())?;

        let reply = ChatReply::from_slice(payload.as_bytes())?;
        info!("Decoded {} message(s)", reply.messages.len());

        if input.json {
            let restaurants: Vec<Restaurant> = reply
                .messages
                .iter()
                .filter_map(|message| extractor.extract(message))
                .flatten()
                .collect();
            return print_restaurants(Some(restaurants.as_slice()), true);
        }

        for (i, message) in reply.messages.iter().enumerate() {
            println!("--- Message {} ---", i + 1);
            println!("{message}\n");
            print_restaurants(extractor.extract(message).as_deref(), false)?;
            println!();
        }

        Ok(())
    }
}
