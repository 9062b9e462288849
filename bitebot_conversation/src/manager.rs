//! Conversation driver.
//!
//! Sends user input to the bot through a [`ChatClient`], turns every reply
//! message into a [`ChatMessage`] with its extracted restaurants, and keeps
//! the session history.

use std::io::Write;

use thiserror::Error;
use tracing::{debug, info, warn};

use bitebot_core::{ChatClient, ResponseExtractor};

use crate::message::ChatMessage;
use crate::session::ChatSession;

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Messages added to the session by one turn.
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// Bot messages appended after the user message, in order.
    pub replies: Vec<ChatMessage>,
    /// Set when the request failed; `replies` then holds one error message.
    pub error: Option<String>,
}

impl TurnResult {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Number of restaurants recommended in this turn.
    #[must_use]
    pub fn restaurant_count(&self) -> usize {
        self.replies
            .iter()
            .filter_map(|m| m.restaurants.as_ref())
            .map(Vec::len)
            .sum()
    }
}

pub struct ConversationManager<C: ChatClient> {
    client: C,
    extractor: ResponseExtractor,
    session: ChatSession,
    last_error: Option<String>,
    history_limit: usize,
}

impl<C: ChatClient> ConversationManager<C> {
    /// Start a new session that opens with `greeting`.
    #[must_use]
    pub fn new(client: C, extractor: ResponseExtractor, greeting: &str) -> Self {
        let session = ChatSession::with_greeting(greeting);
        info!("Starting chat session {}", session.id);

        Self {
            client,
            extractor,
            session,
            last_error: None,
            history_limit: 50,
        }
    }

    #[must_use]
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Error text of the most recent failed turn, cleared by a successful one.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Send one user message and record the bot's answer.
    ///
    /// A failed request does not abort the conversation: it is recorded as
    /// an error message from the bot.
    pub async fn process_turn(&mut self, text: &str) -> TurnResult {
        self.session.push(ChatMessage::user(text.to_string()));

        let sent = self.client.send(text, &self.session.id).await;
        match sent {
            Ok(reply) => {
                self.last_error = None;

                let replies: Vec<ChatMessage> = reply
                    .messages
                    .into_iter()
                    .map(|content| {
                        let restaurants = self.extractor.extract(&content);
                        if let Some(found) = &restaurants {
                            debug!("Reply carries {} restaurant(s)", found.len());
                        }
                        ChatMessage::bot(content, restaurants)
                    })
                    .collect();

                for message in &replies {
                    self.session.push(message.clone());
                }

                TurnResult {
                    replies,
                    error: None,
                }
            }
            Err(e) => {
                let error = e.to_string();
                warn!("Chat request failed: {error}");

                let message =
                    ChatMessage::error(format!("Sorry, I encountered an error: {error}"));
                self.session.push(message.clone());
                self.last_error = Some(error.clone());

                TurnResult {
                    replies: vec![message],
                    error: Some(error),
                }
            }
        }
    }

    /// Read-eval-print loop over stdin.
    pub async fn run_interactive(&mut self) -> Result<(), ConversationError> {
        println!("=== Chat Session: {} ===", self.session.id);
        println!("Type 'history' to review the conversation, 'exit' or 'quit' to leave.\n");

        for message in &self.session.messages {
            println!("{message}\n");
        }

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                break;
            }

            if input.is_empty() {
                continue;
            }

            if input == "history" {
                for message in self.session.last_n_messages(self.history_limit) {
                    println!("{message}\n");
                }
                continue;
            }

            let result = self.process_turn(input).await;
            for message in &result.replies {
                println!("\n{message}\n");
            }
        }

        println!(
            "\nSession ended. {} message(s), {} restaurant(s) recommended.",
            self.session.message_count(),
            self.session.restaurants().len()
        );
        Ok(())
    }
}
