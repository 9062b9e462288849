//! Session state for one conversation with the bot.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use bitebot_core::Restaurant;

use crate::message::ChatMessage;

/// A conversation session with full message history.
///
/// The id is sent with every query so the bot can keep its own context.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Session identifier
    pub id: Uuid,
    /// Message history, oldest first
    pub messages: Vec<ChatMessage>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create a new empty conversation session.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a session that opens with a bot greeting.
    #[must_use]
    pub fn with_greeting(greeting: &str) -> Self {
        let mut session = Self::new();
        session.push(ChatMessage::bot(greeting.to_string(), None));
        session
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    /// Get the last N messages from history.
    #[must_use]
    pub fn last_n_messages(&self, n: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// All restaurants recommended so far, in the order they were received.
    #[must_use]
    pub fn restaurants(&self) -> Vec<&Restaurant> {
        self.messages
            .iter()
            .filter_map(|m| m.restaurants.as_deref())
            .flatten()
            .collect()
    }

    /// Get message count.
    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Check if session is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitebot_core::PriceLevel;

    fn restaurant(name: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            rating: 4.0,
            address: "Address not available".to_string(),
            link: String::new(),
            price_level: PriceLevel::Moderate,
        }
    }

    #[test]
    fn test_greeting_session() {
        let session = ChatSession::with_greeting("Hi!");

        assert_eq!(session.message_count(), 1);
        assert!(!session.messages[0].is_user());
        assert_eq!(session.messages[0].content, "Hi!");
    }

    #[test]
    fn test_last_n_messages() {
        let mut session = ChatSession::new();
        assert!(session.is_empty());

        for i in 0..10 {
            session.push(ChatMessage::user(format!("Message {i}")));
        }

        assert_eq!(session.last_n_messages(3).len(), 3);
        assert_eq!(session.last_n_messages(3)[2].content, "Message 9");
        assert_eq!(session.last_n_messages(100).len(), 10);
        assert_eq!(session.last_n_messages(0).len(), 0);
    }

    #[test]
    fn test_restaurants_across_messages() {
        let mut session = ChatSession::with_greeting("Hi!");
        session.push(ChatMessage::bot(
            "list one".to_string(),
            Some(vec![restaurant("A"), restaurant("B")]),
        ));
        session.push(ChatMessage::user("more".to_string()));
        session.push(ChatMessage::bot(
            "list two".to_string(),
            Some(vec![restaurant("C")]),
        ));

        let names: Vec<&str> = session
            .restaurants()
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
