use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use bitebot_core::{Restaurant, Role};

/// One message of a chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Restaurants recommended by this bot message, if it contained a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
    /// Set on bot messages that report a failed request.
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    fn new(role: Role, content: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            role,
            content,
            timestamp: Utc::now(),
            restaurants: None,
            is_error: false,
        }
    }

    #[must_use]
    pub fn user(content: String) -> Self {
        Self::new(Role::User, content)
    }

    #[must_use]
    pub fn bot(content: String, restaurants: Option<Vec<Restaurant>>) -> Self {
        Self {
            restaurants,
            ..Self::new(Role::Assistant, content)
        }
    }

    #[must_use]
    pub fn error(content: String) -> Self {
        Self {
            is_error: true,
            ..Self::new(Role::Assistant, content)
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Messages are identified by id only.
impl PartialEq for ChatMessage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Terminal rendering: the text, then one card per restaurant.
impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speaker = match self.role {
            Role::User => "You",
            Role::Assistant => "Bitebot",
        };
        write!(f, "{speaker}: {}", self.content)?;

        if let Some(restaurants) = &self.restaurants {
            write!(f, "\n\nFound {} restaurant(s):", restaurants.len())?;
            for restaurant in restaurants {
                write!(f, "\n\n{restaurant}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitebot_core::PriceLevel;

    #[test]
    fn test_constructors() {
        let user = ChatMessage::user("hi".to_string());
        let error = ChatMessage::error("boom".to_string());

        assert!(user.is_user());
        assert!(!user.is_error);
        assert!(!error.is_user());
        assert!(error.is_error);
        assert!(error.restaurants.is_none());
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = ChatMessage::user("same".to_string());
        let b = ChatMessage::user("same".to_string());

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_with_restaurants() {
        let message = ChatMessage::bot(
            "Try these".to_string(),
            Some(vec![Restaurant {
                name: "Pasta Place".to_string(),
                rating: 4.5,
                address: "123 Main St".to_string(),
                link: "http://x".to_string(),
                price_level: PriceLevel::Moderate,
            }]),
        );

        assert_eq!(
            message.to_string(),
            "Bitebot: Try these\n\nFound 1 restaurant(s):\n\nPasta Place  ★ 4.5  $$\n  123 Main St\n  http://x"
        );
    }
}
