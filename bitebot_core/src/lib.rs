#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod extraction;
pub mod reply;
pub mod restaurant;
pub mod retry;

pub use extraction::{Markers, ResponseExtractor, extract_restaurants};
pub use reply::{ChatReply, ReplyError};
pub use restaurant::{PriceLevel, Restaurant};
pub use retry::RetryPolicy;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Transport that delivers one user query to the recommendation bot.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send(&self, query: &str, session_id: &Uuid) -> anyhow::Result<ChatReply>;
}

#[async_trait]
impl<T: ChatClient + ?Sized> ChatClient for Arc<T> {
    async fn send(&self, query: &str, session_id: &Uuid) -> anyhow::Result<ChatReply> {
        (**self).send(query, session_id).await
    }
}
