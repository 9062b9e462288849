//! Decoding of chat webhook replies.
//!
//! The webhook answers in one of three shapes:
//! - `queryResult.fulfillmentMessages[*].text.text[0]` (Dialogflow v2)
//! - top-level `fulfillmentMessages[*].text.text[0]` (custom webhook)
//! - top-level `fulfillmentText`
//!
//! They are tried in that order.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected reply structure")]
    UnexpectedShape,

    #[error("reply contains no messages")]
    NoMessages,
}

/// Text messages of one bot reply, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub messages: Vec<String>,
}

impl ChatReply {
    pub fn from_slice(body: &[u8]) -> Result<Self, ReplyError> {
        let json: Value = serde_json::from_slice(body)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Self, ReplyError> {
        let messages = if let Some(list) = json["queryResult"]["fulfillmentMessages"].as_array() {
            Self::collect_texts(list)
        } else if let Some(list) = json["fulfillmentMessages"].as_array() {
            Self::collect_texts(list)
        } else if let Some(text) = json["fulfillmentText"].as_str() {
            vec![text.to_string()]
        } else {
            warn!("Unexpected reply structure: {json}");
            return Err(ReplyError::UnexpectedShape);
        };

        if messages.is_empty() {
            warn!("Reply contains no messages: {json}");
            return Err(ReplyError::NoMessages);
        }

        Ok(Self { messages })
    }

    /// First entry of each message's `text.text` array; others are skipped.
    fn collect_texts(list: &[Value]) -> Vec<String> {
        list.iter()
            .filter_map(|message| message["text"]["text"][0].as_str())
            .map(str::to_string)
            .collect()
    }
}
