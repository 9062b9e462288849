#![warn(
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

//! Chat sessions with the recommendation bot.
//!
//! Every bot message is run through the restaurant extractor, so a session
//! carries both the raw conversation and the restaurants recommended in it.

mod manager;
mod message;
mod session;

pub use manager::{ConversationError, ConversationManager, TurnResult};
pub use message::ChatMessage;
pub use session::ChatSession;
