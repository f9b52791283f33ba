//! Direct-Messaging Types
//!
//! Wire types for the conversations and messages collections, plus the feed
//! event envelope delivered over the store's change channel.

/// Conversation data structure
pub mod conversation;

/// Chat message data structure
pub mod message;

/// Change-feed event envelope
pub mod event;

pub use conversation::{pair, Conversation, ConversationDraft};
pub use event::{FeedEvent, FeedStatus};
pub use message::{ChatMessage, MessageDraft};
