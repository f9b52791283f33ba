//! Change-Feed Event Envelope
//!
//! The store's realtime channel delivers one event per inserted record,
//! filtered server-side by conversation. The envelope carries the collection
//! name and the inserted row; today only message inserts come through the
//! per-conversation feed.

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// One event on the change feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "collection", rename_all = "snake_case")]
pub enum FeedEvent {
    /// A message row was inserted
    Messages {
        #[serde(rename = "record")]
        record: ChatMessage,
    },
}

impl FeedEvent {
    /// The inserted message, if this event carries one
    pub fn into_message(self) -> Option<ChatMessage> {
        match self {
            FeedEvent::Messages { record } => Some(record),
        }
    }
}

/// Connection status reported by a feed subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Connected,
    Error(String),
    Disconnected,
}
