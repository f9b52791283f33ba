//! Chat Message Data Structure
//!
//! Represents a message in a conversation. Messages are append-only: the
//! store assigns id and timestamp on insert and nothing mutates them after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message inside one conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique message ID, assigned by the store
    pub id: Uuid,
    /// Conversation this message belongs to
    pub conversation_id: Uuid,
    /// User who sent the message; always one of the two participants
    pub sender_id: Uuid,
    /// Message text, non-empty
    pub text: String,
    /// When the message was sent, assigned by the store; defines the total
    /// order within a conversation
    pub created_at: DateTime<Utc>,
}

/// Payload for sending a message; id and timestamp are store-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDraft {
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub text: String,
}

/// Response for listing messages in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<ChatMessage>,
}
