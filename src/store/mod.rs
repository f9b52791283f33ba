//! Hosted Record Store Client
//!
//! The hosted service owns every row this application touches: conversations,
//! messages, listings, favorites, profiles, and the realtime change feed.
//! This module is the only place that talks to it.
//!
//! `ConversationStore` is the seam between the direct-messaging core and the
//! service: the resolver and message stream are written against the trait,
//! `HostedStore` implements it over HTTP + SSE, and `InMemoryStore`
//! implements the same observable semantics for tests.
//!
//! All methods are blocking facades intended to run on worker threads; the UI
//! never calls them on its own thread.

use uuid::Uuid;

use crate::shared::error::StoreError;
use crate::shared::messaging::{ChatMessage, Conversation, ConversationDraft, MessageDraft};

/// Live message feed handle
pub mod feed;

/// HTTP client for the hosted service
pub mod hosted;

/// In-memory store with the hosted service's semantics
pub mod memory;

pub use feed::MessageFeed;
pub use hosted::{HostedStore, Session};
pub use memory::InMemoryStore;

/// Access to the conversations and messages collections.
///
/// Ids and timestamps are assigned by the store on insert; drafts never carry
/// them. Reads and writes fail with `StoreError` and are never retried here.
pub trait ConversationStore: Send + Sync {
    /// All conversations where `user_id` is either participant.
    ///
    /// The store's schema is directional, so implementations query both
    /// roles; callers still must match pairs in both directions.
    fn conversations_with(&self, user_id: Uuid) -> Result<Vec<Conversation>, StoreError>;

    /// Insert a new conversation row and return it with id and timestamp
    fn create_conversation(&self, draft: &ConversationDraft) -> Result<Conversation, StoreError>;

    /// All messages in one conversation, in the store's return order
    fn messages_in(&self, conversation_id: Uuid) -> Result<Vec<ChatMessage>, StoreError>;

    /// Insert a message row and return it with id and timestamp.
    ///
    /// The store refuses senders outside the conversation's participant pair.
    fn append_message(&self, draft: &MessageDraft) -> Result<ChatMessage, StoreError>;

    /// Open a push feed of message inserts for one conversation, filtered
    /// server-side. The returned handle must be stopped when the view closes.
    fn watch_messages(&self, conversation_id: Uuid) -> Result<MessageFeed, StoreError>;
}
