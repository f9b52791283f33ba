//! In-Memory Store
//!
//! A `ConversationStore` over process memory with the hosted service's
//! observable semantics: server-assigned ids and timestamps, directional
//! participant columns, participant enforcement on message insert, and push
//! fan-out to live feeds. Backs the test suite, which exercises the
//! messaging core without a network.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::shared::error::StoreError;
use crate::shared::messaging::{ChatMessage, Conversation, ConversationDraft, MessageDraft};
use crate::store::feed::{FeedSender, MessageFeed};
use crate::store::ConversationStore;

#[derive(Default)]
struct Inner {
    conversations: Vec<Conversation>,
    messages: Vec<ChatMessage>,
    feeds: Vec<(Uuid, FeedSender)>,
    last_assigned_at: Option<DateTime<Utc>>,
}

impl Inner {
    /// Server-assigned timestamps are strictly monotonic: one write path,
    /// ties broken by bumping a microsecond past the previous assignment.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let mut ts = Utc::now();
        if let Some(last) = self.last_assigned_at {
            if ts <= last {
                ts = last + Duration::microseconds(1);
            }
        }
        self.last_assigned_at = Some(ts);
        ts
    }
}

/// In-memory record store
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages, across all conversations
    pub fn message_count(&self) -> usize {
        self.lock().messages.len()
    }

    /// Number of stored conversations
    pub fn conversation_count(&self) -> usize {
        self.lock().conversations.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a test thread panicked mid-write; the data is
        // still consistent for reads.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConversationStore for InMemoryStore {
    fn conversations_with(&self, user_id: Uuid) -> Result<Vec<Conversation>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .conversations
            .iter()
            .filter(|c| c.has_participant(user_id))
            .cloned()
            .collect())
    }

    fn create_conversation(&self, draft: &ConversationDraft) -> Result<Conversation, StoreError> {
        let mut inner = self.lock();
        let conversation = Conversation {
            id: Uuid::new_v4(),
            participant_a: draft.participant_a,
            participant_b: draft.participant_b,
            origin_listing_id: draft.origin_listing_id,
            created_at: inner.next_timestamp(),
        };
        inner.conversations.push(conversation.clone());
        Ok(conversation)
    }

    fn messages_in(&self, conversation_id: Uuid) -> Result<Vec<ChatMessage>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    fn append_message(&self, draft: &MessageDraft) -> Result<ChatMessage, StoreError> {
        let mut inner = self.lock();
        let conversation = inner
            .conversations
            .iter()
            .find(|c| c.id == draft.conversation_id)
            .cloned()
            .ok_or_else(|| StoreError::rejected("unknown conversation"))?;
        if !conversation.has_participant(draft.sender_id) {
            return Err(StoreError::rejected("sender is not a participant"));
        }
        if draft.text.trim().is_empty() {
            return Err(StoreError::rejected("message text is empty"));
        }

        let message = ChatMessage {
            id: Uuid::new_v4(),
            conversation_id: draft.conversation_id,
            sender_id: draft.sender_id,
            text: draft.text.clone(),
            created_at: inner.next_timestamp(),
        };
        inner.messages.push(message.clone());

        // Fan out to live feeds on this conversation, pruning released ones
        inner.feeds.retain(|(conv_id, sender)| {
            if sender.is_stopped() {
                return false;
            }
            if *conv_id == draft.conversation_id {
                return sender.send(message.clone());
            }
            true
        });

        Ok(message)
    }

    fn watch_messages(&self, conversation_id: Uuid) -> Result<MessageFeed, StoreError> {
        let (sender, feed) = MessageFeed::channel();
        sender.status(crate::shared::messaging::FeedStatus::Connected);
        self.lock().feeds.push((conversation_id, sender));
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(a: Uuid, b: Uuid) -> ConversationDraft {
        ConversationDraft {
            participant_a: a,
            participant_b: b,
            origin_listing_id: None,
        }
    }

    #[test]
    fn test_store_assigns_id_and_timestamp() {
        let store = InMemoryStore::new();
        let conv = store
            .create_conversation(&draft(Uuid::new_v4(), Uuid::new_v4()))
            .unwrap();
        assert!(!conv.id.is_nil());
    }

    #[test]
    fn test_conversations_with_matches_either_role() {
        let store = InMemoryStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.create_conversation(&draft(a, b)).unwrap();

        assert_eq!(store.conversations_with(a).unwrap().len(), 1);
        assert_eq!(store.conversations_with(b).unwrap().len(), 1);
        assert!(store.conversations_with(Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn test_append_rejects_outside_sender() {
        let store = InMemoryStore::new();
        let conv = store
            .create_conversation(&draft(Uuid::new_v4(), Uuid::new_v4()))
            .unwrap();
        let result = store.append_message(&MessageDraft {
            conversation_id: conv.id,
            sender_id: Uuid::new_v4(),
            text: "hi".to_string(),
        });
        assert!(matches!(result, Err(StoreError::Rejected { .. })));
        assert_eq!(store.message_count(), 0);
    }

    #[test]
    fn test_append_rejects_unknown_conversation() {
        let store = InMemoryStore::new();
        let result = store.append_message(&MessageDraft {
            conversation_id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            text: "hi".to_string(),
        });
        assert!(matches!(result, Err(StoreError::Rejected { .. })));
    }

    #[test]
    fn test_timestamps_strictly_increase() {
        let store = InMemoryStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let conv = store.create_conversation(&draft(a, b)).unwrap();
        for i in 0..5 {
            store
                .append_message(&MessageDraft {
                    conversation_id: conv.id,
                    sender_id: a,
                    text: format!("m{}", i),
                })
                .unwrap();
        }
        let messages = store.messages_in(conv.id).unwrap();
        for pair in messages.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
    }

    #[test]
    fn test_feed_receives_inserts_for_its_conversation_only() {
        let store = InMemoryStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let watched = store.create_conversation(&draft(a, b)).unwrap();
        let other = store.create_conversation(&draft(a, Uuid::new_v4())).unwrap();

        let feed = store.watch_messages(watched.id).unwrap();
        store
            .append_message(&MessageDraft {
                conversation_id: other.id,
                sender_id: a,
                text: "elsewhere".to_string(),
            })
            .unwrap();
        store
            .append_message(&MessageDraft {
                conversation_id: watched.id,
                sender_id: b,
                text: "here".to_string(),
            })
            .unwrap();

        let delivered = feed.drain();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].text, "here");
    }

    #[test]
    fn test_stopped_feed_is_pruned_and_silent() {
        let store = InMemoryStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let conv = store.create_conversation(&draft(a, b)).unwrap();

        let mut feed = store.watch_messages(conv.id).unwrap();
        feed.stop();
        store
            .append_message(&MessageDraft {
                conversation_id: conv.id,
                sender_id: a,
                text: "after stop".to_string(),
            })
            .unwrap();

        assert!(feed.drain().is_empty());
        assert!(store.lock().feeds.is_empty());
    }
}
