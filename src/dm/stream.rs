//! Live Message Stream
//!
//! Presents the ordered message history of one conversation and keeps it
//! current. `MessageStream` is the stateless operations surface (load, open,
//! send); `LiveThread` is the per-view state: the ordered list, the seen-id
//! set guarding against load/push double delivery, and the feed handle.
//!
//! A view's lifecycle is `Closed -> Loading -> Live -> Closed`. There is no
//! error recovery inside a phase: a failed open surfaces its error and the
//! view retries by reopening.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::shared::error::DmError;
use crate::shared::messaging::{ChatMessage, FeedStatus, MessageDraft};
use crate::store::{ConversationStore, MessageFeed};

/// Lifecycle phase of one conversation view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPhase {
    Closed,
    Loading,
    Live,
}

/// Operations on a conversation's message history
pub struct MessageStream<S: ConversationStore> {
    store: Arc<S>,
}

impl<S: ConversationStore> MessageStream<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// One-shot fetch of a conversation's history, ascending by creation
    /// time. The sort is applied here rather than trusted from the store.
    pub fn load(&self, conversation_id: Uuid) -> Result<Vec<ChatMessage>, DmError> {
        let mut messages = self.store.messages_in(conversation_id)?;
        sort_by_creation(&mut messages);
        Ok(messages)
    }

    /// Load history and attach the push feed, producing a live thread.
    ///
    /// The feed is opened before the history fetch so an insert landing
    /// between the two is caught by the feed; the seen-id set drops it if the
    /// fetch already returned it.
    pub fn open(&self, conversation_id: Uuid) -> Result<LiveThread, DmError> {
        let feed = self.store.watch_messages(conversation_id)?;
        let messages = self.load(conversation_id)?;
        let seen = messages.iter().map(|m| m.id).collect();
        Ok(LiveThread {
            conversation_id,
            messages,
            seen,
            feed,
            phase: ThreadPhase::Live,
        })
    }

    /// Send a message into a conversation.
    ///
    /// Returns as soon as the insert is acknowledged; the sender sees the
    /// message through the same push feed as everyone else. There is no
    /// optimistic local insert.
    pub fn send(
        &self,
        conversation_id: Uuid,
        sender: Option<Uuid>,
        text: &str,
    ) -> Result<(), DmError> {
        let sender_id = sender.ok_or(DmError::NotAuthenticated)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DmError::EmptyMessage);
        }
        self.store.append_message(&MessageDraft {
            conversation_id,
            sender_id,
            text: trimmed.to_string(),
        })?;
        Ok(())
    }
}

/// One open conversation view: ordered messages plus the live feed
pub struct LiveThread {
    conversation_id: Uuid,
    messages: Vec<ChatMessage>,
    seen: HashSet<Uuid>,
    feed: MessageFeed,
    phase: ThreadPhase,
}

impl LiveThread {
    /// The conversation this thread shows
    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    /// Messages in creation order, including live-appended ones
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> ThreadPhase {
        self.phase
    }

    /// Drain the push feed, appending unseen messages in arrival order.
    ///
    /// Returns how many messages were appended. Messages already present
    /// from the initial load (or a duplicate push) are dropped by id.
    pub fn poll(&mut self) -> usize {
        if self.phase != ThreadPhase::Live {
            return 0;
        }
        let mut appended = 0;
        for message in self.feed.drain() {
            if self.seen.insert(message.id) {
                self.messages.push(message);
                appended += 1;
            }
        }
        appended
    }

    /// Latest feed status update, if any
    pub fn feed_status(&self) -> Option<FeedStatus> {
        self.feed.poll_status()
    }

    /// Close the view and release the subscription. Terminal.
    pub fn close(&mut self) {
        self.feed.stop();
        self.phase = ThreadPhase::Closed;
    }
}

fn sort_by_creation(messages: &mut [ChatMessage]) {
    // Stable: equal timestamps keep the store's return order
    messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
}
