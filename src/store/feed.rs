//! Live Message Feed Handle
//!
//! A `MessageFeed` is the consumer half of one per-conversation push
//! subscription: an mpsc receiver for inserted messages, a status channel,
//! and a stop flag shared with the producer. The UI polls it every frame.
//!
//! Stopping is terminal. After `stop()` the handle delivers nothing - not
//! even messages already queued - and the producer side drops the
//! subscription the next time it looks at the flag. Reopening a conversation
//! builds a fresh feed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::shared::messaging::{ChatMessage, FeedStatus};

/// Consumer half of a message subscription
#[derive(Debug)]
pub struct MessageFeed {
    message_rx: Receiver<ChatMessage>,
    status_rx: Receiver<FeedStatus>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

/// Producer half handed to the delivering side (SSE thread or in-memory
/// fan-out)
#[derive(Debug, Clone)]
pub(crate) struct FeedSender {
    message_tx: Sender<ChatMessage>,
    status_tx: Sender<FeedStatus>,
    stop: Arc<AtomicBool>,
}

impl MessageFeed {
    /// Create a connected producer/consumer pair
    pub(crate) fn channel() -> (FeedSender, MessageFeed) {
        let (message_tx, message_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        (
            FeedSender {
                message_tx,
                status_tx,
                stop: Arc::clone(&stop),
            },
            MessageFeed {
                message_rx,
                status_rx,
                stop,
                worker: None,
            },
        )
    }

    /// Attach the worker thread that produces into this feed
    pub(crate) fn with_worker(mut self, worker: JoinHandle<()>) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Drain every message delivered since the last poll (non-blocking).
    ///
    /// Returns nothing once the feed is stopped, regardless of what is still
    /// queued.
    pub fn drain(&self) -> Vec<ChatMessage> {
        if self.is_stopped() {
            return Vec::new();
        }
        let mut messages = Vec::new();
        while let Ok(msg) = self.message_rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Latest status update, if any (non-blocking)
    pub fn poll_status(&self) -> Option<FeedStatus> {
        if self.is_stopped() {
            return None;
        }
        self.status_rx.try_recv().ok()
    }

    /// Release the subscription. Terminal: no further delivery happens.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        // The worker exits on its own once it observes the flag; joining here
        // would block the UI on a network read.
        self.worker = None;
    }

    /// Whether the feed has been released
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

impl Drop for MessageFeed {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl FeedSender {
    /// Deliver one message. Returns false once the consumer released the
    /// feed or dropped it, so producers can prune the subscription.
    pub fn send(&self, message: ChatMessage) -> bool {
        if self.is_stopped() {
            return false;
        }
        self.message_tx.send(message).is_ok()
    }

    /// Report a status change; delivery failures are ignored
    pub fn status(&self, status: FeedStatus) {
        if !self.is_stopped() {
            let _ = self.status_tx.send(status);
        }
    }

    /// Whether the consumer has released the feed
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}
