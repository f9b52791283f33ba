//! Direct Messaging Core
//!
//! The one piece of this application with real invariants:
//!
//! - `ConversationResolver` maps an unordered pair of users onto exactly one
//!   conversation, creating it on first contact.
//! - `MessageStream` presents a conversation's ordered history and keeps it
//!   current from the store's push feed.
//!
//! Both are written against the `store::ConversationStore` seam and take the
//! acting identity as an explicit parameter; nothing here reads ambient
//! session state.

/// Find-or-create conversation resolution
pub mod resolver;

/// Ordered, live message history
pub mod stream;

pub use resolver::ConversationResolver;
pub use stream::{LiveThread, MessageStream, ThreadPhase};
