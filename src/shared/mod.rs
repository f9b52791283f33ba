//! Shared Module
//!
//! Types that cross module boundaries: wire types for the hosted store's
//! collections, the error taxonomy, and application configuration. All wire
//! types are serde-serializable in the shape the hosted service produces.

/// Error taxonomy
pub mod error;

/// Application configuration
pub mod config;

/// Listing wire types
pub mod listing;

/// Profile-store wire types
pub mod profile;

/// Direct-messaging types (conversations, messages, feed events)
pub mod messaging;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{DmError, StoreError};
pub use listing::{Listing, ListingDraft};
pub use messaging::{ChatMessage, Conversation, ConversationDraft, MessageDraft};
pub use profile::UserProfile;
