//! UI Components
//!
//! Reusable pieces shared by the views.

/// Listing card for the browse and favorites grids
pub mod listing_card;

/// Chat message bubble
pub mod message_bubble;

/// Message composer input bar
pub mod input_bar;

/// Conversation list entries
pub mod conversation_list;
