//! QuadMarket - Main Library
//!
//! QuadMarket is a campus marketplace desktop client: browse and search
//! listings, post items for sale, favorite items, and direct-message sellers.
//! All data, auth, storage, and realtime delivery are owned by a hosted
//! backend service; this crate is the front-end only.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, error taxonomy, and configuration
//!   - Listings, profiles, conversations, messages, feed events
//! - **`store`** - Client for the hosted record service
//!   - `ConversationStore` seam trait, HTTP client, SSE message feed,
//!     in-memory implementation with the same semantics for tests
//! - **`dm`** - Direct messaging core
//!   - `ConversationResolver` (one thread per unordered user pair) and
//!     `MessageStream` (ordered history kept live by the push feed)
//! - **`market`** - Thin wrappers over the store's marketplace collections
//!   - Listing search (explicit client-side post-filter), posting,
//!     favorites, read-only profile directory
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!
//! # Threading
//!
//! The UI runs single-threaded immediate mode. Store calls run on worker
//! threads and report back over `std::sync::mpsc` channels polled once per
//! frame, so the UI stays responsive while the network is slow or down. The
//! hosted service is the single source of truth; nothing is cached locally
//! beyond what is on screen.

/// Shared types and data structures
pub mod shared;

/// Hosted record store client
pub mod store;

/// Direct messaging core: conversation resolution and live message streams
pub mod dm;

/// Marketplace wrappers: listings, favorites, profiles
pub mod market;

/// egui native desktop app
pub mod egui_app;
