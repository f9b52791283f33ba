//! egui Native Desktop App Module
//!
//! The QuadMarket desktop client. Immediate mode UI over the store client:
//!
//! - **`config`** - server URL resolution (env var, config file, default)
//! - **`auth`** - sign-in/sign-up state and worker calls
//! - **`state`** - central `AppState` with the pending-receiver pattern:
//!   every store call runs on a worker thread and reports back over an mpsc
//!   channel checked once per frame
//! - **`views`** - one render function per screen
//! - **`components`** - listing cards, message bubbles, input bar
//! - **`theme`** - color constants

pub mod auth;
pub mod components;
pub mod config;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use auth::AuthState;
pub use config::Config;
pub use state::{AppState, AppView};
