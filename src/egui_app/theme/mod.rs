//! UI Theme
//!
//! Color constants and small text helpers shared by all views.

pub mod colors;
pub mod styles;
