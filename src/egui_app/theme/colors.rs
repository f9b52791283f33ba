//! Color Constants
//!
//! Campus green-and-cream scheme used across the marketplace and messaging
//! views.

use eframe::egui::Color32;

/// Top navigation bar background - deep green
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1B, 0x3A, 0x2B);

/// Sidebar / conversation list background - dark green
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x24, 0x46, 0x34);

/// Hovered or selected list item - lighter green
pub const SIDEBAR_HOVER: Color32 = Color32::from_rgb(0x33, 0x5C, 0x45);

/// Main content background - off-white
pub const MAIN_BG: Color32 = Color32::from_rgb(0xF7, 0xF5, 0xEF);

/// Card background - white
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFC);

/// Card border - muted sage
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC9, 0xD2, 0xC5);

/// Message bubble, own messages - pale green
pub const BUBBLE_OUTGOING: Color32 = Color32::from_rgb(0xCF, 0xE5, 0xD2);

/// Message bubble, other participant - light gray
pub const BUBBLE_INCOMING: Color32 = Color32::from_rgb(0xEA, 0xE8, 0xE1);

/// Input bar background - light sage
pub const INPUT_BAR_BG: Color32 = Color32::from_rgb(0xE4, 0xE8, 0xDF);

/// Primary text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x22, 0x2A, 0x24);

/// Secondary text - gray-green
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6E, 0x7B, 0x70);

/// Text on dark backgrounds - cream
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xEF, 0xE4);

/// Accent - marigold, used for prices and the favorite star
pub const ACCENT: Color32 = Color32::from_rgb(0xE0, 0xA4, 0x26);

/// Error text - brick red
pub const ERROR: Color32 = Color32::from_rgb(0xB0, 0x3A, 0x2E);

/// Live feed indicator - green
pub const STATUS_LIVE: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Disconnected feed indicator - gray
pub const STATUS_OFFLINE: Color32 = Color32::from_rgb(0x9E, 0x9E, 0x9E);
