//! Listing Wire Types
//!
//! A listing is an item posted for sale. Rows are owned by the hosted store;
//! this client posts new listings and reads existing ones, it never edits a
//! row in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories the post form offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Textbooks,
    Furniture,
    Electronics,
    Clothing,
    Tickets,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl Category {
    /// All categories, in the order the UI shows them
    pub const ALL: [Category; 6] = [
        Category::Textbooks,
        Category::Furniture,
        Category::Electronics,
        Category::Clothing,
        Category::Tickets,
        Category::Other,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::Furniture => "Furniture",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Tickets => "Tickets",
            Category::Other => "Other",
        }
    }
}

/// An item posted for sale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Unique listing ID, assigned by the store
    pub id: Uuid,
    /// User who posted the item
    pub seller_id: Uuid,
    /// Short title shown on cards
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Asking price in cents
    pub price_cents: i64,
    /// Category for browsing
    pub category: Category,
    /// Photo URLs in the store's file bucket
    pub photo_urls: Vec<String>,
    /// Whether the seller marked the item sold
    pub is_sold: bool,
    /// When the listing was posted, assigned by the store
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Price formatted for display ("$12.50")
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// Payload for posting a new listing; id and timestamp are store-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDraft {
    pub seller_id: Uuid,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub category: Category,
    pub photo_urls: Vec<String>,
}

/// Response for listing the listings collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListListingsResponse {
    pub listings: Vec<Listing>,
}

/// A favorite row: one user bookmarking one listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Response for listing a user's favorites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFavoritesResponse {
    pub favorites: Vec<Favorite>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        let listing = Listing {
            id: Uuid::new_v4(),
            seller_id: Uuid::new_v4(),
            title: "Econ 101 textbook".to_string(),
            description: String::new(),
            price_cents: 1250,
            category: Category::Textbooks,
            photo_urls: vec![],
            is_sold: false,
            created_at: Utc::now(),
        };
        assert_eq!(listing.price_label(), "$12.50");
    }

    #[test]
    fn test_price_label_pads_cents() {
        let listing = Listing {
            id: Uuid::new_v4(),
            seller_id: Uuid::new_v4(),
            title: "Lamp".to_string(),
            description: String::new(),
            price_cents: 905,
            category: Category::Furniture,
            photo_urls: vec![],
            is_sold: false,
            created_at: Utc::now(),
        };
        assert_eq!(listing.price_label(), "$9.05");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Textbooks).unwrap();
        assert_eq!(json, "\"textbooks\"");
    }
}
