//! Listing Search
//!
//! The browse view fetches the whole listings collection and filters it
//! here, client-side. Matching is case-insensitive substring over title and
//! description; results come back newest first.

use crate::shared::listing::{Category, Listing};

/// Browse filter state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Free-text needle; empty matches everything
    pub text: String,
    /// Restrict to one category
    pub category: Option<Category>,
    /// Upper price bound in cents, inclusive
    pub max_price_cents: Option<i64>,
    /// Whether sold items stay visible
    pub include_sold: bool,
}

impl SearchQuery {
    fn matches(&self, listing: &Listing) -> bool {
        if !self.include_sold && listing.is_sold {
            return false;
        }
        if let Some(category) = self.category {
            if listing.category != category {
                return false;
            }
        }
        if let Some(max) = self.max_price_cents {
            if listing.price_cents > max {
                return false;
            }
        }
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        listing.title.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle)
    }
}

/// Filter fetched listings against a query, newest first
pub fn search_listings<'a>(all: &'a [Listing], query: &SearchQuery) -> Vec<&'a Listing> {
    let mut matched: Vec<&Listing> = all.iter().filter(|l| query.matches(l)).collect();
    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn listing(title: &str, category: Category, price_cents: i64, age_minutes: i64) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            seller_id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("{} in decent shape", title),
            price_cents,
            category,
            photo_urls: vec![],
            is_sold: false,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn test_empty_query_matches_all_unsold() {
        let all = vec![
            listing("Desk", Category::Furniture, 4000, 10),
            listing("Calc textbook", Category::Textbooks, 1500, 5),
        ];
        let results = search_listings(&all, &SearchQuery::default());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let all = vec![
            listing("Mini Fridge", Category::Electronics, 6000, 1),
            listing("Desk", Category::Furniture, 4000, 2),
        ];
        let query = SearchQuery {
            text: "fridge".to_string(),
            ..Default::default()
        };
        let results = search_listings(&all, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Mini Fridge");
    }

    #[test]
    fn test_text_matches_description_too() {
        let all = vec![listing("Desk", Category::Furniture, 4000, 1)];
        let query = SearchQuery {
            text: "decent shape".to_string(),
            ..Default::default()
        };
        assert_eq!(search_listings(&all, &query).len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let all = vec![
            listing("Desk", Category::Furniture, 4000, 1),
            listing("Calc textbook", Category::Textbooks, 1500, 2),
        ];
        let query = SearchQuery {
            category: Some(Category::Textbooks),
            ..Default::default()
        };
        let results = search_listings(&all, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, Category::Textbooks);
    }

    #[test]
    fn test_price_bound_is_inclusive() {
        let all = vec![
            listing("Desk", Category::Furniture, 4000, 1),
            listing("Lamp", Category::Furniture, 1200, 2),
        ];
        let query = SearchQuery {
            max_price_cents: Some(1200),
            ..Default::default()
        };
        let results = search_listings(&all, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Lamp");
    }

    #[test]
    fn test_sold_listings_hidden_by_default() {
        let mut sold = listing("Desk", Category::Furniture, 4000, 1);
        sold.is_sold = true;
        let all = vec![sold, listing("Lamp", Category::Furniture, 1200, 2)];

        assert_eq!(search_listings(&all, &SearchQuery::default()).len(), 1);

        let query = SearchQuery {
            include_sold: true,
            ..Default::default()
        };
        assert_eq!(search_listings(&all, &query).len(), 2);
    }

    #[test]
    fn test_results_newest_first() {
        let all = vec![
            listing("Older", Category::Other, 100, 60),
            listing("Newest", Category::Other, 100, 1),
            listing("Middle", Category::Other, 100, 30),
        ];
        let titles: Vec<_> = search_listings(&all, &SearchQuery::default())
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(titles, ["Newest", "Middle", "Older"]);
    }
}
