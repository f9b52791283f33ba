//! Property-based tests for pair canonicalization and message ordering
//!
//! Uses proptest to generate random inputs and verify properties

use std::sync::Arc;

use proptest::prelude::*;
use uuid::Uuid;

use quadmarket::dm::{ConversationResolver, MessageStream};
use quadmarket::shared::messaging::pair;
use quadmarket::store::InMemoryStore;

proptest! {
    #[test]
    fn canonical_pair_is_commutative(x in any::<u128>(), y in any::<u128>()) {
        let x = Uuid::from_u128(x);
        let y = Uuid::from_u128(y);
        prop_assert_eq!(pair::canonical(x, y), pair::canonical(y, x));
    }

    #[test]
    fn canonical_pair_is_idempotent(x in any::<u128>(), y in any::<u128>()) {
        let x = Uuid::from_u128(x);
        let y = Uuid::from_u128(y);
        let (low, high) = pair::canonical(x, y);
        prop_assert!(low <= high);
        prop_assert_eq!(pair::canonical(low, high), (low, high));
    }

    #[test]
    fn resolve_creates_one_conversation_per_distinct_pair(
        contacts in prop::collection::vec((0..6u128, 0..6u128), 1..25)
    ) {
        let store = Arc::new(InMemoryStore::new());
        let resolver = ConversationResolver::new(Arc::clone(&store));

        let mut distinct_pairs = std::collections::HashSet::new();
        for (a, b) in contacts {
            if a == b {
                continue;
            }
            let me = Uuid::from_u128(a + 1);
            let other = Uuid::from_u128(b + 1);
            resolver.resolve(Some(me), other, None).unwrap();
            distinct_pairs.insert(pair::canonical(me, other));
        }

        prop_assert_eq!(store.conversation_count(), distinct_pairs.len());
    }

    #[test]
    fn loaded_history_is_always_ascending(
        texts in prop::collection::vec("[a-z]{1,12}", 1..20)
    ) {
        let store = Arc::new(InMemoryStore::new());
        let resolver = ConversationResolver::new(Arc::clone(&store));
        let stream = MessageStream::new(Arc::clone(&store));

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let conv = resolver.resolve(Some(a), b, None).unwrap();

        for (i, text) in texts.iter().enumerate() {
            let sender = if i % 2 == 0 { a } else { b };
            stream.send(conv.id, Some(sender), text).unwrap();
        }

        let history = stream.load(conv.id).unwrap();
        prop_assert_eq!(history.len(), texts.len());
        for window in history.windows(2) {
            prop_assert!(window[0].created_at < window[1].created_at);
        }
        let loaded: Vec<_> = history.iter().map(|m| m.text.clone()).collect();
        prop_assert_eq!(loaded, texts);
    }
}
