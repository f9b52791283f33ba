//! Wire-level tests for the hosted store client against a mock server.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quadmarket::dm::{ConversationResolver, MessageStream};
use quadmarket::shared::error::{DmError, StoreError};
use quadmarket::shared::messaging::{ChatMessage, Conversation};
use quadmarket::store::{ConversationStore, HostedStore};

/// The store client blocks on its own runtime, so it must run off the test's
/// async executor.
async fn blocking<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

fn conversation(a: Uuid, b: Uuid) -> Conversation {
    Conversation {
        id: Uuid::new_v4(),
        participant_a: a,
        participant_b: b,
        origin_listing_id: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn conversations_are_fetched_for_both_roles() {
    let server = MockServer::start().await;
    let me = Uuid::new_v4();
    let as_a = conversation(me, Uuid::new_v4());
    let as_b = conversation(Uuid::new_v4(), me);

    Mock::given(method("GET"))
        .and(path("/v1/conversations"))
        .and(query_param("participant_a", me.to_string()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "conversations": [as_a] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/conversations"))
        .and(query_param("participant_b", me.to_string()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "conversations": [as_b] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let found = blocking(move || {
        let store = HostedStore::new(uri).unwrap();
        store.conversations_with(me)
    })
    .await
    .unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|c| c.has_participant(me)));
}

#[tokio::test]
async fn resolver_creates_with_the_pair_in_canonical_order() {
    let server = MockServer::start().await;
    // Fixed ids so the sorted order is known: low < high
    let low = Uuid::from_u128(1);
    let high = Uuid::from_u128(2);
    let created = conversation(low, high);

    for role in ["participant_a", "participant_b"] {
        Mock::given(method("GET"))
            .and(path("/v1/conversations"))
            .and(query_param(role, high.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "conversations": [] })),
            )
            .mount(&server)
            .await;
    }
    // The acting user is `high`, but the created row must be sorted
    Mock::given(method("POST"))
        .and(path("/v1/conversations"))
        .and(body_json(json!({
            "participant_a": low,
            "participant_b": high,
            "origin_listing_id": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let resolved = blocking(move || {
        let store = Arc::new(HostedStore::new(uri).unwrap());
        ConversationResolver::new(store).resolve(Some(high), low, None)
    })
    .await
    .unwrap();

    assert_eq!(resolved.id, created.id);
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/listings"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || HostedStore::new(uri).unwrap().listings()).await;

    assert_matches!(result, Err(StoreError::Auth { .. }));
}

#[tokio::test]
async fn server_failure_maps_to_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/listings"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || HostedStore::new(uri).unwrap().listings()).await;

    assert_matches!(result, Err(StoreError::Unavailable { .. }));
}

#[tokio::test]
async fn rejected_write_maps_to_rejected() {
    let server = MockServer::start().await;
    let conv = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path(format!("/v1/conversations/{}/messages", conv)))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("sender is not a participant"),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || {
        let store = Arc::new(HostedStore::new(uri).unwrap());
        MessageStream::new(store).send(conv, Some(Uuid::new_v4()), "hello")
    })
    .await;

    assert_matches!(result, Err(DmError::Store(StoreError::Rejected { .. })));
}

#[tokio::test]
async fn empty_send_never_reaches_the_wire() {
    let server = MockServer::start().await;
    let conv = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path(format!("/v1/conversations/{}/messages", conv)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || {
        let store = Arc::new(HostedStore::new(uri).unwrap());
        MessageStream::new(store).send(conv, Some(Uuid::new_v4()), "   ")
    })
    .await;

    assert_matches!(result, Err(DmError::EmptyMessage));
}

#[tokio::test]
async fn login_token_is_attached_to_later_requests() {
    let server = MockServer::start().await;
    let me = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": me,
            "display_name": "Sam",
            "token": "session-token",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/listings"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "listings": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let listings = blocking(move || {
        let store = HostedStore::new(uri).unwrap();
        let session = store.login("sam@campus.edu", "hunter2").unwrap();
        assert_eq!(session.user_id, me);
        store.listings()
    })
    .await
    .unwrap();

    assert!(listings.is_empty());
}

#[tokio::test]
async fn message_history_is_sorted_even_if_the_store_is_not() {
    let server = MockServer::start().await;
    let conv = Uuid::new_v4();
    let sender = Uuid::new_v4();
    let older = ChatMessage {
        id: Uuid::new_v4(),
        conversation_id: conv,
        sender_id: sender,
        text: "first".to_string(),
        created_at: Utc::now() - chrono::Duration::minutes(5),
    };
    let newer = ChatMessage {
        id: Uuid::new_v4(),
        conversation_id: conv,
        sender_id: sender,
        text: "second".to_string(),
        created_at: Utc::now(),
    };

    Mock::given(method("GET"))
        .and(path(format!("/v1/conversations/{}/messages", conv)))
        .respond_with(
            // Store returns newest first; the client must normalize
            ResponseTemplate::new(200).set_body_json(json!({ "messages": [newer, older] })),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let history = blocking(move || {
        let store = Arc::new(HostedStore::new(uri).unwrap());
        MessageStream::new(store).load(conv)
    })
    .await
    .unwrap();

    let texts: Vec<_> = history.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["first", "second"]);
}
