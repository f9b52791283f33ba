//! Hosted Service HTTP Client
//!
//! Blocking facade over the vendor's REST + SSE API, built the same way the
//! UI consumes it: every call runs to completion on the caller's (worker)
//! thread, using an owned tokio runtime for the async reqwest client. The
//! bearer token from the current session is attached to every request.
//!
//! Each user action triggers at most one request; failures map onto
//! `StoreError` and surface to the caller without retries.

use std::sync::{Arc, Mutex};
use std::thread;

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::shared::error::StoreError;
use crate::shared::listing::{
    Favorite, ListFavoritesResponse, ListListingsResponse, Listing, ListingDraft,
};
use crate::shared::messaging::conversation::ListConversationsResponse;
use crate::shared::messaging::message::ListMessagesResponse;
use crate::shared::messaging::{
    ChatMessage, Conversation, ConversationDraft, FeedEvent, FeedStatus, MessageDraft,
};
use crate::shared::profile::UserProfile;
use crate::store::feed::{FeedSender, MessageFeed};
use crate::store::ConversationStore;

/// A signed-in identity issued by the vendor's auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub display_name: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    display_name: &'a str,
    password: &'a str,
}

/// Client for the hosted record service
#[derive(Debug, Clone)]
pub struct HostedStore {
    base_url: String,
    client: Client,
    runtime: Arc<Runtime>,
    token: Arc<Mutex<Option<String>>>,
}

impl HostedStore {
    /// Create a client for the service at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreError> {
        let runtime = Runtime::new()
            .map_err(|e| StoreError::unavailable(format!("failed to create runtime: {}", e)))?;
        Ok(Self {
            base_url: base_url.into(),
            client: Client::new(),
            runtime: Arc::new(runtime),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Full URL for an API path
    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn current_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = token;
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.current_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sign in; the returned session's token is attached to later requests
    pub fn login(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        let url = self.api_url("/v1/auth/login");
        let session: Session = self.runtime.block_on(async {
            let response = self
                .client
                .post(&url)
                .json(&LoginRequest { email, password })
                .send()
                .await?;
            check_status(response).await?.json().await.map_err(|e| {
                StoreError::unavailable(format!("failed to parse login response: {}", e))
            })
        })?;
        self.set_token(Some(session.token.clone()));
        Ok(session)
    }

    /// Create an account; signs the new user in on success
    pub fn signup(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<Session, StoreError> {
        let url = self.api_url("/v1/auth/signup");
        let session: Session = self.runtime.block_on(async {
            let response = self
                .client
                .post(&url)
                .json(&SignupRequest {
                    email,
                    display_name,
                    password,
                })
                .send()
                .await?;
            check_status(response).await?.json().await.map_err(|e| {
                StoreError::unavailable(format!("failed to parse signup response: {}", e))
            })
        })?;
        self.set_token(Some(session.token.clone()));
        Ok(session)
    }

    /// Drop the session token
    pub fn logout(&self) {
        self.set_token(None);
    }

    /// Fetch the whole listings collection; filtering happens client-side
    pub fn listings(&self) -> Result<Vec<Listing>, StoreError> {
        let url = self.api_url("/v1/listings");
        self.runtime.block_on(async {
            let response = self.authed(self.client.get(&url)).send().await?;
            let body: ListListingsResponse = parse_json(check_status(response).await?).await?;
            Ok(body.listings)
        })
    }

    /// Post a new listing
    pub fn create_listing(&self, draft: &ListingDraft) -> Result<Listing, StoreError> {
        let url = self.api_url("/v1/listings");
        self.runtime.block_on(async {
            let response = self.authed(self.client.post(&url)).json(draft).send().await?;
            parse_json(check_status(response).await?).await
        })
    }

    /// A user's favorites
    pub fn favorites_of(&self, user_id: Uuid) -> Result<Vec<Favorite>, StoreError> {
        let url = self.api_url(&format!("/v1/users/{}/favorites", user_id));
        self.runtime.block_on(async {
            let response = self.authed(self.client.get(&url)).send().await?;
            let body: ListFavoritesResponse = parse_json(check_status(response).await?).await?;
            Ok(body.favorites)
        })
    }

    /// Bookmark a listing
    pub fn add_favorite(&self, user_id: Uuid, listing_id: Uuid) -> Result<(), StoreError> {
        let url = self.api_url(&format!("/v1/users/{}/favorites/{}", user_id, listing_id));
        self.runtime.block_on(async {
            let response = self.authed(self.client.put(&url)).send().await?;
            check_status(response).await?;
            Ok(())
        })
    }

    /// Remove a bookmark
    pub fn remove_favorite(&self, user_id: Uuid, listing_id: Uuid) -> Result<(), StoreError> {
        let url = self.api_url(&format!("/v1/users/{}/favorites/{}", user_id, listing_id));
        self.runtime.block_on(async {
            let response = self.authed(self.client.delete(&url)).send().await?;
            check_status(response).await?;
            Ok(())
        })
    }

    /// Look up a profile; `None` when the profile store has no row
    pub fn profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let url = self.api_url(&format!("/v1/profiles/{}", user_id));
        self.runtime.block_on(async {
            let response = self.authed(self.client.get(&url)).send().await?;
            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let profile: UserProfile = parse_json(check_status(response).await?).await?;
            Ok(Some(profile))
        })
    }
}

impl ConversationStore for HostedStore {
    fn conversations_with(&self, user_id: Uuid) -> Result<Vec<Conversation>, StoreError> {
        // The schema is directional, so one query per role
        let mut conversations = Vec::new();
        for role in ["participant_a", "participant_b"] {
            let url = self.api_url(&format!("/v1/conversations?{}={}", role, user_id));
            let batch: ListConversationsResponse = self.runtime.block_on(async {
                let response = self.authed(self.client.get(&url)).send().await?;
                parse_json(check_status(response).await?).await
            })?;
            conversations.extend(batch.conversations);
        }
        Ok(conversations)
    }

    fn create_conversation(&self, draft: &ConversationDraft) -> Result<Conversation, StoreError> {
        let url = self.api_url("/v1/conversations");
        self.runtime.block_on(async {
            let response = self.authed(self.client.post(&url)).json(draft).send().await?;
            parse_json(check_status(response).await?).await
        })
    }

    fn messages_in(&self, conversation_id: Uuid) -> Result<Vec<ChatMessage>, StoreError> {
        let url = self.api_url(&format!("/v1/conversations/{}/messages", conversation_id));
        self.runtime.block_on(async {
            let response = self.authed(self.client.get(&url)).send().await?;
            let body: ListMessagesResponse = parse_json(check_status(response).await?).await?;
            Ok(body.messages)
        })
    }

    fn append_message(&self, draft: &MessageDraft) -> Result<ChatMessage, StoreError> {
        let url = self.api_url(&format!(
            "/v1/conversations/{}/messages",
            draft.conversation_id
        ));
        self.runtime.block_on(async {
            let response = self.authed(self.client.post(&url)).json(draft).send().await?;
            parse_json(check_status(response).await?).await
        })
    }

    fn watch_messages(&self, conversation_id: Uuid) -> Result<MessageFeed, StoreError> {
        let url = self.api_url(&format!("/v1/conversations/{}/feed", conversation_id));
        let token = self.current_token();
        let (sender, feed) = MessageFeed::channel();
        let worker = thread::spawn(move || run_feed(url, token, sender));
        Ok(feed.with_worker(worker))
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, StoreError> {
    response
        .json()
        .await
        .map_err(|e| StoreError::unavailable(format!("failed to parse response: {}", e)))
}

/// Map a response's status onto the error taxonomy
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| status.to_string());
    match status.as_u16() {
        401 | 403 => Err(StoreError::auth(format!("{}: {}", status, body))),
        400..=499 => Err(StoreError::rejected(format!("{}: {}", status, body))),
        _ => Err(StoreError::unavailable(format!("{}: {}", status, body))),
    }
}

/// SSE worker for one conversation's change feed.
///
/// Parses `data:` lines into `FeedEvent`s and delivers the inserted messages
/// until the stream closes, the request fails, or the consumer stops the
/// feed. There is no reconnect loop: a lost feed reports `Error` and the view
/// retries by reopening the conversation.
fn run_feed(url: String, token: Option<String>, sender: FeedSender) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            sender.status(FeedStatus::Error(format!("runtime: {}", e)));
            return;
        }
    };

    rt.block_on(async move {
        sender.status(FeedStatus::Connecting);

        let client = Client::new();
        let mut request = client.get(&url).header("Subscribe", "true");
        if let Some(token) = token.as_ref() {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("feed request failed for {}: {}", url, e);
                sender.status(FeedStatus::Error(format!("network: {}", e)));
                return;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("feed refused for {}: {}", url, response.status());
            sender.status(FeedStatus::Error(format!("http: {}", response.status())));
            return;
        }

        tracing::info!("feed established: {}", url);
        sender.status(FeedStatus::Connected);

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();

        while let Some(chunk_result) = stream.next().await {
            if sender.is_stopped() {
                return;
            }

            let chunk = match chunk_result {
                Ok(chunk) => chunk,
                Err(e) => {
                    sender.status(FeedStatus::Error(format!("stream: {}", e)));
                    return;
                }
            };

            let chunk_str = match std::str::from_utf8(&chunk) {
                Ok(s) => s,
                Err(e) => {
                    sender.status(FeedStatus::Error(format!("encoding: {}", e)));
                    return;
                }
            };
            buffer.push_str(chunk_str);

            // Process complete lines; SSE comments keep the connection alive
            while let Some(newline_pos) = buffer.find('\n') {
                let line = buffer[..newline_pos].trim_end_matches('\r').to_string();
                buffer.drain(..=newline_pos);

                if line.is_empty() || line.starts_with(':') {
                    continue;
                }

                if let Some(data) = line.strip_prefix("data: ") {
                    match serde_json::from_str::<FeedEvent>(data) {
                        Ok(event) => {
                            if let Some(message) = event.into_message() {
                                tracing::debug!("feed delivered message {}", message.id);
                                if !sender.send(message) {
                                    return;
                                }
                            }
                        }
                        Err(e) => {
                            tracing::warn!("unparseable feed event: {} | {}", e, data);
                        }
                    }
                }
            }
        }

        tracing::info!("feed closed: {}", url);
        sender.status(FeedStatus::Disconnected);
    });
}
