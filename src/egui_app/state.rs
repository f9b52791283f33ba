//! Application State
//!
//! Central state for the desktop client. Every store call runs on a worker
//! thread and reports back through an mpsc receiver held here; `tick()` is
//! called once per frame to collect results, keep the open message thread
//! current, and clear loading flags. The UI thread never blocks on the
//! network.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use uuid::Uuid;

use crate::dm::{ConversationResolver, LiveThread, MessageStream, ThreadPhase};
use crate::market::{FavoriteSet, ProfileDirectory, SearchQuery};
use crate::shared::error::{DmError, StoreError};
use crate::shared::listing::{Category, Favorite, Listing, ListingDraft};
use crate::shared::messaging::{Conversation, FeedStatus};
use crate::shared::profile::UserProfile;
use crate::store::{ConversationStore, HostedStore, Session};

use super::auth::{self, AuthState};
use super::config::Config;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Browse,
    Favorites,
    Post,
    Messages,
}

/// Post-form state
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub price_text: String,
    pub category: Category,
    pub error: Option<String>,
}

impl PostForm {
    /// Validate the form into a draft for the signed-in seller
    pub fn to_draft(&self, seller_id: Uuid) -> Result<ListingDraft, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let price_cents = parse_price_cents(&self.price_text)?;
        Ok(ListingDraft {
            seller_id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            price_cents,
            category: self.category,
            photo_urls: Vec::new(),
        })
    }
}

/// Parse "12", "12.5", "12.50" into cents
pub fn parse_price_cents(text: &str) -> Result<i64, String> {
    let text = text.trim().trim_start_matches('$');
    if text.is_empty() {
        return Err("Price is required".to_string());
    }
    if text.starts_with('-') {
        return Err("Price cannot be negative".to_string());
    }
    let (dollars, cents) = match text.split_once('.') {
        None => (text, "0"),
        Some((d, c)) => (d, c),
    };
    let dollars: i64 = dollars
        .parse()
        .map_err(|_| format!("Invalid price: {}", text))?;
    if cents.len() > 2 || cents.chars().any(|c| !c.is_ascii_digit()) {
        return Err(format!("Invalid price: {}", text));
    }
    let cents: i64 = if cents.is_empty() {
        0
    } else {
        let parsed: i64 = cents.parse().map_err(|_| format!("Invalid price: {}", text))?;
        if cents.len() == 1 {
            parsed * 10
        } else {
            parsed
        }
    };
    Ok(dollars * 100 + cents)
}

type ProfileFetch = (Uuid, Result<Option<UserProfile>, StoreError>);

/// The main state for the desktop client
pub struct AppState {
    pub config: Config,
    pub store: Arc<HostedStore>,
    pub auth: AuthState,
    pub view: AppView,

    /// Fetched listings collection; filtering happens client-side
    pub listings: Vec<Listing>,
    pub query: SearchQuery,
    pub favorites: FavoriteSet,
    pub profiles: ProfileDirectory,
    pub selected_listing_id: Option<Uuid>,
    pub post_form: PostForm,

    /// Conversations the signed-in user is part of
    pub conversations: Vec<Conversation>,
    /// The one open conversation view, if any
    pub open_thread: Option<LiveThread>,
    pub message_input: String,
    pub feed_status: Option<FeedStatus>,

    /// Loading flags
    pub is_loading_listings: bool,
    pub is_loading_conversations: bool,
    pub is_posting_listing: bool,
    pub is_sending_message: bool,
    pub is_opening_thread: bool,

    /// Transient error shown in the active view
    pub ui_error: Option<String>,

    // Pending async operation receivers
    pending_auth: Option<Receiver<Result<Session, String>>>,
    pending_listings: Option<Receiver<Result<Vec<Listing>, StoreError>>>,
    pending_post: Option<Receiver<Result<Listing, StoreError>>>,
    pending_favorites: Option<Receiver<Result<Vec<Favorite>, StoreError>>>,
    pending_favorite_toggle: Option<(Uuid, bool, Receiver<Result<(), StoreError>>)>,
    pending_conversations: Option<Receiver<Result<Vec<Conversation>, StoreError>>>,
    pending_open_thread: Option<Receiver<Result<(Conversation, LiveThread), DmError>>>,
    pending_send: Option<Receiver<Result<(), DmError>>>,
    profile_tx: Sender<ProfileFetch>,
    profile_rx: Receiver<ProfileFetch>,
}

impl AppState {
    /// Build state for the configured service
    pub fn try_new(config: Config) -> Result<Self, StoreError> {
        let store = Arc::new(HostedStore::new(config.api_url())?);
        let (profile_tx, profile_rx) = mpsc::channel();
        Ok(Self {
            config,
            store,
            auth: AuthState::new(),
            view: AppView::Browse,
            listings: Vec::new(),
            query: SearchQuery::default(),
            favorites: FavoriteSet::default(),
            profiles: ProfileDirectory::new(),
            selected_listing_id: None,
            post_form: PostForm::default(),
            conversations: Vec::new(),
            open_thread: None,
            message_input: String::new(),
            feed_status: None,
            is_loading_listings: false,
            is_loading_conversations: false,
            is_posting_listing: false,
            is_sending_message: false,
            is_opening_thread: false,
            ui_error: None,
            pending_auth: None,
            pending_listings: None,
            pending_post: None,
            pending_favorites: None,
            pending_favorite_toggle: None,
            pending_conversations: None,
            pending_open_thread: None,
            pending_send: None,
            profile_tx,
            profile_rx,
        })
    }

    /// Per-frame upkeep: collect worker results and drain the open feed
    pub fn tick(&mut self) {
        self.check_pending_operations();
        if let Some(thread) = &mut self.open_thread {
            thread.poll();
            if let Some(status) = thread.feed_status() {
                self.feed_status = Some(status);
            }
        }
    }

    /// Start a sign-in or sign-up from the auth form
    pub fn start_auth(&mut self) {
        if self.auth.loading {
            return;
        }
        self.auth.loading = true;
        self.auth.clear_error();

        let store = Arc::clone(&self.store);
        let mode = self.auth.mode;
        let email = self.auth.email.clone();
        let password = self.auth.password.clone();
        let display_name = self.auth.display_name.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match mode {
                super::auth::AuthMode::SignIn => auth::login(&store, &email, &password),
                super::auth::AuthMode::SignUp => {
                    auth::signup(&store, &email, &display_name, &password)
                }
            };
            let _ = tx.send(result);
        });
        self.pending_auth = Some(rx);
    }

    /// Sign out and reset to the auth view
    pub fn sign_out(&mut self) {
        self.close_thread();
        let store = Arc::clone(&self.store);
        self.auth.sign_out(&store);
        self.conversations.clear();
        self.favorites = FavoriteSet::default();
        self.view = AppView::Browse;
    }

    /// Refresh the listings collection
    pub fn load_listings(&mut self) {
        if self.is_loading_listings {
            return;
        }
        self.is_loading_listings = true;
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(store.listings());
        });
        self.pending_listings = Some(rx);
    }

    /// Refresh the signed-in user's favorites
    pub fn load_favorites(&mut self) {
        let Some(me) = self.auth.current_user() else {
            return;
        };
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(store.favorites_of(me));
        });
        self.pending_favorites = Some(rx);
    }

    /// Refresh the conversation list
    pub fn load_conversations(&mut self) {
        let Some(me) = self.auth.current_user() else {
            return;
        };
        if self.is_loading_conversations {
            return;
        }
        self.is_loading_conversations = true;
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(store.conversations_with(me));
        });
        self.pending_conversations = Some(rx);
    }

    /// Submit the post form
    pub fn submit_post(&mut self) {
        let Some(me) = self.auth.current_user() else {
            self.post_form.error = Some("Sign in to post".to_string());
            return;
        };
        if self.is_posting_listing {
            return;
        }
        let draft = match self.post_form.to_draft(me) {
            Ok(draft) => draft,
            Err(e) => {
                self.post_form.error = Some(e);
                return;
            }
        };
        self.post_form.error = None;
        self.is_posting_listing = true;
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(store.create_listing(&draft));
        });
        self.pending_post = Some(rx);
    }

    /// Flip a listing's favorite state
    pub fn toggle_favorite(&mut self, listing_id: Uuid) {
        let Some(me) = self.auth.current_user() else {
            return;
        };
        if self.pending_favorite_toggle.is_some() {
            return;
        }
        let adding = !self.favorites.contains(listing_id);
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = if adding {
                store.add_favorite(me, listing_id)
            } else {
                store.remove_favorite(me, listing_id)
            };
            let _ = tx.send(result);
        });
        self.pending_favorite_toggle = Some((listing_id, adding, rx));
    }

    /// "Message seller": resolve the conversation for this pair and open it
    pub fn message_seller(&mut self, seller_id: Uuid, origin_listing: Option<Uuid>) {
        let me = self.auth.current_user();
        self.open_thread_for(me, seller_id, origin_listing);
        self.view = AppView::Messages;
    }

    /// Open an existing conversation from the list
    pub fn open_conversation(&mut self, conversation: &Conversation) {
        let me = self.auth.current_user();
        let Some(other) = me.and_then(|me| conversation.other_participant(me)) else {
            return;
        };
        self.open_thread_for(me, other, None);
    }

    fn open_thread_for(&mut self, me: Option<Uuid>, other: Uuid, origin_listing: Option<Uuid>) {
        self.close_thread();
        self.is_opening_thread = true;
        self.ui_error = None;
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let resolver = ConversationResolver::new(Arc::clone(&store));
            let stream = MessageStream::new(store);
            let result = resolver
                .resolve(me, other, origin_listing)
                .and_then(|conv| stream.open(conv.id).map(|thread| (conv, thread)));
            let _ = tx.send(result);
        });
        self.pending_open_thread = Some(rx);
    }

    /// Send the composed message into the open thread
    pub fn send_message(&mut self) {
        let Some(thread) = &self.open_thread else {
            return;
        };
        if self.is_sending_message {
            return;
        }
        let conversation_id = thread.conversation_id();
        let me = self.auth.current_user();
        let text = std::mem::take(&mut self.message_input);
        self.is_sending_message = true;
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stream = MessageStream::new(store);
            let _ = tx.send(stream.send(conversation_id, me, &text));
        });
        self.pending_send = Some(rx);
    }

    /// Lifecycle phase of the message view: `Closed` with nothing open,
    /// `Loading` while the resolve/open worker runs, `Live` once the thread
    /// is attached
    pub fn thread_phase(&self) -> ThreadPhase {
        if self.is_opening_thread {
            ThreadPhase::Loading
        } else if let Some(thread) = &self.open_thread {
            thread.phase()
        } else {
            ThreadPhase::Closed
        }
    }

    /// Release the open thread's subscription
    pub fn close_thread(&mut self) {
        if let Some(thread) = &mut self.open_thread {
            thread.close();
        }
        self.open_thread = None;
        self.feed_status = None;
        self.message_input.clear();
    }

    /// Queue a profile fetch if this user is not cached yet
    pub fn ensure_profile(&mut self, user_id: Uuid) {
        if self.profiles.request(user_id) {
            let store = Arc::clone(&self.store);
            let tx = self.profile_tx.clone();
            thread::spawn(move || {
                let _ = tx.send((user_id, store.profile(user_id)));
            });
        }
    }

    /// The listing currently shown in the detail view
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.selected_listing_id
            .and_then(|id| self.listings.iter().find(|l| l.id == id))
    }

    /// Check for pending async operation results
    fn check_pending_operations(&mut self) {
        if let Some(ref rx) = self.pending_auth {
            if let Ok(result) = rx.try_recv() {
                self.pending_auth = None;
                self.auth.loading = false;
                match result {
                    Ok(session) => {
                        tracing::info!("signed in as {}", session.user_id);
                        self.auth.session = Some(session);
                        self.auth.password.clear();
                        self.load_listings();
                        self.load_favorites();
                        self.load_conversations();
                    }
                    Err(e) => self.auth.set_error(e),
                }
            }
        }

        if let Some(ref rx) = self.pending_listings {
            if let Ok(result) = rx.try_recv() {
                self.pending_listings = None;
                self.is_loading_listings = false;
                match result {
                    Ok(listings) => self.listings = listings,
                    Err(e) => {
                        tracing::error!("failed to load listings: {}", e);
                        self.ui_error = Some(format!("Failed to load listings: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_post {
            if let Ok(result) = rx.try_recv() {
                self.pending_post = None;
                self.is_posting_listing = false;
                match result {
                    Ok(listing) => {
                        self.listings.push(listing);
                        self.post_form = PostForm::default();
                        self.view = AppView::Browse;
                    }
                    Err(e) => self.post_form.error = Some(format!("Posting failed: {}", e)),
                }
            }
        }

        if let Some(ref rx) = self.pending_favorites {
            if let Ok(result) = rx.try_recv() {
                self.pending_favorites = None;
                match result {
                    Ok(rows) => self.favorites = FavoriteSet::from_rows(&rows),
                    Err(e) => tracing::error!("failed to load favorites: {}", e),
                }
            }
        }

        if let Some((listing_id, adding, ref rx)) = self.pending_favorite_toggle {
            if let Ok(result) = rx.try_recv() {
                self.pending_favorite_toggle = None;
                match result {
                    Ok(()) => {
                        if adding {
                            self.favorites.insert(listing_id);
                        } else {
                            self.favorites.remove(listing_id);
                        }
                    }
                    Err(e) => {
                        tracing::error!("favorite toggle failed: {}", e);
                        self.ui_error = Some(format!("Favorite update failed: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_conversations {
            if let Ok(result) = rx.try_recv() {
                self.pending_conversations = None;
                self.is_loading_conversations = false;
                match result {
                    Ok(conversations) => self.conversations = conversations,
                    Err(e) => {
                        tracing::error!("failed to load conversations: {}", e);
                        self.ui_error = Some(format!("Failed to load conversations: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_open_thread {
            if let Ok(result) = rx.try_recv() {
                self.pending_open_thread = None;
                self.is_opening_thread = false;
                match result {
                    Ok((conversation, thread)) => {
                        if !self.conversations.iter().any(|c| c.id == conversation.id) {
                            self.conversations.push(conversation);
                        }
                        self.open_thread = Some(thread);
                    }
                    Err(e) => {
                        tracing::error!("failed to open conversation: {}", e);
                        self.ui_error = Some(format!("Failed to open conversation: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_send {
            if let Ok(result) = rx.try_recv() {
                self.pending_send = None;
                self.is_sending_message = false;
                if let Err(e) = result {
                    tracing::error!("send failed: {}", e);
                    self.ui_error = Some(format!("Send failed: {}", e));
                }
                // On success nothing to do: the message arrives via the feed
            }
        }

        while let Ok((user_id, result)) = self.profile_rx.try_recv() {
            match result {
                Ok(profile) => self.profiles.resolve(user_id, profile),
                Err(e) => {
                    tracing::warn!("profile fetch failed for {}: {}", user_id, e);
                    self.profiles.resolve(user_id, None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_cents() {
        assert_eq!(parse_price_cents("12"), Ok(1200));
        assert_eq!(parse_price_cents("12.5"), Ok(1250));
        assert_eq!(parse_price_cents("12.50"), Ok(1250));
        assert_eq!(parse_price_cents("$9.05"), Ok(905));
        assert_eq!(parse_price_cents("0.99"), Ok(99));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(parse_price_cents("").is_err());
        assert!(parse_price_cents("abc").is_err());
        assert!(parse_price_cents("1.234").is_err());
        assert!(parse_price_cents("-3").is_err());
        assert!(parse_price_cents("1.x").is_err());
    }

    #[test]
    fn test_post_form_validation() {
        let seller = Uuid::new_v4();
        let mut form = PostForm::default();
        assert!(form.to_draft(seller).is_err());

        form.title = "Dorm fridge".to_string();
        form.price_text = "45".to_string();
        let draft = form.to_draft(seller).unwrap();
        assert_eq!(draft.price_cents, 4500);
        assert_eq!(draft.seller_id, seller);
    }
}
