//! News feed state and its pagination rules.
//!
//! The feed is driven by an explicit transition function: every trigger
//! (mount, pull-to-refresh, end of list reached) and every fetch completion
//! is a [`FeedEvent`], and [`FeedState::transition`] returns the next state
//! together with the page request to issue, if any.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Message shown for every fetch failure, whatever the cause.
pub const FEED_ERROR_MESSAGE: &str = "Failed to load news. Please check your internet connection.";

/// A news article as delivered by the news endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline. Also the list key within a feed session.
    pub title: String,
    /// Publisher name.
    #[serde(default)]
    pub source: Option<String>,
    /// Body snippet.
    #[serde(default, alias = "body", alias = "snippet")]
    pub description: Option<String>,
    /// Link to the full article.
    #[serde(default)]
    pub url: Option<String>,
    /// Thumbnail URL.
    #[serde(default, alias = "image", alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl NewsItem {
    /// Create an item with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: None,
            description: None,
            url: None,
            image_url: None,
        }
    }
}

/// A page fetch decided by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence number, unique within one feed.
    pub id: u64,
    /// Page to request (1-based).
    pub page: u32,
    /// Whether this fetch was started by pull-to-refresh.
    pub refresh: bool,
}

/// Inputs to the feed transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// Request a specific page.
    LoadPage { page: u32, refresh: bool },
    /// Pull-to-refresh: restart from page 1.
    Refresh,
    /// The list was scrolled close to its end.
    EndReached,
    /// A fetch completed with the given items (possibly none).
    PageLoaded { request: u64, items: Vec<NewsItem> },
    /// A fetch failed.
    PageFailed { request: u64 },
}

/// Paginated news feed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    items: Vec<NewsItem>,
    cursor: u32,
    has_more: bool,
    in_flight: Option<PageRequest>,
    error: Option<String>,
    next_request: u64,
    last_updated: Option<DateTime<Utc>>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: 1,
            has_more: true,
            in_flight: None,
            error: None,
            next_request: 1,
            last_updated: None,
        }
    }
}

impl FeedState {
    /// Create an empty feed, as on screen mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in arrival order.
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Next page to request.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Whether more pages are believed to exist.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the in-flight fetch is a pull-to-refresh.
    pub fn refreshing(&self) -> bool {
        self.in_flight.is_some_and(|r| r.refresh)
    }

    /// The in-flight request, if any.
    pub fn in_flight(&self) -> Option<PageRequest> {
        self.in_flight
    }

    /// User-visible error of the last attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Time of the last successful non-empty page.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Whether `index` lies within `threshold` rows of the end of the list.
    pub fn is_near_end(&self, index: usize, threshold: usize) -> bool {
        !self.items.is_empty()
            && index.saturating_add(threshold) >= self.items.len().saturating_sub(1)
    }

    /// Apply an event, returning the next state and the page to fetch, if any.
    pub fn transition(mut self, event: FeedEvent) -> (Self, Option<PageRequest>) {
        match event {
            FeedEvent::LoadPage { page, refresh } => self.load_page(page, refresh),
            FeedEvent::Refresh => {
                self.cursor = 1;
                self.has_more = true;
                self.error = None;
                self.load_page(1, true)
            }
            FeedEvent::EndReached => {
                if !self.has_more || self.loading() {
                    return (self, None);
                }
                let page = self.cursor;
                self.load_page(page, false)
            }
            FeedEvent::PageLoaded { request, items } => {
                let Some(pending) = self.take_in_flight(request) else {
                    return (self, None);
                };
                if items.is_empty() {
                    self.has_more = false;
                } else {
                    if pending.page == 1 {
                        self.items = items;
                    } else {
                        self.items.extend(items);
                    }
                    self.has_more = true;
                    self.cursor = pending.page + 1;
                    self.last_updated = Some(Utc::now());
                }
                (self, None)
            }
            FeedEvent::PageFailed { request } => {
                if self.take_in_flight(request).is_some() {
                    self.error = Some(FEED_ERROR_MESSAGE.to_string());
                }
                (self, None)
            }
        }
    }

    fn load_page(mut self, page: u32, refresh: bool) -> (Self, Option<PageRequest>) {
        if self.loading() {
            return (self, None);
        }

        let request = PageRequest {
            id: self.next_request,
            page: page.max(1),
            refresh,
        };
        self.next_request += 1;
        self.in_flight = Some(request);
        self.error = None;
        (self, Some(request))
    }

    /// Clear the in-flight request if `id` matches it.
    fn take_in_flight(&mut self, id: u64) -> Option<PageRequest> {
        match self.in_flight {
            Some(pending) if pending.id == id => self.in_flight.take(),
            _ => {
                tracing::debug!(request = id, "Ignoring stale feed completion");
                None
            }
        }
    }
}

/// A page request bound to the screen session that issued it.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Session of the news screen that issued the request.
    pub session: Uuid,
    /// The page request.
    pub request: PageRequest,
    /// Cancelled when the issuing screen unmounts.
    pub cancel: CancellationToken,
}

/// One mount of the news screen.
#[derive(Debug)]
pub struct NewsScreen {
    /// Session id, fresh on every mount.
    pub session: Uuid,
    /// Feed state.
    pub feed: FeedState,
    /// Selected row.
    pub selected_index: Option<usize>,
    cancel: CancellationToken,
}

impl NewsScreen {
    /// Mount a new screen with an empty feed.
    pub fn mount() -> Self {
        Self {
            session: Uuid::new_v4(),
            feed: FeedState::new(),
            selected_index: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Apply a feed event, binding any resulting request to this session.
    pub fn apply(&mut self, event: FeedEvent) -> Option<FetchRequest> {
        let feed = std::mem::take(&mut self.feed);
        let (feed, request) = feed.transition(event);
        self.feed = feed;

        let len = self.feed.items().len();
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };

        request.map(|request| FetchRequest {
            session: self.session,
            request,
            cancel: self.cancel.child_token(),
        })
    }

    /// Cancel any outstanding fetches of this session.
    pub fn unmount(self) {
        tracing::debug!(session = %self.session, "Unmounting news screen");
        self.cancel.cancel();
    }

    /// Token observed by this session's fetches.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}
