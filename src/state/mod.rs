//! State management for Cointrack.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Side effects
//! (network fetches) are requested by dispatching effect actions back onto
//! the action channel, where the [`App`](crate::App) executes them.

mod app_state;
mod drawer_state;
mod feed_state;
mod navigation;
mod stock_state;

pub use app_state::AppState;
pub use drawer_state::{
    DRAWER_ENTRIES, DrawerEntry, DrawerState, Identity, SignedUser, USER_TAGLINE, UserProfile,
};
pub use feed_state::{
    FEED_ERROR_MESSAGE, FeedEvent, FeedState, FetchRequest, NewsItem, NewsScreen, PageRequest,
};
pub use navigation::{HomeTab, Navigator, Route};
pub use stock_state::{Stock, StockState, format_change};

use crate::config::Config;
use crate::error::Result;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    GoBack,
    SetTab(HomeTab),
    SignIn,
    SignOut,

    // Drawer
    ToggleDrawer,
    CloseDrawer,
    IdentityLoaded(Option<SignedUser>),

    // Stock actions
    LoadStocks,
    StocksLoaded(Vec<Stock>),
    StocksFailed(String),

    // News feed
    RefreshNews,
    NewsEndReached,
    NewsPageLoaded {
        session: Uuid,
        request: u64,
        items: Vec<NewsItem>,
    },
    NewsPageFailed {
        session: Uuid,
        request: u64,
    },
    /// Effect: execute a page fetch.
    FetchNews(FetchRequest),

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    Select,
    Back,
    Refresh,
    Tick,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Error handling
    SetError(String),
    ClearError,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub shown_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            shown_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Whether the display time has elapsed.
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Duration::from_secs(self.duration_secs)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Drawer menu.
    pub drawer: DrawerState,
    /// Stock watchlist.
    pub stocks: StockState,
    /// Mounted news screen, if visible.
    pub news: Option<NewsScreen>,
    /// Rows from the end of the news list that trigger the next page.
    end_reached_threshold: usize,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, config: &Config) -> Self {
        Self {
            app: AppState::default(),
            drawer: DrawerState::default(),
            stocks: StockState::with_stocks(config.watchlist.clone()),
            news: None,
            end_reached_threshold: config.ui.end_reached_threshold,
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::Navigate(route) => {
                self.drawer.open = false;
                self.app.navigator.navigate(route);
                self.sync_news_mount();
            }
            Action::GoBack => {
                self.app.navigator.go_back();
                self.sync_news_mount();
            }
            Action::SetTab(tab) => {
                if self.app.on_home() {
                    self.app.home_tab = tab;
                    self.sync_news_mount();
                }
            }
            Action::SignIn => {
                self.app.navigator.reset(Route::Home);
                self.sync_news_mount();
            }
            Action::SignOut => {
                tracing::info!("Signing out");
                self.drawer.open = false;
                self.app.navigator.reset(Route::Login);
                self.sync_news_mount();
            }

            // Drawer
            Action::ToggleDrawer => {
                if self.app.on_home() {
                    self.drawer.open = !self.drawer.open;
                }
            }
            Action::CloseDrawer => self.drawer.open = false,
            Action::IdentityLoaded(user) => {
                self.drawer.identity = Identity::Ready(user);
            }

            // Stock actions
            Action::LoadStocks => self.stocks.loading = true,
            Action::StocksLoaded(stocks) => self.stocks.replace(stocks),
            Action::StocksFailed(message) => {
                self.stocks.loading = false;
                tracing::warn!(error = %message, "Watchlist refresh failed");
                self.app.notification = Some(Notification::warning("Failed to refresh watchlist"));
            }

            // News feed
            Action::RefreshNews => self.apply_feed(FeedEvent::Refresh),
            Action::NewsEndReached => self.apply_feed(FeedEvent::EndReached),
            Action::NewsPageLoaded {
                session,
                request,
                items,
            } => {
                if self.owns_session(session) {
                    self.apply_feed(FeedEvent::PageLoaded { request, items });
                }
            }
            Action::NewsPageFailed { session, request } => {
                if self.owns_session(session) {
                    self.apply_feed(FeedEvent::PageFailed { request });
                }
            }
            Action::FetchNews(_) => {
                // Executed by the app; nothing to record here.
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-10),
            Action::PageDown => self.scroll(10),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::Select => self.select(),
            Action::Back => self.back(),
            Action::Refresh => self.refresh(),
            Action::Tick => {
                self.app.tick = self.app.tick.wrapping_add(1);
                if self.app.notification.as_ref().is_some_and(|n| n.is_expired()) {
                    self.app.notification = None;
                }
            }
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
            }
            Action::ClearError => {
                self.app.error = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn owns_session(&self, session: Uuid) -> bool {
        let owned = self.news.as_ref().is_some_and(|s| s.session == session);
        if !owned {
            tracing::debug!(%session, "Ignoring completion for unmounted news screen");
        }
        owned
    }

    /// Mount or unmount the news screen to match what is visible.
    fn sync_news_mount(&mut self) {
        let visible = self.app.news_visible();
        match (self.news.is_some(), visible) {
            (false, true) => {
                let mut screen = NewsScreen::mount();
                tracing::debug!(session = %screen.session, "Mounting news screen");
                let fetch = screen.apply(FeedEvent::LoadPage {
                    page: 1,
                    refresh: false,
                });
                self.news = Some(screen);
                if let Some(fetch) = fetch {
                    self.request_fetch(fetch);
                }
            }
            (true, false) => {
                if let Some(screen) = self.news.take() {
                    screen.unmount();
                }
            }
            _ => {}
        }
    }

    fn apply_feed(&mut self, event: FeedEvent) {
        let Some(screen) = self.news.as_mut() else {
            return;
        };
        if let Some(fetch) = screen.apply(event) {
            self.request_fetch(fetch);
        }
    }

    fn request_fetch(&mut self, fetch: FetchRequest) {
        let (session, request) = (fetch.session, fetch.request.id);
        if let Err(e) = self.dispatch(Action::FetchNews(fetch)) {
            tracing::warn!(error = %e, "Failed to schedule news fetch");
            self.reduce(Action::NewsPageFailed { session, request });
        }
    }

    fn select(&mut self) {
        if self.app.show_help {
            return;
        }
        if self.drawer.open {
            let entry = self.drawer.selected_entry();
            match entry.route() {
                Some(route) => self.reduce(Action::Navigate(route)),
                None => tracing::debug!(entry = entry.label, "Drawer entry has no screen"),
            }
            return;
        }

        if self.app.on_home() && self.app.home_tab == HomeTab::Stocks {
            let route = self.stocks.selected_stock().map(|stock| Route::StockDetails {
                ticker: stock.ticker.clone(),
                percentage_change: stock.price_change_percentage,
            });
            if let Some(route) = route {
                self.reduce(Action::Navigate(route));
            }
        } else if *self.app.current_route() == Route::Login {
            self.reduce(Action::SignIn);
        }
    }

    fn back(&mut self) {
        if self.app.show_help {
            self.app.show_help = false;
        } else if self.drawer.open {
            self.drawer.open = false;
        } else {
            self.reduce(Action::GoBack);
        }
    }

    fn refresh(&mut self) {
        if !self.app.on_home() || self.drawer.open {
            return;
        }
        match self.app.home_tab {
            HomeTab::News => self.reduce(Action::RefreshNews),
            HomeTab::Stocks => {
                if let Err(e) = self.dispatch(Action::LoadStocks) {
                    tracing::warn!(error = %e, "Failed to schedule watchlist refresh");
                }
            }
        }
    }

    fn scroll(&mut self, delta: i32) {
        if self.app.show_help {
            return;
        }
        if self.drawer.open {
            self.drawer.move_selection(delta);
            return;
        }
        if !self.app.on_home() {
            return;
        }

        match self.app.home_tab {
            HomeTab::Stocks => {
                self.stocks.selected_index =
                    step(self.stocks.selected_index, delta, self.stocks.stocks.len());
            }
            HomeTab::News => {
                let threshold = self.end_reached_threshold;
                let Some(screen) = self.news.as_mut() else {
                    return;
                };
                screen.selected_index =
                    step(screen.selected_index, delta, screen.feed.items().len());
                let near_end = delta > 0
                    && screen
                        .selected_index
                        .is_some_and(|i| screen.feed.is_near_end(i, threshold));
                if near_end {
                    self.reduce(Action::NewsEndReached);
                }
            }
        }
    }

    fn go_to_top(&mut self) {
        if !self.app.on_home() || self.drawer.open {
            return;
        }
        match self.app.home_tab {
            HomeTab::Stocks => {
                self.stocks.selected_index = step(None, 0, self.stocks.stocks.len());
            }
            HomeTab::News => {
                if let Some(screen) = self.news.as_mut() {
                    screen.selected_index = step(None, 0, screen.feed.items().len());
                }
            }
        }
    }

    fn go_to_bottom(&mut self) {
        if !self.app.on_home() || self.drawer.open {
            return;
        }
        match self.app.home_tab {
            HomeTab::Stocks => {
                self.stocks.selected_index = self.stocks.stocks.len().checked_sub(1);
            }
            HomeTab::News => {
                let Some(screen) = self.news.as_mut() else {
                    return;
                };
                screen.selected_index = screen.feed.items().len().checked_sub(1);
                if screen.selected_index.is_some() {
                    self.reduce(Action::NewsEndReached);
                }
            }
        }
    }
}

/// Move a list selection by `delta`, clamped to `len`.
fn step(current: Option<usize>, delta: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0) as i64;
    let next = (current + delta as i64).clamp(0, len as i64 - 1);
    Some(next as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn store() -> (Store, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut config = Config::default();
        config.ui.end_reached_threshold = 2;
        config.watchlist = vec![Stock {
            ticker: "AAPL".into(),
            company_name: "Apple Inc.".into(),
            price: dec!(189.30),
            price_change_percentage: dec!(1.75),
            image: None,
        }];
        (Store::new(tx, &config), rx)
    }

    fn next_fetch(rx: &mut mpsc::UnboundedReceiver<Action>) -> Option<FetchRequest> {
        while let Ok(action) = rx.try_recv() {
            if let Action::FetchNews(fetch) = action {
                return Some(fetch);
            }
        }
        None
    }

    fn titles(prefix: &str, count: usize) -> Vec<NewsItem> {
        (0..count)
            .map(|i| NewsItem::titled(format!("{prefix} {i}")))
            .collect()
    }

    fn deliver(store: &mut Store, fetch: &FetchRequest, items: Vec<NewsItem>) {
        store.reduce(Action::NewsPageLoaded {
            session: fetch.session,
            request: fetch.request.id,
            items,
        });
    }

    #[test]
    fn test_switching_to_news_mounts_and_loads_first_page() {
        let (mut store, mut rx) = store();
        assert!(store.news.is_none());

        store.reduce(Action::SetTab(HomeTab::News));

        let screen = store.news.as_ref().unwrap();
        assert!(screen.feed.loading());
        let fetch = next_fetch(&mut rx).unwrap();
        assert_eq!(fetch.session, screen.session);
        assert_eq!(fetch.request.page, 1);
        assert!(!fetch.request.refresh);
    }

    #[test]
    fn test_scrolling_near_end_loads_next_page_once() {
        let (mut store, mut rx) = store();
        store.reduce(Action::SetTab(HomeTab::News));
        let fetch = next_fetch(&mut rx).unwrap();
        deliver(&mut store, &fetch, titles("a", 5));

        // Row 1 of 5 is outside the threshold of 2.
        store.reduce(Action::ScrollDown);
        assert_eq!(store.news.as_ref().unwrap().selected_index, Some(1));
        assert!(next_fetch(&mut rx).is_none());

        store.reduce(Action::ScrollDown);
        let fetch = next_fetch(&mut rx).unwrap();
        assert_eq!(fetch.request.page, 2);

        // Further scrolling while loading requests nothing.
        store.reduce(Action::ScrollDown);
        store.reduce(Action::NewsEndReached);
        assert!(next_fetch(&mut rx).is_none());

        deliver(&mut store, &fetch, titles("b", 5));
        let feed = &store.news.as_ref().unwrap().feed;
        assert_eq!(feed.items().len(), 10);
        assert_eq!(feed.cursor(), 3);
    }

    #[test]
    fn test_late_response_after_unmount_is_ignored() {
        let (mut store, mut rx) = store();
        store.reduce(Action::SetTab(HomeTab::News));
        let fetch = next_fetch(&mut rx).unwrap();

        store.reduce(Action::SetTab(HomeTab::Stocks));
        assert!(store.news.is_none());
        assert!(fetch.cancel.is_cancelled());

        deliver(&mut store, &fetch, titles("late", 3));
        store.reduce(Action::NewsPageFailed {
            session: fetch.session,
            request: fetch.request.id,
        });
        assert!(store.news.is_none());

        // Remounting starts a fresh session that the old response cannot touch.
        store.reduce(Action::SetTab(HomeTab::News));
        let fresh = next_fetch(&mut rx).unwrap();
        assert_ne!(fresh.session, fetch.session);
        deliver(&mut store, &fetch, titles("late", 3));

        let feed = &store.news.as_ref().unwrap().feed;
        assert!(feed.items().is_empty());
        assert!(feed.loading());
    }

    #[test]
    fn test_refresh_key_on_news_tab() {
        let (mut store, mut rx) = store();
        store.reduce(Action::SetTab(HomeTab::News));
        let fetch = next_fetch(&mut rx).unwrap();
        deliver(&mut store, &fetch, titles("a", 3));

        store.reduce(Action::Refresh);
        let fetch = next_fetch(&mut rx).unwrap();
        assert!(fetch.request.refresh);
        assert_eq!(fetch.request.page, 1);
        assert!(store.news.as_ref().unwrap().feed.refreshing());
    }

    #[test]
    fn test_refresh_key_on_stocks_tab_dispatches_load() {
        let (mut store, mut rx) = store();
        store.reduce(Action::Refresh);
        assert!(matches!(rx.try_recv(), Ok(Action::LoadStocks)));
    }

    #[test]
    fn test_failed_fetch_sets_feed_error() {
        let (mut store, mut rx) = store();
        store.reduce(Action::SetTab(HomeTab::News));
        let fetch = next_fetch(&mut rx).unwrap();

        store.reduce(Action::NewsPageFailed {
            session: fetch.session,
            request: fetch.request.id,
        });

        let feed = &store.news.as_ref().unwrap().feed;
        assert_eq!(feed.error(), Some(FEED_ERROR_MESSAGE));
        assert!(!feed.loading());
        assert_eq!(store.app.error, None);
    }

    #[test]
    fn test_closed_channel_fails_the_fetch() {
        let (mut store, rx) = store();
        drop(rx);

        store.reduce(Action::SetTab(HomeTab::News));

        let feed = &store.news.as_ref().unwrap().feed;
        assert!(!feed.loading());
        assert_eq!(feed.error(), Some(FEED_ERROR_MESSAGE));
    }

    #[test]
    fn test_selecting_stock_opens_details() {
        let (mut store, _rx) = store();
        store.reduce(Action::Select);

        assert_eq!(
            store.app.current_route(),
            &Route::StockDetails {
                ticker: "AAPL".into(),
                percentage_change: dec!(1.75),
            }
        );

        store.reduce(Action::Back);
        assert_eq!(store.app.current_route(), &Route::Home);
    }

    #[test]
    fn test_drawer_navigation() {
        let (mut store, _rx) = store();
        store.reduce(Action::ToggleDrawer);
        assert!(store.drawer.open);

        store.reduce(Action::ScrollDown);
        store.reduce(Action::ScrollDown);
        store.reduce(Action::Select);

        assert!(!store.drawer.open);
        assert_eq!(store.app.current_route(), &Route::HelpSupport);
    }

    #[test]
    fn test_drawer_entry_without_screen_keeps_drawer_open() {
        let (mut store, _rx) = store();
        store.reduce(Action::ToggleDrawer);
        store.drawer.selected = DRAWER_ENTRIES.len() - 1;
        store.reduce(Action::Select);

        assert!(store.drawer.open);
        assert_eq!(store.app.current_route(), &Route::Home);
    }

    #[test]
    fn test_drawer_only_opens_on_home() {
        let (mut store, _rx) = store();
        store.reduce(Action::Navigate(Route::Leaderboard));
        store.reduce(Action::ToggleDrawer);
        assert!(!store.drawer.open);
    }

    #[test]
    fn test_sign_out_unmounts_news() {
        let (mut store, mut rx) = store();
        store.reduce(Action::SetTab(HomeTab::News));
        let fetch = next_fetch(&mut rx).unwrap();

        store.reduce(Action::ToggleDrawer);
        store.reduce(Action::SignOut);

        assert_eq!(store.app.current_route(), &Route::Login);
        assert_eq!(store.app.navigator.depth(), 1);
        assert!(store.news.is_none());
        assert!(fetch.cancel.is_cancelled());

        store.reduce(Action::Select);
        assert_eq!(store.app.current_route(), &Route::Home);
        assert!(store.news.is_some());
    }

    #[test]
    fn test_news_stays_mounted_under_pushed_screens() {
        let (mut store, mut rx) = store();
        store.reduce(Action::SetTab(HomeTab::News));
        let session = store.news.as_ref().unwrap().session;
        let _ = next_fetch(&mut rx);

        store.reduce(Action::Navigate(Route::ProfileSettings));
        assert_eq!(store.news.as_ref().map(|s| s.session), Some(session));

        store.reduce(Action::GoBack);
        assert_eq!(store.news.as_ref().map(|s| s.session), Some(session));
    }

    #[test]
    fn test_identity_loaded() {
        let (mut store, _rx) = store();
        assert!(store.drawer.is_loading());

        store.reduce(Action::IdentityLoaded(None));
        assert_eq!(store.drawer.identity, Identity::Ready(None));
    }

    #[test]
    fn test_stocks_failed_keeps_list() {
        let (mut store, _rx) = store();
        store.reduce(Action::LoadStocks);
        store.reduce(Action::StocksFailed("timeout".into()));

        assert!(!store.stocks.loading);
        assert_eq!(store.stocks.stocks.len(), 1);
        assert!(store.app.notification.is_some());
    }

    #[test]
    fn test_step() {
        assert_eq!(step(None, 1, 0), None);
        assert_eq!(step(None, 1, 3), Some(1));
        assert_eq!(step(Some(2), 10, 3), Some(2));
        assert_eq!(step(Some(0), -1, 3), Some(0));
    }
}
