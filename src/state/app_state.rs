//! Application-level state.

use super::{HomeTab, Navigator, Notification, Route};

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Navigation stack.
    pub navigator: Navigator,
    /// Selected tab of the home screen.
    pub home_tab: HomeTab,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Current error message (not feed errors, which live on the feed).
    pub error: Option<String>,
    /// Animation frame counter.
    pub tick: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// The visible route.
    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// Whether the news tab of the home screen is mounted.
    pub fn news_visible(&self) -> bool {
        self.navigator.contains(&Route::Home) && self.home_tab == HomeTab::News
    }

    /// Whether the home screen is on top.
    pub fn on_home(&self) -> bool {
        *self.navigator.current() == Route::Home
    }
}
