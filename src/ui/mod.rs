//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod theme;
mod widgets;

pub use layout::Layout;
pub use theme::Theme;
pub use widgets::{
    DrawerMenu, HelpPanel, LoginScreen, NewsFeed, Placeholder, StatusBar, StockDetails, StockList,
    TabBar, truncate,
};

use crate::config::{Config, KeyBindings};
use crate::state::{HomeTab, Route, Store};
use ratatui::Frame;
use ratatui::widgets::Block;

/// Main UI renderer.
pub struct Ui {
    theme: Theme,
    keybindings: KeyBindings,
    show_status_bar: bool,
}

impl Ui {
    /// Create a renderer from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            theme: Theme::from_config(&config.theme, config.ui.unicode_symbols),
            keybindings: config.keybindings.clone(),
            show_status_bar: config.ui.show_status_bar,
        }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let theme = &self.theme;
        let layout = Layout::new(frame.area(), self.show_status_bar);
        let tick = store.app.tick;

        frame.render_widget(Block::default().style(theme.base()), frame.area());

        if self.show_status_bar {
            StatusBar::render(frame, layout.status_area, store, theme);
        }
        TabBar::render(frame, layout.tab_area, store, theme);

        // Render main content based on the visible route
        match store.app.current_route() {
            Route::Home => match (store.app.home_tab, &store.news) {
                (HomeTab::News, Some(screen)) => {
                    NewsFeed::render(frame, layout.main_area, screen, tick, theme);
                }
                _ => StockList::render(frame, layout.main_area, store, theme),
            },
            Route::Login => LoginScreen::render(frame, layout.main_area, theme),
            Route::StockDetails {
                ticker,
                percentage_change,
            } => StockDetails::render(
                frame,
                layout.main_area,
                store,
                ticker,
                *percentage_change,
                theme,
            ),
            route @ (Route::Leaderboard
            | Route::CryptoResources
            | Route::HelpSupport
            | Route::ProfileSettings) => {
                Placeholder::render(frame, layout.main_area, route, tick, theme);
            }
        }

        if store.drawer.open {
            DrawerMenu::render(frame, layout.main_area, &store.drawer, tick, theme);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keybindings, theme);
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification, theme);
        }

        // Render error if present
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error, theme);
        }
    }
}
