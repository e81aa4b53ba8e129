//! Event handler for turning terminal input into actions.

use super::{Event, InputEvent};
use crate::config::KeyBindings;
use crate::state::{Action, HomeTab, Route, Store};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// Store snapshot for state-aware handling.
    store_snapshot: StoreSnapshot,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone)]
struct StoreSnapshot {
    route: Route,
    home_tab: HomeTab,
    drawer_open: bool,
    show_help: bool,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            route: Route::Home,
            home_tab: HomeTab::default(),
            drawer_open: false,
            show_help: false,
        }
    }
}

impl EventHandler {
    /// Create a new event handler with the given key bindings.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self {
            keybindings,
            store_snapshot: StoreSnapshot::default(),
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = StoreSnapshot {
            route: store.app.current_route().clone(),
            home_tab: store.app.home_tab,
            drawer_open: store.drawer.open,
            show_help: store.app.show_help,
        };
    }

    /// Map a terminal event to an action, if it has one.
    pub fn handle_event(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Tick => Some(Action::Tick),
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            // Terminal will automatically redraw
            Event::Resize(_, _) => None,
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = InputEvent::from(key);
        let snapshot = &self.store_snapshot;

        // Global shortcuts
        if input.matches("Ctrl+c") || input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.back) || key.code == KeyCode::Backspace {
            return Some(Action::Back);
        }
        if snapshot.show_help {
            return None;
        }

        if snapshot.drawer_open {
            return self.handle_drawer(input, key);
        }

        if input.matches(&self.keybindings.select) {
            return Some(Action::Select);
        }

        // Navigation
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        match key.code {
            KeyCode::PageUp => return Some(Action::PageUp),
            KeyCode::PageDown => return Some(Action::PageDown),
            KeyCode::Home => return Some(Action::GoToTop),
            KeyCode::End => return Some(Action::GoToBottom),
            _ => {}
        }

        match snapshot.route {
            Route::Home => self.handle_home(input, key),
            _ => None,
        }
    }

    fn handle_home(&self, input: InputEvent, key: KeyEvent) -> Option<Action> {
        if input.matches(&self.keybindings.refresh) {
            return Some(Action::Refresh);
        }
        if input.matches(&self.keybindings.drawer) {
            return Some(Action::ToggleDrawer);
        }
        if input.matches(&self.keybindings.stocks) {
            return Some(Action::SetTab(HomeTab::Stocks));
        }
        if input.matches(&self.keybindings.news) {
            return Some(Action::SetTab(HomeTab::News));
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                Some(Action::SetTab(match self.store_snapshot.home_tab {
                    HomeTab::Stocks => HomeTab::News,
                    HomeTab::News => HomeTab::Stocks,
                }))
            }
            _ => None,
        }
    }

    fn handle_drawer(&self, input: InputEvent, key: KeyEvent) -> Option<Action> {
        if input.matches(&self.keybindings.drawer) {
            return Some(Action::CloseDrawer);
        }
        if input.matches(&self.keybindings.logout) {
            return Some(Action::SignOut);
        }
        if input.matches(&self.keybindings.select) {
            return Some(Action::Select);
        }
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        None
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn handler_for(store: &Store) -> EventHandler {
        let mut handler = EventHandler::new(KeyBindings::default());
        handler.update_store_snapshot(store);
        handler
    }

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, &Config::default())
    }

    #[test]
    fn test_global_keys() {
        let handler = handler_for(&store());
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('?'))),
            Some(Action::ToggleHelp)
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Esc)),
            Some(Action::Back)
        ));
        assert!(matches!(handler.handle_event(&Event::Tick), Some(Action::Tick)));
    }

    #[test]
    fn test_home_keys() {
        let handler = handler_for(&store());
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('2'))),
            Some(Action::SetTab(HomeTab::News))
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Tab)),
            Some(Action::SetTab(HomeTab::News))
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('r'))),
            Some(Action::Refresh)
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('m'))),
            Some(Action::ToggleDrawer)
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Down)),
            Some(Action::ScrollDown)
        ));
        // Logout is only reachable from the drawer.
        assert!(handler.handle_event(&press(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_drawer_keys() {
        let mut store = store();
        store.reduce(Action::ToggleDrawer);
        let handler = handler_for(&store);

        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('x'))),
            Some(Action::SignOut)
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('m'))),
            Some(Action::CloseDrawer)
        ));
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Char('j'))),
            Some(Action::ScrollDown)
        ));
        assert!(handler.handle_event(&press(KeyCode::Char('2'))).is_none());
    }

    #[test]
    fn test_tab_keys_ignored_off_home() {
        let mut store = store();
        store.reduce(Action::Navigate(Route::Leaderboard));
        let handler = handler_for(&store);

        assert!(handler.handle_event(&press(KeyCode::Char('2'))).is_none());
        assert!(handler.handle_event(&press(KeyCode::Char('r'))).is_none());
        assert!(matches!(
            handler.handle_event(&press(KeyCode::Backspace)),
            Some(Action::Back)
        ));
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = handler_for(&store());
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handler.handle_event(&Event::Key(release)).is_none());
    }

    #[test]
    fn test_mouse_scroll() {
        let handler = handler_for(&store());
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            handler.handle_event(&Event::Mouse(scroll)),
            Some(Action::ScrollDown)
        ));
    }
}
