//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering. It is also where
//! effect actions emitted by the store are executed.

use crate::api::{ApiClient, NewsLoader, NewsSource};
use crate::config::Config;
use crate::error::Result;
use crate::events::{EventConfig, EventHandler, EventLoop};
use crate::state::{Action, Store};
use crate::storage::{JsonFileStore, KeyValueStore, load_signed_user};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Renderer.
    ui: Ui,
    /// Action sender handed to background tasks.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// API client.
    api_client: Arc<ApiClient>,
    /// Executes news page fetches.
    news_loader: NewsLoader,
    /// Local user store.
    user_store: Arc<dyn KeyValueStore>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application and take over the terminal.
    pub fn new(config: Config) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let api_client = Arc::new(ApiClient::new(config.api.clone())?);
        let news_source: Arc<dyn NewsSource> = api_client.clone();
        let news_loader = NewsLoader::new(news_source, action_tx.clone());

        let storage_path = config.storage.resolve_path();
        tracing::debug!(path = %storage_path.display(), "Using local user store");
        let user_store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(storage_path));

        let store = Store::new(action_tx.clone(), &config);
        let event_handler = EventHandler::new(config.keybindings.clone());
        let ui = Ui::new(&config);

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.ui.mouse_support {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            store,
            event_handler,
            ui,
            action_tx,
            action_rx,
            api_client,
            news_loader,
            user_store,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        if self.config.api.news_url.is_none() {
            tracing::warn!("api.news_url is not configured; the news feed will fail to load");
        }

        self.spawn_identity_load();
        if self.api_client.has_stocks_endpoint() {
            self.store.dispatch(Action::LoadStocks)?;
        }

        let event_config = EventConfig::default()
            .with_tick_rate_ms(self.config.ui.tick_rate_ms)
            .with_mouse_capture(self.config.ui.mouse_support);
        let (mut events, event_task) = EventLoop::new(event_config).start();

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                self.ui.render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                Some(event) = events.recv() => {
                    if let Some(action) = self.event_handler.handle_event(&event) {
                        self.handle_action(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        event_task.abort();
        if let Some(screen) = self.store.news.take() {
            screen.unmount();
        }
        tracing::info!("Shutting down");
        Ok(())
    }

    /// Handle an action, executing effects before handing it to the store.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::FetchNews(fetch) => {
                self.news_loader.spawn(fetch);
            }
            Action::LoadStocks => {
                self.store.reduce(Action::LoadStocks);
                self.spawn_stock_refresh();
            }
            action => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }
    }

    /// Read the signed-in user once for the drawer header.
    fn spawn_identity_load(&self) {
        let user_store = Arc::clone(&self.user_store);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let user = load_signed_user(user_store.as_ref()).await;
            if action_tx.send(Action::IdentityLoaded(user)).is_err() {
                tracing::debug!("Action channel closed; dropping identity");
            }
        });
    }

    /// Reload the watchlist, remotely when an endpoint is configured.
    fn spawn_stock_refresh(&mut self) {
        if !self.api_client.has_stocks_endpoint() {
            self.store
                .reduce(Action::StocksLoaded(self.config.watchlist.clone()));
            return;
        }

        let client = Arc::clone(&self.api_client);
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match client.fetch_stocks().await {
                Ok(stocks) => {
                    tracing::debug!(count = stocks.len(), "Watchlist loaded");
                    Action::StocksLoaded(stocks)
                }
                Err(e) => Action::StocksFailed(e.to_string()),
            };
            if action_tx.send(action).is_err() {
                tracing::debug!("Action channel closed; dropping watchlist");
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
