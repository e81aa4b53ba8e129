//! # Cointrack - crypto and stock tracker TUI
//!
//! A terminal user interface for following a stock watchlist and a
//! paginated crypto news feed. Built with ratatui and tokio.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Core application state and lifecycle management
//! - **UI**: Layout and rendering logic
//! - **API**: News and watchlist endpoints, and the background page loader
//! - **State**: Centralized state management and the navigation stack
//! - **Storage**: Local key/value store holding the signed-in user
//! - **Events**: Input handling and event processing
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use state::{FeedEvent, FeedState, PageRequest};
