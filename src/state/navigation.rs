//! Screen routes and the navigation stack.

use rust_decimal::Decimal;
use std::fmt;

/// A screen that can be placed on the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Tabbed home screen (stocks and news).
    Home,
    /// Signed-out screen.
    Login,
    /// Details for one stock.
    StockDetails {
        ticker: String,
        percentage_change: Decimal,
    },
    Leaderboard,
    CryptoResources,
    HelpSupport,
    ProfileSettings,
}

impl Route {
    /// Route name as known to the rest of the app.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::StockDetails { .. } => "StockDetails",
            Self::Leaderboard => "Leaderboard",
            Self::CryptoResources => "CryptoResources",
            Self::HelpSupport => "HelpSupport",
            Self::ProfileSettings => "ProfileSettings",
        }
    }

    /// Screen title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::StockDetails { .. } => "Stock Details",
            Self::Leaderboard => "Leaderboard",
            Self::CryptoResources => "Crypto Resources",
            Self::HelpSupport => "Help & Support",
            Self::ProfileSettings => "Settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tabs of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    Stocks,
    News,
}

/// Stack of routes; the last entry is the visible screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator {
    /// Create a navigator with a single root route.
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// The visible route.
    pub fn current(&self) -> &Route {
        // The stack is never empty.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether `route` is anywhere on the stack.
    pub fn contains(&self, route: &Route) -> bool {
        self.stack.contains(route)
    }

    /// Go to `route`: pop back to it when already on the stack, push it otherwise.
    pub fn navigate(&mut self, route: Route) {
        if let Some(pos) = self.stack.iter().position(|r| *r == route) {
            self.stack.truncate(pos + 1);
        } else {
            self.stack.push(route);
        }
    }

    /// Pop the visible route. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Replace the whole stack with `route`.
    pub fn reset(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }
}
