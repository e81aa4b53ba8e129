//! Drawer menu state and the signed-in identity it displays.

use super::Route;
use serde::{Deserialize, Serialize};

/// Tagline shown under the user's name.
pub const USER_TAGLINE: &str = "Crypto Enthusiast";

/// One row of the drawer menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerEntry {
    pub id: u8,
    pub label: &'static str,
    pub badge: &'static str,
}

impl DrawerEntry {
    /// Screen this entry opens, if any.
    pub fn route(&self) -> Option<Route> {
        match self.id {
            1 => Some(Route::Leaderboard),
            2 => Some(Route::CryptoResources),
            3 => Some(Route::HelpSupport),
            4 => Some(Route::ProfileSettings),
            _ => None,
        }
    }
}

/// Drawer menu rows in display order.
pub const DRAWER_ENTRIES: [DrawerEntry; 5] = [
    DrawerEntry { id: 1, label: "Leaderboard", badge: "Soon!" },
    DrawerEntry { id: 2, label: "Crypto Resources", badge: "Soon!" },
    DrawerEntry { id: 3, label: "Help & Support", badge: "Very Soon!" },
    DrawerEntry { id: 4, label: "Settings", badge: "Very Soon!" },
    DrawerEntry { id: 5, label: "Suggest a Feature", badge: "Win Points!!" },
];

/// Profile fields of a signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The record stored under the signed-user key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedUser {
    #[serde(default)]
    pub user: UserProfile,
}

/// Result of the one-time identity read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    /// The store has not answered yet.
    #[default]
    Loading,
    /// Signed-out (`None`) or signed-in user.
    Ready(Option<SignedUser>),
}

/// Drawer menu state.
#[derive(Debug, Default)]
pub struct DrawerState {
    /// Whether the drawer is visible.
    pub open: bool,
    /// Highlighted entry.
    pub selected: usize,
    /// Identity shown in the header.
    pub identity: Identity,
}

impl DrawerState {
    /// Whether the identity read is still pending.
    pub fn is_loading(&self) -> bool {
        self.identity == Identity::Loading
    }

    /// Display name, blank when signed out or unknown.
    pub fn display_name(&self) -> &str {
        self.profile()
            .and_then(|p| p.display_name.as_deref())
            .unwrap_or_default()
    }

    /// Photo URL, blank when signed out or unknown.
    pub fn photo_url(&self) -> &str {
        self.profile()
            .and_then(|p| p.photo_url.as_deref())
            .unwrap_or_default()
    }

    fn profile(&self) -> Option<&UserProfile> {
        match &self.identity {
            Identity::Ready(Some(user)) => Some(&user.user),
            _ => None,
        }
    }

    /// The highlighted entry.
    pub fn selected_entry(&self) -> &'static DrawerEntry {
        &DRAWER_ENTRIES[self.selected.min(DRAWER_ENTRIES.len() - 1)]
    }

    /// Move the highlight by `delta`, clamped to the menu.
    pub fn move_selection(&mut self, delta: i32) {
        let max = DRAWER_ENTRIES.len() as i32 - 1;
        self.selected = (self.selected as i32 + delta).clamp(0, max) as usize;
    }
}
