//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only
//! [`crate::context::AppContext`] writes to it.

use collection_view::{NavLink, Session};
use reactive_stores::Store;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute on the document element the stylesheet keys on
    pub const ATTRIBUTE: &'static str = "data-theme";

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Process-wide session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user; `None` for guests
    pub session: Option<Session>,
    pub theme: Theme,
    /// Unread notifications of the signed-in user
    pub unread_count: usize,
    /// Screen currently shown
    pub page: NavLink,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme_attribute_matches_store_default() {
        let state = AppState::default();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(Theme::ATTRIBUTE, "data-theme");
        assert_eq!(state.theme.as_str(), "light");
        assert_eq!(state.theme.flipped().as_str(), "dark");
        assert_eq!(state.theme.flipped().flipped(), Theme::Light);
    }
}
