//! Application Context
//!
//! Single owner of the session state. Every read and write of the current
//! user, theme and unread count goes through [`AppContext`].

use collection_view::{ApiConfig, NavLink, Role, Session};
use leptos::prelude::*;

use crate::store::{AppState, AppStateStoreFields, AppStore, Theme};

const SESSION_KEY: &str = "session";

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            store: AppStore::new(AppState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Sync `data-theme` with the store and restore a persisted session, if any
    pub fn init(&self) {
        apply_theme(self.store.theme().get_untracked());
        let Some(raw) = local_storage().and_then(|s| s.get_item(SESSION_KEY).ok().flatten()) else {
            return;
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                log::info!("restored session for {}", session.username);
                *self.store.session().write() = Some(session);
            }
            Err(e) => {
                log::warn!("discarding unreadable session: {}", e);
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    // ========================
    // Session
    // ========================

    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    pub fn role(&self) -> Role {
        self.store
            .session()
            .with(|s| s.as_ref().map(|s| s.role).unwrap_or_default())
    }

    pub fn token(&self) -> Option<String> {
        self.store.session().with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user_id(&self) -> Option<u64> {
        self.store.session().with(|s| s.as_ref().map(|s| s.id))
    }

    pub fn sign_in(&self, session: Session) {
        if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(&session)) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
        log::info!("signed in as {} ({:?})", session.username, session.role);
        *self.store.session().write() = Some(session);
    }

    /// Clear the session from the store and from storage
    pub fn sign_out(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
        *self.store.session().write() = None;
        *self.store.unread_count().write() = 0;
        *self.store.page().write() = NavLink::Explore;
        log::info!("signed out");
    }

    // ========================
    // Theme / unread / page
    // ========================

    pub fn theme(&self) -> Theme {
        self.store.theme().get()
    }

    pub fn toggle_theme(&self) {
        let theme = self.theme().flipped();
        *self.store.theme().write() = theme;
        apply_theme(theme);
    }

    pub fn unread_count(&self) -> usize {
        self.store.unread_count().get()
    }

    pub fn set_unread_count(&self, count: usize) {
        if self.store.unread_count().get_untracked() != count {
            *self.store.unread_count().write() = count;
        }
    }

    pub fn page(&self) -> NavLink {
        self.store.page().get()
    }

    pub fn navigate(&self, page: NavLink) {
        *self.store.page().write() = page;
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(Theme::ATTRIBUTE, theme.as_str());
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
