//! Role-gated navigation
//!
//! The visible link set is a pure function of the role.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Guest,
    User,
    Moderator,
    Admin,
}

impl Role {
    /// Backend role string; unknown or missing roles are treated as guests.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Role::User,
            "MODERATOR" => Role::Moderator,
            "ADMIN" => Role::Admin,
            _ => Role::Guest,
        }
    }

    pub fn is_signed_in(self) -> bool {
        self != Role::Guest
    }

    pub fn can_moderate(self) -> bool {
        matches!(self, Role::Moderator | Role::Admin)
    }
}

/// Navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavLink {
    #[default]
    Explore,
    Feed,
    Prompt,
    Favorites,
    Notifications,
    Organizations,
    Dashboard,
    Profile,
    Logout,
    Login,
    Register,
}

impl NavLink {
    pub fn label(self) -> &'static str {
        match self {
            NavLink::Explore => "Explore",
            NavLink::Feed => "Feed",
            NavLink::Prompt => "Prompt",
            NavLink::Favorites => "Favorites",
            NavLink::Notifications => "Notifications",
            NavLink::Organizations => "Organizations",
            NavLink::Dashboard => "Dashboard",
            NavLink::Profile => "Profile",
            NavLink::Logout => "Logout",
            NavLink::Login => "Login",
            NavLink::Register => "Register",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            NavLink::Explore => "/explore",
            NavLink::Feed => "/feed",
            NavLink::Prompt => "/prompt",
            NavLink::Favorites => "/favourite",
            NavLink::Notifications => "/notifications",
            NavLink::Organizations => "/organizations",
            NavLink::Dashboard => "/dashboard",
            NavLink::Profile => "/profile",
            NavLink::Logout => "/logout",
            NavLink::Login => "/login",
            NavLink::Register => "/register",
        }
    }
}

const GUEST_LINKS: &[NavLink] = &[NavLink::Explore];

const USER_LINKS: &[NavLink] = &[
    NavLink::Explore,
    NavLink::Feed,
    NavLink::Prompt,
    NavLink::Favorites,
    NavLink::Notifications,
];

const STAFF_LINKS: &[NavLink] = &[
    NavLink::Explore,
    NavLink::Feed,
    NavLink::Prompt,
    NavLink::Favorites,
    NavLink::Notifications,
    NavLink::Organizations,
    NavLink::Dashboard,
];

/// Main navigation for a role
pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Guest => GUEST_LINKS,
        Role::User => USER_LINKS,
        Role::Moderator | Role::Admin => STAFF_LINKS,
    }
}

/// Right-hand account controls for a role
pub fn account_links(role: Role) -> &'static [NavLink] {
    if role.is_signed_in() {
        &[NavLink::Profile, NavLink::Logout]
    } else {
        &[NavLink::Login, NavLink::Register]
    }
}
