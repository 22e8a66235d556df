//! Backend API Bindings
//!
//! REST endpoints consumed by the screens, organized by domain.

mod ai_models;
mod auth;
mod notifications;
mod organizations;

// Re-export all public items
pub use ai_models::*;
pub use auth::*;
pub use notifications::*;
pub use organizations::*;
