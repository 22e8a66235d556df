//! Collection View Core
//!
//! Fetched-list controller shared by every listing screen:
//! - record: field access used by filter and sort
//! - query: filter / sort / page parameters
//! - pipeline: pure filter -> sort -> paginate
//! - store: last fetched collection and its refresh lifecycle
//! - controller: per-screen view state, derived view, mutation intents
//! - source / rest: transport boundary and its HTTP/JSON implementation
//! - nav, session, config: role-gated navigation, signed-in user, API settings

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod nav;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod rest;
pub mod session;
pub mod source;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::ApiConfig;
pub use controller::{CollectionController, CollectionView, DeleteOutcome};
pub use error::{SourceError, SourceResult};
pub use form::CreateForm;
pub use nav::{account_links, nav_links, NavLink, Role};
pub use query::{FilterSpec, PageSpec, SortDirection, SortIndicator, SortSpec};
pub use record::{FieldValue, JsonRecord, Record};
pub use rest::RestSource;
pub use session::{Credentials, Session};
pub use source::{CollectionSource, MutableSource};
pub use store::{CollectionStore, StoreState};
