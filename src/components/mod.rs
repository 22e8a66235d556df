//! UI Components
//!
//! Screens and the reusable Leptos pieces they share.

mod error_banner;
mod login_form;
mod models_page;
mod nav_bar;
mod notifications_page;
mod organization_form;
pub mod organizations_page;
mod pagination;
mod register_form;
mod search_box;
mod sort_header;

pub use error_banner::ErrorBanner;
pub use login_form::LoginForm;
pub use models_page::ModelsPage;
pub use nav_bar::NavBar;
pub use notifications_page::NotificationsPage;
pub use organization_form::OrganizationForm;
pub use organizations_page::OrganizationsPage;
pub use pagination::Pagination;
pub use register_form::RegisterForm;
pub use search_box::SearchBox;
pub use sort_header::SortHeader;
