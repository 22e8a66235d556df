//! Notification Endpoints
//!
//! `GET /notifications?userId=...` for the signed-in user.

use collection_view::{ApiConfig, RestSource};

use crate::models::Notification;

pub type NotificationSource = RestSource<Notification>;

pub fn notification_source(config: &ApiConfig, user_id: u64, token: Option<&str>) -> NotificationSource {
    RestSource::new(config, "notifications")
        .with_query("userId", user_id.to_string())
        .with_bearer(token)
}
