//! Authentication Endpoints
//!
//! `POST /auth/signin` answers with the full user payload (token included);
//! `POST /auth/signup` registers and answers with no usable body.

use collection_view::rest::{post_json, post_unit};
use collection_view::{ApiConfig, Credentials, Session};

pub async fn sign_in(config: &ApiConfig, credentials: &Credentials) -> Result<Session, String> {
    post_json(config, "auth/signin", credentials)
        .await
        .map_err(|e| e.to_string())
}

pub async fn sign_up(config: &ApiConfig, credentials: &Credentials) -> Result<(), String> {
    post_unit(config, "auth/signup", credentials)
        .await
        .map_err(|e| e.to_string())
}
