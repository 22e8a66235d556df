//! REST/JSON collection source
//!
//! `GET {path}` lists, `POST {path}` creates, `DELETE {path}/{id}` deletes.
//! No timeouts or retries beyond what the transport does itself.

use std::marker::PhantomData;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{SourceError, SourceResult};
use crate::record::Record;
use crate::source::{CollectionSource, MutableSource};

pub struct RestSource<R, P = ()> {
    client: Client,
    url: String,
    query: Vec<(String, String)>,
    bearer: Option<String>,
    _marker: PhantomData<fn() -> (R, P)>,
}

impl<R, P> Clone for RestSource<R, P> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            url: self.url.clone(),
            query: self.query.clone(),
            bearer: self.bearer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R, P> RestSource<R, P> {
    pub fn new(config: &ApiConfig, path: &str) -> Self {
        Self {
            client: Client::new(),
            url: config.url(path),
            query: Vec::new(),
            bearer: None,
            _marker: PhantomData,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(|t| format!("Bearer {}", t));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(value) = self.bearer.as_deref().and_then(|b| HeaderValue::from_str(b).ok()) {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.url, utf8_percent_encode(id, NON_ALPHANUMERIC))
    }
}

#[async_trait(?Send)]
impl<R, P> CollectionSource<R> for RestSource<R, P>
where
    R: Record + DeserializeOwned,
{
    async fn fetch_all(&self) -> SourceResult<Vec<R>> {
        log::debug!("GET {}", self.url);
        let response = self.request(Method::GET, &self.url).query(&self.query).send().await?;
        let body: Value = ensure_success(response).await?.json().await?;
        decode_collection(body)
    }
}

#[async_trait(?Send)]
impl<R, P> MutableSource<R> for RestSource<R, P>
where
    R: Record + DeserializeOwned,
    P: Serialize,
{
    type Payload = P;

    async fn create(&self, payload: &P) -> SourceResult<()> {
        log::debug!("POST {}", self.url);
        let response = self.request(Method::POST, &self.url).json(payload).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> SourceResult<()> {
        let url = self.item_url(&id.to_string());
        log::debug!("DELETE {}", url);
        let response = self.request(Method::DELETE, &url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`SourceError::Server`] carrying the body message
async fn ensure_success(response: Response) -> SourceResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body).unwrap_or_else(|| format!("HTTP {}", status));
    Err(SourceError::server(status.as_u16(), message))
}

/// Message from an error body: `{message}` JSON, a JSON string, or plain text
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Ok(Value::String(s)) => Some(s),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Accepts a bare array, `{data: [...]}` or a paged `{data: {content: [...]}}`
pub fn decode_collection<R: DeserializeOwned>(body: Value) -> SourceResult<Vec<R>> {
    match body {
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("data") {
                return decode_collection(inner);
            }
            if let Some(content @ Value::Array(_)) = map.remove("content") {
                return Ok(serde_json::from_value(content)?);
            }
            Err(SourceError::Decode("expected a JSON array of records".into()))
        }
        _ => Err(SourceError::Decode("expected a JSON array of records".into())),
    }
}

/// POST a JSON body and decode the JSON answer. Used for non-collection
/// endpoints such as sign-in.
pub async fn post_json<B, T>(config: &ApiConfig, path: &str, body: &B) -> SourceResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = config.url(path);
    log::debug!("POST {}", url);
    let response = Client::new().post(&url).json(body).send().await?;
    Ok(ensure_success(response).await?.json().await?)
}

/// POST a JSON body, ignoring any answer body
pub async fn post_unit<B>(config: &ApiConfig, path: &str, body: &B) -> SourceResult<()>
where
    B: Serialize + ?Sized,
{
    let url = config.url(path);
    log::debug!("POST {}", url);
    let response = Client::new().post(&url).json(body).send().await?;
    ensure_success(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::JsonRecord;
    use serde_json::json;

    #[test]
    fn test_extract_message() {
        assert_eq!(extract_message(r#"{"message":"duplicate name"}"#).as_deref(), Some("duplicate name"));
        assert_eq!(extract_message(r#""bad request""#).as_deref(), Some("bad request"));
        assert_eq!(extract_message("Internal server error").as_deref(), Some("Internal server error"));
        assert_eq!(extract_message("  ").as_deref(), None);
        assert_eq!(extract_message(r#"{"status":500}"#).as_deref(), None);
    }

    #[test]
    fn test_decode_bare_array() {
        let records: Vec<JsonRecord> = decode_collection(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_decode_envelopes() {
        let wrapped: Vec<JsonRecord> = decode_collection(json!({"success": true, "data": [{"id": 1}]})).unwrap();
        assert_eq!(wrapped.len(), 1);

        let paged: Vec<JsonRecord> = decode_collection(json!({
            "success": true,
            "data": {"content": [{"id": 1}, {"id": 2}, {"id": 3}], "totalPages": 1}
        }))
        .unwrap();
        assert_eq!(paged.len(), 3);
    }

    #[test]
    fn test_decode_rejects_scalar() {
        let err = decode_collection::<JsonRecord>(json!({"message": "nope"})).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_item_url_encodes_id() {
        let source: RestSource<JsonRecord> = RestSource::new(&ApiConfig::default(), "organizations");
        assert_eq!(source.item_url("5"), "http://localhost:8080/api/v1/organizations/5");
        assert_eq!(source.item_url("a b"), "http://localhost:8080/api/v1/organizations/a%20b");
    }
}
