//! API Client
//!
//! Stateless JSON-over-HTTP client. Normalizes every failure into [`ApiError`]
//! and every successful body into a JSON value.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::{ApiError, ApiResult};
use super::transport::{FetchTransport, HttpRequest, HttpResponse, Method, Transport};
use crate::config::CONFIG;

/// Characters left as-is in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const API_PREFIX: &str = "/api";

/// HTTP client for the hostel backend
#[derive(Debug, Clone)]
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<FetchTransport> {
    /// Client against the configured backend, using browser `fetch`
    pub fn new() -> Self {
        Self::with_transport(CONFIG.api_base_url.clone(), FetchTransport)
    }
}

impl Default for ApiClient<FetchTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Absolute URL for an API path; paths outside `/api/` get the prefix
    pub fn url(&self, path: &str) -> String {
        let path = if path.starts_with("/api/") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", API_PREFIX, path)
        } else {
            format!("{}/{}", API_PREFIX, path)
        };
        format!("{}{}", self.base_url, path)
    }

    /// Perform one request and return the parsed body
    pub async fn request(&self, method: Method, path: &str, payload: Option<Value>) -> ApiResult<Value> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            body: payload.map(|p| p.to_string()),
        };
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("API fetch error on {}: {}", path, e);
            ApiError::Connectivity
        })?;

        decode_response(response).map_err(|e| {
            log::warn!("API error on {}: {}", path, e);
            e
        })
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let value = self.request(Method::Get, path, None).await?;
        from_value(value)
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let payload = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.request(Method::Post, path, Some(payload)).await?;
        from_value(value)
    }

    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let value = self.request(Method::Post, path, None).await?;
        from_value(value)
    }
}

/// Append percent-encoded query parameters to a path
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// Turn a raw response into a JSON value or an [`ApiError`]
///
/// Successful responses that are empty, not JSON, or malformed JSON all
/// become an empty object.
pub fn decode_response(response: HttpResponse) -> ApiResult<Value> {
    if !response.ok() {
        return Err(ApiError::Api {
            status: response.status,
            message: error_message(&response),
        });
    }

    let is_json = response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json || response.body.trim().is_empty() {
        return Ok(empty_object());
    }

    Ok(serde_json::from_str(&response.body).unwrap_or_else(|e| {
        log::warn!("Malformed JSON body, treating as empty: {}", e);
        empty_object()
    }))
}

fn error_message(response: &HttpResponse) -> String {
    let detail = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(other) if !other.is_null() => Some(other.to_string()),
            _ => None,
        });

    detail.unwrap_or_else(|| {
        if response.status_text.is_empty() {
            format!("HTTP Error {}", response.status)
        } else {
            response.status_text.clone()
        }
    })
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn from_value<R: DeserializeOwned>(value: Value) -> ApiResult<R> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::CONNECTIVITY_MESSAGE;
    use crate::api::testing::{json_response, ScriptedTransport};
    use serde_json::json;

    fn response(status: u16, status_text: &str, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_url_prefixing() {
        let client = ApiClient::with_transport("", ScriptedTransport::new());
        assert_eq!(client.url("/api/login"), "/api/login");
        assert_eq!(client.url("/login"), "/api/login");
        assert_eq!(client.url("status"), "/api/status");

        let remote = ApiClient::with_transport("https://hostel.example/", ScriptedTransport::new());
        assert_eq!(remote.url("/api/apply"), "https://hostel.example/api/apply");
    }

    #[test]
    fn test_query_values_are_encoded() {
        assert_eq!(
            with_query("/api/status", &[("email", "a+b@uni.edu")]),
            "/api/status?email=a%2Bb%40uni.edu"
        );
        assert_eq!(with_query("/api/admin/rooms-status", &[]), "/api/admin/rooms-status");
    }

    #[test]
    fn test_error_detail_is_surfaced_verbatim() {
        let err = decode_response(response(
            400,
            "Bad Request",
            Some("application/json"),
            r#"{"detail":"Email already registered"}"#,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_falls_back_to_status_text() {
        let err = decode_response(response(502, "Bad Gateway", Some("text/html"), "<html>oops</html>")).unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = decode_response(response(401, "Unauthorized", None, "")).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");

        let err = decode_response(response(500, "", Some("application/json"), "{}")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP Error 500");
    }

    #[test]
    fn test_success_without_json_is_empty_object() {
        let empty = json!({});
        assert_eq!(decode_response(response(204, "No Content", None, "")).unwrap(), empty);
        assert_eq!(decode_response(response(200, "OK", Some("text/plain"), "fine")).unwrap(), empty);
        assert_eq!(decode_response(response(200, "OK", Some("application/json"), "")).unwrap(), empty);
        assert_eq!(decode_response(response(200, "OK", Some("application/json"), "{not json")).unwrap(), empty);
    }

    #[test]
    fn test_success_json_body() {
        let value = decode_response(response(
            200,
            "OK",
            Some("application/json; charset=utf-8"),
            r#"{"message":"ok"}"#,
        ))
        .unwrap();
        assert_eq!(value["message"], "ok");
    }

    #[tokio::test]
    async fn test_network_failure_is_connectivity_error() {
        let client = ApiClient::with_transport("", ScriptedTransport::new());
        let err = client.request(Method::Get, "/api/status", None).await.unwrap_err();
        assert_eq!(err, ApiError::Connectivity);
        assert_eq!(err.to_string(), CONNECTIVITY_MESSAGE);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let transport = ScriptedTransport::new();
        transport.route(Method::Post, "/api/ai-chat", json_response(200, json!({"reply": "Hi!"})));
        let client = ApiClient::with_transport("", transport.clone());

        let value = client
            .request(Method::Post, "/ai-chat", Some(json!({"query": "hello"})))
            .await
            .unwrap();
        assert_eq!(value["reply"], "Hi!");

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "/api/ai-chat");
        assert_eq!(transport.body_json(0), Some(json!({"query": "hello"})));
    }
}
