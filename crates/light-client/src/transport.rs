//! Transport seam and the reqwest implementation.

use std::time::Duration;

use async_trait::async_trait;
use http::header::CACHE_CONTROL;
use light_core::{ClientConfig, ClientType};
use serde_json::Value;

use crate::{ApiError, ApiRequest, ApiResponse};

/// Sends one request and returns the raw response.
///
/// Implementations report a status code whatever it is; interpreting it is
/// the client's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a transport from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.config.base_url(request.upstream()), request.path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .query(&request.query);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        if request.upstream() == ClientType::Admin {
            if let Some(token) = &self.config.admin_token {
                builder = builder.bearer_auth(token);
            }
        }

        let revalidate = request.revalidate.unwrap_or(self.config.revalidate_secs);
        builder = builder.header(CACHE_CONTROL, cache_control(revalidate));

        tracing::debug!(method = %request.method, url = %url, client = %request.upstream(), "Sending API request");

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        Ok(ApiResponse::new(status, parse_body(text)))
    }
}

fn cache_control(revalidate: u64) -> String {
    if revalidate == 0 {
        "no-cache".to_string()
    } else {
        format!("max-age={}", revalidate)
    }
}

/// Empty bodies become `None`; non-JSON bodies are kept as a string payload.
fn parse_body(text: String) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(String::new()), None);
        assert_eq!(parse_body("  \n".to_string()), None);
        assert_eq!(parse_body(r#"{"a":1}"#.to_string()), Some(json!({"a": 1})));
        assert_eq!(parse_body("null".to_string()), Some(Value::Null));
        assert_eq!(
            parse_body("Bad Gateway".to_string()),
            Some(Value::String("Bad Gateway".to_string()))
        );
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(cache_control(0), "no-cache");
        assert_eq!(cache_control(300), "max-age=300");
    }

    #[test]
    fn test_url_by_client_type() {
        let transport = HttpTransport::new(ClientConfig {
            api_base_url: "http://public.local/".to_string(),
            admin_base_url: "http://admin.local".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        let public = ApiRequest::get("/wallet/get");
        let admin = ApiRequest::get("/wallet/settings/get").client_type(ClientType::Admin);
        assert_eq!(transport.url(&public), "http://public.local/wallet/get");
        assert_eq!(transport.url(&admin), "http://admin.local/wallet/settings/get");
    }
}
