//! API request and response values.

use http::{Method, StatusCode};
use light_core::ClientType;
use serde::Serialize;
use serde_json::Value;

use crate::ApiError;

/// A single call against the REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the upstream base URL (e.g. `/wallet/get`).
    pub path: String,
    /// Query string pairs, in insertion order.
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
    /// Upstream selection; `None` defers to the client's default.
    pub client_type: Option<ClientType>,
    /// Revalidation window in seconds (`Some(0)` disables upstream caching).
    pub revalidate: Option<u64>,
}

impl ApiRequest {
    /// Create a new request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            client_type: None,
            revalidate: None,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Add query parameters from a serializable struct.
    ///
    /// `None` fields are omitted; strings are sent verbatim and every other
    /// scalar uses its JSON rendering.
    pub fn query<Q: Serialize>(mut self, params: &Q) -> Result<Self, ApiError> {
        let value = serde_json::to_value(params).map_err(|e| ApiError::Encode(e.to_string()))?;

        let Value::Object(map) = value else {
            return Err(ApiError::Encode("query parameters must be a struct".to_string()));
        };

        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => self.query.push((key, s)),
                other => self.query.push((key, other.to_string())),
            }
        }

        Ok(self)
    }

    /// Set the request body as JSON.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Set the upstream.
    pub fn client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = Some(client_type);
        self
    }

    /// Upstream the request goes to, `Public` when unset.
    pub fn upstream(&self) -> ClientType {
        self.client_type.unwrap_or_default()
    }

    /// Set the revalidation window.
    pub fn revalidate(mut self, secs: u64) -> Self {
        self.revalidate = Some(secs);
        self
    }

    /// Look up a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw upstream response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body; `None` when the body was empty.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Create a new response.
    pub fn new(status: StatusCode, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// A `200` with a JSON body.
    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, Some(body))
    }

    /// Success means exactly `200` and a non-null body.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK && matches!(&self.body, Some(body) if !body.is_null())
    }

    /// Split into the data or the error payload.
    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.is_success() {
            Ok(self.body.unwrap_or(Value::Null))
        } else {
            Err(ApiError::Status {
                status: self.status.as_u16(),
                payload: self.body.unwrap_or(Value::Null),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Params {
        address: String,
        offset: u64,
        is_testnet: bool,
        cursor: Option<String>,
    }

    #[test]
    fn test_query_from_struct() {
        let request = ApiRequest::get("/token/list")
            .query(&Params {
                address: "0xabc".to_string(),
                offset: 20,
                is_testnet: false,
                cursor: None,
            })
            .unwrap();

        assert_eq!(request.query_param("address"), Some("0xabc"));
        assert_eq!(request.query_param("offset"), Some("20"));
        assert_eq!(request.query_param("is_testnet"), Some("false"));
        assert_eq!(request.query_param("cursor"), None);
        assert_eq!(request.query.len(), 3);
    }

    #[test]
    fn test_query_rejects_non_struct() {
        let err = ApiRequest::get("/x").query(&42).unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
    }

    #[test]
    fn test_builder_fields() {
        let request = ApiRequest::put("/wallet/notification/settings/update")
            .json(&json!({"a": 1}))
            .unwrap()
            .client_type(ClientType::Admin)
            .revalidate(0);

        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, Some(json!({"a": 1})));
        assert_eq!(request.client_type, Some(ClientType::Admin));
        assert_eq!(ApiRequest::get("/a").client_type, None);
        assert_eq!(ApiRequest::get("/a").upstream(), ClientType::Public);
        assert_eq!(request.revalidate, Some(0));
    }

    #[test]
    fn test_success_requires_200_and_body() {
        assert!(ApiResponse::ok(json!({"id": 1})).is_success());
        assert!(!ApiResponse::ok(Value::Null).is_success());
        assert!(!ApiResponse::new(StatusCode::OK, None).is_success());
        assert!(!ApiResponse::new(StatusCode::CREATED, Some(json!({}))).is_success());
        assert!(!ApiResponse::new(StatusCode::NOT_FOUND, Some(json!({}))).is_success());
    }

    #[test]
    fn test_into_result_carries_payload() {
        let err = ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, Some(json!("boom")))
            .into_result()
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                payload: json!("boom"),
            }
        );

        let err = ApiResponse::new(StatusCode::OK, None).into_result().unwrap_err();
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.payload(), Some(&Value::Null));
    }
}
