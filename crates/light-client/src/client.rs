//! API client interpreting upstream responses.

use std::sync::Arc;

use light_core::{ClientConfig, ClientType};
use serde::de::DeserializeOwned;

use crate::{ApiError, ApiRequest, HttpTransport, Transport};

/// Client for the wallet REST API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    client_type: ClientType,
}

impl ApiClient {
    /// Create a client over any transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    /// Create a client over a shared transport.
    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            client_type: ClientType::default(),
        }
    }

    /// Create an HTTP client from configuration.
    pub fn http(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::new(config.clone())?))
    }

    /// Use a different upstream for requests that don't pin one.
    pub fn with_client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = client_type;
        self
    }

    /// Get the default upstream.
    pub fn client_type(&self) -> ClientType {
        self.client_type
    }

    /// Send a request built by an endpoint wrapper.
    ///
    /// The request's upstream is the client's default unless the wrapper
    /// pinned one (`Admin` endpoints).
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let request = if request.client_type.is_none() {
            request.client_type(self.client_type)
        } else {
            request
        };

        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        let data = response.into_result()?;

        serde_json::from_value(data).map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Unexpected response shape");
            ApiError::Decode(e.to_string())
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client_type", &self.client_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockReply, MockTransport};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: u64,
    }

    #[tokio::test]
    async fn test_send_decodes_success() {
        let transport = MockTransport::new();
        transport.respond("/thing", MockReply::ok(json!({"id": 7})));

        let client = ApiClient::new(transport.clone());
        let thing: Thing = client.send(ApiRequest::get("/thing")).await.unwrap();
        assert_eq!(thing, Thing { id: 7 });
    }

    #[tokio::test]
    async fn test_send_status_error() {
        let transport = MockTransport::new();
        transport.respond("/thing", MockReply::status(404, json!({"error": "missing"})));

        let client = ApiClient::new(transport);
        let err = client.send::<Thing>(ApiRequest::get("/thing")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.payload(), Some(&json!({"error": "missing"})));
    }

    #[tokio::test]
    async fn test_send_null_body_is_failure() {
        let transport = MockTransport::new();
        transport.respond("/thing", MockReply::ok(serde_json::Value::Null));

        let client = ApiClient::new(transport);
        let err = client.send::<Thing>(ApiRequest::get("/thing")).await.unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn test_send_decode_error() {
        let transport = MockTransport::new();
        transport.respond("/thing", MockReply::ok(json!({"name": "no id"})));

        let client = ApiClient::new(transport);
        let err = client.send::<Thing>(ApiRequest::get("/thing")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_default_client_type_applied() {
        let transport = MockTransport::new();
        transport.respond("/thing", MockReply::ok(json!({"id": 1})));

        let client = ApiClient::new(transport.clone()).with_client_type(ClientType::Authenticated);
        let _: Thing = client.send(ApiRequest::get("/thing")).await.unwrap();
        let _: Thing = client
            .send(ApiRequest::get("/thing").client_type(ClientType::Admin))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].client_type, Some(ClientType::Authenticated));
        assert_eq!(requests[1].client_type, Some(ClientType::Admin));
    }

    #[tokio::test]
    async fn test_pinned_public_kept_on_authenticated_client() {
        let transport = MockTransport::new();
        transport.respond("/thing", MockReply::ok(json!({"id": 1})));

        let client = ApiClient::new(transport.clone()).with_client_type(ClientType::Authenticated);
        let _: Thing = client
            .send(ApiRequest::get("/thing").client_type(ClientType::Public))
            .await
            .unwrap();

        assert_eq!(transport.requests()[0].client_type, Some(ClientType::Public));
    }
}
