use async_trait::async_trait;
use url::Url;

use crate::services::http::transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, TransportError, TransportResult,
};

/// reqwest-backed transport against a fixed origin.
///
/// Every request carries `x-request-id` so it can be matched with backend logs.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    // Create a transport for an origin like `http://localhost:8001`
    pub fn new(base_url: Url) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("social-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    fn url_for(&self, request: &ApiRequest) -> TransportResult<Url> {
        let mut url = self
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn backend_name(&self) -> &'static str {
        "reqwest"
    }

    async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        let url = self.url_for(&request)?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
            Method::Patch => self.client.patch(url.clone()),
        }
        .header("x-request-id", request.request_id.to_string());

        // .json() also sets `Content-Type: application/json`
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            %url,
            request_id = %request.request_id,
            "sending request"
        );

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

// `Url::join` replaces the last segment unless the base path ends with '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
