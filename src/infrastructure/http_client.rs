use crate::error::{MerchantError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use tracing::error;

/// An uninterpreted gateway reply.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Single-attempt HTTP exchange shared by both gateway clients.
///
/// No retries and no timeout of its own: a failed call is final, and the
/// caller's future bounds how long it may run.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `base` with `query` form-encoded in field order.
    pub fn url_with_query<Q: Serialize + ?Sized>(&self, base: &str, query: &Q) -> Result<Url> {
        let request = self
            .client
            .get(base)
            .query(query)
            .build()
            .map_err(|e| MerchantError::Build(e.to_string()))?;
        Ok(request.url().clone())
    }

    /// Sends one request and reads the full body, whatever the status code.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Failed to send HTTP request");
            MerchantError::Transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            MerchantError::Transport(e)
        })?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
