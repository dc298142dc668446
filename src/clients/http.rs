use http::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Settings;
use crate::error::Result;

/// HTTP client that applies the configured backend headers (API key,
/// authorization) to every request.
pub struct HttpClient {
    client: Client,
    headers: HeaderMap,
}

impl HttpClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in settings.api.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(header_name, header_value);
            } else {
                error!(
                    header_key = key,
                    "Invalid header value in configuration, skipping"
                );
            }
        }

        let client = Client::builder().build()?;

        Ok(Self { client, headers })
    }

    pub fn post_json<B: Serialize>(&self, url: &str, body: &B) -> RequestBuilder {
        self.client
            .post(url)
            .headers(self.headers.clone())
            .json(body)
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        Ok(response)
    }
}
