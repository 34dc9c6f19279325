//! reqwest-backed transport.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::IngestConfig;
use crate::payload::{Encoding, LogEvent};
use crate::transport::{IngestResponse, Transport, TransportError};

/// Header carrying tenant identity for plaintext events.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// POSTs events to a single ingest URL.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("log-simulator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &IngestConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn send(&self, event: &LogEvent) -> Result<IngestResponse, TransportError> {
        let request = match event.encoding {
            // `.json` sets `Content-Type: application/json`.
            Encoding::Json => self.client.post(&self.url).json(&event.json_body()),
            Encoding::Plain => self
                .client
                .post(&self.url)
                .header(CONTENT_TYPE, Encoding::Plain.content_type())
                .header(TENANT_HEADER, event.tenant_id.as_str())
                .body(event.text.clone().into_bytes()),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = if status >= 400 {
            response.text().await?
        } else {
            String::new()
        };

        Ok(IngestResponse { status, body })
    }
}
