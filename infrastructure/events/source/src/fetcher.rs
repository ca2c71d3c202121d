use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument};
use url::Url;

use crate::{Document, SourceConfig, SourceError};

/// Retrieves one of the two remote documents.
///
/// `Ok(None)` means the remote answered with a non-success status. It is
/// reported separately from transport errors so callers can log it and move
/// on, but both count as a failed cycle.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(
        &self, document: Document,
    ) -> Result<Option<Value>, SourceError>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpFetcher {
    pub fn new(config: SourceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: SourceConfig) -> Self {
        Self { client, config }
    }

    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_url(
        &self, document: Document, url: &Url,
    ) -> Result<Option<Value>, SourceError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| SourceError::Http { document, source })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                status = status.as_u16(),
                "{}",
                status_failure(document, status)
            );
            return Ok(None);
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|source| SourceError::Http { document, source })?;

        debug!("Fetched {document} document");
        Ok(Some(body))
    }
}

fn status_failure(document: Document, status: reqwest::StatusCode) -> String {
    format!("Failed to fetch {document}. Status code: {status}")
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(
        &self, document: Document,
    ) -> Result<Option<Value>, SourceError> {
        let url = self.config.url_for(document).clone();
        self.fetch_url(document, &url).await
    }
}
