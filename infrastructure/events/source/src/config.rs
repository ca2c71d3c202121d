use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::Document;

pub const DEFAULT_DATA_URL: &str = "https://teg-coding-challenge.s3.ap-southeast-2.amazonaws.com/events/event-data.json";
pub const DEFAULT_SCHEMA_URL: &str = "https://teg-coding-challenge.s3.ap-southeast-2.amazonaws.com/events/event-data.schema.json";

/// Where the event data and its schema are published.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SourceConfig {
    #[serde(default = "data_url_default")]
    pub data_url: Url,
    #[serde(default = "schema_url_default")]
    pub schema_url: Url,
    /// Whole-request timeout for each remote document.
    #[serde(default = "timeout_secs_default")]
    pub timeout_secs: u64,
}

fn data_url_default() -> Url {
    Url::parse(DEFAULT_DATA_URL).expect("default data url is valid")
}
fn schema_url_default() -> Url {
    Url::parse(DEFAULT_SCHEMA_URL).expect("default schema url is valid")
}
fn timeout_secs_default() -> u64 { 100 }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_url: data_url_default(),
            schema_url: schema_url_default(),
            timeout_secs: timeout_secs_default(),
        }
    }
}

impl SourceConfig {
    pub fn new(data_url: Url, schema_url: Url) -> Self {
        Self {
            data_url,
            schema_url,
            timeout_secs: timeout_secs_default(),
        }
    }

    /// Reads `EVENTS_DATA_URL`, `EVENTS_SCHEMA_URL` and
    /// `SOURCE_TIMEOUT_SECS`. A malformed URL is an error; a malformed
    /// timeout keeps the default.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let data_url = std::env::var("EVENTS_DATA_URL")
            .unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());
        let schema_url = std::env::var("EVENTS_SCHEMA_URL")
            .unwrap_or_else(|_| DEFAULT_SCHEMA_URL.to_string());

        let mut config =
            Self::new(Url::parse(&data_url)?, Url::parse(&schema_url)?);

        if let Ok(raw) = std::env::var("SOURCE_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => {
                    warn!(
                        value = %raw,
                        "Ignoring invalid SOURCE_TIMEOUT_SECS"
                    )
                }
            }
        }

        Ok(config)
    }

    pub fn url_for(&self, document: Document) -> &Url {
        match document {
            Document::Data => &self.data_url,
            Document::Schema => &self.schema_url,
        }
    }

    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}
