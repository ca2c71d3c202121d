use thiserror::Error;

/// Which remote document a fault relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Data,
    Schema,
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data => write!(f, "event data"),
            Self::Schema => write!(f, "schema"),
        }
    }
}

/// Coarse classification of a failed fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Transient,
    Validation,
    Parse,
}

impl FaultKind {
    /// Every kind currently goes through backoff. A validation fault will
    /// not clear on its own, but it still spends the retry budget.
    pub fn is_retryable(self) -> bool {
        match self {
            Self::Transient | Self::Validation | Self::Parse => true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error while fetching {document}: {source}")]
    Http {
        document: Document,
        #[source]
        source: reqwest::Error,
    },
    #[error("{document} document unavailable")]
    Unavailable { document: Document },
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    #[error("Event data validation failed. Errors: {}", .errors.join(", "))]
    Validation { errors: Vec<String> },
    #[error("Missing \"{0}\" section in event data")]
    MissingSection(&'static str),
    #[error("Failed to parse {section}: {source}")]
    Parse {
        section: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Http { .. } | Self::Unavailable { .. } => {
                FaultKind::Transient
            }
            Self::InvalidSchema(_) | Self::Validation { .. } => {
                FaultKind::Validation
            }
            Self::MissingSection(_) | Self::Parse { .. } => FaultKind::Parse,
        }
    }

    pub fn is_retryable(&self) -> bool { self.kind().is_retryable() }
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },
    #[error("No venue found for event {event_id}")]
    VenueNotFound { event_id: i64 },
}
