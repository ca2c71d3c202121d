pub mod config;
pub mod fetcher;
pub mod parser;
pub mod validator;

pub use config::SourceConfig;
pub use events_errors::{Document, FaultKind, SourceError};
pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use parser::parse_snapshot;
pub use validator::{collect_violations, validate};
