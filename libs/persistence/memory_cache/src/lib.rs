pub mod cache;
pub mod config;

pub use cache::{Memory, r#trait::CacheStore};
pub use config::MemoryConfig;
