pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pending;
pub mod transport;
pub mod utils;

// Re-exports for convenient access
pub use client::{MovieSearchClient, SearchOutcome};
pub use config::{load_config, Config};
pub use error::{ConfigError, SearchError, TransportError};
pub use models::{Artwork, MovieRecord, SearchResponse};
pub use pending::Pending;
pub use transport::{HttpTransport, Transport};
