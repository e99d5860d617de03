pub mod artwork;
pub mod search_response;

// Re-exports for convenient access
pub use artwork::Artwork;
pub use search_response::{MovieRecord, SearchResponse};
