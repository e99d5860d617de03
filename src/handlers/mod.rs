pub mod artwork;
pub mod movie_search;

// Re-exports for convenient access
pub use artwork::fetch_artwork;
pub use movie_search::{
    build_search_url, decode_search_response, fetch_search_results, search_movies,
};
