use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "resultCount")]
    pub result_count: i64,
    pub results: Vec<MovieRecord>,
}

/// One entry returned by the search endpoint. Keys the endpoint sends but this
/// type does not name are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(
        rename = "collectionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub collection_id: Option<i64>,
    #[serde(rename = "trackId")]
    pub track_id: i64,
    #[serde(rename = "artistName")]
    pub artist_name: String,
    #[serde(rename = "trackName")]
    pub track_name: String,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: Url,
    #[serde(
        rename = "longDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
}

impl SearchResponse {
    pub fn count_matches(&self) -> bool {
        usize::try_from(self.result_count).is_ok_and(|n| n == self.results.len())
    }
}
