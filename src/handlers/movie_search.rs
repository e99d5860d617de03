use crate::config::Config;
use crate::error::SearchError;
use crate::models::{MovieRecord, SearchResponse};
use crate::transport::{Transport, ACCEPT_JSON};
use url::Url;

/// Builds `<endpoint>?media=<media>&term=<keyword>&limit=<limit>`, keeping any
/// query pairs the endpoint already carries and dropping its fragment.
///
/// Fails with `MalformedRequest` for a blank keyword or when the endpoint is
/// not an http(s) URL; nothing has touched the network at that point.
pub fn build_search_url(config: &Config, keyword: &str) -> Result<Url, SearchError> {
    if keyword.trim().is_empty() {
        return Err(SearchError::MalformedRequest(
            "search keyword is empty".to_string(),
        ));
    }

    let mut url = Url::parse(&config.endpoint).map_err(|e| {
        SearchError::MalformedRequest(format!("endpoint {:?}: {}", config.endpoint, e))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(SearchError::MalformedRequest(format!(
                "unsupported scheme {:?} in endpoint {}",
                scheme, config.endpoint
            )))
        }
    }

    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair("media", &config.media)
        .append_pair("term", keyword)
        .append_pair("limit", &config.limit.to_string());

    Ok(url)
}

pub fn decode_search_response(body: &[u8]) -> Result<Vec<MovieRecord>, SearchError> {
    let response: SearchResponse = serde_json::from_slice(body)?;

    if !response.count_matches() {
        log::warn!(
            "resultCount is {} but {} results were returned",
            response.result_count,
            response.results.len()
        );
    }

    Ok(response.results)
}

pub fn fetch_search_results(
    transport: &dyn Transport,
    url: &Url,
) -> Result<Vec<MovieRecord>, SearchError> {
    log::debug!("searching: {}", url);
    let body = transport.get(url, ACCEPT_JSON)?;
    let results = decode_search_response(&body)?;
    log::debug!("search returned {} records", results.len());
    Ok(results)
}

/// Blocking search: build the URL, fetch it, decode it.
pub fn search_movies(
    transport: &dyn Transport,
    config: &Config,
    keyword: &str,
) -> Result<Vec<MovieRecord>, SearchError> {
    let url = build_search_url(config, keyword)?;
    fetch_search_results(transport, &url)
}
