use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::error::{SearchError, TransportError};
use crate::handlers::{build_search_url, fetch_artwork, fetch_search_results, search_movies};
use crate::models::{Artwork, MovieRecord};
use crate::pending::Pending;
use crate::transport::{HttpTransport, Transport};

pub type SearchOutcome = Result<Vec<MovieRecord>, SearchError>;

fn search_abandoned() -> SearchOutcome {
    Err(SearchError::Transport(TransportError::Abandoned))
}

fn artwork_abandoned() -> Artwork {
    Artwork::Missing
}

/// Entry point for searches and artwork downloads.
///
/// Cloning is cheap and clones share the transport and the search generation
/// counter, so `Pending::is_current` sees searches issued through any clone.
#[derive(Clone)]
pub struct MovieSearchClient {
    transport: Arc<dyn Transport>,
    config: Arc<Config>,
    generation: Arc<AtomicU64>,
}

impl MovieSearchClient {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config: Arc::new(config),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a search on a worker thread.
    ///
    /// A keyword that cannot form a request resolves immediately with
    /// `SearchError::MalformedRequest` and no worker is started. Searches are
    /// never cancelled; use `Pending::is_current` to drop results that a newer
    /// search has superseded.
    pub fn search(&self, keyword: &str) -> Pending<SearchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let pending = match build_search_url(&self.config, keyword) {
            Ok(url) => {
                let transport = Arc::clone(&self.transport);
                Pending::spawn("movie-search", search_abandoned, move || {
                    fetch_search_results(transport.as_ref(), &url)
                })
            }
            Err(e) => {
                log::debug!("search #{} not sent: {}", generation, e);
                Pending::ready(Err(e), search_abandoned)
            }
        };

        pending.stamped(generation, Arc::clone(&self.generation))
    }

    /// Starts an artwork download on a worker thread. Always resolves, with
    /// `Artwork::Missing` when the image cannot be fetched.
    pub fn fetch_artwork(&self, url: &Url) -> Pending<Artwork> {
        let transport = Arc::clone(&self.transport);
        let url = url.clone();
        Pending::spawn("movie-artwork", artwork_abandoned, move || {
            fetch_artwork(transport.as_ref(), &url)
        })
    }

    /// Blocking variant of `search` that runs on the calling thread.
    pub fn search_blocking(&self, keyword: &str) -> SearchOutcome {
        search_movies(self.transport.as_ref(), &self.config, keyword)
    }
}
