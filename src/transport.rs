use reqwest::blocking::{Client as HttpClient, ClientBuilder};
use reqwest::header::ACCEPT;
use url::Url;

use crate::config::Config;
use crate::error::TransportError;

pub const ACCEPT_JSON: &str = "application/json";
pub const ACCEPT_IMAGE: &str = "image/*";

/// Issues a single GET and hands back the body bytes.
///
/// Implementations block the calling thread; `MovieSearchClient` only calls
/// them from worker threads.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url, accept: &str) -> Result<Vec<u8>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http_client = ClientBuilder::new()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http_client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url, accept: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .http_client
            .get(url.clone())
            .header(ACCEPT, accept)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        if body.is_empty() {
            return Err(TransportError::EmptyBody);
        }
        Ok(body.to_vec())
    }
}
