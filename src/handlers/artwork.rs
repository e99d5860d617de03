use crate::models::Artwork;
use crate::transport::{Transport, ACCEPT_IMAGE};
use url::Url;

/// Best-effort artwork download. Failures are logged and reported as
/// `Artwork::Missing`; nothing is retried or cached.
pub fn fetch_artwork(transport: &dyn Transport, url: &Url) -> Artwork {
    match transport.get(url, ACCEPT_IMAGE) {
        Ok(bytes) => {
            log::debug!("artwork {}: {} bytes", url, bytes.len());
            Artwork::Image(bytes)
        }
        Err(e) => {
            log::warn!("artwork {} unavailable: {}", url, e);
            Artwork::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    struct Fixed(Result<Vec<u8>, u16>);

    impl Transport for Fixed {
        fn get(&self, _url: &Url, accept: &str) -> Result<Vec<u8>, TransportError> {
            assert_eq!(accept, ACCEPT_IMAGE);
            self.0.clone().map_err(TransportError::Status)
        }
    }

    fn url() -> Url {
        Url::parse("https://example.com/a.jpg").unwrap()
    }

    #[test]
    fn bytes_are_handed_back() {
        let artwork = fetch_artwork(&Fixed(Ok(vec![0xff, 0xd8, 0xff])), &url());
        assert_eq!(artwork.bytes(), Some(&[0xff, 0xd8, 0xff][..]));
    }

    #[test]
    fn failure_becomes_missing() {
        let artwork = fetch_artwork(&Fixed(Err(404)), &url());
        assert!(artwork.is_missing());
        assert_eq!(artwork.bytes(), None);
    }
}
