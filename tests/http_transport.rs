use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use movie_search::{
    Artwork, Config, HttpTransport, MovieSearchClient, SearchError, Transport, TransportError,
};
use url::Url;

/// Serves exactly one canned HTTP/1.1 response and hands back the request line.
fn serve_once(status: &'static str, body: &'static [u8]) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }
        let head = format!(
            "HTTP/1.1 {}\r\ncontent-length: {}\r\ncontent-type: application/octet-stream\r\nconnection: close\r\n\r\n",
            status,
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });
    (format!("http://{}", addr), handle)
}

fn local_config(base: &str) -> Config {
    Config {
        endpoint: format!("{}/search", base),
        timeout_secs: 5,
        ..Config::default()
    }
}

#[test]
fn search_over_http() {
    let (base, server) = serve_once(
        "200 OK",
        br#"{"resultCount":1,"results":[{"trackId":123,"artistName":"A","trackName":"Holiday","artworkUrl100":"https://example.com/a.jpg"}]}"#,
    );
    let client = MovieSearchClient::new(local_config(&base)).unwrap();

    let records = client.search("holiday inn").wait().expect("search ok");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].track_id, 123);
    assert_eq!(
        server.join().unwrap(),
        "GET /search?media=movie&term=holiday+inn&limit=100 HTTP/1.1"
    );
}

#[test]
fn non_success_status_is_transport_error() {
    let (base, server) = serve_once("503 Service Unavailable", b"busy");
    let client = MovieSearchClient::new(local_config(&base)).unwrap();

    let outcome = client.search("holiday").wait();
    server.join().unwrap();

    assert!(matches!(
        outcome,
        Err(SearchError::Transport(TransportError::Status(503)))
    ));
}

#[test]
fn empty_body_is_transport_error() {
    let (base, server) = serve_once("200 OK", b"");
    let transport = HttpTransport::new(&local_config(&base)).unwrap();
    let url = Url::parse(&format!("{}/search?term=x", base)).unwrap();

    let result = transport.get(&url, "application/json");
    server.join().unwrap();

    assert!(matches!(result, Err(TransportError::EmptyBody)));
}

#[test]
fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = MovieSearchClient::new(local_config(&format!("http://{}", addr))).unwrap();

    assert!(matches!(
        client.search("holiday").wait(),
        Err(SearchError::Transport(TransportError::Http(_)))
    ));
}

#[test]
fn artwork_bytes_over_http() {
    let (base, server) = serve_once("200 OK", &[0x89, b'P', b'N', b'G']);
    let client = MovieSearchClient::new(local_config(&base)).unwrap();
    let url = Url::parse(&format!("{}/art/100x100bb.png", base)).unwrap();

    let artwork = client.fetch_artwork(&url).wait();

    assert_eq!(artwork, Artwork::Image(vec![0x89, b'P', b'N', b'G']));
    assert_eq!(server.join().unwrap(), "GET /art/100x100bb.png HTTP/1.1");
}

#[test]
fn missing_artwork_over_http_is_silent() {
    let (base, server) = serve_once("404 Not Found", b"nope");
    let client = MovieSearchClient::new(local_config(&base)).unwrap();
    let url = Url::parse(&format!("{}/art/gone.jpg", base)).unwrap();

    assert!(client.fetch_artwork(&url).wait().is_missing());
    server.join().unwrap();
}
