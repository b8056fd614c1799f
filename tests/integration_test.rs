//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y le habla
//! HTTP crudo por `TcpStream`.

use codecrafters_http::config::Config;
use codecrafters_http::server::Server;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Response parseada de forma mínima para los asserts
struct RawResponse {
    status_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RawResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn content_length(&self) -> usize {
        self.header("Content-Length")
            .expect("Content-Length header")
            .parse()
            .expect("numeric Content-Length")
    }
}

/// Helper: directorio temporal único por test
fn temp_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "codecrafters_http_it_{}_{}",
        test,
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Helper: levanta un servidor en un puerto libre y retorna su dirección
fn spawn_server(directory: &Path) -> SocketAddr {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        directory: directory.to_path_buf(),
        ..Config::default()
    };

    let mut server = Server::new(config);
    let addr = server.start().expect("bind server");
    assert_eq!(server.local_addr(), Some(addr));

    thread::spawn(move || {
        let _ = server.serve();
    });

    addr
}

/// Helper: envía un request crudo y retorna la response completa
fn send_request(addr: SocketAddr, raw: &[u8]) -> RawResponse {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw).expect("write request");
    stream.flush().unwrap();

    // El servidor cierra la conexión después de responder
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).expect("read response");

    parse_response(&buf)
}

fn parse_response(buf: &[u8]) -> RawResponse {
    let split = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response without blank line");

    let head = String::from_utf8(buf[..split].to_vec()).expect("ascii head");
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap_or_default().to_string();
    let headers = lines
        .filter_map(|line| line.split_once(": "))
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();

    RawResponse {
        status_line,
        headers,
        body: buf[split + 4..].to_vec(),
    }
}

fn gunzip(data: &[u8]) -> String {
    let mut decoded = String::new();
    GzDecoder::new(data)
        .read_to_string(&mut decoded)
        .expect("valid gzip body");
    decoded
}

#[test]
fn test_root_endpoint() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(addr, b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert!(response.body.is_empty());
    assert_eq!(response.content_length(), 0);
}

#[test]
fn test_echo_endpoint() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(addr, b"GET /echo/abc HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.content_length(), 3);
    assert_eq!(response.body, b"abc");
    assert_eq!(response.header("Content-Encoding"), None);
}

#[test]
fn test_echo_gzip() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(
        addr,
        b"GET /echo/raspberry HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n",
    );

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    assert_eq!(response.content_length(), response.body.len());
    assert_eq!(gunzip(&response.body), "raspberry");
}

#[test]
fn test_echo_gzip_among_other_encodings() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(
        addr,
        b"GET /echo/pear HTTP/1.1\r\nAccept-Encoding: invalid-1, gzip, invalid-2\r\n\r\n",
    );

    assert_eq!(response.header("Content-Encoding"), Some("gzip"));
    assert_eq!(gunzip(&response.body), "pear");
}

#[test]
fn test_echo_invalid_encoding() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(
        addr,
        b"GET /echo/pear HTTP/1.1\r\nAccept-Encoding: invalid-encoding\r\n\r\n",
    );

    assert_eq!(response.header("Content-Encoding"), None);
    assert_eq!(response.body, b"pear");
    assert_eq!(response.content_length(), 4);
}

#[test]
fn test_user_agent_endpoint() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(
        addr,
        b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: test-agent\r\n\r\n",
    );

    assert_eq!(response.status_line, "HTTP/1.1 200 OK");
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.content_length(), "test-agent".len());
    assert_eq!(response.body, b"test-agent");
}

#[test]
fn test_user_agent_missing_header() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(addr, b"GET /user-agent HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
}

#[test]
fn test_files_round_trip() {
    let dir = temp_dir("round_trip");
    let addr = spawn_server(&dir);

    let post = send_request(
        addr,
        b"POST /files/round_trip.txt HTTP/1.1\r\nContent-Type: application/octet-stream\r\nContent-Length: 12\r\n\r\nhello\r\nworld",
    );
    assert_eq!(post.status_line, "HTTP/1.1 201 Created");

    let get = send_request(addr, b"GET /files/round_trip.txt HTTP/1.1\r\n\r\n");
    assert_eq!(get.status_line, "HTTP/1.1 200 OK");
    assert_eq!(get.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(get.content_length(), 12);
    assert_eq!(get.body, b"hello\r\nworld");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_files_not_found() {
    let dir = temp_dir("not_found");
    let addr = spawn_server(&dir);

    let response = send_request(addr, b"GET /files/non_existant_file HTTP/1.1\r\n\r\n");
    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_files_post_into_missing_directory() {
    let addr = spawn_server(Path::new("/definitely/not/a/real/dir"));

    let response = send_request(
        addr,
        b"POST /files/x HTTP/1.1\r\nContent-Length: 1\r\n\r\nx",
    );
    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");
}

#[test]
fn test_not_found() {
    let addr = spawn_server(Path::new("."));

    for path in ["/nonexistent", "/apple/echo", "/files-x/a"] {
        let raw = format!("GET {} HTTP/1.1\r\n\r\n", path);
        let response = send_request(addr, raw.as_bytes());
        assert_eq!(response.status_line, "HTTP/1.1 404 Not Found", "path {}", path);
    }
}

#[test]
fn test_post_to_get_only_route() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(addr, b"POST /echo/abc HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 404 Not Found");
}

#[test]
fn test_malformed_request() {
    let addr = spawn_server(Path::new("."));
    let response = send_request(addr, b"PUT / HTTP/1.1\r\n\r\n");

    assert_eq!(response.status_line, "HTTP/1.1 400 Bad Request");
}

#[test]
fn test_concurrent_connections() {
    let addr = spawn_server(Path::new("."));

    // Abrir varias conexiones antes de enviar nada: si el accept loop
    // bloqueara, las siguientes no serían atendidas
    let mut streams: Vec<TcpStream> = (0..8)
        .map(|_| TcpStream::connect(addr).expect("connect"))
        .collect();

    for stream in streams.iter_mut().rev() {
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        stream.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        assert_eq!(parse_response(&buf).status_line, "HTTP/1.1 200 OK");
    }

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let raw = format!("GET /echo/client{} HTTP/1.1\r\n\r\n", i);
                let response = send_request(addr, raw.as_bytes());
                assert_eq!(response.body, format!("client{}", i).as_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("client thread");
    }
}
