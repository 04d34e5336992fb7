//! Tests for the REST publisher's retry contract against a local listener:
//! exactly one retry on timeout, no retry on status errors, success decoded
//! verbatim.

use moltbook_poster::moltbook::rest::MoltbookRest;
use moltbook_poster::moltbook::Publisher;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Read one HTTP request fully: headers through the blank line, then
/// `content-length` bytes of body.
async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    loop {
        let n = match socket.read(&mut tmp).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&tmp[..n]);
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]);
            let content_length = headers
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= pos + 4 + content_length {
                break;
            }
        }
    }
    buf
}

/// Spawn a listener that counts accepted connections and answers each
/// request with `response` (or never answers when `response` is `None`,
/// so the client request times out).
async fn spawn_server(response: Option<&'static str>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let _request = read_request(&mut socket).await;
                match response {
                    Some(resp) => {
                        let _ = socket.write_all(resp.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    }
                    // Hold the connection open without answering.
                    None => {
                        tokio::time::sleep(Duration::from_secs(30)).await;
                    }
                }
            });
        }
    });
    (format!("http://{}", addr), accepted)
}

#[tokio::test]
async fn test_timeout_retries_once_then_propagates() {
    std::env::set_var("MOLTBOOK_TOKEN", "test-token");
    let (base_url, accepted) = spawn_server(None).await;

    let rest = MoltbookRest::with_timeout(&base_url, "human-centred-tech", Duration::from_millis(250));
    let err = rest.create_post("title", "body").await.unwrap_err();

    assert_eq!(
        accepted.load(Ordering::SeqCst),
        2,
        "expected exactly two attempts: original plus one retry"
    );
    let cause: Option<&reqwest::Error> = err.downcast_ref();
    assert!(
        cause.is_some_and(|e| e.is_timeout()),
        "second timeout must propagate as a timeout: {err:#}"
    );
    assert!(format!("{err:#}").contains("create post retry failed"));
}

#[tokio::test]
async fn test_status_error_is_not_retried() {
    std::env::set_var("MOLTBOOK_TOKEN", "test-token");
    let (base_url, accepted) = spawn_server(Some(
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 5\r\nconnection: close\r\n\r\noops!",
    ))
    .await;

    let rest = MoltbookRest::with_timeout(&base_url, "human-centred-tech", Duration::from_secs(5));
    let err = rest.create_post("title", "body").await.unwrap_err();

    assert_eq!(accepted.load(Ordering::SeqCst), 1, "status errors get no retry");
    assert!(format!("{err:#}").contains("500"), "status surfaces in the error: {err:#}");
    assert!(format!("{err:#}").contains("oops!"), "response body surfaces in the error: {err:#}");
}

#[tokio::test]
async fn test_success_returns_decoded_response() {
    std::env::set_var("MOLTBOOK_TOKEN", "test-token");
    let (base_url, accepted) = spawn_server(Some(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 15\r\nconnection: close\r\n\r\n{\"status\":\"ok\"}",
    ))
    .await;

    let rest = MoltbookRest::with_timeout(&base_url, "human-centred-tech", Duration::from_secs(5));
    let response = rest.create_post("title", "body").await.unwrap();

    assert_eq!(accepted.load(Ordering::SeqCst), 1);
    assert_eq!(response["status"], "ok");
}
