use std::net::SocketAddr;
use std::time::Duration;

use geupsik_common::config::Config;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub const TEST_KEY: &str = "test-key";

/// A canned HTTP/1.1 server that answers one connection per queued response, in order.
pub struct StubServer {
    pub addr: SocketAddr,
    requests: UnboundedReceiver<String>,
}

impl StubServer {
    pub async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, requests) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };

                let mut head: Vec<u8> = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = stream.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&buf[..n]);
                    if head.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let head = String::from_utf8_lossy(&head).to_string();
                let target = head.split_whitespace().nth(1).unwrap_or_default().to_string();
                let _ = tx.send(target);

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json;charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { addr, requests }
    }

    pub fn config(&self) -> Config {
        Config::new(TEST_KEY)
            .unwrap()
            .with_base_url(format!("http://{}/hub", self.addr))
            .with_timeout(Duration::from_secs(5))
    }

    /// Path and query of the next request the stub received.
    pub async fn next_request(&mut self) -> String {
        self.requests.recv().await.expect("stub received no request")
    }
}

/// A config pointing at a port nothing listens on.
pub async fn unreachable_config() -> Config {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Config::new(TEST_KEY)
        .unwrap()
        .with_base_url(format!("http://{addr}/hub"))
        .with_timeout(Duration::from_secs(5))
}
