use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};

/// What the mock server answers to every request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockResponse {
    pub status_line: &'static str,
    pub body: &'static str,
    pub content_length: bool,
}

impl MockResponse {
    pub(crate) const fn ok() -> Self {
        Self {
            status_line: "200 OK",
            body: "OK",
            content_length: true,
        }
    }

    pub(crate) const fn status(status_line: &'static str) -> Self {
        Self {
            status_line,
            body: "",
            content_length: true,
        }
    }
}

/// A local HTTP/1.1 server that closes every connection after one response.
pub(crate) struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub(crate) async fn start(response: MockResponse) -> AppResult<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let seen = Arc::clone(&seen);
                tokio::spawn(async move {
                    drop(handle_client(stream, response, &seen).await);
                });
            }
        });

        Ok(Self {
            url: format!("http://{}/", addr),
            requests,
            handle,
        })
    }

    /// Raw request heads received so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_client(
    mut stream: TcpStream,
    response: MockResponse,
    seen: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut buffer = [0u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        head.extend_from_slice(buffer.get(..read).unwrap_or_default());
    }

    seen.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(String::from_utf8_lossy(&head).into_owned());

    let reply = if response.content_length {
        format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status_line,
            response.body.len(),
            response.body
        )
    } else {
        format!(
            "HTTP/1.1 {}\r\nConnection: close\r\n\r\n{}",
            response.status_line, response.body
        )
    };
    stream.write_all(reply.as_bytes()).await?;
    stream.flush().await?;
    drop(stream.shutdown().await);
    Ok(())
}

/// A URL on a port nothing listens on.
pub(crate) async fn refused_url() -> AppResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

pub(crate) fn parse_url(url: &str) -> AppResult<reqwest::Url> {
    reqwest::Url::parse(url).map_err(|err| AppError::validation(format!("bad url {}: {}", url, err)))
}
