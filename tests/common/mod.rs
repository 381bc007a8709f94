//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use docroot::config::Config;
use docroot::server::Listener;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

static NEXT_ROOT: AtomicUsize = AtomicUsize::new(0);

/// A scratch document root, removed on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!(
            "docroot-test-{}-{}",
            std::process::id(),
            NEXT_ROOT.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) {
        let file = self.path.join(name);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file, contents).unwrap();
    }

    pub fn mkdir(&self, name: &str) {
        std::fs::create_dir_all(self.path.join(name)).unwrap();
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Binds on an ephemeral loopback port serving `root` and runs the accept loop
/// in the background.
pub async fn spawn_server(root: &Path) -> SocketAddr {
    let config = Config::new(0)
        .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
        .with_root(root);
    let listener = Listener::bind(config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(listener.run());
    addr
}

/// Sends `raw` and reads until the server closes the connection.
pub async fn exchange(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    out
}

pub async fn get(addr: SocketAddr, path: &str) -> Vec<u8> {
    let request = format!(
        "GET {} HTTP/1.0\r\nHost: localhost\r\nUser-Agent: docroot-test\r\n\r\n",
        path
    );
    exchange(addr, request.as_bytes()).await
}

/// A response split into its status line, content type, and body.
#[derive(Debug)]
pub struct Parsed {
    pub status_line: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

pub fn parse_response(raw: &[u8]) -> Parsed {
    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");

    let head = std::str::from_utf8(&raw[..split]).unwrap();
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap().to_string();
    let content_type = lines
        .next()
        .and_then(|l| l.strip_prefix("Content-type: "))
        .expect("missing Content-type line")
        .to_string();
    assert_eq!(lines.next(), None, "unexpected extra header lines");

    Parsed {
        status_line,
        content_type,
        body: raw[split + 4..].to_vec(),
    }
}
