//! HTTP/1.0 request handling.
//!
//! Each accepted connection carries exactly one request and one response,
//! after which the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection state machine (`handle_connection`)
//! - **`parser`**: reads the request line and header block, splits the request line
//! - **`request`**: request line and header block types
//! - **`resolve`**: maps the requested path onto the document root
//! - **`mime`**: content type from file extension
//! - **`response`**: status codes and response bodies (file or 404 page)
//! - **`writer`**: serializes the head and streams the body in 1 KiB chunks
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitRequestLine │ ── stream ended ──┐
//!        └────────┬─────────┘                   │
//!                 ▼                             │
//!        ┌──────────────────┐                   │
//!        │  ConsumeHeaders  │ ← until blank line or end of stream
//!        └────────┬─────────┘                   │
//!                 ▼                             │
//!        ┌──────────────────┐                   │
//!        │   ResolvePath    │ ← root + path     │
//!        └────────┬─────────┘                   │
//!                 ▼                             │
//!        ┌──────────────────┐                   │
//!        │  BuildResponse   │ ← 200 file / 404  │
//!        └────────┬─────────┘                   │
//!                 ▼                             │
//!        ┌──────────────────┐                   │
//!        │   SendResponse   │                   │
//!        └────────┬─────────┘                   │
//!                 ▼                             │
//!        ┌──────────────────┐                   │
//!        │      Closed      │ ◄─────────────────┘
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use docroot::config::Config;
//! use docroot::http::connection::handle_connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let config = std::sync::Arc::new(Config::default());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let config = config.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = handle_connection(socket, &config).await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod resolve;
