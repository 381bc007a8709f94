//! docroot - concurrent static file server
//!
//! Serves files below a document root over HTTP/1.0, one request per connection.

pub mod config;
pub mod http;
pub mod server;
