use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Port used when none is given on the command line.
pub const DEFAULT_PORT: u16 = 6789;

/// Command line: a single optional listen port.
#[derive(Debug, Parser)]
#[command(name = "docroot")]
#[command(about = "Serves files from the working directory over HTTP/1.0")]
pub struct Cli {
    /// Port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Immutable server configuration, shared by the listener and every handler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind (all interfaces by default)
    pub host: IpAddr,
    /// Listen port; 0 lets the OS pick one
    pub port: u16,
    /// Document root that requested paths are appended to
    pub root: PathBuf,
}

impl Config {
    pub fn new(port: u16) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
            root: PathBuf::from("."),
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self::new(cli.port)
    }
}
