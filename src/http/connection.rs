use std::path::{Path, PathBuf};

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::config::Config;
use crate::http::mime::content_type;
use crate::http::parser::{display_line, parse_request_line, read_header_block, read_line};
use crate::http::resolve::{open_regular_file, resolve_path};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Runs the whole exchange for one accepted connection and closes it.
///
/// Returns `Ok(())` both when a response was sent and when the client left
/// before sending a request line. Any I/O failure or malformed request line
/// is returned as an error; nothing has been written to the client in the
/// malformed case.
pub async fn handle_connection<S>(stream: S, config: &Config) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    Connection::new(stream, &config.root).run().await
}

pub struct Connection<'a, S> {
    stream: BufReader<S>,
    root: &'a Path,
    state: ConnectionState,
}

/// Linear protocol for a single request; no state is ever revisited.
pub enum ConnectionState {
    AwaitRequestLine,
    ConsumeHeaders(Vec<u8>),
    ResolvePath(Vec<u8>),
    BuildResponse(PathBuf),
    SendResponse(ResponseWriter),
    Closed,
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: &'a Path) -> Self {
        Self {
            stream: BufReader::new(stream),
            root,
            state: ConnectionState::AwaitRequestLine,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitRequestLine => match read_line(&mut self.stream).await? {
                    Some(line) => {
                        info!(request = %display_line(&line), "request line");
                        ConnectionState::ConsumeHeaders(line)
                    }
                    None => {
                        debug!("client closed without sending a request");
                        ConnectionState::Closed
                    }
                },

                ConnectionState::ConsumeHeaders(line) => {
                    let headers = read_header_block(&mut self.stream).await?;
                    if !headers.is_terminated() {
                        debug!(lines = headers.lines().len(), "stream ended inside header block");
                    }
                    ConnectionState::ResolvePath(line)
                }

                ConnectionState::ResolvePath(line) => {
                    let request = parse_request_line(&line)?;
                    debug!(
                        method = %request.method,
                        version = request.version.as_deref().unwrap_or("-"),
                        "parsed request line"
                    );
                    ConnectionState::BuildResponse(resolve_path(self.root, &request.path))
                }

                ConnectionState::BuildResponse(path) => {
                    let response = match open_regular_file(&path).await {
                        Some(file) => Response::file(file, content_type(&path)),
                        None => Response::not_found(&path),
                    };

                    info!(
                        status = response.status.as_u16(),
                        content_type = response.content_type,
                        path = %path.display(),
                        "responding"
                    );

                    ConnectionState::SendResponse(ResponseWriter::new(response))
                }

                ConnectionState::SendResponse(mut writer) => {
                    let sent = writer.write_to_stream(&mut self.stream).await?;
                    debug!(bytes = sent, "body sent");

                    // Closing the write half is what delimits the body.
                    self.stream.shutdown().await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }
}
