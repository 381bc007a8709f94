use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";

/// File bodies are copied to the socket this many bytes at a time.
pub const CHUNK_SIZE: usize = 1024;

fn serialize_head(status: StatusCode, content_type: &str) -> BytesMut {
    let mut buf = BytesMut::with_capacity(64);

    // Status line
    buf.put_slice(
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            status.as_u16(),
            status.reason_phrase()
        )
        .as_bytes(),
    );

    buf.put_slice(b"Content-type: ");
    buf.put_slice(content_type.as_bytes());
    buf.put_slice(b"\r\n");

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    head: BytesMut,
    body: Body,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            head: serialize_head(response.status, response.content_type),
            body: response.body,
        }
    }

    /// Writes the head and then the body, returning the number of body bytes sent.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;

        let sent = match &mut self.body {
            Body::Html(page) => {
                stream.write_all(&page[..]).await?;
                page.len() as u64
            }
            Body::File(file) => {
                let mut chunk = [0u8; CHUNK_SIZE];
                let mut total = 0u64;

                loop {
                    let n = file.read(&mut chunk).await?;
                    if n == 0 {
                        break;
                    }
                    stream.write_all(&chunk[..n]).await?;
                    total += n as u64;
                }

                total
            }
        };

        stream.flush().await?;
        Ok(sent)
    }
}
